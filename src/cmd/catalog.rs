use dynvisit::geometry::{AnyCollection, AnyGeometry, FigureCollection, FigureHandle, Geometry, GeometryCollection, ShapeCollection, ShapeHandle};
use dynvisit::visit::{Collection, Dynamic, Kind, Result};

use crate::cmd::family::FamilyArg;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Limit the listing to one family.
	#[arg(long, value_enum)]
	pub family: Option<FamilyArg>,
	#[arg(long)]
	pub json: bool,
}

/// List and validate the type catalog of each reference family.
pub fn run(args: Args) -> Result<()> {
	let Args { family, json } = args;

	let families = match family {
		Some(family) => vec![family],
		None => FamilyArg::ALL.to_vec(),
	};
	let listings = families.into_iter().map(describe).collect::<Result<Vec<_>>>()?;

	if json {
		return emit_json(&listings);
	}

	for listing in &listings {
		println!("{:?}: {} / {}", listing.family, listing.element, listing.collection);
		for alternative in &listing.alternatives {
			println!("  {}\t{}\t{:?}", alternative.index, alternative.name, alternative.kind);
		}
	}

	Ok(())
}

/// Validated catalog listing for `family`.
pub fn describe(family: FamilyArg) -> Result<CatalogJson> {
	match family {
		FamilyArg::Tagged => listing::<Geometry, GeometryCollection>(family),
		FamilyArg::Erased => listing::<AnyGeometry, AnyCollection>(family),
		FamilyArg::Shape => listing::<ShapeHandle, ShapeCollection>(family),
		FamilyArg::Figure => listing::<FigureHandle, FigureCollection>(family),
	}
}

fn listing<D: Dynamic, C: Collection>(family: FamilyArg) -> Result<CatalogJson> {
	D::CATALOG.validate(D::NAME)?;
	C::CATALOG.validate(C::NAME)?;

	Ok(CatalogJson {
		family,
		element: D::NAME,
		collection: C::NAME,
		alternatives: D::CATALOG
			.alternatives()
			.iter()
			.enumerate()
			.map(|(index, alternative)| AlternativeJson {
				index,
				name: alternative.name,
				kind: alternative.kind,
			})
			.collect(),
	})
}

/// One family's catalog.
#[derive(Debug, serde::Serialize)]
pub struct CatalogJson {
	family: FamilyArg,
	element: &'static str,
	collection: &'static str,
	alternatives: Vec<AlternativeJson>,
}

#[derive(Debug, serde::Serialize)]
struct AlternativeJson {
	index: usize,
	name: &'static str,
	kind: Kind,
}
