use std::path::Path;

use dynvisit::geometry::{AnyGeometry, FigureHandle, Geometry, ShapeHandle};
use dynvisit::visit::Result;

/// Encoding used to hold the loaded geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyArg {
	/// Closed tagged enum.
	Tagged,
	/// `Box<dyn Any>` resolved by catalog downcast.
	Erased,
	/// Trait objects with a `which()` discriminant.
	Shape,
	/// Trait objects with a virtual `accept`.
	Figure,
}

impl FamilyArg {
	/// Every family in listing order.
	pub const ALL: [Self; 4] = [Self::Tagged, Self::Erased, Self::Shape, Self::Figure];
}

/// A loaded geometry held in the selected encoding.
#[derive(Debug)]
pub enum Loaded {
	/// Tagged enum value.
	Tagged(Geometry),
	/// Type-erased value.
	Erased(AnyGeometry),
	/// `which()` hierarchy value.
	Shape(ShapeHandle),
	/// `accept` hierarchy value.
	Figure(FigureHandle),
}

/// Bind the value held by a [`Loaded`] to `$root` and evaluate `$body` for its concrete type.
macro_rules! with_loaded {
	($loaded:expr, $root:ident => $body:expr) => {
		match $loaded {
			$crate::cmd::family::Loaded::Tagged($root) => $body,
			$crate::cmd::family::Loaded::Erased($root) => $body,
			$crate::cmd::family::Loaded::Shape($root) => $body,
			$crate::cmd::family::Loaded::Figure($root) => $body,
		}
	};
}

pub(crate) use with_loaded;

/// Parse a tagged geometry JSON file.
pub fn read_geometry(path: &Path) -> Result<Geometry> {
	let text = std::fs::read_to_string(path)?;
	Ok(serde_json::from_str(&text)?)
}

/// Re-encode `geometry` in `family`.
pub fn convert(family: FamilyArg, geometry: &Geometry) -> Result<Loaded> {
	Ok(match family {
		FamilyArg::Tagged => Loaded::Tagged(geometry.clone()),
		FamilyArg::Erased => Loaded::Erased(AnyGeometry::from(geometry)),
		FamilyArg::Shape => Loaded::Shape(ShapeHandle::try_from(geometry)?),
		FamilyArg::Figure => Loaded::Figure(FigureHandle::try_from(geometry)?),
	})
}

/// Read `path` and re-encode it in `family`.
pub fn load(path: &Path, family: FamilyArg) -> Result<Loaded> {
	convert(family, &read_geometry(path)?)
}

#[cfg(test)]
mod tests {
	use dynvisit::geometry::{Geometry, GeometryCollection, Point, Polygon};
	use dynvisit::visit::{Element, VisitError};

	use super::{FamilyArg, Loaded, convert};

	fn root_name(loaded: &Loaded) -> &'static str {
		fn name_of<G: Element>(_: &G) -> &'static str {
			G::NAME
		}
		with_loaded!(loaded, root => name_of(root))
	}

	#[test]
	fn converts_into_every_family() {
		let geometry = Geometry::from(GeometryCollection::from(vec![Geometry::from(Point::default())]));
		let names: Vec<_> = FamilyArg::ALL
			.into_iter()
			.map(|family| root_name(&convert(family, &geometry).expect("convertible")))
			.collect();
		assert_eq!(names, ["Geometry", "AnyGeometry", "ShapeHandle", "FigureHandle"]);
	}

	#[test]
	fn hierarchy_families_reject_polygons() {
		let geometry = Geometry::from(Polygon::default());
		assert!(convert(FamilyArg::Erased, &geometry).is_ok());
		assert!(matches!(
			convert(FamilyArg::Figure, &geometry),
			Err(VisitError::UnsupportedAlternative { family: "FigureHandle", .. })
		));
	}
}
