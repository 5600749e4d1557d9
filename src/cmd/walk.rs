use std::path::PathBuf;

use dynvisit::visit::{Element, Result, Traversal, Visited, traverse_breadth_first};

use crate::cmd::family::{FamilyArg, load, with_loaded};
use crate::cmd::util::{emit_json, leaf_summary, leaf_value};

#[derive(clap::Args)]
pub struct Args {
	/// Tagged geometry JSON file.
	pub path: PathBuf,
	#[arg(long, value_enum, default_value = "tagged")]
	pub family: FamilyArg,
	#[arg(long)]
	pub json: bool,
}

/// Print every leaf of a geometry file in breadth-first order.
pub fn run(args: Args) -> Result<()> {
	let Args { path, family, json } = args;

	let loaded = load(&path, family)?;
	with_loaded!(&loaded, root => report(root, family, json))
}

fn report<'a, G: Element>(root: &'a G, family: FamilyArg, json: bool) -> Result<()> {
	let mut leaves = Vec::new();
	let traversal = traverse_breadth_first(&mut |item: Visited<'a>| leaves.push(item), root)?;

	if json {
		let mut rows = Vec::with_capacity(leaves.len());
		for item in &leaves {
			rows.push(LeafJson {
				name: item.name(),
				value: leaf_value(*item)?,
			});
		}
		return emit_json(&WalkJson {
			family,
			root: G::NAME,
			leaves: rows,
			levels: traversal.levels,
			collections: traversal.collections,
		});
	}

	print_summary(G::NAME, family, &traversal);
	for (idx, item) in leaves.iter().enumerate() {
		println!("{idx}\t{}\t{}", item.name(), leaf_summary(*item));
	}

	Ok(())
}

fn print_summary(root: &str, family: FamilyArg, traversal: &Traversal) {
	println!("family: {family:?}");
	println!("root: {root}");
	println!("leaves: {}", traversal.leaves());
	println!("collections: {}", traversal.collections);
	let levels: Vec<String> = traversal.levels.iter().map(ToString::to_string).collect();
	println!("levels: {}", levels.join(" "));
}

#[derive(serde::Serialize)]
struct LeafJson {
	name: &'static str,
	value: serde_json::Value,
}

#[derive(serde::Serialize)]
struct WalkJson {
	family: FamilyArg,
	root: &'static str,
	leaves: Vec<LeafJson>,
	levels: Vec<usize>,
	collections: usize,
}
