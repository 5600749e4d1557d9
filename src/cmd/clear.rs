use std::path::PathBuf;

use dynvisit::visit::{Element, Result, Visited, clear, traverse_breadth_first};

use crate::cmd::family::{FamilyArg, load, with_loaded};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Tagged geometry JSON file.
	pub path: PathBuf,
	#[arg(long, value_enum, default_value = "tagged")]
	pub family: FamilyArg,
	#[arg(long)]
	pub json: bool,
}

/// Clear a loaded geometry in place and report leaf counts before and after.
pub fn run(args: Args) -> Result<()> {
	let Args { path, family, json } = args;

	let mut loaded = load(&path, family)?;
	let counts = with_loaded!(&mut loaded, root => clear_counts(root))?;

	if json {
		return emit_json(&ClearJson {
			family,
			root: counts.root,
			before: counts.before,
			after: counts.after,
		});
	}

	println!("family: {family:?}");
	println!("root: {}", counts.root);
	println!("leaves_before: {}", counts.before);
	println!("leaves_after: {}", counts.after);
	Ok(())
}

struct Counts {
	root: &'static str,
	before: usize,
	after: usize,
}

fn clear_counts<G: Element>(root: &mut G) -> Result<Counts> {
	let before = count_leaves(root)?;
	clear(root)?;
	let after = count_leaves(root)?;
	Ok(Counts { root: G::NAME, before, after })
}

fn count_leaves<G: Element>(root: &G) -> Result<usize> {
	Ok(traverse_breadth_first(&mut |_: Visited<'_>| {}, root)?.leaves())
}

#[derive(serde::Serialize)]
struct ClearJson {
	family: FamilyArg,
	root: &'static str,
	before: usize,
	after: usize,
}
