use std::path::PathBuf;

use dynvisit::visit::{Element, PairRule, Result, SideOf, Visited, dispatch_two};

use crate::cmd::family::{FamilyArg, load, with_loaded};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Left tagged geometry JSON file.
	pub left: PathBuf,
	/// Right tagged geometry JSON file.
	pub right: PathBuf,
	#[arg(long, value_enum, default_value = "tagged")]
	pub family: FamilyArg,
	/// Family for the right value; defaults to `--family`.
	#[arg(long = "right-family", value_enum)]
	pub right_family: Option<FamilyArg>,
	#[arg(long)]
	pub json: bool,
}

/// Double-dispatch a callback over two geometry files and report the resolved pair.
pub fn run(args: Args) -> Result<()> {
	let Args {
		left,
		right,
		family,
		right_family,
		json,
	} = args;
	let right_family = right_family.unwrap_or(family);

	let left = load(&left, family)?;
	let right = load(&right, right_family)?;
	let pair = with_loaded!(&left, left => with_loaded!(&right, right => resolve(left, right)))?;

	if json {
		return emit_json(&PairJson {
			left: SideJson {
				family,
				value: pair.left.0,
				resolved: pair.left.1,
			},
			right: SideJson {
				family: right_family,
				value: pair.right.0,
				resolved: pair.right.1,
			},
			calls: pair.calls,
		});
	}

	println!("left: {} ({:?}) -> {}", pair.left.0, family, pair.left.1);
	println!("right: {} ({:?}) -> {}", pair.right.0, right_family, pair.right.1);
	println!("calls: {}", pair.calls);
	Ok(())
}

struct Resolved {
	left: (&'static str, &'static str),
	right: (&'static str, &'static str),
	calls: usize,
}

fn resolve<A, B>(left: &A, right: &B) -> Result<Resolved>
where
	A: Element,
	B: Element,
	(SideOf<A>, SideOf<B>): PairRule<A, B>,
{
	let mut calls = 0;
	let mut names = ("", "");
	dispatch_two(
		&mut |a: Visited<'_>, b: Visited<'_>| {
			calls += 1;
			names = (a.name(), b.name());
		},
		left,
		right,
	)?;

	Ok(Resolved {
		left: (A::NAME, names.0),
		right: (B::NAME, names.1),
		calls,
	})
}

#[derive(serde::Serialize)]
struct SideJson {
	family: FamilyArg,
	value: &'static str,
	resolved: &'static str,
}

#[derive(serde::Serialize)]
struct PairJson {
	left: SideJson,
	right: SideJson,
	calls: usize,
}
