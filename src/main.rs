#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "dynvisit", about = "Dispatch and breadth-first traversal over dynamic geometry values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Visit every leaf in breadth-first order.
	Walk(cmd::walk::Args),
	/// List and validate type catalogs.
	Catalog(cmd::catalog::Args),
	/// Clear a value in place and count leaves before and after.
	Clear(cmd::clear::Args),
	/// Double-dispatch over two values.
	Pair(cmd::pair::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> dynvisit::visit::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Walk(args) => cmd::walk::run(args),
		Commands::Catalog(args) => cmd::catalog::run(args),
		Commands::Clear(args) => cmd::clear::run(args),
		Commands::Pair(args) => cmd::pair::run(args),
	}
}
