use clap::Parser;
use fatex::cli::{Cli, Commands};
use fatex::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => fatex::cli::build::run(args, &printer)?,
        Commands::Fetch(args) => fatex::cli::fetch::run(args, &printer)?,
        Commands::Init(args) => fatex::cli::init::run(args, &printer)?,
        Commands::List(args) => fatex::cli::list::run(args, &printer)?,
        Commands::Validate(args) => fatex::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => fatex::cli::completions::run(args)?,
    }

    Ok(())
}
