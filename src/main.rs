use clap::Parser;
use miette::Result;
use strokify::cli::{Cli, Commands};
use strokify::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Draw(args) => strokify::cli::draw::run(args, &printer)?,
        Commands::Plan(args) => strokify::cli::plan::run(args, &printer)?,
        Commands::Palette(args) => strokify::cli::palette::run(args, &printer)?,
        Commands::Init(args) => strokify::cli::init::run(args, &printer)?,
        Commands::Completions(args) => strokify::cli::completions::run(args)?,
    }

    Ok(())
}
