mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Context;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(&cli)?;
    match cli.command {
        Command::Age(args) => commands::age(&ctx, args),
        Command::Calendar(args) => commands::calendar(&ctx, args),
        Command::Render(args) => commands::render(&ctx, args),
        Command::Picker => commands::picker(&ctx),
    }
}
