mod cli;
mod convert_cmd;
mod logging;
mod range_cmd;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToShamsi(args) => convert_cmd::run_to_shamsi(args),
        Command::ToGregorian(args) => convert_cmd::run_to_gregorian(args),
        Command::Range(args) => range_cmd::run(args),
        Command::Today(args) => today_cmd::run(args),
    }
}
