mod cli;
mod commands;

use clap::Parser;
use cli::Snipkit;
use commands::handle_command;
use std::process;

fn main() {
    let args = Snipkit::parse();

    let Some(command) = args.commands else {
        eprintln!("No command given; try --help");
        process::exit(1);
    };

    if let Err(e) = handle_command(args.config_file, command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
