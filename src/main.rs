//! gitpack - minimal manifest-driven package manager
//!
//! Fetches a repository archive from a code-hosting endpoint, locates the
//! gitpack manifest inside it, and executes the install (`add`) or remove
//! (`rm`) actions the manifest declares.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod fetch;
mod manifest;
mod pipeline;
mod placeholder;
mod progress;
mod refspec;
mod temp;
mod ui;
mod workdir;

use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let result = match &cli.command {
        Commands::Add(args) => commands::add::run(&config, args),
        Commands::Rm(args) => commands::rm::run(&config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
