//! agentsmd - generate AGENTS.md from SKILL.md frontmatter
//!
//! Loads the template, collects every skill in the workspace and writes the
//! rendered document.

use clap::Parser;
use miette::Diagnostic;

use agentsmd::cli::Cli;
use agentsmd::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::generate::run(&cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
