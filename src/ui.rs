//! Terminal output for the generator
//!
//! Status goes to stdout, warnings and verbose details to stderr, so
//! `--stdout` output can be piped without noise.

use std::fmt::Display;

use console::Style;

/// How much the generator prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Styled status reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Final result line, e.g. "Wrote AGENTS.md with 3 skills."
    pub fn success(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", Style::new().green().apply_to(message));
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!(
                "{} {}",
                Style::new().bold().yellow().apply_to("warning:"),
                message
            );
        }
    }

    /// Only shown with --verbose
    pub fn detail(&self, message: impl Display) {
        if self.verbosity == Verbosity::Verbose {
            eprintln!("{}", Style::new().dim().apply_to(message));
        }
    }
}
