//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::config::Overrides;
use crate::ui::Verbosity;

/// agentsmd - generate AGENTS.md from skill frontmatter
///
/// Finds every SKILL.md in the workspace, reads its frontmatter and renders
/// the skills list into the AGENTS.md template.
#[derive(Parser, Debug)]
#[command(
    name = "agentsmd",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate AGENTS.md from SKILL.md frontmatter",
    long_about = "Discovers skill documents (*/skills/*/SKILL.md by default), reads the \
                  `name` and `description` from their frontmatter and renders them into \
                  the {{#skills}} block of the template.",
    after_help = "EXAMPLES:\n  \
                  Regenerate AGENTS.md in the current repository:\n    agentsmd\n\n\
                  Use another template and output:\n    agentsmd -t docs/TEMPLATE.md -o docs/AGENTS.md\n\n\
                  Fail in CI when AGENTS.md is stale:\n    agentsmd --check\n\n\
                  Preview without writing:\n    agentsmd --stdout"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', env = "AGENTSMD_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Template file, relative to the workspace [default: scripts/AGENTS_TEMPLATE.md]
    #[arg(long, short = 't', value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output file, relative to the workspace [default: AGENTS.md]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Glob selecting skill documents [default: */skills/*/SKILL.md]
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Exit with an error if the output file is not up to date; writes nothing
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the rendered document instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// What to do with the rendered document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Write,
    Check,
    Stdout,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            template: self.template.clone(),
            output: self.output.clone(),
            pattern: self.pattern.clone(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        if self.check {
            OutputMode::Check
        } else if self.stdout {
            OutputMode::Stdout
        } else {
            OutputMode::Write
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}
