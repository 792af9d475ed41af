//! Generate command implementation
//!
//! Loads the template, discovers and collects skill documents, renders the
//! skills block and then writes, prints or checks the result.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputMode};
use crate::config::GeneratorConfig;
use crate::error::{self, AgentsMdError, Result};
use crate::path_utils;
use crate::skills::{self, Collection};
use crate::template;
use crate::ui::Reporter;

/// A rendered document and the entries that went into it
#[derive(Debug, Clone)]
pub struct Generated {
    pub content: String,
    pub collection: Collection,
}

impl Generated {
    pub fn skill_count(&self) -> usize {
        self.collection.entries.len()
    }
}

/// Run the generator for the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let reporter = Reporter::new(cli.verbosity());
    let root = get_workspace_path(cli.workspace.clone())?;
    let config = GeneratorConfig::load(&root, cli.overrides())?;

    let generated = generate(&config, &reporter)?;
    emit(&config, &generated, cli.mode(), &reporter)
}

/// Get workspace path from CLI argument or current directory
fn get_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| AgentsMdError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

fn load_template(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(error::fs::template_not_found(path.display().to_string()));
    }
    fs::read_to_string(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Render the output document without touching the output file.
pub fn generate(config: &GeneratorConfig, reporter: &Reporter) -> Result<Generated> {
    let template_path = config.template_path();
    reporter.detail(format!(
        "Template: {}",
        path_utils::display_relative(&config.root, &template_path)
    ));
    let template_text = load_template(&template_path)?;

    let discovery = skills::discover_detailed(&config.root, &config.pattern)?;
    for unreachable in &discovery.unreachable {
        reporter.detail(format!("Skipping unreadable entry: {unreachable}"));
    }
    let documents = discovery.documents;
    reporter.detail(format!(
        "Found {} document(s) matching {}",
        documents.len(),
        config.pattern
    ));

    let collection = skills::collect_detailed(&documents);
    for skipped in &collection.skipped {
        reporter.detail(format!(
            "Skipping {}: {}",
            skipped.location, skipped.reason
        ));
    }
    for name in skills::duplicate_names(&collection.entries) {
        reporter.warn(format!("skill name '{name}' is used by more than one skill"));
    }

    let content = template::render(&template_text, &collection.entries);
    Ok(Generated {
        content,
        collection,
    })
}

fn emit(
    config: &GeneratorConfig,
    generated: &Generated,
    mode: OutputMode,
    reporter: &Reporter,
) -> Result<()> {
    let output_path = config.output_path();
    let shown = path_utils::display_relative(&config.root, &output_path);
    let count = generated.skill_count();

    match mode {
        OutputMode::Write => {
            write_output(&output_path, &generated.content)?;
            reporter.success(format!("Wrote {shown} with {count} skills."));
        }
        OutputMode::Stdout => {
            write_stdout(&mut io::stdout().lock(), &generated.content)?;
            reporter.detail(format!("Rendered {count} skills."));
        }
        OutputMode::Check => {
            if !is_up_to_date(&output_path, &generated.content) {
                return Err(error::fs::out_of_date(shown));
            }
            reporter.success(format!("{shown} is up to date with {count} skills."));
        }
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
    }
    fs::write(path, content)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

fn write_stdout(out: &mut impl Write, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AgentsMdError::IoError {
            message: format!("Failed to write to stdout: {e}"),
        })
}

/// A missing or unreadable output counts as stale.
fn is_up_to_date(path: &Path, content: &str) -> bool {
    fs::read_to_string(path).is_ok_and(|existing| existing == content)
}
