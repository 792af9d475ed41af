//! Generator configuration
//!
//! Settings come from three layers, highest precedence first:
//! command-line flags, the optional `agentsmd.yaml` at the workspace root,
//! and built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, AgentsMdError, Result};
use crate::path_utils;
use crate::skills::DEFAULT_PATTERN;

/// Config filename, looked up at the workspace root
pub const CONFIG_FILE: &str = "agentsmd.yaml";

/// Default template path, relative to the workspace root
pub const DEFAULT_TEMPLATE: &str = "scripts/AGENTS_TEMPLATE.md";

/// Default output path, relative to the workspace root
pub const DEFAULT_OUTPUT: &str = "AGENTS.md";

/// Contents of `agentsmd.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pattern: Option<String>,
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// Values given on the command line. `None` falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pattern: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Workspace root; skill locations are relative to it
    pub root: PathBuf,
    /// Template path, absolute or relative to `root`
    pub template: PathBuf,
    /// Output path, absolute or relative to `root`
    pub output: PathBuf,
    /// Glob selecting skill documents, relative to `root`
    pub pattern: String,
}

impl GeneratorConfig {
    /// Defaults for a workspace root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Load the config file from `root` (if present) and apply `overrides`.
    pub fn load(root: &Path, overrides: Overrides) -> Result<Self> {
        if !root.is_dir() {
            return Err(error::config::workspace_not_found(
                root.display().to_string(),
            ));
        }
        let file = load_config_file(root)?;
        Self::new(root).merge(file, overrides)
    }

    fn merge(mut self, file: ConfigFile, overrides: Overrides) -> Result<Self> {
        if let Some(template) = overrides.template.or(file.template) {
            self.template = template;
        }
        if let Some(output) = overrides.output.or(file.output) {
            self.output = output;
        }
        if let Some(pattern) = overrides.pattern.or(file.pattern) {
            self.pattern = pattern;
        }

        if self.pattern.trim().is_empty() {
            return Err(error::config::invalid("pattern must not be empty"));
        }
        Ok(self)
    }

    pub fn template_path(&self) -> PathBuf {
        path_utils::resolve(&self.root, &self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        path_utils::resolve(&self.root, &self.output)
    }
}

/// Read `agentsmd.yaml` from `root`, defaulting when it does not exist.
fn load_config_file(root: &Path) -> Result<ConfigFile> {
    let path = root.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

    ConfigFile::from_yaml(&content).map_err(|e| match e {
        AgentsMdError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
