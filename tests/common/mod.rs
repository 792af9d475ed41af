//! Common test utilities for agentsmd integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Template used by most integration tests
#[allow(dead_code)]
pub const AGENTS_TEMPLATE: &str = "# AGENTS\n\n## Skills\n\n{{#skills}}\n- **{{name}}** ({{path}}): {{description}}\n{{/skills}}\n";

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write the default template to scripts/AGENTS_TEMPLATE.md
    #[allow(dead_code)]
    pub fn write_template(&self) {
        self.write_file("scripts/AGENTS_TEMPLATE.md", AGENTS_TEMPLATE);
    }

    /// Create a skill directory with a SKILL.md carrying `name` and `description`
    #[allow(dead_code)]
    pub fn create_skill(&self, dir: &str, name: &str, description: &str) {
        self.write_file(
            &format!("{dir}/SKILL.md"),
            &format!("---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n"),
        );
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
