//! CLI integration tests using the REAL agentsmd binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn agentsmd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("agentsmd").unwrap();
    // Always ignore any developer AGENTSMD_WORKSPACE overrides during tests
    cmd.env_remove("AGENTSMD_WORKSPACE");
    cmd
}

fn sample_workspace() -> common::TestWorkspace {
    let workspace = common::TestWorkspace::new();
    workspace.write_template();
    workspace.create_skill("tools/skills/zeta", "Zeta", "Last alphabetically");
    workspace.create_skill("docs/skills/alpha", "alpha", "First alphabetically");
    workspace.create_skill("docs/skills/beta", "Beta", "In the middle");
    workspace
}

#[test]
fn test_help_output() {
    agentsmd_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AGENTS.md"))
        .stdout(predicate::str::contains("--check"))
        .stdout(predicate::str::contains("--template"));
}

#[test]
fn test_version_output() {
    agentsmd_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agentsmd"));
}

#[test]
fn test_generate_writes_agents_md() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote AGENTS.md with 3 skills."));

    assert_eq!(
        workspace.read_file("AGENTS.md"),
        "# AGENTS\n\n## Skills\n\n\
         - **alpha** (docs/skills/alpha): First alphabetically\n\
         - **Beta** (docs/skills/beta): In the middle\n\
         - **Zeta** (tools/skills/zeta): Last alphabetically\n\n"
    );
}

#[test]
fn test_generate_with_workspace_flag() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .args(["-w", workspace.path.to_str().unwrap()])
        .assert()
        .success();

    assert!(workspace.file_exists("AGENTS.md"));
}

#[test]
fn test_generate_with_workspace_env() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .env("AGENTSMD_WORKSPACE", &workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 skills"));
}

#[test]
fn test_generate_skips_incomplete_skills() {
    let workspace = sample_workspace();
    workspace.write_file("docs/skills/draft/SKILL.md", "---\nname: draft\n---\n");
    workspace.write_file("docs/skills/plain/SKILL.md", "# No frontmatter\n");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("with 3 skills"))
        .stderr(predicate::str::contains("docs/skills/draft"))
        .stderr(predicate::str::contains("missing 'description'"));

    assert!(!workspace.read_file("AGENTS.md").contains("draft"));
}

#[test]
fn test_generate_no_skills_empties_block() {
    let workspace = common::TestWorkspace::new();
    workspace.write_template();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("with 0 skills"));

    assert_eq!(workspace.read_file("AGENTS.md"), "# AGENTS\n\n## Skills\n\n\n");
}

#[test]
fn test_missing_template_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.create_skill("docs/skills/alpha", "alpha", "First");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template not found"))
        .stderr(predicate::str::contains("AGENTS_TEMPLATE.md"));

    assert!(!workspace.file_exists("AGENTS.md"));
}

#[test]
fn test_missing_workspace_fails() {
    let workspace = common::TestWorkspace::new();
    let missing = workspace.path.join("does-not-exist");

    agentsmd_cmd()
        .args(["--workspace", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace not found"));
}

#[test]
fn test_custom_template_and_output() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "docs/CUSTOM.md",
        "Skills:{{#skills}} {{name}}{{/skills}}.\n",
    );
    workspace.create_skill("a/skills/one", "one", "1");
    workspace.create_skill("b/skills/two", "two", "2");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .args(["-t", "docs/CUSTOM.md", "-o", "out/SKILLS.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out/SKILLS.md with 2 skills."));

    assert_eq!(workspace.read_file("out/SKILLS.md"), "Skills: one\n two.\n");
}

#[test]
fn test_config_file_is_used() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("agentsmd.yaml", "template: T.md\noutput: O.md\npattern: \"**/SKILL.md\"\n");
    workspace.write_file("T.md", "{{#skills}}{{path}}{{/skills}}");
    workspace.create_skill("deep/nested/skills/x", "x", "y");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .success();

    assert_eq!(workspace.read_file("O.md"), "deep/nested/skills/x");
}

#[test]
fn test_invalid_config_file_fails() {
    let workspace = sample_workspace();
    workspace.write_file("agentsmd.yaml", "unknown_key: true\n");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("agentsmd.yaml"));
}

#[test]
fn test_stdout_does_not_write() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# AGENTS"))
        .stdout(predicate::str::contains("- **alpha** (docs/skills/alpha)"));

    assert!(!workspace.file_exists("AGENTS.md"));
}

#[test]
fn test_check_detects_stale_output() {
    let workspace = sample_workspace();
    workspace.write_file("AGENTS.md", "stale\n");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AGENTS.md is out of date"));

    assert_eq!(workspace.read_file("AGENTS.md"), "stale\n");
}

#[test]
fn test_check_passes_after_generate() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .success();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_quiet_suppresses_status() {
    let workspace = sample_workspace();

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(workspace.file_exists("AGENTS.md"));
}

#[test]
fn test_duplicate_names_warn_but_render_both() {
    let workspace = sample_workspace();
    workspace.create_skill("other/skills/alpha", "alpha", "Second alpha");

    agentsmd_cmd()
        .current_dir(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("with 4 skills"))
        .stderr(predicate::str::contains("'alpha'"));

    let output = workspace.read_file("AGENTS.md");
    assert!(output.contains("docs/skills/alpha"));
    assert!(output.contains("other/skills/alpha"));
}

#[test]
fn test_rerun_is_idempotent() {
    let workspace = sample_workspace();

    agentsmd_cmd().current_dir(&workspace.path).assert().success();
    let first = workspace.read_file("AGENTS.md");
    agentsmd_cmd().current_dir(&workspace.path).assert().success();

    assert_eq!(workspace.read_file("AGENTS.md"), first);
}
