use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use super::*;
use crate::error::JetsongError;
use crate::test_fixtures::{create_registry_root, fixture_registry};

fn settings(root: &Path, home: &Path) -> Settings {
    Settings {
        root: root.to_path_buf(),
        config_dir: home.join(".config/jetsong-mcp"),
        home_dir: home.to_path_buf(),
        runtime: "/usr/bin/node".to_string(),
        namespace_prefix: "jetsong-".to_string(),
    }
}

fn token(value: &str) -> EnvInput {
    let mut input = EnvInput::new();
    input.insert("GITLAB_TOKEN", value);
    input
}

#[test]
fn test_install_skill_creates_link() {
    let (temp, root) = create_registry_root();
    let project = temp.path().join("project");
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);

    let link = installer.install_skill("code-review", &project).unwrap();

    assert_eq!(link, project.join(".claude/commands/code-review.md"));
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_link(&link).unwrap(),
        root.join("skills/code-review/SKILL.md")
    );
    assert_eq!(fs::read_to_string(&link).unwrap(), "# Code Review\n");
}

#[test]
fn test_second_skill_install_is_already_exists() {
    let (temp, root) = create_registry_root();
    let project = temp.path().join("project");
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);

    let link = installer.install_skill("code-review", &project).unwrap();
    let target_before = fs::read_link(&link).unwrap();

    let err = installer.install_skill("code-review", &project).unwrap_err();

    assert!(matches!(err, JetsongError::AlreadyExists { .. }));
    assert_eq!(fs::read_link(&link).unwrap(), target_before);
}

#[cfg(unix)]
#[test]
fn test_dangling_link_counts_as_existing() {
    let (temp, root) = create_registry_root();
    let project = temp.path().join("project");
    let commands = project.join(".claude/commands");
    fs::create_dir_all(&commands).unwrap();
    std::os::unix::fs::symlink(temp.path().join("gone.md"), commands.join("code-review.md"))
        .unwrap();

    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let err = Installer::new(&registry, &settings)
        .install_skill("code-review", &project)
        .unwrap_err();

    assert!(matches!(err, JetsongError::AlreadyExists { .. }));
}

#[test]
fn test_link_onto_existing_entry_is_already_exists() {
    let (temp, root) = create_registry_root();
    let link = temp.path().join("code-review.md");
    fs::write(&link, "written by someone else").unwrap();

    let err = link_skill(&root.join("skills/code-review/SKILL.md"), &link).unwrap_err();

    assert!(matches!(err, JetsongError::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(&link).unwrap(), "written by someone else");
}

#[test]
fn test_missing_skill_document() {
    let (temp, root) = create_registry_root();
    fs::remove_file(root.join("skills/code-review/SKILL.md")).unwrap();
    let project = temp.path().join("project");

    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let err = Installer::new(&registry, &settings)
        .install_skill("code-review", &project)
        .unwrap_err();

    assert!(matches!(err, JetsongError::SourceNotFound { .. }));
    assert!(!project.join(".claude/commands/code-review.md").exists());
}

#[test]
fn test_bridge_is_not_a_skill() {
    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let err = Installer::new(&registry, &settings)
        .install_skill("gitlab", temp.path())
        .unwrap_err();
    assert!(matches!(err, JetsongError::InvalidInput { .. }));
}

#[test]
fn test_install_bridge_for_claude_code() {
    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);

    let config = installer
        .install_bridge("gitlab", HostId::ClaudeCode, &token("glpat-1"))
        .unwrap();

    assert_eq!(config.written, None);
    assert_eq!(
        config.secrets,
        temp.path().join(".config/jetsong-mcp/.env.gitlab")
    );
    assert_eq!(
        fs::read_to_string(&config.secrets).unwrap(),
        "GITLAB_URL=https://gitlab.example.com\nGITLAB_TOKEN=glpat-1\n"
    );

    let doc: Value = serde_json::from_str(&config.text).unwrap();
    let server = &doc["mcpServers"]["jetsong-gitlab"];
    assert_eq!(server["command"], json!("node"));
    assert_eq!(server["env"]["GITLAB_TOKEN"], json!("glpat-1"));
}

#[cfg(unix)]
#[test]
fn test_secret_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let config = Installer::new(&registry, &settings)
        .install_bridge("loki", HostId::ClaudeCode, &EnvInput::new())
        .unwrap();

    let mode = fs::metadata(&config.secrets).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_install_bridge_merges_cursor_file() {
    let (temp, root) = create_registry_root();
    let cursor_file = temp.path().join(".cursor/mcp.json");
    fs::create_dir_all(cursor_file.parent().unwrap()).unwrap();
    fs::write(
        &cursor_file,
        r#"{"mcpServers":{"existing":{"command":"x"}},"otherKey":42}"#,
    )
    .unwrap();

    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let config = Installer::new(&registry, &settings)
        .install_bridge("gitlab", HostId::Cursor, &token("t"))
        .unwrap();

    assert_eq!(config.written.as_deref(), Some(cursor_file.as_path()));
    let doc: Value = serde_json::from_str(&fs::read_to_string(&cursor_file).unwrap()).unwrap();
    assert_eq!(doc["otherKey"], json!(42));
    assert_eq!(doc["mcpServers"]["existing"]["command"], json!("x"));
    assert_eq!(
        doc["mcpServers"]["jetsong-gitlab"]["command"],
        json!("/usr/bin/node")
    );
    assert_eq!(
        doc["mcpServers"]["jetsong-gitlab"]["args"][0],
        json!(
            root.join("mcp/gitlab-mcp/dist/gitlab-mcp/src/index.js")
                .display()
                .to_string()
        )
    );
}

#[test]
fn test_install_bridge_for_codex_renders_toml() {
    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());

    let config = Installer::new(&registry, &settings)
        .install_bridge("loki", HostId::Codex, &EnvInput::new())
        .unwrap();

    assert!(config.text.starts_with("[mcp_servers.jetsong-loki]\n"));
    assert!(config.text.contains("command = \"/usr/bin/node\""));
    assert!(!config.text.contains(".env]"));
    assert_eq!(config.written, None);
}

#[test]
fn test_display_only_host_has_no_side_effects() {
    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);

    let err = installer
        .install_bridge("gitlab", HostId::Opencode, &token("t"))
        .unwrap_err();

    assert!(matches!(err, JetsongError::UnsupportedTarget { .. }));
    assert!(!installer.secret_store().path_for("gitlab").exists());
}

#[test]
fn test_failed_merge_restores_previous_secrets() {
    let (temp, root) = create_registry_root();
    let cursor_file = temp.path().join(".cursor/mcp.json");
    fs::create_dir_all(cursor_file.parent().unwrap()).unwrap();
    fs::write(&cursor_file, "[\"not an object\"]").unwrap();

    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);
    let secrets: PathBuf = installer.secret_store().path_for("gitlab");
    fs::create_dir_all(secrets.parent().unwrap()).unwrap();
    fs::write(&secrets, "GITLAB_TOKEN=previous\n").unwrap();

    let err = installer
        .install_bridge("gitlab", HostId::Cursor, &token("new"))
        .unwrap_err();

    assert!(matches!(err, JetsongError::ConfigParseFailed { .. }));
    assert_eq!(
        fs::read_to_string(&secrets).unwrap(),
        "GITLAB_TOKEN=previous\n"
    );
    assert_eq!(
        fs::read_to_string(&cursor_file).unwrap(),
        "[\"not an object\"]"
    );
}

#[test]
fn test_failed_merge_removes_new_secrets() {
    let (temp, root) = create_registry_root();
    let cursor_file = temp.path().join(".cursor/mcp.json");
    fs::create_dir_all(cursor_file.parent().unwrap()).unwrap();
    fs::write(&cursor_file, "{broken").unwrap();

    let registry = fixture_registry();
    let settings = settings(&root, temp.path());
    let installer = Installer::new(&registry, &settings);

    assert!(
        installer
            .install_bridge("loki", HostId::Cursor, &EnvInput::new())
            .is_err()
    );
    assert!(!installer.secret_store().path_for("loki").exists());
}

#[test]
fn test_incompatible_host_still_installs() {
    let (temp, root) = create_registry_root();
    let registry = fixture_registry();
    let settings = settings(&root, temp.path());

    // jira is not marked compatible with codex
    let config = Installer::new(&registry, &settings)
        .install_bridge("jira", HostId::Codex, &EnvInput::new())
        .unwrap();

    assert!(config.text.contains("[mcp_servers.jetsong-jira.env]"));
}
