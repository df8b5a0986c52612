//! Test fixtures shared by unit tests.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_registry_root, fixture_registry};
//!
//! #[test]
//! fn my_test() {
//!     // Registry root with registry.json and skills/code-review/SKILL.md
//!     let (temp, root) = create_registry_root();
//!
//!     // Parsed catalog without touching the disk
//!     let registry = fixture_registry();
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::registry::Registry;

/// Catalog with three bridges and one skill
pub const CATALOG_JSON: &str = r#"{
  "generated": "2026-02-11T09:00:00.000Z",
  "packages": [
    {
      "id": "gitlab",
      "type": "mcp",
      "name": "GitLab",
      "description": "Review merge requests and pipelines",
      "version": "1.1.0",
      "author": "platform-team",
      "tags": ["gitlab", "merge", "pipeline"],
      "compatibility": {"claude-code": true, "cursor": true, "codex": true, "opencode": false, "antigravity": false},
      "envFields": [
        {"key": "GITLAB_URL", "default": "https://gitlab.example.com", "editable": false},
        {"key": "GITLAB_TOKEN", "placeholder": "glpat-xxxx", "sensitive": true}
      ],
      "tokenType": "personal",
      "tokenGuide": "https://gitlab.example.com/-/user_settings/personal_access_tokens",
      "stats": {"installs": 12, "stars": 4},
      "changelog": [
        {"version": "1.1.0", "date": "2026-02-10", "changes": ["Pipeline job logs"]},
        {"version": "1.0.0", "date": "2026-01-20", "changes": ["Initial release"]}
      ],
      "path": "mcp/gitlab-mcp"
    },
    {
      "id": "jira",
      "type": "mcp",
      "name": "Jira",
      "description": "Search and update issues",
      "version": "1.0.0",
      "author": "platform-team",
      "tags": ["jira", "issues"],
      "compatibility": {"claude-code": true, "cursor": true, "codex": false, "opencode": false, "antigravity": false},
      "envFields": [
        {"key": "JIRA_URL", "default": "https://jira.example.com"},
        {"key": "JIRA_EMAIL", "placeholder": "you@example.com"},
        {"key": "JIRA_TOKEN", "sensitive": true}
      ],
      "tokenType": "personal",
      "stats": {"installs": 30, "stars": 9},
      "path": "mcp/jira-mcp"
    },
    {
      "id": "loki",
      "type": "mcp",
      "name": "Loki",
      "description": "Query logs with LogQL",
      "version": "0.3.0",
      "author": "sre",
      "tags": ["loki", "logql"],
      "compatibility": {"claude-code": true, "cursor": true, "codex": true, "opencode": false, "antigravity": false},
      "stats": {"installs": 5, "stars": 2},
      "path": "mcp/loki-mcp"
    },
    {
      "id": "code-review",
      "type": "skill",
      "name": "Code Review",
      "description": "Checklist for reviewing pull requests",
      "version": "0.2.0",
      "author": "dev-experience",
      "tags": ["review"],
      "compatibility": {"claude-code": true, "cursor": false, "codex": false, "opencode": false, "antigravity": false},
      "stats": {"installs": 7, "stars": 3},
      "path": "skills/code-review"
    }
  ]
}"#;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Parse [`CATALOG_JSON`]
///
/// # Panics
///
/// Panics if the fixture catalog does not parse.
#[must_use]
pub fn fixture_registry() -> Registry {
    Registry::from_json(CATALOG_JSON, Path::new("registry.json"))
        .expect("Fixture catalog should parse")
}

/// Create a registry root holding `registry.json` and the `code-review` skill.
///
/// # Panics
///
/// Panics if the files cannot be written.
#[must_use]
pub fn create_registry_root() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().join("registry");
    let skill_dir = root.join("skills").join("code-review");
    std::fs::create_dir_all(&skill_dir).expect("Failed to create skill directory");
    std::fs::write(root.join("registry.json"), CATALOG_JSON).expect("Failed to write catalog");
    std::fs::write(skill_dir.join("SKILL.md"), "# Code Review\n").expect("Failed to write skill");
    (temp, root)
}
