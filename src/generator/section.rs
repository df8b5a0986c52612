//! Section-structured (TOML) rendering
//!
//! Strings are always emitted as TOML basic strings. Backslash and double
//! quote are escaped, control characters use the short escapes or `\uXXXX`.
//! Keys stay bare when they only use `A-Za-z0-9_-`.

use super::{ServerEntry, TOML_SECTION};

/// Quote `value` as a TOML basic string
pub fn basic_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Key or table-name segment, quoted only when needed
pub fn key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        name.to_string()
    } else {
        basic_string(name)
    }
}

fn render_entry(entry: &ServerEntry) -> String {
    let table = format!("{TOML_SECTION}.{}", key(&entry.name));
    let args = entry
        .args
        .iter()
        .map(|arg| basic_string(arg))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("[{table}]"),
        format!("command = {}", basic_string(&entry.command)),
        format!("args = [{args}]"),
    ];

    if !entry.env.is_empty() {
        lines.push(String::new());
        lines.push(format!("[{table}.env]"));
        lines.extend(
            entry
                .env
                .iter()
                .map(|(k, v)| format!("{} = {}", key(k), basic_string(v))),
        );
    }

    lines.join("\n")
}

/// Render entries as TOML tables, one blank line between packages
pub fn render(entries: &[ServerEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}
