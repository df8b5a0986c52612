//! Tree-structured (JSON) rendering

use serde_json::{Map, Value};

use super::{SERVERS_KEY, ServerEntry, servers_map};

/// JSON value of a single entry
pub fn entry_value(entry: &ServerEntry) -> Value {
    let mut obj = Map::new();
    obj.insert("command".to_string(), Value::from(entry.command.clone()));
    obj.insert(
        "args".to_string(),
        Value::Array(entry.args.iter().cloned().map(Value::from).collect()),
    );
    obj.insert(
        "env".to_string(),
        Value::Object(
            entry
                .env
                .iter()
                .map(|(k, v)| (k.to_string(), Value::from(v)))
                .collect(),
        ),
    );
    Value::Object(obj)
}

/// Render entries as `{"mcpServers": {...}}` with 2-space indentation
pub fn render(entries: &[ServerEntry]) -> String {
    let mut doc = Map::new();
    doc.insert(SERVERS_KEY.to_string(), Value::Object(servers_map(entries)));
    // Serializing a Value built from strings cannot fail
    serde_json::to_string_pretty(&Value::Object(doc)).unwrap_or_default()
}
