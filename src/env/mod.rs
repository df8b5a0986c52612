//! Environment resolution for service bridges
//!
//! Turns a package's declared env fields plus whatever the operator supplied
//! into the effective environment written to the secret store and rendered
//! into host configuration.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, install};
use crate::registry::EnvFieldSpec;

pub mod secrets;

pub use secrets::SecretStore;

/// Values supplied by the operator, keyed by env field key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvInput(HashMap<String, String>);

impl EnvInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `KEY=VALUE` pairs. The value may be empty; the key may not.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let mut input = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                install::invalid_input(format!("expected KEY=VALUE, got '{pair}'"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(install::invalid_input(format!(
                    "missing key in '{pair}'"
                )));
            }
            input.insert(key, value);
        }
        Ok(input)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// Resolved environment for one bridge instance, in field declaration order.
///
/// `Debug` prints keys only so values never end up in logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EffectiveEnvironment(Vec<(String, String)>);

impl EffectiveEnvironment {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    #[allow(dead_code)] // Used in tests
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `KEY=value` lines as stored in the secret file
    pub fn to_dotenv(&self) -> String {
        self.iter().fold(String::new(), |mut out, (key, value)| {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
            out
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EffectiveEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for EffectiveEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Resolve one field.
///
/// Precedence: pinned default, then supplied value (even when empty), then
/// default, then the empty string.
pub fn resolve_field(field: &EnvFieldSpec, input: &EnvInput) -> String {
    if field.is_pinned() {
        return field.default.clone().unwrap_or_default();
    }
    if let Some(value) = input.get(&field.key) {
        return value.to_string();
    }
    field.default.clone().unwrap_or_default()
}

/// Resolve every declared field, one entry per field
pub fn resolve(fields: &[EnvFieldSpec], input: &EnvInput) -> EffectiveEnvironment {
    let env: EffectiveEnvironment = fields
        .iter()
        .map(|field| (field.key.clone(), resolve_field(field, input)))
        .collect();
    tracing::debug!(keys = ?env, "resolved environment");
    env
}
