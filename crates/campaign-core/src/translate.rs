//! Translation of display strings at registration time.
//!
//! Translators are total: an unknown id translates to itself. Stored labels
//! are not refreshed if the active locale changes after registration.

use crate::error::Result;
use crate::paths;
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

pub trait Translator {
    fn trans(&self, id: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn trans(&self, id: &str) -> String {
        self(id)
    }
}

/// Returns every id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn trans(&self, id: &str) -> String {
        id.to_string()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Flat `id → message` map for a single locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Parse a YAML message file. Nested maps are flattened with `.`, so
    /// `campaign: { page: { hit: "Visits a page" } }` defines `campaign.page.hit`.
    pub fn from_yaml(locale: impl Into<String>, yaml: &str) -> Result<Self> {
        let mut catalog = Self::new(locale);
        let root: Value = serde_yaml::from_str(yaml)?;
        flatten_into(&mut catalog.messages, String::new(), &root);
        Ok(catalog)
    }

    pub fn load(locale: impl Into<String>, path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(locale, &data)
    }

    /// Load `messages.<locale>.yaml` from `dir`. A missing file yields an
    /// empty catalog, which translates every id to itself.
    pub fn load_locale(dir: &Path, locale: &str) -> Result<Self> {
        let path = paths::message_file(dir, locale);
        if !path.exists() {
            tracing::warn!(path = %path.display(), "message file not found, labels stay untranslated");
            return Ok(Self::new(locale));
        }
        Self::load(locale, &path)
    }

    pub fn insert(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(id.into(), message.into());
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn trans(&self, id: &str) -> String {
        self.messages
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let Some(key) = scalar_to_string(k) else {
                    continue;
                };
                let id = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(out, id, v);
            }
        }
        other => {
            if prefix.is_empty() {
                return;
            }
            if let Some(message) = scalar_to_string(other) {
                out.insert(prefix, message);
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
