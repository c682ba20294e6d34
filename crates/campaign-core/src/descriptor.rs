use crate::callback::CallbackRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// ActionSpec
// ---------------------------------------------------------------------------

/// A building block as a plugin hands it to the registry, before validation
/// and translation. `label` and `description` are translation ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "formType",
        alias = "form_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub form_type: Option<String>,
    /// Left untyped so that malformed callbacks surface as registration
    /// errors instead of parse errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
}

impl ActionSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = Some(form_type.into());
        self
    }

    pub fn callback(mut self, callback: impl Into<Value>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// The supplied callback, treating an explicit null as absent.
    pub(crate) fn callback_value(&self) -> Option<&Value> {
        self.callback.as_ref().filter(|v| !v.is_null())
    }

    pub(crate) fn has_field(&self, field: &str) -> bool {
        match field {
            "label" => self.label.is_some(),
            "description" => self.description.is_some(),
            "formType" | "form_type" => self.form_type.is_some(),
            "callback" => self.callback_value().is_some(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionDescriptor
// ---------------------------------------------------------------------------

/// A registered building block. `label` and `description` hold translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        rename = "formType",
        alias = "form_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub form_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<CallbackRef>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
