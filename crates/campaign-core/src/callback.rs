//! Shape checking for callback references supplied by plugins.
//!
//! A callback is accepted when it *looks* invokable: either a qualified
//! function name (`Acme\Events::onHit`, `validate_hit`) or a two-element
//! `[target, method]` pair. Nothing is resolved or invoked here; consumers
//! map a [`CallbackRef`] onto a concrete handler with an explicit signature.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

static QUALIFIED_RE: OnceLock<Regex> = OnceLock::new();
static IDENT_RE: OnceLock<Regex> = OnceLock::new();

fn qualified_re() -> &'static Regex {
    QUALIFIED_RE.get_or_init(|| {
        Regex::new(r"^\\?[A-Za-z_][A-Za-z0-9_]*(?:(?:\\|::)[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
    })
}

fn ident_re() -> &'static Regex {
    IDENT_RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap())
}

/// A syntactically plausible callable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallbackRef {
    /// Qualified function or static method name.
    Function(String),
    /// `[target, method]` pair.
    Method(String, String),
}

impl CallbackRef {
    /// Shape-check an untyped value. Returns `None` for anything that cannot
    /// name an invokable.
    pub fn parse(value: &Value) -> Option<CallbackRef> {
        match value {
            Value::String(s) => Self::parse_str(s),
            Value::Array(items) => match items.as_slice() {
                [Value::String(target), Value::String(method)]
                    if qualified_re().is_match(target) && ident_re().is_match(method) =>
                {
                    Some(CallbackRef::Method(target.clone(), method.clone()))
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn parse_str(s: &str) -> Option<CallbackRef> {
        if qualified_re().is_match(s) {
            Some(CallbackRef::Function(s.to_string()))
        } else {
            None
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, CallbackRef::Method(..))
    }
}

impl fmt::Display for CallbackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackRef::Function(name) => f.write_str(name),
            CallbackRef::Method(target, method) => write!(f, "{target}::{method}"),
        }
    }
}

impl From<CallbackRef> for Value {
    fn from(callback: CallbackRef) -> Self {
        match callback {
            CallbackRef::Function(name) => Value::String(name),
            CallbackRef::Method(target, method) => {
                Value::Array(vec![Value::String(target), Value::String(method)])
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_qualified_names() {
        for name in [
            "validate_hit",
            r"Acme\PageBundle\Helper\Events::onHit",
            r"\Acme\Events::onHit",
            "acme::events::on_hit",
        ] {
            assert_eq!(
                CallbackRef::parse(&json!(name)),
                Some(CallbackRef::Function(name.to_string())),
                "{name}"
            );
        }
    }

    #[test]
    fn accepts_target_method_pair() {
        let cb = CallbackRef::parse(&json!([r"Acme\Events", "onHit"])).unwrap();
        assert_eq!(cb, CallbackRef::Method(r"Acme\Events".into(), "onHit".into()));
        assert!(cb.is_method());
        assert_eq!(cb.to_string(), r"Acme\Events::onHit");
    }

    #[test]
    fn rejects_implausible_shapes() {
        for value in [
            json!(42),
            json!(true),
            json!(null),
            json!(""),
            json!("not callable"),
            json!("Acme::"),
            json!(["Acme"]),
            json!(["Acme", "on hit"]),
            json!(["Acme", "a", "b"]),
            json!([1, "onHit"]),
            json!({"class": "Acme", "method": "onHit"}),
        ] {
            assert!(CallbackRef::parse(&value).is_none(), "{value}");
        }
    }

    #[test]
    fn serializes_to_input_shape() {
        let f = CallbackRef::Function("validate_hit".into());
        assert_eq!(serde_json::to_value(&f).unwrap(), json!("validate_hit"));

        let m = CallbackRef::Method("Acme".into(), "onHit".into());
        assert_eq!(serde_json::to_value(&m).unwrap(), json!(["Acme", "onHit"]));
        assert_eq!(Value::from(m), json!(["Acme", "onHit"]));
    }
}
