// Components module - the showcased UI components
//
// Every component implements `Demoable`: given a set of named inputs it either
// builds a render tree or reports a `ConstructionFailure`. The validator and
// the demo table only ever talk to components through this trait.
//
// Layout mirrors the registry categories:
// - ui/     : primitives (button, badge)
// - draft/  : experimental components, shown only in the showcase
// - root    : custom production components and prototype flows

pub mod draft;
pub mod draft_promotion;
pub mod stat_tile;
pub mod ui;

use crate::render::RenderTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub use draft::ExampleCard;
pub use draft_promotion::DraftPromotion;
pub use stat_tile::StatTile;
pub use ui::{Badge, Button};

/// Named inputs passed to a component at construction time
pub type Inputs = BTreeMap<String, InputValue>;

/// A single input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl InputValue {
    fn type_name(&self) -> &'static str {
        match self {
            InputValue::Bool(_) => "bool",
            InputValue::Number(_) => "number",
            InputValue::Text(_) => "text",
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

/// Build an `Inputs` map from `(name, value)` pairs
pub fn inputs<I, K, V>(pairs: I) -> Inputs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<InputValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Why a component could not be built from its inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionFailure {
    #[error("input `{input}` must be {expected}, got {actual}")]
    WrongType {
        input: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown {input} '{value}' (expected one of: {allowed})")]
    UnknownVariant {
        input: String,
        value: String,
        allowed: String,
    },

    #[error("input `{input}` is invalid: {reason}")]
    InvalidValue { input: String, reason: String },

    /// Captured from a panic during construction
    #[error("{0}")]
    Panicked(String),
}

/// A component that can be built for a demo
pub trait Demoable: Send + Sync {
    /// Display name, matches the registry descriptor name
    fn name(&self) -> &'static str;

    /// Inputs used when no overrides are supplied
    fn default_inputs(&self) -> Inputs;

    /// Build the component from `inputs`
    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Input readers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a text input, falling back to `default` when absent
pub(crate) fn text_input(
    inputs: &Inputs,
    key: &str,
    default: &str,
) -> Result<String, ConstructionFailure> {
    match inputs.get(key) {
        None => Ok(default.to_string()),
        Some(InputValue::Text(value)) => Ok(value.clone()),
        Some(other) => Err(wrong_type(key, "text", other)),
    }
}

pub(crate) fn bool_input(
    inputs: &Inputs,
    key: &str,
    default: bool,
) -> Result<bool, ConstructionFailure> {
    match inputs.get(key) {
        None => Ok(default),
        Some(InputValue::Bool(value)) => Ok(*value),
        Some(other) => Err(wrong_type(key, "bool", other)),
    }
}

pub(crate) fn number_input(
    inputs: &Inputs,
    key: &str,
    default: f64,
) -> Result<f64, ConstructionFailure> {
    match inputs.get(key) {
        None => Ok(default),
        Some(InputValue::Number(value)) => Ok(*value),
        Some(other) => Err(wrong_type(key, "number", other)),
    }
}

/// Read a text input restricted to `allowed`
pub(crate) fn variant_input(
    inputs: &Inputs,
    key: &str,
    default: &str,
    allowed: &[&str],
) -> Result<String, ConstructionFailure> {
    let value = text_input(inputs, key, default)?;
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ConstructionFailure::UnknownVariant {
            input: key.to_string(),
            value,
            allowed: allowed.join(", "),
        })
    }
}

fn wrong_type(key: &str, expected: &'static str, actual: &InputValue) -> ConstructionFailure {
    ConstructionFailure::WrongType {
        input: key.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_defaults_and_type_check() {
        let values = inputs([("title", InputValue::from("Hi")), ("count", 3.0.into())]);

        assert_eq!(text_input(&values, "title", "x").unwrap(), "Hi");
        assert_eq!(text_input(&values, "absent", "fallback").unwrap(), "fallback");

        let err = text_input(&values, "count", "x").unwrap_err();
        assert_eq!(err.to_string(), "input `count` must be text, got number");
    }

    #[test]
    fn test_variant_input_rejects_unknown() {
        let values = inputs([("variant", "loud")]);
        let err = variant_input(&values, "variant", "default", &["default", "wip"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown variant 'loud' (expected one of: default, wip)"
        );
    }

    #[test]
    fn test_input_value_deserializes_untagged() {
        let parsed: Inputs =
            toml::from_str("title = \"Card\"\ndisabled = true\ncount = 4.0").unwrap();
        assert_eq!(parsed["title"], InputValue::Text("Card".to_string()));
        assert_eq!(parsed["disabled"], InputValue::Bool(true));
        assert_eq!(parsed["count"], InputValue::Number(4.0));
    }
}
