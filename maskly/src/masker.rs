//! Recursive traversal that masks sensitive values inside dynamic data.
//!
//! Three rules cooperate:
//!
//! - **dispatch** ([`Masker::mask`]): applied once to the top-level value.
//!   Strings are masked, sequences go through the value rule, mappings go
//!   through the object rule, everything else passes through.
//! - **value rule** ([`Masker::mask_value`]): applied to whatever a sensitive
//!   field holds. Strings and numbers become masked strings, sequences are
//!   masked element-wise, mappings go back through the object rule.
//! - **object rule** ([`Masker::mask_object`]): walks a mapping (or sequence)
//!   entry by entry. Entries whose key is in the field set go through the value
//!   rule; nested containers are walked with the object rule again; scalars are
//!   copied unchanged.
//!
//! ## Sequences outside a sensitive field
//!
//! The object rule treats a sequence like a mapping keyed by the element's
//! decimal index. Scalars inside a sequence held by a non-sensitive key are
//! therefore copied unchanged, while mappings inside it are still walked:
//!
//! ```rust
//! use maskly::Masker;
//! use serde_json::json;
//!
//! let masked = Masker::default().mask(&json!({
//!     "tags": ["alpha", { "token": "abcdef" }]
//! }));
//! assert_eq!(masked, json!({ "tags": ["alpha", { "token": "ab**ef" }] }));
//! ```
//!
//! Every call builds a new value; the input is never modified.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{error::MaskError, fields::FieldSet, options::MaskOptions};

/// Masks sensitive values using a fixed field set and formatting options.
///
/// A `Masker` is immutable and holds no per-call state, so one instance can be
/// shared freely (including across threads).
///
/// Deserializes from `{ "fields": [...], "visibleStart": .., "visibleEnd": ..,
/// "maskChar": .. }` where every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "MaskerConfig")]
pub struct Masker {
    fields: FieldSet,
    options: MaskOptions,
}

#[derive(Deserialize)]
struct MaskerConfig {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(flatten)]
    options: MaskOptions,
}

impl From<MaskerConfig> for Masker {
    fn from(config: MaskerConfig) -> Self {
        Self::new(config.fields, config.options)
    }
}

impl Masker {
    /// Constructs a masker for `fields`.
    ///
    /// An empty `fields` list selects [`crate::DEFAULT_FIELDS`].
    #[must_use]
    pub fn new<I, S>(fields: I, options: MaskOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: FieldSet::from_names(fields),
            options,
        }
    }

    /// Constructs a masker for the default field set with custom options.
    #[must_use]
    pub fn with_options(options: MaskOptions) -> Self {
        Self {
            fields: FieldSet::default(),
            options,
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Masks `value` according to its top-level shape.
    ///
    /// Top-level numbers, booleans and nulls are returned unchanged; they are
    /// only masked when held by a sensitive field.
    #[must_use]
    pub fn mask(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.mask_str(text)),
            Value::Array(_) => self.mask_value(value),
            Value::Object(_) => self.mask_object(value),
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Masks a value held by a sensitive field.
    #[must_use]
    pub fn mask_value(&self, value: &Value) -> Value {
        match value {
            Value::Null | Value::Bool(_) => value.clone(),
            Value::String(text) => Value::String(self.mask_str(text)),
            Value::Number(number) => Value::String(self.mask_str(&number_text(number))),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.mask_value(item)).collect())
            }
            Value::Object(_) => self.mask_object(value),
        }
    }

    /// Walks a mapping or sequence, masking entries whose key is sensitive.
    ///
    /// Sequence elements are keyed by their decimal index. Any other input is
    /// returned unchanged.
    #[must_use]
    pub fn mask_object(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, entry)| (key.clone(), self.mask_entry(key, entry)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| self.mask_entry(&index.to_string(), entry))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        }
    }

    /// Masks a single string with this masker's options.
    #[must_use]
    pub fn mask_str(&self, value: &str) -> String {
        self.options.apply_to(value)
    }

    /// Converts `value` into a JSON value and masks it.
    pub fn mask_serialize<T>(&self, value: &T) -> Result<Value, MaskError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        Ok(self.mask(&value))
    }

    fn mask_entry(&self, key: &str, entry: &Value) -> Value {
        if self.fields.contains(key) {
            self.mask_value(entry)
        } else if entry.is_object() || entry.is_array() {
            self.mask_object(entry)
        } else {
            entry.clone()
        }
    }
}

/// Renders a number the way it is masked: integers in decimal, integral floats
/// without a fractional part, negative zero as `0`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => {
            if float == 0.0 {
                "0".to_string()
            } else {
                float.to_string()
            }
        }
        _ => number.to_string(),
    }
}
