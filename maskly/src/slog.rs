//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Masker`] with `slog` by providing a `slog::Value`
//! that serializes the masked payload as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from [`Masker::mask`], not
//!   from the original value.
//! - Avoiding fallible logging APIs: conversion failures are represented as a
//!   placeholder string rather than propagated as errors.
//!
//! It does not configure `slog` or choose which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masker::Masker;

/// Placeholder logged when a value cannot be converted for masking.
pub const SERIALIZE_FAILURE_PLACEHOLDER: &str = "Failed to serialize masked value";

/// A `slog::Value` that emits an owned masked payload as structured JSON.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Returns the masked payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Masks an existing JSON value for logging.
#[must_use]
pub fn masked_json(masker: &Masker, value: &JsonValue) -> MaskedJson {
    MaskedJson::new(masker.mask(value))
}

/// Converts serializable values to a `slog::Value` that logs their masked
/// form as JSON.
///
/// ## Example
/// ```ignore
/// use maskly::{slog::ToMaskedJson, Masker};
///
/// let masker = Masker::default();
/// info!(logger, "login"; "request" => request.to_masked_json(&masker));
/// ```
pub trait ToMaskedJson: Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as structured
    /// JSON.
    ///
    /// If `self` cannot be converted into a `serde_json::Value`, the returned
    /// value holds [`SERIALIZE_FAILURE_PLACEHOLDER`] as a JSON string.
    fn to_masked_json(&self, masker: &Masker) -> MaskedJson {
        let value = masker
            .mask_serialize(self)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILURE_PLACEHOLDER.to_string()));
        MaskedJson::new(value)
    }
}

impl<T> ToMaskedJson for T where T: Serialize + ?Sized {}
