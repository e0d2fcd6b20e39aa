//! Errors surfaced by the typed-value bridge.
//!
//! Masking a [`serde_json::Value`] never fails. Only converting a caller's
//! `Serialize` type into a value can.

/// Errors returned by [`crate::Masker::mask_serialize`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MaskError {
    /// The input could not be represented as a JSON value (e.g. a map with
    /// non-string keys, or a `Serialize` impl that reported an error).
    #[error("failed to convert value for masking: {0}")]
    Serialize(#[from] serde_json::Error),
}
