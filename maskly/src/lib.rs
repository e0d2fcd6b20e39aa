//! Mask sensitive values inside strings, objects, and arrays.
//!
//! This crate separates:
//! - **Fields**: which keys are sensitive ([`FieldSet`]).
//! - **Options**: how a sensitive string is masked ([`MaskOptions`]).
//!
//! The [`Masker`] walks a [`serde_json::Value`] and masks the values held by
//! sensitive keys, keeping a short leading and trailing window visible:
//!
//! ```rust
//! use maskly::{mask, MaskOptions};
//! use serde_json::json;
//!
//! let masked = mask(
//!     &json!({ "password": "abcdef", "name": "Al" }),
//!     &[],
//!     MaskOptions::default(),
//! );
//! assert_eq!(masked, json!({ "password": "ab**ef", "name": "Al" }));
//! ```
//!
//! Key rules:
//! - A top-level string is masked directly; a top-level sequence has every
//!   element masked.
//! - Values under a sensitive key are masked whatever their shape. Numbers are
//!   masked as their decimal text.
//! - Other keys pass through unchanged, except nested mappings, which are walked.
//! - Key matching is exact and case-sensitive.
//! - An empty field list means [`DEFAULT_FIELDS`]; a non-empty list replaces it.
//!
//! What this crate does:
//! - defines the field set, the masking options and the traversal
//! - bridges any `Serialize` type into the traversal
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - detect sensitive data by content (only by key name)

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

use serde_json::Value;

// Module declarations
mod error;
mod fields;
mod masker;
mod options;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::MaskError;
pub use fields::{FieldSet, DEFAULT_FIELDS};
pub use masker::Masker;
pub use options::{MaskOptions, DEFAULT_MASK_CHAR, DEFAULT_VISIBLE_END, DEFAULT_VISIBLE_START};

/// Masks `value`, treating `fields` as the sensitive key names.
///
/// An empty `fields` slice selects [`DEFAULT_FIELDS`]. Use
/// `MaskOptions::default()` for the default windows (2 and 2) and mask
/// character (`*`).
///
/// For repeated calls with the same configuration, build a [`Masker`] once
/// instead.
#[must_use]
pub fn mask(value: &Value, fields: &[&str], options: MaskOptions) -> Value {
    Masker::new(fields.iter().copied(), options).mask(value)
}
