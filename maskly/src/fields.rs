//! The set of key names considered sensitive.
//!
//! Matching is exact and case-sensitive: `"password"` matches only the key
//! `"password"`, never `"Password"` or `"user_password"`.

use std::collections::BTreeSet;

/// Field names used when the caller supplies no custom list.
pub const DEFAULT_FIELDS: [&str; 8] = [
    "password", "email", "phone", "token", "secret", "ssn", "card", "aadhaar",
];

/// Membership set of sensitive key names.
///
/// Built from a caller-supplied list of names. An empty list selects
/// [`DEFAULT_FIELDS`] instead; a non-empty list replaces the defaults outright
/// rather than extending them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    names: BTreeSet<String>,
    default: bool,
}

impl FieldSet {
    /// Builds a field set from `names`, falling back to [`DEFAULT_FIELDS`] when
    /// `names` yields nothing.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Self::default();
        }
        Self {
            names,
            default: false,
        }
    }

    /// Returns whether `key` names a sensitive field.
    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(key)
    }

    /// Returns `true` when this set was built from [`DEFAULT_FIELDS`].
    pub fn is_default(&self) -> bool {
        self.default
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the field names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_FIELDS.iter().map(|name| (*name).to_string()).collect(),
            default: true,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
