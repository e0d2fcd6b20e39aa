//! Formatting options and the string-masking rule.
//!
//! Options are pure string transformations. They do not traverse structures or
//! decide which fields are sensitive.

use std::iter;

use serde::{Deserialize, Serialize};

/// Default number of leading characters left visible.
pub const DEFAULT_VISIBLE_START: usize = 2;

/// Default number of trailing characters left visible.
pub const DEFAULT_VISIBLE_END: usize = 2;

/// Default character used to fill masked positions.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Configuration that keeps a leading and trailing window visible while masking
/// everything in between.
///
/// Lengths are counted in UTF-16 code units, not Unicode scalar values or
/// grapheme clusters. A window that splits a surrogate pair decodes the orphaned
/// half as U+FFFD.
///
/// Deserializes from camelCase keys (`visibleStart`, `visibleEnd`, `maskChar`);
/// any omitted key falls back to its default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskOptions {
    /// Number of leading code units to keep visible.
    visible_start: usize,
    /// Number of trailing code units to keep visible.
    visible_end: usize,
    /// Symbol repeated over the masked span.
    mask_char: char,
}

impl MaskOptions {
    /// Constructs options with explicit windows and mask character.
    #[must_use]
    pub fn new(visible_start: usize, visible_end: usize, mask_char: char) -> Self {
        Self {
            visible_start,
            visible_end,
            mask_char,
        }
    }

    /// Sets the number of leading code units left visible.
    #[must_use]
    pub fn with_visible_start(mut self, visible_start: usize) -> Self {
        self.visible_start = visible_start;
        self
    }

    /// Sets the number of trailing code units left visible.
    #[must_use]
    pub fn with_visible_end(mut self, visible_end: usize) -> Self {
        self.visible_end = visible_end;
        self
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn visible_start(&self) -> usize {
        self.visible_start
    }

    pub fn visible_end(&self) -> usize {
        self.visible_end
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Applies the masking rule to a string value.
    ///
    /// If the value is no longer than `visible_start + visible_end`, every code
    /// unit is replaced by the mask character (the empty string stays empty).
    /// Otherwise the leading and trailing windows are kept and the middle is
    /// masked, so the output has one mask character per masked code unit.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let units: Vec<u16> = value.encode_utf16().collect();
        let total = units.len();

        if total <= self.visible_start.saturating_add(self.visible_end) {
            return self.fill(total);
        }

        let middle = total - self.visible_start - self.visible_end;
        let mut masked = String::from_utf16_lossy(&units[..self.visible_start]);
        masked.push_str(&self.fill(middle));
        masked.push_str(&String::from_utf16_lossy(&units[total - self.visible_end..]));
        masked
    }

    fn fill(&self, count: usize) -> String {
        iter::repeat_n(self.mask_char, count).collect()
    }
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_START, DEFAULT_VISIBLE_END, DEFAULT_MASK_CHAR)
    }
}
