//! Operand entries
//!
//! An entry is either text exactly as typed, or a computed result. A result is
//! kept as a number and only turned back into text when something needs
//! text: appending a digit, deleting, or formatting the display.

use super::number::{number_to_text, parse_float, DECIMAL_POINT};
use std::borrow::Cow;

/// One operand of the calculator
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Characters as the user typed them
    Typed(String),
    /// Result of the last computation
    Computed(f64),
}

impl Default for Entry {
    fn default() -> Self {
        Self::Typed(String::new())
    }
}

impl Entry {
    /// Creates an empty entry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry as text, restringifying a computed value
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Typed(text) => Cow::Borrowed(text.as_str()),
            Self::Computed(value) => Cow::Owned(number_to_text(*value)),
        }
    }

    /// Parses the entry as a number; `None` when empty or not numeric
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_float(&self.text())
    }

    /// True only for typed text with no characters; a result is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Typed(text) if text.is_empty())
    }

    /// True if the entry text contains a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.text().contains(DECIMAL_POINT)
    }

    /// Returns true for a computed result
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Appends one character, continuing from the text of a computed result
    pub fn push(&mut self, ch: char) {
        let mut text = self.take().into_text();
        text.push(ch);
        *self = Self::Typed(text);
    }

    /// Removes the last character; returns false when there was none
    pub fn pop(&mut self) -> bool {
        let mut text = self.take().into_text();
        let removed = text.pop().is_some();
        *self = Self::Typed(text);
        removed
    }

    /// Takes the entry out, leaving an empty one in its place
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Consumes the entry and returns its text
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Typed(text) => text,
            Self::Computed(value) => number_to_text(value),
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Typed(text.to_string())
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Self::Computed(value)
    }
}
