//! Calculator state machine
//!
//! Holds the entry being typed, the operand captured when an operator was
//! chosen, and the pending operator. Selecting a second operator resolves the
//! pending one first, which gives left-to-right chaining: `5 + 3 + 2` shows
//! `8 +` before the `2` is typed.
//!
//! Invariants:
//! - the current entry contains at most one decimal point
//! - an operator is pending only while the previous entry is non-empty

use super::entry::Entry;
use super::number::{format_for_display, DECIMAL_POINT};
use super::{Ignored, Operator, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The two display lines produced by [`Calculator::render`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    /// The entry being typed (or the last result)
    pub current: String,
    /// The captured operand and pending operator, or blank
    pub previous: String,
}

impl DisplayText {
    /// Creates display text from the two lines
    #[must_use]
    pub fn new(current: impl Into<String>, previous: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            previous: previous.into(),
        }
    }
}

/// Four-function calculator driven by button presses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    current: Entry,
    previous: Entry,
    pending: Option<Operator>,
}

impl Calculator {
    /// Creates a calculator with empty entries and no operator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry being typed
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// The operand captured when the operator was chosen
    #[must_use]
    pub fn previous(&self) -> &Entry {
        &self.previous
    }

    /// The operator waiting for its second operand
    #[must_use]
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Clears both entries and the pending operator
    pub fn reset(&mut self) -> Outcome {
        self.current = Entry::new();
        self.previous = Entry::new();
        self.pending = None;
        trace!("calculator reset");
        Outcome::Applied
    }

    /// Appends a digit or the decimal point to the current entry.
    ///
    /// A second decimal point is ignored. Other characters are appended as
    /// given; callers are expected to pass only `0-9` and `.`. After a
    /// computation, typing continues from the result's text, so `.` after
    /// `8` gives `8.` and a digit after `8` gives `85`.
    pub fn append_digit(&mut self, token: char) -> Outcome {
        if token == DECIMAL_POINT && self.current.has_decimal_point() {
            return ignored("append_digit", Ignored::DuplicateDecimal);
        }
        self.current.push(token);
        trace!(%token, current = %self.current.text(), "digit appended");
        Outcome::Applied
    }

    /// Removes the last character of the current entry
    pub fn delete_last(&mut self) -> Outcome {
        if !self.current.pop() {
            return ignored("delete_last", Ignored::EmptyEntry);
        }
        trace!(current = %self.current.text(), "last character deleted");
        Outcome::Applied
    }

    /// Chooses the operator for the next computation.
    ///
    /// With nothing entered this is a no-op. If an operand is already
    /// captured, the pending computation runs first and its result becomes
    /// the new left operand.
    pub fn select_operator(&mut self, op: Operator) -> Outcome {
        if self.current.is_empty() {
            return ignored("select_operator", Ignored::EmptyOperand);
        }
        if !self.previous.is_empty() {
            let _ = self.compute();
        }
        self.pending = Some(op);
        self.previous = self.current.take();
        trace!(operator = %op, previous = %self.previous.text(), "operator selected");
        Outcome::Applied
    }

    /// Applies the pending operator to the previous and current entries.
    ///
    /// Does nothing if either entry is not a number or no operator is
    /// pending. Division by zero stores an infinity or NaN as the result.
    pub fn compute(&mut self) -> Outcome {
        let (Some(lhs), Some(rhs)) = (self.previous.value(), self.current.value()) else {
            return ignored("compute", Ignored::UnparsableOperand);
        };
        let Some(op) = self.pending else {
            return ignored("compute", Ignored::NoPendingOperator);
        };

        let result = op.apply(lhs, rhs);
        trace!(lhs, rhs, operator = %op, result, "computed");

        self.current = Entry::Computed(result);
        self.pending = None;
        self.previous = Entry::new();
        Outcome::Applied
    }

    /// Formats a value for display; see [`format_for_display`]
    #[must_use]
    pub fn format_for_display(value: &str) -> String {
        format_for_display(value)
    }

    /// Produces the two display lines for the current state.
    ///
    /// With an operator pending the previous line is the formatted operand
    /// followed by the operator symbol. Otherwise the previous entry is shown
    /// as its raw text, without grouping.
    #[must_use]
    pub fn render(&self) -> DisplayText {
        let current = format_for_display(&self.current.text());
        let previous = match self.pending {
            Some(op) => format!("{} {}", format_for_display(&self.previous.text()), op),
            None => self.previous.text().into_owned(),
        };
        DisplayText { current, previous }
    }
}

fn ignored(operation: &'static str, reason: Ignored) -> Outcome {
    debug!(operation, %reason, "input ignored");
    Outcome::Ignored(reason)
}
