//! Core calculator module
//!
//! The state machine in [`calculator`] never fails: inputs it cannot use are
//! reported as [`Outcome::Ignored`] and leave the display unchanged. Errors
//! only occur at the boundary where page elements and button labels are
//! turned into calculator inputs.

pub mod calculator;
pub mod entry;
pub mod number;
mod operator;

pub use calculator::{Calculator, DisplayText};
pub use entry::Entry;
pub use operator::Operator;

use std::fmt;
use thiserror::Error;

/// Result type for keypad and page operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while resolving page input into calculator actions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// No element with this id exists on the page
    #[error("Unknown element: {id}")]
    UnknownElement {
        /// The element id that was looked up
        id: String,
    },

    /// A button label does not match its role
    #[error("Unknown button {label:?} for role {role}")]
    UnknownButton {
        /// The `data-*` role of the button
        role: String,
        /// The visible label that could not be resolved
        label: String,
    },

    /// Operator symbol is not one of the four supported operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Digit outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Page snapshot could not be serialized
    #[error("Snapshot serialization failed: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

/// Result of applying one input to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input changed (or reset) the calculator state
    Applied,
    /// The input was ignored; state is unchanged
    Ignored(Ignored),
}

impl Outcome {
    /// Returns true if the input was applied
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns the reason the input was ignored, if it was
    #[must_use]
    pub const fn ignored(&self) -> Option<Ignored> {
        match self {
            Self::Applied => None,
            Self::Ignored(reason) => Some(*reason),
        }
    }
}

/// Why an input left the calculator unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// A second decimal point in the current entry
    DuplicateDecimal,
    /// Delete on an empty current entry
    EmptyEntry,
    /// Operator selected with nothing entered
    EmptyOperand,
    /// An operand is empty or not a number
    UnparsableOperand,
    /// Compute with no operator selected
    NoPendingOperator,
    /// A number button that carries neither a digit nor the decimal point
    InvalidToken,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDecimal => write!(f, "entry already has a decimal point"),
            Self::EmptyEntry => write!(f, "entry is empty"),
            Self::EmptyOperand => write!(f, "no operand entered"),
            Self::UnparsableOperand => write!(f, "operand is not a number"),
            Self::NoPendingOperator => write!(f, "no operator selected"),
            Self::InvalidToken => write!(f, "not a digit or decimal point"),
        }
    }
}
