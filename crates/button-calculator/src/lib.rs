//! Button Calculator
//!
//! A four-function calculator driven by keypad clicks. Digits accumulate as
//! text, choosing an operator captures the operand, and choosing another one
//! resolves the pending operation first, so `5 + 3 + 2 =` reads left to
//! right and shows `10`. There is no precedence and no expression parsing.
//!
//! The display has two lines. The current line groups the integer part with
//! commas and shows the fractional part exactly as typed; the previous line
//! shows the captured operand and operator.
//!
//! # Example
//!
//! ```rust
//! use button_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for ch in "1200".chars() {
//!     calc.append_digit(ch);
//! }
//! calc.select_operator(Operator::Add);
//! calc.append_digit('5');
//! assert_eq!(calc.render(), DisplayText::new("5", "1,200 +"));
//!
//! calc.compute();
//! assert_eq!(calc.render().current, "1,205");
//!
//! // Inputs that cannot apply are reported, not raised
//! assert_eq!(calc.select_operator(Operator::Divide), Outcome::Applied);
//! assert_eq!(
//!     calc.select_operator(Operator::Divide),
//!     Outcome::Ignored(Ignored::EmptyOperand)
//! );
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod dom;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::DriverConfig;
    pub use crate::core::number::format_for_display;
    pub use crate::core::{
        CalcError, CalcResult, Calculator, DisplayText, Entry, Ignored, Operator, Outcome,
    };
    pub use crate::dom::{ClickEvent, DisplaySink, DomElement, MockDom, PageSnapshot};
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::keypad::{ButtonRole, Keypad, KeypadAction, KeypadButtonDef};
}
