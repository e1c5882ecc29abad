//! Calculator keypad
//!
//! Button layout, `data-*` roles, and the mapping from a clicked button to a
//! calculator action. A click is resolved from the button's role and its
//! visible label, the same way the page handlers read `innerText`.

use crate::core::{CalcError, CalcResult, Calculator, Ignored, Operator, Outcome};
use crate::dom::DomElement;
use serde::{Deserialize, Serialize};

/// The `data-*` attribute that marks what a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonRole {
    /// Digit or decimal point
    Number,
    /// One of the four operators
    Operator,
    /// Compute the pending operation
    Equals,
    /// Delete the last character
    Delete,
    /// Reset everything
    AllClear,
}

impl ButtonRole {
    /// All roles
    pub const ALL: [Self; 5] = [
        Self::Number,
        Self::Operator,
        Self::Equals,
        Self::Delete,
        Self::AllClear,
    ];

    /// The attribute name carried by buttons with this role
    #[must_use]
    pub const fn data_attr(&self) -> &'static str {
        match self {
            Self::Number => "data-number",
            Self::Operator => "data-operator",
            Self::Equals => "data-equals",
            Self::Delete => "data-delete",
            Self::AllClear => "data-all-clear",
        }
    }

    /// Looks up a role from its attribute name
    #[must_use]
    pub fn from_data_attr(attr: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.data_attr() == attr)
    }
}

/// What a keypad button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Decimal,
    /// Select an operator
    Operator(Operator),
    /// Compute
    Equals,
    /// Delete the last character
    Delete,
    /// Reset the calculator
    AllClear,
}

impl KeypadAction {
    /// Creates a digit action, rejecting values above 9
    pub fn digit(d: u8) -> CalcResult<Self> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        Ok(Self::Digit(d))
    }

    /// Returns the role of the button carrying this action
    #[must_use]
    pub const fn role(&self) -> ButtonRole {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonRole::Number,
            Self::Operator(_) => ButtonRole::Operator,
            Self::Equals => ButtonRole::Equals,
            Self::Delete => ButtonRole::Delete,
            Self::AllClear => ButtonRole::AllClear,
        }
    }

    /// Returns the token appended to the entry, for number buttons
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Delete | Self::AllClear => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Resolves a clicked button from its role and visible label
    pub fn from_button(role: ButtonRole, label: &str) -> CalcResult<Self> {
        let label = label.trim();
        let unknown = || CalcError::UnknownButton {
            role: role.data_attr().to_string(),
            label: label.to_string(),
        };

        match role {
            ButtonRole::Number => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some('.'), None) => Ok(Self::Decimal),
                    (Some(ch), None) => ch
                        .to_digit(10)
                        .map(|d| Self::Digit(d as u8))
                        .ok_or_else(unknown),
                    _ => Err(unknown()),
                }
            }
            ButtonRole::Operator => Ok(Self::Operator(label.parse()?)),
            ButtonRole::Equals => Ok(Self::Equals),
            ButtonRole::Delete => Ok(Self::Delete),
            ButtonRole::AllClear => Ok(Self::AllClear),
        }
    }

    /// Performs the action on a calculator
    pub fn apply(self, calculator: &mut Calculator) -> Outcome {
        match self {
            Self::Digit(_) | Self::Decimal => self
                .to_char()
                .map_or(Outcome::Ignored(Ignored::InvalidToken), |token| {
                    calculator.append_digit(token)
                }),
            Self::Operator(op) => calculator.select_operator(op),
            Self::Equals => calculator.compute(),
            Self::Delete => calculator.delete_last(),
            Self::AllClear => calculator.reset(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{}", d),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span,
        }
    }

    /// True if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col.checked_sub(self.col).is_some_and(|offset| offset < self.span)
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [   AC    ] [DEL] [ ÷ ]
/// [ 1 ] [ 2 ] [ 3 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ . ] [ 0 ] [    =    ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{AllClear, Decimal, Delete, Digit, Equals, Operator as Op};

        let buttons = vec![
            // Row 0: AC DEL ÷
            KeypadButtonDef::spanning(AllClear, 0, 0, 2),
            KeypadButtonDef::new(Delete, 0, 2),
            KeypadButtonDef::new(Op(Operator::Divide), 0, 3),
            // Row 1: 1 2 3 *
            KeypadButtonDef::new(Digit(1), 1, 0),
            KeypadButtonDef::new(Digit(2), 1, 1),
            KeypadButtonDef::new(Digit(3), 1, 2),
            KeypadButtonDef::new(Op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(Op(Operator::Add), 2, 3),
            // Row 3: 7 8 9 -
            KeypadButtonDef::new(Digit(7), 3, 0),
            KeypadButtonDef::new(Digit(8), 3, 1),
            KeypadButtonDef::new(Digit(9), 3, 2),
            KeypadButtonDef::new(Op(Operator::Subtract), 3, 3),
            // Row 4: . 0 =
            KeypadButtonDef::new(Decimal, 4, 0),
            KeypadButtonDef::new(Digit(0), 4, 1),
            KeypadButtonDef::spanning(Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label; operators also match their aliases
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        let label = label.trim();
        self.buttons
            .iter()
            .find(|b| b.action.label() == label)
            .or_else(|| {
                let op = Operator::from_symbol(label)?;
                self.buttons
                    .iter()
                    .find(|b| b.action == KeypadAction::Operator(op))
            })
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let element = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_attr(btn.action.role().data_attr(), "")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col));
                if btn.span > 1 {
                    element.with_class("span-two")
                } else {
                    element
                }
            })
            .collect()
    }
}
