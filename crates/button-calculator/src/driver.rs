//! Unified Calculator Driver
//!
//! Write the behavior checks once, run them against any front end. A driver
//! presses buttons by label and reads back the two display lines; the
//! `verify_*` functions below are written only against that interface.

use crate::config::DriverConfig;
use crate::core::{CalcError, CalcResult, Calculator, DisplayText, Outcome};
use crate::dom::{DisplaySink, MockDom};
use crate::keypad::{ButtonRole, Keypad, KeypadAction};
use tracing::debug;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button with this label
    fn press(&mut self, label: &str) -> CalcResult<Outcome>;

    /// Text of the current-entry line
    fn current_display(&self) -> String;

    /// Text of the previous-operand line
    fn previous_display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses several buttons in order, stopping at the first error
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<Vec<Outcome>> {
        labels.iter().map(|label| self.press(label)).collect()
    }
}

/// Driver wrapping the calculator, its keypad, and the page it renders to
#[derive(Debug)]
pub struct KeypadDriver {
    calculator: Calculator,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for KeypadDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadDriver {
    /// Creates a driver with the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DriverConfig::default())
    }

    /// Creates a driver with the given configuration
    #[must_use]
    pub fn with_config(config: DriverConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad, config);
        let mut driver = Self {
            calculator: Calculator::new(),
            keypad,
            dom,
        };
        driver.sync_display();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns a reference to the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Clicks a page element: one state change, then one render
    pub fn click(&mut self, element_id: &str) -> CalcResult<Outcome> {
        let action = self.resolve(element_id)?;
        self.dom.dispatch_click(element_id);

        let outcome = action.apply(&mut self.calculator);
        if let Some(reason) = outcome.ignored() {
            debug!(element_id, ?action, %reason, "click had no effect");
        }
        self.sync_display();
        Ok(outcome)
    }

    /// Reads the clicked button's role and label from the page
    fn resolve(&self, element_id: &str) -> CalcResult<KeypadAction> {
        let unknown = || CalcError::UnknownElement {
            id: element_id.to_string(),
        };
        let element = self.dom.get_element(element_id).ok_or_else(unknown)?;
        let role = ButtonRole::ALL
            .into_iter()
            .find(|role| element.has_attr(role.data_attr()))
            .ok_or_else(unknown)?;
        KeypadAction::from_button(role, &element.text_content)
    }

    /// Current display as rendered by the calculator
    #[must_use]
    pub fn display(&self) -> DisplayText {
        self.calculator.render()
    }

    fn sync_display(&mut self) {
        let display = self.calculator.render();
        self.dom.show(&display);
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) -> CalcResult<Outcome> {
        let id = self
            .keypad
            .find_button_by_label(label)
            .map(|button| button.id.clone())
            .ok_or_else(|| CalcError::UnknownButton {
                role: "keypad".to_string(),
                label: label.to_string(),
            })?;
        self.click(&id)
    }

    fn current_display(&self) -> String {
        self.dom.current_text().to_string()
    }

    fn previous_display(&self) -> String {
        self.dom.previous_text().to_string()
    }

    fn clear(&mut self) {
        let _ = self.calculator.reset();
        self.sync_display();
    }
}

// ===== Unified Behavior Specifications =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies digit entry and thousands grouping
pub fn verify_entry_and_grouping<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&["1", "2", "3", "4", "5", "6", "7"]).unwrap();
    assert_eq!(driver.current_display(), "1,234,567");
    assert_eq!(driver.previous_display(), "");
    driver.clear();
    assert_eq!(driver.current_display(), "");
}

/// Verifies operator selection and left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&["5", "+", "3"]).unwrap();
    assert_eq!(driver.previous_display(), "5 +");
    assert_eq!(driver.current_display(), "3");

    driver.press("+").unwrap();
    assert_eq!(driver.previous_display(), "8 +");
    assert_eq!(driver.current_display(), "");

    driver.press_all(&["2", "="]).unwrap();
    assert_eq!(driver.current_display(), "10");
    assert_eq!(driver.previous_display(), "");
    driver.clear();
}

/// Verifies decimal point handling
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press(".").unwrap();
    assert_eq!(driver.current_display(), ".");

    let outcome = driver.press(".").unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(driver.current_display(), ".");
    driver.clear();

    driver.press_all(&["1", "0", "0", "0", ".", "5", "0"]).unwrap();
    assert_eq!(driver.current_display(), "1,000.50");
    driver.clear();
}

/// Verifies delete
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    let outcome = driver.press("DEL").unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(driver.current_display(), "");

    driver.press_all(&["1", "2", "3", "4", "DEL"]).unwrap();
    assert_eq!(driver.current_display(), "123");
    driver.clear();
}

/// Verifies division by zero shows a non-finite result instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&["5", "÷", "0", "="]).unwrap();
    assert_eq!(driver.current_display(), "∞");
    driver.clear();
}

/// Verifies that an operator with nothing entered leaves the display alone
pub fn verify_ignored_operator<D: CalculatorDriver>(driver: &mut D) {
    let outcome = driver.press("*").unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(driver.previous_display(), "");

    driver.press_all(&["9", "*"]).unwrap();
    let outcome = driver.press("-").unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(driver.previous_display(), "9 *");
    driver.clear();
}

/// Runs every behavior specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_entry_and_grouping(driver);
    verify_chaining(driver);
    verify_decimal_entry(driver);
    verify_delete(driver);
    verify_division_by_zero(driver);
    verify_ignored_operator(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ignored;

    // ===== Unified specification tests =====

    #[test]
    fn test_keypad_driver_entry_and_grouping() {
        verify_entry_and_grouping(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_chaining() {
        verify_chaining(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_decimal_entry() {
        verify_decimal_entry(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_delete() {
        verify_delete(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_division_by_zero() {
        verify_division_by_zero(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_ignored_operator() {
        verify_ignored_operator(&mut KeypadDriver::new());
    }

    #[test]
    fn test_keypad_driver_full_specification() {
        run_full_specification(&mut KeypadDriver::new());
    }

    // ===== KeypadDriver tests =====

    #[test]
    fn test_driver_starts_blank() {
        let driver = KeypadDriver::new();
        assert_eq!(driver.current_display(), "");
        assert_eq!(driver.previous_display(), "");
        assert_eq!(driver.display(), DisplayText::default());
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_click_by_element_id() {
        let mut driver = KeypadDriver::new();
        assert_eq!(driver.click("btn-7").unwrap(), Outcome::Applied);
        assert_eq!(driver.click("btn-divide").unwrap(), Outcome::Applied);
        assert_eq!(driver.previous_display(), "7 ÷");
        assert_eq!(driver.calculator().previous().text(), "7");
    }

    #[test]
    fn test_click_unknown_element() {
        let mut driver = KeypadDriver::new();
        let err = driver.click("btn-percent").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownElement {
                id: "btn-percent".into()
            }
        );
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_click_output_region_is_not_a_button() {
        let mut driver = KeypadDriver::new();
        let err = driver.click("current-operand").unwrap_err();
        assert!(matches!(err, CalcError::UnknownElement { .. }));
    }

    #[test]
    fn test_click_records_events() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["1", "+", "1", "="]).unwrap();
        let ids: Vec<_> = driver
            .dom()
            .event_history()
            .iter()
            .map(|e| e.element_id.as_str())
            .collect();
        assert_eq!(ids, ["btn-1", "btn-plus", "btn-1", "btn-equals"]);
    }

    #[test]
    fn test_press_unknown_label() {
        let mut driver = KeypadDriver::new();
        let err = driver.press("%").unwrap_err();
        assert!(matches!(err, CalcError::UnknownButton { .. }));
    }

    #[test]
    fn test_press_operator_aliases() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["6", "×", "7", "="]).unwrap();
        assert_eq!(driver.current_display(), "42");
    }

    #[test]
    fn test_press_reports_ignored_reason() {
        let mut driver = KeypadDriver::new();
        assert_eq!(
            driver.press("=").unwrap(),
            Outcome::Ignored(Ignored::UnparsableOperand)
        );
    }

    #[test]
    fn test_all_clear_button() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["4", "-", "1"]).unwrap();
        driver.press("AC").unwrap();
        assert_eq!(driver.current_display(), "");
        assert_eq!(driver.previous_display(), "");
        assert_eq!(driver.calculator(), &Calculator::new());
    }

    #[test]
    fn test_result_then_typing_continues() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["2", "*", "3", "=", "1"]).unwrap();
        assert_eq!(driver.current_display(), "61");
    }

    #[test]
    fn test_negative_fractional_result() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["1", "-", "1", ".", "5", "="]).unwrap();
        assert_eq!(driver.current_display(), "-0.5");
    }

    #[test]
    fn test_large_result_grouped() {
        let mut driver = KeypadDriver::new();
        driver
            .press_all(&["9", "9", "9", "9", "*", "9", "9", "9", "9", "="])
            .unwrap();
        assert_eq!(driver.current_display(), "99,980,001");
    }

    #[test]
    fn test_display_matches_render() {
        let mut driver = KeypadDriver::new();
        driver.press_all(&["1", "2", "0", "0", "÷"]).unwrap();
        let display = driver.display();
        assert_eq!(display.current, driver.current_display());
        assert_eq!(display.previous, driver.previous_display());
        assert_eq!(display.previous, "1,200 ÷");
    }

    #[test]
    fn test_driver_without_event_recording() {
        let mut driver = KeypadDriver::with_config(DriverConfig::new().with_record_events(false));
        driver.press("5").unwrap();
        assert!(driver.dom().event_history().is_empty());
        assert_eq!(driver.current_display(), "5");
    }

    #[test]
    fn test_keypad_accessor() {
        let driver = KeypadDriver::new();
        assert_eq!(driver.keypad().button_count(), 18);
    }
}
