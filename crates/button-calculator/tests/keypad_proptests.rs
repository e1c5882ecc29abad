//! Property-based tests for the keypad and the page driver

use button_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "÷", "=", "DEL", "AC",
    ])
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

// ===== KeypadAction properties =====

proptest! {
    /// Digits convert to their character
    #[test]
    fn prop_digit_action_to_char(d in digit_strategy()) {
        let ch = KeypadAction::Digit(d).to_char();
        prop_assert_eq!(ch.and_then(|c| c.to_digit(10)), Some(u32::from(d)));
    }

    /// Digits above 9 are rejected by the constructor
    #[test]
    fn prop_digit_constructor_rejects_out_of_range(d in 10u8..) {
        prop_assert_eq!(KeypadAction::digit(d), Err(CalcError::InvalidDigit(d)));
    }

    /// A button's label and role resolve back to its action
    #[test]
    fn prop_label_and_role_round_trip(index in 0usize..18) {
        let keypad = Keypad::new();
        let button = &keypad.buttons()[index];
        let resolved = KeypadAction::from_button(button.action.role(), &button.action.label());
        prop_assert_eq!(resolved, Ok(button.action));
    }
}

// ===== Keypad layout properties =====

proptest! {
    /// Every grid cell belongs to exactly one button
    #[test]
    fn prop_every_cell_has_a_button((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let button = keypad.get_button_at(row, col);
        prop_assert!(button.is_some());
        prop_assert!(button.unwrap().covers(row, col));
    }

    /// Cells outside the grid have no button
    #[test]
    fn prop_out_of_grid_has_no_button(row in 5usize..100, col in 4usize..100) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, 0).is_none());
        prop_assert!(keypad.get_button_at(0, col).is_none());
    }

    /// Finding by id returns the button with that id
    #[test]
    fn prop_find_by_id(index in 0usize..18) {
        let keypad = Keypad::new();
        let button = &keypad.buttons()[index];
        prop_assert_eq!(keypad.find_button_by_id(&button.id), Some(button));
    }
}

// ===== Driver properties =====

proptest! {
    /// After every click the page shows exactly what the calculator renders
    #[test]
    fn prop_page_matches_render(labels in prop::collection::vec(label_strategy(), 0..30)) {
        let mut driver = KeypadDriver::new();
        for label in labels {
            driver.press(label).unwrap();
            let display = driver.display();
            prop_assert_eq!(driver.current_display(), display.current);
            prop_assert_eq!(driver.previous_display(), display.previous);
        }
    }

    /// Every resolved click is recorded, up to the configured bound
    #[test]
    fn prop_click_history_bounded(
        labels in prop::collection::vec(label_strategy(), 0..30),
        max in 1usize..10,
    ) {
        let config = DriverConfig::new().with_max_events(max);
        let mut driver = KeypadDriver::with_config(config);
        for label in &labels {
            driver.press(label).unwrap();
        }
        prop_assert_eq!(driver.dom().event_history().len(), labels.len().min(max));
    }
}
