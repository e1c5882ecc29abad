//! Keypad Session Demo
//!
//! Clicks through a short calculation on the mock page and prints both
//! display lines after every click, then runs the behavior specifications.
//!
//! Run with: RUST_LOG=button_calculator=debug cargo run --example keypad_session

use button_calculator::driver::run_full_specification;
use button_calculator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> CalcResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut driver = KeypadDriver::new();

    println!("Keypad:");
    let (rows, cols) = driver.keypad().dimensions();
    for row in 0..rows {
        let mut line = String::new();
        let mut col = 0;
        while col < cols {
            match driver.keypad().get_button_at(row, col) {
                Some(button) => {
                    let width = 5 * button.span - 2;
                    line.push_str(&format!("[{:^width$}]", button.action.label()));
                    col += button.span;
                }
                None => col += 1,
            }
        }
        println!("  {line}");
    }
    println!();

    println!("{:<8} {:>20} {:>20}  outcome", "button", "previous", "current");
    let session = [
        "1", "2", "0", "0", ".", ".", "5", "+", "3", "0", "0", "+", "÷", "4", "=", "DEL",
    ];
    for label in session {
        let outcome = driver.press(label)?;
        let note = match outcome {
            Outcome::Applied => String::new(),
            Outcome::Ignored(reason) => format!("ignored: {reason}"),
        };
        println!(
            "{:<8} {:>20} {:>20}  {}",
            label,
            driver.previous_display(),
            driver.current_display(),
            note
        );
    }
    println!();

    println!("Page snapshot:");
    println!("{}", driver.dom().snapshot_json()?);
    println!();

    run_full_specification(&mut KeypadDriver::new());
    println!("All behavior specifications passed");
    Ok(())
}
