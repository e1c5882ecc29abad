//! Number parsing and display formatting
//!
//! Entries are kept as the text the user typed and only parsed when a
//! computation or the display needs a value. Parsing takes the longest
//! numeric prefix of the text (so `"1."` is `1` and `"."` is no number at
//! all), and a computed result is written back with the shortest digits that
//! round-trip, switching to exponent form outside `1e-7 < |x| < 1e21`.
//!
//! Display formatting groups the integer part in the fixed `en` style and
//! reproduces the fractional part exactly as typed.

/// Thousands separator for the `en` grouping style
pub const GROUP_SEPARATOR: char = ',';

/// Decimal point accepted on input and shown on the display
pub const DECIMAL_POINT: char = '.';

/// Decimal point positions past this are written in exponent form
const MAX_PLAIN_POSITION: i32 = 21;

/// Decimal point positions at or below this are written in exponent form
const MIN_PLAIN_POSITION: i32 = -6;

const INFINITY_LITERAL: &str = "Infinity";

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace and a sign are accepted, followed by either
/// `Infinity` or a decimal literal with an optional exponent. Returns `None`
/// when no prefix is numeric, which covers empty text and a lone `"."`.
///
/// ```rust
/// # use button_calculator::core::number::parse_float;
/// assert_eq!(parse_float("1."), Some(1.0));
/// assert_eq!(parse_float("12abc"), Some(12.0));
/// assert_eq!(parse_float("."), None);
/// ```
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return None;
    }
    trimmed[..len].parse::<f64>().ok()
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with(INFINITY_LITERAL) {
        return i + INFINITY_LITERAL.len();
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Shortest round-trip digits of a finite, positive value and the position
/// of the decimal point relative to the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

/// Writes a computed value back as entry text.
///
/// Uses the shortest digits that parse back to the same value. Magnitudes of
/// `1e21` and above, or below `1e-6`, use exponent form (`1e+21`, `1.5e-7`).
/// Negative zero prints as `0`.
#[must_use]
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_sign_negative() {
        return format!("-{}", number_to_text(-value));
    }
    if value.is_infinite() {
        return INFINITY_LITERAL.to_string();
    }

    let (digits, point) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= point && point <= MAX_PLAIN_POSITION {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= MAX_PLAIN_POSITION {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}{DECIMAL_POINT}{frac}")
    } else if MIN_PLAIN_POSITION < point && point <= 0 {
        format!("0{DECIMAL_POINT}{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exponent.abs())
        } else {
            format!("{lead}{DECIMAL_POINT}{rest}e{sign}{}", exponent.abs())
        }
    }
}

/// Formats a value with no fraction digits and `en` thousands grouping.
///
/// Rounds half away from zero. Infinities render as `∞` and `-∞`; NaN renders
/// as an empty string.
#[must_use]
pub fn group_integer(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let magnitude = rounded.abs();
    if magnitude.is_infinite() {
        return format!("{sign}∞");
    }

    let digits = if magnitude == 0.0 {
        "0".to_string()
    } else {
        let (digits, point) = shortest_digits(magnitude);
        let padding = (point - digits.len() as i32).max(0) as usize;
        format!("{digits}{}", "0".repeat(padding))
    };
    format!("{sign}{}", insert_separators(&digits))
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Formats entry text for the display.
///
/// The text is split on the decimal point. The integer part is grouped with
/// [`group_integer`], or left empty when it is not a number (for example while
/// only `"."` has been typed). A fractional part, even an empty one, is
/// appended verbatim after the point, so trailing zeros and an in-progress
/// decimal point are shown exactly as entered.
///
/// ```rust
/// # use button_calculator::core::number::format_for_display;
/// assert_eq!(format_for_display("1000"), "1,000");
/// assert_eq!(format_for_display("1000.50"), "1,000.50");
/// assert_eq!(format_for_display("1."), "1.");
/// assert_eq!(format_for_display(""), "");
/// ```
#[must_use]
pub fn format_for_display(text: &str) -> String {
    let mut parts = text.split(DECIMAL_POINT);
    let integer_part = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let integer_display = parse_float(integer_part)
        .map(group_integer)
        .unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{integer_display}{DECIMAL_POINT}{fraction}"),
        None => integer_display,
    }
}
