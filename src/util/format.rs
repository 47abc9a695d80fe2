//! Dutch (nl-NL) number formatting for display.
//!
//! Grouping separator is `.`, decimal separator is `,`. Rounding follows the
//! float formatter of the standard library.

/// Non-breaking space placed between the euro sign and the amount.
const NBSP: char = '\u{a0}';

/// Text for NaN and the infinities, if `value` is one of them.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" })
    } else {
        None
    }
}

/// What: Insert a thousands separator into a run of ASCII digits.
///
/// Inputs:
/// - `digits`: Integer digits without sign
/// - `sep`: Separator to insert every three digits from the right
///
/// Output:
/// - Grouped digits, e.g. `1234567` with `.` becomes `1.234.567`.
#[must_use]
pub fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// What: Round, group and localize a finite value.
///
/// Inputs:
/// - `value`: Finite number
/// - `fraction_digits`: Digits after the decimal separator before trimming
/// - `trim_zeros`: Drop trailing fraction zeros (and the separator when nothing remains)
///
/// Output:
/// - `-1.234,5`-style text; a value that rounds to zero carries no sign.
fn localize(value: f64, fraction_digits: usize, trim_zeros: bool) -> String {
    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = if trim_zeros {
        frac_part.trim_end_matches('0')
    } else {
        frac_part
    };
    let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, '.'));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// What: Format a plain number the way a Dutch reader expects.
///
/// Inputs:
/// - `value`: Any number
///
/// Output:
/// - At most three fraction digits, trailing zeros dropped: `1234.5` → `1.234,5`.
#[must_use]
pub fn format_number(value: f64) -> String {
    non_finite(value).map_or_else(|| localize(value, 3, true), str::to_string)
}

/// What: Format an amount in euros.
///
/// Inputs:
/// - `amount`: Amount in euros
///
/// Output:
/// - `€\u{a0}1.234,56`; negative amounts as `€\u{a0}-1.234,56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let body = non_finite(amount).map_or_else(|| localize(amount, 2, false), str::to_string);
    format!("€{NBSP}{body}")
}

/// What: Format a percentage.
///
/// Inputs:
/// - `percent`: Value in percent units (`12.345` means 12.345%)
///
/// Output:
/// - Exactly two fraction digits followed by `%`, e.g. `12,35%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    let body = non_finite(percent).map_or_else(|| localize(percent, 2, false), str::to_string);
    format!("{body}%")
}
