//! Currency formatting for group totals.

use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Formats an aggregated amount for display with the given currency code.
///
/// A pure function: the currency code is an explicit argument on every
/// call, never state carried between calls.
///
/// Rules:
/// - grouping separators in the integer part (`1,919`);
/// - zero to two fraction digits, trailing zeros trimmed (`1919.95` →
///   `1,919.95`, `1920.50` → `1,920.5`, `1920.00` → `1,920`);
/// - known ISO codes render as a symbol prefix (`€1,919.95`); unknown
///   codes fall back to the raw code as prefix (`XTS 1,919.95`).
#[must_use]
pub fn format_currency(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    let fraction = match cents % 100 {
        0 => String::new(),
        tenths if tenths % 10 == 0 => format!(".{}", tenths / 10),
        exact => format!(".{exact:02}"),
    };

    match Currency::from_code(code) {
        Some(currency) => format!("{sign}{}{whole}{fraction}", currency.symbol()),
        None => format!("{sign}{code} {whole}{fraction}"),
    }
}
