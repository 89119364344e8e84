//! Currency rendering for amounts shown to users.

use num_format::{Locale, ToFormattedString as _};

use crate::{Currency, Money};

/// Format an amount with currency symbol and `en` thousands separators.
///
/// Whole amounts are printed without decimals (`€1,200`), anything with a
/// cents part gets exactly two (`€1,200.50`). Negative amounts carry a
/// leading `-` before the symbol.
///
/// Derived amounts are already rounded half-up when they become `Money`, so
/// the displayed figures always add up to the computed totals.
#[must_use]
pub fn format_money(amount: Money, currency: Currency) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.minor().unsigned_abs();
    let scale = 10u64.pow(u32::from(currency.minor_units()));
    let major = (abs / scale).to_formatted_string(&Locale::en);
    let minor = abs % scale;

    if minor == 0 {
        format!("{sign}{}{major}", currency.symbol())
    } else {
        let width = usize::from(currency.minor_units());
        format!("{sign}{}{major}.{minor:0width$}", currency.symbol())
    }
}
