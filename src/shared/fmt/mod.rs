//! Display formatting for analytics values.
//!
//! Mirrors how the trading screens render numbers: two decimal places,
//! en-US thousands separators, explicit sign on PnL, and a dash when a
//! metric cannot be computed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a metric that is unavailable.
pub const PLACEHOLDER: &str = "—";

/// Insert `,` thousands separators into a plain decimal string.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn fixed(value: &Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1$}", rounded, dp as usize)
}

/// `$1,234.56`
pub fn usd(value: &Decimal) -> String {
    let body = group_thousands(&fixed(&value.abs(), 2));
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// `+$80.00` / `-$12.50`
pub fn signed_usd(value: &Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        usd(value)
    } else {
        format!("+{}", usd(value))
    }
}

/// Render a ratio (`0.4`) as a percentage (`40.00%`).
///
/// Ratios too large to scale by 100 render as [`PLACEHOLDER`].
pub fn ratio_percent(ratio: &Decimal) -> String {
    match ratio.checked_mul(Decimal::ONE_HUNDRED) {
        Some(pct) => percent(&pct),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render an already-scaled percentage (`12.5`) as `12.50%`.
pub fn percent(pct: &Decimal) -> String {
    format!("{}%", fixed(pct, 2))
}

/// Format a fallible metric, falling back to [`PLACEHOLDER`].
pub fn or_placeholder<T, E>(value: Result<T, E>, f: impl FnOnce(&T) -> String) -> String {
    match value {
        Ok(v) => f(&v),
        Err(_) => PLACEHOLDER.to_string(),
    }
}
