//! Money parsing and formatting.
//!
//! Amounts are carried as integer cents everywhere. Parsing accepts plain
//! decimals as well as locale-formatted strings such as `"R$ 1.234,56"`.
//! Formatting is locale aware: `pt-BR` renders `R$ 1.234,56`, `en-US`
//! renders `R$1,234.56`.

use crate::locale::Locale;

/// Normalize a user formatted amount into a plain `-1234.56` string.
///
/// When both `.` and `,` appear, whichever comes last is the decimal
/// separator. Currency symbols and thousands separators are dropped.
pub fn clean_amount(amount: &str) -> String {
    let last_dot = amount.rfind('.');
    let last_comma = amount.rfind(',');

    let decimal_char = match (last_dot, last_comma) {
        (Some(d), Some(c)) => {
            if d > c {
                Some('.')
            } else {
                Some(',')
            }
        }
        (Some(_), None) => Some('.'),
        (None, Some(_)) => Some(','),
        (None, None) => None,
    };

    let mut result = String::new();
    let mut has_decimal = false;

    for c in amount.chars() {
        if c.is_ascii_digit() {
            result.push(c);
        } else if Some(c) == decimal_char && !has_decimal {
            result.push('.');
            has_decimal = true;
        } else if c == '-' && result.is_empty() {
            result.push(c);
        }
    }

    result
}

/// Parse an amount into cents, rounding half away from zero past two decimals.
pub fn parse_amount_cents(amount: &str) -> Option<i64> {
    let cleaned = clean_amount(amount);
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut fraction_digits = fraction.chars().map(|c| c as i64 - '0' as i64);
    let tenths = fraction_digits.next().unwrap_or(0);
    let hundredths = fraction_digits.next().unwrap_or(0);
    let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

    let cents = whole
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths + i64::from(round_up))?;

    Some(if negative { -cents } else { cents })
}

/// Convert a floating point amount (as found in JSON payloads) into cents.
pub fn cents_from_f64(amount: f64) -> Option<i64> {
    if !amount.is_finite() {
        return None;
    }
    let cents = (amount * 100.0).round();
    if cents.abs() > i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Sum of cent amounts, clamped at the `i64` bounds instead of overflowing.
pub fn sum_cents(amounts: impl IntoIterator<Item = i64>) -> i64 {
    amounts.into_iter().fold(0, i64::saturating_add)
}

/// Plain `123.45` rendering without symbol or separators.
pub fn format_cents(cents: i64) -> String {
    let is_negative = cents < 0;
    let abs_cents = cents.unsigned_abs();
    let whole = abs_cents / 100;
    let remainder = abs_cents % 100;

    if is_negative {
        format!("-{}.{:02}", whole, remainder)
    } else {
        format!("{}.{:02}", whole, remainder)
    }
}

/// Currency rendering with thousands separators, e.g. `R$ 1.234,56`.
pub fn format_money(cents: i64, currency: &str, locale: Locale) -> String {
    let is_negative = cents < 0;
    let abs_cents = cents.unsigned_abs();
    let whole = abs_cents / 100;
    let fractional = abs_cents % 100;

    let (thousands_sep, decimal_sep) = locale.separators();
    let whole_str = format_with_thousands(whole, thousands_sep);
    let symbol = currency_symbol(currency);
    let spacer = match locale {
        Locale::PtBr => "\u{00a0}",
        Locale::EnUs => "",
    };
    let sign = if is_negative { "-" } else { "" };

    format!(
        "{}{}{}{}{}{:02}",
        sign, symbol, spacer, whole_str, decimal_sep, fractional
    )
}

fn format_with_thousands(n: u64, sep: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_uppercase().as_str() {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{00a3}",
        _ => "R$",
    }
}
