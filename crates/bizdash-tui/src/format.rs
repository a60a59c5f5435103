//! Display formatting for money, percentages and dates

use bizdash_core::Decimal;
use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// `-$1,234.50` style amount: two decimals, comma-grouped thousands
pub fn money(symbol: &str, value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", value.abs().round_dp(2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{symbol}{}.{cents}", group_thousands(whole))
}

/// Percentage with one decimal place, e.g. `76.7%`
pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// Short date shown in list rows
pub fn date(value: NaiveDate) -> String {
    value.format("%b %d, %Y").to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate to `max` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
