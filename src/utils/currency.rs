use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as US dollars: `$1,234.50`, `-$3.00`.
///
/// Cents are rounded half away from zero on the shortest decimal spelling of
/// the amount, so `2.675` becomes `$2.68`.
pub fn format_usd(amount: f64) -> String {
    let cents = round_to_cents(amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let negative = amount < 0.0 && cents.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}${}.{}", if negative { "-" } else { "" }, group_thousands(whole), frac)
}

fn round_to_cents(amount: f64) -> String {
    match Decimal::from_str(&amount.to_string()) {
        Ok(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Beyond Decimal's range; cents are noise at that magnitude anyway
        Err(_) => format!("{:.2}", amount),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
