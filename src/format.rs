pub const CURRENCY_SYMBOL: &str = "$";
pub const SYMBOL_SEPARATOR: char = '\u{a0}';
pub const GROUP_SEPARATOR: char = '.';
pub const SCALE_DIVISOR: u128 = 1_000_000_000_000;
pub const SCALE_SUFFIX: &str = "B";

pub fn format_currency(amount: impl Into<i128>) -> String {
    let amount = amount.into();
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL}{SYMBOL_SEPARATOR}{}",
        group_thousands(amount.unsigned_abs())
    )
}

pub fn format_scaled(amount: impl Into<i128>) -> String {
    let amount = amount.into();
    let magnitude = amount.unsigned_abs();
    let whole = magnitude / SCALE_DIVISOR;
    let rest = magnitude % SCALE_DIVISOR;
    // Half away from zero on the exact value.
    let hundredths = whole * 100 + (rest * 100 + SCALE_DIVISOR / 2) / SCALE_DIVISOR;
    let sign = if amount < 0 && hundredths > 0 { "-" } else { "" };
    format!(
        "{CURRENCY_SYMBOL}{sign}{}.{:02}{SCALE_SUFFIX}",
        hundredths / 100,
        hundredths % 100
    )
}

pub fn format_share(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

pub fn format_plain_percent(value: f64) -> String {
    format!("{value}%")
}

fn group_thousands(value: u128) -> String {
    let raw = value.to_string();
    let len = raw.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/format.rs"]
mod tests;
