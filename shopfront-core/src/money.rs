//! Price parsing and currency display.

/// Parse a displayed price label by keeping only its ASCII digits.
///
/// Labels such as `"NPR 1,250"` or `"Rs. 1 250/-"` yield `1250`. A label with
/// no digits, or one too long to fit, yields `0`.
#[must_use]
pub fn parse_price(label: &str) -> u64 {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Group an amount into comma-separated thousands (`2200` -> `"2,200"`).
#[must_use]
pub fn group_thousands(amount: u64) -> String {
    let raw = amount.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with its currency label (`"NPR 2,200"`).
#[must_use]
pub fn format_amount(label: &str, amount: u64) -> String {
    format!("{label} {}", group_thousands(amount))
}
