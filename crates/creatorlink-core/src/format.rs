//! Display formatting shared by the wizard review step and campaign views.

/// Formats a whole currency amount with thousands separators, e.g.
/// `format_amount(125_000, "₹")` yields `₹125,000`.
#[must_use]
pub fn format_amount(amount: u64, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{symbol}{grouped}")
}

/// Formats a follower count compactly: `950`, `12.5K`, `1.2M`.
///
/// The fractional digit is truncated, never rounded up, so a creator just
/// below a boundary is never shown above it.
#[must_use]
pub fn format_follower_count(count: u64) -> String {
    const THOUSAND: u64 = 1_000;
    const MILLION: u64 = 1_000_000;

    let (unit, suffix) = match count {
        c if c >= MILLION => (MILLION, "M"),
        c if c >= THOUSAND => (THOUSAND, "K"),
        c => return c.to_string(),
    };
    let tenths = count / (unit / 10);
    let (whole, fraction) = (tenths / 10, tenths % 10);
    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}
