//! Display formatting for dollar amounts and shares.
//!
//! Amounts are passed in cents. Formats:
//! - full: "$1,234,567.89" (or "$1,234,568" with no fraction digits)
//! - compact: "$6.3T", "$85B", "$950K"
//! - percent share: "12.35%"

/// Format cents as US dollars with thousands separators.
///
/// `fraction_digits` is 0 (rounded to whole dollars) or 2.
pub fn format_usd(cents: i64, fraction_digits: u8) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();

    if fraction_digits == 0 {
        let dollars = (abs_cents + 50) / 100;
        return format!("{}${}", sign, format_with_thousands(dollars, ','));
    }

    let whole = abs_cents / 100;
    let fractional = abs_cents % 100;
    format!(
        "{}${}.{:02}",
        sign,
        format_with_thousands(whole, ','),
        fractional
    )
}

/// Format cents in compact notation for chart labels.
pub fn format_compact(cents: i64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let sign = if cents < 0 { "-" } else { "" };
    let dollars = cents.unsigned_abs() as f64 / 100.0;

    for (scale, suffix) in SCALES {
        if dollars >= scale {
            let value = dollars / scale;
            let text = if value < 100.0 {
                trim_zero_fraction(format!("{:.1}", value))
            } else {
                format!("{:.0}", value)
            };
            return format!("{}${}{}", sign, text, suffix);
        }
    }

    format!("{}${:.0}", sign, dollars)
}

/// Share of `part` in `total` as a percentage with two decimals.
pub fn format_share(part: i64, total: i64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 / total as f64 * 100.0)
}

fn trim_zero_fraction(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// Format a number with thousands separators.
fn format_with_thousands(n: u64, sep: char) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let chars: Vec<char> = s.chars().rev().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}
