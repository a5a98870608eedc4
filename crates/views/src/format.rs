//! Display formatting helpers shared by the views.

/// Fallback shown when the service omitted an optional field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a dollar amount with thousands grouping, e.g. `$5,000` or
/// `$5,000.50`. Amounts are rounded to cents; whole amounts drop the
/// fraction entirely.
pub fn usd(amount: f64) -> String {
    format!("${}", grouped(amount))
}

/// Format a metric the way the service reported it: whole numbers without a
/// fraction, everything else with its decimals, e.g. `25`, `3.5`, `42.75`.
pub fn metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value}");
        while text.contains('.') && (text.ends_with('0') || text.ends_with('.')) {
            text.pop();
        }
        text
    }
}

/// Optional dollar metric with the `N/A` fallback.
pub fn usd_metric(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${}", metric(value)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn grouped(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut text = String::new();
    if negative {
        text.push('-');
    }
    text.push_str(&grouped);
    if fraction != 0 {
        if fraction % 10 == 0 {
            text.push_str(&format!(".{}", fraction / 10));
        } else {
            text.push_str(&format!(".{fraction:02}"));
        }
    }
    text
}
