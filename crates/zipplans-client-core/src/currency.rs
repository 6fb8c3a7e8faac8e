//! Currency display formatting for the public plan cards.

/// Formats an amount as an `es-MX` MXN currency string, e.g. `$1,000.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
    }

    #[test]
    fn formats_small_and_fractional_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(83.33), "$83.33");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn keeps_the_sign_outside_the_symbol() {
        assert_eq!(format_currency(-50.0), "-$50.00");
    }
}
