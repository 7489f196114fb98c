use rust_decimal::Decimal;

/// 1234567 -> "1,234,567"
pub fn format_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Sign goes before the symbol: -50 -> "-₦50"
pub fn format_currency(symbol: &str, amount: i64) -> String {
    let formatted = format_thousands(amount);
    match formatted.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", symbol, magnitude),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Rounded to whole currency units. Works on the decimal digits directly so
/// amounts beyond the i64 range keep their exact value.
pub fn format_decimal_currency(symbol: &str, amount: Decimal) -> String {
    let whole = amount.round();
    let magnitude = group_digits(&whole.abs().to_string());
    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-{}{}", symbol, magnitude)
    } else {
        format!("{}{}", symbol, magnitude)
    }
}

pub fn format_signed_percent(value: f64) -> String {
    format!("{:+.1}%", value)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1008), "1,008");
        assert_eq!(format_thousands(1_800_000), "1,800,000");
        assert_eq!(format_thousands(-12_345), "-12,345");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₦", 1500), "₦1,500");
        assert_eq!(format_currency("₦", -50), "-₦50");
        assert_eq!(format_decimal_currency("$", dec!(1799999.6)), "$1,800,000");
        assert_eq!(format_decimal_currency("₦", dec!(-50.2)), "-₦50");
        assert_eq!(format_decimal_currency("₦", dec!(-0.2)), "₦0");
    }

    #[test]
    fn test_decimal_currency_beyond_i64_keeps_value() {
        assert_eq!(
            format_decimal_currency("₦", Decimal::MAX),
            "₦79,228,162,514,264,337,593,543,950,335"
        );
        assert_eq!(
            format_decimal_currency("₦", dec!(9223372036854775808)),
            "₦9,223,372,036,854,775,808"
        );
        assert_eq!(
            format_decimal_currency("₦", Decimal::MIN),
            "-₦79,228,162,514,264,337,593,543,950,335"
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_signed_percent(3.448), "+3.4%");
        assert_eq!(format_signed_percent(-12.0), "-12.0%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
    }
}
