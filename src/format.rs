//! Currency display helpers for the CLI
//!
//! Presentation only. The engine itself never rounds.

/// Format a currency value with cents, e.g. `$1,234.50`
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value as i64;
    let cents = ((abs_value - dollars as f64) * 100.0).round() as i64;

    let grouped = group_thousands(dollars);
    if value >= 0.0 {
        format!("${}.{:02}", grouped, cents)
    } else {
        format!("-${}.{:02}", grouped, cents)
    }
}

/// Format a currency value without cents, e.g. `$1,235`
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as i64;

    let grouped = group_thousands(dollars);
    if value >= 0.0 {
        format!("${}", grouped)
    } else {
        format!("-${}", grouped)
    }
}

fn group_thousands(dollars: i64) -> String {
    let digits = dollars.to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_234.5), "$1,234.50");
        assert_eq!(format_currency(-98_765.432), "-$98,765.43");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(1_234.5), "$1,235");
        assert_eq!(format_currency_short(-42.4), "-$42");
        assert_eq!(format_currency_short(54_600.0), "$54,600");
    }
}
