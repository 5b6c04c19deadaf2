//! Display formatting for the terminal tables.

/// "$1,245,678": whole dollars with thousands separators.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = value.abs().round() as i64;
    format!("{sign}${}", group_thousands(&whole.to_string()))
}

/// "12.4%"
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// "+12.4%" / "-8.3%"
pub fn signed_percent(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}%")
}

/// Two-decimal ratio, for Sharpe and friends.
pub fn ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// "2.5M" style magnitude shorthand.
pub fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(1_245_678.0), "$1,245,678");
        assert_eq!(currency(999.4), "$999");
        assert_eq!(currency(-12_500.0), "-$12,500");
    }

    #[test]
    fn percents_carry_the_requested_precision() {
        assert_eq!(percent(12.4, 1), "12.4%");
        assert_eq!(signed_percent(12.4, 1), "+12.4%");
        assert_eq!(signed_percent(-8.3, 1), "-8.3%");
    }

    #[test]
    fn ratio_is_two_decimals() {
        assert_eq!(ratio(1.8235), "1.82");
    }

    #[test]
    fn compact_scales_by_magnitude() {
        assert_eq!(compact(2_500_000.0), "2.5M");
        assert_eq!(compact(1_300.0), "1.3K");
        assert_eq!(compact(4_200_000_000.0), "4.2B");
        assert_eq!(compact(42.0), "42");
    }
}
