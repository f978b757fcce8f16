//! Currency and percentage formatting helpers
//!
//! Calculators return raw dollar amounts. These helpers turn them into the strings shown
//! on result panels ("$1.2M", "$250K", "78%").

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// This is the rounding rule all illustration figures were published with, so
/// `round_half_up(-2.5) == -2.0` where `f64::round` would give `-3.0`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Format as whole dollars with thousands separators, e.g. `$1,234,568`
pub fn format_currency(value: f64) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Format with a K/M abbreviation, e.g. `$1.2M`, `$250K`, `$950`
pub fn format_compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let thousands = round_half_up(magnitude / 1_000.0);

    // Pick the unit after rounding so 999,600 reads $1.0M rather than $1000K
    if thousands >= 1_000.0 {
        format!("{}${:.1}M", sign, magnitude / 1_000_000.0)
    } else if round_half_up(magnitude) >= 1_000.0 {
        format!("{}${}K", sign, thousands as u64)
    } else {
        format!("{}${}", sign, round_half_up(magnitude) as u64)
    }
}

/// Format a percentage value (already scaled to 0-100) as `78%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_half_up(value) as i64)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1_000;
        value /= 1_000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(93.6), 94.0);
        assert_eq!(round_half_up(93.5), 94.0);
        assert_eq!(round_half_up(93.4), 93.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.8), "$1,234,568");
        assert_eq!(format_currency(-556_000.0), "-$556,000");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(27_220_000.0), "$27.2M");
        assert_eq!(format_compact_currency(1_000_000.0), "$1.0M");
        assert_eq!(format_compact_currency(250_000.0), "$250K");
        assert_eq!(format_compact_currency(950.0), "$950");
    }

    #[test]
    fn test_compact_currency_promotes_at_unit_boundaries() {
        assert_eq!(format_compact_currency(999_600.0), "$1.0M");
        assert_eq!(format_compact_currency(999_400.0), "$999K");
        assert_eq!(format_compact_currency(999.6), "$1K");
        assert_eq!(format_compact_currency(-999_600.0), "-$1.0M");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(78.25), "78%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
