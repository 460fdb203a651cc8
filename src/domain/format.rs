//! Display helpers shared by the report and the UI.

/// `$1,234,567` style, rounded to whole dollars.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `$1.2M` / `$45k` / `$900` for KPI cards.
pub fn format_usd_compact(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs.round() >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs.round() >= 1_000.0 {
        format!("{sign}${:.0}k", abs / 1_000.0)
    } else {
        format!("{sign}${:.0}", abs)
    }
}

/// Fraction rendered as a whole percentage.
pub fn format_fraction(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

pub fn format_roi(roi: Option<f64>) -> String {
    roi.filter(|value| value.is_finite())
        .map(|value| format!("{value:.1}x"))
        .unwrap_or_else(|| "n/a".to_string())
}

pub fn format_pageviews(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.0}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(370_000.0), "$370,000");
        assert_eq!(format_usd(999.6), "$1,000");
        assert_eq!(format_usd(-12_500.0), "-$12,500");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn compact_usd_picks_a_unit() {
        assert_eq!(format_usd_compact(2_450_000.0), "$2.5M");
        assert_eq!(format_usd_compact(45_200.0), "$45k");
        assert_eq!(format_usd_compact(-900.0), "-$900");
    }

    #[test]
    fn roi_without_fee_is_not_applicable() {
        assert_eq!(format_roi(Some(13.333)), "13.3x");
        assert_eq!(format_roi(None), "n/a");
    }
}
