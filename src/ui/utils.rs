/// Formats a price with "Trader Precision".
/// - Large (>=1000): grouped thousands, 2 decimals ($30,123.45)
/// - Medium (1-1000): 2 decimals ($12.48)
/// - Small (<1): 4 decimals ($0.0823)
/// - Tiny (<0.01): 6 decimals ($0.000023)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let sign = if price < 0.0 { "-" } else { "" };
    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        let formatted = format!("{:.2}", abs_price);
        let (int_part, dec_part) = formatted
            .split_once('.')
            .unwrap_or((formatted.as_str(), "00"));
        format!("{}${}.{}", sign, group_thousands(int_part), dec_part)
    } else if abs_price >= 1.0 {
        format!("{}${:.2}", sign, abs_price)
    } else if abs_price >= 0.01 {
        format!("{}${:.4}", sign, abs_price)
    } else {
        format!("{}${:.6}", sign, abs_price)
    }
}

/// Magnitude of a percent change, sign carried by the ▲/▼ glyph instead.
pub fn format_percent_magnitude(change: f64) -> String {
    format!("{:.1}%", change.abs())
}

/// Compact dollar notation for market cap / volume columns ($584.3B, $12.1M).
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1e12 {
        format!("{}${:.1}T", sign, abs / 1e12)
    } else if abs >= 1e9 {
        format!("{}${:.1}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}${:.1}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}${:.1}K", sign, abs / 1e3)
    } else {
        format_price(value)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
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
    fn prices_group_thousands() {
        assert_eq!(format_price(30_000.0), "$30,000.00");
        assert_eq!(format_price(584_300.0), "$584,300.00");
        assert_eq!(format_price(1_234_567.89), "$1,234,567.89");
    }

    #[test]
    fn prices_scale_decimals_by_magnitude() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(22.0), "$22.00");
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(0.08), "$0.0800");
        assert_eq!(format_price(0.0012), "$0.001200");
    }

    #[test]
    fn negative_prices_keep_the_sign_outside() {
        assert_eq!(format_price(-2_500.0), "-$2,500.00");
    }

    #[test]
    fn percent_magnitude_drops_the_sign() {
        assert_eq!(format_percent_magnitude(2.5), "2.5%");
        assert_eq!(format_percent_magnitude(-1.8), "1.8%");
        assert_eq!(format_percent_magnitude(0.0), "0.0%");
    }

    #[test]
    fn compact_usd_picks_the_right_suffix() {
        assert_eq!(format_compact_usd(584_300_000_000.0), "$584.3B");
        assert_eq!(format_compact_usd(12_100_000_000.0), "$12.1B");
        assert_eq!(format_compact_usd(412_000_000.0), "$412.0M");
        assert_eq!(format_compact_usd(1_500.0), "$1.5K");
        assert_eq!(format_compact_usd(2_300_000_000_000.0), "$2.3T");
        assert_eq!(format_compact_usd(999.0), "$999.00");
    }
}
