/// Compact magnitude for table cells.
///
/// - `>= 1e12` -> `2.90T`
/// - `>= 1e9`  -> `1.70B`
/// - `>= 1e6`  -> `45.23M`
/// - `>= 1e3`  -> `1.50K`
/// - otherwise the grouped plain number (`999`, `-1,250`)
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }
    format_grouped(value)
}

/// Thousands-separated number with at most three fraction digits and no
/// trailing zeros (`164,000`, `12.5`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Signed dollar change, `+$2.45` / `-$1.25`
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+${:.2}", change)
    } else {
        format!("-${:.2}", change.abs())
    }
}

/// Signed percent in parentheses, `(+1.34%)`
pub fn format_change_percent(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("({}{:.2}%)", sign, percent)
}

/// P/E cell; a dash when the ratio is unknown
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) if value != 0.0 => format!("{:.1}", value),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_handles_small_and_negative_values() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(12.5), "12.5");
        assert_eq!(format_grouped(-1250.0), "-1,250");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(1_234_567.891), "1,234,567.891");
    }
}
