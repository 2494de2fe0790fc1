use iron_capital_web::format_utils::{
    format_change, format_change_percent, format_compact, format_grouped, format_price, format_ratio,
};

#[test]
fn compact_magnitudes() {
    assert_eq!(format_compact(2.9e12), "2.90T");
    assert_eq!(format_compact(1.7e9), "1.70B");
    assert_eq!(format_compact(45_234_567.0), "45.23M");
    assert_eq!(format_compact(1_500.0), "1.50K");
    assert_eq!(format_compact(999.0), "999");
    assert_eq!(format_compact(1e3), "1.00K");
}

#[test]
fn grouped_numbers() {
    assert_eq!(format_grouped(164_000.0), "164,000");
    assert_eq!(format_grouped(1_234_567.891), "1,234,567.891");
    assert_eq!(format_grouped(12.5), "12.5");
    assert_eq!(format_grouped(-1_250.0), "-1,250");
    assert_eq!(format_grouped(0.0), "0");
}

#[test]
fn price_and_change_cells() {
    assert_eq!(format_price(185.92), "$185.92");
    assert_eq!(format_change(2.45), "+$2.45");
    assert_eq!(format_change(-1.25), "-$1.25");
    assert_eq!(format_change_percent(1.34), "(+1.34%)");
    assert_eq!(format_change_percent(-0.33), "(-0.33%)");
}

#[test]
fn unknown_ratio_is_a_dash() {
    assert_eq!(format_ratio(Some(25.8)), "25.8");
    assert_eq!(format_ratio(Some(0.0)), "-");
    assert_eq!(format_ratio(None), "-");
}
