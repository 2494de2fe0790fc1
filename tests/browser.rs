#![cfg(target_arch = "wasm32")]

use gloo::utils::format::JsValueSerdeExt;
use iron_capital_web::domain::logging::{LogComponent, LogLevel, Logger, TimeProvider};
use iron_capital_web::domain::screener::seed::default_stocks;
use iron_capital_web::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use iron_capital_web::presentation::{ScreenerApi, wasm_api::query_stocks};
use serde_json::{Value, json};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn symbols(rows: JsValue) -> Vec<String> {
    let rows: Vec<Value> = rows.into_serde().unwrap();
    rows.iter().map(|row| row["symbol"].as_str().unwrap().to_string()).collect()
}

#[wasm_bindgen_test]
fn console_logger_respects_min_level() {
    let logger = ConsoleLogger::new(LogLevel::Warn);
    assert!(!logger.enabled(LogLevel::Info));
    assert!(logger.enabled(LogLevel::Error));
    logger.warn(LogComponent::Infrastructure("Test"), "visible in the browser console");
}

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider::new();
    let now = clock.current_timestamp();
    assert!(now > 1_600_000_000_000);
    assert!(BrowserTimeProvider::now_secs() >= now / 1000);
    let label = clock.format_timestamp(now);
    assert_eq!(label.len(), "00:00:00.000".len());
}

#[wasm_bindgen_test]
fn query_records_from_javascript() {
    let stocks = JsValue::from_serde(&default_stocks()).unwrap();
    let criteria = JsValue::from_serde(&json!({
        "range": { "field": "price", "min": "160", "max": "250" }
    }))
    .unwrap();
    let sort = JsValue::from_serde(&json!({ "field": "price", "direction": "desc" })).unwrap();

    let rows = query_stocks(stocks, criteria, sort).unwrap();
    assert_eq!(symbols(rows), ["TSLA", "AAPL"]);
}

#[wasm_bindgen_test]
fn query_records_with_numeric_and_null_bounds() {
    let three: Vec<_> = default_stocks()
        .into_iter()
        .filter(|stock| ["AAPL", "TSLA", "JPM"].contains(&stock.symbol.value()))
        .collect();

    let criteria = JsValue::from_serde(&json!({
        "range": { "field": "price", "min": 160, "max": 250 }
    }))
    .unwrap();
    let rows = query_stocks(JsValue::from_serde(&three).unwrap(), criteria, JsValue::UNDEFINED).unwrap();
    assert_eq!(symbols(rows), ["AAPL", "TSLA"]);

    let criteria = JsValue::from_serde(&json!({
        "range": { "field": "price", "min": null, "max": 200 }
    }))
    .unwrap();
    let rows = query_stocks(JsValue::from_serde(&three).unwrap(), criteria, JsValue::UNDEFINED).unwrap();
    assert_eq!(symbols(rows), ["AAPL", "JPM"]);
}

#[wasm_bindgen_test]
fn query_records_without_criteria_or_sort() {
    let stocks = JsValue::from_serde(&default_stocks()).unwrap();
    let rows = query_stocks(stocks, JsValue::UNDEFINED, JsValue::NULL).unwrap();
    assert_eq!(symbols(rows).len(), 6);
}

#[wasm_bindgen_test]
fn screener_api_round_trip() {
    let mut api = ScreenerApi::new();
    api.set_sector("Technology".to_string());
    api.set_price_max("200".to_string());
    api.toggle_sort("price").unwrap();
    assert_eq!(symbols(api.visible_rows().unwrap()), ["GOOGL", "AAPL"]);

    assert!(api.toggle_sort("volumeWeighted").is_err());

    let sort: Value = api.sort_state().unwrap().into_serde().unwrap();
    assert_eq!(sort, json!({ "field": "price", "direction": "asc" }));

    let sectors: Vec<String> = api.sectors().unwrap().into_serde().unwrap();
    assert_eq!(sectors, ["Technology", "Automotive", "Financial Services"]);
}
