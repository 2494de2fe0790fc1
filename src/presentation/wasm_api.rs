use std::str::FromStr;

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::application::ScreenerSession;
use crate::domain::{
    logging::LogComponent,
    screener::{FilterCriteria, RecordStore, SortState, Stock, StockField, query_records, seed},
};
use crate::log_info;

fn to_js_error(context: &str, error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, error))
}

/// Stock screener driven from JavaScript. Holds its own criteria and sort,
/// so a host page can embed the engine without the Leptos UI.
#[wasm_bindgen]
pub struct ScreenerApi {
    session: ScreenerSession<Stock>,
}

#[wasm_bindgen]
impl ScreenerApi {
    /// Screener over the built-in stock list
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_store(RecordStore::new(seed::default_stocks()))
    }

    /// Screener over caller-supplied stocks (camelCase objects)
    #[wasm_bindgen(js_name = fromStocks)]
    pub fn from_stocks(stocks: JsValue) -> Result<ScreenerApi, JsValue> {
        let stocks: Vec<Stock> = stocks.into_serde().map_err(|e| to_js_error("stocks", e))?;
        log_info!(LogComponent::Presentation("ScreenerApi"), "loaded {} stocks", stocks.len());
        Ok(Self::with_store(RecordStore::new(stocks)))
    }

    fn with_store(store: RecordStore<Stock>) -> Self {
        Self { session: ScreenerSession::new(store, StockField::Price) }
    }

    #[wasm_bindgen(js_name = setSearch)]
    pub fn set_search(&mut self, search: String) {
        self.session.set_search(search);
    }

    #[wasm_bindgen(js_name = setSector)]
    pub fn set_sector(&mut self, sector: String) {
        self.session.set_category(sector);
    }

    #[wasm_bindgen(js_name = setPriceMin)]
    pub fn set_price_min(&mut self, min: String) {
        self.session.set_min(min);
    }

    #[wasm_bindgen(js_name = setPriceMax)]
    pub fn set_price_max(&mut self, max: String) {
        self.session.set_max(max);
    }

    /// Toggle sort on a camelCase field name such as `"changePercent"`
    #[wasm_bindgen(js_name = toggleSort)]
    pub fn toggle_sort(&mut self, field: &str) -> Result<(), JsValue> {
        let field = StockField::from_str(field).map_err(|e| to_js_error(field, e))?;
        self.session.toggle_sort(field);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Current sort as `{ field, direction }` or `null`
    #[wasm_bindgen(js_name = sortState)]
    pub fn sort_state(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(self.session.sort()).map_err(|e| to_js_error("sort", e))
    }

    #[wasm_bindgen(js_name = visibleRows)]
    pub fn visible_rows(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.session.visible_rows()).map_err(|e| to_js_error("rows", e))
    }

    pub fn sectors(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.session.categories()).map_err(|e| to_js_error("sectors", e))
    }
}

impl Default for ScreenerApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless query: `stocks` filtered by `criteria` and ordered by `sort`.
/// `criteria` is `{ search, category, range: { field, min, max } }` and
/// `sort` is `{ field, direction }` or `null`.
#[wasm_bindgen(js_name = queryRecords)]
pub fn query_stocks(stocks: JsValue, criteria: JsValue, sort: JsValue) -> Result<JsValue, JsValue> {
    let stocks: Vec<Stock> = stocks.into_serde().map_err(|e| to_js_error("stocks", e))?;
    let criteria: FilterCriteria<StockField> = if criteria.is_undefined() || criteria.is_null() {
        FilterCriteria::default()
    } else {
        criteria.into_serde().map_err(|e| to_js_error("criteria", e))?
    };
    let sort: SortState<StockField> = if sort.is_undefined() {
        SortState::default()
    } else {
        sort.into_serde().map_err(|e| to_js_error("sort", e))?
    };
    JsValue::from_serde(&query_records(&stocks, &criteria, &sort)).map_err(|e| to_js_error("rows", e))
}
