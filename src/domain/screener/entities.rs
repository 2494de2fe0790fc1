pub use super::value_objects::{MarketCap, Price, Symbol, Volume};
use super::record::{FieldValue, Record};
use super::value_objects::{CompanyField, ListingField, StockField};
use serde::{Deserialize, Serialize};

/// Domain entity - a quoted stock row in the screener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: Symbol,
    pub name: String,
    pub price: Price,
    pub change: f64,
    pub change_percent: f64,
    pub volume: Volume,
    pub market_cap: MarketCap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend: Option<f64>,
    pub sector: String,
}

impl Stock {
    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }
}

impl Record for Stock {
    type Field = StockField;

    fn key(&self) -> &str {
        self.symbol.value()
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.symbol.value(), self.name.as_str()].into_iter()
    }

    fn category(&self) -> &str {
        &self.sector
    }

    fn field(&self, field: StockField) -> Option<FieldValue<'_>> {
        let value = match field {
            StockField::Symbol => FieldValue::Text(self.symbol.value()),
            StockField::Name => FieldValue::Text(&self.name),
            StockField::Price => FieldValue::Number(self.price.value()),
            StockField::Change => FieldValue::Number(self.change),
            StockField::ChangePercent => FieldValue::Number(self.change_percent),
            StockField::Volume => FieldValue::Number(self.volume.value()),
            StockField::MarketCap => FieldValue::Number(self.market_cap.value()),
            StockField::PeRatio => FieldValue::Number(self.pe_ratio?),
            StockField::Dividend => FieldValue::Number(self.dividend?),
            StockField::Sector => FieldValue::Text(&self.sector),
        };
        Some(value)
    }
}

/// Domain entity - company profile shown by the company search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub symbol: Symbol,
    pub name: String,
    pub description: String,
    pub sector: String,
    pub industry: String,
    pub market_cap: MarketCap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<u16>,
    pub headquarters: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Record for Company {
    type Field = CompanyField;

    fn key(&self) -> &str {
        self.symbol.value()
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.symbol.value(), self.name.as_str()].into_iter()
    }

    fn category(&self) -> &str {
        &self.sector
    }

    fn field(&self, field: CompanyField) -> Option<FieldValue<'_>> {
        let value = match field {
            CompanyField::Symbol => FieldValue::Text(self.symbol.value()),
            CompanyField::Name => FieldValue::Text(&self.name),
            CompanyField::Description => FieldValue::Text(&self.description),
            CompanyField::Sector => FieldValue::Text(&self.sector),
            CompanyField::Industry => FieldValue::Text(&self.industry),
            CompanyField::MarketCap => FieldValue::Number(self.market_cap.value()),
            CompanyField::Employees => FieldValue::Number(self.employees? as f64),
            CompanyField::Founded => FieldValue::Number(f64::from(self.founded?)),
            CompanyField::Headquarters => FieldValue::Text(&self.headquarters),
            CompanyField::Website => FieldValue::Text(self.website.as_deref()?),
        };
        Some(value)
    }
}

/// Row of the backend `companies` table. Column names follow the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    pub created_at: String,
}

impl Record for CompanyListing {
    type Field = ListingField;

    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.symbol.as_str(), self.name.as_str()].into_iter()
    }

    fn category(&self) -> &str {
        self.sector.as_deref().unwrap_or_default()
    }

    fn field(&self, field: ListingField) -> Option<FieldValue<'_>> {
        let value = match field {
            ListingField::Name => FieldValue::Text(&self.name),
            ListingField::Symbol => FieldValue::Text(&self.symbol),
            ListingField::Sector => FieldValue::Text(self.sector.as_deref()?),
            ListingField::Price => FieldValue::Number(self.price?),
            ListingField::MarketCap => FieldValue::Number(self.market_cap?),
            ListingField::ChangePercent => FieldValue::Number(self.change_percent?),
            ListingField::CreatedAt => FieldValue::Text(&self.created_at),
        };
        Some(value)
    }
}
