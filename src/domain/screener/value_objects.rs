use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Ticker symbol, always upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_ascii_uppercase())
    }
}

/// Last traded price in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Shares traded in the session
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Market capitalization in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCap(f64);

impl MarketCap {
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[strum(serialize = "asc")]
    #[serde(rename = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Column header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Columns of the stock screener table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, EnumIter, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum StockField {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
    MarketCap,
    PeRatio,
    Dividend,
    Sector,
}

impl StockField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Symbol => "Symbol",
            Self::Name => "Company",
            Self::Price => "Price",
            Self::Change => "Change",
            Self::ChangePercent => "Change %",
            Self::Volume => "Volume",
            Self::MarketCap => "Market Cap",
            Self::PeRatio => "P/E Ratio",
            Self::Dividend => "Dividend",
            Self::Sector => "Sector",
        }
    }

    /// Columns the screener lets the user sort by
    pub fn sortable() -> [StockField; 7] {
        [
            Self::Symbol,
            Self::Name,
            Self::Price,
            Self::Change,
            Self::Volume,
            Self::MarketCap,
            Self::PeRatio,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, EnumIter, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    Symbol,
    Name,
    Description,
    Sector,
    Industry,
    MarketCap,
    Employees,
    Founded,
    Headquarters,
    Website,
}

/// Columns of the backend `companies` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, EnumIter, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ListingField {
    Name,
    Symbol,
    Sector,
    Price,
    MarketCap,
    ChangePercent,
    CreatedAt,
}

impl ListingField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Company",
            Self::Symbol => "Symbol",
            Self::Sector => "Sector",
            Self::Price => "Price",
            Self::MarketCap => "Market Cap",
            Self::ChangePercent => "Change %",
            Self::CreatedAt => "Listed",
        }
    }
}
