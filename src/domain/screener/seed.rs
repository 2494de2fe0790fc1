//! Demonstration data loaded by the screener and company search views.

use super::entities::{Company, MarketCap, Price, Stock, Symbol, Volume};

#[allow(clippy::too_many_arguments)]
fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: f64,
    market_cap: f64,
    pe_ratio: Option<f64>,
    dividend: Option<f64>,
    sector: &str,
) -> Stock {
    Stock {
        symbol: Symbol::from(symbol),
        name: name.to_string(),
        price: Price::new(price),
        change,
        change_percent,
        volume: Volume::new(volume),
        market_cap: MarketCap::new(market_cap),
        pe_ratio,
        dividend,
        sector: sector.to_string(),
    }
}

pub fn default_stocks() -> Vec<Stock> {
    vec![
        stock("AAPL", "Apple Inc.", 185.92, 2.45, 1.34, 45_234_567.0, 2.9e12, Some(25.8), Some(0.96), "Technology"),
        stock("MSFT", "Microsoft Corporation", 378.85, -1.25, -0.33, 28_456_789.0, 2.8e12, Some(28.4), Some(3.0), "Technology"),
        stock("GOOGL", "Alphabet Inc.", 138.21, 0.89, 0.65, 31_245_678.0, 1.7e12, Some(22.1), None, "Technology"),
        stock("TSLA", "Tesla, Inc.", 242.84, 8.45, 3.61, 78_456_123.0, 7.8e11, Some(65.2), None, "Automotive"),
        stock("NVDA", "NVIDIA Corporation", 468.95, 12.34, 2.7, 45_123_789.0, 1.15e12, Some(58.7), None, "Technology"),
        stock("JPM", "JPMorgan Chase & Co.", 155.32, -0.78, -0.5, 12_345_678.0, 4.5e11, Some(12.5), Some(4.0), "Financial Services"),
    ]
}

pub fn default_companies() -> Vec<Company> {
    vec![
        Company {
            symbol: Symbol::from("AAPL"),
            name: "Apple Inc.".to_string(),
            description: "Apple Inc. designs, manufactures, and markets smartphones, personal computers, tablets, wearables, and accessories worldwide.".to_string(),
            sector: "Technology".to_string(),
            industry: "Consumer Electronics".to_string(),
            market_cap: MarketCap::new(2.9e12),
            employees: Some(164_000),
            founded: Some(1976),
            headquarters: "Cupertino, California".to_string(),
            website: Some("https://www.apple.com".to_string()),
        },
        Company {
            symbol: Symbol::from("TSLA"),
            name: "Tesla, Inc.".to_string(),
            description: "Tesla, Inc. designs, develops, manufactures, leases, and sells electric vehicles, and energy generation and storage systems in the United States, China, and internationally.".to_string(),
            sector: "Automotive".to_string(),
            industry: "Auto Manufacturers".to_string(),
            market_cap: MarketCap::new(7.8e11),
            employees: Some(127_855),
            founded: Some(2003),
            headquarters: "Austin, Texas".to_string(),
            website: Some("https://www.tesla.com".to_string()),
        },
        Company {
            symbol: Symbol::from("NVDA"),
            name: "NVIDIA Corporation".to_string(),
            description: "NVIDIA Corporation operates as a computing company in the United States, Taiwan, China, Hong Kong, and internationally.".to_string(),
            sector: "Technology".to_string(),
            industry: "Semiconductors".to_string(),
            market_cap: MarketCap::new(1.15e12),
            employees: Some(26_196),
            founded: Some(1993),
            headquarters: "Santa Clara, California".to_string(),
            website: Some("https://www.nvidia.com".to_string()),
        },
    ]
}

/// Suggestions offered before the user types anything: (label, term)
pub fn search_suggestions() -> [(&'static str, &'static str); 3] {
    [("Apple", "AAPL"), ("Tesla", "TSLA"), ("NVIDIA", "NVDA")]
}
