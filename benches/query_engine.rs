use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iron_capital_web::domain::screener::{
    FilterCriteria, MarketCap, Price, RecordStore, SortKey, SortState, Stock, StockField, Symbol, Volume,
};
use std::hint::black_box;

const SECTORS: [&str; 5] = ["Technology", "Energy", "Utilities", "Healthcare", "Financial Services"];

/// Synthetic screener rows with a spread of prices and some missing ratios
fn generate_stocks(count: usize) -> Vec<Stock> {
    (0..count)
        .map(|i| {
            let wave = (i as f64 * 0.37).sin();
            Stock {
                symbol: Symbol::from(format!("T{:05}", i).as_str()),
                name: format!("Synthetic Company {}", i),
                price: Price::new(50.0 + 450.0 * (wave + 1.0) / 2.0),
                change: wave * 5.0,
                change_percent: wave * 2.0,
                volume: Volume::new(1e6 + i as f64 * 1_000.0),
                market_cap: MarketCap::new(1e9 * (1.0 + (i % 97) as f64)),
                pe_ratio: (i % 7 != 0).then(|| 10.0 + (i % 40) as f64),
                dividend: None,
                sector: SECTORS[i % SECTORS.len()].to_string(),
            }
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_records");

    for size in [100usize, 1_000, 5_000] {
        let store = RecordStore::new(generate_stocks(size));

        let filter_only = FilterCriteria::new()
            .with_search("company 1")
            .with_category("Technology")
            .with_range(StockField::Price, "100", "400");
        group.bench_with_input(BenchmarkId::new("filter", size), &store, |b, store| {
            b.iter(|| black_box(store.query(&filter_only, &SortState::unsorted()).len()))
        });

        let by_price = SortState::by(SortKey::descending(StockField::Price));
        group.bench_with_input(BenchmarkId::new("sort_price", size), &store, |b, store| {
            b.iter(|| black_box(store.query(&FilterCriteria::new(), &by_price).len()))
        });

        let by_ratio = SortState::by(SortKey::ascending(StockField::PeRatio));
        group.bench_with_input(BenchmarkId::new("sort_missing_values", size), &store, |b, store| {
            b.iter(|| black_box(store.query(&FilterCriteria::new(), &by_ratio).len()))
        });
    }

    group.finish();
}

fn bench_categories(c: &mut Criterion) {
    let store = RecordStore::new(generate_stocks(5_000));
    c.bench_function("distinct_categories_5000", |b| b.iter(|| black_box(store.categories().len())));
}

criterion_group!(benches, bench_query, bench_categories);
criterion_main!(benches);
