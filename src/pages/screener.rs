use leptos::*;

use crate::domain::screener::{FilterCriteria, RecordStore, SortState, Stock, StockField, seed};
use crate::format_utils::{format_change, format_change_percent, format_compact, format_price, format_ratio};

/// 📈 Stock screener: search, sector and price range filters over the
/// built-in stock list, with sortable column headers.
#[component]
pub fn StockScreener() -> impl IntoView {
    let store = RecordStore::new(seed::default_stocks());
    let sectors: Vec<String> = store.categories().into_iter().map(str::to_string).collect();

    let (search, set_search) = create_signal(String::new());
    let (sector, set_sector) = create_signal(String::new());
    let (min_price, set_min_price) = create_signal(String::new());
    let (max_price, set_max_price) = create_signal(String::new());
    let sort = create_rw_signal(SortState::<StockField>::unsorted());

    let total = store.len();
    let rows = create_memo(move |_| {
        let criteria = FilterCriteria::new()
            .with_search(search.get())
            .with_category(sector.get())
            .with_range(StockField::Price, min_price.get(), max_price.get());
        sort.with(|sort| store.query(&criteria, sort).into_iter().cloned().collect::<Vec<Stock>>())
    });

    let reset = move |_| {
        set_search.set(String::new());
        set_sector.set(String::new());
        set_min_price.set(String::new());
        set_max_price.set(String::new());
        sort.update(SortState::clear);
    };

    let header = move |field: StockField| {
        view! {
            <th class="sortable" on:click=move |_| sort.update(|sort| sort.toggle(field))>
                {field.label()}
                {move || sort.with(|sort| sort.indicator(field)).map(|arrow| format!(" {}", arrow))}
            </th>
        }
    };

    view! {
        <h2>"Stock Screener"</h2>
        <div class="filters">
            <input
                type="text"
                placeholder="Search by symbol or name"
                prop:value=search
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_sector.set(event_target_value(&ev)) prop:value=sector>
                <option value="">"All sectors"</option>
                {sectors
                    .into_iter()
                    .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                    .collect_view()}
            </select>
            <input
                type="number"
                placeholder="Min price"
                prop:value=min_price
                on:input=move |ev| set_min_price.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Max price"
                prop:value=max_price
                on:input=move |ev| set_max_price.set(event_target_value(&ev))
            />
            <button on:click=reset>"Reset"</button>
        </div>
        <p class="summary">{move || format!("Showing {} of {} stocks", rows.with(Vec::len), total)}</p>
        <table>
            <thead>
                <tr>
                    {StockField::sortable().into_iter().map(header).collect_view()}
                    <th>{StockField::Sector.label()}</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|stock| stock.symbol.clone()
                    children=move |stock| view! { <StockRow stock=stock /> }
                />
            </tbody>
        </table>
        <Show when=move || rows.with(Vec::is_empty)>
            <p class="empty">"No stocks match the current filters."</p>
        </Show>
    }
}

#[component]
fn StockRow(stock: Stock) -> impl IntoView {
    let trend = if stock.is_gaining() { "gain" } else { "loss" };
    view! {
        <tr>
            <td class="symbol">{stock.symbol.to_string()}</td>
            <td>{stock.name.clone()}</td>
            <td>{format_price(stock.price.value())}</td>
            <td class=trend>
                {format_change(stock.change)}" "{format_change_percent(stock.change_percent)}
            </td>
            <td>{format_compact(stock.volume.value())}</td>
            <td>{format!("${}", format_compact(stock.market_cap.value()))}</td>
            <td>{format_ratio(stock.pe_ratio)}</td>
            <td>{stock.sector.clone()}</td>
        </tr>
    }
}
