use leptos::*;
use strum::IntoEnumIterator;

use crate::app::use_services;
use crate::application::DirectoryService;
use crate::domain::screener::{CompanyListing, FilterCriteria, ListingField, RecordStore, SortState};
use crate::format_utils::{format_change_percent, format_compact, format_price};
use crate::global_state::session;

/// 🏢 Backend company directory, filtered and sorted locally
#[component]
pub fn Directory() -> impl IntoView {
    let services = use_services();
    let store = create_rw_signal::<Option<RecordStore<CompanyListing>>>(None);
    let (error, set_error) = create_signal::<Option<String>>(None);

    match services.backend() {
        Ok(backend) => {
            let current = session().get_untracked();
            spawn_local(async move {
                match DirectoryService::new(backend).load(current.as_ref()).await {
                    Ok(loaded) => store.set(Some(loaded)),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
        Err(e) => set_error.set(Some(e.to_string())),
    }

    let (search, set_search) = create_signal(String::new());
    let (sector, set_sector) = create_signal(String::new());
    // Unsorted keeps the backend order, largest market cap first.
    let sort = create_rw_signal(SortState::<ListingField>::unsorted());

    let sectors = create_memo(move |_| {
        store.with(|store| {
            store
                .as_ref()
                .map(|store| store.categories().into_iter().map(str::to_string).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let rows = create_memo(move |_| {
        let criteria = FilterCriteria::new().with_search(search.get()).with_category(sector.get());
        store.with(|store| match store {
            Some(store) => sort.with(|sort| store.query(&criteria, sort).into_iter().cloned().collect::<Vec<_>>()),
            None => Vec::new(),
        })
    });

    let header = move |field: ListingField| {
        view! {
            <th class="sortable" on:click=move |_| sort.update(|sort| sort.toggle(field))>
                {field.label()}
                {move || sort.with(|sort| sort.indicator(field)).map(|arrow| format!(" {}", arrow))}
            </th>
        }
    };

    view! {
        <h2>"Company Directory"</h2>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        <div class="filters">
            <input
                type="text"
                placeholder="Search by symbol or name"
                prop:value=search
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_sector.set(event_target_value(&ev)) prop:value=sector>
                <option value="">"All sectors"</option>
                <For
                    each=move || sectors.get()
                    key=|name| name.clone()
                    children=|name| view! { <option value=name.clone()>{name}</option> }
                />
            </select>
        </div>
        <Show
            when=move || store.with(Option::is_some)
            fallback=move || view! { <Show when=move || error.with(Option::is_none)><p>"Loading companies..."</p></Show> }
        >
            <table>
                <thead>
                    <tr>{ListingField::iter().map(header).collect_view()}</tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|listing| listing.id.clone()
                        children=|listing| view! { <ListingRow listing=listing /> }
                    />
                </tbody>
            </table>
            <Show when=move || rows.with(Vec::is_empty)>
                <p class="empty">"No companies match the current filters."</p>
            </Show>
        </Show>
    }
}

#[component]
fn ListingRow(listing: CompanyListing) -> impl IntoView {
    let dash = || "-".to_string();
    let trend = match listing.change_percent {
        Some(change) if change >= 0.0 => "gain",
        Some(_) => "loss",
        None => "",
    };
    view! {
        <tr>
            <td>{listing.name}</td>
            <td class="symbol">{listing.symbol}</td>
            <td>{listing.sector.unwrap_or_else(dash)}</td>
            <td>{listing.price.map(format_price).unwrap_or_else(dash)}</td>
            <td>{listing.market_cap.map(|cap| format!("${}", format_compact(cap))).unwrap_or_else(dash)}</td>
            <td class=trend>{listing.change_percent.map(format_change_percent).unwrap_or_else(dash)}</td>
            <td>{listing.created_at.split('T').next().unwrap_or_default().to_string()}</td>
        </tr>
    }
}
