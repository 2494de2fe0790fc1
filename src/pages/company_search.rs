use leptos::*;

use crate::app::use_services;
use crate::application::CompanySearchUseCase;
use crate::domain::screener::{Company, RecordStore, seed};
use crate::format_utils::{format_compact, format_grouped};

/// Outcome of the last submitted search
#[derive(Debug, Clone, PartialEq)]
enum SearchState {
    Idle,
    Searching,
    Found(Company),
    NotFound(String),
}

/// 🔎 Company lookup by ticker or name
#[component]
pub fn CompanySearch() -> impl IntoView {
    let use_case = CompanySearchUseCase::new(
        RecordStore::new(seed::default_companies()),
        use_services().search_latency_ms(),
    );

    let (term, set_term) = create_signal(String::new());
    let state = create_rw_signal(SearchState::Idle);
    let searching = move || state.with(|state| *state == SearchState::Searching);

    let run_search = move |query: String| {
        if !CompanySearchUseCase::can_search(&query) || searching() {
            return;
        }
        let use_case = use_case.clone();
        state.set(SearchState::Searching);
        spawn_local(async move {
            let next = match use_case.search(&query).await {
                Some(company) => SearchState::Found(company),
                None => SearchState::NotFound(query.trim().to_string()),
            };
            state.set(next);
        });
    };

    let suggest = {
        let run_search = run_search.clone();
        move |(label, symbol): (&'static str, &'static str)| {
            let run_search = run_search.clone();
            view! {
                <button on:click=move |_| {
                    set_term.set(symbol.to_string());
                    run_search(symbol.to_string());
                }>
                    {label}
                </button>
            }
        }
    };

    let submit = {
        let run_search = run_search.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            run_search(term.get_untracked());
        }
    };

    view! {
        <h2>"Company Search"</h2>
        <form class="filters" on:submit=submit>
            <input
                type="text"
                placeholder="Ticker or company name"
                prop:value=term
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button
                type="submit"
                disabled=move || searching() || !CompanySearchUseCase::can_search(&term.get())
            >
                {move || if searching() { "Searching..." } else { "Search" }}
            </button>
        </form>
        <div class="suggestions">
            "Try: "
            {seed::search_suggestions().into_iter().map(suggest).collect_view()}
        </div>
        {move || match state.get() {
            SearchState::Idle | SearchState::Searching => ().into_view(),
            SearchState::Found(company) => view! { <CompanyProfile company=company /> }.into_view(),
            SearchState::NotFound(query) => view! {
                <p class="empty">{format!("No company found for \"{}\".", query)}</p>
            }
            .into_view(),
        }}
    }
}

#[component]
fn CompanyProfile(company: Company) -> impl IntoView {
    let fact = |label: &'static str, value: String| {
        view! {
            <div class="card">
                <div class="label">{label}</div>
                <div class="value">{value}</div>
            </div>
        }
    };
    let unknown = || "-".to_string();

    view! {
        <article class="profile">
            <h3>{format!("{} ({})", company.name, company.symbol)}</h3>
            <p>{company.description.clone()}</p>
            <div class="cards">
                {fact("Sector", company.sector.clone())}
                {fact("Industry", company.industry.clone())}
                {fact("Market Cap", format!("${}", format_compact(company.market_cap.value())))}
                {fact("Employees", company.employees.map(|n| format_grouped(n as f64)).unwrap_or_else(unknown))}
                {fact("Founded", company.founded.map(|year| year.to_string()).unwrap_or_else(unknown))}
                {fact("Headquarters", company.headquarters.clone())}
            </div>
            {company.website.clone().map(|url| view! {
                <a href=url.clone() target="_blank" rel="noopener noreferrer">{url}</a>
            })}
        </article>
    }
}
