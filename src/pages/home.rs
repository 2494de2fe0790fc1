use leptos::*;

use crate::app::Page;
use crate::global_state::navigate;

#[component]
pub fn Home() -> impl IntoView {
    let feature = |page: Page, blurb: &'static str| {
        view! {
            <div class="card">
                <h3>{page.title()}</h3>
                <p>{blurb}</p>
                <button on:click=move |_| navigate(page)>"Open"</button>
            </div>
        }
    };

    view! {
        <section class="hero">
            <h1>"Iron Capital"</h1>
            <p>"Research tools for long-term investors: screen the market, look up companies and keep private notes."</p>
        </section>
        <section class="cards">
            {feature(Page::Screener, "Filter stocks by name, sector and price, then sort any column.")}
            {feature(Page::Search, "Find a company by ticker or name and read its profile.")}
            {feature(Page::Directory, "Browse every company tracked by Iron Capital.")}
            {feature(Page::Notes, "Keep private research notes tied to your account.")}
        </section>
    }
}
