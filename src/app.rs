use leptos::*;
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    application::AuthService,
    config::{AppConfig, DEFAULT_SEARCH_LATENCY_MS, DEFAULT_SESSION_KEY},
    domain::{
        errors::{AppError, ApplicationError, ConfigurationError},
        logging::LogComponent,
    },
    global_state::{current_page, flash, navigate, session},
    infrastructure::{BackendRestClient, BrowserTimeProvider, LocalSessionStore},
    log_info, log_warn,
    pages::{CompanySearch, Directory, Home, Login, Notes, StockScreener},
};

/// Top-level views reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Page {
    #[default]
    Home,
    Screener,
    Search,
    Directory,
    Notes,
    Login,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Screener => "Stock Screener",
            Page::Search => "Company Search",
            Page::Directory => "Directory",
            Page::Notes => "My Notes",
            Page::Login => "Sign In",
        }
    }

    fn in_nav(self, signed_in: bool) -> bool {
        match self {
            Page::Login => !signed_in,
            Page::Notes => signed_in,
            _ => true,
        }
    }
}

/// Backend wiring shared through the Leptos context. A missing backend
/// configuration only disables the pages that need it.
#[derive(Debug, Clone)]
pub struct AppServices {
    config: Result<AppConfig, ConfigurationError>,
}

impl AppServices {
    pub fn new(config: Result<AppConfig, ConfigurationError>) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Self {
        Self::new(AppConfig::from_build_env())
    }

    pub fn config(&self) -> Result<&AppConfig, AppError> {
        self.config
            .as_ref()
            .map_err(|e| ApplicationError::Configuration(e.clone()).into())
    }

    pub fn backend(&self) -> Result<BackendRestClient, AppError> {
        Ok(BackendRestClient::new(self.config()?.clone()))
    }

    pub fn session_store(&self) -> LocalSessionStore {
        match &self.config {
            Ok(config) => LocalSessionStore::new(config.session_storage_key.clone()),
            Err(_) => LocalSessionStore::new(DEFAULT_SESSION_KEY),
        }
    }

    pub fn auth(&self) -> Result<AuthService<BackendRestClient, LocalSessionStore>, AppError> {
        Ok(AuthService::new(self.backend()?, self.session_store()))
    }

    pub fn search_latency_ms(&self) -> u32 {
        self.config
            .as_ref()
            .map(|config| config.search_latency_ms)
            .unwrap_or(DEFAULT_SEARCH_LATENCY_MS)
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_else(AppServices::from_build_env)
}

/// 🏦 Root component
#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::from_build_env();

    match services.auth() {
        Ok(auth) => match auth.restore_session(BrowserTimeProvider::now_secs()) {
            Ok(Some(restored)) => {
                log_info!(LogComponent::Presentation("App"), "restored session for {}", restored.email());
                session().set(Some(restored));
            }
            Ok(None) => {}
            Err(e) => {
                log_warn!(LogComponent::Presentation("App"), "could not restore session: {}", e);
            }
        },
        Err(e) => {
            log_warn!(LogComponent::Presentation("App"), "backend disabled: {}", e);
        }
    }

    provide_context(services);

    view! {
        <style>
            {r#"
            .iron-capital-app {
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #0b1220;
                min-height: 100vh;
                color: #e6ebf5;
            }

            .nav {
                display: flex;
                gap: 8px;
                align-items: center;
                padding: 12px 24px;
                border-bottom: 1px solid #1f2a44;
            }

            .nav .brand {
                font-weight: 700;
                margin-right: auto;
                cursor: pointer;
            }

            .nav button, .page button {
                background: #1f2a44;
                color: inherit;
                border: 1px solid #2e3b5c;
                border-radius: 6px;
                padding: 6px 12px;
                cursor: pointer;
            }

            .nav button.active {
                background: #3b5bdb;
            }

            .page {
                max-width: 1100px;
                margin: 0 auto;
                padding: 24px;
            }

            .flash {
                max-width: 1100px;
                margin: 12px auto 0;
                padding: 10px 16px;
                border-radius: 6px;
                background: #1f3b2c;
            }

            .error {
                color: #ff8a8a;
            }

            table {
                width: 100%;
                border-collapse: collapse;
            }

            th, td {
                padding: 8px;
                text-align: left;
                border-bottom: 1px solid #1f2a44;
            }

            th.sortable {
                cursor: pointer;
                user-select: none;
            }

            .gain { color: #4cd97b; }
            .loss { color: #ff6b6b; }

            .filters {
                display: flex;
                flex-wrap: wrap;
                gap: 8px;
                margin-bottom: 16px;
            }

            .cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 16px;
            }

            .card {
                background: #131c31;
                border: 1px solid #1f2a44;
                border-radius: 8px;
                padding: 16px;
            }
            "#}
        </style>
        <div class="iron-capital-app">
            <NavBar />
            <Flash />
            <main class="page">
                {move || match current_page().get() {
                    Page::Home => view! { <Home /> }.into_view(),
                    Page::Screener => view! { <StockScreener /> }.into_view(),
                    Page::Search => view! { <CompanySearch /> }.into_view(),
                    Page::Directory => view! { <Directory /> }.into_view(),
                    Page::Notes => view! { <Notes /> }.into_view(),
                    Page::Login => view! { <Login /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let services = use_services();
    let signed_in = move || session().with(Option::is_some);

    let sign_out = move |_: ev::MouseEvent| {
        let Some(current) = session().get_untracked() else {
            return;
        };
        let services = services.clone();
        spawn_local(async move {
            match services.auth() {
                Ok(auth) => {
                    if let Err(e) = auth.sign_out(&current).await {
                        log_warn!(LogComponent::Presentation("NavBar"), "sign out: {}", e);
                    }
                }
                Err(e) => {
                    log_warn!(LogComponent::Presentation("NavBar"), "sign out: {}", e);
                }
            }
            session().set(None);
            navigate(Page::Home);
            flash().set(Some("Signed out".to_string()));
        });
    };

    view! {
        <nav class="nav">
            <span class="brand" on:click=move |_| navigate(Page::Home)>"Iron Capital"</span>
            {move || {
                let signed_in = signed_in();
                Page::iter()
                    .filter(|page| *page != Page::Home && page.in_nav(signed_in))
                    .map(|page| {
                        view! {
                            <button
                                class:active=move || current_page().get() == page
                                on:click=move |_| navigate(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <Show when=signed_in>
                <span class="user">{move || session().with(|s| s.as_ref().map(|s| s.email().to_string()))}</span>
                <button on:click=sign_out.clone()>"Sign Out"</button>
            </Show>
        </nav>
    }
}

#[component]
fn Flash() -> impl IntoView {
    view! {
        {move || flash().get().map(|message| view! {
            <div class="flash" on:click=move |_| flash().set(None)>{message}</div>
        })}
    }
}
