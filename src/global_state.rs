use crate::app::Page;
use crate::domain::auth::AuthSession;
use leptos::*;
use once_cell::sync::OnceCell;

/// App-wide reactive state. Filter and sort state stay local to each view.
pub struct Globals {
    pub current_page: RwSignal<Page>,
    pub session: RwSignal<Option<AuthSession>>,
    pub flash: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_page: create_rw_signal(Page::Home),
        session: create_rw_signal(None),
        flash: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub current_page => current_page: Page,
    pub session => session: Option<AuthSession>,
    pub flash => flash: Option<String>,
}

/// Switch page and drop any message left by the previous one
pub fn navigate(page: Page) {
    flash().set(None);
    current_page().set(page);
}
