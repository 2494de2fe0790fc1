//! Page components rendered by [`crate::app::App`]

mod company_search;
mod directory;
mod home;
mod login;
mod notes;
mod screener;

pub use company_search::CompanySearch;
pub use directory::Directory;
pub use home::Home;
pub use login::Login;
pub use notes::Notes;
pub use screener::StockScreener;
