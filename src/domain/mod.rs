pub mod auth;
pub mod errors;
pub mod logging;
pub mod notes;
pub mod repositories;
pub mod screener;
