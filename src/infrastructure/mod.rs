//! Browser-side adapters: console logging, the backend client, session storage

pub mod backend;
pub mod services;
pub mod session_storage;

pub use backend::BackendRestClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use session_storage::LocalSessionStore;
