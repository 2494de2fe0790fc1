//! Application layer: use cases coordinating the domain with the backend

pub mod auth_service;
pub mod company_search;
pub mod directory_service;
pub mod notes_service;
pub mod screener_service;

pub use auth_service::AuthService;
pub use company_search::CompanySearchUseCase;
pub use directory_service::DirectoryService;
pub use notes_service::NotesService;
pub use screener_service::ScreenerSession;
