//! Layered error types. Each layer wraps the one below so `?` can lift
//! infrastructure and validation failures into an [`AppError`].

use derive_more::Display;
use std::fmt::{Display as FmtDisplay, Formatter, Result as FmtResult};

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(DomainError),
    Application(ApplicationError),
    Infrastructure(InfrastructureError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Validation(ValidationError),
}

/// Input rejected before it reaches the backend
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid email address: {}", _0)]
    InvalidEmail(String),
    #[display(fmt = "Password must be at least {} characters", min_len)]
    PasswordTooShort { min_len: usize },
    #[display(fmt = "Note title cannot be empty")]
    EmptyNoteTitle,
    #[display(fmt = "Note id cannot be empty")]
    EmptyNoteId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    NotAuthenticated,
    Configuration(ConfigurationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationError {
    #[display(fmt = "Missing configuration: {}", _0)]
    MissingConfiguration(String),
    #[display(fmt = "Invalid parameter: {}", _0)]
    InvalidParameter(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
    Backend(BackendError),
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NetworkError {
    #[display(fmt = "HTTP request failed: {}", _0)]
    HttpRequestFailed(String),
    #[display(fmt = "Unexpected response body: {}", _0)]
    DeserializationFailed(String),
}

/// Structured error returned by the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
}

impl BackendError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self { status, code: None, message: message.into() }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl FmtDisplay for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "{}", e),
            AppError::Application(e) => write!(f, "{}", e),
            AppError::Infrastructure(e) => write!(f, "{}", e),
        }
    }
}

impl FmtDisplay for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl FmtDisplay for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApplicationError::NotAuthenticated => write!(f, "You must be signed in"),
            ApplicationError::Configuration(e) => write!(f, "Configuration: {}", e),
        }
    }
}

impl FmtDisplay for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "{}", e),
            InfrastructureError::Backend(e) => write!(f, "{}", e),
            InfrastructureError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl FmtDisplay for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.code {
            Some(code) => write!(f, "{} (status {}, code {})", self.message, self.status, code),
            None => write!(f, "{} (status {})", self.message, self.status),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for ValidationError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        AppError::Application(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Application(ApplicationError::Configuration(error))
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<BackendError> for InfrastructureError {
    fn from(error: BackendError) -> Self {
        InfrastructureError::Backend(error)
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type InfraResult<T> = Result<T, InfrastructureError>;
