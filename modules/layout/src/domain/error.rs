use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session carries no authenticated user")]
    MissingSessionUser,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn missing_session_user() -> Self {
        Self::MissingSessionUser
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
