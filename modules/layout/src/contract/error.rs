use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error("Session carries no authenticated user")]
    NoSessionUser,

    #[error("Internal error")]
    Internal,
}

impl LayoutError {
    pub fn no_session_user() -> Self {
        Self::NoSessionUser
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
