use thiserror::Error;

/// Calendar model errors
#[derive(Error, Debug)]
pub enum CalendarError {
    /// A required precondition of a view or period was violated.
    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Expansion error: {0}")]
    Expansion(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] spiff_core::error::CoreError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
