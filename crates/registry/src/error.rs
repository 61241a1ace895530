use hookreg_core::error::CoreError;
use hookreg_core::types::DbId;

/// Errors raised by the registry read operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The caller presented no valid session. Raised before any read.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// The caller context failed for a reason other than a missing session.
    #[error("Caller context failed: {0}")]
    CallerContext(String),

    /// Single-hook lookup found no base row.
    #[error("Hook with id {0} not found")]
    HookNotFound(DbId),

    /// Storage failures propagate unmodified.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Convenience alias for registry return values.
pub type RegistryResult<T> = Result<T, RegistryError>;

impl From<CoreError> for RegistryError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unauthorized(msg) => Self::Unauthenticated(msg),
            CoreError::Validation(msg) => Self::CallerContext(msg),
        }
    }
}
