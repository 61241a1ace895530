//! Caller identity passed explicitly into every registry operation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: DbId,
    /// Role name, e.g. `"admin"`.
    pub role: String,
}

/// Source of the current caller.
///
/// Implementations fail with [`CoreError::Unauthorized`] when no valid
/// session is present. The registry calls this once per operation before
/// issuing any read.
pub trait CallerContext: Send + Sync {
    fn current_caller(&self) -> Result<Session, CoreError>;
}

impl CallerContext for Session {
    fn current_caller(&self) -> Result<Session, CoreError> {
        Ok(self.clone())
    }
}

impl CallerContext for Option<Session> {
    fn current_caller(&self) -> Result<Session, CoreError> {
        self.clone()
            .ok_or_else(|| CoreError::Unauthorized("No authenticated session".into()))
    }
}
