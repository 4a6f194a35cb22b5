//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by a [`RecipeStore`](super::RecipeStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite driver rejected a statement
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the store lock panicked
    #[error("store lock poisoned")]
    LockPoisoned,

    /// The blocking task running a statement did not complete
    #[error("store task failed: {0}")]
    Task(String),

    /// The store could not be opened at startup
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
