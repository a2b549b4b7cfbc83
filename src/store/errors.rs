//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the persistence gateway.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A lock guard was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}
