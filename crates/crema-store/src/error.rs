//! Error types for crema-store.

/// Result type for crema-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in crema-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No record carries the requested identifier.
    #[error("Shot not found: {0}")]
    NotFound(String),
}
