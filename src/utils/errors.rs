use thiserror::Error;

/// Unified error type for the account service.
///
/// Exactly three kinds cross component boundaries: caller-fixable validation
/// failures, missing records, and everything else collapsed into `Internal`.
/// Each transport adapter owns its own mapping from these kinds to wire
/// status codes.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("{0}")]
    Validation(String),

    #[error("account not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, AccountError>;
