//! Typed errors for the share-content library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). The generation
//! engine itself is total over well-typed input; errors only surface at
//! the boundary where configuration comes in.

use thiserror::Error;

/// Errors that can occur around share-content generation.
#[derive(Debug, Error)]
pub enum ShareContentError {
    /// Configuration rejected at the boundary
    #[error("invalid share config: {reason}")]
    InvalidConfig { reason: String },
}

/// Result type alias for share-content operations.
pub type Result<T> = std::result::Result<T, ShareContentError>;
