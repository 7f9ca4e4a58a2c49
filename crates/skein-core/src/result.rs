//! Result type aliases for Skein.

use crate::SkeinError;

/// A specialized `Result` type for Skein operations.
pub type SkeinResult<T> = Result<T, SkeinError>;
