//! Library error type

use thiserror::Error;

/// Malformed input reported by the parsing and editing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A dot-separated part is not a valid base-10 integer literal
    #[error("invalid integer literal {part:?} in {input:?}")]
    InvalidInteger { part: String, input: String },

    /// A key string is neither a reserved keyword nor a single character
    #[error("invalid key {key:?}: expected \"left\", \"right\", or a single character")]
    InvalidKey { key: String },

    /// A text box state does not contain exactly one cursor marker
    #[error("expected exactly one '|' cursor marker, found {found}")]
    CursorMarker { found: usize },
}
