//! Error types for `ThemePalette`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `ThemePalette` operations.
///
/// Palette extraction itself never surfaces these to callers of the soft
/// loaders; they are returned by the strict document loaders and by the
/// string parsers used at configuration boundaries.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Theme Document Errors ====================
    /// None of the candidate theme files could be read.
    #[error("no readable theme document among {} candidate path(s)", .candidates.len())]
    ThemeDocumentNotFound {
        /// Every path that was probed, in probe order.
        candidates: Vec<PathBuf>,
    },

    /// The theme document parsed, but its top level is not a JSON object.
    #[error("theme document top level is {found}, expected a JSON object")]
    ThemeDocumentNotObject {
        /// JSON type found at the top level.
        found: &'static str,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown palette source name.
    #[error("invalid palette source '{0}' (expected settings, custom or both)")]
    InvalidSource(String),

    /// Unknown filter mode name.
    #[error("invalid filter mode '{0}' (expected exclude or include)")]
    InvalidFilterMode(String),

    /// Unknown return format name.
    #[error("invalid return format '{0}' (expected value, hex, label or array)")]
    InvalidReturnFormat(String),

    /// A color string is not `#RGB` or `#RRGGBB`.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Result type alias for `ThemePalette` operations.
pub type Result<T> = std::result::Result<T, Error>;
