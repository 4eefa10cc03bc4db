//! Error types for the Explora engine.

use thiserror::Error;

/// Result type alias using the engine's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for engine operations.
///
/// Soft-rule deviations are reported as warnings inside validation reports,
/// not as errors; this type covers the hard failures only.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown mood identifier
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Unknown tag layer name
    #[error("Unknown tag layer: {0}")]
    UnknownTagLayer(String),

    /// Unknown enum variant in a profile field
    #[error("Unknown {field} value: {value}")]
    UnknownVariant { field: &'static str, value: String },

    /// Location tags failed structural validation (blocks catalog acceptance)
    #[error("Invalid location tags: {0}")]
    InvalidTags(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
