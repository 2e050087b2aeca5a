//! Error types for Horizon RichSelect.
//!
//! Every variant here describes a programming or integration error. Normal
//! interaction states such as "no option matches the query" are not errors.

use std::path::PathBuf;

/// Result type alias for rich select operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the rich select subsystem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An index outside the currently filtered options was used.
    ///
    /// The renderer only offers hover and click on rows it has drawn, so this
    /// indicates a stale or buggy caller rather than user input.
    #[error("index {index} is out of range for {len} filtered options")]
    OutOfRange { index: usize, len: usize },

    /// Highlight state disagrees with the filtered options.
    #[error("highlight invariant violated: {0}")]
    InvariantViolation(String),

    /// Two options in one option set share the same value.
    #[error("duplicate option value '{0}'")]
    DuplicateValue(String),

    /// Configuration could not be parsed.
    #[error("invalid rich select configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize rich select configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// An option list could not be parsed.
    #[error("invalid option list: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a programming error in the caller.
    ///
    /// Programming errors should fail loudly during development; they are
    /// never the result of user input reaching a correctly wired widget.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::InvariantViolation(_) | Self::DuplicateValue(_)
        )
    }
}
