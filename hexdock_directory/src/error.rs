// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Result alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors raised while importing, caching or loading directory data.
///
/// None of these are fatal to the UI: the loader logs them and falls through
/// to the next source, ending with an empty list.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A required CSV column could not be located in the header row.
    #[error("CSV header has no column matching `{column}`")]
    MissingColumn {
        /// Case-insensitive fragment that was searched for.
        column: &'static str,
    },

    /// A company source could not be reached or refused the request.
    #[error("company source `{source_name}` is unavailable: {message}")]
    SourceUnavailable {
        /// Name reported by the source.
        source_name: String,
        /// Human-readable reason.
        message: String,
    },

    /// The key-value store failed to read or write.
    #[error("storage failure for key `{key}`: {message}")]
    Storage {
        /// Key being accessed.
        key: String,
        /// Human-readable reason.
        message: String,
    },

    /// A cached or stored document was not valid JSON for its type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Convenience constructor for [`DirectoryError::SourceUnavailable`].
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
