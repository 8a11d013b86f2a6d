//! Error types for the song formatter library.
//!
//! The binary wraps these in `anyhow` with extra context; only
//! `MissingInput` is singled out for its own user-facing message.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input song list does not exist
    #[error("Input file '{}' not found", path.display())]
    MissingInput { path: PathBuf },

    /// IO error with path context
    #[error("IO error at {}: {source}", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Mapping file could not be read or is not a JSON object of strings
    #[error("Invalid artist mapping {}: {message}", path.display())]
    Mapping { path: PathBuf, message: String },

    /// A character has no romanization in the active backend
    #[error("No romanization for '{ch}' in '{text}'")]
    Romanize { text: String, ch: char },

    /// Output path failed the overwrite safety check
    #[error("Safety check failed: {0}")]
    UnsafeOutput(String),
}

impl Error {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True when the run failed because the input list was absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = Error::MissingInput {
            path: PathBuf::from("paste.txt"),
        };
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "Input file 'paste.txt' not found");
    }

    #[test]
    fn test_romanize_message() {
        let err = Error::Romanize {
            text: "五月天".to_string(),
            ch: '月',
        };
        assert!(!err.is_missing_input());
        assert!(err.to_string().contains("'月'"));
    }
}
