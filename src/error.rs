//! Unified error types for chatscribe.
//!
//! This module provides a single [`ChatscribeError`] enum that covers all
//! error cases in the library, plus a crate-wide [`Result`] alias.
//!
//! # Error Handling Philosophy
//!
//! A conversion run never dies because one export file is broken. The
//! pipeline matches on these variants to decide what a failure means:
//! a parse error or an unrecognized shape skips that file and the run
//! continues; only environment-level failures (the output directory cannot
//! be created, a prompt lost its terminal) abort the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscribe operations.
///
/// # Example
///
/// ```rust
/// use chatscribe::error::Result;
///
/// fn my_function() -> Result<String> {
///     Ok("transcript".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscribeError>;

/// The error type for all chatscribe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscribeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An export file cannot be read
    /// - The output directory cannot be created
    /// - A transcript cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid JSON, or its values do not fit the
    /// export structure.
    ///
    /// Contains the underlying JSON error and, where available, the file
    /// path.
    #[error("Failed to parse JSON export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The file path, if available.
        path: Option<PathBuf>,
    },

    /// The document parsed as JSON, but its shape matches no known export
    /// type (chat, dm, or search).
    #[error("Unrecognized export shape: {}", path.display())]
    UnknownShape {
        /// The offending file.
        path: PathBuf,
    },

    /// An interactive prompt failed, usually because the terminal went
    /// away mid-session.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ChatscribeError {
    /// Creates a parse error for an export file.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatscribeError::Parse { source, path }
    }

    /// Creates an unknown-shape error for an export file.
    pub fn unknown_shape(path: impl Into<PathBuf>) -> Self {
        ChatscribeError::UnknownShape { path: path.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscribeError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatscribeError::Parse { .. })
    }

    /// Returns `true` if this is an unknown-shape error.
    pub fn is_unknown_shape(&self) -> bool {
        matches!(self, ChatscribeError::UnknownShape { .. })
    }
}
