//! Error types and result type for the scel2rime crate.
//!
//! This module defines all error variants that can occur when decoding Sogou
//! cell dictionaries or writing Rime dictionaries. It uses the `snafu` library
//! for ergonomic error handling with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use scel2rime::{Result, ScelError};
//!
//! fn check_mask(mask: u8) -> Result<()> {
//!     Err(ScelError::unsupported_format(mask))
//! }
//!
//! match check_mask(0x46) {
//!     Ok(()) => println!("Supported"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`ScelError::Io`]: I/O errors from file operations
//! - [`ScelError::UnsupportedFormat`]: Unknown format mask in the file header
//! - [`ScelError::TruncatedInput`]: A read ran past the end of the source
//! - [`ScelError::UnresolvedPinyinIndex`]: A word record referenced a missing pinyin entry
//! - [`ScelError::ParserError`]: Batch configuration parsing errors
//! - [`ScelError::InvalidParameter`]: Invalid function parameters

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the scel2rime crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ScelError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The format mask byte in the header is not one of the known values.
    #[snafu(display("Unsupported file format: mask {mask:#04x}"))]
    UnsupportedFormat {
        mask: u8,
        backtrace: Backtrace,
    },

    /// Fewer bytes remained than a read required.
    #[snafu(display("Truncated input at offset {offset:#x}: needed {needed} bytes, {available} available"))]
    TruncatedInput {
        offset: u64,
        needed: u64,
        available: u64,
        backtrace: Backtrace,
    },

    /// A word record referenced a pinyin index absent from the pinyin table.
    #[snafu(display("Unresolved pinyin index {index} at offset {offset:#x}"))]
    UnresolvedPinyinIndex {
        index: u16,
        offset: u64,
        backtrace: Backtrace,
    },

    /// Error parsing the batch configuration.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for ScelError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for ScelError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<regex::Error> for ScelError {
    fn from(source: regex::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

/// Helper methods for creating errors without context providers.
impl ScelError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use scel2rime::ScelError;
    ///
    /// let error = ScelError::invalid_parameter("Dictionary name cannot be empty");
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `UnsupportedFormat` error for the given mask byte.
    pub fn unsupported_format(mask: u8) -> Self {
        Self::UnsupportedFormat {
            mask,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `TruncatedInput` error for a read at `offset`.
    pub fn truncated_input(offset: u64, needed: u64, available: u64) -> Self {
        Self::TruncatedInput {
            offset,
            needed,
            available,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `UnresolvedPinyinIndex` error.
    pub fn unresolved_pinyin_index(index: u16, offset: u64) -> Self {
        Self::UnresolvedPinyinIndex {
            index,
            offset,
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `TruncatedInput` variant.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ScelError::TruncatedInput { .. })
    }

    /// Checks if this error is an `UnsupportedFormat` variant.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ScelError::UnsupportedFormat { .. })
    }

    /// Checks if this error is an `UnresolvedPinyinIndex` variant.
    pub fn is_unresolved_pinyin_index(&self) -> bool {
        matches!(self, ScelError::UnresolvedPinyinIndex { .. })
    }
}

/// A specialized `Result` type for scel2rime operations.
pub type Result<T> = std::result::Result<T, ScelError>;
