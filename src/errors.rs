//! Error types for lexicon loading and board input, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - D001: `Io` (Lexicon source unreadable)
//! - D002: `TruncatedHeader` (Fewer than 4 header bytes)
//! - D003: `InvalidNodeCount` (Declared node count is zero or negative)
//! - D004: `TruncatedNodeTable` (Payload shorter than the declared count)
//! - D005: `RootLetterMismatch` (Root slot carries the wrong letter)
//! - D006: `ChildIndexOutOfRange` (Child pointer past the node table)
//! - B001: `InputTooLong` (Grid text exceeds board capacity)
//! - B002: `InvalidCharacter` (Grid text outside A-Z)
//!
//! Lexicon errors are fatal to the whole session: no solve can proceed
//! without a usable graph, and they surface from the loader before any
//! board is processed. Board errors are scoped to one board — the caller
//! may reject that input and supply another without reloading the graph.
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::BoardError;
//!
//! let err = BoardError::InputTooLong { len: 17, capacity: 16 };
//! println!("Error: {}", err);
//! println!("Code: {}", err.code());
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::io;

/// Errors raised while decoding a DAWG lexicon binary.
///
/// All variants are fatal for the session that tried to load the graph.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The source bytes could not be read at all (missing file, permission).
    #[error("cannot read lexicon: {0}")]
    Io(#[from] io::Error),

    /// The byte stream ended before the 4-byte node-count header.
    #[error("truncated header: got {len} bytes, need at least 4")]
    TruncatedHeader { len: usize },

    /// The declared node count is zero or negative.
    #[error("invalid node count: {count}")]
    InvalidNodeCount { count: i32 },

    /// The payload holds fewer nodes than the header declared.
    #[error("truncated node table: declared {declared} nodes, payload holds {actual}")]
    TruncatedNodeTable { declared: usize, actual: usize },

    /// A root slot in 1..=26 does not carry the letter the fixed root
    /// layout requires, so the blob was produced by an incompatible encoder.
    #[error("root slot {index} holds '{found}', expected '{expected}'")]
    RootLetterMismatch {
        index: usize,
        expected: char,
        found: char,
    },

    /// A node's child index points past the end of the node table.
    #[error("node {node} has child index {child} out of range (table size {len})")]
    ChildIndexOutOfRange {
        node: usize,
        child: usize,
        len: usize,
    },
}

impl LexiconError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LexiconError::Io(_) => "D001",
            LexiconError::TruncatedHeader { .. } => "D002",
            LexiconError::InvalidNodeCount { .. } => "D003",
            LexiconError::TruncatedNodeTable { .. } => "D004",
            LexiconError::RootLetterMismatch { .. } => "D005",
            LexiconError::ChildIndexOutOfRange { .. } => "D006",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexiconError::Io(_) => {
                Some("Check that the dictionary path exists and is readable")
            }
            LexiconError::TruncatedHeader { .. } | LexiconError::TruncatedNodeTable { .. } => {
                Some("The file appears cut short; rebuild the binary dictionary")
            }
            LexiconError::InvalidNodeCount { .. } => {
                Some("A valid lexicon declares at least the sentinel node")
            }
            LexiconError::RootLetterMismatch { .. } => {
                Some("The encoder must place the root for letter c at index (c - 'A') + 1")
            }
            LexiconError::ChildIndexOutOfRange { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Errors raised while populating a [`crate::board::GridBoard`] from grid text.
///
/// Recoverable: the board is rejected but the session may try another.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The supplied grid text holds more characters than the board has cells.
    #[error("grid text length {len} exceeds board capacity {capacity}")]
    InputTooLong { len: usize, capacity: usize },

    /// A character outside the expected alphabet appeared in the grid text.
    #[error("invalid grid character '{ch}' at position {position} (only A-Z allowed)")]
    InvalidCharacter { ch: char, position: usize },
}

impl BoardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::InputTooLong { .. } => "B001",
            BoardError::InvalidCharacter { .. } => "B002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::InputTooLong { .. } => {
                Some("Supply at most rows*cols characters, row-major with no separators")
            }
            BoardError::InvalidCharacter { .. } => {
                Some("Grid text must be uppercase letters A-Z only")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = BoardError::InputTooLong { len: 17, capacity: 16 };
        assert_eq!(err.code(), "B001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("B001"));
        assert!(detailed.contains("rows*cols"));
    }

    #[test]
    fn test_root_mismatch_message_names_both_letters() {
        let err = LexiconError::RootLetterMismatch {
            index: 2,
            expected: 'B',
            found: 'Q',
        };
        assert_eq!(err.code(), "D005");
        let detailed = err.display_detailed();
        assert!(detailed.contains('B') && detailed.contains('Q'));
    }

    /// Test that all lexicon error variants have unique codes
    #[test]
    fn test_all_lexicon_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        // Sample one of each variant
        let errors: Vec<LexiconError> = vec![
            LexiconError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
            LexiconError::TruncatedHeader { len: 2 },
            LexiconError::InvalidNodeCount { count: -1 },
            LexiconError::TruncatedNodeTable { declared: 30, actual: 10 },
            LexiconError::RootLetterMismatch { index: 1, expected: 'A', found: 'Z' },
            LexiconError::ChildIndexOutOfRange { node: 3, child: 99, len: 27 },
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with('D'), "Lexicon code '{code}' should start with 'D'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_io_error_preserves_message() {
        let err = LexiconError::from(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        assert_eq!(err.code(), "D001");
        assert!(err.to_string().contains("locked"));
    }

    /// Test that display_detailed properly formats errors
    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = BoardError::InvalidCharacter { ch: '7', position: 3 };
        let detailed = err.display_detailed();

        // should include code
        assert!(detailed.contains(err.code()));

        // should include base message
        assert!(detailed.contains(&err.to_string()));

        // if there's help text, it should be included
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }
}
