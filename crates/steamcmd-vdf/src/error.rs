//! Error types for steamcmd-vdf

/// Result type for steamcmd-vdf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing key-value text.
///
/// Every variant carries the line (1-based) and byte offset at which the
/// problem was detected. Parsing never partially succeeds: when any of
/// these is returned, no tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unterminated quoted string starting at line {line} (byte {offset})")]
    UnterminatedString { line: usize, offset: usize },

    #[error("unexpected character {found:?} at line {line} (byte {offset}): bare tokens are not supported")]
    UnexpectedCharacter {
        found: char,
        line: usize,
        offset: usize,
    },

    #[error("unbalanced braces: unexpected '}}' at line {line} (byte {offset})")]
    UnexpectedClose { line: usize, offset: usize },

    #[error("unbalanced braces: end of input at line {line} (byte {offset}) with an open mapping")]
    UnexpectedEof { line: usize, offset: usize },

    #[error("expected a quoted key at line {line} (byte {offset}), found '{{'")]
    ExpectedKey { line: usize, offset: usize },

    #[error("key {key:?} has no value at line {line} (byte {offset})")]
    ExpectedValue {
        key: String,
        line: usize,
        offset: usize,
    },
}

impl Error {
    /// Line number (1-based) where the error was detected.
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnexpectedCharacter { line, .. }
            | Self::UnexpectedClose { line, .. }
            | Self::UnexpectedEof { line, .. }
            | Self::ExpectedKey { line, .. }
            | Self::ExpectedValue { line, .. } => *line,
        }
    }

    /// Byte offset into the source where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString { offset, .. }
            | Self::UnexpectedCharacter { offset, .. }
            | Self::UnexpectedClose { offset, .. }
            | Self::UnexpectedEof { offset, .. }
            | Self::ExpectedKey { offset, .. }
            | Self::ExpectedValue { offset, .. } => *offset,
        }
    }
}
