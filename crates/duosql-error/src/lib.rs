use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A location in SQL source text.
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset of
/// the first byte of the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// How serious a reported problem is.
///
/// The parser only records severities; deciding whether an error aborts
/// downstream processing is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Primary error type for duosql lexing and parsing.
///
/// Lexical and syntax errors are fatal to the statement they occur in;
/// recursion-limit errors are fatal to the whole parse call; hint warnings
/// never abort anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// Invalid character, malformed literal or unterminated token.
    #[error("{position}: lexical error: {message}")]
    Lex { message: String, position: Position, len: u32 },

    /// Token sequence matches no grammar alternative.
    #[error("{position}: syntax error: {message}")]
    Syntax {
        message: String,
        position: Position,
        len: u32,
        /// Descriptions of the tokens that would have been accepted.
        expected: Vec<String>,
        /// Description of the token actually found.
        found: String,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("{position}: nesting depth exceeds the limit of {limit}")]
    RecursionLimitExceeded { limit: usize, position: Position },

    /// Hint comment could not be parsed; the hint was dropped.
    #[error("{position}: malformed hint ignored: {message}")]
    HintWarning { message: String, position: Position, len: u32 },

    /// Extra tokens after a complete statement.
    #[error("{position}: unexpected {found} after end of statement")]
    TrailingInput {
        found: String,
        position: Position,
        len: u32,
    },

    /// Start rule name not present in the grammar table.
    #[error("unknown start rule: '{0}'")]
    UnknownRule(String),

    /// Invalid parser configuration.
    #[error("invalid parser configuration: {0}")]
    Config(String),
}

/// Stable numeric codes for [`SqlError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    /// Lexical error.
    Lex = 1001,
    /// Syntax error.
    Syntax = 1002,
    /// Nesting too deep.
    RecursionLimit = 1003,
    /// Malformed hint.
    Hint = 1004,
    /// Garbage after a statement.
    TrailingInput = 1005,
    /// Unknown start rule.
    UnknownRule = 1006,
    /// Bad configuration.
    Config = 1007,
}

impl ErrorCode {
    /// Short mnemonic used in machine-readable output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lex => "lex",
            Self::Syntax => "syntax",
            Self::RecursionLimit => "recursion-limit",
            Self::Hint => "hint",
            Self::TrailingInput => "trailing-input",
            Self::UnknownRule => "unknown-rule",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SqlError {
    /// Map this error to its stable code.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Lex { .. } => ErrorCode::Lex,
            Self::Syntax { .. } => ErrorCode::Syntax,
            Self::RecursionLimitExceeded { .. } => ErrorCode::RecursionLimit,
            Self::HintWarning { .. } => ErrorCode::Hint,
            Self::TrailingInput { .. } => ErrorCode::TrailingInput,
            Self::UnknownRule(_) => ErrorCode::UnknownRule,
            Self::Config(_) => ErrorCode::Config,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::HintWarning { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this error ends the whole parse call rather than one statement.
    pub const fn is_fatal_to_parse(&self) -> bool {
        matches!(
            self,
            Self::RecursionLimitExceeded { .. } | Self::UnknownRule(_) | Self::Config(_)
        )
    }

    /// Source position, when the error is tied to one.
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex { position, .. }
            | Self::Syntax { position, .. }
            | Self::RecursionLimitExceeded { position, .. }
            | Self::HintWarning { position, .. }
            | Self::TrailingInput { position, .. } => Some(*position),
            Self::UnknownRule(_) | Self::Config(_) => None,
        }
    }

    /// Byte length of the offending source range (0 at end of input).
    pub const fn span_len(&self) -> u32 {
        match self {
            Self::Lex { len, .. }
            | Self::Syntax { len, .. }
            | Self::HintWarning { len, .. }
            | Self::TrailingInput { len, .. } => *len,
            Self::RecursionLimitExceeded { .. } | Self::UnknownRule(_) | Self::Config(_) => 0,
        }
    }

    /// The human-readable message without the position prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Lex { message, .. }
            | Self::Syntax { message, .. }
            | Self::HintWarning { message, .. } => message.clone(),
            Self::RecursionLimitExceeded { limit, .. } => {
                format!("nesting depth exceeds the limit of {limit}")
            }
            Self::TrailingInput { found, .. } => {
                format!("unexpected {found} after end of statement")
            }
            Self::UnknownRule(name) => format!("unknown start rule: '{name}'"),
            Self::Config(detail) => format!("invalid parser configuration: {detail}"),
        }
    }

    /// Create a lexical error.
    pub fn lex(position: Position, len: u32, message: impl Into<String>) -> Self {
        Self::Lex {
            message: message.into(),
            position,
            len,
        }
    }

    /// Create a syntax error with an expected-token set.
    pub fn syntax(
        position: Position,
        len: u32,
        message: impl Into<String>,
        expected: Vec<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
            len,
            expected,
            found: found.into(),
        }
    }

    /// Create a hint warning.
    pub fn hint(position: Position, len: u32, message: impl Into<String>) -> Self {
        Self::HintWarning {
            message: message.into(),
            position,
            len,
        }
    }

    /// Create a configuration error.
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }
}

/// Result type alias using `SqlError`.
pub type Result<T> = std::result::Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new(2, 7, 15)
    }

    #[test]
    fn error_display() {
        let err = SqlError::syntax(pos(), 1, "expected FROM", vec!["FROM".to_owned()], "WHERE");
        assert_eq!(err.to_string(), "2:7: syntax error: expected FROM");

        let err = SqlError::lex(pos(), 3, "unterminated string literal");
        assert_eq!(
            err.to_string(),
            "2:7: lexical error: unterminated string literal"
        );

        let err = SqlError::RecursionLimitExceeded {
            limit: 128,
            position: pos(),
        };
        assert_eq!(
            err.to_string(),
            "2:7: nesting depth exceeds the limit of 128"
        );
    }

    #[test]
    fn error_code_mapping() {
        assert_eq!(SqlError::lex(pos(), 1, "x").code(), ErrorCode::Lex);
        assert_eq!(
            SqlError::syntax(pos(), 1, "x", vec![], "y").code(),
            ErrorCode::Syntax
        );
        assert_eq!(SqlError::hint(pos(), 1, "x").code(), ErrorCode::Hint);
        assert_eq!(
            SqlError::UnknownRule("nope".into()).code(),
            ErrorCode::UnknownRule
        );
        assert_eq!(ErrorCode::RecursionLimit as i32, 1003);
    }

    #[test]
    fn severities() {
        assert_eq!(SqlError::hint(pos(), 1, "x").severity(), Severity::Warning);
        assert_eq!(SqlError::lex(pos(), 1, "x").severity(), Severity::Error);
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn fatal_to_parse() {
        assert!(SqlError::RecursionLimitExceeded {
            limit: 4,
            position: pos()
        }
        .is_fatal_to_parse());
        assert!(!SqlError::lex(pos(), 1, "x").is_fatal_to_parse());
        assert!(!SqlError::hint(pos(), 1, "x").is_fatal_to_parse());
    }

    #[test]
    fn position_and_message() {
        let err = SqlError::TrailingInput {
            found: "identifier 'x'".into(),
            position: pos(),
            len: 1,
        };
        assert_eq!(err.position(), Some(pos()));
        assert_eq!(err.span_len(), 1);
        assert_eq!(err.message(), "unexpected identifier 'x' after end of statement");
        assert_eq!(SqlError::config("max_depth must be positive").position(), None);
    }

    #[test]
    fn serde_shapes() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let p: Position = serde_json::from_str(r#"{"line":1,"column":2,"offset":1}"#).unwrap();
        assert_eq!(p, Position::new(1, 2, 1));
    }
}
