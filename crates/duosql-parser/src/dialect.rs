//! Dialect selection and parser configuration.

use std::fmt;
use std::str::FromStr;

use duosql_error::SqlError;
use serde::{Deserialize, Serialize};

use crate::token::{Availability, Keyword};

/// Default nesting limit for expressions, queries and table references.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// SQL dialect the lexer and parser follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    Oracle,
}

impl Dialect {
    /// Whether `kw` is a keyword at all in this dialect. Words that are not
    /// recognized lex as plain identifiers.
    #[must_use]
    pub const fn recognizes(self, kw: Keyword) -> bool {
        match kw.availability() {
            Availability::Both => true,
            Availability::MySqlOnly => matches!(self, Self::MySql),
            Availability::OracleOnly => matches!(self, Self::Oracle),
        }
    }

    /// Whether `kw` is reserved, i.e. unusable as an unquoted identifier.
    #[must_use]
    pub const fn is_reserved(self, kw: Keyword) -> bool {
        self.recognizes(kw) && kw.is_reserved_in(self)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Oracle => "oracle",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "oracle" => Ok(Self::Oracle),
            other => Err(SqlError::config(format!(
                "unknown dialect '{other}' (expected mysql or oracle)"
            ))),
        }
    }
}

/// Knobs controlling lexing and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub dialect: Dialect,
    /// Maximum nesting of expressions, queries and table references.
    pub max_depth: usize,
    /// Treat `||` as string concatenation. `None` follows the dialect:
    /// concatenation in Oracle, logical OR in MySQL.
    pub pipes_as_concat: Option<bool>,
    /// MySQL `ANSI_QUOTES`: double quotes delimit identifiers.
    pub ansi_quotes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            max_depth: DEFAULT_MAX_DEPTH,
            pipes_as_concat: None,
            ansi_quotes: false,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_pipes_as_concat(mut self, on: bool) -> Self {
        self.pipes_as_concat = Some(on);
        self
    }

    #[must_use]
    pub const fn with_ansi_quotes(mut self, on: bool) -> Self {
        self.ansi_quotes = on;
        self
    }

    /// Effective meaning of `||`.
    #[must_use]
    pub fn concat_pipes(&self) -> bool {
        self.pipes_as_concat
            .unwrap_or(matches!(self.dialect, Dialect::Oracle))
    }

    /// Whether `"..."` lexes as a quoted identifier.
    #[must_use]
    pub fn double_quote_is_ident(&self) -> bool {
        matches!(self.dialect, Dialect::Oracle) || self.ansi_quotes
    }

    /// Reject configurations the parser cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Config`] when `max_depth` is zero.
    pub fn validate(&self) -> Result<(), SqlError> {
        if self.max_depth == 0 {
            return Err(SqlError::config("max_depth must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(config.max_depth, 128);
        assert!(!config.concat_pipes());
        assert!(!config.double_quote_is_ident());
    }

    #[test]
    fn test_oracle_derived_settings() {
        let config = ParserConfig::new(Dialect::Oracle);
        assert!(config.concat_pipes());
        assert!(config.double_quote_is_ident());
        assert!(!config.with_pipes_as_concat(false).concat_pipes());
    }

    #[test]
    fn test_ansi_quotes_in_mysql() {
        let config = ParserConfig::default().with_ansi_quotes(true);
        assert!(config.double_quote_is_ident());
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("MySQL".parse::<Dialect>().ok(), Some(Dialect::MySql));
        assert_eq!("oracle".parse::<Dialect>().ok(), Some(Dialect::Oracle));
        let err = "postgres".parse::<Dialect>().unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }

    #[test]
    fn test_recognizes_per_dialect() {
        assert!(Dialect::Oracle.recognizes(Keyword::Level));
        assert!(!Dialect::MySql.recognizes(Keyword::Level));
        assert!(Dialect::MySql.recognizes(Keyword::Limit));
        assert!(!Dialect::Oracle.recognizes(Keyword::Limit));
        assert!(!Dialect::MySql.is_reserved(Keyword::RowNum));
        assert!(Dialect::Oracle.is_reserved(Keyword::RowNum));
    }

    #[test]
    fn test_validate() {
        assert!(ParserConfig::default().validate().is_ok());
        assert!(ParserConfig::default().with_max_depth(0).validate().is_err());
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: ParserConfig = serde_json::from_str(r#"{"dialect":"oracle"}"#).unwrap();
        assert_eq!(config.dialect, Dialect::Oracle);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"oracle\""));
    }
}
