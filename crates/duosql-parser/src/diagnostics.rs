//! Diagnostics collected while parsing.

use duosql_ast::{Span, Statement};
use duosql_error::{ErrorCode, Position, Severity, SqlError};

/// One reported problem, flattened for display and machine consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub position: Option<Position>,
    /// Byte range of the offending source text.
    pub span: Span,
    /// Token descriptions that would have been accepted (syntax errors only).
    pub expected: Vec<String>,
    /// The underlying error.
    pub error: SqlError,
}

impl From<SqlError> for Diagnostic {
    fn from(error: SqlError) -> Self {
        let position = error.position();
        let start = position.map_or(0, |p| p.offset);
        let expected = match &error {
            SqlError::Syntax { expected, .. } => expected.clone(),
            _ => Vec::new(),
        };
        Self {
            severity: error.severity(),
            code: error.code(),
            message: error.message(),
            position,
            span: Span::new(start, start.saturating_add(error.span_len())),
            expected,
            error,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(pos) = self.position {
            write!(f, "{pos}: ")?;
        }
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        if !self.expected.is_empty() {
            write!(f, " (expected one of: {})", self.expected.join(", "))?;
        }
        Ok(())
    }
}

/// Accumulates diagnostics for one parse call. Never fails or panics.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticReporter {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: SqlError) {
        self.diagnostics.push(Diagnostic::from(error));
    }

    /// Diagnostics in source order; problems without a position come first.
    #[must_use]
    pub fn collect(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| d.position.map(|p| p.offset));
        self.diagnostics
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Drop everything reported after the first `len` entries.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    pub(crate) fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Result of [`Parser::parse_all`](crate::Parser::parse_all).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Statement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Fail-fast view: the statements if no error was reported, otherwise
    /// the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error-severity diagnostic's [`SqlError`].
    pub fn into_result(self) -> Result<Vec<Statement>, SqlError> {
        match self
            .diagnostics
            .into_iter()
            .find(|d| d.severity == Severity::Error)
        {
            Some(d) => Err(d.error),
            None => Ok(self.statements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_at(offset: u32) -> SqlError {
        SqlError::syntax(
            Position::new(1, offset + 1, offset),
            2,
            "boom",
            vec!["','".to_owned()],
            "end of input",
        )
    }

    #[test]
    fn test_diagnostic_from_error() {
        let d = Diagnostic::from(syntax_at(4));
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.code, ErrorCode::Syntax);
        assert_eq!(d.span, Span::new(4, 6));
        assert_eq!(d.expected, vec!["','"]);
        assert_eq!(d.message, "boom");
        assert!(d.to_string().starts_with("1:5: error [syntax]: boom"));
    }

    #[test]
    fn test_reporter_counts_and_order() {
        let mut reporter = DiagnosticReporter::new();
        reporter.report(syntax_at(10));
        reporter.report(SqlError::hint(Position::new(1, 8, 7), 3, "bad hint"));
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.warning_count(), 1);
        let all = reporter.collect();
        assert_eq!(all[0].code, ErrorCode::Hint);
        assert_eq!(all[1].code, ErrorCode::Syntax);
    }

    #[test]
    fn test_empty_reporter() {
        let reporter = DiagnosticReporter::new();
        assert!(!reporter.has_errors());
        assert!(reporter.collect().is_empty());
    }

    #[test]
    fn test_into_result_picks_first_error() {
        let out = ParseOutput {
            statements: vec![],
            diagnostics: vec![
                Diagnostic::from(SqlError::hint(Position::new(1, 1, 0), 1, "w")),
                Diagnostic::from(syntax_at(3)),
            ],
        };
        assert!(out.has_errors());
        assert_eq!(out.warnings().count(), 1);
        let err = out.into_result().unwrap_err();
        assert_eq!(err.code(), ErrorCode::Syntax);
    }

    #[test]
    fn test_warnings_only_is_ok() {
        let out = ParseOutput {
            statements: vec![],
            diagnostics: vec![Diagnostic::from(SqlError::hint(
                Position::new(1, 1, 0),
                1,
                "w",
            ))],
        };
        assert!(!out.has_errors());
        assert!(out.into_result().is_ok());
    }
}
