//! MySQL/Oracle dual-dialect SQL front end.
//!
//! Hand-written recursive descent with precedence climbing for
//! expressions. Produces the tree defined in `duosql-ast` together with
//! diagnostics; nothing here resolves names or checks types.
//!
//! ```
//! use duosql_parser::{parse, Dialect, ParserConfig};
//!
//! let out = parse("SELECT a FROM t WHERE b = 1", &ParserConfig::new(Dialect::MySql));
//! assert!(!out.has_errors());
//! assert_eq!(out.statements[0].to_string(), "SELECT a FROM t WHERE b = 1");
//! ```

pub mod diagnostics;
pub mod dialect;
pub mod grammar;
pub mod hint;
pub mod lexer;
pub mod parser;
pub mod token;

pub use diagnostics::{Diagnostic, DiagnosticReporter, ParseOutput};
pub use dialect::{Dialect, ParserConfig, DEFAULT_MAX_DEPTH};
pub use lexer::Lexer;
pub use parser::{Fragment, Parser, StartRule};
pub use token::{Keyword, Token, TokenKind};

use duosql_ast::Expr;
use duosql_error::{Position, SqlError};

/// Parse `;`-separated statements, recovering after errors.
///
/// An invalid `config` yields no statements and a single `Config` error
/// diagnostic.
#[must_use]
pub fn parse(sql: &str, config: &ParserConfig) -> ParseOutput {
    if let Err(err) = config.validate() {
        return ParseOutput {
            statements: Vec::new(),
            diagnostics: vec![err.into()],
        };
    }
    Parser::from_sql(sql, *config).parse_all()
}

/// Parse `sql` as exactly one instance of `start`.
///
/// For [`StartRule::Hint`] the input is either a whole `/*+ ... */` comment
/// or the bare hint body.
#[must_use]
pub fn parse_rule(
    sql: &str,
    start: StartRule,
    config: &ParserConfig,
) -> (Option<Fragment>, Vec<Diagnostic>) {
    if let Err(err) = config.validate() {
        return (None, vec![err.into()]);
    }
    if start == StartRule::Hint && !sql.trim_start().starts_with("/*+") {
        return match hint::parse_hints(sql, Position::new(1, 1, 0)) {
            Ok(hints) => (Some(Fragment::Hints(hints)), Vec::new()),
            Err(err) => {
                tracing::warn!(target: "duosql.hint", "{err}");
                (Some(Fragment::Hints(Vec::new())), vec![err.into()])
            }
        };
    }
    Parser::from_sql(sql, *config).parse_start(start)
}

/// Parse a standalone expression; the first error wins.
///
/// # Errors
///
/// Returns the first lexical or syntax error, or [`SqlError::TrailingInput`]
/// when text follows the expression.
pub fn parse_expr(sql: &str, dialect: Dialect) -> Result<Expr, SqlError> {
    let (fragment, diagnostics) = parse_rule(sql, StartRule::Expr, &ParserConfig::new(dialect));
    if let Some(diag) = diagnostics
        .into_iter()
        .find(|d| d.severity == duosql_error::Severity::Error)
    {
        return Err(diag.error);
    }
    match fragment {
        Some(Fragment::Expr(expr)) => Ok(expr),
        _ => Err(SqlError::UnknownRule("expr".to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duosql_ast::{BinaryOp, Statement};
    use duosql_error::ErrorCode;

    #[test]
    fn test_parse_rejects_invalid_config() {
        let out = parse("SELECT 1", &ParserConfig::default().with_max_depth(0));
        assert!(out.statements.is_empty());
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].code, ErrorCode::Config);
    }

    #[test]
    fn test_parse_rule_by_name() {
        let config = ParserConfig::new(Dialect::Oracle);
        let rule = StartRule::from_name("select_stmt").unwrap();
        let (fragment, diags) = parse_rule("SELECT 1 FROM dual;", rule, &config);
        assert!(diags.is_empty(), "{diags:?}");
        assert!(matches!(fragment, Some(Fragment::Statement(Statement::Select(_)))));

        let (fragment, diags) = parse_rule(
            "DELETE FROM t",
            StartRule::from_name("select_stmt").unwrap(),
            &config,
        );
        assert!(fragment.is_none());
        assert_eq!(diags[0].code, ErrorCode::Syntax);

        assert!(matches!(
            StartRule::from_name("no_such_rule"),
            Err(SqlError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_parse_rule_hint_forms() {
        let config = ParserConfig::new(Dialect::Oracle);
        for src in ["/*+ FULL(t) PARALLEL(t 4) */", "FULL(t) PARALLEL(t 4)"] {
            let (fragment, diags) = parse_rule(src, StartRule::Hint, &config);
            assert!(diags.is_empty(), "{src}: {diags:?}");
            let Some(Fragment::Hints(hints)) = fragment else {
                panic!("{src}: no hints")
            };
            assert_eq!(hints.len(), 2);
            assert_eq!(hints[1].name, "PARALLEL");
        }
        let (fragment, diags) = parse_rule("FULL(t", StartRule::Hint, &config);
        assert_eq!(fragment, Some(Fragment::Hints(Vec::new())));
        assert_eq!(diags[0].code, ErrorCode::Hint);
    }

    #[test]
    fn test_leading_hint_is_a_comment_for_statements() {
        let out = parse("/*+ FULL(t) */ SELECT 1", &ParserConfig::default());
        assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
        assert_eq!(out.statements.len(), 1);
    }

    #[test]
    fn test_parse_expr() {
        let expr = parse_expr("a OR b AND c", Dialect::MySql).unwrap();
        let Expr::Binary { op, right, .. } = expr else {
            panic!("not binary")
        };
        assert_eq!(op, BinaryOp::Or);
        assert!(matches!(*right, Expr::Binary { op: BinaryOp::And, .. }));

        assert!(matches!(
            parse_expr("1 +", Dialect::Oracle),
            Err(SqlError::Syntax { .. })
        ));
        assert!(matches!(
            parse_expr("1 2", Dialect::MySql),
            Err(SqlError::TrailingInput { .. })
        ));
    }
}
