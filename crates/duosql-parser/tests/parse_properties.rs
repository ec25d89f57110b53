//! End-to-end parse properties through the public API.
//!
//! Each test drives `parse` / `parse_expr` the way a tool would and checks
//! the shape of the resulting tree and diagnostics.

use duosql_ast::{
    BinaryOp, CharKind, DataType, Expr, IntKind, PseudoColumn, SelectCore, SelectStatement,
    Statement,
};
use duosql_error::{ErrorCode, Severity, SqlError};
use duosql_parser::{parse, parse_expr, Dialect, ParseOutput, ParserConfig};

fn parse_in(sql: &str, dialect: Dialect) -> ParseOutput {
    parse(sql, &ParserConfig::new(dialect))
}

fn only_statement(sql: &str, dialect: Dialect) -> Statement {
    let out = parse_in(sql, dialect);
    assert!(
        out.diagnostics.is_empty(),
        "unexpected diagnostics for {sql:?}: {:?}",
        out.diagnostics
    );
    assert_eq!(out.statements.len(), 1, "{sql:?}");
    out.statements.into_iter().next().unwrap()
}

fn select(stmt: &Statement) -> &SelectStatement {
    match stmt {
        Statement::Select(s) => s,
        other => panic!("expected SELECT, got {other:?}"),
    }
}

/// Print, re-parse and print again; both renderings must match.
fn assert_round_trip(sql: &str, dialect: Dialect) {
    let first = only_statement(sql, dialect);
    let printed = first.to_string();
    let second = only_statement(&printed, dialect);
    assert_eq!(printed, second.to_string(), "unstable rendering of {sql:?}");
    assert_eq!(first.kind(), second.kind());
}

#[test]
fn test_round_trip_is_idempotent() {
    let mysql = [
        "SELECT DISTINCT a, b AS c FROM t1 JOIN t2 ON t1.id = t2.id WHERE a > 1 \
         GROUP BY a HAVING COUNT(*) > 2 ORDER BY a DESC LIMIT 10",
        "INSERT INTO t (a, b) VALUES (1, 'x'), (2, 'y') ON DUPLICATE KEY UPDATE b = VALUES(b)",
        "UPDATE t SET a = a + 1 WHERE id IN (SELECT id FROM u) ORDER BY id LIMIT 5",
        "DELETE FROM t WHERE a IS NOT NULL",
        "CREATE TABLE t (id INT PRIMARY KEY, name VARCHAR(32) NOT NULL DEFAULT '') ENGINE = InnoDB",
        "ALTER TABLE t ADD COLUMN c INT, DROP COLUMN d",
        "SET @@session.sql_mode = 'ANSI', @x = 1",
        "GRANT SELECT, INSERT ON db.* TO 'u'@'%'",
    ];
    for sql in mysql {
        assert_round_trip(sql, Dialect::MySql);
    }
    let oracle = [
        "SELECT LEVEL, ename FROM emp START WITH mgr IS NULL CONNECT BY PRIOR empno = mgr",
        "SELECT a || b FROM dual",
        "SELECT a FROM t MINUS SELECT b FROM u",
        "SELECT a FROM t ORDER BY a OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY",
        "MERGE INTO t USING s ON (t.id = s.id) WHEN MATCHED THEN UPDATE SET t.v = s.v \
         WHEN NOT MATCHED THEN INSERT (id, v) VALUES (s.id, s.v)",
        "CREATE SEQUENCE s START WITH 1 INCREMENT BY 1",
        "CREATE OR REPLACE SYNONYM syn FOR hr.emp",
    ];
    for sql in oracle {
        assert_round_trip(sql, Dialect::Oracle);
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    for dialect in [Dialect::MySql, Dialect::Oracle] {
        let expr = parse_expr("a OR b AND c", dialect).unwrap();
        let Expr::Binary {
            left, op, right, ..
        } = expr
        else {
            panic!("expected a binary expression")
        };
        assert_eq!(op, BinaryOp::Or);
        assert!(matches!(*left, Expr::Column(ref c, _) if c.column.value == "a"));
        let Expr::Binary {
            left: b, op, right: c, ..
        } = *right
        else {
            panic!("expected AND on the right")
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(*b, Expr::Column(ref col, _) if col.column.value == "b"));
        assert!(matches!(*c, Expr::Column(ref col, _) if col.column.value == "c"));
    }
}

#[test]
fn test_omitting_where_changes_only_the_where_node() {
    let without = only_statement("SELECT * FROM t", Dialect::MySql);
    let with = only_statement("SELECT * FROM t WHERE 1=1", Dialect::MySql);
    let (SelectCore::Select(a), SelectCore::Select(b)) =
        (&select(&without).body.select, &select(&with).body.select)
    else {
        panic!("expected plain query specifications")
    };
    assert!(a.where_clause.is_none());
    assert!(b.where_clause.is_some());
    assert_eq!(a.columns, b.columns);
    assert_eq!(a.from, b.from);
    assert_eq!(a.group_by, b.group_by);
    assert_eq!(a.having, b.having);
}

#[test]
fn test_omitting_order_by_keeps_query_body() {
    let without = only_statement("SELECT a FROM t", Dialect::Oracle);
    let with = only_statement("SELECT a FROM t ORDER BY a", Dialect::Oracle);
    assert_eq!(select(&without).body, select(&with).body);
    assert!(select(&without).order_by.is_empty());
    assert_eq!(select(&with).order_by.len(), 1);
}

#[test]
fn test_level_depends_on_dialect() {
    let oracle = parse_expr("level", Dialect::Oracle).unwrap();
    assert!(matches!(oracle, Expr::Pseudo(PseudoColumn::Level, _)));
    let mysql = parse_expr("level", Dialect::MySql).unwrap();
    assert!(matches!(mysql, Expr::Column(ref c, _) if c.column.value == "level"));
}

#[test]
fn test_error_in_middle_statement_keeps_neighbours() {
    let out = parse_in("SELECT 1; SELECT FROM WHERE; SELECT 3", Dialect::MySql);
    assert_eq!(out.statements.len(), 2);
    assert_eq!(out.statements[0].to_string(), "SELECT 1");
    assert_eq!(out.statements[1].to_string(), "SELECT 3");
    let errors: Vec<_> = out
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::Syntax);
    assert_eq!(errors[0].position.map(|p| p.offset), Some(17));
}

#[test]
fn test_create_table_scenario() {
    let stmt = only_statement("CREATE TABLE t (a INT, b VARCHAR(10))", Dialect::MySql);
    let Statement::CreateTable(table) = stmt else {
        panic!("expected CREATE TABLE")
    };
    assert_eq!(table.name.name.value, "t");
    assert!(table.name.schema.is_none());
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].name.value, "a");
    assert!(matches!(
        table.columns[0].data_type,
        DataType::Int {
            kind: IntKind::Int,
            width: None,
            ..
        }
    ));
    assert_eq!(table.columns[1].name.value, "b");
    assert_eq!(
        table.columns[1].data_type,
        DataType::Char {
            kind: CharKind::Varchar,
            length: Some(10),
            semantics: None,
        }
    );
    assert!(table.constraints.is_empty());
}

#[test]
fn test_truncated_binary_operator_scenario() {
    for dialect in [Dialect::MySql, Dialect::Oracle] {
        let out = parse_in("SELECT 1 +", dialect);
        assert!(out.statements.is_empty());
        assert_eq!(out.diagnostics.len(), 1);
        let diag = &out.diagnostics[0];
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "expected expression after binary operator");
        assert_eq!(diag.position.map(|p| p.offset), Some(10));
        assert!(matches!(diag.error, SqlError::Syntax { .. }));
    }
}

#[test]
fn test_into_result_reports_first_error() {
    let err = parse_in("SELECT 1; SELECT 1 +; SELECT (", Dialect::MySql)
        .into_result()
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Syntax);
    assert_eq!(err.position().map(|p| p.offset), Some(20));

    let stmts = parse_in("SELECT 1; SELECT 2", Dialect::MySql)
        .into_result()
        .unwrap();
    assert_eq!(stmts.len(), 2);
}
