//! Tree walks over parser output.

use std::collections::BTreeSet;

use duosql_ast::listener::{walk_listener, Listener};
use duosql_ast::walk::{ExprKind, NodeKind, NodeRef, WalkControl};
use duosql_ast::{Expr, Statement, TableRef};
use duosql_parser::{parse, Dialect, ParserConfig};

fn statements(sql: &str, dialect: Dialect) -> Vec<Statement> {
    let out = parse(sql, &ParserConfig::new(dialect));
    assert!(out.diagnostics.is_empty(), "{sql:?}: {:?}", out.diagnostics);
    out.statements
}

/// Collects referenced tables and columns, the way a lineage tool would.
#[derive(Default)]
struct References {
    tables: BTreeSet<String>,
    columns: BTreeSet<String>,
    open: usize,
}

impl<'a> Listener<'a> for References {
    fn enter(&mut self, node: NodeRef<'a>) {
        self.open += 1;
        match node {
            NodeRef::TableRef(TableRef::Table { name, .. }) => {
                self.tables.insert(name.to_string());
            }
            NodeRef::Expr(Expr::Column(col, _)) => {
                self.columns.insert(col.column.value.clone());
            }
            _ => {}
        }
    }

    fn exit(&mut self, _node: NodeRef<'a>) {
        self.open -= 1;
    }
}

#[test]
fn test_listener_collects_references() {
    let stmts = statements(
        "SELECT o.id, c.name FROM orders o JOIN customers c ON o.cid = c.id \
         WHERE o.total > (SELECT AVG(total) FROM orders_archive); \
         UPDATE stock SET qty = qty - 1 WHERE sku IN (SELECT sku FROM picks)",
        Dialect::MySql,
    );
    let mut refs = References::default();
    for stmt in &stmts {
        walk_listener(NodeRef::from(stmt), &mut refs);
    }
    assert_eq!(refs.open, 0);
    let tables: Vec<_> = refs.tables.iter().map(String::as_str).collect();
    assert_eq!(
        tables,
        ["customers", "orders", "orders_archive", "picks", "stock"]
    );
    for col in ["id", "name", "cid", "total", "qty", "sku"] {
        assert!(refs.columns.contains(col), "missing column {col}");
    }
}

#[test]
fn test_children_lie_within_parent_spans() {
    fn check(node: NodeRef<'_>) {
        for child in node.children() {
            assert!(
                node.span().contains(child.span()),
                "{:?} {:?} not within {:?} {:?}",
                child.kind(),
                child.span(),
                node.kind(),
                node.span()
            );
            check(child);
        }
    }
    let sql = "SELECT a + 1 AS x, f(b) FROM t WHERE c BETWEEN 1 AND 2 ORDER BY x; \
               DELETE FROM t WHERE a = 1";
    for stmt in statements(sql, Dialect::Oracle) {
        check(NodeRef::from(&stmt));
    }
}

#[test]
fn test_walk_skips_subqueries() {
    let stmts = statements(
        "SELECT a FROM t WHERE b = (SELECT MAX(b) FROM u WHERE z = 1)",
        Dialect::Oracle,
    );
    let mut columns = Vec::new();
    stmts[0].walk(&mut |node| match node {
        NodeRef::Expr(Expr::Column(c, _)) => {
            columns.push(c.column.value.clone());
            WalkControl::Continue
        }
        _ if node.kind() == NodeKind::Expr(ExprKind::Subquery) => WalkControl::SkipChildren,
        _ => WalkControl::Continue,
    });
    assert_eq!(columns, ["a", "b"]);
}

#[test]
fn test_walk_stops_at_first_match() {
    let stmts = statements("SELECT a, b, c FROM t", Dialect::MySql);
    let mut first = None;
    let control = stmts[0].walk(&mut |node| {
        if let NodeRef::Expr(Expr::Column(c, _)) = node {
            first = Some(c.column.value.clone());
            return WalkControl::Stop;
        }
        WalkControl::Continue
    });
    assert_eq!(control, WalkControl::Stop);
    assert_eq!(first.as_deref(), Some("a"));
}
