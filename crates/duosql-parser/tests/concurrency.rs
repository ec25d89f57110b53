//! Independent parses on many threads share nothing but static tables.

use std::thread;

use duosql_parser::{parse, Dialect, ParseOutput, Parser, ParserConfig};

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn test_public_types_are_send() {
    assert_send::<Parser>();
    assert_send::<ParseOutput>();
    assert_send::<ParserConfig>();
    assert_sync::<ParserConfig>();
    assert_send::<duosql_ast::Statement>();
    assert_sync::<duosql_ast::Statement>();
    assert_send::<duosql_error::SqlError>();
}

#[test]
fn test_parallel_parses_match_sequential() {
    let inputs: Vec<(String, Dialect)> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                (
                    format!("SELECT a{i}, b FROM t{i} WHERE c > {i} ORDER BY a{i} LIMIT {i}"),
                    Dialect::MySql,
                )
            } else {
                (
                    format!("SELECT LEVEL, x{i} FROM t{i} CONNECT BY PRIOR id = pid; SELECT 1 +"),
                    Dialect::Oracle,
                )
            }
        })
        .collect();

    let sequential: Vec<_> = inputs
        .iter()
        .map(|(sql, dialect)| parse(sql, &ParserConfig::new(*dialect)))
        .collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(sql, dialect)| {
                scope.spawn(move || parse(sql, &ParserConfig::new(*dialect)))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("parser thread panicked"))
            .collect()
    });

    assert_eq!(parallel, sequential);
    for (out, (_, dialect)) in parallel.iter().zip(&inputs) {
        match dialect {
            Dialect::MySql => assert!(!out.has_errors()),
            Dialect::Oracle => {
                assert_eq!(out.statements.len(), 1);
                assert_eq!(out.diagnostics.len(), 1);
            }
        }
    }
}

#[test]
fn test_output_moves_across_threads() {
    let out = parse("SELECT 1; SELECT 2", &ParserConfig::default());
    let printed = thread::spawn(move || {
        out.statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    })
    .join()
    .expect("thread panicked");
    assert_eq!(printed, ["SELECT 1", "SELECT 2"]);
}
