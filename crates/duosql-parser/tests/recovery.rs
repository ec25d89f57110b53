//! Error recovery, hint warnings and the nesting limit.

use duosql_error::{ErrorCode, Severity};
use duosql_parser::{parse, Dialect, ParserConfig, DEFAULT_MAX_DEPTH};

fn nested_select(depth: usize) -> String {
    format!("SELECT {}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_every_bad_statement_is_reported_once() {
    let sql = "SELECT 1; SELECT * FROM; UPDATE SET; SELECT 4; DELETE t WHERE; SELECT 6";
    let out = parse(sql, &ParserConfig::default());
    let printed: Vec<String> = out.statements.iter().map(ToString::to_string).collect();
    assert_eq!(printed, ["SELECT 1", "SELECT 4", "SELECT 6"]);
    assert_eq!(out.diagnostics.len(), 3);
    assert!(out
        .diagnostics
        .iter()
        .all(|d| d.severity == Severity::Error && d.code == ErrorCode::Syntax));
    let offsets: Vec<_> = out
        .diagnostics
        .iter()
        .map(|d| d.position.map(|p| p.offset))
        .collect();
    let mut sorted = offsets.clone();
    sorted.sort();
    assert_eq!(offsets, sorted, "diagnostics are in source order");
}

#[test]
fn test_semicolon_inside_parens_does_not_end_recovery() {
    let out = parse(
        "SELECT f(1,; 2); SELECT 'a;b'; SELECT 3",
        &ParserConfig::default(),
    );
    let printed: Vec<String> = out.statements.iter().map(ToString::to_string).collect();
    assert_eq!(printed, ["SELECT 'a;b'", "SELECT 3"]);
}

#[test]
fn test_trailing_garbage_keeps_the_statement() {
    let out = parse("SELECT a FROM t garbage here; SELECT 2", &ParserConfig::default());
    assert_eq!(out.statements.len(), 2);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code, ErrorCode::TrailingInput);
    assert_eq!(out.diagnostics[0].severity, Severity::Error);
}

#[test]
fn test_lex_error_recovers_at_next_statement() {
    let out = parse("SELECT 1; SELECT $; SELECT 3", &ParserConfig::new(Dialect::MySql));
    assert!(out.has_errors());
    assert_eq!(out.diagnostics[0].code, ErrorCode::Lex);
    assert_eq!(out.statements.last().map(ToString::to_string).as_deref(), Some("SELECT 3"));
}

#[test]
fn test_malformed_hint_is_a_warning_only() {
    let out = parse(
        "SELECT /*+ INDEX(t idx */ a FROM t; SELECT 2",
        &ParserConfig::new(Dialect::Oracle),
    );
    assert!(!out.has_errors());
    assert_eq!(out.statements.len(), 2);
    let warnings: Vec<_> = out.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, ErrorCode::Hint);
    assert_eq!(out.statements[0].to_string(), "SELECT a FROM t");
}

#[test]
fn test_default_depth_limit_stops_the_parse() {
    let sql = format!(
        "SELECT 1; {}; SELECT 3",
        nested_select(DEFAULT_MAX_DEPTH + 10)
    );
    let out = parse(&sql, &ParserConfig::default());
    assert_eq!(out.statements.len(), 1, "parsing stops at the limit");
    let last = out.diagnostics.last().unwrap();
    assert_eq!(last.code, ErrorCode::RecursionLimit);
    assert!(last.error.is_fatal_to_parse());
}

#[test]
fn test_depth_limit_follows_config() {
    let sql = nested_select(20);
    assert!(!parse(&sql, &ParserConfig::default()).has_errors());
    let out = parse(&sql, &ParserConfig::default().with_max_depth(10));
    assert!(out.statements.is_empty());
    assert_eq!(out.diagnostics[0].code, ErrorCode::RecursionLimit);
}

#[test]
fn test_pathological_input_does_not_overflow() {
    let sql = format!("SELECT {}", "(".repeat(100_000));
    let out = parse(&sql, &ParserConfig::default());
    assert!(out.has_errors());
    assert_eq!(out.diagnostics[0].code, ErrorCode::RecursionLimit);

    let sql = format!("SELECT 1{}", " + 1".repeat(2_000));
    assert!(!parse(&sql, &ParserConfig::default()).has_errors());
}

#[test]
fn test_nesting_up_to_the_limit_fits_a_small_thread_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let config = ParserConfig::default();
            let mut deepest = 0;
            for depth in 1..=DEFAULT_MAX_DEPTH + 1 {
                let out = parse(&nested_select(depth), &config);
                if out.has_errors() {
                    assert_eq!(out.diagnostics[0].code, ErrorCode::RecursionLimit);
                    break;
                }
                assert_eq!(out.statements.len(), 1);
                deepest = depth;
            }
            let out = parse(&format!("SELECT {}", "(".repeat(10_000)), &config);
            assert_eq!(out.diagnostics[0].code, ErrorCode::RecursionLimit);
            deepest
        })
        .unwrap();
    let deepest = handle.join().unwrap();
    assert!(deepest > 0 && deepest <= DEFAULT_MAX_DEPTH);
}

#[test]
fn test_stray_close_paren_does_not_shorten_recovery() {
    let out = parse(
        "SELECT a FROM t WHERE ) (x; y) ; SELECT 2",
        &ParserConfig::default(),
    );
    let printed: Vec<String> = out.statements.iter().map(ToString::to_string).collect();
    assert_eq!(printed, ["SELECT 2"]);
    assert_eq!(out.diagnostics.len(), 1);
}
