//! Generated expressions and statements survive print / re-parse.

use duosql_parser::{parse, Dialect, ParserConfig};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "b", "c", "t.d", "e_1"]).prop_map(str::to_owned),
        (0u32..100_000).prop_map(|n| n.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("'{s}'")),
        Just("NULL".to_owned()),
    ]
}

fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 48, 3, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec![
                    "+", "-", "*", "/", "=", "<>", "<", ">=", "AND", "OR"
                ]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("NOT {e}")),
            inner.clone().prop_map(|e| format!("- {e}")),
            inner.clone().prop_map(|e| format!("{e} IS NOT NULL")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(e, lo, hi)| format!("{e} BETWEEN ({lo}) AND ({hi})")),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|args| format!("COALESCE({})", args.join(", "))),
            (inner.clone(), inner)
                .prop_map(|(c, v)| format!("CASE WHEN {c} THEN {v} ELSE NULL END")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(expr(), 1..4),
        prop::option::of(expr()),
        prop::option::of(prop::sample::select(vec!["a", "b DESC", "c ASC"])),
    )
        .prop_map(|(items, filter, order)| {
            let mut sql = format!("SELECT {} FROM t", items.join(", "));
            if let Some(f) = filter {
                sql.push_str(&format!(" WHERE {f}"));
            }
            if let Some(o) = order {
                sql.push_str(&format!(" ORDER BY {o}"));
            }
            sql
        })
}

fn dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![Just(Dialect::MySql), Just(Dialect::Oracle)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_statement_round_trip(sql in statement(), dialect in dialect()) {
        let config = ParserConfig::new(dialect);
        let first = parse(&sql, &config);
        prop_assert!(!first.has_errors(), "{:?}: {:?}", sql, first.diagnostics);
        prop_assert_eq!(first.statements.len(), 1);

        let printed = first.statements[0].to_string();
        let second = parse(&printed, &config);
        prop_assert!(!second.has_errors(), "{:?}: {:?}", printed, second.diagnostics);
        prop_assert_eq!(second.statements.len(), 1);
        prop_assert_eq!(&printed, &second.statements[0].to_string());
    }

    #[test]
    fn prop_expression_round_trip(text in expr(), dialect in dialect()) {
        let first = duosql_parser::parse_expr(&text, dialect);
        prop_assert!(first.is_ok(), "{:?}: {:?}", text, first);
        let printed = first.unwrap().to_string();
        let second = duosql_parser::parse_expr(&printed, dialect);
        prop_assert!(second.is_ok(), "{:?}: {:?}", printed, second);
        prop_assert_eq!(printed, second.unwrap().to_string());
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in "\\PC{0,64}", dialect in dialect()) {
        let out = parse(&text, &ParserConfig::new(dialect));
        for diag in &out.diagnostics {
            prop_assert!(diag.span.start as usize <= text.len());
        }
    }
}
