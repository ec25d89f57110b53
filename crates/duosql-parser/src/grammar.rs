//! Declarative grammar rule table.
//!
//! The table documents every rule the recursive-descent parser implements and
//! drives two things at run time: statement dispatch (one or two leading
//! words select a statement rule) and start-rule lookup for
//! [`parse_rule`](crate::parse_rule). The productions themselves are data; the
//! parser functions in `parser/` mirror them one function per rule.
//!
//! Words are matched case-insensitively against keyword or identifier
//! tokens, so soft words such as `ROLLUP` or `NOWAIT` need no keyword entry.

use std::fmt;

/// Token classes usable as terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    Integer,
    Number,
    String,
    HexString,
    BindParam,
    Variable,
    Hint,
}

impl TokenClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::HexString => "hex",
            Self::BindParam => "bind-param",
            Self::Variable => "variable",
            Self::Hint => "hint",
        }
    }
}

/// One element of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Keyword or soft word, matched case-insensitively.
    Word(&'static str),
    Punct(&'static str),
    Token(TokenClass),
    /// Reference to another rule by name.
    Rule(&'static str),
    /// Zero or one occurrence of the group.
    Optional(&'static [Symbol]),
    /// One or more occurrences, whitespace separated.
    Repeat(&'static [Symbol]),
    /// One or more occurrences separated by commas.
    CommaList(&'static [Symbol]),
    /// Exactly one of the inline alternatives.
    Choice(&'static [Production]),
}

/// An ordered sequence of symbols.
pub type Production = &'static [Symbol];

/// A named rule with its alternatives, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: &'static str,
    pub alternatives: &'static [Production],
}

impl GrammarRule {
    /// Names of all rules referenced from this rule's productions.
    #[must_use]
    pub fn references(&self) -> Vec<&'static str> {
        fn collect(symbols: &[Symbol], out: &mut Vec<&'static str>) {
            for sym in symbols {
                match sym {
                    Symbol::Rule(name) => out.push(*name),
                    Symbol::Optional(inner) | Symbol::Repeat(inner) | Symbol::CommaList(inner) => {
                        collect(inner, out);
                    }
                    Symbol::Choice(alts) => {
                        for alt in *alts {
                            collect(alt, out);
                        }
                    }
                    Symbol::Word(_) | Symbol::Punct(_) | Symbol::Token(_) => {}
                }
            }
        }
        let mut out = Vec::new();
        for alt in self.alternatives {
            collect(alt, &mut out);
        }
        out
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, symbols: &[Symbol]) -> fmt::Result {
    for (i, sym) in symbols.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{sym}")?;
    }
    Ok(())
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::Punct(p) => write!(f, "'{p}'"),
            Self::Token(class) => write!(f, "<{}>", class.as_str()),
            Self::Rule(name) => f.write_str(name),
            Self::Optional(inner) => {
                f.write_str("[ ")?;
                write_seq(f, inner)?;
                f.write_str(" ]")
            }
            Self::Repeat(inner) => {
                f.write_str("{ ")?;
                write_seq(f, inner)?;
                f.write_str(" }+")
            }
            Self::CommaList(inner) => {
                f.write_str("( ")?;
                write_seq(f, inner)?;
                f.write_str(" ) ,..")
            }
            Self::Choice(alts) => {
                f.write_str("( ")?;
                for (i, alt) in alts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write_seq(f, alt)?;
                }
                f.write_str(" )")
            }
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::=", self.name)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { "\n    | " })?;
            write_seq(f, alt)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

use Symbol::{
    Choice as C, CommaList as L, Optional as O, Punct as P, Repeat as M, Rule as R, Word as W,
};

const ID: Symbol = Symbol::Token(TokenClass::Identifier);
const INT: Symbol = Symbol::Token(TokenClass::Integer);
const NUM: Symbol = Symbol::Token(TokenClass::Number);
const STR: Symbol = Symbol::Token(TokenClass::String);
const HEX: Symbol = Symbol::Token(TokenClass::HexString);
const BIND: Symbol = Symbol::Token(TokenClass::BindParam);
const VAR: Symbol = Symbol::Token(TokenClass::Variable);
const HINT: Symbol = Symbol::Token(TokenClass::Hint);

macro_rules! rule {
    ($name:literal => $($alt:expr),+ $(,)?) => {
        GrammarRule {
            name: $name,
            alternatives: &[$($alt),+],
        }
    };
}

/// Every rule of the dual-dialect grammar.
pub static GRAMMAR: &[GrammarRule] = &[
    // --- statement list -----------------------------------------------------
    rule!("stmt_list" => &[O(&[R("stmt")]), O(&[M(&[P(";"), O(&[R("stmt")])])])]),
    rule!("stmt" =>
        &[R("select_stmt")], &[R("insert_stmt")], &[R("replace_stmt")], &[R("update_stmt")],
        &[R("delete_stmt")], &[R("merge_stmt")], &[R("create_stmt")], &[R("alter_table_stmt")],
        &[R("alter_tablespace_stmt")], &[R("alter_tenant_stmt")], &[R("alter_user_stmt")],
        &[R("alter_sequence_stmt")], &[R("alter_profile_stmt")], &[R("alter_system_stmt")],
        &[R("alter_session_stmt")], &[R("drop_stmt")], &[R("drop_principal_stmt")],
        &[R("truncate_stmt")], &[R("rename_stmt")], &[R("comment_stmt")],
        &[R("flashback_stmt")], &[R("purge_stmt")], &[R("transaction_stmt")],
        &[R("set_stmt")], &[R("show_stmt")], &[R("use_stmt")], &[R("describe_stmt")],
        &[R("explain_stmt")], &[R("grant_stmt")], &[R("revoke_stmt")], &[R("kill_stmt")],
        &[R("call_stmt")],
    ),

    // --- queries -------------------------------------------------------------
    rule!("select_stmt" => &[
        O(&[R("with_clause")]), R("select_body"), O(&[R("order_by")]),
        O(&[C(&[&[R("limit_clause")], &[R("fetch_clause")]])]), O(&[R("for_update")]),
    ]),
    rule!("with_clause" => &[W("WITH"), O(&[W("RECURSIVE")]), L(&[R("cte")])]),
    rule!("cte" => &[ID, O(&[P("("), L(&[ID]), P(")")]), W("AS"), P("("), R("select_stmt"), P(")")]),
    rule!("select_body" => &[R("select_core"), O(&[M(&[R("set_op"), R("select_core")])])]),
    rule!("set_op" =>
        &[W("UNION"), O(&[C(&[&[W("ALL")], &[W("DISTINCT")]])])],
        &[W("INTERSECT")], &[W("EXCEPT")], &[W("MINUS")],
    ),
    rule!("select_core" => &[R("query_spec")], &[P("("), R("select_stmt"), P(")")]),
    rule!("query_spec" => &[
        W("SELECT"), O(&[R("hint")]), O(&[R("set_quantifier")]), L(&[R("select_item")]),
        O(&[R("into_clause")]), O(&[W("FROM"), L(&[R("table_ref")])]),
        O(&[W("WHERE"), R("expr")]), O(&[R("hierarchical_clause")]), O(&[R("group_by")]),
        O(&[W("HAVING"), R("expr")]), O(&[R("window_clause")]),
    ]),
    rule!("set_quantifier" => &[W("DISTINCT")], &[W("ALL")], &[W("UNIQUE")]),
    rule!("select_item" =>
        &[P("*")],
        &[ID, O(&[P("."), ID]), P("."), P("*")],
        &[R("expr"), O(&[R("alias")])],
    ),
    rule!("alias" => &[O(&[W("AS")]), C(&[&[ID], &[STR]])]),
    rule!("into_clause" => &[W("INTO"), L(&[C(&[&[VAR], &[BIND], &[ID]])])]),
    rule!("table_ref" => &[R("table_factor"), O(&[M(&[R("join_op"), R("table_factor"), O(&[R("join_constraint")])])])]),
    rule!("table_factor" =>
        &[R("qualified_name"), O(&[R("partition_list")]), O(&[R("alias")]), O(&[M(&[R("index_hint")])])],
        &[P("("), R("select_stmt"), P(")"), O(&[R("alias")])],
        &[P("("), R("table_ref"), P(")")],
    ),
    rule!("qualified_name" => &[ID, O(&[P("."), ID]), O(&[P("@"), ID])]),
    rule!("partition_list" => &[W("PARTITION"), P("("), L(&[ID]), P(")")]),
    rule!("index_hint" => &[R("index_hint_kind"), C(&[&[W("INDEX")], &[W("KEY")]]), P("("), L(&[ID]), P(")")]),
    rule!("index_hint_kind" => &[W("USE")], &[W("FORCE")], &[W("IGNORE")]),
    rule!("join_op" => &[P(",")], &[O(&[W("NATURAL")]), O(&[R("join_kind")]), W("JOIN")]),
    rule!("join_kind" =>
        &[W("INNER")], &[W("CROSS")],
        &[C(&[&[W("LEFT")], &[W("RIGHT")], &[W("FULL")]]), O(&[W("OUTER")])],
    ),
    rule!("join_constraint" => &[W("ON"), R("expr")], &[W("USING"), P("("), L(&[ID]), P(")")]),
    rule!("hierarchical_clause" =>
        &[O(&[W("START"), W("WITH"), R("expr")]), W("CONNECT"), W("BY"), O(&[W("NOCYCLE")]), R("expr")],
        &[W("CONNECT"), W("BY"), O(&[W("NOCYCLE")]), R("expr"), W("START"), W("WITH"), R("expr")],
    ),
    rule!("group_by" => &[W("GROUP"), W("BY"), L(&[R("grouping_element")]), O(&[W("WITH"), W("ROLLUP")])]),
    rule!("grouping_element" =>
        &[W("ROLLUP"), P("("), L(&[R("expr")]), P(")")],
        &[W("CUBE"), P("("), L(&[R("expr")]), P(")")],
        &[W("GROUPING"), W("SETS"), P("("), L(&[R("grouping_set")]), P(")")],
        &[R("expr")],
    ),
    rule!("grouping_set" => &[P("("), O(&[L(&[R("expr")])]), P(")")], &[R("expr")]),
    rule!("window_clause" => &[W("WINDOW"), L(&[ID, W("AS"), P("("), R("window_spec"), P(")")])]),
    rule!("window_spec" => &[
        O(&[ID]), O(&[W("PARTITION"), W("BY"), L(&[R("expr")])]), O(&[R("order_by")]),
        O(&[R("frame_clause")]),
    ]),
    rule!("frame_clause" =>
        &[R("frame_units"), W("BETWEEN"), R("frame_bound"), W("AND"), R("frame_bound")],
        &[R("frame_units"), R("frame_bound")],
    ),
    rule!("frame_units" => &[W("ROWS")], &[W("RANGE")]),
    rule!("frame_bound" =>
        &[W("UNBOUNDED"), C(&[&[W("PRECEDING")], &[W("FOLLOWING")]])],
        &[W("CURRENT"), W("ROW")],
        &[R("expr"), C(&[&[W("PRECEDING")], &[W("FOLLOWING")]])],
    ),
    rule!("order_by" => &[W("ORDER"), W("BY"), L(&[R("ordering_term")])]),
    rule!("ordering_term" => &[R("expr"), O(&[R("sort_direction")]), O(&[R("nulls_order")])]),
    rule!("sort_direction" => &[W("ASC")], &[W("DESC")]),
    rule!("nulls_order" => &[W("NULLS"), C(&[&[W("FIRST")], &[W("LAST")]])]),
    rule!("limit_clause" =>
        &[W("LIMIT"), R("expr"), P(","), R("expr")],
        &[W("LIMIT"), R("expr"), O(&[W("OFFSET"), R("expr")])],
    ),
    rule!("fetch_clause" =>
        &[W("OFFSET"), R("expr"), R("row_word"), O(&[R("fetch_first")])],
        &[R("fetch_first")],
    ),
    rule!("row_word" => &[W("ROW")], &[W("ROWS")]),
    rule!("fetch_first" => &[
        W("FETCH"), C(&[&[W("FIRST")], &[W("NEXT")]]), O(&[R("expr")]), O(&[W("PERCENT")]),
        R("row_word"), C(&[&[W("ONLY")], &[W("WITH"), W("TIES")]]),
    ]),
    rule!("for_update" => &[W("FOR"), W("UPDATE"), O(&[W("OF"), L(&[R("column_ref")])]), O(&[R("lock_wait")])]),
    rule!("lock_wait" => &[W("NOWAIT")], &[W("WAIT"), R("expr")], &[W("SKIP"), W("LOCKED")]),
    rule!("column_ref" => &[ID, O(&[P("."), ID]), O(&[P("."), ID])]),

    // --- DML -----------------------------------------------------------------
    rule!("insert_stmt" => &[W("INSERT"), O(&[R("hint")]), O(&[W("IGNORE")]), O(&[W("INTO")]), R("insert_target"), R("insert_source"), O(&[R("on_duplicate")]), O(&[R("returning_clause")])]),
    rule!("replace_stmt" => &[W("REPLACE"), O(&[R("hint")]), O(&[W("INTO")]), R("insert_target"), R("insert_source")]),
    rule!("insert_target" => &[R("qualified_name"), O(&[R("partition_list")]), O(&[ID]), O(&[P("("), L(&[ID]), P(")")])]),
    rule!("insert_source" =>
        &[R("values_word"), L(&[R("value_row")])],
        &[R("select_stmt")],
        &[W("SET"), L(&[R("assignment")])],
    ),
    rule!("values_word" => &[W("VALUES")], &[W("VALUE")]),
    rule!("value_row" => &[P("("), O(&[L(&[C(&[&[W("DEFAULT")], &[R("expr")]])])]), P(")")]),
    rule!("on_duplicate" => &[W("ON"), W("DUPLICATE"), W("KEY"), W("UPDATE"), L(&[R("assignment")])]),
    rule!("assignment" => &[R("column_ref"), P("="), C(&[&[W("DEFAULT")], &[R("expr")]])]),
    rule!("returning_clause" => &[C(&[&[W("RETURNING")], &[W("RETURN")]]), L(&[R("select_item")]), O(&[W("INTO"), L(&[R("expr")])])]),
    rule!("update_stmt" => &[
        W("UPDATE"), O(&[R("hint")]), O(&[W("IGNORE")]), L(&[R("table_ref")]), W("SET"),
        L(&[R("assignment")]), O(&[W("WHERE"), R("expr")]), O(&[R("order_by")]),
        O(&[R("limit_clause")]), O(&[R("returning_clause")]),
    ]),
    rule!("delete_stmt" => &[
        W("DELETE"), O(&[R("hint")]), O(&[W("FROM")]), R("table_ref"), O(&[W("WHERE"), R("expr")]),
        O(&[R("order_by")]), O(&[R("limit_clause")]), O(&[R("returning_clause")]),
    ]),
    rule!("merge_stmt" => &[
        W("MERGE"), O(&[R("hint")]), W("INTO"), R("qualified_name"), O(&[ID]), W("USING"),
        R("table_factor"), W("ON"), P("("), R("expr"), P(")"), M(&[R("merge_clause")]),
    ]),
    rule!("merge_clause" =>
        &[W("WHEN"), W("MATCHED"), W("THEN"), W("UPDATE"), W("SET"), L(&[R("assignment")]), O(&[W("WHERE"), R("expr")]), O(&[W("DELETE"), W("WHERE"), R("expr")])],
        &[W("WHEN"), W("NOT"), W("MATCHED"), W("THEN"), W("INSERT"), O(&[P("("), L(&[ID]), P(")")]), W("VALUES"), P("("), L(&[R("expr")]), P(")"), O(&[W("WHERE"), R("expr")])],
    ),

    // --- CREATE --------------------------------------------------------------
    rule!("create_stmt" => &[W("CREATE"), O(&[W("OR"), W("REPLACE")]), R("create_object")]),
    rule!("create_object" =>
        &[R("create_table")], &[R("create_index")], &[R("create_view")],
        &[R("create_materialized_view")], &[R("create_mview_log")], &[R("create_database")],
        &[R("create_tablespace")], &[R("create_tenant")], &[R("create_user")],
        &[R("create_role")], &[R("create_sequence")], &[R("create_synonym")],
        &[R("create_database_link")], &[R("create_profile")], &[R("create_context")],
    ),
    rule!("if_not_exists" => &[W("IF"), W("NOT"), W("EXISTS")]),
    rule!("if_exists" => &[W("IF"), W("EXISTS")]),
    rule!("create_table" => &[
        O(&[R("table_temporary")]), W("TABLE"), O(&[R("if_not_exists")]), R("qualified_name"),
        C(&[
            &[W("LIKE"), R("qualified_name")],
            &[O(&[P("("), L(&[R("table_element")]), P(")")]), O(&[R("table_options")]), O(&[R("partition_option")]), O(&[O(&[W("AS")]), R("select_stmt")])],
        ]),
    ]),
    rule!("table_temporary" => &[W("TEMPORARY")], &[W("GLOBAL"), W("TEMPORARY")]),
    rule!("table_element" => &[R("table_constraint")], &[R("column_def")]),
    rule!("column_def" => &[ID, R("data_type"), O(&[M(&[R("column_constraint")])])]),
    rule!("column_constraint" => &[O(&[W("CONSTRAINT"), ID]), R("column_constraint_kind")]),
    rule!("column_constraint_kind" =>
        &[W("NULL")], &[W("NOT"), W("NULL")], &[W("DEFAULT"), R("expr")],
        &[W("AUTO_INCREMENT")], &[W("PRIMARY"), W("KEY")], &[W("UNIQUE"), O(&[W("KEY")])],
        &[W("CHECK"), P("("), R("expr"), P(")")], &[R("references")], &[W("COMMENT"), STR],
        &[O(&[W("GENERATED"), W("ALWAYS")]), W("AS"), P("("), R("expr"), P(")"), O(&[R("generated_storage")])],
        &[W("ON"), W("UPDATE"), R("expr")], &[W("COLLATE"), ID], &[R("charset_word"), ID],
    ),
    rule!("generated_storage" => &[W("VIRTUAL")], &[W("STORED")]),
    rule!("charset_word" => &[W("CHARACTER"), W("SET")], &[W("CHARSET")]),
    rule!("references" => &[W("REFERENCES"), R("qualified_name"), O(&[P("("), L(&[ID]), P(")")]), O(&[M(&[R("referential_trigger")])])]),
    rule!("referential_trigger" => &[W("ON"), C(&[&[W("DELETE")], &[W("UPDATE")]]), R("referential_action")]),
    rule!("referential_action" =>
        &[W("CASCADE")], &[W("SET"), W("NULL")], &[W("SET"), W("DEFAULT")],
        &[W("RESTRICT")], &[W("NO"), W("ACTION")],
    ),
    rule!("table_constraint" => &[O(&[W("CONSTRAINT"), O(&[ID])]), R("table_constraint_kind")]),
    rule!("table_constraint_kind" =>
        &[W("PRIMARY"), W("KEY"), R("index_columns")],
        &[W("UNIQUE"), O(&[R("key_word")]), O(&[ID]), R("index_columns")],
        &[W("FOREIGN"), W("KEY"), O(&[ID]), P("("), L(&[ID]), P(")"), R("references")],
        &[W("CHECK"), P("("), R("expr"), P(")")],
        &[O(&[R("index_kind")]), R("key_word"), O(&[ID]), R("index_columns")],
    ),
    rule!("key_word" => &[W("INDEX")], &[W("KEY")]),
    rule!("index_kind" => &[W("UNIQUE")], &[W("FULLTEXT")], &[W("SPATIAL")]),
    rule!("index_columns" => &[P("("), L(&[R("index_column")]), P(")")]),
    rule!("index_column" => &[ID, O(&[P("("), INT, P(")")]), O(&[R("sort_direction")])]),
    rule!("table_options" => &[M(&[R("table_option"), O(&[P(",")])])]),
    rule!("table_option" => &[R("option_name"), O(&[P("=")]), R("option_value")]),
    rule!("option_name" => &[M(&[ID])]),
    rule!("option_value" => &[ID], &[NUM], &[STR], &[P("("), L(&[R("option_value")]), P(")")]),
    rule!("create_index" => &[
        O(&[R("index_kind")]), W("INDEX"), O(&[R("if_not_exists")]), R("qualified_name"),
        W("ON"), R("qualified_name"), R("index_columns"),
        O(&[C(&[&[W("LOCAL")], &[W("GLOBAL")]])]), O(&[R("table_options")]),
        O(&[R("partition_option")]),
    ]),
    rule!("create_view" => &[
        O(&[C(&[&[W("FORCE")], &[W("NO"), W("FORCE")]])]), W("VIEW"), R("qualified_name"),
        O(&[P("("), L(&[ID]), P(")")]), W("AS"), R("select_stmt"),
        O(&[W("WITH"), C(&[&[W("CHECK"), W("OPTION")], &[W("READ"), W("ONLY")]])]),
    ]),
    rule!("create_materialized_view" => &[
        W("MATERIALIZED"), W("VIEW"), R("qualified_name"), O(&[P("("), L(&[ID]), P(")")]),
        O(&[R("partition_option")]), O(&[R("refresh_clause")]),
        O(&[C(&[&[W("ENABLE")], &[W("DISABLE")]]), W("QUERY"), W("REWRITE")]),
        W("AS"), R("select_stmt"),
    ]),
    rule!("refresh_clause" =>
        &[W("NEVER"), W("REFRESH")],
        &[W("REFRESH"), O(&[C(&[&[W("FAST")], &[W("COMPLETE")], &[W("FORCE")]])]),
          O(&[W("ON"), C(&[&[W("DEMAND")], &[W("COMMIT")]])]),
          O(&[W("START"), W("WITH"), R("expr")]), O(&[W("NEXT"), R("expr")])],
    ),
    rule!("create_mview_log" => &[
        W("MATERIALIZED"), W("VIEW"), W("LOG"), W("ON"), R("qualified_name"),
        O(&[W("WITH"), L(&[C(&[&[W("PRIMARY"), W("KEY")], &[W("ROWID")], &[W("SEQUENCE")], &[P("("), L(&[ID]), P(")")]])])]),
        O(&[C(&[&[W("INCLUDING")], &[W("EXCLUDING")]]), W("NEW"), W("VALUES")]),
        O(&[W("PURGE"), C(&[&[W("IMMEDIATE")], &[O(&[W("START"), W("WITH"), R("expr")]), O(&[W("NEXT"), R("expr")])]])]),
    ]),
    rule!("create_database" => &[C(&[&[W("DATABASE")], &[W("SCHEMA")]]), O(&[R("if_not_exists")]), ID, O(&[R("table_options")])]),
    rule!("create_tablespace" => &[W("TABLESPACE"), ID, O(&[R("table_options")])]),
    rule!("create_tenant" => &[
        W("TENANT"), O(&[R("if_not_exists")]), ID, O(&[R("table_options")]),
        O(&[W("SET"), L(&[R("variable_assignment")])]),
    ]),
    rule!("create_user" => &[
        W("USER"), O(&[R("if_not_exists")]),
        L(&[R("user_spec"), O(&[W("IDENTIFIED"), W("BY"), C(&[&[STR], &[ID]])])]),
        O(&[M(&[R("user_attribute")])]),
    ]),
    rule!("user_spec" => &[C(&[&[ID], &[STR]]), O(&[P("@"), C(&[&[ID], &[STR]])])]),
    rule!("user_attribute" =>
        &[W("IDENTIFIED"), W("BY"), C(&[&[STR], &[ID]])],
        &[W("PROFILE"), ID],
        &[W("DEFAULT"), W("TABLESPACE"), ID],
        &[W("ACCOUNT"), C(&[&[W("LOCK")], &[W("UNLOCK")]])],
    ),
    rule!("create_role" => &[W("ROLE"), O(&[R("if_not_exists")]), L(&[R("user_spec")]), O(&[C(&[&[W("IDENTIFIED"), W("BY"), C(&[&[STR], &[ID]])], &[W("NOT"), W("IDENTIFIED")]])])]),
    rule!("create_sequence" => &[W("SEQUENCE"), O(&[R("if_not_exists")]), R("qualified_name"), O(&[M(&[R("sequence_option")])])]),
    rule!("sequence_option" =>
        &[W("START"), W("WITH"), R("signed_number")],
        &[W("INCREMENT"), W("BY"), R("signed_number")],
        &[W("MINVALUE"), R("signed_number")], &[W("NOMINVALUE")],
        &[W("MAXVALUE"), R("signed_number")], &[W("NOMAXVALUE")],
        &[W("CACHE"), R("signed_number")], &[W("NOCACHE")],
        &[W("CYCLE")], &[W("NOCYCLE")], &[W("ORDER")], &[W("NOORDER")],
    ),
    rule!("signed_number" => &[O(&[C(&[&[P("-")], &[P("+")]])]), NUM]),
    rule!("create_synonym" => &[O(&[W("PUBLIC")]), W("SYNONYM"), R("qualified_name"), W("FOR"), R("qualified_name")]),
    rule!("create_database_link" => &[
        O(&[W("PUBLIC")]), W("DATABASE"), W("LINK"), ID, W("CONNECT"), W("TO"), ID,
        O(&[P("@"), ID]), W("IDENTIFIED"), W("BY"), C(&[&[STR], &[ID]]),
        O(&[W("HOST"), STR]), O(&[W("USING"), STR]),
    ]),
    rule!("create_profile" => &[W("PROFILE"), ID, W("LIMIT"), M(&[R("profile_limit")])]),
    rule!("profile_limit" => &[ID, C(&[&[W("UNLIMITED")], &[W("DEFAULT")], &[R("expr")]])]),
    rule!("create_context" => &[
        W("CONTEXT"), ID, W("USING"), R("qualified_name"),
        O(&[C(&[&[W("INITIALIZED"), C(&[&[W("EXTERNALLY")], &[W("GLOBALLY")]])], &[W("ACCESSED"), W("GLOBALLY")]])]),
    ]),

    // --- partitioning --------------------------------------------------------
    rule!("partition_option" => &[
        W("PARTITION"), W("BY"), R("partition_method"), O(&[W("PARTITION"), W("SIZE"), STR]),
        O(&[W("PARTITIONS"), C(&[&[INT], &[W("AUTO")]])]), O(&[R("subpartition_option")]),
        O(&[P("("), L(&[R("partition_def")]), P(")")]),
    ]),
    rule!("partition_method" =>
        &[W("HASH"), P("("), L(&[R("expr")]), P(")")],
        &[O(&[W("LINEAR")]), W("KEY"), P("("), O(&[L(&[ID])]), P(")")],
        &[W("RANGE"), O(&[W("COLUMNS")]), P("("), L(&[R("expr")]), P(")"), O(&[W("INTERVAL"), P("("), R("expr"), P(")")])],
        &[W("LIST"), O(&[W("COLUMNS")]), P("("), L(&[R("expr")]), P(")")],
    ),
    rule!("subpartition_option" => &[
        W("SUBPARTITION"), W("BY"), R("partition_method"), O(&[W("SUBPARTITIONS"), INT]),
        O(&[W("SUBPARTITION"), W("TEMPLATE"), P("("), L(&[R("partition_def")]), P(")")]),
    ]),
    rule!("partition_def" => &[
        C(&[&[W("PARTITION")], &[W("SUBPARTITION")]]), ID, O(&[R("partition_values")]),
        O(&[R("table_options")]), O(&[P("("), L(&[R("partition_def")]), P(")")]),
    ]),
    rule!("partition_values" =>
        &[W("VALUES"), W("LESS"), W("THAN"), C(&[&[W("MAXVALUE")], &[P("("), L(&[R("partition_bound")]), P(")")]])],
        &[W("VALUES"), W("IN"), P("("), L(&[R("partition_bound")]), P(")")],
        &[W("VALUES"), P("("), L(&[R("partition_bound")]), P(")")],
    ),
    rule!("partition_bound" => &[W("MAXVALUE")], &[W("DEFAULT")], &[R("expr")]),

    // --- ALTER ---------------------------------------------------------------
    rule!("alter_table_stmt" => &[W("ALTER"), W("TABLE"), R("qualified_name"), L(&[R("alter_table_action")])]),
    rule!("alter_table_action" =>
        &[W("ADD"), O(&[W("COLUMN")]), R("column_def")],
        &[W("ADD"), P("("), L(&[R("column_def")]), P(")")],
        &[W("ADD"), R("table_constraint")],
        &[W("ADD"), W("PARTITION"), P("("), L(&[R("partition_def")]), P(")")],
        &[W("DROP"), O(&[W("COLUMN")]), ID],
        &[W("DROP"), W("CONSTRAINT"), ID],
        &[W("DROP"), W("PRIMARY"), W("KEY")],
        &[W("DROP"), R("key_word"), ID],
        &[W("DROP"), C(&[&[W("PARTITION")], &[W("SUBPARTITION")]]), L(&[ID])],
        &[W("TRUNCATE"), C(&[&[W("PARTITION")], &[W("SUBPARTITION")]]), L(&[ID])],
        &[W("MODIFY"), O(&[W("COLUMN")]), R("column_def")],
        &[W("MODIFY"), P("("), L(&[R("column_def")]), P(")")],
        &[W("CHANGE"), O(&[W("COLUMN")]), ID, R("column_def")],
        &[W("RENAME"), O(&[C(&[&[W("TO")], &[W("AS")]])]), R("qualified_name")],
        &[W("RENAME"), W("COLUMN"), ID, W("TO"), ID],
        &[W("ALTER"), O(&[W("COLUMN")]), ID, C(&[&[W("SET"), W("DEFAULT"), R("expr")], &[W("DROP"), W("DEFAULT")]])],
        &[R("partition_option")],
        &[R("table_options")],
    ),
    rule!("alter_tablespace_stmt" => &[W("ALTER"), W("TABLESPACE"), ID, R("table_options")]),
    rule!("alter_tenant_stmt" => &[
        W("ALTER"), W("TENANT"), ID,
        C(&[
            &[O(&[W("SET")]), R("table_options")],
            &[W("SET"), W("VARIABLES"), L(&[R("variable_assignment")])],
            &[W("LOCK")], &[W("UNLOCK")],
            &[W("RENAME"), W("GLOBAL_NAME"), W("TO"), ID],
        ]),
    ]),
    rule!("alter_user_stmt" => &[W("ALTER"), W("USER"), R("user_spec"), M(&[R("user_attribute")])]),
    rule!("alter_sequence_stmt" => &[W("ALTER"), W("SEQUENCE"), R("qualified_name"), M(&[R("sequence_option")])]),
    rule!("alter_profile_stmt" => &[W("ALTER"), W("PROFILE"), ID, W("LIMIT"), M(&[R("profile_limit")])]),
    rule!("alter_system_stmt" => &[
        W("ALTER"), W("SYSTEM"),
        C(&[
            &[W("SET"), L(&[R("setting"), O(&[M(&[R("setting")])])])],
            &[C(&[&[W("MAJOR")], &[W("MINOR")]]), W("FREEZE"), O(&[M(&[R("setting")])])],
            &[W("FLUSH"), ID, W("CACHE"), O(&[M(&[R("setting")])]), O(&[W("GLOBAL")])],
            &[W("KILL"), W("SESSION"), R("expr"), O(&[W("IMMEDIATE")])],
            &[W("CHECKPOINT")],
        ]),
    ]),
    rule!("alter_session_stmt" => &[W("ALTER"), W("SESSION"), W("SET"), M(&[R("setting")])]),
    rule!("setting" => &[ID, P("="), R("expr")]),

    // --- DROP and friends ----------------------------------------------------
    rule!("drop_stmt" => &[
        W("DROP"), O(&[W("PUBLIC")]), R("object_type"), O(&[R("if_exists")]),
        L(&[R("qualified_name")]), O(&[W("ON"), R("qualified_name")]), O(&[R("drop_behavior")]),
    ]),
    rule!("object_type" =>
        &[W("TABLE")], &[W("VIEW")], &[W("MATERIALIZED"), W("VIEW"), O(&[W("LOG"), W("ON")])],
        &[W("INDEX")], &[C(&[&[W("DATABASE")], &[W("SCHEMA")]])], &[W("TABLESPACE")],
        &[W("TENANT")], &[W("SEQUENCE")], &[W("SYNONYM")], &[W("DATABASE"), W("LINK")],
        &[W("PROFILE")], &[W("CONTEXT")],
    ),
    rule!("drop_behavior" =>
        &[W("CASCADE"), O(&[W("CONSTRAINTS")])], &[W("RESTRICT")], &[W("PURGE")], &[W("FORCE")],
    ),
    rule!("drop_principal_stmt" => &[W("DROP"), C(&[&[W("USER")], &[W("ROLE")]]), O(&[R("if_exists")]), L(&[R("user_spec")]), O(&[W("CASCADE")])]),
    rule!("truncate_stmt" => &[W("TRUNCATE"), O(&[W("TABLE")]), R("qualified_name")]),
    rule!("rename_stmt" => &[W("RENAME"), O(&[W("TABLE")]), L(&[R("qualified_name"), W("TO"), R("qualified_name")])]),
    rule!("comment_stmt" => &[W("COMMENT"), W("ON"), C(&[&[W("TABLE"), R("qualified_name")], &[W("COLUMN"), R("column_ref")]]), W("IS"), STR]),
    rule!("flashback_stmt" => &[W("FLASHBACK"), W("TABLE"), R("qualified_name"), W("TO"), W("BEFORE"), W("DROP"), O(&[W("RENAME"), W("TO"), R("qualified_name")])]),
    rule!("purge_stmt" => &[W("PURGE"), C(&[&[W("TABLE"), R("qualified_name")], &[W("INDEX"), R("qualified_name")], &[W("RECYCLEBIN")]])]),

    // --- transactions and session -------------------------------------------
    rule!("transaction_stmt" =>
        &[W("START"), W("TRANSACTION"), O(&[L(&[R("transaction_characteristic")])])],
        &[W("BEGIN"), O(&[W("WORK")])],
        &[W("COMMIT"), O(&[W("WORK")])],
        &[W("ROLLBACK"), O(&[W("WORK")]), O(&[W("TO"), O(&[W("SAVEPOINT")]), ID])],
        &[W("SAVEPOINT"), ID],
        &[W("RELEASE"), W("SAVEPOINT"), ID],
    ),
    rule!("transaction_characteristic" =>
        &[W("ISOLATION"), W("LEVEL"), R("isolation_level")],
        &[W("READ"), C(&[&[W("ONLY")], &[W("WRITE")]])],
        &[W("WITH"), W("CONSISTENT"), W("SNAPSHOT")],
    ),
    rule!("isolation_level" =>
        &[W("READ"), W("UNCOMMITTED")], &[W("READ"), W("COMMITTED")],
        &[W("REPEATABLE"), W("READ")], &[W("SERIALIZABLE")],
    ),
    rule!("set_stmt" => &[W("SET"), C(&[
        &[W("NAMES"), C(&[&[W("DEFAULT")], &[STR], &[ID]]), O(&[W("COLLATE"), C(&[&[STR], &[ID]])])],
        &[R("charset_word"), C(&[&[W("DEFAULT")], &[STR], &[ID]])],
        &[W("PASSWORD"), O(&[W("FOR"), R("user_spec")]), P("="), STR],
        &[O(&[R("variable_scope")]), W("TRANSACTION"), L(&[R("transaction_characteristic")])],
        &[W("ROLE"), C(&[&[W("ALL")], &[W("NONE")], &[W("DEFAULT")], &[L(&[R("user_spec")])]])],
        &[L(&[R("variable_assignment")])],
    ])]),
    rule!("variable_scope" => &[W("GLOBAL")], &[W("SESSION")], &[W("LOCAL")]),
    rule!("variable_assignment" => &[
        C(&[&[VAR], &[O(&[R("variable_scope")]), ID]]), C(&[&[P("=")], &[P(":=")]]),
        C(&[&[W("DEFAULT")], &[R("expr")]]),
    ]),
    rule!("show_stmt" => &[W("SHOW"), C(&[
        &[O(&[W("FULL")]), W("TABLES"), O(&[C(&[&[W("FROM")], &[W("IN")]]), ID])],
        &[C(&[&[W("DATABASES")], &[W("SCHEMAS")]])],
        &[O(&[W("FULL")]), C(&[&[W("COLUMNS")], &[W("FIELDS")]]), C(&[&[W("FROM")], &[W("IN")]]), R("qualified_name")],
        &[C(&[&[W("INDEX")], &[W("INDEXES")], &[W("KEYS")]]), C(&[&[W("FROM")], &[W("IN")]]), R("qualified_name")],
        &[W("CREATE"), C(&[&[W("TABLE")], &[W("VIEW")]]), R("qualified_name")],
        &[O(&[R("variable_scope")]), C(&[&[W("VARIABLES")], &[W("STATUS")]])],
        &[W("WARNINGS")], &[W("ERRORS")], &[O(&[W("FULL")]), W("PROCESSLIST")],
        &[W("GRANTS"), O(&[W("FOR"), R("user_spec")])], &[W("TENANTS")],
    ]), O(&[C(&[&[W("LIKE"), STR], &[W("WHERE"), R("expr")]])])]),
    rule!("use_stmt" => &[W("USE"), ID]),
    rule!("describe_stmt" => &[C(&[&[W("DESCRIBE")], &[W("DESC")]]), R("qualified_name"), O(&[ID])]),
    rule!("explain_stmt" => &[
        W("EXPLAIN"),
        O(&[C(&[&[W("BASIC")], &[W("EXTENDED")], &[W("OUTLINE")], &[W("PARTITIONS")], &[W("FORMAT"), P("="), ID]])]),
        R("stmt"),
    ]),
    rule!("grant_stmt" => &[
        W("GRANT"), L(&[R("privilege")]), O(&[W("ON"), R("grant_object")]), W("TO"),
        L(&[R("user_spec")]), O(&[W("WITH"), C(&[&[W("GRANT")], &[W("ADMIN")]]), W("OPTION")]),
    ]),
    rule!("revoke_stmt" => &[W("REVOKE"), L(&[R("privilege")]), O(&[W("ON"), R("grant_object")]), W("FROM"), L(&[R("user_spec")])]),
    rule!("privilege" => &[M(&[ID]), O(&[P("("), L(&[ID]), P(")")])]),
    rule!("grant_object" => &[P("*"), P("."), P("*")], &[ID, P("."), P("*")], &[R("qualified_name")]),
    rule!("kill_stmt" => &[W("KILL"), O(&[C(&[&[W("CONNECTION")], &[W("QUERY")]])]), R("expr")]),
    rule!("call_stmt" => &[W("CALL"), R("qualified_name"), O(&[P("("), O(&[L(&[R("expr")])]), P(")")])]),

    // --- expressions ---------------------------------------------------------
    rule!("expr" =>
        &[R("unary_op"), R("expr")],
        &[R("expr"), R("binary_op"), R("expr")],
        &[R("expr"), W("IS"), O(&[W("NOT")]), C(&[&[W("NULL")], &[W("TRUE")], &[W("FALSE")], &[W("UNKNOWN")]])],
        &[R("expr"), O(&[W("NOT")]), W("BETWEEN"), R("expr"), W("AND"), R("expr")],
        &[R("expr"), O(&[W("NOT")]), W("IN"), P("("), C(&[&[R("select_stmt")], &[L(&[R("expr")])]]), P(")")],
        &[R("expr"), O(&[W("NOT")]), C(&[&[W("LIKE")], &[W("REGEXP")], &[W("RLIKE")]]), R("expr"), O(&[W("ESCAPE"), R("expr")])],
        &[R("expr"), R("binary_op"), C(&[&[W("ANY")], &[W("SOME")], &[W("ALL")]]), P("("), R("select_stmt"), P(")")],
        &[R("expr"), W("COLLATE"), C(&[&[ID], &[STR]])],
        &[R("expr"), C(&[&[P("->")], &[P("->>")]]), R("expr")],
        &[R("primary")],
    ),
    rule!("unary_op" =>
        &[P("-")], &[P("+")], &[P("~")], &[P("!")], &[W("NOT")], &[W("BINARY")], &[W("PRIOR")],
        &[W("CONNECT_BY_ROOT")],
    ),
    rule!("binary_op" =>
        &[P(":=")], &[W("OR")], &[P("||")], &[W("XOR")], &[W("AND")], &[P("&&")],
        &[P("=")], &[P("<=>")], &[P("!=")], &[P("<>")], &[P("<")], &[P("<=")], &[P(">")], &[P(">=")],
        &[P("|")], &[P("&")], &[P("<<")], &[P(">>")], &[P("+")], &[P("-")],
        &[P("*")], &[P("/")], &[P("%")], &[W("DIV")], &[W("MOD")], &[P("^")],
    ),
    rule!("primary" =>
        &[R("literal")], &[BIND], &[P("?")], &[VAR],
        &[R("pseudo_column")],
        &[R("column_ref"), O(&[P("."), C(&[&[W("NEXTVAL")], &[W("CURRVAL")]])])],
        &[R("function_call")],
        &[R("case_expr")],
        &[W("CAST"), P("("), R("expr"), W("AS"), R("data_type"), P(")")],
        &[W("EXTRACT"), P("("), R("datetime_field"), W("FROM"), R("expr"), P(")")],
        &[W("INTERVAL"), R("expr"), R("datetime_field"), O(&[W("TO"), R("datetime_field")])],
        &[O(&[W("NOT")]), W("EXISTS"), P("("), R("select_stmt"), P(")")],
        &[P("("), R("select_stmt"), P(")")],
        &[O(&[W("ROW")]), P("("), L(&[R("expr")]), P(")")],
        &[R("json_function")],
        &[R("xml_function")],
    ),
    rule!("literal" =>
        &[NUM], &[STR], &[HEX], &[W("NULL")], &[W("TRUE")], &[W("FALSE")],
        &[C(&[&[W("DATE")], &[W("TIME")], &[W("TIMESTAMP")]]), STR],
    ),
    rule!("pseudo_column" =>
        &[W("LEVEL")], &[W("ROWNUM")], &[W("SYSDATE")], &[W("SYSTIMESTAMP")],
        &[W("CONNECT_BY_ISLEAF")], &[W("CURRENT_DATE")], &[W("CURRENT_TIMESTAMP")],
    ),
    rule!("datetime_field" =>
        &[W("YEAR")], &[W("QUARTER")], &[W("MONTH")], &[W("WEEK")], &[W("DAY")],
        &[W("HOUR")], &[W("MINUTE")], &[W("SECOND")], &[W("MICROSECOND")],
    ),
    rule!("case_expr" => &[
        W("CASE"), O(&[R("expr")]), M(&[W("WHEN"), R("expr"), W("THEN"), R("expr")]),
        O(&[W("ELSE"), R("expr")]), W("END"),
    ]),
    rule!("function_call" => &[
        R("qualified_name"), P("("),
        O(&[C(&[&[P("*")], &[O(&[C(&[&[W("DISTINCT")], &[W("ALL")]])]), L(&[R("function_arg")])]])]),
        O(&[R("order_by")]), O(&[W("SEPARATOR"), STR]), P(")"),
        O(&[W("WITHIN"), W("GROUP"), P("("), R("order_by"), P(")")]),
        O(&[W("OVER"), C(&[&[ID], &[P("("), R("window_spec"), P(")")]])]),
    ]),
    rule!("function_arg" => &[O(&[ID, P("=>")]), R("expr")]),
    rule!("json_function" =>
        &[C(&[&[W("JSON_VALUE")], &[W("JSON_QUERY")], &[W("JSON_EXISTS")]]), P("("), R("expr"), P(","), R("expr"),
          O(&[W("RETURNING"), R("data_type")]), O(&[R("json_wrapper")]),
          O(&[R("json_behavior"), W("ON"), W("EMPTY")]), O(&[R("json_behavior"), W("ON"), W("ERROR")]), P(")")],
        &[W("JSON_OBJECT"), P("("), O(&[L(&[O(&[W("KEY")]), R("expr"), C(&[&[W("VALUE")], &[P(":")]]), R("expr")])]), P(")")],
    ),
    rule!("json_wrapper" => &[
        C(&[&[W("WITHOUT")], &[W("WITH"), O(&[C(&[&[W("CONDITIONAL")], &[W("UNCONDITIONAL")]])])]]),
        O(&[W("ARRAY")]), W("WRAPPER"),
    ]),
    rule!("json_behavior" => &[W("NULL")], &[W("ERROR")], &[W("DEFAULT"), R("expr")]),
    rule!("xml_function" =>
        &[W("XMLELEMENT"), P("("), O(&[W("NAME")]), ID,
          O(&[P(","), W("XMLATTRIBUTES"), P("("), L(&[R("expr"), O(&[W("AS"), ID])]), P(")")]),
          O(&[M(&[P(","), R("expr")])]), P(")")],
        &[W("XMLAGG"), P("("), R("expr"), O(&[R("order_by")]), P(")")],
        &[W("XMLPARSE"), P("("), C(&[&[W("DOCUMENT")], &[W("CONTENT")]]), R("expr"), O(&[W("WELLFORMED")]), P(")")],
        &[W("XMLSERIALIZE"), P("("), C(&[&[W("DOCUMENT")], &[W("CONTENT")]]), R("expr"), O(&[W("AS"), R("data_type")]), P(")")],
    ),

    // --- data types ----------------------------------------------------------
    rule!("data_type" =>
        &[C(&[&[W("TINYINT")], &[W("SMALLINT")], &[W("MEDIUMINT")], &[W("INT")], &[W("INTEGER")], &[W("BIGINT")]]),
          O(&[P("("), INT, P(")")]), O(&[R("sign_word")]), O(&[W("ZEROFILL")])],
        &[C(&[&[W("DECIMAL")], &[W("DEC")], &[W("NUMERIC")], &[W("NUMBER")]]),
          O(&[P("("), INT, O(&[P(","), R("signed_number")]), P(")")]), O(&[R("sign_word")])],
        &[C(&[&[W("FLOAT")], &[W("DOUBLE"), O(&[W("PRECISION")])], &[W("REAL")], &[W("BINARY_FLOAT")], &[W("BINARY_DOUBLE")]]),
          O(&[P("("), INT, O(&[P(","), INT]), P(")")]), O(&[R("sign_word")])],
        &[R("char_type"), O(&[P("("), INT, O(&[C(&[&[W("BYTE")], &[W("CHAR")]])]), P(")")])],
        &[C(&[&[W("TINYTEXT")], &[W("TEXT")], &[W("MEDIUMTEXT")], &[W("LONGTEXT")], &[W("TINYBLOB")], &[W("BLOB")], &[W("MEDIUMBLOB")], &[W("LONGBLOB")], &[W("CLOB")], &[W("NCLOB")]])],
        &[W("DATE")], &[W("TIME"), O(&[P("("), INT, P(")")])], &[W("DATETIME"), O(&[P("("), INT, P(")")])],
        &[W("TIMESTAMP"), O(&[P("("), INT, P(")")]), O(&[W("WITH"), O(&[W("LOCAL")]), W("TIME"), W("ZONE")])],
        &[W("YEAR")],
        &[W("INTERVAL"), W("YEAR"), O(&[P("("), INT, P(")")]), W("TO"), W("MONTH")],
        &[W("INTERVAL"), W("DAY"), O(&[P("("), INT, P(")")]), W("TO"), W("SECOND"), O(&[P("("), INT, P(")")])],
        &[W("BIT"), O(&[P("("), INT, P(")")])], &[C(&[&[W("BOOL")], &[W("BOOLEAN")]])],
        &[C(&[&[W("ENUM")], &[W("SET")]]), P("("), L(&[STR]), P(")")],
        &[W("JSON")], &[W("XMLTYPE")], &[W("ROWID")],
        &[R("sign_word"), O(&[W("INTEGER")])],
    ),
    rule!("char_type" =>
        &[W("CHAR")], &[W("CHARACTER")], &[W("VARCHAR")], &[W("VARCHAR2")], &[W("NCHAR")],
        &[W("NVARCHAR2")], &[W("BINARY")], &[W("VARBINARY")], &[W("RAW")],
    ),
    rule!("sign_word" => &[W("SIGNED")], &[W("UNSIGNED")]),

    // --- hints ---------------------------------------------------------------
    rule!("hint" => &[HINT]),
    rule!("hint_body" => &[O(&[M(&[R("hint_item"), O(&[P(",")])])])]),
    rule!("hint_item" => &[ID, O(&[P("("), O(&[M(&[R("hint_arg"), O(&[P(",")])])]), P(")")])]),
    rule!("hint_arg" => &[ID], &[NUM], &[STR], &[P("=")], &[P("("), O(&[M(&[R("hint_arg")])]), P(")")]),
];

/// Look up a rule by name.
#[must_use]
pub fn rule(name: &str) -> Option<&'static GrammarRule> {
    GRAMMAR.iter().find(|r| r.name == name)
}

/// All rules in table order.
pub fn rules() -> impl Iterator<Item = &'static GrammarRule> {
    GRAMMAR.iter()
}

// ---------------------------------------------------------------------------
// Statement dispatch
// ---------------------------------------------------------------------------

/// Statement rules selectable by their leading words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtRule {
    Select,
    Insert,
    Replace,
    Update,
    Delete,
    Merge,
    Create,
    AlterTable,
    AlterTablespace,
    AlterTenant,
    AlterUser,
    AlterSequence,
    AlterProfile,
    AlterSystem,
    AlterSession,
    Drop,
    DropPrincipal,
    Truncate,
    Rename,
    Comment,
    Flashback,
    Purge,
    Transaction,
    Set,
    Show,
    Use,
    Describe,
    Explain,
    Grant,
    Revoke,
    Kill,
    Call,
}

impl StmtRule {
    /// Every statement rule, in dispatch-table order.
    pub const ALL: &'static [StmtRule] = &[
        Self::Select,
        Self::Insert,
        Self::Replace,
        Self::Update,
        Self::Delete,
        Self::Merge,
        Self::Create,
        Self::AlterTable,
        Self::AlterTablespace,
        Self::AlterTenant,
        Self::AlterUser,
        Self::AlterSequence,
        Self::AlterProfile,
        Self::AlterSystem,
        Self::AlterSession,
        Self::Drop,
        Self::DropPrincipal,
        Self::Truncate,
        Self::Rename,
        Self::Comment,
        Self::Flashback,
        Self::Purge,
        Self::Transaction,
        Self::Set,
        Self::Show,
        Self::Use,
        Self::Describe,
        Self::Explain,
        Self::Grant,
        Self::Revoke,
        Self::Kill,
        Self::Call,
    ];

    /// Name of the grammar rule implementing this statement.
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::Select => "select_stmt",
            Self::Insert => "insert_stmt",
            Self::Replace => "replace_stmt",
            Self::Update => "update_stmt",
            Self::Delete => "delete_stmt",
            Self::Merge => "merge_stmt",
            Self::Create => "create_stmt",
            Self::AlterTable => "alter_table_stmt",
            Self::AlterTablespace => "alter_tablespace_stmt",
            Self::AlterTenant => "alter_tenant_stmt",
            Self::AlterUser => "alter_user_stmt",
            Self::AlterSequence => "alter_sequence_stmt",
            Self::AlterProfile => "alter_profile_stmt",
            Self::AlterSystem => "alter_system_stmt",
            Self::AlterSession => "alter_session_stmt",
            Self::Drop => "drop_stmt",
            Self::DropPrincipal => "drop_principal_stmt",
            Self::Truncate => "truncate_stmt",
            Self::Rename => "rename_stmt",
            Self::Comment => "comment_stmt",
            Self::Flashback => "flashback_stmt",
            Self::Purge => "purge_stmt",
            Self::Transaction => "transaction_stmt",
            Self::Set => "set_stmt",
            Self::Show => "show_stmt",
            Self::Use => "use_stmt",
            Self::Describe => "describe_stmt",
            Self::Explain => "explain_stmt",
            Self::Grant => "grant_stmt",
            Self::Revoke => "revoke_stmt",
            Self::Kill => "kill_stmt",
            Self::Call => "call_stmt",
        }
    }

    /// Inverse of [`rule_name`](Self::rule_name).
    #[must_use]
    pub fn from_rule_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.rule_name() == name)
    }
}

/// Two-word entries; tried before the one-word table.
static DISPATCH_TWO: &[(&str, &str, StmtRule)] = &[
    ("ALTER", "TABLE", StmtRule::AlterTable),
    ("ALTER", "TABLESPACE", StmtRule::AlterTablespace),
    ("ALTER", "TENANT", StmtRule::AlterTenant),
    ("ALTER", "USER", StmtRule::AlterUser),
    ("ALTER", "SEQUENCE", StmtRule::AlterSequence),
    ("ALTER", "PROFILE", StmtRule::AlterProfile),
    ("ALTER", "SYSTEM", StmtRule::AlterSystem),
    ("ALTER", "SESSION", StmtRule::AlterSession),
    ("DROP", "USER", StmtRule::DropPrincipal),
    ("DROP", "ROLE", StmtRule::DropPrincipal),
    ("START", "TRANSACTION", StmtRule::Transaction),
];

static DISPATCH_ONE: &[(&str, StmtRule)] = &[
    ("SELECT", StmtRule::Select),
    ("WITH", StmtRule::Select),
    ("INSERT", StmtRule::Insert),
    ("REPLACE", StmtRule::Replace),
    ("UPDATE", StmtRule::Update),
    ("DELETE", StmtRule::Delete),
    ("MERGE", StmtRule::Merge),
    ("CREATE", StmtRule::Create),
    ("DROP", StmtRule::Drop),
    ("TRUNCATE", StmtRule::Truncate),
    ("RENAME", StmtRule::Rename),
    ("COMMENT", StmtRule::Comment),
    ("FLASHBACK", StmtRule::Flashback),
    ("PURGE", StmtRule::Purge),
    ("BEGIN", StmtRule::Transaction),
    ("COMMIT", StmtRule::Transaction),
    ("ROLLBACK", StmtRule::Transaction),
    ("SAVEPOINT", StmtRule::Transaction),
    ("RELEASE", StmtRule::Transaction),
    ("SET", StmtRule::Set),
    ("SHOW", StmtRule::Show),
    ("USE", StmtRule::Use),
    ("DESCRIBE", StmtRule::Describe),
    ("DESC", StmtRule::Describe),
    ("EXPLAIN", StmtRule::Explain),
    ("GRANT", StmtRule::Grant),
    ("REVOKE", StmtRule::Revoke),
    ("KILL", StmtRule::Kill),
    ("CALL", StmtRule::Call),
];

/// Select the statement rule for the leading word(s), case-insensitively.
/// A matching two-word entry wins over a one-word entry.
#[must_use]
pub fn dispatch(first: &str, second: Option<&str>) -> Option<StmtRule> {
    if let Some(second) = second {
        let hit = DISPATCH_TWO.iter().find(|(a, b, _)| {
            a.eq_ignore_ascii_case(first) && b.eq_ignore_ascii_case(second)
        });
        if let Some(&(_, _, rule)) = hit {
            return Some(rule);
        }
    }
    DISPATCH_ONE
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(first))
        .map(|&(_, rule)| rule)
}

/// Second words that complete a two-word statement start. Used for
/// diagnostics when only the first word is known.
#[must_use]
pub fn continuations(first: &str) -> Vec<&'static str> {
    DISPATCH_TWO
        .iter()
        .filter(|(a, _, _)| a.eq_ignore_ascii_case(first))
        .map(|&(_, b, _)| b)
        .collect()
}

/// Words that can start a statement.
pub fn statement_starts() -> impl Iterator<Item = &'static str> {
    DISPATCH_ONE
        .iter()
        .map(|&(w, _)| w)
        .chain(DISPATCH_TWO.iter().map(|&(w, _, _)| w))
}
