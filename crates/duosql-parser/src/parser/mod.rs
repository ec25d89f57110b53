// Hand-written recursive descent parser.
//
// Statements dispatch on their leading words through the grammar table
// (`grammar::dispatch`); each statement family lives in its own submodule.
// Expression parsing (precedence climbing) lives in expr.rs.

mod admin;
mod ddl;
mod dml;
mod expr;
mod partition;
mod query;

use std::cell::RefCell;
use std::collections::HashSet;

use duosql_ast::{
    DataType, Expr, Hint, Ident, OrderingTerm, PartitionOption, QualifiedName, Span, Statement,
    UserSpec,
};
use duosql_error::{Position, SqlError};

use crate::diagnostics::{Diagnostic, DiagnosticReporter, ParseOutput};
use crate::dialect::{Dialect, ParserConfig};
use crate::grammar::{self, StmtRule};
use crate::hint::parse_hints;
use crate::lexer::{lex_error, Lexer};
use crate::token::{Keyword, Token, TokenKind};

pub(crate) type PResult<T> = Result<T, SqlError>;

/// Headroom below which a nesting level moves onto a new stack segment.
/// One level of parenthesized query/expression recursion can take tens of
/// KiB in an unoptimized build.
const STACK_RED_ZONE: usize = 256 << 10;

/// Size of each extra stack segment.
const STACK_SEGMENT_SIZE: usize = 4 << 20;

// ---------------------------------------------------------------------------
// Start rules and fragments
// ---------------------------------------------------------------------------

/// Entry point for [`parse_rule`](crate::parse_rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRule {
    /// `;`-separated statements with recovery.
    StmtList,
    /// Exactly one statement of any kind.
    Stmt,
    Expr,
    DataType,
    /// `ORDER BY term, ...`
    OrderBy,
    /// `PARTITION BY ...`
    PartitionOption,
    /// A hint comment, or a bare hint body.
    Hint,
    /// One statement of a specific kind.
    Statement(StmtRule),
}

impl StartRule {
    /// Resolve a grammar rule name.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::UnknownRule`] for names that are not start rules.
    pub fn from_name(name: &str) -> Result<Self, SqlError> {
        Ok(match name {
            "stmt_list" => Self::StmtList,
            "stmt" => Self::Stmt,
            "expr" => Self::Expr,
            "data_type" => Self::DataType,
            "order_by" => Self::OrderBy,
            "partition_option" => Self::PartitionOption,
            "hint" => Self::Hint,
            other => StmtRule::from_rule_name(other)
                .map(Self::Statement)
                .ok_or_else(|| SqlError::UnknownRule(other.to_owned()))?,
        })
    }

    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::StmtList => "stmt_list",
            Self::Stmt => "stmt",
            Self::Expr => "expr",
            Self::DataType => "data_type",
            Self::OrderBy => "order_by",
            Self::PartitionOption => "partition_option",
            Self::Hint => "hint",
            Self::Statement(rule) => rule.rule_name(),
        }
    }
}

/// What a start rule produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Statements(Vec<Statement>),
    Statement(Statement),
    Expr(Expr),
    DataType(DataType),
    OrderBy(Vec<OrderingTerm>),
    PartitionOption(PartitionOption),
    Hints(Vec<Hint>),
}

// ---------------------------------------------------------------------------
// Expected-token bookkeeping
// ---------------------------------------------------------------------------

/// Something the parser tested for at a token position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Keyword(Keyword),
    /// Soft keyword matched by spelling.
    Word(&'static str),
    Punct(&'static str),
    /// A token class or nonterminal, e.g. "identifier".
    Class(&'static str),
}

impl Expectation {
    fn describe(self) -> String {
        match self {
            Self::Keyword(kw) => format!("keyword {}", kw.as_str()),
            Self::Word(w) => format!("keyword {w}"),
            Self::Punct(p) => format!("'{p}'"),
            Self::Class(c) => c.to_owned(),
        }
    }
}

/// Union of everything tested at the furthest position reached.
#[derive(Debug, Default)]
struct Expected {
    pos: usize,
    items: Vec<Expectation>,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Recursive descent parser over a token vector.
///
/// A parser is single-use and owns everything it touches, so independent
/// parsers run on different threads without coordination.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    pub(crate) config: ParserConfig,
    depth: usize,
    expected: RefCell<Expected>,
    reporter: DiagnosticReporter,
    /// Positions where a parenthesized query was already tried and failed.
    pub(crate) no_query_at: HashSet<usize>,
}

/// Keywords after which a hint comment is meaningful.
fn accepts_hint(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::Select
                | Keyword::Insert
                | Keyword::Replace
                | Keyword::Update
                | Keyword::Delete
                | Keyword::Merge
        )
    )
}

impl Parser {
    /// Build a parser over `tokens`. Hint tokens that do not directly follow
    /// a DML keyword are dropped like ordinary comments; one at the very
    /// start is kept for the `hint` start rule and skipped otherwise.
    #[must_use]
    pub fn new(tokens: Vec<Token>, config: ParserConfig) -> Self {
        let mut kept: Vec<Token> = Vec::with_capacity(tokens.len() + 1);
        for tok in tokens {
            if matches!(tok.kind, TokenKind::Hint(_))
                && !kept.is_empty()
                && !kept.last().is_some_and(|prev| accepts_hint(&prev.kind))
            {
                continue;
            }
            let eof = tok.kind == TokenKind::Eof;
            kept.push(tok);
            if eof {
                break;
            }
        }
        if !kept.last().is_some_and(|t| t.kind == TokenKind::Eof) {
            let (end, line, col) = kept.last().map_or((0, 1, 1), |t| {
                (t.span.end, t.line, t.col.saturating_add(t.span.len()))
            });
            kept.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                span: Span::new(end, end),
                line,
                col,
            });
        }
        Self {
            tokens: kept,
            pos: 0,
            config,
            depth: 0,
            expected: RefCell::new(Expected::default()),
            reporter: DiagnosticReporter::new(),
            no_query_at: HashSet::new(),
        }
    }

    /// Lex `sql` (lossy) and build a parser over the result.
    #[must_use]
    pub fn from_sql(sql: &str, config: ParserConfig) -> Self {
        Self::new(Lexer::tokenize_lossy_with(sql, &config), config)
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub(crate) const fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Parse every statement, recovering at `;` after errors.
    pub fn parse_all(&mut self) -> ParseOutput {
        let span = tracing::debug_span!(
            target: "duosql.parser",
            "parse_all",
            dialect = %self.config.dialect,
            tokens = self.tokens.len()
        );
        let _guard = span.enter();

        self.skip_leading_hint();
        let mut statements = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.at_eof() {
                break;
            }
            let rule = self.statement_rule();
            match self.parse_statement() {
                Ok(stmt) => {
                    tracing::debug!(
                        target: "duosql.parser",
                        rule = rule.map_or("select_stmt", StmtRule::rule_name),
                        span = ?stmt.span(),
                        "parsed statement"
                    );
                    statements.push(stmt);
                    if !self.check(&TokenKind::Semicolon) && !self.at_eof() {
                        let err = self.trailing_input_error();
                        self.reporter.report(err);
                        self.skip_statement();
                    }
                }
                Err(err) if err.is_fatal_to_parse() => {
                    tracing::warn!(target: "duosql.parser", "aborting parse: {err}");
                    self.reporter.report(err);
                    break;
                }
                Err(err) => {
                    tracing::debug!(target: "duosql.parser", "recovering after: {err}");
                    self.reporter.report(err);
                    self.skip_statement();
                }
            }
        }
        ParseOutput {
            statements,
            diagnostics: std::mem::take(&mut self.reporter).collect(),
        }
    }

    /// Parse exactly one fragment of the given kind. The whole input must be
    /// consumed; a trailing `;` is allowed after statements.
    pub fn parse_start(&mut self, start: StartRule) -> (Option<Fragment>, Vec<Diagnostic>) {
        if start != StartRule::Hint {
            self.skip_leading_hint();
        }
        let result = match start {
            StartRule::StmtList => {
                let out = self.parse_all();
                return (Some(Fragment::Statements(out.statements)), out.diagnostics);
            }
            StartRule::Stmt => self.parse_statement().map(Fragment::Statement),
            StartRule::Statement(rule) => self.parse_stmt_rule(rule).map(Fragment::Statement),
            StartRule::Expr => self.parse_expr().map(Fragment::Expr),
            StartRule::DataType => self.parse_data_type().map(Fragment::DataType),
            StartRule::OrderBy => self.parse_order_by_clause().map(Fragment::OrderBy),
            StartRule::PartitionOption => self
                .parse_partition_option()
                .map(Fragment::PartitionOption),
            StartRule::Hint => Ok(Fragment::Hints(self.parse_hint_section())),
        };
        let fragment = match result {
            Ok(fragment) => {
                if matches!(fragment, Fragment::Statement(_)) {
                    while self.eat(&TokenKind::Semicolon) {}
                }
                if !self.at_eof() {
                    let err = self.trailing_input_error();
                    self.reporter.report(err);
                }
                Some(fragment)
            }
            Err(err) => {
                self.reporter.report(err);
                None
            }
        };
        (fragment, std::mem::take(&mut self.reporter).collect())
    }

    fn skip_leading_hint(&mut self) {
        if self.pos == 0 && matches!(self.peek(), TokenKind::Hint(_)) {
            self.advance();
        }
    }

    // -----------------------------------------------------------------------
    // Token navigation
    // -----------------------------------------------------------------------

    /// Token `n` positions ahead; past the end this is the EOF token.
    pub(crate) fn nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    pub(crate) fn token(&self) -> &Token {
        self.nth(0)
    }

    pub(crate) fn peek(&self) -> &TokenKind {
        &self.token().kind
    }

    pub(crate) fn peek_nth(&self, n: usize) -> &TokenKind {
        &self.nth(n).kind
    }

    pub(crate) fn at_eof(&self) -> bool {
        matches!(self.peek(), TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Start offset of the current token.
    pub(crate) fn start(&self) -> u32 {
        self.token().span.start
    }

    /// End offset of the last consumed token.
    pub(crate) fn prev_end(&self) -> u32 {
        match self.pos.checked_sub(1) {
            Some(i) => self.tokens[i].span.end,
            None => self.start(),
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.prev_end().max(start))
    }

    pub(crate) fn position(&self) -> Position {
        let tok = self.token();
        Position::new(tok.line, tok.col, tok.span.start)
    }

    /// Text of a bare word (identifier or keyword) `n` tokens ahead.
    pub(crate) fn word_at(&self, n: usize) -> Option<&str> {
        match self.peek_nth(n) {
            TokenKind::Id(s) => Some(s),
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            _ => None,
        }
    }

    pub(crate) fn is_word_at(&self, n: usize, word: &str) -> bool {
        self.word_at(n).is_some_and(|w| w.eq_ignore_ascii_case(word))
    }

    pub(crate) fn is_kw_at(&self, n: usize, kw: Keyword) -> bool {
        self.peek_nth(n) == &TokenKind::Keyword(kw)
    }

    // -----------------------------------------------------------------------
    // Matching
    // -----------------------------------------------------------------------

    fn note(&self, e: Expectation) {
        let mut expected = self.expected.borrow_mut();
        if expected.pos != self.pos {
            expected.pos = self.pos;
            expected.items.clear();
        }
        if !expected.items.contains(&e) {
            expected.items.push(e);
        }
    }

    pub(crate) fn note_class(&self, class: &'static str) {
        self.note(Expectation::Class(class));
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.note(Expectation::Punct(kind.punct_str()));
        std::mem::discriminant(self.peek()) == std::mem::discriminant(kind)
    }

    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> PResult<Span> {
        if self.check(kind) {
            let span = self.token().span;
            self.advance();
            Ok(span)
        } else {
            Err(self.error_expected(kind.punct_str()))
        }
    }

    pub(crate) fn check_kw(&self, kw: Keyword) -> bool {
        self.note(Expectation::Keyword(kw));
        self.is_kw_at(0, kw)
    }

    pub(crate) fn eat_kw(&mut self, kw: Keyword) -> bool {
        if self.check_kw(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_kw(&mut self, kw: Keyword) -> PResult<Span> {
        if self.check_kw(kw) {
            let span = self.token().span;
            self.advance();
            Ok(span)
        } else {
            Err(self.error_expected(kw.as_str()))
        }
    }

    /// Soft keyword: any unquoted word spelled `word`, keyword or not.
    pub(crate) fn check_word(&self, word: &'static str) -> bool {
        self.note(Expectation::Word(word));
        self.is_word_at(0, word)
    }

    pub(crate) fn eat_word(&mut self, word: &'static str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_word(&mut self, word: &'static str) -> PResult<Span> {
        if self.check_word(word) {
            let span = self.token().span;
            self.advance();
            Ok(span)
        } else {
            Err(self.error_expected(word))
        }
    }

    /// Eat a sequence of soft keywords, all or nothing.
    pub(crate) fn eat_words(&mut self, words: &[&'static str]) -> bool {
        if let Some(&first) = words.first() {
            self.note(Expectation::Word(first));
        }
        if words.iter().enumerate().all(|(i, w)| self.is_word_at(i, w)) {
            for _ in words {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Errors and recovery
    // -----------------------------------------------------------------------

    fn expected_here(&self) -> Vec<String> {
        let expected = self.expected.borrow();
        if expected.pos == self.pos {
            expected.items.iter().map(|e| e.describe()).collect()
        } else {
            Vec::new()
        }
    }

    /// Syntax error at the current token carrying the expected set.
    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> SqlError {
        let tok = self.token();
        if matches!(tok.kind, TokenKind::Error(_)) {
            return lex_error(tok);
        }
        SqlError::syntax(
            self.position(),
            tok.span.len(),
            message,
            self.expected_here(),
            tok.kind.describe(),
        )
    }

    pub(crate) fn error_expected(&self, what: &'static str) -> SqlError {
        self.note(Expectation::Class(what));
        self.syntax_error(format!("expected {what}"))
    }

    fn trailing_input_error(&self) -> SqlError {
        let tok = self.token();
        if matches!(tok.kind, TokenKind::Error(_)) {
            return lex_error(tok);
        }
        SqlError::TrailingInput {
            found: tok.kind.describe(),
            position: self.position(),
            len: tok.span.len(),
        }
    }

    /// Skip to the next `;` that is not inside parentheses opened after the
    /// current token.
    fn skip_statement(&mut self) {
        let mut depth = 0_usize;
        loop {
            match self.peek() {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::LeftParen => depth += 1,
                // A stray `)` must not let a later group's `;` end the skip.
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
    }

    /// Run `f` one nesting level deeper, failing once `max_depth` is reached.
    ///
    /// The call runs on a freshly allocated stack segment whenever less than
    /// [`STACK_RED_ZONE`] bytes remain, so the depth limit is what stops a
    /// deep parse regardless of the calling thread's stack size.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(SqlError::RecursionLimitExceeded {
                limit: self.config.max_depth,
                position: self.position(),
            });
        }
        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || f(self));
        self.depth -= 1;
        result
    }

    /// Try `f`; on a recoverable error rewind the token position and drop
    /// anything it reported.
    pub(crate) fn speculate<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<Option<T>> {
        let pos = self.pos;
        let reported = self.reporter.len();
        match f(self) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_fatal_to_parse() => Err(err),
            Err(_) => {
                self.pos = pos;
                self.reporter.truncate(reported);
                Ok(None)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Lists
    // -----------------------------------------------------------------------

    /// Whether the current token closes a list rather than starting an
    /// element of it.
    fn at_list_end(&self) -> bool {
        match self.peek() {
            TokenKind::RightParen | TokenKind::Semicolon | TokenKind::Eof => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::From
                    | Keyword::Where
                    | Keyword::Group
                    | Keyword::Having
                    | Keyword::Order
                    | Keyword::Limit
                    | Keyword::Union
                    | Keyword::Intersect
                    | Keyword::Except
                    | Keyword::Minus
                    | Keyword::Window
                    | Keyword::Returning
                    | Keyword::Into
                    | Keyword::Then
            ),
            _ => false,
        }
    }

    /// One element, then one more per comma.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        let mut items = vec![f(self)?];
        while self.eat(&TokenKind::Comma) {
            if self.at_list_end() {
                return Err(self.syntax_error("trailing comma"));
            }
            items.push(f(self)?);
        }
        Ok(items)
    }

    /// `( element, ... )`
    pub(crate) fn parse_paren_list<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        self.expect(&TokenKind::LeftParen)?;
        let items = self.parse_comma_list(f)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(items)
    }

    // -----------------------------------------------------------------------
    // Identifiers and names
    // -----------------------------------------------------------------------

    /// Whether the token `n` ahead can be used as an identifier.
    pub(crate) fn is_ident_at(&self, n: usize) -> bool {
        match self.peek_nth(n) {
            TokenKind::Id(_) | TokenKind::QuotedId(_) => true,
            TokenKind::Keyword(kw) => !self.dialect().is_reserved(*kw),
            _ => false,
        }
    }

    pub(crate) fn at_ident(&self) -> bool {
        self.note(Expectation::Class("identifier"));
        self.is_ident_at(0)
    }

    pub(crate) fn parse_ident(&mut self) -> PResult<Ident> {
        if !self.at_ident() {
            return Err(self.error_expected("identifier"));
        }
        let tok = self.token();
        let ident = match &tok.kind {
            TokenKind::QuotedId(s) => Ident::quoted(s.clone()),
            TokenKind::Id(s) => Ident::new(s.clone()),
            _ => Ident::new(tok.lexeme.clone()),
        };
        self.advance();
        Ok(ident)
    }

    /// `[schema.]name[@dblink]`
    pub(crate) fn parse_qualified_name(&mut self) -> PResult<QualifiedName> {
        let first = self.parse_ident()?;
        let (schema, name) = if self.check(&TokenKind::Dot) && self.is_ident_at(1) {
            self.advance();
            (Some(first), self.parse_ident()?)
        } else {
            (None, first)
        };
        let dblink = if self.dialect() == Dialect::Oracle && self.eat(&TokenKind::At) {
            Some(self.parse_ident()?)
        } else {
            None
        };
        Ok(QualifiedName {
            schema,
            name,
            dblink,
        })
    }

    /// A string literal's value.
    pub(crate) fn parse_string(&mut self) -> PResult<String> {
        self.note_class("string literal");
        match self.peek() {
            TokenKind::String(s) | TokenKind::NationalString(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error_expected("string literal")),
        }
    }

    /// Unsigned integer that fits `u32`.
    pub(crate) fn parse_u32(&mut self) -> PResult<u32> {
        self.note_class("integer");
        if let TokenKind::Integer(n) = *self.peek() {
            if let Ok(v) = u32::try_from(n) {
                self.advance();
                return Ok(v);
            }
        }
        Err(self.error_expected("integer"))
    }

    /// Identifier or string, as its text (names that MySQL lets be quoted
    /// either way, e.g. character sets).
    pub(crate) fn parse_name_text(&mut self) -> PResult<String> {
        if let TokenKind::String(s) = self.peek() {
            let s = s.clone();
            self.advance();
            return Ok(s);
        }
        Ok(self.parse_ident()?.value)
    }

    /// `name[@host]`. MySQL lexes `@host` as a user variable, so an adjacent
    /// variable token is taken as the host part.
    pub(crate) fn parse_user_spec(&mut self) -> PResult<UserSpec> {
        let name = self.parse_name_text()?;
        let end = self.prev_end();
        let host = match self.peek() {
            TokenKind::UserVar(host) if self.token().span.start == end => {
                let host = host.clone();
                self.advance();
                Some(host)
            }
            TokenKind::At => {
                self.advance();
                Some(self.parse_name_text()?)
            }
            _ => None,
        };
        Ok(UserSpec { name, host })
    }

    // -----------------------------------------------------------------------
    // Hints
    // -----------------------------------------------------------------------

    /// Consume the hint comment at the current position, if any. A
    /// malformed hint becomes a warning and the section is dropped.
    pub(crate) fn parse_hint_section(&mut self) -> Vec<Hint> {
        let result = {
            let tok = self.token();
            let TokenKind::Hint(body) = &tok.kind else {
                return Vec::new();
            };
            let origin = Position::new(tok.line, tok.col + 3, tok.span.start + 3);
            parse_hints(body, origin)
        };
        self.advance();
        match result {
            Ok(hints) => hints,
            Err(err) => {
                tracing::warn!(target: "duosql.hint", "{err}");
                self.reporter.report(err);
                Vec::new()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Statement dispatch
    // -----------------------------------------------------------------------

    fn statement_rule(&self) -> Option<StmtRule> {
        grammar::dispatch(self.word_at(0)?, self.word_at(1))
    }

    pub fn parse_statement(&mut self) -> PResult<Statement> {
        if matches!(self.peek(), TokenKind::LeftParen) {
            return self.parse_query().map(Statement::Select);
        }
        match self.statement_rule() {
            Some(rule) => self.parse_stmt_rule(rule),
            None => {
                for word in grammar::statement_starts() {
                    self.note(Expectation::Word(word));
                }
                Err(self.error_expected("statement"))
            }
        }
    }

    pub(crate) fn parse_stmt_rule(&mut self, rule: StmtRule) -> PResult<Statement> {
        match rule {
            StmtRule::Select => self.parse_query().map(Statement::Select),
            StmtRule::Insert | StmtRule::Replace => self.parse_insert().map(Statement::Insert),
            StmtRule::Update => self.parse_update().map(Statement::Update),
            StmtRule::Delete => self.parse_delete().map(Statement::Delete),
            StmtRule::Merge => self.parse_merge().map(Statement::Merge),
            StmtRule::Create => self.parse_create(),
            StmtRule::AlterTable => self.parse_alter_table().map(Statement::AlterTable),
            StmtRule::AlterTablespace => self
                .parse_alter_tablespace()
                .map(Statement::AlterTablespace),
            StmtRule::AlterTenant => self.parse_alter_tenant().map(Statement::AlterTenant),
            StmtRule::AlterUser => self.parse_alter_user().map(Statement::AlterUser),
            StmtRule::AlterSequence => self.parse_alter_sequence().map(Statement::AlterSequence),
            StmtRule::AlterProfile => self.parse_alter_profile().map(Statement::AlterProfile),
            StmtRule::AlterSystem => self.parse_alter_system().map(Statement::AlterSystem),
            StmtRule::AlterSession => self.parse_alter_session().map(Statement::AlterSession),
            StmtRule::Drop => self.parse_drop().map(Statement::Drop),
            StmtRule::DropPrincipal => self.parse_drop_principal().map(Statement::DropPrincipal),
            StmtRule::Truncate => self.parse_truncate().map(Statement::Truncate),
            StmtRule::Rename => self.parse_rename().map(Statement::RenameTable),
            StmtRule::Comment => self.parse_comment().map(Statement::Comment),
            StmtRule::Flashback => self.parse_flashback().map(Statement::Flashback),
            StmtRule::Purge => self.parse_purge().map(Statement::Purge),
            StmtRule::Transaction => self.parse_transaction().map(Statement::Transaction),
            StmtRule::Set => self.parse_set().map(Statement::Set),
            StmtRule::Show => self.parse_show().map(Statement::Show),
            StmtRule::Use => self.parse_use().map(Statement::Use),
            StmtRule::Describe => self.parse_describe().map(Statement::Describe),
            StmtRule::Explain => self.parse_explain().map(Statement::Explain),
            StmtRule::Grant => self.parse_grant().map(Statement::Grant),
            StmtRule::Revoke => self.parse_revoke().map(Statement::Revoke),
            StmtRule::Kill => self.parse_kill().map(Statement::Kill),
            StmtRule::Call => self.parse_call().map(Statement::Call),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use duosql_error::{ErrorCode, Severity};

    pub(crate) fn parse_with(sql: &str, dialect: Dialect) -> ParseOutput {
        Parser::from_sql(sql, ParserConfig::new(dialect)).parse_all()
    }

    pub(crate) fn parse_ok_in(sql: &str, dialect: Dialect) -> Vec<Statement> {
        let out = parse_with(sql, dialect);
        assert!(
            out.diagnostics.is_empty(),
            "unexpected diagnostics for {sql:?}: {:?}",
            out.diagnostics
        );
        out.statements
    }

    pub(crate) fn parse_one_in(sql: &str, dialect: Dialect) -> Statement {
        let mut stmts = parse_ok_in(sql, dialect);
        assert_eq!(stmts.len(), 1, "expected 1 statement, got {}", stmts.len());
        stmts.remove(0)
    }

    pub(crate) fn mysql(sql: &str) -> Statement {
        parse_one_in(sql, Dialect::MySql)
    }

    pub(crate) fn oracle(sql: &str) -> Statement {
        parse_one_in(sql, Dialect::Oracle)
    }

    /// Parse, print, and check the printed form is stable and re-parses to
    /// the same tree.
    pub(crate) fn round_trip_in(sql: &str, dialect: Dialect) -> String {
        let first = parse_one_in(sql, dialect);
        let printed = first.to_string();
        let second = parse_one_in(&printed, dialect);
        assert_eq!(printed, second.to_string(), "unstable rendering of {sql:?}");
        printed
    }

    pub(crate) fn first_error(sql: &str, dialect: Dialect) -> Diagnostic {
        let out = parse_with(sql, dialect);
        out.diagnostics
            .into_iter()
            .find(|d| d.severity == Severity::Error)
            .unwrap_or_else(|| panic!("expected an error for {sql:?}"))
    }

    #[test]
    fn test_empty_input_and_bare_semicolons() {
        let out = parse_with("", Dialect::MySql);
        assert!(out.statements.is_empty());
        assert!(out.diagnostics.is_empty());
        let out = parse_with(" ;; ; ", Dialect::Oracle);
        assert!(out.statements.is_empty());
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_multiple_statements() {
        let stmts = parse_ok_in("SELECT 1; SELECT 2;SELECT 3", Dialect::MySql);
        assert_eq!(stmts.len(), 3);
    }

    #[test]
    fn test_recovery_keeps_surrounding_statements() {
        let out = parse_with("SELECT 1; SELECT FROM; SELECT 3", Dialect::MySql);
        assert_eq!(out.statements.len(), 2);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].code, ErrorCode::Syntax);
        assert_eq!(out.statements[1].to_string(), "SELECT 3");
    }

    #[test]
    fn test_recovery_skips_semicolons_inside_parens() {
        let out = parse_with("SELECT (1 +; 2); SELECT 4", Dialect::MySql);
        assert_eq!(out.statements.len(), 1);
        assert_eq!(out.statements[0].to_string(), "SELECT 4");
    }

    #[test]
    fn test_lex_error_becomes_diagnostic() {
        let out = parse_with("SELECT 'open; SELECT 2", Dialect::MySql);
        assert!(out.statements.is_empty());
        assert_eq!(out.diagnostics[0].code, ErrorCode::Lex);

        let out = parse_with("SELECT $; SELECT 2", Dialect::MySql);
        assert_eq!(out.statements.len(), 1);
        assert_eq!(out.diagnostics[0].code, ErrorCode::Lex);
    }

    #[test]
    fn test_trailing_input_keeps_statement() {
        let out = parse_with("SELECT 1 2; SELECT 3", Dialect::MySql);
        assert_eq!(out.statements.len(), 2);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].code, ErrorCode::TrailingInput);
        assert_eq!(out.diagnostics[0].position.map(|p| p.offset), Some(9));
    }

    #[test]
    fn test_unknown_statement_start() {
        let d = first_error("FROBNICATE t", Dialect::MySql);
        assert_eq!(d.code, ErrorCode::Syntax);
        assert!(d.message.contains("expected statement"));
        assert!(d.expected.iter().any(|e| e == "keyword SELECT"));
    }

    #[test]
    fn test_expected_set_is_union_at_failure() {
        let d = first_error("SELECT a FROM t WHERE", Dialect::MySql);
        assert_eq!(d.message, "expected expression");
        assert!(d.expected.iter().any(|e| e == "expression"));
        assert_eq!(d.error.position().map(|p| p.offset), Some(21));
    }

    #[test]
    fn test_dangling_binary_operator() {
        let out = parse_with("SELECT 1 +", Dialect::MySql);
        assert!(out.statements.is_empty());
        assert_eq!(out.diagnostics.len(), 1);
        let d = &out.diagnostics[0];
        assert_eq!(d.code, ErrorCode::Syntax);
        assert_eq!(d.message, "expected expression after binary operator");
        assert_eq!(d.position.map(|p| p.offset), Some(10));
        match &d.error {
            SqlError::Syntax { found, .. } => assert_eq!(found, "end of input"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_trailing_comma() {
        let d = first_error("SELECT a, FROM t", Dialect::MySql);
        assert_eq!(d.message, "trailing comma");
        let d = first_error("INSERT INTO t (a, b,) VALUES (1, 2)", Dialect::MySql);
        assert_eq!(d.message, "trailing comma");
    }

    #[test]
    fn test_depth_limit_aborts_parse() {
        let deep = format!("SELECT {}1{}", "(".repeat(200), ")".repeat(200));
        let sql = format!("SELECT 1; {deep}; SELECT 2");
        let out = parse_with(&sql, Dialect::MySql);
        assert_eq!(out.statements.len(), 1);
        let last = out.diagnostics.last().unwrap();
        assert_eq!(last.code, ErrorCode::RecursionLimit);
    }

    #[test]
    fn test_depth_limit_is_configurable() {
        let sql = "SELECT ((((1))))";
        let config = ParserConfig::default().with_max_depth(3);
        let out = Parser::from_sql(sql, config).parse_all();
        assert!(out.statements.is_empty());
        assert_eq!(out.diagnostics[0].code, ErrorCode::RecursionLimit);
        let config = ParserConfig::default().with_max_depth(16);
        assert!(!Parser::from_sql(sql, config).parse_all().has_errors());
    }

    #[test]
    fn test_hint_after_dml_keyword_only() {
        let stmt = mysql("SELECT /*+ FULL(t) */ a FROM t");
        assert_eq!(stmt.to_string(), "SELECT /*+ FULL(t) */ a FROM t");
        // Elsewhere a hint comment is just a comment.
        let stmt = mysql("SELECT a /*+ FULL(t) */ FROM t");
        assert_eq!(stmt.to_string(), "SELECT a FROM t");
    }

    #[test]
    fn test_malformed_hint_is_warning() {
        let out = parse_with("SELECT /*+ FULL(t */ a FROM t", Dialect::Oracle);
        assert_eq!(out.statements.len(), 1);
        assert!(!out.has_errors());
        let warnings: Vec<_> = out.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::Hint);
        assert_eq!(out.statements[0].to_string(), "SELECT a FROM t");
    }

    #[test]
    fn test_start_rule_names() {
        assert_eq!(StartRule::from_name("expr").unwrap(), StartRule::Expr);
        assert_eq!(
            StartRule::from_name("select_stmt").unwrap(),
            StartRule::Statement(StmtRule::Select)
        );
        assert_eq!(StartRule::from_name("stmt_list").unwrap().rule_name(), "stmt_list");
        let err = StartRule::from_name("no_such_rule").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownRule);
    }

    #[test]
    fn test_parse_start_requires_full_input() {
        let mut p = Parser::from_sql("a + 1 b", ParserConfig::default());
        let (fragment, diags) = p.parse_start(StartRule::Expr);
        assert!(matches!(fragment, Some(Fragment::Expr(_))));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, ErrorCode::TrailingInput);
    }

    #[test]
    fn test_statement_start_rule_checks_kind() {
        let mut p = Parser::from_sql("DELETE FROM t", ParserConfig::default());
        let (fragment, diags) = p.parse_start(StartRule::Statement(StmtRule::Select));
        assert!(fragment.is_none());
        assert_eq!(diags[0].code, ErrorCode::Syntax);
    }

    #[test]
    fn test_user_spec_forms() {
        let mut p = Parser::from_sql("'bob'@'localhost'", ParserConfig::default());
        let user = p.parse_user_spec().unwrap();
        assert_eq!(user.name, "bob");
        assert_eq!(user.host.as_deref(), Some("localhost"));

        let mut p = Parser::from_sql("app@'%'", ParserConfig::default());
        let user = p.parse_user_spec().unwrap();
        assert_eq!(user.to_string(), "app@'%'");

        let mut p = Parser::from_sql("scott", ParserConfig::new(Dialect::Oracle));
        assert!(p.parse_user_spec().unwrap().host.is_none());
    }

    #[test]
    fn test_qualified_name_dblink_oracle_only() {
        let mut p = Parser::from_sql("hr.emp@remote", ParserConfig::new(Dialect::Oracle));
        let name = p.parse_qualified_name().unwrap();
        assert_eq!(name.to_string(), "hr.emp@remote");
        assert!(p.at_eof());
    }
}
