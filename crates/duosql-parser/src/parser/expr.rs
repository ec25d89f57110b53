// Expression parsing: precedence climbing over the token vector, plus the
// data type grammar shared by CAST, column definitions and RETURNING.
//
// Precedence, lowest to highest:
//   :=                                    (right associative)
//   OR   || (MySQL without PIPES_AS_CONCAT)
//   XOR
//   AND  &&
//   NOT (prefix)
//   = <=> <> != < <= > >= IS LIKE REGEXP RLIKE IN BETWEEN
//   |
//   &
//   << >>
//   + -  || (concatenation)
//   * / % DIV MOD
//   ^
//   - + ~ ! BINARY PRIOR CONNECT_BY_ROOT (prefix)
//   COLLATE (postfix)
//   -> ->>

use duosql_ast::{
    BinaryOp, CharKind, ColumnRef, DataType, DateTimeField, DecimalKind, Expr, FloatKind,
    FunctionArg, FunctionArgs, FunctionCall, Ident, InSet, IntKind, IsTest, JsonBehavior,
    JsonFunction, JsonFunctionKind, JsonWrapper, LengthSemantics, LikeOp, Literal, LobKind,
    Placeholder, PseudoColumn, QualifiedName, Quantifier, SequenceValueKind, TimeZoneKind, UnaryOp,
    Variable, VariableScope, WindowRef, XmlExpr,
};
use duosql_error::SqlError;

use super::{PResult, Parser};
use crate::dialect::Dialect;
use crate::token::{Keyword, TokenKind};

// Binding powers: higher binds tighter. The left power is compared against
// `min_bp`; the right power is passed to the recursive call.
mod bp {
    pub const ASSIGN: (u8, u8) = (2, 1);
    pub const OR: (u8, u8) = (3, 4);
    pub const XOR: (u8, u8) = (5, 6);
    pub const AND: (u8, u8) = (7, 8);
    pub const NOT_PREFIX: u8 = 9;
    pub const COMPARE: (u8, u8) = (11, 12);
    pub const BIT_OR: (u8, u8) = (13, 14);
    pub const BIT_AND: (u8, u8) = (15, 16);
    pub const SHIFT: (u8, u8) = (17, 18);
    pub const ADD: (u8, u8) = (19, 20);
    pub const MUL: (u8, u8) = (21, 22);
    pub const BIT_XOR: (u8, u8) = (23, 24);
    pub const UNARY: u8 = 25;
    pub const COLLATE: u8 = 27;
    pub const JSON: (u8, u8) = (29, 30);
}

const DATETIME_FIELDS: [(&str, DateTimeField); 9] = [
    ("YEAR", DateTimeField::Year),
    ("QUARTER", DateTimeField::Quarter),
    ("MONTH", DateTimeField::Month),
    ("WEEK", DateTimeField::Week),
    ("DAY", DateTimeField::Day),
    ("HOUR", DateTimeField::Hour),
    ("MINUTE", DateTimeField::Minute),
    ("SECOND", DateTimeField::Second),
    ("MICROSECOND", DateTimeField::Microsecond),
];

impl Parser {
    /// Parse a single expression.
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_expr_bp(0)
    }

    /// A primary with its tight postfix forms, but no binary operators and
    /// no COLLATE. Used where a clause keyword may follow directly, e.g.
    /// `DEFAULT 0 NOT NULL`.
    pub(crate) fn parse_operand(&mut self) -> PResult<Expr> {
        self.parse_expr_bp(bp::COLLATE + 1)
    }

    // ── Pratt core ──────────────────────────────────────────────────────

    fn parse_expr_bp(&mut self, min_bp: u8) -> PResult<Expr> {
        self.nested(|p| {
            let mut lhs = p.parse_prefix()?;
            loop {
                if p.check_kw(Keyword::Collate) {
                    if bp::COLLATE < min_bp {
                        break;
                    }
                    lhs = p.parse_collate(lhs)?;
                    continue;
                }
                if let Some((l_bp, r_bp)) = p.infix_bp() {
                    if l_bp < min_bp {
                        break;
                    }
                    lhs = p.parse_infix(lhs, r_bp)?;
                    continue;
                }
                break;
            }
            Ok(lhs)
        })
    }

    /// Right operand of a binary operator. An operand that is missing
    /// altogether gets a message naming the operator position.
    fn parse_rhs(&mut self, r_bp: u8) -> PResult<Expr> {
        let before = self.pos;
        match self.parse_expr_bp(r_bp) {
            Err(SqlError::Syntax { .. }) if self.pos == before => {
                Err(self.syntax_error("expected expression after binary operator"))
            }
            other => other,
        }
    }

    // ── Prefix (nud) ────────────────────────────────────────────────────

    #[allow(clippy::too_many_lines)]
    fn parse_prefix(&mut self) -> PResult<Expr> {
        self.note_class("expression");
        let tok = self.token().clone();
        let paren_next = matches!(self.peek_nth(1), TokenKind::LeftParen);
        match &tok.kind {
            // ── Literals ────────────────────────────────────────────────
            TokenKind::Integer(n) => self.literal(Literal::Integer(*n)),
            TokenKind::Decimal(s) => self.literal(Literal::Decimal(s.clone())),
            TokenKind::String(s) => self.literal(Literal::String(s.clone())),
            TokenKind::NationalString(s) => self.literal(Literal::NationalString(s.clone())),
            TokenKind::HexString(b) => self.literal(Literal::Hex(b.clone())),
            TokenKind::Keyword(Keyword::Null) => self.literal(Literal::Null),
            TokenKind::Keyword(Keyword::True) => self.literal(Literal::True),
            TokenKind::Keyword(Keyword::False) => self.literal(Literal::False),

            // ── Parameters and variables ────────────────────────────────
            TokenKind::Question => {
                self.advance();
                Ok(Expr::Placeholder(Placeholder::Anonymous, tok.span))
            }
            TokenKind::BindParam(name) => {
                self.advance();
                let placeholder = match name.parse::<u32>() {
                    Ok(n) if name.bytes().all(|b| b.is_ascii_digit()) => Placeholder::Numbered(n),
                    _ => Placeholder::Named(name.clone()),
                };
                Ok(Expr::Placeholder(placeholder, tok.span))
            }
            TokenKind::UserVar(name) => {
                self.advance();
                Ok(Expr::Variable(Variable::User(name.clone()), tok.span))
            }
            TokenKind::SystemVar(name) => {
                self.advance();
                Ok(Expr::Variable(system_variable(name), tok.span))
            }

            // ── Unary prefix ────────────────────────────────────────────
            TokenKind::Minus => self.parse_unary(UnaryOp::Minus, bp::UNARY),
            TokenKind::Plus => self.parse_unary(UnaryOp::Plus, bp::UNARY),
            TokenKind::Tilde => self.parse_unary(UnaryOp::BitNot, bp::UNARY),
            TokenKind::Bang => self.parse_unary(UnaryOp::LogicalNot, bp::UNARY),
            TokenKind::Keyword(Keyword::Binary) if self.dialect() == Dialect::MySql => {
                self.parse_unary(UnaryOp::Binary, bp::UNARY)
            }
            TokenKind::Keyword(Keyword::Prior) => self.parse_unary(UnaryOp::Prior, bp::UNARY),
            TokenKind::Keyword(Keyword::ConnectByRoot) => {
                self.parse_unary(UnaryOp::ConnectByRoot, bp::UNARY)
            }
            TokenKind::Keyword(Keyword::Not) => {
                if self.is_kw_at(1, Keyword::Exists) {
                    let start = self.start();
                    self.advance();
                    return self.parse_exists(start, true);
                }
                self.parse_unary(UnaryOp::Not, bp::NOT_PREFIX)
            }
            TokenKind::Keyword(Keyword::Exists) => {
                let start = self.start();
                self.parse_exists(start, false)
            }

            // ── Pseudo-columns ──────────────────────────────────────────
            TokenKind::Keyword(Keyword::Level) => self.pseudo(PseudoColumn::Level),
            TokenKind::Keyword(Keyword::RowNum) => self.pseudo(PseudoColumn::RowNum),
            TokenKind::Keyword(Keyword::SysDate) => self.pseudo(PseudoColumn::SysDate),
            TokenKind::Keyword(Keyword::SysTimestamp) => self.pseudo(PseudoColumn::SysTimestamp),
            TokenKind::Keyword(Keyword::ConnectByIsLeaf) => {
                self.pseudo(PseudoColumn::ConnectByIsLeaf)
            }
            TokenKind::Keyword(Keyword::CurrentDate) if !paren_next => {
                self.pseudo(PseudoColumn::CurrentDate)
            }
            TokenKind::Keyword(Keyword::CurrentTimestamp) if !paren_next => {
                self.pseudo(PseudoColumn::CurrentTimestamp)
            }
            TokenKind::Keyword(Keyword::Default) if !paren_next => {
                self.advance();
                Ok(Expr::DefaultValue(tok.span))
            }

            // ── Keyword forms ───────────────────────────────────────────
            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Cast) if paren_next => self.parse_cast(),
            TokenKind::Keyword(Keyword::Extract) if paren_next => self.parse_extract(),
            TokenKind::Keyword(Keyword::Interval) => {
                if let Some(interval) = self.speculate(Self::parse_interval)? {
                    return Ok(interval);
                }
                self.parse_name_expr()
            }
            TokenKind::Keyword(Keyword::Row) if paren_next => {
                let start = self.start();
                self.advance();
                let items = self.parse_paren_list(Self::parse_expr)?;
                Ok(Expr::Row(items, self.span_from(start)))
            }
            TokenKind::Keyword(Keyword::JsonValue) if paren_next => {
                self.parse_json_function(JsonFunctionKind::Value)
            }
            TokenKind::Keyword(Keyword::JsonQuery) if paren_next => {
                self.parse_json_function(JsonFunctionKind::Query)
            }
            TokenKind::Keyword(Keyword::JsonExists) if paren_next => {
                self.parse_json_function(JsonFunctionKind::Exists)
            }
            TokenKind::Keyword(Keyword::JsonObject) if paren_next => self.parse_json_object(),
            TokenKind::Keyword(
                Keyword::XmlElement | Keyword::XmlAgg | Keyword::XmlParse | Keyword::XmlSerialize,
            ) if paren_next => self.parse_xml(),

            // ── Parenthesized expression, row or subquery ───────────────
            TokenKind::LeftParen => self.parse_paren_expr(),

            // ── Reserved words that double as function names ────────────
            TokenKind::Keyword(
                Keyword::Left
                | Keyword::Right
                | Keyword::Insert
                | Keyword::Replace
                | Keyword::Values
                | Keyword::Mod
                | Keyword::Default
                | Keyword::CurrentDate
                | Keyword::CurrentTimestamp,
            ) if paren_next => {
                let start = self.start();
                self.advance();
                self.parse_function_call(QualifiedName::bare(tok.lexeme.clone()), start)
            }

            _ if self.is_ident_at(0) => self.parse_name_expr(),
            _ => Err(self.error_expected("expression")),
        }
    }

    fn literal(&mut self, literal: Literal) -> PResult<Expr> {
        let span = self.token().span;
        self.advance();
        Ok(Expr::Literal(literal, span))
    }

    fn pseudo(&mut self, column: PseudoColumn) -> PResult<Expr> {
        let span = self.token().span;
        self.advance();
        Ok(Expr::Pseudo(column, span))
    }

    fn parse_unary(&mut self, op: UnaryOp, r_bp: u8) -> PResult<Expr> {
        let start = self.start();
        self.advance();
        let inner = self.parse_expr_bp(r_bp)?;
        Ok(Expr::Unary {
            op,
            expr: Box::new(inner),
            span: self.span_from(start),
        })
    }

    /// `EXISTS (query)`; the current token is EXISTS.
    fn parse_exists(&mut self, start: u32, not: bool) -> PResult<Expr> {
        self.expect_kw(Keyword::Exists)?;
        self.expect(&TokenKind::LeftParen)?;
        let subquery = self.parse_query()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Exists {
            subquery: Box::new(subquery),
            not,
            span: self.span_from(start),
        })
    }

    /// Identifier-led forms: typed literals, column references, sequence
    /// values and function calls.
    fn parse_name_expr(&mut self) -> PResult<Expr> {
        let start = self.start();
        if let Some(literal) = self.typed_literal() {
            return Ok(literal);
        }
        let mut parts = vec![self.parse_ident()?];
        while parts.len() < 3
            && self.check(&TokenKind::Dot)
            && matches!(
                self.peek_nth(1),
                TokenKind::Id(_) | TokenKind::QuotedId(_) | TokenKind::Keyword(_)
            )
        {
            self.advance();
            parts.push(self.parse_word_ident());
        }

        if parts.len() <= 2 && self.check(&TokenKind::LeftParen) {
            let name = qualified_from(parts);
            return self.parse_function_call(name, start);
        }

        if parts.len() >= 2 {
            let last = &parts[parts.len() - 1];
            let kind = if last.quoted {
                None
            } else if last.value.eq_ignore_ascii_case("NEXTVAL") {
                Some(SequenceValueKind::NextVal)
            } else if last.value.eq_ignore_ascii_case("CURRVAL") {
                Some(SequenceValueKind::CurrVal)
            } else {
                None
            };
            if let Some(kind) = kind {
                parts.pop();
                return Ok(Expr::SequenceValue {
                    sequence: qualified_from(parts),
                    kind,
                    span: self.span_from(start),
                });
            }
        }

        let mut parts = parts.into_iter();
        let column = match (parts.next(), parts.next(), parts.next()) {
            (Some(column), None, None) => ColumnRef {
                schema: None,
                table: None,
                column,
            },
            (Some(table), Some(column), None) => ColumnRef {
                schema: None,
                table: Some(table),
                column,
            },
            (Some(schema), Some(table), Some(column)) => ColumnRef {
                schema: Some(schema),
                table: Some(table),
                column,
            },
            _ => return Err(self.error_expected("identifier")),
        };
        Ok(Expr::Column(column, self.span_from(start)))
    }

    /// Any word after a `.` names a member, reserved or not.
    pub(crate) fn parse_word_ident(&mut self) -> Ident {
        let tok = self.token();
        let ident = match &tok.kind {
            TokenKind::QuotedId(s) => Ident::quoted(s.clone()),
            TokenKind::Id(s) => Ident::new(s.clone()),
            _ => Ident::new(tok.lexeme.clone()),
        };
        self.advance();
        ident
    }

    /// `DATE '...'`, `TIME '...'`, `TIMESTAMP '...'`.
    fn typed_literal(&mut self) -> Option<Expr> {
        let TokenKind::String(value) = self.peek_nth(1) else {
            return None;
        };
        let value = value.clone();
        let literal = match self.peek() {
            TokenKind::Id(w) if w.eq_ignore_ascii_case("DATE") => Literal::Date(value),
            TokenKind::Id(w) if w.eq_ignore_ascii_case("TIME") => Literal::Time(value),
            TokenKind::Id(w) if w.eq_ignore_ascii_case("TIMESTAMP") => Literal::Timestamp(value),
            _ => return None,
        };
        let start = self.start();
        self.advance();
        self.advance();
        Some(Expr::Literal(literal, self.span_from(start)))
    }

    fn parse_paren_expr(&mut self) -> PResult<Expr> {
        let start = self.start();
        if self.is_kw_at(1, Keyword::Select) || self.is_kw_at(1, Keyword::With) {
            self.advance();
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Subquery(Box::new(query), self.span_from(start)));
        }
        // `((SELECT ...) UNION ...)` is a query, `((SELECT 1) + 1)` is not.
        if self.query_behind_parens() && !self.no_query_at.contains(&self.pos) {
            let at = self.pos;
            let query = self.speculate(|p| {
                p.advance();
                let query = p.parse_query()?;
                p.expect(&TokenKind::RightParen)?;
                Ok(query)
            })?;
            if let Some(query) = query {
                return Ok(Expr::Subquery(Box::new(query), self.span_from(start)));
            }
            self.no_query_at.insert(at);
        }
        self.advance();
        let first = self.parse_expr()?;
        if self.eat(&TokenKind::Comma) {
            let mut items = vec![first];
            items.extend(self.parse_comma_list(Self::parse_expr)?);
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Row(items, self.span_from(start)));
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(first)
    }

    /// Whether the opening parentheses at the current position lead to
    /// SELECT or WITH.
    pub(crate) fn query_behind_parens(&self) -> bool {
        let mut n = 0;
        while matches!(self.peek_nth(n), TokenKind::LeftParen) {
            n += 1;
        }
        n > 0 && (self.is_kw_at(n, Keyword::Select) || self.is_kw_at(n, Keyword::With))
    }

    // ── Function calls ──────────────────────────────────────────────────

    /// Arguments and trailing clauses of a call; the current token is `(`.
    fn parse_function_call(&mut self, name: QualifiedName, start: u32) -> PResult<Expr> {
        self.expect(&TokenKind::LeftParen)?;
        let mut distinct = false;
        let args = if self.check(&TokenKind::Star) && matches!(self.peek_nth(1), TokenKind::RightParen)
        {
            self.advance();
            FunctionArgs::Star
        } else if self.check(&TokenKind::RightParen) {
            FunctionArgs::List(Vec::new())
        } else {
            if self.eat_kw(Keyword::Distinct) {
                distinct = true;
            } else {
                self.eat_kw(Keyword::All);
            }
            FunctionArgs::List(self.parse_comma_list(Self::parse_function_arg)?)
        };
        let order_by = if self.check_kw(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            Vec::new()
        };
        let separator = if self.eat_word("SEPARATOR") {
            Some(self.parse_string()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;

        let within_group = if self.check_kw(Keyword::Within) && self.is_kw_at(1, Keyword::Group) {
            self.advance();
            self.advance();
            self.expect(&TokenKind::LeftParen)?;
            let terms = self.parse_order_by_clause()?;
            self.expect(&TokenKind::RightParen)?;
            terms
        } else {
            Vec::new()
        };
        let over = if self.eat_kw(Keyword::Over) {
            if self.check(&TokenKind::LeftParen) {
                Some(WindowRef::Spec(self.parse_window_spec()?))
            } else {
                Some(WindowRef::Named(self.parse_ident()?))
            }
        } else {
            None
        };

        Ok(Expr::Function(Box::new(FunctionCall {
            name,
            distinct,
            args,
            order_by,
            separator,
            within_group,
            over,
            span: self.span_from(start),
        })))
    }

    /// `expr` or Oracle's named notation `name => expr`.
    fn parse_function_arg(&mut self) -> PResult<FunctionArg> {
        if self.is_ident_at(0) && matches!(self.peek_nth(1), TokenKind::FatArrow) {
            let name = self.parse_ident()?;
            self.advance();
            let value = self.parse_expr()?;
            return Ok(FunctionArg {
                name: Some(name),
                value,
            });
        }
        Ok(FunctionArg {
            name: None,
            value: self.parse_expr()?,
        })
    }

    // ── Special forms ───────────────────────────────────────────────────

    fn parse_case(&mut self) -> PResult<Expr> {
        let start = self.start();
        self.expect_kw(Keyword::Case)?;
        let operand = if self.check_kw(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let mut whens = Vec::new();
        loop {
            self.expect_kw(Keyword::When)?;
            let condition = self.parse_expr()?;
            self.expect_kw(Keyword::Then)?;
            whens.push((condition, self.parse_expr()?));
            if !self.check_kw(Keyword::When) {
                break;
            }
        }
        let else_expr = if self.eat_kw(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_kw(Keyword::End)?;
        Ok(Expr::Case {
            operand,
            whens,
            else_expr,
            span: self.span_from(start),
        })
    }

    fn parse_cast(&mut self) -> PResult<Expr> {
        let start = self.start();
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_kw(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
            span: self.span_from(start),
        })
    }

    fn parse_extract(&mut self) -> PResult<Expr> {
        let start = self.start();
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let field = self.parse_datetime_field()?;
        self.expect_kw(Keyword::From)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Extract {
            field,
            expr: Box::new(expr),
            span: self.span_from(start),
        })
    }

    /// `INTERVAL value field [TO field]`.
    fn parse_interval(&mut self) -> PResult<Expr> {
        let start = self.start();
        self.expect_kw(Keyword::Interval)?;
        let value = self.parse_expr_bp(bp::UNARY)?;
        let field = self.parse_datetime_field()?;
        let to = if self.eat_kw(Keyword::To) {
            Some(self.parse_datetime_field()?)
        } else {
            None
        };
        Ok(Expr::Interval {
            value: Box::new(value),
            field,
            to,
            span: self.span_from(start),
        })
    }

    fn datetime_field_at(&self) -> Option<DateTimeField> {
        let word = self.word_at(0)?;
        DATETIME_FIELDS
            .iter()
            .find(|(name, _)| word.eq_ignore_ascii_case(name))
            .map(|&(_, field)| field)
    }

    pub(crate) fn parse_datetime_field(&mut self) -> PResult<DateTimeField> {
        match self.datetime_field_at() {
            Some(field) => {
                self.advance();
                Ok(field)
            }
            None => Err(self.error_expected("date/time field")),
        }
    }

    fn parse_json_function(&mut self, kind: JsonFunctionKind) -> PResult<Expr> {
        let start = self.start();
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::Comma)?;
        let path = self.parse_expr()?;
        let returning = if self.eat_kw(Keyword::Returning) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let wrapper = self.parse_json_wrapper()?;
        let mut on_empty = None;
        let mut on_error = None;
        while let Some(behavior) = self.parse_json_behavior()? {
            self.expect_kw(Keyword::On)?;
            if self.eat_word("EMPTY") {
                on_empty = Some(behavior);
            } else if self.eat_word("ERROR") {
                on_error = Some(behavior);
            } else {
                return Err(self.error_expected("EMPTY or ERROR"));
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Json(Box::new(JsonFunction {
            kind,
            expr,
            path,
            returning,
            wrapper,
            on_empty,
            on_error,
            span: self.span_from(start),
        })))
    }

    fn parse_json_wrapper(&mut self) -> PResult<Option<JsonWrapper>> {
        let wrapper = if self.eat_word("WITHOUT") {
            JsonWrapper::Without
        } else if self.check_kw(Keyword::With)
            && ["CONDITIONAL", "UNCONDITIONAL", "ARRAY", "WRAPPER"]
                .iter()
                .any(|w| self.is_word_at(1, w))
        {
            self.advance();
            if self.eat_word("CONDITIONAL") {
                JsonWrapper::WithConditional
            } else if self.eat_word("UNCONDITIONAL") {
                JsonWrapper::WithUnconditional
            } else {
                JsonWrapper::With
            }
        } else {
            return Ok(None);
        };
        self.eat_word("ARRAY");
        self.expect_word("WRAPPER")?;
        Ok(Some(wrapper))
    }

    fn parse_json_behavior(&mut self) -> PResult<Option<JsonBehavior>> {
        Ok(if self.eat_kw(Keyword::Null) {
            Some(JsonBehavior::Null)
        } else if self.eat_word("ERROR") {
            Some(JsonBehavior::Error)
        } else if self.eat_kw(Keyword::Default) {
            Some(JsonBehavior::Default(self.parse_operand()?))
        } else {
            None
        })
    }

    /// Oracle `JSON_OBJECT([KEY] k VALUE v, ...)`; `k : v` is accepted too.
    fn parse_json_object(&mut self) -> PResult<Expr> {
        let start = self.start();
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let entries = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_list(|p| {
                p.eat_kw(Keyword::Key);
                let key = p.parse_expr()?;
                if !p.eat(&TokenKind::Colon) {
                    p.expect_word("VALUE")?;
                }
                Ok((key, p.parse_expr()?))
            })?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::JsonObject {
            entries,
            span: self.span_from(start),
        })
    }

    fn parse_xml(&mut self) -> PResult<Expr> {
        let start = self.start();
        let kw = match self.peek() {
            TokenKind::Keyword(kw) => *kw,
            _ => return Err(self.error_expected("XML function")),
        };
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let xml = match kw {
            Keyword::XmlElement => {
                if self.is_word_at(0, "NAME") && self.is_ident_at(1) {
                    self.advance();
                }
                let name = self.parse_ident()?;
                let mut attributes = Vec::new();
                let mut content = Vec::new();
                while self.eat(&TokenKind::Comma) {
                    if self.check_kw(Keyword::XmlAttributes)
                        && matches!(self.peek_nth(1), TokenKind::LeftParen)
                    {
                        self.advance();
                        attributes = self.parse_paren_list(|p| {
                            let value = p.parse_expr()?;
                            let alias = if p.eat_kw(Keyword::As) {
                                Some(p.parse_ident()?)
                            } else {
                                None
                            };
                            Ok((value, alias))
                        })?;
                    } else {
                        content.push(self.parse_expr()?);
                    }
                }
                self.expect(&TokenKind::RightParen)?;
                XmlExpr::Element {
                    name,
                    attributes,
                    content,
                    span: self.span_from(start),
                }
            }
            Keyword::XmlAgg => {
                let expr = self.parse_expr()?;
                let order_by = if self.check_kw(Keyword::Order) {
                    self.parse_order_by_clause()?
                } else {
                    Vec::new()
                };
                self.expect(&TokenKind::RightParen)?;
                XmlExpr::Agg {
                    expr,
                    order_by,
                    span: self.span_from(start),
                }
            }
            Keyword::XmlParse => {
                let document = self.parse_xml_content_kind()?;
                let expr = self.parse_expr()?;
                let wellformed = self.eat_word("WELLFORMED");
                self.expect(&TokenKind::RightParen)?;
                XmlExpr::Parse {
                    document,
                    expr,
                    wellformed,
                    span: self.span_from(start),
                }
            }
            _ => {
                let document = self.parse_xml_content_kind()?;
                let expr = self.parse_expr()?;
                let as_type = if self.eat_kw(Keyword::As) {
                    Some(self.parse_data_type()?)
                } else {
                    None
                };
                self.expect(&TokenKind::RightParen)?;
                XmlExpr::Serialize {
                    document,
                    expr,
                    as_type,
                    span: self.span_from(start),
                }
            }
        };
        Ok(Expr::Xml(Box::new(xml)))
    }

    /// `DOCUMENT` (true) or `CONTENT` (false).
    fn parse_xml_content_kind(&mut self) -> PResult<bool> {
        if self.eat_word("DOCUMENT") {
            Ok(true)
        } else if self.eat_word("CONTENT") {
            Ok(false)
        } else {
            Err(self.error_expected("DOCUMENT or CONTENT"))
        }
    }

    // ── Postfix ─────────────────────────────────────────────────────────

    fn parse_collate(&mut self, lhs: Expr) -> PResult<Expr> {
        self.expect_kw(Keyword::Collate)?;
        let collation = match self.peek() {
            TokenKind::String(s) => {
                let ident = Ident::new(s.clone());
                self.advance();
                ident
            }
            _ => self.parse_ident()?,
        };
        let span = lhs.span().merge(self.span_from(lhs.span().start));
        Ok(Expr::Collate {
            expr: Box::new(lhs),
            collation,
            span,
        })
    }

    // ── Infix ───────────────────────────────────────────────────────────

    fn infix_bp(&self) -> Option<(u8, u8)> {
        match self.peek() {
            TokenKind::Assign => Some(bp::ASSIGN),
            TokenKind::Keyword(Keyword::Or) => Some(bp::OR),
            TokenKind::DoublePipe => {
                if self.config.concat_pipes() {
                    Some(bp::ADD)
                } else {
                    Some(bp::OR)
                }
            }
            TokenKind::Keyword(Keyword::Xor) => Some(bp::XOR),
            TokenKind::Keyword(Keyword::And) | TokenKind::DoubleAmpersand => Some(bp::AND),

            TokenKind::Eq
            | TokenKind::NullSafeEq
            | TokenKind::Ne
            | TokenKind::LtGt
            | TokenKind::Lt
            | TokenKind::Le
            | TokenKind::Gt
            | TokenKind::Ge
            | TokenKind::Keyword(
                Keyword::Is
                | Keyword::Like
                | Keyword::Regexp
                | Keyword::Rlike
                | Keyword::In
                | Keyword::Between,
            ) => Some(bp::COMPARE),
            TokenKind::Keyword(Keyword::Not) => match self.peek_nth(1) {
                TokenKind::Keyword(
                    Keyword::Like
                    | Keyword::Regexp
                    | Keyword::Rlike
                    | Keyword::In
                    | Keyword::Between,
                ) => Some(bp::COMPARE),
                _ => None,
            },

            TokenKind::Pipe => Some(bp::BIT_OR),
            TokenKind::Ampersand => Some(bp::BIT_AND),
            TokenKind::ShiftLeft | TokenKind::ShiftRight => Some(bp::SHIFT),
            TokenKind::Plus | TokenKind::Minus => Some(bp::ADD),
            TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Keyword(Keyword::Div | Keyword::Mod) => Some(bp::MUL),
            TokenKind::Caret => Some(bp::BIT_XOR),
            TokenKind::Arrow | TokenKind::DoubleArrow => Some(bp::JSON),
            _ => None,
        }
    }

    #[allow(clippy::too_many_lines)]
    fn parse_infix(&mut self, lhs: Expr, r_bp: u8) -> PResult<Expr> {
        let start = lhs.span().start;
        let kind = self.peek().clone();
        self.advance();

        let op = match kind {
            TokenKind::Assign => {
                let value = self.parse_rhs(r_bp)?;
                return Ok(Expr::Assign {
                    target: Box::new(lhs),
                    value: Box::new(value),
                    span: self.span_from(start),
                });
            }
            TokenKind::Keyword(Keyword::Or) => BinaryOp::Or,
            TokenKind::DoublePipe => {
                if self.config.concat_pipes() {
                    BinaryOp::Concat
                } else {
                    BinaryOp::Or
                }
            }
            TokenKind::Keyword(Keyword::Xor) => BinaryOp::Xor,
            TokenKind::Keyword(Keyword::And) | TokenKind::DoubleAmpersand => BinaryOp::And,
            TokenKind::Eq => BinaryOp::Eq,
            TokenKind::NullSafeEq => BinaryOp::NullSafeEq,
            TokenKind::Ne | TokenKind::LtGt => BinaryOp::Ne,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Le => BinaryOp::Le,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::Ge => BinaryOp::Ge,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Ampersand => BinaryOp::BitAnd,
            TokenKind::ShiftLeft => BinaryOp::ShiftLeft,
            TokenKind::ShiftRight => BinaryOp::ShiftRight,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent | TokenKind::Keyword(Keyword::Mod) => BinaryOp::Mod,
            TokenKind::Keyword(Keyword::Div) => BinaryOp::IntDiv,
            TokenKind::Caret => BinaryOp::BitXor,

            TokenKind::Arrow | TokenKind::DoubleArrow => {
                let path = self.parse_rhs(r_bp)?;
                return Ok(Expr::JsonAccess {
                    expr: Box::new(lhs),
                    path: Box::new(path),
                    unquote: kind == TokenKind::DoubleArrow,
                    span: self.span_from(start),
                });
            }

            TokenKind::Keyword(Keyword::Is) => return self.parse_is(lhs, start),
            TokenKind::Keyword(Keyword::Not) => {
                let kind = self.peek().clone();
                self.advance();
                return self.parse_predicate(lhs, &kind, true, r_bp, start);
            }
            TokenKind::Keyword(
                Keyword::Like | Keyword::Regexp | Keyword::Rlike | Keyword::In | Keyword::Between,
            ) => return self.parse_predicate(lhs, &kind, false, r_bp, start),

            _ => return Err(self.syntax_error("unexpected operator")),
        };

        if is_comparison(op) {
            if let Some(quantifier) = self.quantifier_at() {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let subquery = self.parse_query()?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(Expr::Quantified {
                    left: Box::new(lhs),
                    op,
                    quantifier,
                    subquery: Box::new(subquery),
                    span: self.span_from(start),
                });
            }
        }

        let rhs = self.parse_rhs(r_bp)?;
        Ok(Expr::Binary {
            left: Box::new(lhs),
            op,
            right: Box::new(rhs),
            span: self.span_from(start),
        })
    }

    /// `ANY (`, `SOME (` or `ALL (` after a comparison operator.
    fn quantifier_at(&self) -> Option<Quantifier> {
        if !matches!(self.peek_nth(1), TokenKind::LeftParen) {
            return None;
        }
        match self.peek() {
            TokenKind::Keyword(Keyword::Any) => Some(Quantifier::Any),
            TokenKind::Keyword(Keyword::Some) => Some(Quantifier::Some),
            TokenKind::Keyword(Keyword::All) => Some(Quantifier::All),
            _ => None,
        }
    }

    /// `IS [NOT] NULL | TRUE | FALSE | UNKNOWN`; IS is consumed.
    fn parse_is(&mut self, lhs: Expr, start: u32) -> PResult<Expr> {
        let not = self.eat_kw(Keyword::Not);
        let test = if self.eat_kw(Keyword::Null) {
            IsTest::Null
        } else if self.eat_kw(Keyword::True) {
            IsTest::True
        } else if self.eat_kw(Keyword::False) {
            IsTest::False
        } else if self.eat_word("UNKNOWN") {
            IsTest::Unknown
        } else {
            return Err(self.error_expected("NULL, TRUE, FALSE or UNKNOWN"));
        };
        Ok(Expr::Is {
            expr: Box::new(lhs),
            not,
            test,
            span: self.span_from(start),
        })
    }

    /// LIKE, REGEXP, IN and BETWEEN; the operator keyword is consumed.
    fn parse_predicate(
        &mut self,
        lhs: Expr,
        kind: &TokenKind,
        not: bool,
        r_bp: u8,
        start: u32,
    ) -> PResult<Expr> {
        let expr = Box::new(lhs);
        match kind {
            TokenKind::Keyword(Keyword::Like | Keyword::Regexp | Keyword::Rlike) => {
                let op = if matches!(kind, TokenKind::Keyword(Keyword::Like)) {
                    LikeOp::Like
                } else {
                    LikeOp::Regexp
                };
                let pattern = self.parse_rhs(r_bp)?;
                let escape = if self.eat_kw(Keyword::Escape) {
                    Some(Box::new(self.parse_expr_bp(r_bp)?))
                } else {
                    None
                };
                Ok(Expr::Like {
                    expr,
                    op,
                    pattern: Box::new(pattern),
                    escape,
                    not,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::In) => {
                let set = if self.check(&TokenKind::LeftParen)
                    && (self.is_kw_at(1, Keyword::Select) || self.is_kw_at(1, Keyword::With))
                {
                    self.advance();
                    let query = self.parse_query()?;
                    self.expect(&TokenKind::RightParen)?;
                    InSet::Subquery(Box::new(query))
                } else {
                    InSet::List(self.parse_paren_list(Self::parse_expr)?)
                };
                Ok(Expr::In {
                    expr,
                    set,
                    not,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Between) => {
                let low = self.parse_rhs(r_bp)?;
                self.expect_kw(Keyword::And)?;
                let high = self.parse_rhs(r_bp)?;
                Ok(Expr::Between {
                    expr,
                    low: Box::new(low),
                    high: Box::new(high),
                    not,
                    span: self.span_from(start),
                })
            }
            _ => Err(self.error_expected("LIKE, REGEXP, IN or BETWEEN")),
        }
    }

    // ── Data types ──────────────────────────────────────────────────────

    /// A column or cast type, in either dialect's spelling.
    #[allow(clippy::too_many_lines)]
    pub(crate) fn parse_data_type(&mut self) -> PResult<DataType> {
        self.nested(|p| {
            p.note_class("data type");
            let Some(word) = p.word_at(0).map(str::to_ascii_uppercase) else {
                return Err(p.error_expected("data type"));
            };
            let int_kind = match word.as_str() {
                "TINYINT" => Some(IntKind::TinyInt),
                "SMALLINT" => Some(IntKind::SmallInt),
                "MEDIUMINT" => Some(IntKind::MediumInt),
                "INT" => Some(IntKind::Int),
                "INTEGER" => Some(IntKind::Integer),
                "BIGINT" => Some(IntKind::BigInt),
                _ => None,
            };
            if let Some(kind) = int_kind {
                p.advance();
                let width = p.parse_type_length()?;
                let unsigned = p.parse_sign();
                let zerofill = p.eat_word("ZEROFILL");
                return Ok(DataType::Int {
                    kind,
                    width,
                    unsigned,
                    zerofill,
                });
            }
            let decimal_kind = match word.as_str() {
                "DECIMAL" => Some(DecimalKind::Decimal),
                "DEC" => Some(DecimalKind::Dec),
                "NUMERIC" => Some(DecimalKind::Numeric),
                "NUMBER" => Some(DecimalKind::Number),
                _ => None,
            };
            if let Some(kind) = decimal_kind {
                p.advance();
                let (precision, scale) = if p.eat(&TokenKind::LeftParen) {
                    let precision = p.parse_u32()?;
                    let scale = if p.eat(&TokenKind::Comma) {
                        Some(p.parse_signed_i32()?)
                    } else {
                        None
                    };
                    p.expect(&TokenKind::RightParen)?;
                    (Some(precision), scale)
                } else {
                    (None, None)
                };
                return Ok(DataType::Decimal {
                    kind,
                    precision,
                    scale,
                    unsigned: p.parse_sign(),
                });
            }
            let float_kind = match word.as_str() {
                "FLOAT" => Some(FloatKind::Float),
                "DOUBLE" => Some(FloatKind::Double),
                "REAL" => Some(FloatKind::Real),
                "BINARY_FLOAT" => Some(FloatKind::BinaryFloat),
                "BINARY_DOUBLE" => Some(FloatKind::BinaryDouble),
                _ => None,
            };
            if let Some(kind) = float_kind {
                p.advance();
                if kind == FloatKind::Double {
                    p.eat_word("PRECISION");
                }
                let (precision, scale) = if p.eat(&TokenKind::LeftParen) {
                    let precision = p.parse_u32()?;
                    let scale = if p.eat(&TokenKind::Comma) {
                        Some(p.parse_u32()?)
                    } else {
                        None
                    };
                    p.expect(&TokenKind::RightParen)?;
                    (Some(precision), scale)
                } else {
                    (None, None)
                };
                return Ok(DataType::Float {
                    kind,
                    precision,
                    scale,
                    unsigned: p.parse_sign(),
                });
            }
            let char_kind = match word.as_str() {
                "CHAR" | "CHARACTER" => Some(CharKind::Char),
                "VARCHAR" => Some(CharKind::Varchar),
                "VARCHAR2" => Some(CharKind::Varchar2),
                "NCHAR" => Some(CharKind::NChar),
                "NVARCHAR2" => Some(CharKind::NVarchar2),
                "BINARY" => Some(CharKind::Binary),
                "VARBINARY" => Some(CharKind::VarBinary),
                "RAW" => Some(CharKind::Raw),
                _ => None,
            };
            if let Some(kind) = char_kind {
                p.advance();
                let (length, semantics) = if p.eat(&TokenKind::LeftParen) {
                    let length = p.parse_u32()?;
                    let semantics = if p.eat_word("BYTE") {
                        Some(LengthSemantics::Byte)
                    } else if p.eat_word("CHAR") {
                        Some(LengthSemantics::Char)
                    } else {
                        None
                    };
                    p.expect(&TokenKind::RightParen)?;
                    (Some(length), semantics)
                } else {
                    (None, None)
                };
                return Ok(DataType::Char {
                    kind,
                    length,
                    semantics,
                });
            }
            let lob = match word.as_str() {
                "TINYTEXT" => Some(LobKind::TinyText),
                "TEXT" => Some(LobKind::Text),
                "MEDIUMTEXT" => Some(LobKind::MediumText),
                "LONGTEXT" => Some(LobKind::LongText),
                "TINYBLOB" => Some(LobKind::TinyBlob),
                "BLOB" => Some(LobKind::Blob),
                "MEDIUMBLOB" => Some(LobKind::MediumBlob),
                "LONGBLOB" => Some(LobKind::LongBlob),
                "CLOB" => Some(LobKind::Clob),
                "NCLOB" => Some(LobKind::NClob),
                _ => None,
            };
            if let Some(kind) = lob {
                p.advance();
                return Ok(DataType::Lob(kind));
            }

            let simple = match word.as_str() {
                "DATE" => Some(DataType::Date),
                "YEAR" => Some(DataType::Year),
                "BOOL" | "BOOLEAN" => Some(DataType::Bool),
                "JSON" => Some(DataType::Json),
                "XMLTYPE" => Some(DataType::XmlType),
                "ROWID" => Some(DataType::RowId),
                _ => None,
            };
            if let Some(data_type) = simple {
                p.advance();
                return Ok(data_type);
            }

            match word.as_str() {
                "TIME" => {
                    p.advance();
                    Ok(DataType::Time(p.parse_type_length()?))
                }
                "DATETIME" => {
                    p.advance();
                    Ok(DataType::DateTime(p.parse_type_length()?))
                }
                "TIMESTAMP" => {
                    p.advance();
                    let precision = p.parse_type_length()?;
                    let time_zone = if p.check_kw(Keyword::With)
                        && (p.is_word_at(1, "TIME") || p.is_word_at(1, "LOCAL"))
                    {
                        p.advance();
                        let local = p.eat_kw(Keyword::Local);
                        p.expect_word("TIME")?;
                        p.expect_word("ZONE")?;
                        Some(if local {
                            TimeZoneKind::WithLocalTimeZone
                        } else {
                            TimeZoneKind::WithTimeZone
                        })
                    } else {
                        None
                    };
                    Ok(DataType::Timestamp {
                        precision,
                        time_zone,
                    })
                }
                "INTERVAL" => {
                    p.advance();
                    if p.eat_word("YEAR") {
                        let precision = p.parse_type_length()?;
                        p.expect_kw(Keyword::To)?;
                        p.expect_word("MONTH")?;
                        Ok(DataType::IntervalYearToMonth(precision))
                    } else {
                        p.expect_word("DAY")?;
                        let day = p.parse_type_length()?;
                        p.expect_kw(Keyword::To)?;
                        p.expect_word("SECOND")?;
                        let second = p.parse_type_length()?;
                        Ok(DataType::IntervalDayToSecond(day, second))
                    }
                }
                "BIT" => {
                    p.advance();
                    Ok(DataType::Bit(p.parse_type_length()?))
                }
                "ENUM" | "SET" => {
                    p.advance();
                    let values = p.parse_paren_list(Self::parse_string)?;
                    Ok(if word == "ENUM" {
                        DataType::Enum(values)
                    } else {
                        DataType::Set(values)
                    })
                }
                "SIGNED" | "UNSIGNED" => {
                    p.advance();
                    if !p.eat_word("INTEGER") {
                        p.eat_word("INT");
                    }
                    Ok(DataType::CastInteger {
                        unsigned: word == "UNSIGNED",
                    })
                }
                _ => Err(p.error_expected("data type")),
            }
        })
    }

    /// Optional `(n)`.
    fn parse_type_length(&mut self) -> PResult<Option<u32>> {
        if self.eat(&TokenKind::LeftParen) {
            let n = self.parse_u32()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    /// `SIGNED` or `UNSIGNED`; true when unsigned.
    fn parse_sign(&mut self) -> bool {
        if self.eat_word("UNSIGNED") {
            true
        } else {
            self.eat_word("SIGNED");
            false
        }
    }

    /// Integer with an optional leading sign, e.g. a NUMBER scale.
    pub(crate) fn parse_signed_i32(&mut self) -> PResult<i32> {
        let negative = if self.eat(&TokenKind::Minus) {
            true
        } else {
            self.eat(&TokenKind::Plus);
            false
        };
        self.note_class("integer");
        let TokenKind::Integer(n) = *self.peek() else {
            return Err(self.error_expected("integer"));
        };
        let n = if negative { -n } else { n };
        let value = i32::try_from(n).map_err(|_| self.syntax_error("integer out of range"))?;
        self.advance();
        Ok(value)
    }
}

fn is_comparison(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::Eq
            | BinaryOp::NullSafeEq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge
    )
}

/// `@@[scope.]name` as lexed, without the `@@`.
pub(crate) fn system_variable(text: &str) -> Variable {
    let scopes = [
        ("global.", VariableScope::Global),
        ("session.", VariableScope::Session),
        ("local.", VariableScope::Local),
    ];
    for (prefix, scope) in scopes {
        if text.len() > prefix.len()
            && text.is_char_boundary(prefix.len())
            && text[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return Variable::System {
                scope: Some(scope),
                name: text[prefix.len()..].to_owned(),
            };
        }
    }
    Variable::System {
        scope: None,
        name: text.to_owned(),
    }
}

/// One or two name parts as a `[schema.]name`.
fn qualified_from(mut parts: Vec<Ident>) -> QualifiedName {
    let name = parts.pop().unwrap_or_else(|| Ident::new(""));
    QualifiedName {
        schema: parts.pop(),
        name,
        dblink: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ParserConfig;
    use crate::parser::StartRule;

    fn expr_in(dialect: Dialect, sql: &str) -> Expr {
        let mut p = Parser::from_sql(sql, ParserConfig::new(dialect));
        let (fragment, diags) = p.parse_start(StartRule::Expr);
        assert!(diags.is_empty(), "{sql}: {diags:?}");
        match fragment {
            Some(crate::parser::Fragment::Expr(e)) => e,
            other => unreachable!("{other:?}"),
        }
    }

    fn my(sql: &str) -> Expr {
        expr_in(Dialect::MySql, sql)
    }

    fn ora(sql: &str) -> Expr {
        expr_in(Dialect::Oracle, sql)
    }

    fn type_in(dialect: Dialect, sql: &str) -> DataType {
        let mut p = Parser::from_sql(sql, ParserConfig::new(dialect));
        let (fragment, diags) = p.parse_start(StartRule::DataType);
        assert!(diags.is_empty(), "{sql}: {diags:?}");
        match fragment {
            Some(crate::parser::Fragment::DataType(t)) => t,
            other => unreachable!("{other:?}"),
        }
    }

    fn binary_op(e: &Expr) -> BinaryOp {
        let Expr::Binary { op, .. } = e else {
            unreachable!("expected binary, got {e:?}")
        };
        *op
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let e = my("a OR b AND c");
        let Expr::Binary { op, right, .. } = &e else {
            unreachable!()
        };
        assert_eq!(*op, BinaryOp::Or);
        assert_eq!(binary_op(right), BinaryOp::And);
    }

    #[test]
    fn test_arithmetic_precedence_and_associativity() {
        let e = my("1 + 2 * 3 - 4");
        let Expr::Binary { left, op, .. } = &e else {
            unreachable!()
        };
        assert_eq!(*op, BinaryOp::Sub);
        let Expr::Binary { right, .. } = left.as_ref() else {
            unreachable!()
        };
        assert_eq!(binary_op(right), BinaryOp::Mul);
        assert_eq!(e.to_string(), "(1 + (2 * 3)) - 4");
    }

    #[test]
    fn test_not_prefix_covers_comparison() {
        let e = my("NOT a = 1 AND b");
        assert_eq!(binary_op(&e), BinaryOp::And);
        let Expr::Binary { left, .. } = &e else {
            unreachable!()
        };
        assert!(matches!(
            left.as_ref(),
            Expr::Unary {
                op: UnaryOp::Not,
                ..
            }
        ));
    }

    #[test]
    fn test_pipes_depend_on_dialect_and_mode() {
        assert_eq!(binary_op(&my("a || b")), BinaryOp::Or);
        assert_eq!(binary_op(&ora("a || b")), BinaryOp::Concat);
        let config = ParserConfig::new(Dialect::MySql).with_pipes_as_concat(true);
        let mut p = Parser::from_sql("a || b", config);
        assert_eq!(binary_op(&p.parse_expr().unwrap()), BinaryOp::Concat);
    }

    #[test]
    fn test_mysql_only_operators() {
        assert_eq!(binary_op(&my("a DIV 2")), BinaryOp::IntDiv);
        assert_eq!(binary_op(&my("a MOD 2")), BinaryOp::Mod);
        assert_eq!(binary_op(&my("a XOR b")), BinaryOp::Xor);
        assert_eq!(binary_op(&my("a <=> b")), BinaryOp::NullSafeEq);
        assert!(matches!(
            my("a REGEXP '^x'"),
            Expr::Like {
                op: LikeOp::Regexp,
                ..
            }
        ));
        assert!(matches!(my("@x := 1"), Expr::Assign { .. }));
    }

    #[test]
    fn test_predicates() {
        assert!(matches!(
            my("a NOT BETWEEN 1 AND 2 AND c"),
            Expr::Binary {
                op: BinaryOp::And,
                ..
            }
        ));
        assert!(matches!(
            my("a IS NOT NULL"),
            Expr::Is {
                not: true,
                test: IsTest::Null,
                ..
            }
        ));
        let Expr::In { set, not, .. } = my("a NOT IN (1, 2, 3)") else {
            unreachable!()
        };
        assert!(not);
        assert!(matches!(set, InSet::List(ref l) if l.len() == 3));
        assert!(matches!(
            my("a IN (SELECT b FROM t)"),
            Expr::In {
                set: InSet::Subquery(_),
                ..
            }
        ));
        let Expr::Like { escape, .. } = my("name LIKE 'a!%' ESCAPE '!'") else {
            unreachable!()
        };
        assert!(escape.is_some());
        assert!(matches!(
            my("a > ALL (SELECT b FROM t)"),
            Expr::Quantified {
                quantifier: Quantifier::All,
                op: BinaryOp::Gt,
                ..
            }
        ));
    }

    #[test]
    fn test_level_is_pseudo_column_only_in_oracle() {
        assert!(matches!(
            ora("level"),
            Expr::Pseudo(PseudoColumn::Level, _)
        ));
        assert!(matches!(my("level"), Expr::Column(..)));
        assert!(matches!(
            ora("PRIOR id"),
            Expr::Unary {
                op: UnaryOp::Prior,
                ..
            }
        ));
    }

    #[test]
    fn test_column_sequence_and_variable_forms() {
        let Expr::Column(col, span) = my("s.t.c") else {
            unreachable!()
        };
        assert_eq!(col.schema.unwrap().value, "s");
        assert_eq!(col.table.unwrap().value, "t");
        assert_eq!(span, duosql_ast::Span::new(0, 5));
        assert!(matches!(
            ora("emp_seq.NEXTVAL"),
            Expr::SequenceValue {
                kind: SequenceValueKind::NextVal,
                ..
            }
        ));
        assert_eq!(
            my("@@global.max_connections"),
            Expr::Variable(
                Variable::System {
                    scope: Some(VariableScope::Global),
                    name: "max_connections".to_owned(),
                },
                duosql_ast::Span::new(0, 24)
            )
        );
        assert!(matches!(
            ora(":1"),
            Expr::Placeholder(Placeholder::Numbered(1), _)
        ));
        assert!(matches!(
            ora(":name"),
            Expr::Placeholder(Placeholder::Named(_), _)
        ));
    }

    #[test]
    fn test_function_calls() {
        let Expr::Function(f) = my("COUNT(*)") else {
            unreachable!()
        };
        assert_eq!(f.args, FunctionArgs::Star);
        let Expr::Function(f) =
            my("GROUP_CONCAT(DISTINCT name ORDER BY name DESC SEPARATOR ', ')")
        else {
            unreachable!()
        };
        assert!(f.distinct);
        assert_eq!(f.order_by.len(), 1);
        assert_eq!(f.separator.as_deref(), Some(", "));
        let Expr::Function(f) =
            ora("LISTAGG(ename, ',') WITHIN GROUP (ORDER BY ename) OVER (PARTITION BY dept)")
        else {
            unreachable!()
        };
        assert_eq!(f.within_group.len(), 1);
        assert!(matches!(f.over, Some(WindowRef::Spec(_))));
        let Expr::Function(f) = ora("pkg.proc(a => 1, 2)") else {
            unreachable!()
        };
        assert_eq!(f.name.schema.unwrap().value, "pkg");
        let FunctionArgs::List(args) = f.args else {
            unreachable!()
        };
        assert_eq!(args[0].name.as_ref().unwrap().value, "a");
        assert!(args[1].name.is_none());
        assert!(matches!(my("LEFT(s, 2)"), Expr::Function(_)));
    }

    #[test]
    fn test_special_forms() {
        assert!(matches!(
            my("CAST(x AS DECIMAL(10, 2))"),
            Expr::Cast {
                data_type: DataType::Decimal {
                    precision: Some(10),
                    scale: Some(2),
                    ..
                },
                ..
            }
        ));
        assert!(matches!(
            my("EXTRACT(YEAR FROM d)"),
            Expr::Extract {
                field: DateTimeField::Year,
                ..
            }
        ));
        assert!(matches!(
            my("d + INTERVAL 1 DAY"),
            Expr::Binary { .. }
        ));
        assert!(matches!(my("interval"), Expr::Column(..)));
        assert!(matches!(my("INTERVAL(1, 2, 3)"), Expr::Function(_)));
        let Expr::Case { operand, whens, else_expr, .. } =
            my("CASE a WHEN 1 THEN 'x' WHEN 2 THEN 'y' ELSE 'z' END")
        else {
            unreachable!()
        };
        assert!(operand.is_some());
        assert_eq!(whens.len(), 2);
        assert!(else_expr.is_some());
        assert!(matches!(
            my("DATE '2024-01-01'"),
            Expr::Literal(Literal::Date(_), _)
        ));
        assert!(matches!(
            my("NOT EXISTS (SELECT 1)"),
            Expr::Exists { not: true, .. }
        ));
        assert!(matches!(my("doc->>'$.a'"), Expr::JsonAccess { unquote: true, .. }));
        assert!(matches!(my("name COLLATE utf8mb4_bin"), Expr::Collate { .. }));
    }

    #[test]
    fn test_parenthesized_forms() {
        assert!(matches!(my("(1, 2)"), Expr::Row(ref items, _) if items.len() == 2));
        assert!(matches!(my("(SELECT 1)"), Expr::Subquery(..)));
        assert!(matches!(
            my("((SELECT 1) + 1)"),
            Expr::Binary {
                op: BinaryOp::Add,
                ..
            }
        ));
        assert!(matches!(
            my("((SELECT 1) UNION (SELECT 2))"),
            Expr::Subquery(..)
        ));
    }

    #[test]
    fn test_json_and_xml_functions() {
        let Expr::Json(j) = ora(
            "JSON_VALUE(doc, '$.a' RETURNING NUMBER WITH CONDITIONAL WRAPPER \
             DEFAULT 0 ON EMPTY ERROR ON ERROR)",
        ) else {
            unreachable!()
        };
        assert_eq!(j.kind, JsonFunctionKind::Value);
        assert_eq!(j.wrapper, Some(JsonWrapper::WithConditional));
        assert!(matches!(j.on_empty, Some(JsonBehavior::Default(_))));
        assert_eq!(j.on_error, Some(JsonBehavior::Error));
        let Expr::JsonObject { entries, .. } = ora("JSON_OBJECT(KEY 'a' VALUE 1, 'b' VALUE 2)")
        else {
            unreachable!()
        };
        assert_eq!(entries.len(), 2);
        let Expr::Xml(x) = ora("XMLELEMENT(\"emp\", XMLATTRIBUTES(id AS \"id\"), name)") else {
            unreachable!()
        };
        let XmlExpr::Element {
            attributes,
            content,
            ..
        } = *x
        else {
            unreachable!()
        };
        assert_eq!(attributes.len(), 1);
        assert_eq!(content.len(), 1);
        assert!(matches!(my("JSON_OBJECT('a', 1)"), Expr::Function(_)));
    }

    #[test]
    fn test_data_types() {
        assert_eq!(
            type_in(Dialect::MySql, "INT(11) UNSIGNED ZEROFILL"),
            DataType::Int {
                kind: IntKind::Int,
                width: Some(11),
                unsigned: true,
                zerofill: true,
            }
        );
        assert_eq!(
            type_in(Dialect::Oracle, "NUMBER(10, -2)"),
            DataType::Decimal {
                kind: DecimalKind::Number,
                precision: Some(10),
                scale: Some(-2),
                unsigned: false,
            }
        );
        assert_eq!(
            type_in(Dialect::Oracle, "VARCHAR2(20 BYTE)"),
            DataType::Char {
                kind: CharKind::Varchar2,
                length: Some(20),
                semantics: Some(LengthSemantics::Byte),
            }
        );
        assert_eq!(
            type_in(Dialect::Oracle, "TIMESTAMP(6) WITH LOCAL TIME ZONE"),
            DataType::Timestamp {
                precision: Some(6),
                time_zone: Some(TimeZoneKind::WithLocalTimeZone),
            }
        );
        assert_eq!(
            type_in(Dialect::Oracle, "INTERVAL DAY(2) TO SECOND(6)"),
            DataType::IntervalDayToSecond(Some(2), Some(6))
        );
        assert_eq!(
            type_in(Dialect::MySql, "ENUM('a', 'b')"),
            DataType::Enum(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(
            type_in(Dialect::MySql, "DOUBLE PRECISION"),
            DataType::Float {
                kind: FloatKind::Double,
                precision: None,
                scale: None,
                unsigned: false,
            }
        );
    }

    #[test]
    fn test_expression_display_round_trip() {
        for sql in [
            "a + b * c",
            "NOT (a = 1) OR b IS NULL",
            "CASE WHEN a > 1 THEN 'x' ELSE 'y' END",
            "x BETWEEN 1 AND 10",
            "f(a, b) + g()",
            "-(a + 1)",
        ] {
            let first = my(sql);
            let second = my(&first.to_string());
            assert_eq!(first.to_string(), second.to_string(), "{sql}");
        }
    }

    #[test]
    fn test_missing_operand_reports_operator_position() {
        let mut p = Parser::from_sql("1 + * 2", ParserConfig::new(Dialect::MySql));
        let err = p.parse_expr().unwrap_err();
        assert_eq!(err.message(), "expected expression after binary operator");
        assert_eq!(err.position().unwrap().offset, 4);
    }
}
