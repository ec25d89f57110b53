// Queries: WITH, compound bodies, query specifications, FROM clauses with
// joins, hierarchical queries, grouping, windows and row limiting.

use duosql_ast::{
    ColumnRef, CompoundOp, Cte, Expr, FetchClause, ForUpdate, FrameBound, FrameSpec, FrameUnits,
    GroupBy, GroupingElement, HierarchicalClause, Ident, IndexHint, IndexHintKind, JoinConstraint,
    JoinKind, JoinOperator, LimitClause, LockWait, NamedWindow, NullsOrder, OrderingTerm,
    QualifiedName, QuerySpec, SelectBody, SelectCore, SelectItem, SelectStatement, SortDirection,
    TableRef, WindowSpec, WithClause,
};

use super::{PResult, Parser};
use crate::dialect::Dialect;
use crate::token::{Keyword, TokenKind};

impl Parser {
    /// A full query: `[WITH ...] body [ORDER BY] [LIMIT] [OFFSET/FETCH]
    /// [FOR UPDATE]`.
    pub(crate) fn parse_query(&mut self) -> PResult<SelectStatement> {
        self.nested(|p| {
            let start = p.start();
            let with = if p.check_kw(Keyword::With) {
                Some(p.parse_with()?)
            } else {
                None
            };
            let body = p.parse_select_body()?;
            let order_by = if p.check_kw(Keyword::Order) {
                p.parse_order_by_clause()?
            } else {
                Vec::new()
            };
            let limit = if p.check_kw(Keyword::Limit) {
                Some(p.parse_limit()?)
            } else {
                None
            };
            let fetch = p.parse_fetch()?;
            let for_update = if p.check_kw(Keyword::For) && p.is_kw_at(1, Keyword::Update) {
                Some(p.parse_for_update()?)
            } else {
                None
            };
            Ok(SelectStatement {
                with,
                body,
                order_by,
                limit,
                fetch,
                for_update,
                span: p.span_from(start),
            })
        })
    }

    fn parse_with(&mut self) -> PResult<WithClause> {
        let start = self.start();
        self.expect_kw(Keyword::With)?;
        let recursive = self.eat_kw(Keyword::Recursive);
        let ctes = self.parse_comma_list(|p| {
            let start = p.start();
            let name = p.parse_ident()?;
            let columns = if p.check(&TokenKind::LeftParen) {
                p.parse_paren_list(Self::parse_ident)?
            } else {
                Vec::new()
            };
            p.expect_kw(Keyword::As)?;
            p.expect(&TokenKind::LeftParen)?;
            let query = p.parse_query()?;
            p.expect(&TokenKind::RightParen)?;
            Ok(Cte {
                name,
                columns,
                query: Box::new(query),
                span: p.span_from(start),
            })
        })?;
        Ok(WithClause {
            recursive,
            ctes,
            span: self.span_from(start),
        })
    }

    fn parse_select_body(&mut self) -> PResult<SelectBody> {
        let select = self.parse_select_core()?;
        let mut compounds = Vec::new();
        loop {
            let op = if self.eat_kw(Keyword::Union) {
                if self.eat_kw(Keyword::All) {
                    CompoundOp::UnionAll
                } else {
                    self.eat_kw(Keyword::Distinct);
                    CompoundOp::Union
                }
            } else if self.eat_kw(Keyword::Intersect) {
                CompoundOp::Intersect
            } else if self.eat_kw(Keyword::Except) {
                CompoundOp::Except
            } else if self.eat_kw(Keyword::Minus) {
                CompoundOp::Minus
            } else {
                break;
            };
            compounds.push((op, self.parse_select_core()?));
        }
        Ok(SelectBody { select, compounds })
    }

    fn parse_select_core(&mut self) -> PResult<SelectCore> {
        if self.eat(&TokenKind::LeftParen) {
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(SelectCore::Nested(Box::new(query)));
        }
        Ok(SelectCore::Select(Box::new(self.parse_query_spec()?)))
    }

    fn parse_query_spec(&mut self) -> PResult<QuerySpec> {
        let start = self.start();
        self.expect_kw(Keyword::Select)?;
        let hints = self.parse_hint_section();
        let distinct = if self.eat_kw(Keyword::Distinct) || self.eat_kw(Keyword::Unique) {
            true
        } else {
            self.eat_kw(Keyword::All);
            false
        };
        let columns = self.parse_comma_list(Self::parse_select_item)?;
        let into = if self.eat_kw(Keyword::Into) {
            self.parse_comma_list(Self::parse_expr)?
        } else {
            Vec::new()
        };
        let from = if self.eat_kw(Keyword::From) {
            self.parse_comma_list(Self::parse_table_ref)?
        } else {
            Vec::new()
        };
        let where_clause = self.parse_where()?;
        let hierarchical = self.parse_hierarchical()?;
        let group_by = self.parse_group_by()?;
        let having = if self.eat_kw(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let windows = if self.eat_kw(Keyword::Window) {
            self.parse_comma_list(|p| {
                let name = p.parse_ident()?;
                p.expect_kw(Keyword::As)?;
                let spec = p.parse_window_spec()?;
                Ok(NamedWindow { name, spec })
            })?
        } else {
            Vec::new()
        };
        Ok(QuerySpec {
            hints,
            distinct,
            columns,
            into,
            from,
            where_clause,
            hierarchical,
            group_by,
            having,
            windows,
            span: self.span_from(start),
        })
    }

    // ------------------------------------------------------------------
    // Select items and aliases
    // ------------------------------------------------------------------

    pub(crate) fn parse_select_item(&mut self) -> PResult<SelectItem> {
        let start = self.start();
        if self.eat(&TokenKind::Star) {
            return Ok(SelectItem::Wildcard(self.span_from(start)));
        }
        if self.is_ident_at(0) && matches!(self.peek_nth(1), TokenKind::Dot) {
            if matches!(self.peek_nth(2), TokenKind::Star) {
                let name = self.parse_ident()?;
                self.advance();
                self.advance();
                return Ok(SelectItem::QualifiedWildcard(
                    QualifiedName {
                        schema: None,
                        name,
                        dblink: None,
                    },
                    self.span_from(start),
                ));
            }
            if self.is_ident_at(2)
                && matches!(self.peek_nth(3), TokenKind::Dot)
                && matches!(self.peek_nth(4), TokenKind::Star)
            {
                let schema = self.parse_ident()?;
                self.advance();
                let name = self.parse_ident()?;
                self.advance();
                self.advance();
                return Ok(SelectItem::QualifiedWildcard(
                    QualifiedName {
                        schema: Some(schema),
                        name,
                        dblink: None,
                    },
                    self.span_from(start),
                ));
            }
        }
        let expr = self.parse_expr()?;
        let alias = self.parse_alias()?;
        Ok(SelectItem::Expr {
            expr,
            alias,
            span: self.span_from(start),
        })
    }

    /// `[AS] alias`. After AS a string literal is accepted as the name.
    pub(crate) fn parse_alias(&mut self) -> PResult<Option<Ident>> {
        if self.eat_kw(Keyword::As) {
            if let TokenKind::String(s) = self.peek() {
                let ident = Ident::quoted(s.clone());
                self.advance();
                return Ok(Some(ident));
            }
            return self.parse_ident().map(Some);
        }
        if self.alias_at() {
            return self.parse_ident().map(Some);
        }
        Ok(None)
    }

    /// Whether the current token can be an implicit alias: an identifier
    /// that does not open a following clause.
    pub(crate) fn alias_at(&self) -> bool {
        if !self.is_ident_at(0) {
            return false;
        }
        match self.peek() {
            TokenKind::Keyword(kw) => !matches!(
                kw,
                Keyword::Start
                    | Keyword::Window
                    | Keyword::Fetch
                    | Keyword::Offset
                    | Keyword::Returning
                    | Keyword::Partition
                    | Keyword::Use
                    | Keyword::Force
                    | Keyword::Ignore
                    | Keyword::Lock
                    | Keyword::Over
            ),
            _ => true,
        }
    }

    // ------------------------------------------------------------------
    // FROM clause
    // ------------------------------------------------------------------

    /// A table factor followed by any number of joins.
    pub(crate) fn parse_table_ref(&mut self) -> PResult<TableRef> {
        self.nested(|p| {
            let mut left = p.parse_table_factor()?;
            while let Some(op) = p.parse_join_operator()? {
                let start = left.span().start;
                let right = p.parse_table_factor()?;
                let constraint = if op.natural || op.kind == JoinKind::Cross {
                    None
                } else if p.eat_kw(Keyword::On) {
                    Some(JoinConstraint::On(p.parse_expr()?))
                } else if p.eat_kw(Keyword::Using) {
                    Some(JoinConstraint::Using(p.parse_paren_list(Self::parse_ident)?))
                } else {
                    None
                };
                left = TableRef::Join {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                    constraint,
                    span: p.span_from(start),
                };
            }
            Ok(left)
        })
    }

    fn parse_join_operator(&mut self) -> PResult<Option<JoinOperator>> {
        let natural = self.eat_kw(Keyword::Natural);
        let kind = if self.eat_kw(Keyword::Join) {
            return Ok(Some(JoinOperator {
                natural,
                kind: JoinKind::Inner,
            }));
        } else if self.eat_kw(Keyword::Inner) {
            JoinKind::Inner
        } else if self.eat_kw(Keyword::Cross) {
            JoinKind::Cross
        } else if self.eat_kw(Keyword::Left) {
            self.eat_kw(Keyword::Outer);
            JoinKind::Left
        } else if self.eat_kw(Keyword::Right) {
            self.eat_kw(Keyword::Outer);
            JoinKind::Right
        } else if self.eat_kw(Keyword::Full) {
            self.eat_kw(Keyword::Outer);
            JoinKind::Full
        } else if natural {
            return Err(self.error_expected("JOIN"));
        } else {
            return Ok(None);
        };
        self.expect_kw(Keyword::Join)?;
        Ok(Some(JoinOperator { natural, kind }))
    }

    pub(crate) fn parse_table_factor(&mut self) -> PResult<TableRef> {
        let start = self.start();
        if self.check(&TokenKind::LeftParen) {
            if self.query_behind_parens() && !self.no_query_at.contains(&self.pos) {
                let at = self.pos;
                let query = self.speculate(|p| {
                    p.advance();
                    let query = p.parse_query()?;
                    p.expect(&TokenKind::RightParen)?;
                    Ok(query)
                })?;
                if let Some(query) = query {
                    let alias = self.parse_alias()?;
                    return Ok(TableRef::Subquery {
                        query: Box::new(query),
                        alias,
                        span: self.span_from(start),
                    });
                }
                self.no_query_at.insert(at);
            }
            self.advance();
            let inner = self.parse_table_ref()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(TableRef::Nested {
                inner: Box::new(inner),
                span: self.span_from(start),
            });
        }

        let name = self.parse_qualified_name()?;
        let partitions = if self.check_kw(Keyword::Partition)
            && matches!(self.peek_nth(1), TokenKind::LeftParen)
        {
            self.advance();
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        let alias = self.parse_alias()?;
        let mut index_hints = Vec::new();
        if self.dialect() == Dialect::MySql {
            while let Some(hint) = self.parse_index_hint()? {
                index_hints.push(hint);
            }
        }
        Ok(TableRef::Table {
            name,
            partitions,
            alias,
            index_hints,
            span: self.span_from(start),
        })
    }

    /// MySQL `USE|FORCE|IGNORE {INDEX|KEY} (names)`.
    fn parse_index_hint(&mut self) -> PResult<Option<IndexHint>> {
        let kind = match self.peek() {
            TokenKind::Keyword(Keyword::Use) => IndexHintKind::Use,
            TokenKind::Keyword(Keyword::Force) => IndexHintKind::Force,
            TokenKind::Keyword(Keyword::Ignore) => IndexHintKind::Ignore,
            _ => return Ok(None),
        };
        if !(self.is_kw_at(1, Keyword::Index) || self.is_kw_at(1, Keyword::Key)) {
            return Ok(None);
        }
        self.advance();
        self.advance();
        let names = self.parse_paren_list(Self::parse_ident)?;
        Ok(Some(IndexHint { kind, names }))
    }

    // ------------------------------------------------------------------
    // Hierarchical queries and grouping
    // ------------------------------------------------------------------

    /// Oracle `[START WITH cond] CONNECT BY [NOCYCLE] cond`, in either order.
    fn parse_hierarchical(&mut self) -> PResult<Option<HierarchicalClause>> {
        if self.dialect() != Dialect::Oracle {
            return Ok(None);
        }
        let start = self.start();
        let mut start_with = self.parse_start_with()?;
        if !(self.check_kw(Keyword::Connect) && self.is_kw_at(1, Keyword::By)) {
            if start_with.is_some() {
                return Err(self.error_expected("CONNECT BY"));
            }
            return Ok(None);
        }
        self.advance();
        self.advance();
        let nocycle = self.eat_kw(Keyword::NoCycle);
        let connect_by = self.parse_expr()?;
        if start_with.is_none() {
            start_with = self.parse_start_with()?;
        }
        Ok(Some(HierarchicalClause {
            start_with,
            nocycle,
            connect_by,
            span: self.span_from(start),
        }))
    }

    fn parse_start_with(&mut self) -> PResult<Option<Expr>> {
        if self.check_kw(Keyword::Start) && self.is_kw_at(1, Keyword::With) {
            self.advance();
            self.advance();
            return Ok(Some(self.parse_expr()?));
        }
        Ok(None)
    }

    fn parse_group_by(&mut self) -> PResult<Option<GroupBy>> {
        if !(self.check_kw(Keyword::Group) && self.is_kw_at(1, Keyword::By)) {
            return Ok(None);
        }
        let start = self.start();
        self.advance();
        self.advance();
        let items = self.parse_comma_list(Self::parse_grouping_element)?;
        let with_rollup = self.dialect() == Dialect::MySql
            && self.check_kw(Keyword::With)
            && self.is_word_at(1, "ROLLUP");
        if with_rollup {
            self.advance();
            self.advance();
        }
        Ok(Some(GroupBy {
            items,
            with_rollup,
            span: self.span_from(start),
        }))
    }

    fn parse_grouping_element(&mut self) -> PResult<GroupingElement> {
        let paren_next = matches!(self.peek_nth(1), TokenKind::LeftParen);
        if paren_next && self.is_word_at(0, "ROLLUP") {
            self.advance();
            return Ok(GroupingElement::Rollup(
                self.parse_paren_list(Self::parse_expr)?,
            ));
        }
        if paren_next && self.is_word_at(0, "CUBE") {
            self.advance();
            return Ok(GroupingElement::Cube(self.parse_paren_list(Self::parse_expr)?));
        }
        if self.is_word_at(0, "GROUPING")
            && self.is_word_at(1, "SETS")
            && matches!(self.peek_nth(2), TokenKind::LeftParen)
        {
            self.advance();
            self.advance();
            let sets = self.parse_paren_list(|p| {
                if p.eat(&TokenKind::LeftParen) {
                    if p.eat(&TokenKind::RightParen) {
                        return Ok(Vec::new());
                    }
                    let set = p.parse_comma_list(Self::parse_expr)?;
                    p.expect(&TokenKind::RightParen)?;
                    Ok(set)
                } else {
                    Ok(vec![p.parse_expr()?])
                }
            })?;
            return Ok(GroupingElement::GroupingSets(sets));
        }
        Ok(GroupingElement::Expr(self.parse_expr()?))
    }

    // ------------------------------------------------------------------
    // Windows and ordering
    // ------------------------------------------------------------------

    /// `( [base] [PARTITION BY ...] [ORDER BY ...] [frame] )`
    pub(crate) fn parse_window_spec(&mut self) -> PResult<WindowSpec> {
        let start = self.start();
        self.expect(&TokenKind::LeftParen)?;
        let base = if self.is_ident_at(0)
            && !matches!(
                self.peek(),
                TokenKind::Keyword(Keyword::Partition | Keyword::Rows | Keyword::Range)
            ) {
            Some(self.parse_ident()?)
        } else {
            None
        };
        let partition_by = if self.check_kw(Keyword::Partition) && self.is_kw_at(1, Keyword::By) {
            self.advance();
            self.advance();
            self.parse_comma_list(Self::parse_expr)?
        } else {
            Vec::new()
        };
        let order_by = if self.check_kw(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            Vec::new()
        };
        let units = if self.eat_kw(Keyword::Rows) {
            Some(FrameUnits::Rows)
        } else if self.eat_kw(Keyword::Range) {
            Some(FrameUnits::Range)
        } else {
            None
        };
        let frame = match units {
            Some(units) => {
                if self.eat_kw(Keyword::Between) {
                    let start = self.parse_frame_bound()?;
                    self.expect_kw(Keyword::And)?;
                    let end = self.parse_frame_bound()?;
                    Some(FrameSpec {
                        units,
                        start,
                        end: Some(end),
                    })
                } else {
                    Some(FrameSpec {
                        units,
                        start: self.parse_frame_bound()?,
                        end: None,
                    })
                }
            }
            None => None,
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(WindowSpec {
            base,
            partition_by,
            order_by,
            frame,
            span: self.span_from(start),
        })
    }

    fn parse_frame_bound(&mut self) -> PResult<FrameBound> {
        if self.eat_kw(Keyword::Unbounded) {
            if self.eat_kw(Keyword::Preceding) {
                return Ok(FrameBound::UnboundedPreceding);
            }
            self.expect_kw(Keyword::Following)?;
            return Ok(FrameBound::UnboundedFollowing);
        }
        if self.eat_kw(Keyword::Current) {
            self.expect_kw(Keyword::Row)?;
            return Ok(FrameBound::CurrentRow);
        }
        let offset = Box::new(self.parse_expr()?);
        if self.eat_kw(Keyword::Preceding) {
            Ok(FrameBound::Preceding(offset))
        } else {
            self.expect_kw(Keyword::Following)?;
            Ok(FrameBound::Following(offset))
        }
    }

    /// `ORDER BY term, ...`
    pub(crate) fn parse_order_by_clause(&mut self) -> PResult<Vec<OrderingTerm>> {
        self.expect_kw(Keyword::Order)?;
        self.expect_kw(Keyword::By)?;
        self.parse_comma_list(Self::parse_ordering_term)
    }

    fn parse_ordering_term(&mut self) -> PResult<OrderingTerm> {
        let start = self.start();
        let expr = self.parse_expr()?;
        let direction = if self.eat_kw(Keyword::Asc) {
            Some(SortDirection::Asc)
        } else if self.eat_kw(Keyword::Desc) {
            Some(SortDirection::Desc)
        } else {
            None
        };
        let nulls = if self.eat_kw(Keyword::Nulls) {
            if self.eat_kw(Keyword::First) {
                Some(NullsOrder::First)
            } else {
                self.expect_kw(Keyword::Last)?;
                Some(NullsOrder::Last)
            }
        } else {
            None
        };
        Ok(OrderingTerm {
            expr,
            direction,
            nulls,
            span: self.span_from(start),
        })
    }

    // ------------------------------------------------------------------
    // Row limiting and locking
    // ------------------------------------------------------------------

    /// MySQL `LIMIT n [OFFSET m]` or `LIMIT m, n`.
    pub(crate) fn parse_limit(&mut self) -> PResult<LimitClause> {
        let start = self.start();
        self.expect_kw(Keyword::Limit)?;
        let first = self.parse_expr()?;
        let (limit, offset) = if self.eat(&TokenKind::Comma) {
            let count = self.parse_expr()?;
            (count, Some(first))
        } else if self.eat_kw(Keyword::Offset) {
            (first, Some(self.parse_expr()?))
        } else {
            (first, None)
        };
        Ok(LimitClause {
            limit,
            offset,
            span: self.span_from(start),
        })
    }

    /// Oracle `[OFFSET n ROWS] [FETCH FIRST|NEXT n [PERCENT] ROWS ONLY|WITH TIES]`.
    fn parse_fetch(&mut self) -> PResult<Option<FetchClause>> {
        if self.dialect() != Dialect::Oracle {
            return Ok(None);
        }
        let start = self.start();
        let offset = if self.eat_kw(Keyword::Offset) {
            let offset = self.parse_expr()?;
            self.expect_row_word()?;
            Some(offset)
        } else {
            None
        };
        let mut count = None;
        let mut percent = false;
        let mut with_ties = false;
        if self.eat_kw(Keyword::Fetch) {
            if !self.eat_kw(Keyword::First) {
                self.expect_word("NEXT")?;
            }
            count = Some(self.parse_expr()?);
            percent = self.eat_word("PERCENT");
            self.expect_row_word()?;
            if self.eat_kw(Keyword::With) {
                self.expect_kw(Keyword::Ties)?;
                with_ties = true;
            } else {
                self.expect_kw(Keyword::Only)?;
            }
        }
        if offset.is_none() && count.is_none() {
            return Ok(None);
        }
        Ok(Some(FetchClause {
            offset,
            count,
            percent,
            with_ties,
            span: self.span_from(start),
        }))
    }

    /// `ROW` or `ROWS`.
    fn expect_row_word(&mut self) -> PResult<()> {
        if !self.eat_kw(Keyword::Rows) {
            self.expect_kw(Keyword::Row)?;
        }
        Ok(())
    }

    fn parse_for_update(&mut self) -> PResult<ForUpdate> {
        let start = self.start();
        self.expect_kw(Keyword::For)?;
        self.expect_kw(Keyword::Update)?;
        let of = if self.eat_kw(Keyword::Of) {
            self.parse_comma_list(Self::parse_column_ref)?
        } else {
            Vec::new()
        };
        let wait = if self.eat_word("NOWAIT") {
            Some(LockWait::NoWait)
        } else if self.eat_word("WAIT") {
            Some(LockWait::Wait(self.parse_expr()?))
        } else if self.eat_words(&["SKIP", "LOCKED"]) {
            Some(LockWait::SkipLocked)
        } else {
            None
        };
        Ok(ForUpdate {
            of,
            wait,
            span: self.span_from(start),
        })
    }

    /// `[[schema.]table.]column`
    pub(crate) fn parse_column_ref(&mut self) -> PResult<ColumnRef> {
        let mut parts = vec![self.parse_ident()?];
        while parts.len() < 3 && self.check(&TokenKind::Dot) {
            self.advance();
            parts.push(self.parse_word_ident());
        }
        let column = parts.pop().unwrap_or_else(|| Ident::new(""));
        let table = parts.pop();
        let schema = parts.pop();
        Ok(ColumnRef {
            schema,
            table,
            column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::{mysql, oracle, round_trip_in};
    use duosql_ast::Statement;

    fn select(stmt: &Statement) -> &SelectStatement {
        let Statement::Select(s) = stmt else {
            unreachable!("expected SELECT, got {stmt:?}")
        };
        s
    }

    fn spec(s: &SelectStatement) -> &QuerySpec {
        let SelectCore::Select(ref q) = s.body.select else {
            unreachable!("expected a query specification")
        };
        q
    }

    #[test]
    fn test_basic_select_clauses() {
        let stmt = mysql("SELECT DISTINCT a, b AS x, c y FROM t WHERE a > 1 GROUP BY a HAVING COUNT(*) > 1 ORDER BY a DESC LIMIT 10 OFFSET 5");
        let s = select(&stmt);
        let q = spec(s);
        assert!(q.distinct);
        assert_eq!(q.columns.len(), 3);
        let SelectItem::Expr { alias, .. } = &q.columns[2] else {
            unreachable!()
        };
        assert_eq!(alias.as_ref().unwrap().value, "y");
        assert!(q.where_clause.is_some());
        assert!(q.group_by.is_some());
        assert!(q.having.is_some());
        assert_eq!(s.order_by[0].direction, Some(SortDirection::Desc));
        assert!(s.limit.as_ref().unwrap().offset.is_some());
    }

    #[test]
    fn test_mysql_limit_comma_form() {
        let stmt = mysql("SELECT a FROM t LIMIT 5, 10");
        let limit = select(&stmt).limit.as_ref().unwrap();
        assert_eq!(limit.limit.to_string(), "10");
        assert_eq!(limit.offset.as_ref().unwrap().to_string(), "5");
    }

    #[test]
    fn test_wildcards() {
        let stmt = mysql("SELECT *, t.*, s.t.* FROM s.t");
        let q = spec(select(&stmt));
        assert!(matches!(q.columns[0], SelectItem::Wildcard(_)));
        assert!(matches!(q.columns[1], SelectItem::QualifiedWildcard(ref n, _) if n.schema.is_none()));
        assert!(matches!(q.columns[2], SelectItem::QualifiedWildcard(ref n, _) if n.schema.is_some()));
    }

    #[test]
    fn test_joins() {
        let stmt = mysql(
            "SELECT * FROM a JOIN b ON a.id = b.id LEFT OUTER JOIN c USING (id) \
             CROSS JOIN d NATURAL JOIN e",
        );
        let q = spec(select(&stmt));
        assert_eq!(q.from.len(), 1);
        let TableRef::Join { op, left, .. } = &q.from[0] else {
            unreachable!()
        };
        assert!(op.natural);
        let TableRef::Join { op, constraint, .. } = left.as_ref() else {
            unreachable!()
        };
        assert_eq!(op.kind, JoinKind::Cross);
        assert!(constraint.is_none());
    }

    #[test]
    fn test_table_factor_forms() {
        let stmt = mysql(
            "SELECT * FROM t PARTITION (p0) AS x USE INDEX (i1), (SELECT 1) d, (a JOIN b ON TRUE)",
        );
        let q = spec(select(&stmt));
        let TableRef::Table {
            partitions,
            alias,
            index_hints,
            ..
        } = &q.from[0]
        else {
            unreachable!()
        };
        assert_eq!(partitions.len(), 1);
        assert_eq!(alias.as_ref().unwrap().value, "x");
        assert_eq!(index_hints[0].kind, IndexHintKind::Use);
        assert!(matches!(q.from[1], TableRef::Subquery { .. }));
        assert!(matches!(q.from[2], TableRef::Nested { .. }));
    }

    #[test]
    fn test_compound_queries() {
        let stmt = oracle("SELECT a FROM t UNION ALL SELECT b FROM u MINUS (SELECT c FROM v)");
        let body = &select(&stmt).body;
        assert_eq!(body.compounds.len(), 2);
        assert_eq!(body.compounds[0].0, CompoundOp::UnionAll);
        assert_eq!(body.compounds[1].0, CompoundOp::Minus);
        assert!(matches!(body.compounds[1].1, SelectCore::Nested(_)));
    }

    #[test]
    fn test_with_clause() {
        let stmt = mysql("WITH RECURSIVE r (n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT n FROM r");
        let with = select(&stmt).with.as_ref().unwrap();
        assert!(with.recursive);
        assert_eq!(with.ctes[0].columns.len(), 1);
    }

    #[test]
    fn test_hierarchical_query() {
        let stmt = oracle(
            "SELECT LEVEL, ename FROM emp START WITH mgr IS NULL \
             CONNECT BY NOCYCLE PRIOR empno = mgr",
        );
        let h = spec(select(&stmt)).hierarchical.as_ref().unwrap();
        assert!(h.start_with.is_some());
        assert!(h.nocycle);
        let stmt = oracle("SELECT 1 FROM emp CONNECT BY PRIOR empno = mgr START WITH mgr IS NULL");
        assert!(spec(select(&stmt))
            .hierarchical
            .as_ref()
            .unwrap()
            .start_with
            .is_some());
    }

    #[test]
    fn test_grouping_forms() {
        let stmt = mysql("SELECT a, SUM(b) FROM t GROUP BY a WITH ROLLUP");
        assert!(spec(select(&stmt)).group_by.as_ref().unwrap().with_rollup);
        let stmt = oracle("SELECT a FROM t GROUP BY ROLLUP (a, b), GROUPING SETS ((a, b), c, ())");
        let items = &spec(select(&stmt)).group_by.as_ref().unwrap().items;
        assert!(matches!(items[0], GroupingElement::Rollup(ref v) if v.len() == 2));
        assert!(matches!(items[1], GroupingElement::GroupingSets(ref v) if v.len() == 3 && v[2].is_empty()));
    }

    #[test]
    fn test_windows() {
        let stmt = mysql(
            "SELECT SUM(x) OVER w, ROW_NUMBER() OVER (PARTITION BY a ORDER BY b \
             ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) FROM t WINDOW w AS (ORDER BY a)",
        );
        let q = spec(select(&stmt));
        assert_eq!(q.windows.len(), 1);
        let SelectItem::Expr {
            expr: Expr::Function(f),
            ..
        } = &q.columns[1]
        else {
            unreachable!()
        };
        let Some(duosql_ast::WindowRef::Spec(spec)) = &f.over else {
            unreachable!()
        };
        let frame = spec.frame.as_ref().unwrap();
        assert_eq!(frame.start, FrameBound::UnboundedPreceding);
        assert_eq!(frame.end, Some(FrameBound::CurrentRow));
    }

    #[test]
    fn test_oracle_fetch_and_locking() {
        let stmt = oracle(
            "SELECT a FROM t ORDER BY a OFFSET 5 ROWS FETCH NEXT 10 PERCENT ROWS WITH TIES",
        );
        let fetch = select(&stmt).fetch.as_ref().unwrap();
        assert!(fetch.offset.is_some());
        assert!(fetch.percent);
        assert!(fetch.with_ties);
        let stmt = oracle("SELECT a FROM t FOR UPDATE OF t.a SKIP LOCKED");
        let lock = select(&stmt).for_update.as_ref().unwrap();
        assert_eq!(lock.of.len(), 1);
        assert_eq!(lock.wait, Some(LockWait::SkipLocked));
    }

    #[test]
    fn test_select_into_and_dual() {
        let stmt = mysql("SELECT a INTO @x FROM t");
        assert_eq!(spec(select(&stmt)).into.len(), 1);
        let stmt = oracle("SELECT SYSDATE FROM DUAL");
        assert_eq!(spec(select(&stmt)).from.len(), 1);
    }

    #[test]
    fn test_clause_words_are_not_aliases() {
        let stmt = oracle("SELECT a FROM t START WITH a = 1 CONNECT BY PRIOR a = b");
        let TableRef::Table { alias, .. } = &spec(select(&stmt)).from[0] else {
            unreachable!()
        };
        assert!(alias.is_none());
    }

    #[test]
    fn test_query_round_trips() {
        round_trip_in(
            "SELECT a, COUNT(*) AS n FROM t1 LEFT JOIN t2 ON t1.id = t2.id \
             WHERE x IN (1, 2) GROUP BY a ORDER BY n DESC LIMIT 3",
            Dialect::MySql,
        );
        round_trip_in(
            "SELECT ename FROM emp START WITH mgr IS NULL CONNECT BY PRIOR empno = mgr \
             ORDER BY ename FETCH FIRST 5 ROWS ONLY",
            Dialect::Oracle,
        );
        round_trip_in(
            "WITH c AS (SELECT 1 AS x) SELECT x FROM c UNION SELECT 2",
            Dialect::MySql,
        );
    }

    #[test]
    fn test_span_covers_statement() {
        let stmt = mysql("SELECT a FROM t WHERE b = 1");
        assert_eq!(stmt.span(), duosql_ast::Span::new(0, 27));
    }
}
