// INSERT / REPLACE, UPDATE, DELETE and MERGE.

use duosql_ast::{
    Assignment, DeleteStatement, InsertSource, InsertStatement, MergeClause, MergeStatement,
    ReturningClause, UpdateStatement,
};

use super::{PResult, Parser};
use crate::token::{Keyword, TokenKind};

impl Parser {
    /// `INSERT|REPLACE [hint] [IGNORE] [INTO] table [PARTITION (...)] [alias]
    /// [(columns)] {VALUES rows | query | SET assignments}
    /// [ON DUPLICATE KEY UPDATE ...] [RETURNING ...]`
    pub(crate) fn parse_insert(&mut self) -> PResult<InsertStatement> {
        let start = self.start();
        let replace = if self.eat_kw(Keyword::Replace) {
            true
        } else {
            self.expect_kw(Keyword::Insert)?;
            false
        };
        let hints = self.parse_hint_section();
        let ignore = self.eat_kw(Keyword::Ignore);
        self.eat_kw(Keyword::Into);
        let table = self.parse_qualified_name()?;
        let partitions = if self.check_kw(Keyword::Partition)
            && matches!(self.peek_nth(1), TokenKind::LeftParen)
        {
            self.advance();
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        let alias = if self.alias_at() && !self.is_word_at(0, "VALUE") {
            Some(self.parse_ident()?)
        } else {
            None
        };
        let columns = if self.check(&TokenKind::LeftParen) && !self.query_behind_parens() {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };

        let source = if self.eat_kw(Keyword::Values) || self.eat_word("VALUE") {
            InsertSource::Values(self.parse_comma_list(|p| {
                p.expect(&TokenKind::LeftParen)?;
                if p.eat(&TokenKind::RightParen) {
                    return Ok(Vec::new());
                }
                let row = p.parse_comma_list(Self::parse_expr)?;
                p.expect(&TokenKind::RightParen)?;
                Ok(row)
            })?)
        } else if self.eat_kw(Keyword::Set) {
            InsertSource::Set(self.parse_comma_list(Self::parse_assignment)?)
        } else if self.check_kw(Keyword::Select)
            || self.check_kw(Keyword::With)
            || self.query_behind_parens()
        {
            InsertSource::Select(Box::new(self.parse_query()?))
        } else {
            return Err(self.error_expected("VALUES, SET or a query"));
        };

        let on_duplicate = if self.check_kw(Keyword::On) && self.is_kw_at(1, Keyword::Duplicate) {
            self.advance();
            self.advance();
            self.expect_kw(Keyword::Key)?;
            self.expect_kw(Keyword::Update)?;
            self.parse_comma_list(Self::parse_assignment)?
        } else {
            Vec::new()
        };
        let returning = self.parse_returning()?;
        Ok(InsertStatement {
            hints,
            replace,
            ignore,
            table,
            partitions,
            alias,
            columns,
            source,
            on_duplicate,
            returning,
            span: self.span_from(start),
        })
    }

    /// `UPDATE [hint] [IGNORE] table_refs SET assignments [WHERE ...]
    /// [ORDER BY ...] [LIMIT ...] [RETURNING ...]`
    pub(crate) fn parse_update(&mut self) -> PResult<UpdateStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Update)?;
        let hints = self.parse_hint_section();
        let ignore = self.eat_kw(Keyword::Ignore);
        let tables = self.parse_comma_list(Self::parse_table_ref)?;
        self.expect_kw(Keyword::Set)?;
        let assignments = self.parse_comma_list(Self::parse_assignment)?;
        let where_clause = self.parse_where()?;
        let order_by = if self.check_kw(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            Vec::new()
        };
        let limit = if self.check_kw(Keyword::Limit) {
            Some(self.parse_limit()?)
        } else {
            None
        };
        let returning = self.parse_returning()?;
        Ok(UpdateStatement {
            hints,
            ignore,
            tables,
            assignments,
            where_clause,
            order_by,
            limit,
            returning,
            span: self.span_from(start),
        })
    }

    /// `DELETE [hint] [FROM] table_ref [WHERE ...] [ORDER BY ...] [LIMIT ...]
    /// [RETURNING ...]`
    pub(crate) fn parse_delete(&mut self) -> PResult<DeleteStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Delete)?;
        let hints = self.parse_hint_section();
        self.eat_kw(Keyword::From);
        let table = self.parse_table_ref()?;
        let where_clause = self.parse_where()?;
        let order_by = if self.check_kw(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            Vec::new()
        };
        let limit = if self.check_kw(Keyword::Limit) {
            Some(self.parse_limit()?)
        } else {
            None
        };
        let returning = self.parse_returning()?;
        Ok(DeleteStatement {
            hints,
            table,
            where_clause,
            order_by,
            limit,
            returning,
            span: self.span_from(start),
        })
    }

    /// `MERGE [hint] INTO target [alias] USING source ON (cond)
    /// {WHEN MATCHED THEN UPDATE ... | WHEN NOT MATCHED THEN INSERT ...}...`
    pub(crate) fn parse_merge(&mut self) -> PResult<MergeStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Merge)?;
        let hints = self.parse_hint_section();
        self.expect_kw(Keyword::Into)?;
        let target = self.parse_qualified_name()?;
        let target_alias = self.parse_alias()?;
        self.expect_kw(Keyword::Using)?;
        let source = self.parse_table_factor()?;
        self.expect_kw(Keyword::On)?;
        self.expect(&TokenKind::LeftParen)?;
        let on = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;

        let mut clauses = Vec::new();
        while self.check_kw(Keyword::When) {
            clauses.push(self.parse_merge_clause()?);
        }
        if clauses.is_empty() {
            return Err(self.error_expected("WHEN"));
        }
        Ok(MergeStatement {
            hints,
            target,
            target_alias,
            source,
            on,
            clauses,
            span: self.span_from(start),
        })
    }

    fn parse_merge_clause(&mut self) -> PResult<MergeClause> {
        let start = self.start();
        self.expect_kw(Keyword::When)?;
        let matched = !self.eat_kw(Keyword::Not);
        self.expect_word("MATCHED")?;
        self.expect_kw(Keyword::Then)?;
        if matched {
            self.expect_kw(Keyword::Update)?;
            self.expect_kw(Keyword::Set)?;
            let assignments = self.parse_comma_list(Self::parse_assignment)?;
            let where_clause = self.parse_where()?;
            let delete_where = if self.check_kw(Keyword::Delete) && self.is_kw_at(1, Keyword::Where)
            {
                self.advance();
                self.advance();
                Some(self.parse_expr()?)
            } else {
                None
            };
            return Ok(MergeClause::Update {
                assignments,
                where_clause,
                delete_where,
                span: self.span_from(start),
            });
        }
        self.expect_kw(Keyword::Insert)?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        self.expect_kw(Keyword::Values)?;
        let values = self.parse_paren_list(Self::parse_expr)?;
        let where_clause = self.parse_where()?;
        Ok(MergeClause::Insert {
            columns,
            values,
            where_clause,
            span: self.span_from(start),
        })
    }

    /// `column = expr`
    pub(crate) fn parse_assignment(&mut self) -> PResult<Assignment> {
        let start = self.start();
        let target = self.parse_column_ref()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment {
            target,
            value,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_where(&mut self) -> PResult<Option<duosql_ast::Expr>> {
        if self.eat_kw(Keyword::Where) {
            Ok(Some(self.parse_expr()?))
        } else {
            Ok(None)
        }
    }

    /// `RETURNING items [INTO targets]`
    fn parse_returning(&mut self) -> PResult<Option<ReturningClause>> {
        let start = self.start();
        if !self.eat_kw(Keyword::Returning) {
            return Ok(None);
        }
        let items = self.parse_comma_list(Self::parse_select_item)?;
        let into = if self.eat_kw(Keyword::Into) {
            self.parse_comma_list(Self::parse_expr)?
        } else {
            Vec::new()
        };
        Ok(Some(ReturningClause {
            items,
            into,
            span: self.span_from(start),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::parser::tests::{first_error, mysql, oracle, round_trip_in};
    use duosql_ast::{InsertSource, MergeClause, Statement, TableRef};

    #[test]
    fn test_insert_values() {
        let Statement::Insert(ins) = mysql("INSERT IGNORE INTO t (a, b) VALUES (1, 2), (3, DEFAULT)")
        else {
            unreachable!()
        };
        assert!(ins.ignore);
        assert!(!ins.replace);
        assert_eq!(ins.columns.len(), 2);
        let InsertSource::Values(rows) = &ins.source else {
            unreachable!()
        };
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_insert_forms() {
        let Statement::Insert(ins) = mysql("REPLACE t SET a = 1, b = b + 1") else {
            unreachable!()
        };
        assert!(ins.replace);
        assert!(matches!(ins.source, InsertSource::Set(ref a) if a.len() == 2));

        let Statement::Insert(ins) = mysql("INSERT INTO t (a) (SELECT a FROM u)") else {
            unreachable!()
        };
        assert_eq!(ins.columns.len(), 1);
        assert!(matches!(ins.source, InsertSource::Select(_)));

        let Statement::Insert(ins) =
            mysql("INSERT INTO t VALUES (1) ON DUPLICATE KEY UPDATE a = VALUES(a)")
        else {
            unreachable!()
        };
        assert_eq!(ins.on_duplicate.len(), 1);

        let Statement::Insert(ins) = oracle("INSERT INTO t x VALUES (1) RETURNING id INTO :id")
        else {
            unreachable!()
        };
        assert_eq!(ins.alias.unwrap().value, "x");
        assert_eq!(ins.returning.unwrap().into.len(), 1);
    }

    #[test]
    fn test_update_with_order_and_limit() {
        let Statement::Update(upd) =
            mysql("UPDATE /*+ NO_INDEX(t) */ t SET a = 1 WHERE b > 2 ORDER BY c LIMIT 10")
        else {
            unreachable!()
        };
        assert_eq!(upd.hints.len(), 1);
        assert_eq!(upd.assignments.len(), 1);
        assert!(upd.where_clause.is_some());
        assert_eq!(upd.order_by.len(), 1);
        assert!(upd.limit.is_some());
    }

    #[test]
    fn test_delete() {
        let Statement::Delete(del) = oracle("DELETE emp e WHERE e.id = 1") else {
            unreachable!()
        };
        assert!(matches!(del.table, TableRef::Table { alias: Some(_), .. }));
        assert!(del.where_clause.is_some());
    }

    #[test]
    fn test_merge() {
        let Statement::Merge(m) = oracle(
            "MERGE INTO dst d USING (SELECT * FROM src) s ON (d.id = s.id) \
             WHEN MATCHED THEN UPDATE SET d.v = s.v DELETE WHERE d.v IS NULL \
             WHEN NOT MATCHED THEN INSERT (id, v) VALUES (s.id, s.v) WHERE s.v > 0",
        ) else {
            unreachable!()
        };
        assert_eq!(m.target_alias.unwrap().value, "d");
        assert!(matches!(m.source, TableRef::Subquery { .. }));
        assert_eq!(m.clauses.len(), 2);
        assert!(matches!(
            m.clauses[0],
            MergeClause::Update {
                delete_where: Some(_),
                ..
            }
        ));
        assert!(matches!(
            m.clauses[1],
            MergeClause::Insert {
                where_clause: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_merge_requires_a_clause() {
        let d = first_error("MERGE INTO t USING s ON (t.id = s.id)", Dialect::Oracle);
        assert!(d.message.contains("WHEN"), "{}", d.message);
    }

    #[test]
    fn test_dml_round_trips() {
        round_trip_in(
            "INSERT INTO t (a, b) VALUES (1, 'x'), (2, NULL) ON DUPLICATE KEY UPDATE b = 'y'",
            Dialect::MySql,
        );
        round_trip_in(
            "UPDATE t SET a = a + 1 WHERE id IN (1, 2) LIMIT 5",
            Dialect::MySql,
        );
        round_trip_in("DELETE FROM t WHERE a IS NULL", Dialect::Oracle);
        round_trip_in(
            "MERGE INTO t USING s ON (t.id = s.id) WHEN MATCHED THEN UPDATE SET t.v = s.v",
            Dialect::Oracle,
        );
    }
}
