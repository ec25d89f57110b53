// PARTITION BY clauses shared by tables, indexes and materialized views.

use duosql_ast::{
    PartitionBound, PartitionCount, PartitionDef, PartitionMethod, PartitionOption,
    PartitionValues, SubpartitionOption,
};

use super::{PResult, Parser};
use crate::token::{Keyword, TokenKind};

impl Parser {
    pub(crate) fn at_partition_by(&self) -> bool {
        self.check_kw(Keyword::Partition) && self.is_kw_at(1, Keyword::By)
    }

    /// `PARTITION BY method [PARTITION SIZE 'x'] [PARTITIONS n|AUTO]
    /// [SUBPARTITION BY ...] [(partition, ...)]`
    pub(crate) fn parse_partition_option(&mut self) -> PResult<PartitionOption> {
        self.nested(|p| {
            let start = p.start();
            p.expect_kw(Keyword::Partition)?;
            p.expect_kw(Keyword::By)?;
            let method = p.parse_partition_method()?;
            let size = if p.check_kw(Keyword::Partition) && p.is_word_at(1, "SIZE") {
                p.advance();
                p.advance();
                Some(p.parse_string()?)
            } else {
                None
            };
            let count = if p.eat_kw(Keyword::Partitions) {
                if p.eat_word("AUTO") {
                    Some(PartitionCount::Auto)
                } else {
                    Some(PartitionCount::Fixed(p.parse_u32()?))
                }
            } else {
                None
            };
            let subpartition = if p.check_kw(Keyword::Subpartition) && p.is_kw_at(1, Keyword::By)
            {
                Some(p.parse_subpartition_option()?)
            } else {
                None
            };
            let partitions = if p.check(&TokenKind::LeftParen) {
                p.parse_paren_list(Self::parse_partition_def)?
            } else {
                Vec::new()
            };
            Ok(PartitionOption {
                method,
                size,
                count,
                subpartition,
                partitions,
                span: p.span_from(start),
            })
        })
    }

    fn parse_partition_method(&mut self) -> PResult<PartitionMethod> {
        if self.eat_kw(Keyword::Hash) {
            return Ok(PartitionMethod::Hash(self.parse_paren_list(Self::parse_expr)?));
        }
        let linear = self.eat_word("LINEAR");
        if self.eat_kw(Keyword::Key) {
            self.expect(&TokenKind::LeftParen)?;
            if self.eat(&TokenKind::RightParen) {
                return Ok(PartitionMethod::Key(Vec::new()));
            }
            let cols = self.parse_comma_list(Self::parse_ident)?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(PartitionMethod::Key(cols));
        }
        if linear {
            return Err(self.error_expected("KEY"));
        }
        if self.eat_kw(Keyword::Range) {
            let columns = self.eat_kw(Keyword::Columns);
            let exprs = self.parse_paren_list(Self::parse_expr)?;
            let interval = if self.eat_kw(Keyword::Interval) {
                self.expect(&TokenKind::LeftParen)?;
                let e = self.parse_expr()?;
                self.expect(&TokenKind::RightParen)?;
                Some(e)
            } else {
                None
            };
            return Ok(PartitionMethod::Range {
                columns,
                exprs,
                interval,
            });
        }
        if self.eat_kw(Keyword::List) {
            let columns = self.eat_kw(Keyword::Columns);
            let exprs = self.parse_paren_list(Self::parse_expr)?;
            return Ok(PartitionMethod::List { columns, exprs });
        }
        Err(self.error_expected("partition method"))
    }

    fn parse_subpartition_option(&mut self) -> PResult<SubpartitionOption> {
        let start = self.start();
        self.expect_kw(Keyword::Subpartition)?;
        self.expect_kw(Keyword::By)?;
        let method = self.parse_partition_method()?;
        let count = if self.eat_kw(Keyword::Subpartitions) {
            Some(self.parse_u32()?)
        } else {
            None
        };
        let template = if self.check_kw(Keyword::Subpartition) && self.is_word_at(1, "TEMPLATE") {
            self.advance();
            self.advance();
            self.parse_paren_list(Self::parse_partition_def)?
        } else {
            Vec::new()
        };
        Ok(SubpartitionOption {
            method,
            count,
            template,
            span: self.span_from(start),
        })
    }

    /// `PARTITION|SUBPARTITION name [VALUES ...] [options] [(subpartitions)]`
    pub(crate) fn parse_partition_def(&mut self) -> PResult<PartitionDef> {
        self.nested(|p| {
            let start = p.start();
            let subpartition = if p.eat_kw(Keyword::Subpartition) {
                true
            } else {
                p.expect_kw(Keyword::Partition)?;
                false
            };
            let name = p.parse_ident()?;
            let values = if p.eat_kw(Keyword::Values) {
                Some(p.parse_partition_values()?)
            } else {
                None
            };
            let options = p.parse_sql_options(false)?;
            let subpartitions = if p.check(&TokenKind::LeftParen) {
                p.parse_paren_list(Self::parse_partition_def)?
            } else {
                Vec::new()
            };
            Ok(PartitionDef {
                subpartition,
                name,
                values,
                options,
                subpartitions,
                span: p.span_from(start),
            })
        })
    }

    fn parse_partition_values(&mut self) -> PResult<PartitionValues> {
        if self.eat_word("LESS") {
            self.expect_word("THAN")?;
            if self.eat_kw(Keyword::MaxValue) {
                return Ok(PartitionValues::LessThan(vec![PartitionBound::MaxValue]));
            }
            return Ok(PartitionValues::LessThan(
                self.parse_paren_list(Self::parse_partition_bound)?,
            ));
        }
        if self.eat_kw(Keyword::In) {
            return Ok(PartitionValues::In(
                self.parse_paren_list(Self::parse_partition_bound)?,
            ));
        }
        Ok(PartitionValues::List(
            self.parse_paren_list(Self::parse_partition_bound)?,
        ))
    }

    fn parse_partition_bound(&mut self) -> PResult<PartitionBound> {
        if self.eat_kw(Keyword::MaxValue) {
            Ok(PartitionBound::MaxValue)
        } else if self.eat_kw(Keyword::Default) {
            Ok(PartitionBound::Default)
        } else {
            Ok(PartitionBound::Expr(self.parse_expr()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::parser::tests::{mysql, oracle, round_trip_in};
    use duosql_ast::{
        PartitionBound, PartitionCount, PartitionMethod, PartitionValues, Statement,
    };

    #[test]
    fn test_mysql_range_partitions() {
        let Statement::CreateTable(t) = mysql(
            "CREATE TABLE t (id INT, d DATE) PARTITION BY RANGE COLUMNS (d) (\
             PARTITION p0 VALUES LESS THAN ('2024-01-01'), \
             PARTITION p1 VALUES LESS THAN MAXVALUE ENGINE = InnoDB)",
        ) else {
            unreachable!()
        };
        let part = t.partition.unwrap();
        assert!(matches!(part.method, PartitionMethod::Range { columns: true, .. }));
        assert_eq!(part.partitions.len(), 2);
        assert_eq!(
            part.partitions[1].values,
            Some(PartitionValues::LessThan(vec![PartitionBound::MaxValue]))
        );
        assert_eq!(part.partitions[1].options.len(), 1);
    }

    #[test]
    fn test_hash_key_and_counts() {
        let Statement::CreateTable(t) =
            mysql("CREATE TABLE t (a INT) PARTITION BY LINEAR KEY () PARTITIONS 8")
        else {
            unreachable!()
        };
        let part = t.partition.unwrap();
        assert_eq!(part.method, PartitionMethod::Key(vec![]));
        assert_eq!(part.count, Some(PartitionCount::Fixed(8)));

        let Statement::CreateTable(t) =
            mysql("CREATE TABLE t (a INT) PARTITION BY HASH (a) PARTITIONS AUTO")
        else {
            unreachable!()
        };
        assert_eq!(t.partition.unwrap().count, Some(PartitionCount::Auto));
    }

    #[test]
    fn test_oracle_interval_and_template() {
        let Statement::CreateTable(t) = oracle(
            "CREATE TABLE t (a NUMBER, b NUMBER) PARTITION BY RANGE (a) INTERVAL (100) \
             SUBPARTITION BY HASH (b) SUBPARTITION TEMPLATE (SUBPARTITION s1, SUBPARTITION s2) \
             (PARTITION p0 VALUES LESS THAN (100))",
        ) else {
            unreachable!()
        };
        let part = t.partition.unwrap();
        assert!(matches!(
            part.method,
            PartitionMethod::Range {
                interval: Some(_),
                ..
            }
        ));
        let sub = part.subpartition.unwrap();
        assert_eq!(sub.template.len(), 2);
        assert!(sub.template.iter().all(|d| d.subpartition));
    }

    #[test]
    fn test_list_partitions_with_default() {
        let Statement::CreateTable(t) = oracle(
            "CREATE TABLE t (r VARCHAR2(2)) PARTITION BY LIST (r) \
             (PARTITION pe VALUES ('E', 'W'), PARTITION pd VALUES (DEFAULT))",
        ) else {
            unreachable!()
        };
        let part = t.partition.unwrap();
        assert_eq!(
            part.partitions[1].values,
            Some(PartitionValues::List(vec![PartitionBound::Default]))
        );
    }

    #[test]
    fn test_partition_round_trips() {
        round_trip_in(
            "CREATE TABLE t (a INT) PARTITION BY LIST COLUMNS (a) \
             (PARTITION p0 VALUES IN (1, 2), PARTITION p1 VALUES IN (3))",
            Dialect::MySql,
        );
        round_trip_in(
            "CREATE TABLE t (a INT, b INT) PARTITION BY RANGE (a) SUBPARTITION BY KEY (b) \
             SUBPARTITIONS 2 (PARTITION p0 VALUES LESS THAN (10) \
             (SUBPARTITION s0, SUBPARTITION s1))",
            Dialect::MySql,
        );
    }
}
