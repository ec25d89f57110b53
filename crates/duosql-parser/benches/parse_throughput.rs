use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use duosql_parser::{parse, Dialect, Lexer, ParserConfig};

const MYSQL_SCRIPT: &str = "\
CREATE TABLE orders (id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
  customer_id INT NOT NULL, total DECIMAL(12, 2) DEFAULT 0, note VARCHAR(255), \
  KEY idx_customer (customer_id)) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4;
INSERT INTO orders (customer_id, total, note) VALUES (1, 10.5, 'a'), (2, 20, 'b') \
  ON DUPLICATE KEY UPDATE total = VALUES(total);
SELECT /*+ NO_INDEX(o) */ o.id, c.name, SUM(o.total) AS s FROM orders o \
  JOIN customers c ON o.customer_id = c.id WHERE o.total BETWEEN 10 AND 100 \
  AND c.name LIKE 'A%' GROUP BY o.id, c.name HAVING s > 5 ORDER BY s DESC LIMIT 20;
UPDATE orders SET total = total * 1.1 WHERE id IN (SELECT id FROM promo) LIMIT 100;
DELETE FROM orders WHERE total IS NULL;
";

const ORACLE_SCRIPT: &str = "\
CREATE TABLE emp (empno NUMBER(6) PRIMARY KEY, ename VARCHAR2(30 CHAR), \
  mgr NUMBER(6), hired DATE DEFAULT SYSDATE) PARTITION BY RANGE (hired) \
  INTERVAL (NUMTOYMINTERVAL(1, 'MONTH')) (PARTITION p0 VALUES LESS THAN (DATE '2020-01-01'));
SELECT LEVEL, LPAD(' ', 2 * LEVEL) || ename AS tree FROM emp \
  START WITH mgr IS NULL CONNECT BY NOCYCLE PRIOR empno = mgr ORDER SIBLINGS BY ename;
MERGE INTO emp e USING staging s ON (e.empno = s.empno) \
  WHEN MATCHED THEN UPDATE SET e.ename = s.ename \
  WHEN NOT MATCHED THEN INSERT (empno, ename) VALUES (s.empno, s.ename);
SELECT deptno, ename FROM emp ORDER BY deptno OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY;
";

fn script(base: &str, copies: usize) -> String {
    base.repeat(copies)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, base, dialect) in [
        ("mysql", MYSQL_SCRIPT, Dialect::MySql),
        ("oracle", ORACLE_SCRIPT, Dialect::Oracle),
    ] {
        let config = ParserConfig::new(dialect);
        for copies in [1_usize, 32] {
            let sql = script(base, copies);
            group.throughput(Throughput::Bytes(sql.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, copies), &sql, |b, sql| {
                b.iter(|| parse(black_box(sql), &config));
            });
        }
    }
    group.finish();
}

fn bench_lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    let sql = script(MYSQL_SCRIPT, 32);
    group.throughput(Throughput::Bytes(sql.len() as u64));
    group.bench_function("mysql", |b| {
        b.iter(|| Lexer::tokenize_lossy(black_box(&sql), Dialect::MySql));
    });
    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let sql = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
    let config = ParserConfig::default();
    c.bench_function("parse/nested_parens_100", |b| {
        b.iter(|| parse(black_box(&sql), &config));
    });
}

criterion_group!(benches, bench_parse, bench_lex, bench_deep_nesting);
criterion_main!(benches);
