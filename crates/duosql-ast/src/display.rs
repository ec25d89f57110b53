//! SQL pretty-printing via `fmt::Display` for AST nodes.
//!
//! Every AST type renders canonical SQL text that re-parses, in the dialect
//! it was parsed with, to the same tree. Identifiers are re-quoted with
//! backticks when they were quoted in the source or contain characters that
//! need it; compound operands are always parenthesized so precedence survives
//! the round trip.

#[allow(clippy::wildcard_imports)]
use crate::*;
use std::fmt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn comma_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    sep_list(f, items, ", ")
}

fn sep_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn paren_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("(")?;
    comma_list(f, items)?;
    f.write_str(")")
}

/// Returns true if the name cannot be written as a bare word.
fn needs_quoting(name: &str) -> bool {
    let Some(&first) = name.as_bytes().first() else {
        return true;
    };
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return true;
    }
    name.bytes()
        .any(|b| !(b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'#'))
}

fn write_quoted_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    write!(f, "`{}`", name.replace('`', "``"))
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'{}'", s.replace('\'', "''"))
}

/// Write a bare word if possible, otherwise a string literal.
fn write_word_or_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if needs_quoting(s) {
        write_string(f, s)
    } else {
        f.write_str(s)
    }
}

/// Write an expression, wrapping it in parentheses if it is an operator
/// form. This keeps precedence intact through display and re-parse and
/// prevents operator merging (`- -x` would otherwise become a comment).
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    if matches!(
        expr,
        Expr::Unary { .. }
            | Expr::Binary { .. }
            | Expr::Assign { .. }
            | Expr::Is { .. }
            | Expr::Between { .. }
            | Expr::In { .. }
            | Expr::Like { .. }
            | Expr::Quantified { .. }
            | Expr::Collate { .. }
            | Expr::JsonAccess { .. }
            | Expr::Exists { .. }
            | Expr::Interval { .. }
    ) {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn write_hints(f: &mut fmt::Formatter<'_>, hints: &[Hint]) -> fmt::Result {
    if hints.is_empty() {
        return Ok(());
    }
    f.write_str(" /*+ ")?;
    sep_list(f, hints, " ")?;
    f.write_str(" */")
}

fn write_order_by(f: &mut fmt::Formatter<'_>, terms: &[OrderingTerm]) -> fmt::Result {
    if terms.is_empty() {
        return Ok(());
    }
    f.write_str(" ORDER BY ")?;
    comma_list(f, terms)
}

fn write_where(f: &mut fmt::Formatter<'_>, where_clause: Option<&Expr>) -> fmt::Result {
    match where_clause {
        Some(w) => write!(f, " WHERE {w}"),
        None => Ok(()),
    }
}

fn write_options(f: &mut fmt::Formatter<'_>, options: &[SqlOption]) -> fmt::Result {
    for opt in options {
        write!(f, " {opt}")?;
    }
    Ok(())
}

fn write_if_not_exists(f: &mut fmt::Formatter<'_>, flag: bool) -> fmt::Result {
    if flag {
        f.write_str("IF NOT EXISTS ")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted || needs_quoting(&self.value) {
            write_quoted_ident(f, &self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref schema) = self.schema {
            write!(f, "{schema}.")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(ref link) = self.dblink {
            write!(f, "@{link}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref schema) = self.schema {
            write!(f, "{schema}.")?;
        }
        if let Some(ref table) = self.table {
            write!(f, "{table}.")?;
        }
        write!(f, "{}", self.column)
    }
}

impl fmt::Display for UserSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_word_or_string(f, &self.name)?;
        if let Some(ref host) = self.host {
            f.write_str("@")?;
            write_string(f, host)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Literals and operators
// ---------------------------------------------------------------------------

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(s) => f.write_str(s),
            Self::String(s) => write_string(f, s),
            Self::NationalString(s) => {
                f.write_str("N")?;
                write_string(f, s)
            }
            Self::Hex(bytes) => {
                f.write_str("X'")?;
                for b in bytes {
                    write!(f, "{b:02X}")?;
                }
                f.write_str("'")
            }
            Self::Null => f.write_str("NULL"),
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::Date(s) => {
                f.write_str("DATE ")?;
                write_string(f, s)
            }
            Self::Time(s) => {
                f.write_str("TIME ")?;
                write_string(f, s)
            }
            Self::Timestamp(s) => {
                f.write_str("TIMESTAMP ")?;
                write_string(f, s)
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "DIV",
            Self::Mod => "%",
            Self::BitXor => "^",
            Self::Concat => "||",
        })
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
            Self::Not => "NOT ",
            Self::LogicalNot => "!",
            Self::Binary => "BINARY ",
            Self::Prior => "PRIOR ",
            Self::ConnectByRoot => "CONNECT_BY_ROOT ",
        })
    }
}

impl fmt::Display for LikeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Like => "LIKE",
            Self::Regexp => "REGEXP",
        })
    }
}

impl fmt::Display for IsTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Unknown => "UNKNOWN",
        })
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "ANY",
            Self::Some => "SOME",
            Self::All => "ALL",
        })
    }
}

impl fmt::Display for PseudoColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Level => "LEVEL",
            Self::RowNum => "ROWNUM",
            Self::SysDate => "SYSDATE",
            Self::SysTimestamp => "SYSTIMESTAMP",
            Self::ConnectByIsLeaf => "CONNECT_BY_ISLEAF",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
        })
    }
}

impl fmt::Display for VariableScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "GLOBAL",
            Self::Session => "SESSION",
            Self::Local => "LOCAL",
        })
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(name) => {
                f.write_str("@")?;
                write_word_or_string(f, name)
            }
            Self::System { scope, name } => {
                f.write_str("@@")?;
                if let Some(scope) = scope {
                    write!(f, "{}.", scope.to_string().to_ascii_lowercase())?;
                }
                f.write_str(name)
            }
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("?"),
            Self::Numbered(n) => write!(f, ":{n}"),
            Self::Named(name) => write!(f, ":{name}"),
        }
    }
}

impl fmt::Display for DateTimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Year => "YEAR",
            Self::Quarter => "QUARTER",
            Self::Month => "MONTH",
            Self::Week => "WEEK",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::Microsecond => "MICROSECOND",
        })
    }
}

// ---------------------------------------------------------------------------
// Expr
// ---------------------------------------------------------------------------

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit, _) => write!(f, "{lit}"),
            Self::Column(col, _) => write!(f, "{col}"),
            Self::Pseudo(p, _) => write!(f, "{p}"),
            Self::SequenceValue { sequence, kind, .. } => {
                let suffix = match kind {
                    SequenceValueKind::NextVal => "NEXTVAL",
                    SequenceValueKind::CurrVal => "CURRVAL",
                };
                write!(f, "{sequence}.{suffix}")
            }
            Self::Variable(v, _) => write!(f, "{v}"),
            Self::Placeholder(p, _) => write!(f, "{p}"),
            Self::DefaultValue(_) => f.write_str("DEFAULT"),
            Self::Unary { op, expr, .. } => {
                write!(f, "{op}")?;
                write_operand(f, expr)
            }
            Self::Binary {
                left, op, right, ..
            } => {
                write_operand(f, left)?;
                write!(f, " {op} ")?;
                write_operand(f, right)
            }
            Self::Assign { target, value, .. } => {
                write_operand(f, target)?;
                f.write_str(" := ")?;
                write_operand(f, value)
            }
            Self::Is {
                expr, not, test, ..
            } => {
                write_operand(f, expr)?;
                f.write_str(if *not { " IS NOT " } else { " IS " })?;
                write!(f, "{test}")
            }
            Self::Between {
                expr,
                low,
                high,
                not,
                ..
            } => {
                write_operand(f, expr)?;
                if *not {
                    f.write_str(" NOT")?;
                }
                f.write_str(" BETWEEN ")?;
                write_operand(f, low)?;
                f.write_str(" AND ")?;
                write_operand(f, high)
            }
            Self::In { expr, set, not, .. } => {
                write_operand(f, expr)?;
                if *not {
                    f.write_str(" NOT")?;
                }
                f.write_str(" IN ")?;
                match set {
                    InSet::List(items) => paren_list(f, items),
                    InSet::Subquery(q) => write!(f, "({q})"),
                }
            }
            Self::Like {
                expr,
                op,
                pattern,
                escape,
                not,
                ..
            } => {
                write_operand(f, expr)?;
                if *not {
                    f.write_str(" NOT")?;
                }
                write!(f, " {op} ")?;
                write_operand(f, pattern)?;
                if let Some(esc) = escape {
                    f.write_str(" ESCAPE ")?;
                    write_operand(f, esc)?;
                }
                Ok(())
            }
            Self::Quantified {
                left,
                op,
                quantifier,
                subquery,
                ..
            } => {
                write_operand(f, left)?;
                write!(f, " {op} {quantifier} ({subquery})")
            }
            Self::Case {
                operand,
                whens,
                else_expr,
                ..
            } => {
                f.write_str("CASE")?;
                if let Some(op) = operand {
                    write!(f, " {op}")?;
                }
                for (cond, then) in whens {
                    write!(f, " WHEN {cond} THEN {then}")?;
                }
                if let Some(el) = else_expr {
                    write!(f, " ELSE {el}")?;
                }
                f.write_str(" END")
            }
            Self::Cast {
                expr, data_type, ..
            } => write!(f, "CAST({expr} AS {data_type})"),
            Self::Extract { field, expr, .. } => write!(f, "EXTRACT({field} FROM {expr})"),
            Self::Interval {
                value, field, to, ..
            } => {
                f.write_str("INTERVAL ")?;
                write_operand(f, value)?;
                write!(f, " {field}")?;
                if let Some(to) = to {
                    write!(f, " TO {to}")?;
                }
                Ok(())
            }
            Self::Exists { subquery, not, .. } => {
                if *not {
                    f.write_str("NOT ")?;
                }
                write!(f, "EXISTS ({subquery})")
            }
            Self::Subquery(q, _) => write!(f, "({q})"),
            Self::Row(items, _) => paren_list(f, items),
            Self::Function(call) => write!(f, "{call}"),
            Self::Collate {
                expr, collation, ..
            } => {
                write_operand(f, expr)?;
                write!(f, " COLLATE {collation}")
            }
            Self::JsonAccess {
                expr,
                path,
                unquote,
                ..
            } => {
                write_operand(f, expr)?;
                f.write_str(if *unquote { "->>" } else { "->" })?;
                write_operand(f, path)
            }
            Self::Json(json) => write!(f, "{json}"),
            Self::JsonObject { entries, .. } => {
                f.write_str("JSON_OBJECT(")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "KEY {key} VALUE {value}")?;
                }
                f.write_str(")")
            }
            Self::Xml(xml) => write!(f, "{xml}"),
        }
    }
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "{name} => ")?;
        }
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        match &self.args {
            FunctionArgs::Star => f.write_str("*")?,
            FunctionArgs::List(args) => comma_list(f, args)?,
        }
        write_order_by(f, &self.order_by)?;
        if let Some(ref sep) = self.separator {
            f.write_str(" SEPARATOR ")?;
            write_string(f, sep)?;
        }
        f.write_str(")")?;
        if !self.within_group.is_empty() {
            f.write_str(" WITHIN GROUP (ORDER BY ")?;
            comma_list(f, &self.within_group)?;
            f.write_str(")")?;
        }
        match &self.over {
            Some(WindowRef::Named(name)) => write!(f, " OVER {name}"),
            Some(WindowRef::Spec(spec)) => write!(f, " OVER {spec}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for JsonBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Error => f.write_str("ERROR"),
            Self::Default(e) => {
                f.write_str("DEFAULT ")?;
                write_operand(f, e)
            }
        }
    }
}

impl fmt::Display for JsonFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            JsonFunctionKind::Value => "JSON_VALUE",
            JsonFunctionKind::Query => "JSON_QUERY",
            JsonFunctionKind::Exists => "JSON_EXISTS",
        };
        write!(f, "{name}({}, {}", self.expr, self.path)?;
        if let Some(ref ty) = self.returning {
            write!(f, " RETURNING {ty}")?;
        }
        if let Some(wrapper) = self.wrapper {
            f.write_str(match wrapper {
                JsonWrapper::Without => " WITHOUT WRAPPER",
                JsonWrapper::With => " WITH WRAPPER",
                JsonWrapper::WithConditional => " WITH CONDITIONAL WRAPPER",
                JsonWrapper::WithUnconditional => " WITH UNCONDITIONAL WRAPPER",
            })?;
        }
        if let Some(ref b) = self.on_empty {
            write!(f, " {b} ON EMPTY")?;
        }
        if let Some(ref b) = self.on_error {
            write!(f, " {b} ON ERROR")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for XmlExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element {
                name,
                attributes,
                content,
                ..
            } => {
                write!(f, "XMLELEMENT({name}")?;
                if !attributes.is_empty() {
                    f.write_str(", XMLATTRIBUTES(")?;
                    for (i, (expr, alias)) in attributes.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{expr}")?;
                        if let Some(alias) = alias {
                            write!(f, " AS {alias}")?;
                        }
                    }
                    f.write_str(")")?;
                }
                for item in content {
                    write!(f, ", {item}")?;
                }
                f.write_str(")")
            }
            Self::Agg { expr, order_by, .. } => {
                write!(f, "XMLAGG({expr}")?;
                write_order_by(f, order_by)?;
                f.write_str(")")
            }
            Self::Parse {
                document,
                expr,
                wellformed,
                ..
            } => {
                let kind = if *document { "DOCUMENT" } else { "CONTENT" };
                write!(f, "XMLPARSE({kind} {expr}")?;
                if *wellformed {
                    f.write_str(" WELLFORMED")?;
                }
                f.write_str(")")
            }
            Self::Serialize {
                document,
                expr,
                as_type,
                ..
            } => {
                let kind = if *document { "DOCUMENT" } else { "CONTENT" };
                write!(f, "XMLSERIALIZE({kind} {expr}")?;
                if let Some(ty) = as_type {
                    write!(f, " AS {ty}")?;
                }
                f.write_str(")")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

fn write_precision(
    f: &mut fmt::Formatter<'_>,
    precision: Option<u32>,
    scale: Option<i64>,
) -> fmt::Result {
    match (precision, scale) {
        (Some(p), Some(s)) => write!(f, "({p}, {s})"),
        (Some(p), None) => write!(f, "({p})"),
        _ => Ok(()),
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int {
                kind,
                width,
                unsigned,
                zerofill,
            } => {
                f.write_str(match kind {
                    IntKind::TinyInt => "TINYINT",
                    IntKind::SmallInt => "SMALLINT",
                    IntKind::MediumInt => "MEDIUMINT",
                    IntKind::Int => "INT",
                    IntKind::Integer => "INTEGER",
                    IntKind::BigInt => "BIGINT",
                })?;
                write_precision(f, *width, None)?;
                if *unsigned {
                    f.write_str(" UNSIGNED")?;
                }
                if *zerofill {
                    f.write_str(" ZEROFILL")?;
                }
                Ok(())
            }
            Self::Decimal {
                kind,
                precision,
                scale,
                unsigned,
            } => {
                f.write_str(match kind {
                    DecimalKind::Decimal => "DECIMAL",
                    DecimalKind::Dec => "DEC",
                    DecimalKind::Numeric => "NUMERIC",
                    DecimalKind::Number => "NUMBER",
                })?;
                write_precision(f, *precision, scale.map(i64::from))?;
                if *unsigned {
                    f.write_str(" UNSIGNED")?;
                }
                Ok(())
            }
            Self::Float {
                kind,
                precision,
                scale,
                unsigned,
            } => {
                f.write_str(match kind {
                    FloatKind::Float => "FLOAT",
                    FloatKind::Double => "DOUBLE",
                    FloatKind::Real => "REAL",
                    FloatKind::BinaryFloat => "BINARY_FLOAT",
                    FloatKind::BinaryDouble => "BINARY_DOUBLE",
                })?;
                write_precision(f, *precision, scale.map(i64::from))?;
                if *unsigned {
                    f.write_str(" UNSIGNED")?;
                }
                Ok(())
            }
            Self::Char {
                kind,
                length,
                semantics,
            } => {
                f.write_str(match kind {
                    CharKind::Char => "CHAR",
                    CharKind::Varchar => "VARCHAR",
                    CharKind::Varchar2 => "VARCHAR2",
                    CharKind::NChar => "NCHAR",
                    CharKind::NVarchar2 => "NVARCHAR2",
                    CharKind::Binary => "BINARY",
                    CharKind::VarBinary => "VARBINARY",
                    CharKind::Raw => "RAW",
                })?;
                if let Some(len) = length {
                    write!(f, "({len}")?;
                    match semantics {
                        Some(LengthSemantics::Byte) => f.write_str(" BYTE")?,
                        Some(LengthSemantics::Char) => f.write_str(" CHAR")?,
                        None => {}
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Lob(kind) => f.write_str(match kind {
                LobKind::TinyText => "TINYTEXT",
                LobKind::Text => "TEXT",
                LobKind::MediumText => "MEDIUMTEXT",
                LobKind::LongText => "LONGTEXT",
                LobKind::TinyBlob => "TINYBLOB",
                LobKind::Blob => "BLOB",
                LobKind::MediumBlob => "MEDIUMBLOB",
                LobKind::LongBlob => "LONGBLOB",
                LobKind::Clob => "CLOB",
                LobKind::NClob => "NCLOB",
            }),
            Self::Date => f.write_str("DATE"),
            Self::Time(p) => {
                f.write_str("TIME")?;
                write_precision(f, *p, None)
            }
            Self::DateTime(p) => {
                f.write_str("DATETIME")?;
                write_precision(f, *p, None)
            }
            Self::Timestamp {
                precision,
                time_zone,
            } => {
                f.write_str("TIMESTAMP")?;
                write_precision(f, *precision, None)?;
                match time_zone {
                    Some(TimeZoneKind::WithTimeZone) => f.write_str(" WITH TIME ZONE"),
                    Some(TimeZoneKind::WithLocalTimeZone) => f.write_str(" WITH LOCAL TIME ZONE"),
                    None => Ok(()),
                }
            }
            Self::Year => f.write_str("YEAR"),
            Self::IntervalYearToMonth(p) => {
                f.write_str("INTERVAL YEAR")?;
                write_precision(f, *p, None)?;
                f.write_str(" TO MONTH")
            }
            Self::IntervalDayToSecond(day, sec) => {
                f.write_str("INTERVAL DAY")?;
                write_precision(f, *day, None)?;
                f.write_str(" TO SECOND")?;
                write_precision(f, *sec, None)
            }
            Self::Bit(n) => {
                f.write_str("BIT")?;
                write_precision(f, *n, None)
            }
            Self::Bool => f.write_str("BOOLEAN"),
            Self::Enum(values) | Self::Set(values) => {
                f.write_str(if matches!(self, Self::Enum(_)) {
                    "ENUM("
                } else {
                    "SET("
                })?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_string(f, v)?;
                }
                f.write_str(")")
            }
            Self::Json => f.write_str("JSON"),
            Self::XmlType => f.write_str("XMLTYPE"),
            Self::RowId => f.write_str("ROWID"),
            Self::CastInteger { unsigned } => {
                f.write_str(if *unsigned { "UNSIGNED" } else { "SIGNED" })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hints
// ---------------------------------------------------------------------------

impl fmt::Display for HintArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) | Self::Number(s) => f.write_str(s),
            Self::String(s) => write_string(f, s),
            Self::List(items) => {
                f.write_str("(")?;
                sep_list(f, items, " ")?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("(")?;
            sep_list(f, &self.args, " ")?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref with) = self.with {
            write!(f, "{with} ")?;
        }
        write!(f, "{}", self.body)?;
        write_order_by(f, &self.order_by)?;
        if let Some(ref limit) = self.limit {
            write!(f, " {limit}")?;
        }
        if let Some(ref fetch) = self.fetch {
            write!(f, " {fetch}")?;
        }
        if let Some(ref lock) = self.for_update {
            write!(f, " {lock}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WithClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WITH ")?;
        if self.recursive {
            f.write_str("RECURSIVE ")?;
        }
        comma_list(f, &self.ctes)
    }
}

impl fmt::Display for Cte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.columns.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.columns)?;
        }
        write!(f, " AS ({})", self.query)
    }
}

impl fmt::Display for SelectBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        for (op, core) in &self.compounds {
            write!(f, " {op} {core}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CompoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Minus => "MINUS",
        })
    }
}

impl fmt::Display for SelectCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(spec) => write!(f, "{spec}"),
            Self::Nested(query) => write!(f, "({query})"),
        }
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        write_hints(f, &self.hints)?;
        f.write_str(" ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        comma_list(f, &self.columns)?;
        if !self.into.is_empty() {
            f.write_str(" INTO ")?;
            comma_list(f, &self.into)?;
        }
        if !self.from.is_empty() {
            f.write_str(" FROM ")?;
            comma_list(f, &self.from)?;
        }
        write_where(f, self.where_clause.as_ref())?;
        if let Some(ref h) = self.hierarchical {
            write!(f, " {h}")?;
        }
        if let Some(ref g) = self.group_by {
            write!(f, " {g}")?;
        }
        if let Some(ref having) = self.having {
            write!(f, " HAVING {having}")?;
        }
        if !self.windows.is_empty() {
            f.write_str(" WINDOW ")?;
            for (i, w) in self.windows.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} AS {}", w.name, w.spec)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr { expr, alias, .. } => {
                write!(f, "{expr}")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::Wildcard(_) => f.write_str("*"),
            Self::QualifiedWildcard(name, _) => write!(f, "{name}.*"),
        }
    }
}

impl fmt::Display for HierarchicalClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref start) = self.start_with {
            write!(f, "START WITH {start} ")?;
        }
        f.write_str("CONNECT BY ")?;
        if self.nocycle {
            f.write_str("NOCYCLE ")?;
        }
        write!(f, "{}", self.connect_by)
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GROUP BY ")?;
        comma_list(f, &self.items)?;
        if self.with_rollup {
            f.write_str(" WITH ROLLUP")?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(e) => write!(f, "{e}"),
            Self::Rollup(items) => {
                f.write_str("ROLLUP ")?;
                paren_list(f, items)
            }
            Self::Cube(items) => {
                f.write_str("CUBE ")?;
                paren_list(f, items)
            }
            Self::GroupingSets(sets) => {
                f.write_str("GROUPING SETS (")?;
                for (i, set) in sets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    paren_list(f, set)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table {
                name,
                partitions,
                alias,
                index_hints,
                ..
            } => {
                write!(f, "{name}")?;
                if !partitions.is_empty() {
                    f.write_str(" PARTITION ")?;
                    paren_list(f, partitions)?;
                }
                if let Some(alias) = alias {
                    write!(f, " {alias}")?;
                }
                for hint in index_hints {
                    write!(f, " {hint}")?;
                }
                Ok(())
            }
            Self::Subquery { query, alias, .. } => {
                write!(f, "({query})")?;
                if let Some(alias) = alias {
                    write!(f, " {alias}")?;
                }
                Ok(())
            }
            Self::Join {
                left,
                op,
                right,
                constraint,
                ..
            } => {
                write!(f, "{left} {op} {right}")?;
                match constraint {
                    Some(JoinConstraint::On(e)) => write!(f, " ON {e}"),
                    Some(JoinConstraint::Using(cols)) => {
                        f.write_str(" USING ")?;
                        paren_list(f, cols)
                    }
                    None => Ok(()),
                }
            }
            Self::Nested { inner, .. } => write!(f, "({inner})"),
        }
    }
}

impl fmt::Display for IndexHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            IndexHintKind::Use => "USE INDEX ",
            IndexHintKind::Force => "FORCE INDEX ",
            IndexHintKind::Ignore => "IGNORE INDEX ",
        })?;
        paren_list(f, &self.names)
    }
}

impl fmt::Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.natural {
            f.write_str("NATURAL ")?;
        }
        f.write_str(match self.kind {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        })
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(ref base) = self.base {
            parts.push(base.to_string());
        }
        if !self.partition_by.is_empty() {
            let items: Vec<String> = self.partition_by.iter().map(ToString::to_string).collect();
            parts.push(format!("PARTITION BY {}", items.join(", ")));
        }
        if !self.order_by.is_empty() {
            let items: Vec<String> = self.order_by.iter().map(ToString::to_string).collect();
            parts.push(format!("ORDER BY {}", items.join(", ")));
        }
        if let Some(ref frame) = self.frame {
            parts.push(frame.to_string());
        }
        write!(f, "({})", parts.join(" "))
    }
}

impl fmt::Display for FrameSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.units {
            FrameUnits::Rows => "ROWS ",
            FrameUnits::Range => "RANGE ",
        })?;
        match &self.end {
            Some(end) => write!(f, "BETWEEN {} AND {end}", self.start),
            None => write!(f, "{}", self.start),
        }
    }
}

impl fmt::Display for FrameBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundedPreceding => f.write_str("UNBOUNDED PRECEDING"),
            Self::Preceding(e) => {
                write_operand(f, e)?;
                f.write_str(" PRECEDING")
            }
            Self::CurrentRow => f.write_str("CURRENT ROW"),
            Self::Following(e) => {
                write_operand(f, e)?;
                f.write_str(" FOLLOWING")
            }
            Self::UnboundedFollowing => f.write_str("UNBOUNDED FOLLOWING"),
        }
    }
}

impl fmt::Display for OrderingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.direction {
            Some(SortDirection::Asc) => f.write_str(" ASC")?,
            Some(SortDirection::Desc) => f.write_str(" DESC")?,
            None => {}
        }
        match self.nulls {
            Some(NullsOrder::First) => f.write_str(" NULLS FIRST"),
            Some(NullsOrder::Last) => f.write_str(" NULLS LAST"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for LimitClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.limit)?;
        if let Some(ref off) = self.offset {
            write!(f, " OFFSET {off}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FetchClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(ref off) = self.offset {
            write!(f, "OFFSET {off} ROWS")?;
            wrote = true;
        }
        if let Some(ref count) = self.count {
            if wrote {
                f.write_str(" ")?;
            }
            write!(f, "FETCH FIRST {count} ")?;
            if self.percent {
                f.write_str("PERCENT ")?;
            }
            f.write_str(if self.with_ties {
                "ROWS WITH TIES"
            } else {
                "ROWS ONLY"
            })?;
        }
        Ok(())
    }
}

impl fmt::Display for ForUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FOR UPDATE")?;
        if !self.of.is_empty() {
            f.write_str(" OF ")?;
            comma_list(f, &self.of)?;
        }
        match &self.wait {
            Some(LockWait::NoWait) => f.write_str(" NOWAIT"),
            Some(LockWait::Wait(e)) => write!(f, " WAIT {e}"),
            Some(LockWait::SkipLocked) => f.write_str(" SKIP LOCKED"),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// DML
// ---------------------------------------------------------------------------

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl fmt::Display for ReturningClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RETURNING ")?;
        comma_list(f, &self.items)?;
        if !self.into.is_empty() {
            f.write_str(" INTO ")?;
            comma_list(f, &self.into)?;
        }
        Ok(())
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.replace { "REPLACE" } else { "INSERT" })?;
        write_hints(f, &self.hints)?;
        if self.ignore {
            f.write_str(" IGNORE")?;
        }
        write!(f, " INTO {}", self.table)?;
        if !self.partitions.is_empty() {
            f.write_str(" PARTITION ")?;
            paren_list(f, &self.partitions)?;
        }
        if let Some(ref alias) = self.alias {
            write!(f, " {alias}")?;
        }
        if !self.columns.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.columns)?;
        }
        match &self.source {
            InsertSource::Values(rows) => {
                f.write_str(" VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    paren_list(f, row)?;
                }
            }
            InsertSource::Select(q) => write!(f, " {q}")?,
            InsertSource::Set(assignments) => {
                f.write_str(" SET ")?;
                comma_list(f, assignments)?;
            }
        }
        if !self.on_duplicate.is_empty() {
            f.write_str(" ON DUPLICATE KEY UPDATE ")?;
            comma_list(f, &self.on_duplicate)?;
        }
        if let Some(ref ret) = self.returning {
            write!(f, " {ret}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UPDATE")?;
        write_hints(f, &self.hints)?;
        if self.ignore {
            f.write_str(" IGNORE")?;
        }
        f.write_str(" ")?;
        comma_list(f, &self.tables)?;
        f.write_str(" SET ")?;
        comma_list(f, &self.assignments)?;
        write_where(f, self.where_clause.as_ref())?;
        write_order_by(f, &self.order_by)?;
        if let Some(ref limit) = self.limit {
            write!(f, " {limit}")?;
        }
        if let Some(ref ret) = self.returning {
            write!(f, " {ret}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE")?;
        write_hints(f, &self.hints)?;
        write!(f, " FROM {}", self.table)?;
        write_where(f, self.where_clause.as_ref())?;
        write_order_by(f, &self.order_by)?;
        if let Some(ref limit) = self.limit {
            write!(f, " {limit}")?;
        }
        if let Some(ref ret) = self.returning {
            write!(f, " {ret}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MergeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MERGE")?;
        write_hints(f, &self.hints)?;
        write!(f, " INTO {}", self.target)?;
        if let Some(ref alias) = self.target_alias {
            write!(f, " {alias}")?;
        }
        write!(f, " USING {} ON ({})", self.source, self.on)?;
        for clause in &self.clauses {
            write!(f, " {clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MergeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update {
                assignments,
                where_clause,
                delete_where,
                ..
            } => {
                f.write_str("WHEN MATCHED THEN UPDATE SET ")?;
                comma_list(f, assignments)?;
                write_where(f, where_clause.as_ref())?;
                if let Some(ref d) = delete_where {
                    write!(f, " DELETE WHERE {d}")?;
                }
                Ok(())
            }
            Self::Insert {
                columns,
                values,
                where_clause,
                ..
            } => {
                f.write_str("WHEN NOT MATCHED THEN INSERT")?;
                if !columns.is_empty() {
                    f.write_str(" ")?;
                    paren_list(f, columns)?;
                }
                f.write_str(" VALUES ")?;
                paren_list(f, values)?;
                write_where(f, where_clause.as_ref())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(i) => write!(f, "{i}"),
            Self::Literal(l) => write!(f, "{l}"),
            Self::List(items) => paren_list(f, items),
        }
    }
}

impl fmt::Display for SqlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == "USING" {
            write!(f, "USING {}", self.value)
        } else {
            write!(f, "{} = {}", self.name, self.value)
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: tables, columns, indexes
// ---------------------------------------------------------------------------

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        match self.temporary {
            Some(TemporaryKind::Temporary) => f.write_str("TEMPORARY ")?,
            Some(TemporaryKind::GlobalTemporary) => f.write_str("GLOBAL TEMPORARY ")?,
            None => {}
        }
        f.write_str("TABLE ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        write!(f, "{}", self.name)?;
        if let Some(ref like) = self.like {
            return write!(f, " LIKE {like}");
        }
        if !self.columns.is_empty() || !self.constraints.is_empty() {
            f.write_str(" (")?;
            comma_list(f, &self.columns)?;
            if !self.columns.is_empty() && !self.constraints.is_empty() {
                f.write_str(", ")?;
            }
            comma_list(f, &self.constraints)?;
            f.write_str(")")?;
        }
        write_options(f, &self.options)?;
        if let Some(ref p) = self.partition {
            write!(f, " {p}")?;
        }
        if let Some(ref q) = self.as_query {
            write!(f, " AS {q}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        for c in &self.constraints {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

fn write_fk_ref(f: &mut fmt::Formatter<'_>, fk: &ForeignKeyRef) -> fmt::Result {
    write!(f, "REFERENCES {}", fk.table)?;
    if !fk.columns.is_empty() {
        f.write_str(" ")?;
        paren_list(f, &fk.columns)?;
    }
    if let Some(action) = fk.on_delete {
        write!(f, " ON DELETE {action}")?;
    }
    if let Some(action) = fk.on_update {
        write!(f, " ON UPDATE {action}")?;
    }
    Ok(())
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Restrict => "RESTRICT",
            Self::NoAction => "NO ACTION",
        })
    }
}

impl fmt::Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "CONSTRAINT {name} ")?;
        }
        match &self.kind {
            ColumnConstraintKind::Null => f.write_str("NULL"),
            ColumnConstraintKind::NotNull => f.write_str("NOT NULL"),
            ColumnConstraintKind::Default(e) => {
                f.write_str("DEFAULT ")?;
                write_operand(f, e)
            }
            ColumnConstraintKind::AutoIncrement => f.write_str("AUTO_INCREMENT"),
            ColumnConstraintKind::PrimaryKey => f.write_str("PRIMARY KEY"),
            ColumnConstraintKind::Unique => f.write_str("UNIQUE"),
            ColumnConstraintKind::Check(e) => write!(f, "CHECK ({e})"),
            ColumnConstraintKind::References(fk) => write_fk_ref(f, fk),
            ColumnConstraintKind::Comment(c) => {
                f.write_str("COMMENT ")?;
                write_string(f, c)
            }
            ColumnConstraintKind::Generated { expr, storage } => {
                write!(f, "GENERATED ALWAYS AS ({expr})")?;
                match storage {
                    Some(GeneratedStorage::Virtual) => f.write_str(" VIRTUAL"),
                    Some(GeneratedStorage::Stored) => f.write_str(" STORED"),
                    None => Ok(()),
                }
            }
            ColumnConstraintKind::OnUpdate(e) => {
                f.write_str("ON UPDATE ")?;
                write_operand(f, e)
            }
            ColumnConstraintKind::Collate(c) => write!(f, "COLLATE {c}"),
            ColumnConstraintKind::CharacterSet(c) => write!(f, "CHARACTER SET {c}"),
        }
    }
}

impl fmt::Display for IndexColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(len) = self.length {
            write!(f, "({len})")?;
        }
        match self.direction {
            Some(SortDirection::Asc) => f.write_str(" ASC"),
            Some(SortDirection::Desc) => f.write_str(" DESC"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "CONSTRAINT {name} ")?;
        }
        match &self.kind {
            TableConstraintKind::PrimaryKey(cols) => {
                f.write_str("PRIMARY KEY ")?;
                paren_list(f, cols)
            }
            TableConstraintKind::Unique {
                index_name,
                columns,
            } => {
                f.write_str("UNIQUE ")?;
                if let Some(name) = index_name {
                    write!(f, "KEY {name} ")?;
                }
                paren_list(f, columns)
            }
            TableConstraintKind::ForeignKey { columns, reference } => {
                f.write_str("FOREIGN KEY ")?;
                paren_list(f, columns)?;
                f.write_str(" ")?;
                write_fk_ref(f, reference)
            }
            TableConstraintKind::Check(e) => write!(f, "CHECK ({e})"),
            TableConstraintKind::Index {
                kind,
                index_name,
                columns,
            } => {
                match kind {
                    Some(IndexKind::Fulltext) => f.write_str("FULLTEXT ")?,
                    Some(IndexKind::Spatial) => f.write_str("SPATIAL ")?,
                    Some(IndexKind::Unique) => f.write_str("UNIQUE ")?,
                    None => {}
                }
                f.write_str("INDEX ")?;
                if let Some(name) = index_name {
                    write!(f, "{name} ")?;
                }
                paren_list(f, columns)
            }
        }
    }
}

impl fmt::Display for CreateIndexStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        match self.kind {
            Some(IndexKind::Unique) => f.write_str("UNIQUE ")?,
            Some(IndexKind::Fulltext) => f.write_str("FULLTEXT ")?,
            Some(IndexKind::Spatial) => f.write_str("SPATIAL ")?,
            None => {}
        }
        f.write_str("INDEX ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        write!(f, "{} ON {} ", self.name, self.table)?;
        paren_list(f, &self.columns)?;
        match self.scope {
            Some(IndexScope::Local) => f.write_str(" LOCAL")?,
            Some(IndexScope::Global) => f.write_str(" GLOBAL")?,
            None => {}
        }
        write_options(f, &self.options)?;
        if let Some(ref p) = self.partition {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {} ", self.name)?;
        comma_list(f, &self.actions)
    }
}

impl fmt::Display for AlterTableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddColumns { columns, .. } => {
                if let [single] = columns.as_slice() {
                    write!(f, "ADD COLUMN {single}")
                } else {
                    f.write_str("ADD ")?;
                    paren_list(f, columns)
                }
            }
            Self::AddConstraint(c) => write!(f, "ADD {c}"),
            Self::DropColumn { name, .. } => write!(f, "DROP COLUMN {name}"),
            Self::DropConstraint { name, .. } => write!(f, "DROP CONSTRAINT {name}"),
            Self::DropPrimaryKey { .. } => f.write_str("DROP PRIMARY KEY"),
            Self::DropIndex { name, .. } => write!(f, "DROP INDEX {name}"),
            Self::ModifyColumns { columns, .. } => {
                if let [single] = columns.as_slice() {
                    write!(f, "MODIFY COLUMN {single}")
                } else {
                    f.write_str("MODIFY ")?;
                    paren_list(f, columns)
                }
            }
            Self::ChangeColumn { old, column, .. } => write!(f, "CHANGE COLUMN {old} {column}"),
            Self::RenameTable { name, .. } => write!(f, "RENAME TO {name}"),
            Self::RenameColumn { old, new, .. } => write!(f, "RENAME COLUMN {old} TO {new}"),
            Self::AlterColumnDefault {
                column, default, ..
            } => match default {
                Some(e) => {
                    write!(f, "ALTER COLUMN {column} SET DEFAULT ")?;
                    write_operand(f, e)
                }
                None => write!(f, "ALTER COLUMN {column} DROP DEFAULT"),
            },
            Self::SetOptions { options, .. } => sep_list(f, options, " "),
            Self::AddPartitions { partitions, .. } => {
                f.write_str("ADD PARTITION ")?;
                paren_list(f, partitions)
            }
            Self::DropPartitions {
                names,
                subpartition,
                ..
            } => {
                f.write_str(if *subpartition {
                    "DROP SUBPARTITION "
                } else {
                    "DROP PARTITION "
                })?;
                comma_list(f, names)
            }
            Self::TruncatePartitions {
                names,
                subpartition,
                ..
            } => {
                f.write_str(if *subpartition {
                    "TRUNCATE SUBPARTITION "
                } else {
                    "TRUNCATE PARTITION "
                })?;
                comma_list(f, names)
            }
            Self::Partition(p) => write!(f, "{p}"),
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: partitioning
// ---------------------------------------------------------------------------

impl fmt::Display for PartitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(exprs) => {
                f.write_str("HASH ")?;
                paren_list(f, exprs)
            }
            Self::Key(cols) => {
                f.write_str("KEY ")?;
                paren_list(f, cols)
            }
            Self::Range {
                columns,
                exprs,
                interval,
            } => {
                f.write_str(if *columns { "RANGE COLUMNS " } else { "RANGE " })?;
                paren_list(f, exprs)?;
                if let Some(i) = interval {
                    write!(f, " INTERVAL ({i})")?;
                }
                Ok(())
            }
            Self::List { columns, exprs } => {
                f.write_str(if *columns { "LIST COLUMNS " } else { "LIST " })?;
                paren_list(f, exprs)
            }
        }
    }
}

impl fmt::Display for PartitionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PARTITION BY {}", self.method)?;
        if let Some(ref size) = self.size {
            f.write_str(" PARTITION SIZE ")?;
            write_string(f, size)?;
        }
        match self.count {
            Some(PartitionCount::Fixed(n)) => write!(f, " PARTITIONS {n}")?,
            Some(PartitionCount::Auto) => f.write_str(" PARTITIONS AUTO")?,
            None => {}
        }
        if let Some(ref sub) = self.subpartition {
            write!(f, " {sub}")?;
        }
        if !self.partitions.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.partitions)?;
        }
        Ok(())
    }
}

impl fmt::Display for SubpartitionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SUBPARTITION BY {}", self.method)?;
        if let Some(n) = self.count {
            write!(f, " SUBPARTITIONS {n}")?;
        }
        if !self.template.is_empty() {
            f.write_str(" SUBPARTITION TEMPLATE ")?;
            paren_list(f, &self.template)?;
        }
        Ok(())
    }
}

impl fmt::Display for PartitionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxValue => f.write_str("MAXVALUE"),
            Self::Default => f.write_str("DEFAULT"),
            Self::Expr(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for PartitionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.subpartition {
            "SUBPARTITION "
        } else {
            "PARTITION "
        })?;
        write!(f, "{}", self.name)?;
        match &self.values {
            Some(PartitionValues::LessThan(b)) => {
                f.write_str(" VALUES LESS THAN ")?;
                paren_list(f, b)?;
            }
            Some(PartitionValues::In(b)) => {
                f.write_str(" VALUES IN ")?;
                paren_list(f, b)?;
            }
            Some(PartitionValues::List(b)) => {
                f.write_str(" VALUES ")?;
                paren_list(f, b)?;
            }
            None => {}
        }
        write_options(f, &self.options)?;
        if !self.subpartitions.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.subpartitions)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DDL: views
// ---------------------------------------------------------------------------

impl fmt::Display for CreateViewStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.or_replace {
            f.write_str("OR REPLACE ")?;
        }
        match self.force {
            Some(true) => f.write_str("FORCE ")?,
            Some(false) => f.write_str("NO FORCE ")?,
            None => {}
        }
        write!(f, "VIEW {}", self.name)?;
        if !self.columns.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.columns)?;
        }
        write!(f, " AS {}", self.query)?;
        match self.check_option {
            Some(ViewCheckOption::CheckOption) => f.write_str(" WITH CHECK OPTION"),
            Some(ViewCheckOption::ReadOnly) => f.write_str(" WITH READ ONLY"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for RefreshSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("NEVER REFRESH"),
            Self::Refresh {
                method,
                mode,
                start_with,
                next,
            } => {
                f.write_str("REFRESH")?;
                match method {
                    Some(RefreshMethod::Fast) => f.write_str(" FAST")?,
                    Some(RefreshMethod::Complete) => f.write_str(" COMPLETE")?,
                    Some(RefreshMethod::Force) => f.write_str(" FORCE")?,
                    None => {}
                }
                match mode {
                    Some(RefreshMode::OnDemand) => f.write_str(" ON DEMAND")?,
                    Some(RefreshMode::OnCommit) => f.write_str(" ON COMMIT")?,
                    None => {}
                }
                if let Some(s) = start_with {
                    write!(f, " START WITH {s}")?;
                }
                if let Some(n) = next {
                    write!(f, " NEXT {n}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for CreateMaterializedViewStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE MATERIALIZED VIEW {}", self.name)?;
        if !self.columns.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.columns)?;
        }
        if let Some(ref p) = self.partition {
            write!(f, " {p}")?;
        }
        if let Some(ref r) = self.refresh {
            write!(f, " {r}")?;
        }
        match self.query_rewrite {
            Some(true) => f.write_str(" ENABLE QUERY REWRITE")?,
            Some(false) => f.write_str(" DISABLE QUERY REWRITE")?,
            None => {}
        }
        write!(f, " AS {}", self.query)
    }
}

impl fmt::Display for MvLogWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryKey => f.write_str("PRIMARY KEY"),
            Self::RowId => f.write_str("ROWID"),
            Self::Sequence => f.write_str("SEQUENCE"),
            Self::Columns(cols) => paren_list(f, cols),
        }
    }
}

impl fmt::Display for CreateMaterializedViewLogStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE MATERIALIZED VIEW LOG ON {}", self.table)?;
        if !self.with.is_empty() {
            f.write_str(" WITH ")?;
            comma_list(f, &self.with)?;
        }
        match self.new_values {
            Some(true) => f.write_str(" INCLUDING NEW VALUES")?,
            Some(false) => f.write_str(" EXCLUDING NEW VALUES")?,
            None => {}
        }
        match &self.purge {
            Some(MvLogPurge::Immediate) => f.write_str(" PURGE IMMEDIATE"),
            Some(MvLogPurge::Schedule { start_with, next }) => {
                f.write_str(" PURGE")?;
                if let Some(s) = start_with {
                    write!(f, " START WITH {s}")?;
                }
                if let Some(n) = next {
                    write!(f, " NEXT {n}")?;
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: databases, tablespaces, tenants
// ---------------------------------------------------------------------------

impl fmt::Display for CreateDatabaseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE DATABASE ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        write!(f, "{}", self.name)?;
        write_options(f, &self.options)
    }
}

impl fmt::Display for CreateTablespaceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLESPACE {}", self.name)?;
        write_options(f, &self.options)
    }
}

impl fmt::Display for AlterTablespaceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLESPACE {}", self.name)?;
        write_options(f, &self.options)
    }
}

impl fmt::Display for SetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(name) => {
                f.write_str("@")?;
                write_word_or_string(f, name)
            }
            Self::System { scope, name } => {
                if let Some(scope) = scope {
                    write!(f, "{scope} ")?;
                }
                f.write_str(name)
            }
        }
    }
}

impl fmt::Display for VariableAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl fmt::Display for CreateTenantStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE TENANT ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        write!(f, "{}", self.name)?;
        if !self.options.is_empty() {
            f.write_str(" ")?;
            comma_list(f, &self.options)?;
        }
        if !self.variables.is_empty() {
            f.write_str(" SET ")?;
            comma_list(f, &self.variables)?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterTenantStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TENANT {} ", self.name)?;
        match &self.action {
            AlterTenantAction::SetOptions(options) => {
                f.write_str("SET ")?;
                comma_list(f, options)
            }
            AlterTenantAction::SetVariables(vars) => {
                f.write_str("SET VARIABLES ")?;
                comma_list(f, vars)
            }
            AlterTenantAction::Lock => f.write_str("LOCK"),
            AlterTenantAction::Unlock => f.write_str("UNLOCK"),
            AlterTenantAction::RenameGlobalName(n) => write!(f, "RENAME GLOBAL_NAME TO {n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: users, roles, privileges
// ---------------------------------------------------------------------------

impl fmt::Display for UserIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user)?;
        if let Some(ref pw) = self.password {
            f.write_str(" IDENTIFIED BY ")?;
            write_string(f, pw)?;
        }
        Ok(())
    }
}

impl fmt::Display for UserAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentifiedBy(pw) => {
                f.write_str("IDENTIFIED BY ")?;
                write_string(f, pw)
            }
            Self::Profile(p) => write!(f, "PROFILE {p}"),
            Self::DefaultTablespace(t) => write!(f, "DEFAULT TABLESPACE {t}"),
            Self::AccountLock(true) => f.write_str("ACCOUNT LOCK"),
            Self::AccountLock(false) => f.write_str("ACCOUNT UNLOCK"),
        }
    }
}

impl fmt::Display for CreateUserStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE USER ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        comma_list(f, &self.users)?;
        for attr in &self.attributes {
            write!(f, " {attr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterUserStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER USER {}", self.user)?;
        for attr in &self.attributes {
            write!(f, " {attr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateRoleStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ROLE ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        comma_list(f, &self.roles)?;
        if let Some(ref pw) = self.password {
            f.write_str(" IDENTIFIED BY ")?;
            write_string(f, pw)?;
        }
        Ok(())
    }
}

impl fmt::Display for DropPrincipalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            PrincipalKind::User => "DROP USER ",
            PrincipalKind::Role => "DROP ROLE ",
        })?;
        if self.if_exists {
            f.write_str("IF EXISTS ")?;
        }
        comma_list(f, &self.names)?;
        if self.cascade {
            f.write_str(" CASCADE")?;
        }
        Ok(())
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.columns.is_empty() {
            f.write_str(" ")?;
            paren_list(f, &self.columns)?;
        }
        Ok(())
    }
}

impl fmt::Display for GrantObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("*.*"),
            Self::AllInSchema(s) => write!(f, "{s}.*"),
            Self::Object(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for GrantStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GRANT ")?;
        comma_list(f, &self.privileges)?;
        if let Some(ref obj) = self.object {
            write!(f, " ON {obj}")?;
        }
        f.write_str(" TO ")?;
        comma_list(f, &self.grantees)?;
        if self.with_grant_option {
            f.write_str(if self.object.is_some() {
                " WITH GRANT OPTION"
            } else {
                " WITH ADMIN OPTION"
            })?;
        }
        Ok(())
    }
}

impl fmt::Display for RevokeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("REVOKE ")?;
        comma_list(f, &self.privileges)?;
        if let Some(ref obj) = self.object {
            write!(f, " ON {obj}")?;
        }
        f.write_str(" FROM ")?;
        comma_list(f, &self.grantees)
    }
}

// ---------------------------------------------------------------------------
// DDL: sequences, synonyms, database links, profiles, contexts
// ---------------------------------------------------------------------------

impl fmt::Display for SequenceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartWith(v) => write!(f, "START WITH {v}"),
            Self::IncrementBy(v) => write!(f, "INCREMENT BY {v}"),
            Self::MinValue(Some(v)) => write!(f, "MINVALUE {v}"),
            Self::MinValue(None) => f.write_str("NOMINVALUE"),
            Self::MaxValue(Some(v)) => write!(f, "MAXVALUE {v}"),
            Self::MaxValue(None) => f.write_str("NOMAXVALUE"),
            Self::Cache(Some(v)) => write!(f, "CACHE {v}"),
            Self::Cache(None) => f.write_str("NOCACHE"),
            Self::Cycle(true) => f.write_str("CYCLE"),
            Self::Cycle(false) => f.write_str("NOCYCLE"),
            Self::Order(true) => f.write_str("ORDER"),
            Self::Order(false) => f.write_str("NOORDER"),
        }
    }
}

impl fmt::Display for CreateSequenceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE SEQUENCE ")?;
        write_if_not_exists(f, self.if_not_exists)?;
        write!(f, "{}", self.name)?;
        for opt in &self.options {
            write!(f, " {opt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterSequenceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER SEQUENCE {}", self.name)?;
        for opt in &self.options {
            write!(f, " {opt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateSynonymStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.or_replace {
            f.write_str("OR REPLACE ")?;
        }
        if self.public {
            f.write_str("PUBLIC ")?;
        }
        write!(f, "SYNONYM {} FOR {}", self.name, self.target)
    }
}

impl fmt::Display for CreateDatabaseLinkStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.public {
            f.write_str("PUBLIC ")?;
        }
        write!(f, "DATABASE LINK {} CONNECT TO {}", self.name, self.user)?;
        if let Some(ref tenant) = self.tenant {
            write!(f, "@{tenant}")?;
        }
        f.write_str(" IDENTIFIED BY ")?;
        write_string(f, &self.password)?;
        if let Some(ref host) = self.host {
            f.write_str(" HOST ")?;
            write_string(f, host)?;
        }
        if let Some(ref using) = self.using {
            f.write_str(" USING ")?;
            write_string(f, using)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProfileLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.resource)?;
        match &self.value {
            ProfileLimitValue::Unlimited => f.write_str("UNLIMITED"),
            ProfileLimitValue::Default => f.write_str("DEFAULT"),
            ProfileLimitValue::Expr(e) => write_operand(f, e),
        }
    }
}

impl fmt::Display for CreateProfileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE PROFILE {} LIMIT ", self.name)?;
        sep_list(f, &self.limits, " ")
    }
}

impl fmt::Display for AlterProfileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER PROFILE {} LIMIT ", self.name)?;
        sep_list(f, &self.limits, " ")
    }
}

impl fmt::Display for CreateContextStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.or_replace {
            f.write_str("OR REPLACE ")?;
        }
        write!(f, "CONTEXT {} USING {}", self.namespace, self.package)?;
        match self.scope {
            Some(ContextScope::InitializedExternally) => f.write_str(" INITIALIZED EXTERNALLY"),
            Some(ContextScope::InitializedGlobally) => f.write_str(" INITIALIZED GLOBALLY"),
            Some(ContextScope::AccessedGlobally) => f.write_str(" ACCESSED GLOBALLY"),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: drop and friends
// ---------------------------------------------------------------------------

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::MaterializedView => "MATERIALIZED VIEW",
            Self::MaterializedViewLog => "MATERIALIZED VIEW LOG ON",
            Self::Index => "INDEX",
            Self::Database => "DATABASE",
            Self::Tablespace => "TABLESPACE",
            Self::Tenant => "TENANT",
            Self::Sequence => "SEQUENCE",
            Self::Synonym => "SYNONYM",
            Self::DatabaseLink => "DATABASE LINK",
            Self::Profile => "PROFILE",
            Self::Context => "CONTEXT",
        })
    }
}

impl fmt::Display for DropStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DROP ")?;
        if self.public {
            f.write_str("PUBLIC ")?;
        }
        write!(f, "{} ", self.object_type)?;
        if self.if_exists {
            f.write_str("IF EXISTS ")?;
        }
        comma_list(f, &self.names)?;
        if let Some(ref table) = self.table {
            write!(f, " ON {table}")?;
        }
        match self.behavior {
            Some(DropBehavior::Cascade) => f.write_str(" CASCADE"),
            Some(DropBehavior::CascadeConstraints) => f.write_str(" CASCADE CONSTRAINTS"),
            Some(DropBehavior::Restrict) => f.write_str(" RESTRICT"),
            Some(DropBehavior::Purge) => f.write_str(" PURGE"),
            Some(DropBehavior::Force) => f.write_str(" FORCE"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TruncateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRUNCATE TABLE {}", self.table)
    }
}

impl fmt::Display for RenameTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RENAME TABLE ")?;
        for (i, (from, to)) in self.renames.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{from} TO {to}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CommentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            CommentTarget::Table => write!(f, "COMMENT ON TABLE {}", self.object)?,
            CommentTarget::Column => {
                write!(f, "COMMENT ON COLUMN {}", self.object)?;
                if let Some(ref col) = self.column {
                    write!(f, ".{col}")?;
                }
            }
        }
        f.write_str(" IS ")?;
        write_string(f, &self.comment)
    }
}

impl fmt::Display for FlashbackStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FLASHBACK TABLE {} TO BEFORE DROP", self.table)?;
        if let Some(ref n) = self.rename_to {
            write!(f, " RENAME TO {n}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PurgeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            PurgeTarget::Table(t) => write!(f, "PURGE TABLE {t}"),
            PurgeTarget::Index(i) => write!(f, "PURGE INDEX {i}"),
            PurgeTarget::RecycleBin => f.write_str("PURGE RECYCLEBIN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Transactions and session
// ---------------------------------------------------------------------------

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadUncommitted => "READ UNCOMMITTED",
            Self::ReadCommitted => "READ COMMITTED",
            Self::RepeatableRead => "REPEATABLE READ",
            Self::Serializable => "SERIALIZABLE",
        })
    }
}

impl fmt::Display for TransactionCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsolationLevel(level) => write!(f, "ISOLATION LEVEL {level}"),
            Self::ReadOnly => f.write_str("READ ONLY"),
            Self::ReadWrite => f.write_str("READ WRITE"),
            Self::ConsistentSnapshot => f.write_str("WITH CONSISTENT SNAPSHOT"),
        }
    }
}

impl fmt::Display for TransactionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TransactionKind::Start(chars) => {
                f.write_str("START TRANSACTION")?;
                if !chars.is_empty() {
                    f.write_str(" ")?;
                    comma_list(f, chars)?;
                }
                Ok(())
            }
            TransactionKind::Begin { work } => {
                f.write_str(if *work { "BEGIN WORK" } else { "BEGIN" })
            }
            TransactionKind::Commit { work } => {
                f.write_str(if *work { "COMMIT WORK" } else { "COMMIT" })
            }
            TransactionKind::Rollback { work, to_savepoint } => {
                f.write_str(if *work { "ROLLBACK WORK" } else { "ROLLBACK" })?;
                if let Some(sp) = to_savepoint {
                    write!(f, " TO SAVEPOINT {sp}")?;
                }
                Ok(())
            }
            TransactionKind::Savepoint(sp) => write!(f, "SAVEPOINT {sp}"),
            TransactionKind::ReleaseSavepoint(sp) => write!(f, "RELEASE SAVEPOINT {sp}"),
        }
    }
}

fn write_charset(f: &mut fmt::Formatter<'_>, charset: Option<&String>) -> fmt::Result {
    match charset {
        Some(cs) => write_string(f, cs),
        None => f.write_str("DEFAULT"),
    }
}

impl fmt::Display for SetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SET ")?;
        match &self.kind {
            SetKind::Variables(vars) => comma_list(f, vars),
            SetKind::Names { charset, collation } => {
                f.write_str("NAMES ")?;
                write_charset(f, charset.as_ref())?;
                if let Some(c) = collation {
                    f.write_str(" COLLATE ")?;
                    write_string(f, c)?;
                }
                Ok(())
            }
            SetKind::CharacterSet(cs) => {
                f.write_str("CHARACTER SET ")?;
                write_charset(f, cs.as_ref())
            }
            SetKind::Password { user, password } => {
                f.write_str("PASSWORD")?;
                if let Some(u) = user {
                    write!(f, " FOR {u}")?;
                }
                f.write_str(" = ")?;
                write_string(f, password)
            }
            SetKind::Transaction {
                scope,
                characteristics,
            } => {
                if let Some(scope) = scope {
                    write!(f, "{scope} ")?;
                }
                f.write_str("TRANSACTION ")?;
                comma_list(f, characteristics)
            }
            SetKind::Role(spec) => {
                f.write_str("ROLE ")?;
                match spec {
                    RoleSpec::All => f.write_str("ALL"),
                    RoleSpec::None => f.write_str("NONE"),
                    RoleSpec::Default => f.write_str("DEFAULT"),
                    RoleSpec::Roles(roles) => comma_list(f, roles),
                }
            }
        }
    }
}

fn write_scope_prefix(f: &mut fmt::Formatter<'_>, scope: Option<VariableScope>) -> fmt::Result {
    if let Some(scope) = scope {
        write!(f, "{scope} ")?;
    }
    Ok(())
}

impl fmt::Display for ShowStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW ")?;
        match &self.kind {
            ShowKind::Tables { full, from } => {
                if *full {
                    f.write_str("FULL ")?;
                }
                f.write_str("TABLES")?;
                if let Some(db) = from {
                    write!(f, " FROM {db}")?;
                }
            }
            ShowKind::Databases => f.write_str("DATABASES")?,
            ShowKind::Columns { full, table } => {
                if *full {
                    f.write_str("FULL ")?;
                }
                write!(f, "COLUMNS FROM {table}")?;
            }
            ShowKind::Index { table } => write!(f, "INDEX FROM {table}")?,
            ShowKind::CreateTable(t) => write!(f, "CREATE TABLE {t}")?,
            ShowKind::CreateView(v) => write!(f, "CREATE VIEW {v}")?,
            ShowKind::Variables { scope } => {
                write_scope_prefix(f, *scope)?;
                f.write_str("VARIABLES")?;
            }
            ShowKind::Status { scope } => {
                write_scope_prefix(f, *scope)?;
                f.write_str("STATUS")?;
            }
            ShowKind::Warnings => f.write_str("WARNINGS")?,
            ShowKind::Errors => f.write_str("ERRORS")?,
            ShowKind::ProcessList { full } => {
                f.write_str(if *full {
                    "FULL PROCESSLIST"
                } else {
                    "PROCESSLIST"
                })?;
            }
            ShowKind::Grants { user } => {
                f.write_str("GRANTS")?;
                if let Some(u) = user {
                    write!(f, " FOR {u}")?;
                }
            }
            ShowKind::Tenants => f.write_str("TENANTS")?,
        }
        match &self.filter {
            Some(ShowFilter::Like(pattern)) => {
                f.write_str(" LIKE ")?;
                write_string(f, pattern)
            }
            Some(ShowFilter::Where(e)) => write!(f, " WHERE {e}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for UseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USE {}", self.database)
    }
}

impl fmt::Display for DescribeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DESCRIBE {}", self.table)?;
        if let Some(ref c) = self.column {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExplainStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EXPLAIN ")?;
        match &self.format {
            Some(ExplainFormat::Basic) => f.write_str("BASIC ")?,
            Some(ExplainFormat::Extended) => f.write_str("EXTENDED ")?,
            Some(ExplainFormat::Outline) => f.write_str("OUTLINE ")?,
            Some(ExplainFormat::Partitions) => f.write_str("PARTITIONS ")?,
            Some(ExplainFormat::Format(name)) => write!(f, "FORMAT = {name} ")?,
            None => {}
        }
        write!(f, "{}", self.statement)
    }
}

impl fmt::Display for KillStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KILL ")?;
        match self.target {
            Some(KillTarget::Connection) => f.write_str("CONNECTION ")?,
            Some(KillTarget::Query) => f.write_str("QUERY ")?,
            None => {}
        }
        write!(f, "{}", self.id)
    }
}

impl fmt::Display for CallStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CALL {}", self.procedure)?;
        paren_list(f, &self.args)
    }
}

// ---------------------------------------------------------------------------
// System administration
// ---------------------------------------------------------------------------

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

impl fmt::Display for AlterSystemStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ALTER SYSTEM ")?;
        match &self.action {
            AlterSystemAction::Set(params) => {
                f.write_str("SET ")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", p.setting)?;
                    for t in &p.targets {
                        write!(f, " {t}")?;
                    }
                }
                Ok(())
            }
            AlterSystemAction::Freeze { kind, targets } => {
                f.write_str(match kind {
                    FreezeKind::Major => "MAJOR FREEZE",
                    FreezeKind::Minor => "MINOR FREEZE",
                })?;
                for t in targets {
                    write!(f, " {t}")?;
                }
                Ok(())
            }
            AlterSystemAction::FlushCache {
                cache,
                targets,
                global,
            } => {
                write!(f, "FLUSH {cache} CACHE")?;
                for t in targets {
                    write!(f, " {t}")?;
                }
                if *global {
                    f.write_str(" GLOBAL")?;
                }
                Ok(())
            }
            AlterSystemAction::KillSession { session, immediate } => {
                write!(f, "KILL SESSION {session}")?;
                if *immediate {
                    f.write_str(" IMMEDIATE")?;
                }
                Ok(())
            }
            AlterSystemAction::Checkpoint => f.write_str("CHECKPOINT"),
        }
    }
}

impl fmt::Display for AlterSessionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ALTER SESSION SET ")?;
        sep_list(f, &self.settings, " ")
    }
}

// ---------------------------------------------------------------------------
// Statement
// ---------------------------------------------------------------------------

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Insert(s) => write!(f, "{s}"),
            Self::Update(s) => write!(f, "{s}"),
            Self::Delete(s) => write!(f, "{s}"),
            Self::Merge(s) => write!(f, "{s}"),
            Self::CreateTable(s) => write!(f, "{s}"),
            Self::CreateIndex(s) => write!(f, "{s}"),
            Self::CreateView(s) => write!(f, "{s}"),
            Self::CreateMaterializedView(s) => write!(f, "{s}"),
            Self::CreateMaterializedViewLog(s) => write!(f, "{s}"),
            Self::CreateDatabase(s) => write!(f, "{s}"),
            Self::CreateTablespace(s) => write!(f, "{s}"),
            Self::CreateTenant(s) => write!(f, "{s}"),
            Self::CreateUser(s) => write!(f, "{s}"),
            Self::CreateRole(s) => write!(f, "{s}"),
            Self::CreateSequence(s) => write!(f, "{s}"),
            Self::CreateSynonym(s) => write!(f, "{s}"),
            Self::CreateDatabaseLink(s) => write!(f, "{s}"),
            Self::CreateProfile(s) => write!(f, "{s}"),
            Self::CreateContext(s) => write!(f, "{s}"),
            Self::AlterTable(s) => write!(f, "{s}"),
            Self::AlterTablespace(s) => write!(f, "{s}"),
            Self::AlterTenant(s) => write!(f, "{s}"),
            Self::AlterUser(s) => write!(f, "{s}"),
            Self::AlterSequence(s) => write!(f, "{s}"),
            Self::AlterProfile(s) => write!(f, "{s}"),
            Self::Drop(s) => write!(f, "{s}"),
            Self::DropPrincipal(s) => write!(f, "{s}"),
            Self::Truncate(s) => write!(f, "{s}"),
            Self::RenameTable(s) => write!(f, "{s}"),
            Self::Comment(s) => write!(f, "{s}"),
            Self::Flashback(s) => write!(f, "{s}"),
            Self::Purge(s) => write!(f, "{s}"),
            Self::Transaction(s) => write!(f, "{s}"),
            Self::Set(s) => write!(f, "{s}"),
            Self::Show(s) => write!(f, "{s}"),
            Self::Use(s) => write!(f, "{s}"),
            Self::Describe(s) => write!(f, "{s}"),
            Self::Explain(s) => write!(f, "{s}"),
            Self::Grant(s) => write!(f, "{s}"),
            Self::Revoke(s) => write!(f, "{s}"),
            Self::Kill(s) => write!(f, "{s}"),
            Self::Call(s) => write!(f, "{s}"),
            Self::AlterSystem(s) => write!(f, "{s}"),
            Self::AlterSession(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> Expr {
        Expr::Column(ColumnRef::bare(name), Span::ZERO)
    }

    fn int(n: i64) -> Expr {
        Expr::Literal(Literal::Integer(n), Span::ZERO)
    }

    fn bin(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span: Span::ZERO,
        }
    }

    #[test]
    fn test_display_ident_quoting() {
        assert_eq!(Ident::new("abc").to_string(), "abc");
        assert_eq!(Ident::new("my col").to_string(), "`my col`");
        assert_eq!(Ident::quoted("Abc").to_string(), "`Abc`");
        assert_eq!(Ident::new("a`b").to_string(), "`a``b`");
        assert_eq!(Ident::new("1abc").to_string(), "`1abc`");
    }

    #[test]
    fn test_display_qualified_name_with_dblink() {
        let name = QualifiedName {
            schema: Some(Ident::new("hr")),
            name: Ident::new("emp"),
            dblink: Some(Ident::new("remote")),
        };
        assert_eq!(name.to_string(), "hr.emp@remote");
    }

    #[test]
    fn test_display_literals() {
        assert_eq!(Literal::String("it's".into()).to_string(), "'it''s'");
        assert_eq!(Literal::Hex(vec![0xCA, 0xFE]).to_string(), "X'CAFE'");
        assert_eq!(Literal::Decimal("1.5e3".into()).to_string(), "1.5e3");
        assert_eq!(
            Literal::Date("2024-01-01".into()).to_string(),
            "DATE '2024-01-01'"
        );
        assert_eq!(Literal::NationalString("x".into()).to_string(), "N'x'");
    }

    #[test]
    fn test_display_parenthesizes_compound_operands() {
        let e = bin(col("a"), BinaryOp::Or, bin(col("b"), BinaryOp::And, col("c")));
        assert_eq!(e.to_string(), "a OR (b AND c)");
        let neg = Expr::Unary {
            op: UnaryOp::Minus,
            expr: Box::new(Expr::Unary {
                op: UnaryOp::Minus,
                expr: Box::new(int(1)),
                span: Span::ZERO,
            }),
            span: Span::ZERO,
        };
        assert_eq!(neg.to_string(), "-(-1)");
    }

    #[test]
    fn test_display_data_types() {
        let v = DataType::Char {
            kind: CharKind::Varchar,
            length: Some(10),
            semantics: None,
        };
        assert_eq!(v.to_string(), "VARCHAR(10)");
        let n = DataType::Decimal {
            kind: DecimalKind::Number,
            precision: Some(10),
            scale: Some(2),
            unsigned: false,
        };
        assert_eq!(n.to_string(), "NUMBER(10, 2)");
        let ts = DataType::Timestamp {
            precision: Some(6),
            time_zone: Some(TimeZoneKind::WithLocalTimeZone),
        };
        assert_eq!(ts.to_string(), "TIMESTAMP(6) WITH LOCAL TIME ZONE");
        let i = DataType::Int {
            kind: IntKind::BigInt,
            width: Some(20),
            unsigned: true,
            zerofill: false,
        };
        assert_eq!(i.to_string(), "BIGINT(20) UNSIGNED");
        assert_eq!(
            DataType::Enum(vec!["a".into(), "b".into()]).to_string(),
            "ENUM('a', 'b')"
        );
    }

    #[test]
    fn test_display_hint() {
        let hint = Hint {
            name: "LEADING".into(),
            args: vec![
                HintArg::Ident("t1".into()),
                HintArg::List(vec![HintArg::Ident("t2".into()), HintArg::Ident("t3".into())]),
            ],
            span: Span::ZERO,
        };
        assert_eq!(hint.to_string(), "LEADING(t1 (t2 t3))");
    }

    #[test]
    fn test_display_partition_option() {
        let p = PartitionOption {
            method: PartitionMethod::Range {
                columns: true,
                exprs: vec![col("d")],
                interval: None,
            },
            size: Some("AUTO".into()),
            count: Some(PartitionCount::Auto),
            subpartition: None,
            partitions: vec![],
            span: Span::ZERO,
        };
        assert_eq!(
            p.to_string(),
            "PARTITION BY RANGE COLUMNS (d) PARTITION SIZE 'AUTO' PARTITIONS AUTO"
        );
    }

    #[test]
    fn test_display_transaction() {
        let s = TransactionStatement {
            kind: TransactionKind::Rollback {
                work: false,
                to_savepoint: Some(Ident::new("sp1")),
            },
            span: Span::ZERO,
        };
        assert_eq!(s.to_string(), "ROLLBACK TO SAVEPOINT sp1");
    }

    #[test]
    fn test_display_user_spec() {
        let u = UserSpec {
            name: "app".into(),
            host: Some("%".into()),
        };
        assert_eq!(u.to_string(), "app@'%'");
        assert_eq!(UserSpec::new("a b").to_string(), "'a b'");
    }

    #[test]
    fn test_display_system_variable() {
        let v = Variable::System {
            scope: Some(VariableScope::Global),
            name: "autocommit".into(),
        };
        assert_eq!(v.to_string(), "@@global.autocommit");
    }
}
