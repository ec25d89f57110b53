//! SQL Abstract Syntax Tree node types for duosql.
//!
//! Every statement parsed by `duosql-parser` produces a tree of these nodes,
//! in either the MySQL-compatible or the Oracle-compatible dialect. Statement
//! payloads, clauses and expressions carry a [`Span`] pointing back into the
//! source text; a parent's span always covers its children.
//!
//! The tree is pure data. Consumers traverse it with [`walk`] (pre-order,
//! one polymorphic callback plus a [`NodeKind`] discriminator) or with the
//! optional [`Listener`] adapter.

mod display;
pub mod listener;
pub mod walk;

use std::fmt;

pub use listener::{walk_listener, FnListener, Listener};
pub use walk::{walk, ExprKind, NodeKind, NodeRef, StatementKind, WalkControl};

// ---------------------------------------------------------------------------
// Span: source location tracking
// ---------------------------------------------------------------------------

/// A byte-offset range into the original SQL source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character (inclusive).
    pub start: u32,
    /// Byte offset one past the last character (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from start (inclusive) to end (exclusive) byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A zero-length span at position 0, used as a placeholder.
    pub const ZERO: Self = Self { start: 0, end: 0 };

    /// Merge two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Whether `other` lies entirely within this span.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// An identifier as written: `quoted` is true for backtick or double-quoted
/// spellings, which are printed back quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }

    /// Case-insensitive comparison against an unquoted word.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.value.eq_ignore_ascii_case(word)
    }
}

/// A possibly schema-qualified object name, optionally reached through a
/// database link (`schema.name@link`, Oracle mode).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub schema: Option<Ident>,
    pub name: Ident,
    pub dblink: Option<Ident>,
}

impl QualifiedName {
    /// An unqualified name.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: Ident::new(name),
            dblink: None,
        }
    }

    /// A `schema.name` pair.
    #[must_use]
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(Ident::new(schema)),
            name: Ident::new(name),
            dblink: None,
        }
    }
}

/// A column reference with up to three parts (`schema.table.column`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub schema: Option<Ident>,
    pub table: Option<Ident>,
    pub column: Ident,
}

impl ColumnRef {
    #[must_use]
    pub fn bare(column: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: None,
            column: Ident::new(column),
        }
    }

    #[must_use]
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: Some(Ident::new(table)),
            column: Ident::new(column),
        }
    }
}

/// A MySQL account or role name: `name` or `'name'@'host'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserSpec {
    pub name: String,
    pub host: Option<String>,
}

impl UserSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// A top-level SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    // DML
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Merge(MergeStatement),

    // DDL
    CreateTable(CreateTableStatement),
    CreateIndex(CreateIndexStatement),
    CreateView(CreateViewStatement),
    CreateMaterializedView(CreateMaterializedViewStatement),
    CreateMaterializedViewLog(CreateMaterializedViewLogStatement),
    CreateDatabase(CreateDatabaseStatement),
    CreateTablespace(CreateTablespaceStatement),
    CreateTenant(CreateTenantStatement),
    CreateUser(CreateUserStatement),
    CreateRole(CreateRoleStatement),
    CreateSequence(CreateSequenceStatement),
    CreateSynonym(CreateSynonymStatement),
    CreateDatabaseLink(CreateDatabaseLinkStatement),
    CreateProfile(CreateProfileStatement),
    CreateContext(CreateContextStatement),
    AlterTable(AlterTableStatement),
    AlterTablespace(AlterTablespaceStatement),
    AlterTenant(AlterTenantStatement),
    AlterUser(AlterUserStatement),
    AlterSequence(AlterSequenceStatement),
    AlterProfile(AlterProfileStatement),
    Drop(DropStatement),
    DropPrincipal(DropPrincipalStatement),
    Truncate(TruncateStatement),
    RenameTable(RenameTableStatement),
    Comment(CommentStatement),
    Flashback(FlashbackStatement),
    Purge(PurgeStatement),

    // Transaction, session and administration
    Transaction(TransactionStatement),
    Set(SetStatement),
    Show(ShowStatement),
    Use(UseStatement),
    Describe(DescribeStatement),
    Explain(ExplainStatement),
    Grant(GrantStatement),
    Revoke(RevokeStatement),
    Kill(KillStatement),
    Call(CallStatement),
    AlterSystem(AlterSystemStatement),
    AlterSession(AlterSessionStatement),
}

impl Statement {
    /// Source range of the whole statement (without the trailing `;`).
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Select(s) => s.span,
            Self::Insert(s) => s.span,
            Self::Update(s) => s.span,
            Self::Delete(s) => s.span,
            Self::Merge(s) => s.span,
            Self::CreateTable(s) => s.span,
            Self::CreateIndex(s) => s.span,
            Self::CreateView(s) => s.span,
            Self::CreateMaterializedView(s) => s.span,
            Self::CreateMaterializedViewLog(s) => s.span,
            Self::CreateDatabase(s) => s.span,
            Self::CreateTablespace(s) => s.span,
            Self::CreateTenant(s) => s.span,
            Self::CreateUser(s) => s.span,
            Self::CreateRole(s) => s.span,
            Self::CreateSequence(s) => s.span,
            Self::CreateSynonym(s) => s.span,
            Self::CreateDatabaseLink(s) => s.span,
            Self::CreateProfile(s) => s.span,
            Self::CreateContext(s) => s.span,
            Self::AlterTable(s) => s.span,
            Self::AlterTablespace(s) => s.span,
            Self::AlterTenant(s) => s.span,
            Self::AlterUser(s) => s.span,
            Self::AlterSequence(s) => s.span,
            Self::AlterProfile(s) => s.span,
            Self::Drop(s) => s.span,
            Self::DropPrincipal(s) => s.span,
            Self::Truncate(s) => s.span,
            Self::RenameTable(s) => s.span,
            Self::Comment(s) => s.span,
            Self::Flashback(s) => s.span,
            Self::Purge(s) => s.span,
            Self::Transaction(s) => s.span,
            Self::Set(s) => s.span,
            Self::Show(s) => s.span,
            Self::Use(s) => s.span,
            Self::Describe(s) => s.span,
            Self::Explain(s) => s.span,
            Self::Grant(s) => s.span,
            Self::Revoke(s) => s.span,
            Self::Kill(s) => s.span,
            Self::Call(s) => s.span,
            Self::AlterSystem(s) => s.span,
            Self::AlterSession(s) => s.span,
        }
    }
}

// ---------------------------------------------------------------------------
// Literals and operators
// ---------------------------------------------------------------------------

/// Literal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Integer literal that fits in `i64`.
    Integer(i64),
    /// Exact decimal or scientific literal, kept as written (`3.14`, `1e10`)
    /// so no precision is lost.
    Decimal(String),
    /// `'text'`
    String(String),
    /// `N'text'`
    NationalString(String),
    /// `X'CAFE'` or `0xCAFE`
    Hex(Vec<u8>),
    Null,
    True,
    False,
    /// `DATE '2024-01-01'`
    Date(String),
    /// `TIME '12:00:00'`
    Time(String),
    /// `TIMESTAMP '2024-01-01 00:00:00'`
    Timestamp(String),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    /// MySQL `XOR`.
    Xor,
    And,
    Eq,
    /// MySQL `<=>`.
    NullSafeEq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    BitOr,
    BitAnd,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Mul,
    Div,
    /// MySQL integer division `DIV`.
    IntDiv,
    Mod,
    /// MySQL `^`.
    BitXor,
    /// `||` when it means concatenation (Oracle mode, or `pipes_as_concat`).
    Concat,
}

impl BinaryOp {
    /// Whether this is a comparison usable with `ANY`/`ALL`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NullSafeEq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Minus,
    Plus,
    BitNot,
    /// Keyword `NOT`.
    Not,
    /// MySQL `!`.
    LogicalNot,
    /// MySQL `BINARY expr`.
    Binary,
    /// Oracle `PRIOR expr` inside `CONNECT BY`.
    Prior,
    /// Oracle `CONNECT_BY_ROOT expr`.
    ConnectByRoot,
}

/// Pattern-matching operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeOp {
    Like,
    /// `REGEXP` / `RLIKE` (MySQL).
    Regexp,
}

/// `IS [NOT] <test>` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsTest {
    Null,
    True,
    False,
    Unknown,
}

/// Quantifier of a subquery comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Any,
    Some,
    All,
}

/// Oracle pseudo columns and niladic date/time keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoColumn {
    Level,
    RowNum,
    SysDate,
    SysTimestamp,
    ConnectByIsLeaf,
    CurrentDate,
    CurrentTimestamp,
}

/// `seq.NEXTVAL` / `seq.CURRVAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceValueKind {
    NextVal,
    CurrVal,
}

/// Scope prefix of a system variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableScope {
    Global,
    Session,
    Local,
}

/// A MySQL variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `@name`
    User(String),
    /// `@@[scope.]name`
    System {
        scope: Option<VariableScope>,
        name: String,
    },
}

/// Bind parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `?`
    Anonymous,
    /// `:1`
    Numbered(u32),
    /// `:name`
    Named(String),
}

/// Date/time fields used by `EXTRACT` and `INTERVAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeField {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Microsecond,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// SQL expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal, Span),

    /// Column reference: `[schema.][table.]column`.
    Column(ColumnRef, Span),

    /// `LEVEL`, `ROWNUM`, `SYSDATE`, `CURRENT_TIMESTAMP`, ...
    Pseudo(PseudoColumn, Span),

    /// `seq.NEXTVAL` / `seq.CURRVAL`
    SequenceValue {
        sequence: QualifiedName,
        kind: SequenceValueKind,
        span: Span,
    },

    /// `@x`, `@@global.x`
    Variable(Variable, Span),

    /// `?`, `:name`, `:1`
    Placeholder(Placeholder, Span),

    /// `DEFAULT` in a VALUES row or assignment.
    DefaultValue(Span),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
        span: Span,
    },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
        span: Span,
    },

    /// `target := value` (right associative).
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        span: Span,
    },

    /// `expr IS [NOT] NULL|TRUE|FALSE|UNKNOWN`
    Is {
        expr: Box<Expr>,
        not: bool,
        test: IsTest,
        span: Span,
    },

    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        not: bool,
        span: Span,
    },

    /// `expr [NOT] IN (...)`
    In {
        expr: Box<Expr>,
        set: InSet,
        not: bool,
        span: Span,
    },

    /// `expr [NOT] LIKE pattern [ESCAPE e]`, `expr [NOT] REGEXP pattern`
    Like {
        expr: Box<Expr>,
        op: LikeOp,
        pattern: Box<Expr>,
        escape: Option<Box<Expr>>,
        not: bool,
        span: Span,
    },

    /// `expr op ANY|SOME|ALL (subquery)`
    Quantified {
        left: Box<Expr>,
        op: BinaryOp,
        quantifier: Quantifier,
        subquery: Box<SelectStatement>,
        span: Span,
    },

    /// `CASE [operand] WHEN ... THEN ... [ELSE ...] END`
    Case {
        operand: Option<Box<Expr>>,
        whens: Vec<(Expr, Expr)>,
        else_expr: Option<Box<Expr>>,
        span: Span,
    },

    /// `CAST(expr AS type)`
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
        span: Span,
    },

    /// `EXTRACT(field FROM expr)`
    Extract {
        field: DateTimeField,
        expr: Box<Expr>,
        span: Span,
    },

    /// `INTERVAL value field [TO field]`
    Interval {
        value: Box<Expr>,
        field: DateTimeField,
        to: Option<DateTimeField>,
        span: Span,
    },

    /// `[NOT] EXISTS (subquery)`
    Exists {
        subquery: Box<SelectStatement>,
        not: bool,
        span: Span,
    },

    /// Scalar subquery.
    Subquery(Box<SelectStatement>, Span),

    /// Row constructor `(a, b, ...)`.
    Row(Vec<Expr>, Span),

    Function(Box<FunctionCall>),

    /// `expr COLLATE name`
    Collate {
        expr: Box<Expr>,
        collation: Ident,
        span: Span,
    },

    /// MySQL `col->'$.path'` and `col->>'$.path'`.
    JsonAccess {
        expr: Box<Expr>,
        path: Box<Expr>,
        unquote: bool,
        span: Span,
    },

    /// `JSON_VALUE`, `JSON_QUERY`, `JSON_EXISTS` with their clauses.
    Json(Box<JsonFunction>),

    /// Oracle `JSON_OBJECT(KEY k VALUE v, ...)`.
    JsonObject {
        entries: Vec<(Expr, Expr)>,
        span: Span,
    },

    /// `XMLELEMENT`, `XMLAGG`, `XMLPARSE`, `XMLSERIALIZE`.
    Xml(Box<XmlExpr>),
}

impl Expr {
    /// Return the span of this expression node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(_, s)
            | Self::Column(_, s)
            | Self::Pseudo(_, s)
            | Self::Variable(_, s)
            | Self::Placeholder(_, s)
            | Self::DefaultValue(s)
            | Self::Subquery(_, s)
            | Self::Row(_, s) => *s,
            Self::SequenceValue { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Assign { span, .. }
            | Self::Is { span, .. }
            | Self::Between { span, .. }
            | Self::In { span, .. }
            | Self::Like { span, .. }
            | Self::Quantified { span, .. }
            | Self::Case { span, .. }
            | Self::Cast { span, .. }
            | Self::Extract { span, .. }
            | Self::Interval { span, .. }
            | Self::Exists { span, .. }
            | Self::Collate { span, .. }
            | Self::JsonAccess { span, .. }
            | Self::JsonObject { span, .. } => *span,
            Self::Function(call) => call.span,
            Self::Json(json) => json.span,
            Self::Xml(xml) => xml.span(),
        }
    }
}

/// The set of values for an IN expression.
#[derive(Debug, Clone, PartialEq)]
pub enum InSet {
    List(Vec<Expr>),
    Subquery(Box<SelectStatement>),
}

/// A function or aggregate call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: QualifiedName,
    pub distinct: bool,
    pub args: FunctionArgs,
    /// `GROUP_CONCAT(x ORDER BY y ...)`
    pub order_by: Vec<OrderingTerm>,
    /// `GROUP_CONCAT(... SEPARATOR ',')`
    pub separator: Option<String>,
    /// `LISTAGG(...) WITHIN GROUP (ORDER BY ...)`
    pub within_group: Vec<OrderingTerm>,
    pub over: Option<WindowRef>,
    pub span: Span,
}

/// Function argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArgs {
    /// `COUNT(*)`
    Star,
    List(Vec<FunctionArg>),
}

/// One argument, optionally named (`name => value`, Oracle).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArg {
    pub name: Option<Ident>,
    pub value: Expr,
}

/// Which SQL/JSON query function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonFunctionKind {
    Value,
    Query,
    Exists,
}

/// Array wrapper behavior of `JSON_QUERY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonWrapper {
    Without,
    With,
    WithConditional,
    WithUnconditional,
}

/// `ON EMPTY` / `ON ERROR` response.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonBehavior {
    Null,
    Error,
    Default(Expr),
}

/// `JSON_VALUE(expr, path [RETURNING type] [wrapper] [x ON EMPTY] [y ON ERROR])`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonFunction {
    pub kind: JsonFunctionKind,
    pub expr: Expr,
    pub path: Expr,
    pub returning: Option<DataType>,
    pub wrapper: Option<JsonWrapper>,
    pub on_empty: Option<JsonBehavior>,
    pub on_error: Option<JsonBehavior>,
    pub span: Span,
}

/// XML functional expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlExpr {
    /// `XMLELEMENT(name [, XMLATTRIBUTES(expr [AS alias], ...)] [, content...])`
    Element {
        name: Ident,
        attributes: Vec<(Expr, Option<Ident>)>,
        content: Vec<Expr>,
        span: Span,
    },
    /// `XMLAGG(expr [ORDER BY ...])`
    Agg {
        expr: Expr,
        order_by: Vec<OrderingTerm>,
        span: Span,
    },
    /// `XMLPARSE(DOCUMENT|CONTENT expr [WELLFORMED])`
    Parse {
        document: bool,
        expr: Expr,
        wellformed: bool,
        span: Span,
    },
    /// `XMLSERIALIZE(DOCUMENT|CONTENT expr [AS type])`
    Serialize {
        document: bool,
        expr: Expr,
        as_type: Option<DataType>,
        span: Span,
    },
}

impl XmlExpr {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Element { span, .. }
            | Self::Agg { span, .. }
            | Self::Parse { span, .. }
            | Self::Serialize { span, .. } => *span,
        }
    }
}

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalKind {
    Decimal,
    Dec,
    Numeric,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    Float,
    Double,
    Real,
    BinaryFloat,
    BinaryDouble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharKind {
    Char,
    Varchar,
    Varchar2,
    NChar,
    NVarchar2,
    Binary,
    VarBinary,
    Raw,
}

/// Oracle `VARCHAR2(10 BYTE|CHAR)` length semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthSemantics {
    Byte,
    Char,
}

/// Length-less large object and text types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LobKind {
    TinyText,
    Text,
    MediumText,
    LongText,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Clob,
    NClob,
}

/// `TIMESTAMP ... WITH [LOCAL] TIME ZONE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZoneKind {
    WithTimeZone,
    WithLocalTimeZone,
}

/// Column and cast data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Int {
        kind: IntKind,
        width: Option<u32>,
        unsigned: bool,
        zerofill: bool,
    },
    Decimal {
        kind: DecimalKind,
        precision: Option<u32>,
        scale: Option<i32>,
        unsigned: bool,
    },
    Float {
        kind: FloatKind,
        precision: Option<u32>,
        scale: Option<u32>,
        unsigned: bool,
    },
    Char {
        kind: CharKind,
        length: Option<u32>,
        semantics: Option<LengthSemantics>,
    },
    Lob(LobKind),
    Date,
    Time(Option<u32>),
    DateTime(Option<u32>),
    Timestamp {
        precision: Option<u32>,
        time_zone: Option<TimeZoneKind>,
    },
    Year,
    IntervalYearToMonth(Option<u32>),
    IntervalDayToSecond(Option<u32>, Option<u32>),
    Bit(Option<u32>),
    Bool,
    Enum(Vec<String>),
    Set(Vec<String>),
    Json,
    XmlType,
    RowId,
    /// `SIGNED [INTEGER]` / `UNSIGNED [INTEGER]` in MySQL casts.
    CastInteger { unsigned: bool },
}

// ---------------------------------------------------------------------------
// Hints
// ---------------------------------------------------------------------------

/// One optimizer hint from a `/*+ ... */` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Hint name, upper-cased.
    pub name: String,
    pub args: Vec<HintArg>,
    pub span: Span,
}

/// Hint argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintArg {
    /// Identifier, possibly with a query-block suffix (`t1@sel$1`).
    Ident(String),
    Number(String),
    String(String),
    /// Parenthesized group, e.g. `LEADING((t1 t2) t3)`.
    List(Vec<HintArg>),
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// A full query: `[WITH ...] body [ORDER BY] [LIMIT | OFFSET/FETCH] [FOR UPDATE]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub with: Option<WithClause>,
    pub body: SelectBody,
    pub order_by: Vec<OrderingTerm>,
    /// MySQL `LIMIT`.
    pub limit: Option<LimitClause>,
    /// Oracle `OFFSET ... FETCH ...`.
    pub fetch: Option<FetchClause>,
    pub for_update: Option<ForUpdate>,
    pub span: Span,
}

/// WITH clause (common table expressions).
#[derive(Debug, Clone, PartialEq)]
pub struct WithClause {
    pub recursive: bool,
    pub ctes: Vec<Cte>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub query: Box<SelectStatement>,
    pub span: Span,
}

/// A chain of query terms joined by set operators (left associative).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBody {
    pub select: SelectCore,
    pub compounds: Vec<(CompoundOp, SelectCore)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundOp {
    Union,
    UnionAll,
    Intersect,
    Except,
    /// Oracle `MINUS`.
    Minus,
}

/// One term of a set operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectCore {
    Select(Box<QuerySpec>),
    /// `( query )`
    Nested(Box<SelectStatement>),
}

/// `SELECT [hints] [DISTINCT] items [INTO ...] [FROM ...] [WHERE] [hierarchy]
/// [GROUP BY] [HAVING] [WINDOW]`
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub hints: Vec<Hint>,
    pub distinct: bool,
    pub columns: Vec<SelectItem>,
    pub into: Vec<Expr>,
    pub from: Vec<TableRef>,
    pub where_clause: Option<Expr>,
    pub hierarchical: Option<HierarchicalClause>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expr>,
    pub windows: Vec<NamedWindow>,
    pub span: Span,
}

/// A select-list item.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    Expr {
        expr: Expr,
        alias: Option<Ident>,
        span: Span,
    },
    /// `*`
    Wildcard(Span),
    /// `t.*` or `schema.t.*`
    QualifiedWildcard(QualifiedName, Span),
}

impl SelectItem {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Expr { span, .. } | Self::Wildcard(span) | Self::QualifiedWildcard(_, span) => {
                *span
            }
        }
    }
}

/// Oracle hierarchical query clause.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchicalClause {
    pub start_with: Option<Expr>,
    pub nocycle: bool,
    pub connect_by: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub items: Vec<GroupingElement>,
    /// MySQL `WITH ROLLUP`.
    pub with_rollup: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingElement {
    Expr(Expr),
    Rollup(Vec<Expr>),
    Cube(Vec<Expr>),
    GroupingSets(Vec<Vec<Expr>>),
}

/// A FROM-clause item.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    Table {
        name: QualifiedName,
        partitions: Vec<Ident>,
        alias: Option<Ident>,
        index_hints: Vec<IndexHint>,
        span: Span,
    },
    Subquery {
        query: Box<SelectStatement>,
        alias: Option<Ident>,
        span: Span,
    },
    Join {
        left: Box<TableRef>,
        op: JoinOperator,
        right: Box<TableRef>,
        constraint: Option<JoinConstraint>,
        span: Span,
    },
    /// `( table_ref )`
    Nested { inner: Box<TableRef>, span: Span },
}

impl TableRef {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Table { span, .. }
            | Self::Subquery { span, .. }
            | Self::Join { span, .. }
            | Self::Nested { span, .. } => *span,
        }
    }
}

/// MySQL index hint: `USE|FORCE|IGNORE INDEX (i1, i2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHint {
    pub kind: IndexHintKind,
    pub names: Vec<Ident>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexHintKind {
    Use,
    Force,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinOperator {
    pub natural: bool,
    pub kind: JoinKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedWindow {
    pub name: Ident,
    pub spec: WindowSpec,
}

/// Window specification for window functions.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub base: Option<Ident>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderingTerm>,
    pub frame: Option<FrameSpec>,
    pub span: Span,
}

/// `OVER name` or `OVER (spec)`.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowRef {
    Named(Ident),
    Spec(WindowSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub units: FrameUnits,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameUnits {
    Rows,
    Range,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBound {
    UnboundedPreceding,
    Preceding(Box<Expr>),
    CurrentRow,
    Following(Box<Expr>),
    UnboundedFollowing,
}

/// ORDER BY term.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingTerm {
    pub expr: Expr,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullsOrder {
    First,
    Last,
}

/// MySQL `LIMIT count [OFFSET offset]` (also `LIMIT offset, count`).
#[derive(Debug, Clone, PartialEq)]
pub struct LimitClause {
    pub limit: Expr,
    pub offset: Option<Expr>,
    pub span: Span,
}

/// Oracle `[OFFSET n ROWS] [FETCH FIRST n [PERCENT] ROWS ONLY|WITH TIES]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchClause {
    pub offset: Option<Expr>,
    pub count: Option<Expr>,
    pub percent: bool,
    pub with_ties: bool,
    pub span: Span,
}

/// `FOR UPDATE [OF cols] [NOWAIT | WAIT n | SKIP LOCKED]`
#[derive(Debug, Clone, PartialEq)]
pub struct ForUpdate {
    pub of: Vec<ColumnRef>,
    pub wait: Option<LockWait>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LockWait {
    NoWait,
    Wait(Expr),
    SkipLocked,
}

// ---------------------------------------------------------------------------
// DML
// ---------------------------------------------------------------------------

/// `INSERT` or MySQL `REPLACE`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub hints: Vec<Hint>,
    pub replace: bool,
    pub ignore: bool,
    pub table: QualifiedName,
    pub partitions: Vec<Ident>,
    pub alias: Option<Ident>,
    pub columns: Vec<Ident>,
    pub source: InsertSource,
    /// MySQL `ON DUPLICATE KEY UPDATE`.
    pub on_duplicate: Vec<Assignment>,
    pub returning: Option<ReturningClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    Values(Vec<Vec<Expr>>),
    Select(Box<SelectStatement>),
    /// MySQL `INSERT ... SET a = 1`.
    Set(Vec<Assignment>),
}

/// `col = expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: ColumnRef,
    pub value: Expr,
    pub span: Span,
}

/// `RETURNING exprs [INTO targets]`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturningClause {
    pub items: Vec<SelectItem>,
    pub into: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub hints: Vec<Hint>,
    pub ignore: bool,
    pub tables: Vec<TableRef>,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderingTerm>,
    pub limit: Option<LimitClause>,
    pub returning: Option<ReturningClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub hints: Vec<Hint>,
    pub table: TableRef,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderingTerm>,
    pub limit: Option<LimitClause>,
    pub returning: Option<ReturningClause>,
    pub span: Span,
}

/// Oracle `MERGE INTO target USING source ON (cond) WHEN ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStatement {
    pub hints: Vec<Hint>,
    pub target: QualifiedName,
    pub target_alias: Option<Ident>,
    pub source: TableRef,
    pub on: Expr,
    pub clauses: Vec<MergeClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeClause {
    /// `WHEN MATCHED THEN UPDATE SET ... [WHERE ...] [DELETE WHERE ...]`
    Update {
        assignments: Vec<Assignment>,
        where_clause: Option<Expr>,
        delete_where: Option<Expr>,
        span: Span,
    },
    /// `WHEN NOT MATCHED THEN INSERT [(cols)] VALUES (...) [WHERE ...]`
    Insert {
        columns: Vec<Ident>,
        values: Vec<Expr>,
        where_clause: Option<Expr>,
        span: Span,
    },
}

impl MergeClause {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Update { span, .. } | Self::Insert { span, .. } => *span,
        }
    }
}

// ---------------------------------------------------------------------------
// Generic options
// ---------------------------------------------------------------------------

/// `NAME [=] value` option used by tables, indexes, tenants, tablespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOption {
    /// Upper-cased option words, e.g. `"DEFAULT CHARSET"`.
    pub name: String,
    pub value: OptionValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Ident(Ident),
    Literal(Literal),
    List(Vec<OptionValue>),
}

// ---------------------------------------------------------------------------
// DDL: tables and indexes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporaryKind {
    /// MySQL `CREATE TEMPORARY TABLE`.
    Temporary,
    /// Oracle `CREATE GLOBAL TEMPORARY TABLE`.
    GlobalTemporary,
}

/// `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub temporary: Option<TemporaryKind>,
    pub if_not_exists: bool,
    pub name: QualifiedName,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    /// MySQL `CREATE TABLE t LIKE other`.
    pub like: Option<QualifiedName>,
    pub options: Vec<SqlOption>,
    pub partition: Option<PartitionOption>,
    pub as_query: Option<Box<SelectStatement>>,
    pub span: Span,
}

/// Column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint {
    pub name: Option<Ident>,
    pub kind: ColumnConstraintKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind {
    Null,
    NotNull,
    Default(Expr),
    AutoIncrement,
    PrimaryKey,
    Unique,
    Check(Expr),
    References(ForeignKeyRef),
    Comment(String),
    Generated {
        expr: Expr,
        storage: Option<GeneratedStorage>,
    },
    OnUpdate(Expr),
    Collate(Ident),
    CharacterSet(Ident),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratedStorage {
    Virtual,
    Stored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    pub name: Option<Ident>,
    pub kind: TableConstraintKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    PrimaryKey(Vec<IndexColumn>),
    Unique {
        index_name: Option<Ident>,
        columns: Vec<IndexColumn>,
    },
    ForeignKey {
        columns: Vec<Ident>,
        reference: ForeignKeyRef,
    },
    Check(Expr),
    /// MySQL inline `INDEX|KEY [name] (cols)`, `FULLTEXT KEY ...`.
    Index {
        kind: Option<IndexKind>,
        index_name: Option<Ident>,
        columns: Vec<IndexColumn>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: QualifiedName,
    pub columns: Vec<Ident>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

/// Indexed column with optional MySQL prefix length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    pub name: Ident,
    pub length: Option<u32>,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Unique,
    Fulltext,
    Spatial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexScope {
    Local,
    Global,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStatement {
    pub kind: Option<IndexKind>,
    pub if_not_exists: bool,
    pub name: QualifiedName,
    pub table: QualifiedName,
    pub columns: Vec<IndexColumn>,
    pub scope: Option<IndexScope>,
    pub options: Vec<SqlOption>,
    pub partition: Option<PartitionOption>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStatement {
    pub name: QualifiedName,
    pub actions: Vec<AlterTableAction>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// `ADD [COLUMN] def` or `ADD (def, ...)`
    AddColumns { columns: Vec<ColumnDef>, span: Span },
    AddConstraint(TableConstraint),
    DropColumn { name: Ident, span: Span },
    DropConstraint { name: Ident, span: Span },
    DropPrimaryKey { span: Span },
    DropIndex { name: Ident, span: Span },
    /// `MODIFY [COLUMN] def` or Oracle `MODIFY (def, ...)`
    ModifyColumns { columns: Vec<ColumnDef>, span: Span },
    /// MySQL `CHANGE [COLUMN] old def`
    ChangeColumn {
        old: Ident,
        column: ColumnDef,
        span: Span,
    },
    RenameTable { name: QualifiedName, span: Span },
    RenameColumn { old: Ident, new: Ident, span: Span },
    /// `ALTER [COLUMN] c SET DEFAULT e` / `DROP DEFAULT`
    AlterColumnDefault {
        column: Ident,
        default: Option<Expr>,
        span: Span,
    },
    SetOptions { options: Vec<SqlOption>, span: Span },
    AddPartitions {
        partitions: Vec<PartitionDef>,
        span: Span,
    },
    DropPartitions {
        names: Vec<Ident>,
        subpartition: bool,
        span: Span,
    },
    TruncatePartitions {
        names: Vec<Ident>,
        subpartition: bool,
        span: Span,
    },
    /// Re-partition with a new `PARTITION BY`.
    Partition(PartitionOption),
}

impl AlterTableAction {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::AddConstraint(c) => c.span,
            Self::Partition(p) => p.span,
            Self::AddColumns { span, .. }
            | Self::DropColumn { span, .. }
            | Self::DropConstraint { span, .. }
            | Self::DropPrimaryKey { span }
            | Self::DropIndex { span, .. }
            | Self::ModifyColumns { span, .. }
            | Self::ChangeColumn { span, .. }
            | Self::RenameTable { span, .. }
            | Self::RenameColumn { span, .. }
            | Self::AlterColumnDefault { span, .. }
            | Self::SetOptions { span, .. }
            | Self::AddPartitions { span, .. }
            | Self::DropPartitions { span, .. }
            | Self::TruncatePartitions { span, .. } => *span,
        }
    }
}

// ---------------------------------------------------------------------------
// DDL: partitioning
// ---------------------------------------------------------------------------

/// `PARTITION BY ...` clause of a table, index or materialized view.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionOption {
    pub method: PartitionMethod,
    /// `PARTITION SIZE 'AUTO'` (auto-partitioning).
    pub size: Option<String>,
    /// `PARTITIONS n` or `PARTITIONS AUTO`.
    pub count: Option<PartitionCount>,
    pub subpartition: Option<SubpartitionOption>,
    pub partitions: Vec<PartitionDef>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionMethod {
    /// MySQL takes one expression, Oracle a column list.
    Hash(Vec<Expr>),
    /// MySQL `KEY(cols)`.
    Key(Vec<Ident>),
    Range {
        columns: bool,
        exprs: Vec<Expr>,
        /// Oracle interval partitioning.
        interval: Option<Expr>,
    },
    List {
        columns: bool,
        exprs: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionCount {
    Fixed(u32),
    Auto,
}

/// `SUBPARTITION BY ... [SUBPARTITIONS n | SUBPARTITION TEMPLATE (...)]`
#[derive(Debug, Clone, PartialEq)]
pub struct SubpartitionOption {
    pub method: PartitionMethod,
    pub count: Option<u32>,
    pub template: Vec<PartitionDef>,
    pub span: Span,
}

/// A `PARTITION p ...` or `SUBPARTITION sp ...` element.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionDef {
    pub subpartition: bool,
    pub name: Ident,
    pub values: Option<PartitionValues>,
    pub options: Vec<SqlOption>,
    pub subpartitions: Vec<PartitionDef>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionValues {
    /// `VALUES LESS THAN (...)`
    LessThan(Vec<PartitionBound>),
    /// MySQL `VALUES IN (...)`
    In(Vec<PartitionBound>),
    /// Oracle `VALUES (...)`
    List(Vec<PartitionBound>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionBound {
    MaxValue,
    Default,
    Expr(Expr),
}

// ---------------------------------------------------------------------------
// DDL: views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCheckOption {
    CheckOption,
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateViewStatement {
    pub or_replace: bool,
    /// `FORCE` (`Some(true)`) or `NO FORCE` (`Some(false)`), Oracle.
    pub force: Option<bool>,
    pub name: QualifiedName,
    pub columns: Vec<Ident>,
    pub query: Box<SelectStatement>,
    pub check_option: Option<ViewCheckOption>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshMethod {
    Fast,
    Complete,
    Force,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshMode {
    OnDemand,
    OnCommit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshSpec {
    Never,
    Refresh {
        method: Option<RefreshMethod>,
        mode: Option<RefreshMode>,
        start_with: Option<Expr>,
        next: Option<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMaterializedViewStatement {
    pub name: QualifiedName,
    pub columns: Vec<Ident>,
    pub partition: Option<PartitionOption>,
    pub refresh: Option<RefreshSpec>,
    pub query_rewrite: Option<bool>,
    pub query: Box<SelectStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MvLogWith {
    PrimaryKey,
    RowId,
    Sequence,
    Columns(Vec<Ident>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MvLogPurge {
    Immediate,
    Schedule {
        start_with: Option<Expr>,
        next: Option<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMaterializedViewLogStatement {
    pub table: QualifiedName,
    pub with: Vec<MvLogWith>,
    /// `INCLUDING NEW VALUES` (`Some(true)`) / `EXCLUDING NEW VALUES`.
    pub new_values: Option<bool>,
    pub purge: Option<MvLogPurge>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// DDL: databases, tablespaces, tenants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatabaseStatement {
    pub if_not_exists: bool,
    pub name: Ident,
    pub options: Vec<SqlOption>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTablespaceStatement {
    pub name: Ident,
    pub options: Vec<SqlOption>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTablespaceStatement {
    pub name: Ident,
    pub options: Vec<SqlOption>,
    pub span: Span,
}

/// `CREATE TENANT [IF NOT EXISTS] t [options] [SET var = value, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTenantStatement {
    pub if_not_exists: bool,
    pub name: Ident,
    pub options: Vec<SqlOption>,
    pub variables: Vec<VariableAssignment>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTenantStatement {
    pub name: Ident,
    pub action: AlterTenantAction,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTenantAction {
    SetOptions(Vec<SqlOption>),
    SetVariables(Vec<VariableAssignment>),
    Lock,
    Unlock,
    RenameGlobalName(Ident),
}

// ---------------------------------------------------------------------------
// DDL: users, roles, privileges
// ---------------------------------------------------------------------------

/// `user [IDENTIFIED BY 'password']`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentification {
    pub user: UserSpec,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAttribute {
    IdentifiedBy(String),
    Profile(Ident),
    DefaultTablespace(Ident),
    /// `ACCOUNT LOCK` (`true`) / `ACCOUNT UNLOCK`.
    AccountLock(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserStatement {
    pub if_not_exists: bool,
    pub users: Vec<UserIdentification>,
    pub attributes: Vec<UserAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterUserStatement {
    pub user: UserSpec,
    pub attributes: Vec<UserAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoleStatement {
    pub if_not_exists: bool,
    pub roles: Vec<UserSpec>,
    /// `IDENTIFIED BY 'pw'`; `NOT IDENTIFIED` is the default.
    pub password: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    User,
    Role,
}

/// `DROP USER` / `DROP ROLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct DropPrincipalStatement {
    pub kind: PrincipalKind,
    pub if_exists: bool,
    pub names: Vec<UserSpec>,
    pub cascade: bool,
    pub span: Span,
}

/// A privilege, possibly restricted to columns: `SELECT (a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Privilege {
    /// Upper-cased privilege words, e.g. `"CREATE VIEW"`, or a role name.
    pub name: String,
    pub columns: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantObject {
    /// `*.*`
    Global,
    /// `db.*`
    AllInSchema(Ident),
    Object(QualifiedName),
}

/// `GRANT privileges [ON object] TO grantees [WITH GRANT|ADMIN OPTION]`.
/// Without `ON` the privileges are roles or system privileges.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantStatement {
    pub privileges: Vec<Privilege>,
    pub object: Option<GrantObject>,
    pub grantees: Vec<UserSpec>,
    pub with_grant_option: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevokeStatement {
    pub privileges: Vec<Privilege>,
    pub object: Option<GrantObject>,
    pub grantees: Vec<UserSpec>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// DDL: sequences, synonyms, database links, profiles, contexts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOption {
    StartWith(Literal),
    IncrementBy(Literal),
    /// `None` is `NOMINVALUE`.
    MinValue(Option<Literal>),
    /// `None` is `NOMAXVALUE`.
    MaxValue(Option<Literal>),
    /// `None` is `NOCACHE`.
    Cache(Option<Literal>),
    Cycle(bool),
    Order(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSequenceStatement {
    pub if_not_exists: bool,
    pub name: QualifiedName,
    pub options: Vec<SequenceOption>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterSequenceStatement {
    pub name: QualifiedName,
    pub options: Vec<SequenceOption>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSynonymStatement {
    pub or_replace: bool,
    pub public: bool,
    pub name: QualifiedName,
    pub target: QualifiedName,
    pub span: Span,
}

/// `CREATE [PUBLIC] DATABASE LINK l CONNECT TO user[@tenant] IDENTIFIED BY pw
/// [HOST 'ip:port'] [USING 'descriptor']`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatabaseLinkStatement {
    pub public: bool,
    pub name: Ident,
    pub user: Ident,
    pub tenant: Option<Ident>,
    pub password: String,
    pub host: Option<String>,
    pub using: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLimitValue {
    Unlimited,
    Default,
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLimit {
    pub resource: Ident,
    pub value: ProfileLimitValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileStatement {
    pub name: Ident,
    pub limits: Vec<ProfileLimit>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterProfileStatement {
    pub name: Ident,
    pub limits: Vec<ProfileLimit>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextScope {
    InitializedExternally,
    InitializedGlobally,
    AccessedGlobally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateContextStatement {
    pub or_replace: bool,
    pub namespace: Ident,
    pub package: QualifiedName,
    pub scope: Option<ContextScope>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// DDL: drop, truncate, rename, comment, recycle bin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Table,
    View,
    MaterializedView,
    MaterializedViewLog,
    Index,
    Database,
    Tablespace,
    Tenant,
    Sequence,
    Synonym,
    DatabaseLink,
    Profile,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropBehavior {
    Cascade,
    CascadeConstraints,
    Restrict,
    Purge,
    Force,
}

/// `DROP <object> [IF EXISTS] names [ON table] [behavior]`
#[derive(Debug, Clone, PartialEq)]
pub struct DropStatement {
    pub object_type: ObjectType,
    pub public: bool,
    pub if_exists: bool,
    pub names: Vec<QualifiedName>,
    /// MySQL `DROP INDEX i ON t`.
    pub table: Option<QualifiedName>,
    pub behavior: Option<DropBehavior>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TruncateStatement {
    pub table: QualifiedName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameTableStatement {
    pub renames: Vec<(QualifiedName, QualifiedName)>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentTarget {
    Table,
    Column,
}

/// Oracle `COMMENT ON TABLE t IS '...'` / `COMMENT ON COLUMN t.c IS '...'`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStatement {
    pub target: CommentTarget,
    pub object: QualifiedName,
    pub column: Option<Ident>,
    pub comment: String,
    pub span: Span,
}

/// `FLASHBACK TABLE t TO BEFORE DROP [RENAME TO n]`
#[derive(Debug, Clone, PartialEq)]
pub struct FlashbackStatement {
    pub table: QualifiedName,
    pub rename_to: Option<QualifiedName>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurgeTarget {
    Table(QualifiedName),
    Index(QualifiedName),
    RecycleBin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurgeStatement {
    pub target: PurgeTarget,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Transaction control and session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCharacteristic {
    IsolationLevel(IsolationLevel),
    ReadOnly,
    ReadWrite,
    /// `WITH CONSISTENT SNAPSHOT`
    ConsistentSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Start(Vec<TransactionCharacteristic>),
    Begin { work: bool },
    Commit { work: bool },
    Rollback {
        work: bool,
        to_savepoint: Option<Ident>,
    },
    Savepoint(Ident),
    ReleaseSavepoint(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStatement {
    pub kind: TransactionKind,
    pub span: Span,
}

/// Left side of a variable assignment in `SET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetTarget {
    User(String),
    System {
        scope: Option<VariableScope>,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub target: SetTarget,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetKind {
    Variables(Vec<VariableAssignment>),
    /// `SET NAMES charset [COLLATE c]`; `None` is `DEFAULT`.
    Names {
        charset: Option<String>,
        collation: Option<String>,
    },
    CharacterSet(Option<String>),
    Password {
        user: Option<UserSpec>,
        password: String,
    },
    Transaction {
        scope: Option<VariableScope>,
        characteristics: Vec<TransactionCharacteristic>,
    },
    Role(RoleSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSpec {
    All,
    None,
    Default,
    Roles(Vec<UserSpec>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetStatement {
    pub kind: SetKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShowKind {
    Tables { full: bool, from: Option<Ident> },
    Databases,
    Columns { full: bool, table: QualifiedName },
    Index { table: QualifiedName },
    CreateTable(QualifiedName),
    CreateView(QualifiedName),
    Variables { scope: Option<VariableScope> },
    Status { scope: Option<VariableScope> },
    Warnings,
    Errors,
    ProcessList { full: bool },
    Grants { user: Option<UserSpec> },
    Tenants,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShowFilter {
    Like(String),
    Where(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowStatement {
    pub kind: ShowKind,
    pub filter: Option<ShowFilter>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseStatement {
    pub database: Ident,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeStatement {
    pub table: QualifiedName,
    pub column: Option<Ident>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainFormat {
    Basic,
    Extended,
    Outline,
    Partitions,
    /// `FORMAT = name`
    Format(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainStatement {
    pub format: Option<ExplainFormat>,
    pub statement: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillTarget {
    Connection,
    Query,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KillStatement {
    pub target: Option<KillTarget>,
    pub id: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStatement {
    pub procedure: QualifiedName,
    pub args: Vec<Expr>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// System administration
// ---------------------------------------------------------------------------

/// `name = value`, used by `ALTER SYSTEM` and `ALTER SESSION`.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub name: Ident,
    pub value: Expr,
}

/// `ALTER SYSTEM SET p = v [target options]`: parameter plus its
/// `TENANT = ...` / `ZONE = ...` / `SERVER = ...` / `SCOPE = ...` modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemParameter {
    pub setting: Setting,
    pub targets: Vec<Setting>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreezeKind {
    Major,
    Minor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterSystemAction {
    Set(Vec<SystemParameter>),
    Freeze {
        kind: FreezeKind,
        targets: Vec<Setting>,
    },
    /// `FLUSH <kind> CACHE [targets] [GLOBAL]`
    FlushCache {
        cache: Ident,
        targets: Vec<Setting>,
        global: bool,
    },
    KillSession {
        session: Expr,
        immediate: bool,
    },
    Checkpoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterSystemStatement {
    pub action: AlterSystemAction,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterSessionStatement {
    pub settings: Vec<Setting>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge_and_contains() {
        let a = Span::new(3, 7);
        let b = Span::new(5, 12);
        let m = a.merge(b);
        assert_eq!(m, Span::new(3, 12));
        assert!(m.contains(a));
        assert!(m.contains(b));
        assert!(!a.contains(b));
        assert_eq!(m.len(), 9);
        assert!(Span::ZERO.is_empty());
        assert_eq!(format!("{m:?}"), "3..12");
    }

    #[test]
    fn test_ident_matches_case_insensitively() {
        assert!(Ident::new("Level").matches("LEVEL"));
        assert!(Ident::quoted("x").quoted);
        assert!(!Ident::new("x").quoted);
    }

    #[test]
    fn test_statement_span_accessor() {
        let stmt = Statement::Transaction(TransactionStatement {
            kind: TransactionKind::Commit { work: false },
            span: Span::new(0, 6),
        });
        assert_eq!(stmt.span(), Span::new(0, 6));
    }

    #[test]
    fn test_expr_span_accessor() {
        let lit = Expr::Literal(Literal::Integer(1), Span::new(7, 8));
        let col = Expr::Column(ColumnRef::bare("a"), Span::new(11, 12));
        let bin = Expr::Binary {
            left: Box::new(lit),
            op: BinaryOp::Add,
            right: Box::new(col),
            span: Span::new(7, 12),
        };
        assert_eq!(bin.span(), Span::new(7, 12));
        let call = Expr::Function(Box::new(FunctionCall {
            name: QualifiedName::bare("count"),
            distinct: false,
            args: FunctionArgs::Star,
            order_by: vec![],
            separator: None,
            within_group: vec![],
            over: None,
            span: Span::new(0, 8),
        }));
        assert_eq!(call.span(), Span::new(0, 8));
    }

    #[test]
    fn test_comparison_ops() {
        assert!(BinaryOp::Eq.is_comparison());
        assert!(BinaryOp::NullSafeEq.is_comparison());
        assert!(!BinaryOp::Add.is_comparison());
        assert!(!BinaryOp::Concat.is_comparison());
    }

    #[test]
    fn test_alter_action_span() {
        let action = AlterTableAction::DropColumn {
            name: Ident::new("c"),
            span: Span::new(14, 27),
        };
        assert_eq!(action.span(), Span::new(14, 27));
    }
}
