//! Token types shared by the lexer and the parser.
//!
//! Every token carries its kind, the raw source text it was cut from, a
//! byte-offset span and the 1-based line/column of its first byte. Keywords
//! are a separate `Copy` enum so the parser matches them without string
//! comparisons; which words become keywords at all depends on the dialect.

use std::fmt;

use duosql_ast::Span;

use crate::dialect::Dialect;

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token exactly as written.
    pub lexeme: String,
    /// Byte-offset span into the original source.
    pub span: Span,
    /// Line number (1-based) of the first byte.
    pub line: u32,
    /// Column number (1-based, in bytes) of the first byte.
    pub col: u32,
}

impl Token {
    /// Whether this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }
}

/// Token discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // === Literals ===
    /// Integer literal that fits in `i64`.
    Integer(i64),
    /// Decimal, scientific, or overflowing integer literal, kept as written.
    Decimal(String),
    /// `'text'` (and `"text"` in MySQL mode without `ansi_quotes`).
    String(String),
    /// `N'text'`
    NationalString(String),
    /// `X'CAFE'` or `0xCAFE`.
    HexString(Vec<u8>),

    // === Names ===
    /// Unquoted identifier that is not a keyword in the active dialect.
    Id(String),
    /// Backtick or double-quoted identifier.
    QuotedId(String),
    Keyword(Keyword),

    // === Parameters and variables ===
    /// `?`
    Question,
    /// `:name` or `:1`, text after the colon.
    BindParam(String),
    /// MySQL `@name`, `@'name'`, ``@`name` ``.
    UserVar(String),
    /// MySQL `@@[scope.]name`, text after `@@`.
    SystemVar(String),

    /// Body of a `/*+ ... */` comment.
    Hint(String),

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Ampersand,
    Pipe,
    Tilde,
    Bang,
    ShiftLeft,
    ShiftRight,
    Eq,
    /// `<=>`
    NullSafeEq,
    /// `!=`
    Ne,
    /// `<>`
    LtGt,
    Lt,
    Le,
    Gt,
    Ge,
    /// `||`
    DoublePipe,
    /// `&&`
    DoubleAmpersand,
    /// `:=`
    Assign,
    /// `->`
    Arrow,
    /// `->>`
    DoubleArrow,
    /// `=>`
    FatArrow,
    /// `@` (Oracle dblink marker, MySQL account host separator).
    At,

    // === Punctuation ===
    Dot,
    Comma,
    Semicolon,
    Colon,
    LeftParen,
    RightParen,

    // === Special ===
    Eof,
    /// In-band lexical error produced by lossy tokenization.
    Error(String),
}

impl TokenKind {
    /// Short human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("number {n}"),
            Self::Decimal(s) => format!("number {s}"),
            Self::String(_) | Self::NationalString(_) => "string literal".to_owned(),
            Self::HexString(_) => "hex literal".to_owned(),
            Self::Id(s) => format!("identifier '{s}'"),
            Self::QuotedId(s) => format!("quoted identifier '{s}'"),
            Self::Keyword(kw) => format!("keyword {}", kw.as_str()),
            Self::Question => "'?'".to_owned(),
            Self::BindParam(name) => format!("bind parameter :{name}"),
            Self::UserVar(name) => format!("variable @{name}"),
            Self::SystemVar(name) => format!("variable @@{name}"),
            Self::Hint(_) => "hint".to_owned(),
            Self::Eof => "end of input".to_owned(),
            Self::Error(msg) => format!("invalid token ({msg})"),
            other => format!("'{}'", other.punct_str()),
        }
    }

    pub(crate) fn punct_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::Ne => "!=",
            Self::LtGt => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::DoublePipe => "||",
            Self::DoubleAmpersand => "&&",
            Self::Assign => ":=",
            Self::Arrow => "->",
            Self::DoubleArrow => "->>",
            Self::FatArrow => "=>",
            Self::At => "@",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            _ => "?",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Which dialects treat a word as a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Both,
    MySqlOnly,
    OracleOnly,
}

macro_rules! keywords {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// SQL keywords known to either dialect.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// Canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),*
                }
            }

            /// Case-insensitive lookup, independent of dialect.
            #[must_use]
            pub fn lookup(word: &str) -> Option<Self> {
                match word.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    Add => "ADD",
    All => "ALL",
    Alter => "ALTER",
    And => "AND",
    Any => "ANY",
    As => "AS",
    Asc => "ASC",
    AutoIncrement => "AUTO_INCREMENT",
    Begin => "BEGIN",
    Between => "BETWEEN",
    Binary => "BINARY",
    By => "BY",
    Call => "CALL",
    Cascade => "CASCADE",
    Case => "CASE",
    Cast => "CAST",
    Character => "CHARACTER",
    Charset => "CHARSET",
    Check => "CHECK",
    Collate => "COLLATE",
    Column => "COLUMN",
    Columns => "COLUMNS",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Connect => "CONNECT",
    ConnectByIsLeaf => "CONNECT_BY_ISLEAF",
    ConnectByRoot => "CONNECT_BY_ROOT",
    Constraint => "CONSTRAINT",
    Create => "CREATE",
    Cross => "CROSS",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    Cycle => "CYCLE",
    Database => "DATABASE",
    Databases => "DATABASES",
    Default => "DEFAULT",
    Delete => "DELETE",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Distinct => "DISTINCT",
    Div => "DIV",
    Drop => "DROP",
    Duplicate => "DUPLICATE",
    Else => "ELSE",
    End => "END",
    Escape => "ESCAPE",
    Except => "EXCEPT",
    Exists => "EXISTS",
    Explain => "EXPLAIN",
    Extract => "EXTRACT",
    False => "FALSE",
    Fetch => "FETCH",
    First => "FIRST",
    Flashback => "FLASHBACK",
    Following => "FOLLOWING",
    For => "FOR",
    Force => "FORCE",
    Foreign => "FOREIGN",
    From => "FROM",
    Full => "FULL",
    Fulltext => "FULLTEXT",
    Global => "GLOBAL",
    Grant => "GRANT",
    Group => "GROUP",
    Hash => "HASH",
    Having => "HAVING",
    If => "IF",
    Ignore => "IGNORE",
    In => "IN",
    Index => "INDEX",
    Inner => "INNER",
    Insert => "INSERT",
    Intersect => "INTERSECT",
    Interval => "INTERVAL",
    Into => "INTO",
    Is => "IS",
    Join => "JOIN",
    JsonExists => "JSON_EXISTS",
    JsonObject => "JSON_OBJECT",
    JsonQuery => "JSON_QUERY",
    JsonValue => "JSON_VALUE",
    Key => "KEY",
    Kill => "KILL",
    Last => "LAST",
    Left => "LEFT",
    Level => "LEVEL",
    Like => "LIKE",
    Limit => "LIMIT",
    List => "LIST",
    Local => "LOCAL",
    Lock => "LOCK",
    Materialized => "MATERIALIZED",
    MaxValue => "MAXVALUE",
    Merge => "MERGE",
    Minus => "MINUS",
    MinValue => "MINVALUE",
    Mod => "MOD",
    Modify => "MODIFY",
    Names => "NAMES",
    Natural => "NATURAL",
    No => "NO",
    NoCache => "NOCACHE",
    NoCycle => "NOCYCLE",
    NoMaxValue => "NOMAXVALUE",
    NoMinValue => "NOMINVALUE",
    NoOrder => "NOORDER",
    Not => "NOT",
    Null => "NULL",
    Nulls => "NULLS",
    Of => "OF",
    Offset => "OFFSET",
    On => "ON",
    Only => "ONLY",
    Option => "OPTION",
    Or => "OR",
    Order => "ORDER",
    Outer => "OUTER",
    Over => "OVER",
    Partition => "PARTITION",
    Partitions => "PARTITIONS",
    Preceding => "PRECEDING",
    Primary => "PRIMARY",
    Prior => "PRIOR",
    Profile => "PROFILE",
    Public => "PUBLIC",
    Purge => "PURGE",
    Range => "RANGE",
    Read => "READ",
    Recursive => "RECURSIVE",
    References => "REFERENCES",
    Regexp => "REGEXP",
    Release => "RELEASE",
    Rename => "RENAME",
    Replace => "REPLACE",
    Restrict => "RESTRICT",
    Returning => "RETURNING",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Rlike => "RLIKE",
    Role => "ROLE",
    Rollback => "ROLLBACK",
    Row => "ROW",
    RowNum => "ROWNUM",
    Rows => "ROWS",
    Savepoint => "SAVEPOINT",
    Schema => "SCHEMA",
    Select => "SELECT",
    Separator => "SEPARATOR",
    Sequence => "SEQUENCE",
    Session => "SESSION",
    Set => "SET",
    Show => "SHOW",
    Some => "SOME",
    Spatial => "SPATIAL",
    Start => "START",
    Subpartition => "SUBPARTITION",
    Subpartitions => "SUBPARTITIONS",
    Synonym => "SYNONYM",
    SysDate => "SYSDATE",
    System => "SYSTEM",
    SysTimestamp => "SYSTIMESTAMP",
    Table => "TABLE",
    Tablespace => "TABLESPACE",
    Temporary => "TEMPORARY",
    Tenant => "TENANT",
    Then => "THEN",
    Ties => "TIES",
    To => "TO",
    Transaction => "TRANSACTION",
    True => "TRUE",
    Truncate => "TRUNCATE",
    Unbounded => "UNBOUNDED",
    Union => "UNION",
    Unique => "UNIQUE",
    Update => "UPDATE",
    Use => "USE",
    User => "USER",
    Using => "USING",
    Values => "VALUES",
    View => "VIEW",
    When => "WHEN",
    Where => "WHERE",
    Window => "WINDOW",
    With => "WITH",
    Within => "WITHIN",
    XmlAgg => "XMLAGG",
    XmlAttributes => "XMLATTRIBUTES",
    XmlElement => "XMLELEMENT",
    XmlParse => "XMLPARSE",
    XmlSerialize => "XMLSERIALIZE",
    Xor => "XOR",
}

impl Keyword {
    /// Which dialects recognize this word as a keyword.
    #[must_use]
    pub const fn availability(self) -> Availability {
        match self {
            Self::Limit
            | Self::Div
            | Self::Xor
            | Self::Regexp
            | Self::Rlike
            | Self::Mod
            | Self::Separator
            | Self::Duplicate => Availability::MySqlOnly,
            Self::Level
            | Self::Prior
            | Self::Connect
            | Self::RowNum
            | Self::Minus
            | Self::NoCycle
            | Self::SysDate
            | Self::SysTimestamp
            | Self::ConnectByRoot
            | Self::ConnectByIsLeaf
            | Self::JsonObject
            | Self::XmlAgg
            | Self::XmlAttributes
            | Self::XmlElement
            | Self::XmlParse
            | Self::XmlSerialize => Availability::OracleOnly,
            _ => Availability::Both,
        }
    }

    /// Reserved words cannot be used as unquoted identifiers.
    #[must_use]
    pub const fn is_reserved_in(self, dialect: Dialect) -> bool {
        let common = matches!(
            self,
            Self::All
                | Self::Alter
                | Self::And
                | Self::As
                | Self::Asc
                | Self::Between
                | Self::By
                | Self::Case
                | Self::Check
                | Self::Constraint
                | Self::Create
                | Self::Cross
                | Self::Default
                | Self::Delete
                | Self::Desc
                | Self::Distinct
                | Self::Drop
                | Self::Else
                | Self::End
                | Self::Except
                | Self::Exists
                | Self::False
                | Self::For
                | Self::Foreign
                | Self::From
                | Self::Full
                | Self::Grant
                | Self::Group
                | Self::Having
                | Self::In
                | Self::Index
                | Self::Inner
                | Self::Insert
                | Self::Intersect
                | Self::Into
                | Self::Is
                | Self::Join
                | Self::Key
                | Self::Left
                | Self::Like
                | Self::Natural
                | Self::Not
                | Self::Null
                | Self::On
                | Self::Or
                | Self::Order
                | Self::Outer
                | Self::Primary
                | Self::References
                | Self::Revoke
                | Self::Right
                | Self::Select
                | Self::Set
                | Self::Table
                | Self::Then
                | Self::To
                | Self::True
                | Self::Union
                | Self::Unique
                | Self::Update
                | Self::Using
                | Self::Values
                | Self::When
                | Self::Where
                | Self::With
        );
        if common {
            return true;
        }
        match dialect {
            Dialect::MySql => matches!(
                self,
                Self::Limit | Self::Div | Self::Xor | Self::Regexp | Self::Rlike | Self::Mod
            ),
            Dialect::Oracle => matches!(
                self,
                Self::Level
                    | Self::Prior
                    | Self::Connect
                    | Self::RowNum
                    | Self::Minus
                    | Self::SysDate
                    | Self::SysTimestamp
                    | Self::ConnectByRoot
                    | Self::ConnectByIsLeaf
            ),
        }
    }

    /// Whether this keyword can start a statement.
    #[must_use]
    pub const fn is_statement_start(self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::With
                | Self::Insert
                | Self::Replace
                | Self::Update
                | Self::Delete
                | Self::Merge
                | Self::Create
                | Self::Alter
                | Self::Drop
                | Self::Truncate
                | Self::Rename
                | Self::Comment
                | Self::Flashback
                | Self::Purge
                | Self::Start
                | Self::Begin
                | Self::Commit
                | Self::Rollback
                | Self::Savepoint
                | Self::Release
                | Self::Set
                | Self::Show
                | Self::Use
                | Self::Describe
                | Self::Desc
                | Self::Explain
                | Self::Grant
                | Self::Revoke
                | Self::Kill
                | Self::Call
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_case_insensitive() {
        assert_eq!(Keyword::lookup("select"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("connect_by_root"), Some(Keyword::ConnectByRoot));
        assert_eq!(Keyword::lookup("employees"), None);
    }

    #[test]
    fn test_keyword_spelling_round_trips() {
        for &kw in Keyword::ALL {
            assert_eq!(Keyword::lookup(kw.as_str()), Some(kw), "{kw:?}");
        }
    }

    #[test]
    fn test_dialect_specific_availability() {
        assert_eq!(Keyword::Level.availability(), Availability::OracleOnly);
        assert_eq!(Keyword::Limit.availability(), Availability::MySqlOnly);
        assert_eq!(Keyword::Select.availability(), Availability::Both);
    }

    #[test]
    fn test_reserved_words() {
        assert!(Keyword::Select.is_reserved_in(Dialect::MySql));
        assert!(Keyword::Limit.is_reserved_in(Dialect::MySql));
        assert!(!Keyword::Limit.is_reserved_in(Dialect::Oracle));
        assert!(Keyword::RowNum.is_reserved_in(Dialect::Oracle));
        assert!(!Keyword::Comment.is_reserved_in(Dialect::MySql));
        assert_eq!(Keyword::lookup("status"), None);
    }

    #[test]
    fn test_describe_tokens() {
        assert_eq!(TokenKind::Comma.describe(), "','");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        assert_eq!(
            TokenKind::Keyword(Keyword::From).describe(),
            "keyword FROM"
        );
        assert_eq!(TokenKind::Id("t".into()).describe(), "identifier 't'");
    }
}
