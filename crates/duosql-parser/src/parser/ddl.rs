// CREATE / ALTER / DROP and the other schema statements.
//
// `parse_create` reads the modifiers that may precede the object word
// (`OR REPLACE`, `GLOBAL TEMPORARY`, `UNIQUE`, `PUBLIC`, `FORCE`) and hands
// off to one function per object kind. Users and roles live in admin.rs.

use duosql_ast::{
    AlterProfileStatement, AlterSequenceStatement, AlterTableAction, AlterTableStatement,
    AlterTablespaceStatement, AlterTenantAction, AlterTenantStatement, ColumnConstraint,
    ColumnConstraintKind, ColumnDef, CommentStatement, CommentTarget, ContextScope,
    CreateContextStatement, CreateDatabaseLinkStatement, CreateDatabaseStatement,
    CreateIndexStatement, CreateMaterializedViewLogStatement, CreateMaterializedViewStatement,
    CreateProfileStatement, CreateSequenceStatement, CreateSynonymStatement,
    CreateTableStatement, CreateTablespaceStatement, CreateTenantStatement, CreateViewStatement,
    DropBehavior, DropStatement, FlashbackStatement, ForeignKeyRef, GeneratedStorage, Ident,
    IndexColumn, IndexKind, IndexScope, Literal, MvLogPurge, MvLogWith, ObjectType,
    OptionValue, ProfileLimit, ProfileLimitValue, PurgeStatement, PurgeTarget, QualifiedName,
    ReferentialAction, RefreshMethod, RefreshMode, RefreshSpec, RenameTableStatement,
    SequenceOption, SortDirection, SqlOption, Statement, TableConstraint, TableConstraintKind,
    TemporaryKind, TruncateStatement, ViewCheckOption,
};

use super::{PResult, Parser};
use crate::token::{Keyword, TokenKind};

enum TableElement {
    Column(ColumnDef),
    Constraint(TableConstraint),
}

impl Parser {
    // -----------------------------------------------------------------------
    // CREATE dispatch
    // -----------------------------------------------------------------------

    pub(crate) fn parse_create(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.expect_kw(Keyword::Create)?;
        let or_replace = if self.eat_kw(Keyword::Or) {
            self.expect_kw(Keyword::Replace)?;
            true
        } else {
            false
        };
        let replaceable = self.check_kw(Keyword::View)
            || self.check_kw(Keyword::Force)
            || self.check_kw(Keyword::No)
            || self.check_kw(Keyword::Synonym)
            || self.check_kw(Keyword::Public) && self.is_kw_at(1, Keyword::Synonym)
            || self.check_word("CONTEXT");
        if or_replace && !replaceable {
            return Err(self.syntax_error("OR REPLACE is only valid for views, synonyms and contexts"));
        }

        if self.check_kw(Keyword::Table)
            || self.check_kw(Keyword::Temporary)
            || self.check_kw(Keyword::Global)
        {
            return self.parse_create_table(start).map(Statement::CreateTable);
        }
        if self.check_kw(Keyword::Index)
            || self.check_kw(Keyword::Unique)
            || self.check_kw(Keyword::Fulltext)
            || self.check_kw(Keyword::Spatial)
        {
            return self.parse_create_index(start).map(Statement::CreateIndex);
        }
        if self.check_kw(Keyword::View) || self.check_kw(Keyword::Force) || self.check_kw(Keyword::No)
        {
            return self
                .parse_create_view(start, or_replace)
                .map(Statement::CreateView);
        }
        if self.check_kw(Keyword::Materialized) {
            return if self.is_word_at(2, "LOG") {
                self.parse_create_mview_log(start)
                    .map(Statement::CreateMaterializedViewLog)
            } else {
                self.parse_create_mview(start)
                    .map(Statement::CreateMaterializedView)
            };
        }
        let public = self.eat_kw(Keyword::Public);
        if self.check_kw(Keyword::Synonym) {
            return self
                .parse_create_synonym(start, or_replace, public)
                .map(Statement::CreateSynonym);
        }
        if (self.check_kw(Keyword::Database) || self.check_kw(Keyword::Schema))
            && self.is_word_at(1, "LINK")
        {
            return self
                .parse_create_database_link(start, public)
                .map(Statement::CreateDatabaseLink);
        }
        if public {
            return Err(self.error_expected("SYNONYM or DATABASE LINK"));
        }
        if self.check_kw(Keyword::Database) || self.check_kw(Keyword::Schema) {
            return self.parse_create_database(start).map(Statement::CreateDatabase);
        }
        if self.check_kw(Keyword::Tablespace) {
            return self
                .parse_create_tablespace(start)
                .map(Statement::CreateTablespace);
        }
        if self.check_kw(Keyword::Tenant) {
            return self.parse_create_tenant(start).map(Statement::CreateTenant);
        }
        if self.check_kw(Keyword::User) {
            return self.parse_create_user(start).map(Statement::CreateUser);
        }
        if self.check_kw(Keyword::Role) {
            return self.parse_create_role(start).map(Statement::CreateRole);
        }
        if self.check_kw(Keyword::Sequence) {
            return self.parse_create_sequence(start).map(Statement::CreateSequence);
        }
        if self.check_kw(Keyword::Profile) {
            return self.parse_create_profile(start).map(Statement::CreateProfile);
        }
        if self.check_word("CONTEXT") {
            return self
                .parse_create_context(start, or_replace)
                .map(Statement::CreateContext);
        }
        Err(self.error_expected("object type"))
    }

    pub(crate) fn parse_if_not_exists(&mut self) -> PResult<bool> {
        if !self.eat_kw(Keyword::If) {
            return Ok(false);
        }
        self.expect_kw(Keyword::Not)?;
        self.expect_kw(Keyword::Exists)?;
        Ok(true)
    }

    pub(crate) fn parse_if_exists(&mut self) -> PResult<bool> {
        if !self.eat_kw(Keyword::If) {
            return Ok(false);
        }
        self.expect_kw(Keyword::Exists)?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Tables
    // -----------------------------------------------------------------------

    fn parse_create_table(&mut self, start: u32) -> PResult<CreateTableStatement> {
        let temporary = if self.eat_kw(Keyword::Global) {
            self.expect_kw(Keyword::Temporary)?;
            Some(TemporaryKind::GlobalTemporary)
        } else if self.eat_kw(Keyword::Temporary) {
            Some(TemporaryKind::Temporary)
        } else {
            None
        };
        self.expect_kw(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_name()?;

        let mut stmt = CreateTableStatement {
            temporary,
            if_not_exists,
            name,
            columns: Vec::new(),
            constraints: Vec::new(),
            like: None,
            options: Vec::new(),
            partition: None,
            as_query: None,
            span: self.span_from(start),
        };
        if self.eat_kw(Keyword::Like) {
            stmt.like = Some(self.parse_qualified_name()?);
            stmt.span = self.span_from(start);
            return Ok(stmt);
        }

        if self.check(&TokenKind::LeftParen) && !self.query_behind_parens() {
            for element in self.parse_paren_list(Self::parse_table_element)? {
                match element {
                    TableElement::Column(c) => stmt.columns.push(c),
                    TableElement::Constraint(c) => stmt.constraints.push(c),
                }
            }
        }
        stmt.options = self.parse_sql_options(true)?;
        if self.at_partition_by() {
            stmt.partition = Some(self.parse_partition_option()?);
        }
        let has_as = self.eat_kw(Keyword::As);
        if has_as
            || self.check_kw(Keyword::Select)
            || self.check_kw(Keyword::With)
            || self.check(&TokenKind::LeftParen)
        {
            stmt.as_query = Some(Box::new(self.parse_query()?));
        }
        if stmt.columns.is_empty() && stmt.constraints.is_empty() && stmt.as_query.is_none() {
            return Err(self.error_expected("column definitions or AS query"));
        }
        stmt.span = self.span_from(start);
        Ok(stmt)
    }

    fn parse_table_element(&mut self) -> PResult<TableElement> {
        if self.at_table_constraint() {
            self.parse_table_constraint().map(TableElement::Constraint)
        } else {
            self.parse_column_def().map(TableElement::Column)
        }
    }

    fn at_table_constraint(&self) -> bool {
        if self.check_kw(Keyword::Fulltext) || self.check_kw(Keyword::Spatial) {
            return self.is_kw_at(1, Keyword::Index)
                || self.is_kw_at(1, Keyword::Key)
                || matches!(self.peek_nth(1), TokenKind::LeftParen)
                || self.is_ident_at(1) && matches!(self.peek_nth(2), TokenKind::LeftParen);
        }
        self.check_kw(Keyword::Constraint)
            || self.check_kw(Keyword::Primary)
            || self.check_kw(Keyword::Unique)
            || self.check_kw(Keyword::Foreign)
            || self.check_kw(Keyword::Check)
            || self.check_kw(Keyword::Index)
            || self.check_kw(Keyword::Key)
    }

    /// `name type [constraint ...]`
    pub(crate) fn parse_column_def(&mut self) -> PResult<ColumnDef> {
        let start = self.start();
        let name = self.parse_ident()?;
        let data_type = self.parse_data_type()?;
        let mut constraints = Vec::new();
        while let Some(c) = self.parse_column_constraint()? {
            constraints.push(c);
        }
        Ok(ColumnDef {
            name,
            data_type,
            constraints,
            span: self.span_from(start),
        })
    }

    fn parse_column_constraint(&mut self) -> PResult<Option<ColumnConstraint>> {
        let name = if self.eat_kw(Keyword::Constraint) {
            Some(self.parse_ident()?)
        } else {
            None
        };
        let kind = if self.eat_kw(Keyword::Null) {
            ColumnConstraintKind::Null
        } else if self.check_kw(Keyword::Not) && self.is_kw_at(1, Keyword::Null) {
            self.advance();
            self.advance();
            ColumnConstraintKind::NotNull
        } else if self.eat_kw(Keyword::Default) {
            ColumnConstraintKind::Default(self.parse_operand()?)
        } else if self.eat_kw(Keyword::AutoIncrement) {
            ColumnConstraintKind::AutoIncrement
        } else if self.eat_kw(Keyword::Primary) {
            self.expect_kw(Keyword::Key)?;
            ColumnConstraintKind::PrimaryKey
        } else if self.eat_kw(Keyword::Unique) {
            self.eat_kw(Keyword::Key);
            ColumnConstraintKind::Unique
        } else if self.eat_kw(Keyword::Check) {
            ColumnConstraintKind::Check(self.parse_parenthesized()?)
        } else if self.check_kw(Keyword::References) {
            ColumnConstraintKind::References(self.parse_references()?)
        } else if self.eat_kw(Keyword::Comment) {
            ColumnConstraintKind::Comment(self.parse_string()?)
        } else if self.check_word("GENERATED") || self.check_kw(Keyword::As) {
            if self.eat_word("GENERATED") {
                self.expect_word("ALWAYS")?;
            }
            self.expect_kw(Keyword::As)?;
            let expr = self.parse_parenthesized()?;
            let storage = if self.eat_word("VIRTUAL") {
                Some(GeneratedStorage::Virtual)
            } else if self.eat_word("STORED") {
                Some(GeneratedStorage::Stored)
            } else {
                None
            };
            ColumnConstraintKind::Generated { expr, storage }
        } else if self.check_kw(Keyword::On) && self.is_kw_at(1, Keyword::Update) {
            self.advance();
            self.advance();
            ColumnConstraintKind::OnUpdate(self.parse_operand()?)
        } else if self.eat_kw(Keyword::Collate) {
            ColumnConstraintKind::Collate(self.parse_name_ident()?)
        } else if self.eat_charset_word() {
            ColumnConstraintKind::CharacterSet(self.parse_name_ident()?)
        } else if name.is_some() {
            return Err(self.error_expected("constraint"));
        } else {
            return Ok(None);
        };
        Ok(Some(ColumnConstraint { name, kind }))
    }

    /// `CHARACTER SET` or `CHARSET`.
    pub(crate) fn eat_charset_word(&mut self) -> bool {
        if self.eat_kw(Keyword::Charset) {
            return true;
        }
        if self.check_kw(Keyword::Character) && self.is_kw_at(1, Keyword::Set) {
            self.advance();
            self.advance();
            return true;
        }
        false
    }

    /// Identifier, or a string naming one (`COLLATE 'utf8mb4_bin'`).
    fn parse_name_ident(&mut self) -> PResult<Ident> {
        if let TokenKind::String(s) = self.peek() {
            let ident = Ident::new(s.clone());
            self.advance();
            return Ok(ident);
        }
        self.parse_ident()
    }

    fn parse_parenthesized(&mut self) -> PResult<duosql_ast::Expr> {
        self.expect(&TokenKind::LeftParen)?;
        let e = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(e)
    }

    fn parse_references(&mut self) -> PResult<ForeignKeyRef> {
        self.expect_kw(Keyword::References)?;
        let table = self.parse_qualified_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        let mut fk = ForeignKeyRef {
            table,
            columns,
            on_delete: None,
            on_update: None,
        };
        while self.check_kw(Keyword::On) && self.referential_action_at(2) {
            self.advance();
            if self.eat_kw(Keyword::Delete) {
                fk.on_delete = Some(self.parse_referential_action()?);
            } else if self.eat_kw(Keyword::Update) {
                fk.on_update = Some(self.parse_referential_action()?);
            } else {
                return Err(self.error_expected("DELETE or UPDATE"));
            }
        }
        Ok(fk)
    }

    fn referential_action_at(&self, n: usize) -> bool {
        (self.is_kw_at(n - 1, Keyword::Delete) || self.is_kw_at(n - 1, Keyword::Update))
            && (self.is_kw_at(n, Keyword::Cascade)
                || self.is_kw_at(n, Keyword::Restrict)
                || self.is_kw_at(n, Keyword::No)
                || self.is_kw_at(n, Keyword::Set)
                    && (self.is_kw_at(n + 1, Keyword::Null)
                        || self.is_kw_at(n + 1, Keyword::Default)))
    }

    fn parse_referential_action(&mut self) -> PResult<ReferentialAction> {
        if self.eat_kw(Keyword::Cascade) {
            Ok(ReferentialAction::Cascade)
        } else if self.eat_kw(Keyword::Restrict) {
            Ok(ReferentialAction::Restrict)
        } else if self.eat_kw(Keyword::No) {
            self.expect_word("ACTION")?;
            Ok(ReferentialAction::NoAction)
        } else if self.eat_kw(Keyword::Set) {
            if self.eat_kw(Keyword::Null) {
                Ok(ReferentialAction::SetNull)
            } else {
                self.expect_kw(Keyword::Default)?;
                Ok(ReferentialAction::SetDefault)
            }
        } else {
            Err(self.error_expected("referential action"))
        }
    }

    pub(crate) fn parse_table_constraint(&mut self) -> PResult<TableConstraint> {
        let start = self.start();
        let name = if self.eat_kw(Keyword::Constraint) {
            if self.at_ident() {
                Some(self.parse_ident()?)
            } else {
                None
            }
        } else {
            None
        };
        let kind = if self.eat_kw(Keyword::Primary) {
            self.expect_kw(Keyword::Key)?;
            TableConstraintKind::PrimaryKey(self.parse_index_columns()?)
        } else if self.eat_kw(Keyword::Unique) {
            if !self.eat_kw(Keyword::Key) {
                self.eat_kw(Keyword::Index);
            }
            let index_name = if self.at_ident() {
                Some(self.parse_ident()?)
            } else {
                None
            };
            TableConstraintKind::Unique {
                index_name,
                columns: self.parse_index_columns()?,
            }
        } else if self.eat_kw(Keyword::Foreign) {
            self.expect_kw(Keyword::Key)?;
            if self.at_ident() {
                // MySQL index name; not kept.
                self.parse_ident()?;
            }
            let columns = self.parse_paren_list(Self::parse_ident)?;
            TableConstraintKind::ForeignKey {
                columns,
                reference: self.parse_references()?,
            }
        } else if self.eat_kw(Keyword::Check) {
            TableConstraintKind::Check(self.parse_parenthesized()?)
        } else {
            let kind = if self.eat_kw(Keyword::Fulltext) {
                Some(IndexKind::Fulltext)
            } else if self.eat_kw(Keyword::Spatial) {
                Some(IndexKind::Spatial)
            } else {
                None
            };
            if !self.eat_kw(Keyword::Index) && !self.eat_kw(Keyword::Key) && kind.is_none() {
                return Err(self.error_expected("table constraint"));
            }
            let index_name = if self.at_ident() {
                Some(self.parse_ident()?)
            } else {
                None
            };
            TableConstraintKind::Index {
                kind,
                index_name,
                columns: self.parse_index_columns()?,
            }
        };
        Ok(TableConstraint {
            name,
            kind,
            span: self.span_from(start),
        })
    }

    fn parse_index_columns(&mut self) -> PResult<Vec<IndexColumn>> {
        self.parse_paren_list(|p| {
            let name = p.parse_ident()?;
            let length = if p.eat(&TokenKind::LeftParen) {
                let n = p.parse_u32()?;
                p.expect(&TokenKind::RightParen)?;
                Some(n)
            } else {
                None
            };
            let direction = if p.eat_kw(Keyword::Asc) {
                Some(SortDirection::Asc)
            } else if p.eat_kw(Keyword::Desc) {
                Some(SortDirection::Desc)
            } else {
                None
            };
            Ok(IndexColumn {
                name,
                length,
                direction,
            })
        })
    }

    // -----------------------------------------------------------------------
    // Generic `NAME [=] value` options
    // -----------------------------------------------------------------------

    fn option_at(&self, n: usize) -> bool {
        match self.peek_nth(n) {
            TokenKind::Id(_) => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::Default
                    | Keyword::Character
                    | Keyword::Charset
                    | Keyword::Collate
                    | Keyword::Comment
                    | Keyword::AutoIncrement
                    | Keyword::Tablespace
                    | Keyword::Using
            ),
            _ => false,
        }
    }

    /// Options until the next word that cannot start one. `commas` allows a
    /// comma between options (table and tenant options).
    pub(crate) fn parse_sql_options(&mut self, commas: bool) -> PResult<Vec<SqlOption>> {
        let mut options = Vec::new();
        while self.option_at(0) {
            options.push(self.parse_sql_option()?);
            if commas && self.check(&TokenKind::Comma) && self.option_at(1) {
                self.advance();
            }
        }
        Ok(options)
    }

    fn parse_sql_option(&mut self) -> PResult<SqlOption> {
        let start = self.start();
        let mut name = String::new();
        if self.eat_kw(Keyword::Default) {
            name.push_str("DEFAULT ");
        }
        if self.eat_kw(Keyword::Charset) {
            name.push_str("CHARSET");
        } else if self.check_kw(Keyword::Character) && self.is_kw_at(1, Keyword::Set) {
            self.advance();
            self.advance();
            name.push_str("CHARACTER SET");
        } else {
            let Some(word) = self.word_at(0).map(str::to_ascii_uppercase) else {
                return Err(self.error_expected("option name"));
            };
            self.advance();
            name.push_str(&word);
        }
        if name != "USING" {
            self.eat(&TokenKind::Eq);
        }
        let value = self.parse_option_value()?;
        Ok(SqlOption {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_option_value(&mut self) -> PResult<OptionValue> {
        self.note_class("option value");
        let value = match self.peek() {
            TokenKind::LeftParen => {
                return Ok(OptionValue::List(
                    self.parse_paren_list(Self::parse_option_value)?,
                ));
            }
            TokenKind::Minus | TokenKind::Plus | TokenKind::Integer(_) | TokenKind::Decimal(_) => {
                return Ok(OptionValue::Literal(self.parse_signed_literal()?));
            }
            TokenKind::String(s) => OptionValue::Literal(Literal::String(s.clone())),
            TokenKind::NationalString(s) => {
                OptionValue::Literal(Literal::NationalString(s.clone()))
            }
            TokenKind::HexString(b) => OptionValue::Literal(Literal::Hex(b.clone())),
            TokenKind::Id(_) | TokenKind::QuotedId(_) | TokenKind::Keyword(_) => {
                return Ok(OptionValue::Ident(self.parse_word_ident()));
            }
            _ => return Err(self.error_expected("option value")),
        };
        self.advance();
        Ok(value)
    }

    /// `[+|-] number`
    fn parse_signed_literal(&mut self) -> PResult<Literal> {
        let negative = if self.eat(&TokenKind::Minus) {
            true
        } else {
            self.eat(&TokenKind::Plus);
            false
        };
        self.note_class("number");
        let literal = match self.peek() {
            TokenKind::Integer(n) => Literal::Integer(if negative { -n } else { *n }),
            TokenKind::Decimal(s) if negative => Literal::Decimal(format!("-{s}")),
            TokenKind::Decimal(s) => Literal::Decimal(s.clone()),
            _ => return Err(self.error_expected("number")),
        };
        self.advance();
        Ok(literal)
    }

    // -----------------------------------------------------------------------
    // Indexes and views
    // -----------------------------------------------------------------------

    fn parse_create_index(&mut self, start: u32) -> PResult<CreateIndexStatement> {
        let kind = if self.eat_kw(Keyword::Unique) {
            Some(IndexKind::Unique)
        } else if self.eat_kw(Keyword::Fulltext) {
            Some(IndexKind::Fulltext)
        } else if self.eat_kw(Keyword::Spatial) {
            Some(IndexKind::Spatial)
        } else {
            None
        };
        self.expect_kw(Keyword::Index)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_name()?;
        self.expect_kw(Keyword::On)?;
        let table = self.parse_qualified_name()?;
        let columns = self.parse_index_columns()?;
        let scope = if self.eat_kw(Keyword::Local) {
            Some(IndexScope::Local)
        } else if self.eat_kw(Keyword::Global) {
            Some(IndexScope::Global)
        } else {
            None
        };
        let options = self.parse_sql_options(false)?;
        let partition = if self.at_partition_by() {
            Some(self.parse_partition_option()?)
        } else {
            None
        };
        Ok(CreateIndexStatement {
            kind,
            if_not_exists,
            name,
            table,
            columns,
            scope,
            options,
            partition,
            span: self.span_from(start),
        })
    }

    fn parse_create_view(&mut self, start: u32, or_replace: bool) -> PResult<CreateViewStatement> {
        let force = if self.eat_kw(Keyword::Force) {
            Some(true)
        } else if self.eat_kw(Keyword::No) {
            self.expect_kw(Keyword::Force)?;
            Some(false)
        } else {
            None
        };
        self.expect_kw(Keyword::View)?;
        let name = self.parse_qualified_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        self.expect_kw(Keyword::As)?;
        let query = Box::new(self.parse_query()?);
        let check_option = if self.eat_kw(Keyword::With) {
            if self.eat_kw(Keyword::Check) {
                self.expect_kw(Keyword::Option)?;
                Some(ViewCheckOption::CheckOption)
            } else {
                self.expect_kw(Keyword::Read)?;
                self.expect_kw(Keyword::Only)?;
                Some(ViewCheckOption::ReadOnly)
            }
        } else {
            None
        };
        Ok(CreateViewStatement {
            or_replace,
            force,
            name,
            columns,
            query,
            check_option,
            span: self.span_from(start),
        })
    }

    fn parse_create_mview(&mut self, start: u32) -> PResult<CreateMaterializedViewStatement> {
        self.expect_kw(Keyword::Materialized)?;
        self.expect_kw(Keyword::View)?;
        let name = self.parse_qualified_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        let partition = if self.at_partition_by() {
            Some(self.parse_partition_option()?)
        } else {
            None
        };
        let refresh = self.parse_refresh_spec()?;
        let query_rewrite = if self.eat_word("ENABLE") {
            Some(true)
        } else if self.eat_word("DISABLE") {
            Some(false)
        } else {
            None
        };
        if query_rewrite.is_some() {
            self.expect_word("QUERY")?;
            self.expect_word("REWRITE")?;
        }
        self.expect_kw(Keyword::As)?;
        let query = Box::new(self.parse_query()?);
        Ok(CreateMaterializedViewStatement {
            name,
            columns,
            partition,
            refresh,
            query_rewrite,
            query,
            span: self.span_from(start),
        })
    }

    fn parse_refresh_spec(&mut self) -> PResult<Option<RefreshSpec>> {
        if self.eat_word("NEVER") {
            self.expect_word("REFRESH")?;
            return Ok(Some(RefreshSpec::Never));
        }
        if !self.eat_word("REFRESH") {
            return Ok(None);
        }
        let method = if self.eat_word("FAST") {
            Some(RefreshMethod::Fast)
        } else if self.eat_word("COMPLETE") {
            Some(RefreshMethod::Complete)
        } else if self.eat_kw(Keyword::Force) {
            Some(RefreshMethod::Force)
        } else {
            None
        };
        let mode = if self.eat_kw(Keyword::On) {
            if self.eat_word("DEMAND") {
                Some(RefreshMode::OnDemand)
            } else {
                self.expect_kw(Keyword::Commit)?;
                Some(RefreshMode::OnCommit)
            }
        } else {
            None
        };
        let (start_with, next) = self.parse_schedule()?;
        Ok(Some(RefreshSpec::Refresh {
            method,
            mode,
            start_with,
            next,
        }))
    }

    /// `[START WITH expr] [NEXT expr]`
    fn parse_schedule(&mut self) -> PResult<(Option<duosql_ast::Expr>, Option<duosql_ast::Expr>)> {
        let start_with = if self.check_kw(Keyword::Start) && self.is_kw_at(1, Keyword::With) {
            self.advance();
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        let next = if self.eat_word("NEXT") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok((start_with, next))
    }

    fn parse_create_mview_log(
        &mut self,
        start: u32,
    ) -> PResult<CreateMaterializedViewLogStatement> {
        self.expect_kw(Keyword::Materialized)?;
        self.expect_kw(Keyword::View)?;
        self.expect_word("LOG")?;
        self.expect_kw(Keyword::On)?;
        let table = self.parse_qualified_name()?;
        let with = if self.eat_kw(Keyword::With) {
            self.parse_comma_list(|p| {
                if p.eat_kw(Keyword::Primary) {
                    p.expect_kw(Keyword::Key)?;
                    Ok(MvLogWith::PrimaryKey)
                } else if p.eat_word("ROWID") {
                    Ok(MvLogWith::RowId)
                } else if p.eat_kw(Keyword::Sequence) {
                    Ok(MvLogWith::Sequence)
                } else if p.check(&TokenKind::LeftParen) {
                    Ok(MvLogWith::Columns(p.parse_paren_list(Self::parse_ident)?))
                } else {
                    Err(p.error_expected("PRIMARY KEY, ROWID, SEQUENCE or column list"))
                }
            })?
        } else {
            Vec::new()
        };
        let new_values = if self.eat_word("INCLUDING") {
            Some(true)
        } else if self.eat_word("EXCLUDING") {
            Some(false)
        } else {
            None
        };
        if new_values.is_some() {
            self.expect_word("NEW")?;
            self.expect_kw(Keyword::Values)?;
        }
        let purge = if self.eat_kw(Keyword::Purge) {
            if self.eat_word("IMMEDIATE") {
                Some(MvLogPurge::Immediate)
            } else {
                let (start_with, next) = self.parse_schedule()?;
                Some(MvLogPurge::Schedule { start_with, next })
            }
        } else {
            None
        };
        Ok(CreateMaterializedViewLogStatement {
            table,
            with,
            new_values,
            purge,
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // Databases, tablespaces, tenants
    // -----------------------------------------------------------------------

    fn parse_create_database(&mut self, start: u32) -> PResult<CreateDatabaseStatement> {
        if !self.eat_kw(Keyword::Database) {
            self.expect_kw(Keyword::Schema)?;
        }
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_ident()?;
        let options = self.parse_sql_options(true)?;
        Ok(CreateDatabaseStatement {
            if_not_exists,
            name,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_create_tablespace(&mut self, start: u32) -> PResult<CreateTablespaceStatement> {
        self.expect_kw(Keyword::Tablespace)?;
        let name = self.parse_ident()?;
        let options = self.parse_sql_options(true)?;
        Ok(CreateTablespaceStatement {
            name,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_create_tenant(&mut self, start: u32) -> PResult<CreateTenantStatement> {
        self.expect_kw(Keyword::Tenant)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_ident()?;
        let options = self.parse_sql_options(true)?;
        let variables = if self.eat_kw(Keyword::Set) {
            self.parse_comma_list(Self::parse_variable_assignment)?
        } else {
            Vec::new()
        };
        Ok(CreateTenantStatement {
            if_not_exists,
            name,
            options,
            variables,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_tablespace(&mut self) -> PResult<AlterTablespaceStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Tablespace)?;
        let name = self.parse_ident()?;
        let options = self.parse_sql_options(true)?;
        if options.is_empty() {
            return Err(self.error_expected("tablespace option"));
        }
        Ok(AlterTablespaceStatement {
            name,
            options,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_tenant(&mut self) -> PResult<AlterTenantStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Tenant)?;
        let name = self.parse_ident()?;
        let action = if self.eat_kw(Keyword::Lock) {
            AlterTenantAction::Lock
        } else if self.eat_word("UNLOCK") {
            AlterTenantAction::Unlock
        } else if self.eat_kw(Keyword::Rename) {
            self.expect_word("GLOBAL_NAME")?;
            self.expect_kw(Keyword::To)?;
            AlterTenantAction::RenameGlobalName(self.parse_ident()?)
        } else if self.check_kw(Keyword::Set) && self.is_word_at(1, "VARIABLES") {
            self.advance();
            self.advance();
            AlterTenantAction::SetVariables(self.parse_comma_list(Self::parse_variable_assignment)?)
        } else {
            self.eat_kw(Keyword::Set);
            let options = self.parse_sql_options(true)?;
            if options.is_empty() {
                return Err(self.error_expected("tenant option"));
            }
            AlterTenantAction::SetOptions(options)
        };
        Ok(AlterTenantStatement {
            name,
            action,
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // Sequences, synonyms, database links, profiles, contexts
    // -----------------------------------------------------------------------

    fn parse_create_sequence(&mut self, start: u32) -> PResult<CreateSequenceStatement> {
        self.expect_kw(Keyword::Sequence)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_name()?;
        let options = self.parse_sequence_options()?;
        Ok(CreateSequenceStatement {
            if_not_exists,
            name,
            options,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_sequence(&mut self) -> PResult<AlterSequenceStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Sequence)?;
        let name = self.parse_qualified_name()?;
        let options = self.parse_sequence_options()?;
        if options.is_empty() {
            return Err(self.error_expected("sequence option"));
        }
        Ok(AlterSequenceStatement {
            name,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_sequence_options(&mut self) -> PResult<Vec<SequenceOption>> {
        let mut options = Vec::new();
        loop {
            let option = if self.check_kw(Keyword::Start) && self.is_kw_at(1, Keyword::With) {
                self.advance();
                self.advance();
                SequenceOption::StartWith(self.parse_signed_literal()?)
            } else if self.eat_word("INCREMENT") {
                self.expect_kw(Keyword::By)?;
                SequenceOption::IncrementBy(self.parse_signed_literal()?)
            } else if self.eat_kw(Keyword::MinValue) {
                SequenceOption::MinValue(Some(self.parse_signed_literal()?))
            } else if self.eat_kw(Keyword::NoMinValue) {
                SequenceOption::MinValue(None)
            } else if self.eat_kw(Keyword::MaxValue) {
                SequenceOption::MaxValue(Some(self.parse_signed_literal()?))
            } else if self.eat_kw(Keyword::NoMaxValue) {
                SequenceOption::MaxValue(None)
            } else if self.eat_word("CACHE") {
                SequenceOption::Cache(Some(self.parse_signed_literal()?))
            } else if self.eat_kw(Keyword::NoCache) {
                SequenceOption::Cache(None)
            } else if self.eat_kw(Keyword::Cycle) {
                SequenceOption::Cycle(true)
            } else if self.eat_word("NOCYCLE") {
                SequenceOption::Cycle(false)
            } else if self.eat_kw(Keyword::Order) {
                SequenceOption::Order(true)
            } else if self.eat_kw(Keyword::NoOrder) {
                SequenceOption::Order(false)
            } else {
                return Ok(options);
            };
            options.push(option);
        }
    }

    fn parse_create_synonym(
        &mut self,
        start: u32,
        or_replace: bool,
        public: bool,
    ) -> PResult<CreateSynonymStatement> {
        self.expect_kw(Keyword::Synonym)?;
        let name = self.parse_qualified_name()?;
        self.expect_kw(Keyword::For)?;
        let target = self.parse_qualified_name()?;
        Ok(CreateSynonymStatement {
            or_replace,
            public,
            name,
            target,
            span: self.span_from(start),
        })
    }

    fn parse_create_database_link(
        &mut self,
        start: u32,
        public: bool,
    ) -> PResult<CreateDatabaseLinkStatement> {
        if !self.eat_kw(Keyword::Database) {
            self.expect_kw(Keyword::Schema)?;
        }
        self.expect_word("LINK")?;
        let name = self.parse_ident()?;
        self.expect_word("CONNECT")?;
        self.expect_kw(Keyword::To)?;
        let user = self.parse_ident()?;
        // `user@tenant`: MySQL lexes `@tenant` as a user variable.
        let end = self.prev_end();
        let tenant = match self.peek() {
            TokenKind::UserVar(t) if self.token().span.start == end => {
                let t = Ident::new(t.clone());
                self.advance();
                Some(t)
            }
            TokenKind::At => {
                self.advance();
                Some(self.parse_ident()?)
            }
            _ => None,
        };
        self.expect_word("IDENTIFIED")?;
        self.expect_kw(Keyword::By)?;
        let password = self.parse_name_text()?;
        let host = if self.eat_word("HOST") {
            Some(self.parse_string()?)
        } else {
            None
        };
        let using = if self.eat_kw(Keyword::Using) {
            Some(self.parse_string()?)
        } else {
            None
        };
        Ok(CreateDatabaseLinkStatement {
            public,
            name,
            user,
            tenant,
            password,
            host,
            using,
            span: self.span_from(start),
        })
    }

    fn parse_profile_limits(&mut self) -> PResult<Vec<ProfileLimit>> {
        self.expect_word("LIMIT")?;
        let mut limits = Vec::new();
        loop {
            let resource = self.parse_ident()?;
            let value = if self.eat_word("UNLIMITED") {
                ProfileLimitValue::Unlimited
            } else if self.eat_kw(Keyword::Default) {
                ProfileLimitValue::Default
            } else {
                ProfileLimitValue::Expr(self.parse_expr()?)
            };
            limits.push(ProfileLimit { resource, value });
            if !self.at_ident() {
                return Ok(limits);
            }
        }
    }

    fn parse_create_profile(&mut self, start: u32) -> PResult<CreateProfileStatement> {
        self.expect_kw(Keyword::Profile)?;
        let name = self.parse_ident()?;
        let limits = self.parse_profile_limits()?;
        Ok(CreateProfileStatement {
            name,
            limits,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_profile(&mut self) -> PResult<AlterProfileStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Profile)?;
        let name = self.parse_ident()?;
        let limits = self.parse_profile_limits()?;
        Ok(AlterProfileStatement {
            name,
            limits,
            span: self.span_from(start),
        })
    }

    fn parse_create_context(
        &mut self,
        start: u32,
        or_replace: bool,
    ) -> PResult<CreateContextStatement> {
        self.expect_word("CONTEXT")?;
        let namespace = self.parse_ident()?;
        self.expect_kw(Keyword::Using)?;
        let package = self.parse_qualified_name()?;
        let scope = if self.eat_word("INITIALIZED") {
            if self.eat_word("EXTERNALLY") {
                Some(ContextScope::InitializedExternally)
            } else {
                self.expect_word("GLOBALLY")?;
                Some(ContextScope::InitializedGlobally)
            }
        } else if self.eat_word("ACCESSED") {
            self.expect_word("GLOBALLY")?;
            Some(ContextScope::AccessedGlobally)
        } else {
            None
        };
        Ok(CreateContextStatement {
            or_replace,
            namespace,
            package,
            scope,
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // ALTER TABLE
    // -----------------------------------------------------------------------

    pub(crate) fn parse_alter_table(&mut self) -> PResult<AlterTableStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Table)?;
        let name = self.parse_qualified_name()?;
        let mut actions = vec![self.parse_alter_table_action()?];
        while self.eat(&TokenKind::Comma) {
            actions.push(self.parse_alter_table_action()?);
        }
        Ok(AlterTableStatement {
            name,
            actions,
            span: self.span_from(start),
        })
    }

    fn parse_alter_table_action(&mut self) -> PResult<AlterTableAction> {
        let start = self.start();
        if self.eat_kw(Keyword::Add) {
            if self.eat_kw(Keyword::Partition) {
                let partitions = self.parse_paren_list(Self::parse_partition_def)?;
                return Ok(AlterTableAction::AddPartitions {
                    partitions,
                    span: self.span_from(start),
                });
            }
            if self.check(&TokenKind::LeftParen) {
                let columns = self.parse_paren_list(Self::parse_column_def)?;
                return Ok(AlterTableAction::AddColumns {
                    columns,
                    span: self.span_from(start),
                });
            }
            if self.at_table_constraint() {
                return Ok(AlterTableAction::AddConstraint(self.parse_table_constraint()?));
            }
            self.eat_kw(Keyword::Column);
            let column = self.parse_column_def()?;
            return Ok(AlterTableAction::AddColumns {
                columns: vec![column],
                span: self.span_from(start),
            });
        }
        if self.eat_kw(Keyword::Drop) {
            if self.eat_kw(Keyword::Constraint) {
                let name = self.parse_ident()?;
                return Ok(AlterTableAction::DropConstraint {
                    name,
                    span: self.span_from(start),
                });
            }
            if self.eat_kw(Keyword::Primary) {
                self.expect_kw(Keyword::Key)?;
                return Ok(AlterTableAction::DropPrimaryKey {
                    span: self.span_from(start),
                });
            }
            if self.eat_kw(Keyword::Index) || self.eat_kw(Keyword::Key) {
                let name = self.parse_ident()?;
                return Ok(AlterTableAction::DropIndex {
                    name,
                    span: self.span_from(start),
                });
            }
            if self.check_kw(Keyword::Partition) || self.check_kw(Keyword::Subpartition) {
                let subpartition = self.eat_kw(Keyword::Subpartition);
                if !subpartition {
                    self.advance();
                }
                let names = self.parse_partition_names()?;
                return Ok(AlterTableAction::DropPartitions {
                    names,
                    subpartition,
                    span: self.span_from(start),
                });
            }
            self.eat_kw(Keyword::Column);
            let name = self.parse_ident()?;
            return Ok(AlterTableAction::DropColumn {
                name,
                span: self.span_from(start),
            });
        }
        if self.eat_kw(Keyword::Truncate) {
            let subpartition = if self.eat_kw(Keyword::Subpartition) {
                true
            } else {
                self.expect_kw(Keyword::Partition)?;
                false
            };
            let names = self.parse_partition_names()?;
            return Ok(AlterTableAction::TruncatePartitions {
                names,
                subpartition,
                span: self.span_from(start),
            });
        }
        if self.eat_kw(Keyword::Modify) {
            let columns = if self.check(&TokenKind::LeftParen) {
                self.parse_paren_list(Self::parse_column_def)?
            } else {
                self.eat_kw(Keyword::Column);
                vec![self.parse_column_def()?]
            };
            return Ok(AlterTableAction::ModifyColumns {
                columns,
                span: self.span_from(start),
            });
        }
        if self.eat_word("CHANGE") {
            self.eat_kw(Keyword::Column);
            let old = self.parse_ident()?;
            let column = self.parse_column_def()?;
            return Ok(AlterTableAction::ChangeColumn {
                old,
                column,
                span: self.span_from(start),
            });
        }
        if self.eat_kw(Keyword::Rename) {
            if self.check_kw(Keyword::Column) && self.is_kw_at(2, Keyword::To) {
                self.advance();
                let old = self.parse_ident()?;
                self.expect_kw(Keyword::To)?;
                let new = self.parse_ident()?;
                return Ok(AlterTableAction::RenameColumn {
                    old,
                    new,
                    span: self.span_from(start),
                });
            }
            if !self.eat_kw(Keyword::To) {
                self.eat_kw(Keyword::As);
            }
            let name = self.parse_qualified_name()?;
            return Ok(AlterTableAction::RenameTable {
                name,
                span: self.span_from(start),
            });
        }
        if self.eat_kw(Keyword::Alter) {
            self.eat_kw(Keyword::Column);
            let column = self.parse_ident()?;
            let default = if self.eat_kw(Keyword::Set) {
                self.expect_kw(Keyword::Default)?;
                Some(self.parse_operand()?)
            } else {
                self.expect_kw(Keyword::Drop)?;
                self.expect_kw(Keyword::Default)?;
                None
            };
            return Ok(AlterTableAction::AlterColumnDefault {
                column,
                default,
                span: self.span_from(start),
            });
        }
        if self.at_partition_by() {
            return Ok(AlterTableAction::Partition(self.parse_partition_option()?));
        }
        let options = self.parse_sql_options(false)?;
        if options.is_empty() {
            return Err(self.error_expected("ALTER TABLE action"));
        }
        Ok(AlterTableAction::SetOptions {
            options,
            span: self.span_from(start),
        })
    }

    /// Partition names; a comma continues the list only when it is followed
    /// by a lone name, otherwise it separates the next action.
    fn parse_partition_names(&mut self) -> PResult<Vec<Ident>> {
        let mut names = vec![self.parse_ident()?];
        while self.check(&TokenKind::Comma)
            && self.is_ident_at(1)
            && matches!(
                self.peek_nth(2),
                TokenKind::Comma | TokenKind::Semicolon | TokenKind::Eof
            )
        {
            self.advance();
            names.push(self.parse_ident()?);
        }
        Ok(names)
    }

    // -----------------------------------------------------------------------
    // DROP, TRUNCATE, RENAME, COMMENT, FLASHBACK, PURGE
    // -----------------------------------------------------------------------

    pub(crate) fn parse_drop(&mut self) -> PResult<DropStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Drop)?;
        let public = self.eat_kw(Keyword::Public);
        let object_type = self.parse_object_type()?;
        let if_exists = self.parse_if_exists()?;
        let names = self.parse_comma_list(Self::parse_qualified_name)?;
        let table = if self.eat_kw(Keyword::On) {
            Some(self.parse_qualified_name()?)
        } else {
            None
        };
        let behavior = if self.eat_kw(Keyword::Cascade) {
            if self.eat_word("CONSTRAINTS") {
                Some(DropBehavior::CascadeConstraints)
            } else {
                Some(DropBehavior::Cascade)
            }
        } else if self.eat_kw(Keyword::Restrict) {
            Some(DropBehavior::Restrict)
        } else if self.eat_kw(Keyword::Purge) {
            Some(DropBehavior::Purge)
        } else if self.eat_kw(Keyword::Force) {
            Some(DropBehavior::Force)
        } else {
            None
        };
        Ok(DropStatement {
            object_type,
            public,
            if_exists,
            names,
            table,
            behavior,
            span: self.span_from(start),
        })
    }

    fn parse_object_type(&mut self) -> PResult<ObjectType> {
        let ty = if self.eat_kw(Keyword::Table) {
            ObjectType::Table
        } else if self.eat_kw(Keyword::View) {
            ObjectType::View
        } else if self.eat_kw(Keyword::Materialized) {
            self.expect_kw(Keyword::View)?;
            if self.eat_word("LOG") {
                self.expect_kw(Keyword::On)?;
                ObjectType::MaterializedViewLog
            } else {
                ObjectType::MaterializedView
            }
        } else if self.eat_kw(Keyword::Index) {
            ObjectType::Index
        } else if self.eat_kw(Keyword::Database) || self.eat_kw(Keyword::Schema) {
            if self.is_word_at(0, "LINK") && self.is_ident_at(1) {
                self.advance();
                ObjectType::DatabaseLink
            } else {
                ObjectType::Database
            }
        } else if self.eat_kw(Keyword::Tablespace) {
            ObjectType::Tablespace
        } else if self.eat_kw(Keyword::Tenant) {
            ObjectType::Tenant
        } else if self.eat_kw(Keyword::Sequence) {
            ObjectType::Sequence
        } else if self.eat_kw(Keyword::Synonym) {
            ObjectType::Synonym
        } else if self.eat_kw(Keyword::Profile) {
            ObjectType::Profile
        } else if self.eat_word("CONTEXT") {
            ObjectType::Context
        } else {
            return Err(self.error_expected("object type"));
        };
        Ok(ty)
    }

    pub(crate) fn parse_truncate(&mut self) -> PResult<TruncateStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Truncate)?;
        self.eat_kw(Keyword::Table);
        let table = self.parse_qualified_name()?;
        Ok(TruncateStatement {
            table,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_rename(&mut self) -> PResult<RenameTableStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Rename)?;
        self.eat_kw(Keyword::Table);
        let renames = self.parse_comma_list(|p| {
            let from = p.parse_qualified_name()?;
            p.expect_kw(Keyword::To)?;
            Ok((from, p.parse_qualified_name()?))
        })?;
        Ok(RenameTableStatement {
            renames,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_comment(&mut self) -> PResult<CommentStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Comment)?;
        self.expect_kw(Keyword::On)?;
        let (target, object, column) = if self.eat_kw(Keyword::Table) {
            (CommentTarget::Table, self.parse_qualified_name()?, None)
        } else {
            self.expect_kw(Keyword::Column)?;
            let col = self.parse_column_ref()?;
            let Some(table) = col.table else {
                return Err(self.syntax_error("COMMENT ON COLUMN needs a table-qualified column"));
            };
            let object = QualifiedName {
                schema: col.schema,
                name: table,
                dblink: None,
            };
            (CommentTarget::Column, object, Some(col.column))
        };
        self.expect_kw(Keyword::Is)?;
        let comment = self.parse_string()?;
        Ok(CommentStatement {
            target,
            object,
            column,
            comment,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_flashback(&mut self) -> PResult<FlashbackStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Flashback)?;
        self.expect_kw(Keyword::Table)?;
        let table = self.parse_qualified_name()?;
        self.expect_kw(Keyword::To)?;
        self.expect_word("BEFORE")?;
        self.expect_kw(Keyword::Drop)?;
        let rename_to = if self.eat_kw(Keyword::Rename) {
            self.expect_kw(Keyword::To)?;
            Some(self.parse_qualified_name()?)
        } else {
            None
        };
        Ok(FlashbackStatement {
            table,
            rename_to,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_purge(&mut self) -> PResult<PurgeStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Purge)?;
        let target = if self.eat_kw(Keyword::Table) {
            PurgeTarget::Table(self.parse_qualified_name()?)
        } else if self.eat_kw(Keyword::Index) {
            PurgeTarget::Index(self.parse_qualified_name()?)
        } else {
            self.expect_word("RECYCLEBIN")?;
            PurgeTarget::RecycleBin
        };
        Ok(PurgeStatement {
            target,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::parser::tests::{first_error, mysql, oracle, round_trip_in};
    use duosql_ast::{
        AlterTableAction, AlterTenantAction, ColumnConstraintKind, DropBehavior, Literal,
        ObjectType, OptionValue, PurgeTarget, ReferentialAction, RefreshSpec, SequenceOption,
        Statement, TableConstraintKind, TemporaryKind, ViewCheckOption,
    };

    #[test]
    fn test_create_table_columns_and_constraints() {
        let Statement::CreateTable(t) = mysql(
            "CREATE TABLE IF NOT EXISTS db.t (\
               id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
               name VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin DEFAULT '' COMMENT 'n', \
               owner INT REFERENCES users (id) ON DELETE SET NULL ON UPDATE CASCADE, \
               ts TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, \
               total INT AS (id * 2) STORED, \
               UNIQUE KEY uk_name (name(10)), \
               CONSTRAINT fk FOREIGN KEY (owner) REFERENCES users (id), \
               FULLTEXT INDEX ft (name), \
               CHECK (id > 0)\
             ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4, COMMENT 'tbl'",
        ) else {
            unreachable!()
        };
        assert!(t.if_not_exists);
        assert_eq!(t.columns.len(), 5);
        assert_eq!(t.constraints.len(), 4);
        let kinds: Vec<_> = t.columns[0].constraints.iter().map(|c| &c.kind).collect();
        assert_eq!(
            kinds,
            [
                &ColumnConstraintKind::NotNull,
                &ColumnConstraintKind::AutoIncrement,
                &ColumnConstraintKind::PrimaryKey
            ]
        );
        let ColumnConstraintKind::References(fk) = &t.columns[2].constraints[0].kind else {
            unreachable!()
        };
        assert_eq!(fk.on_delete, Some(ReferentialAction::SetNull));
        assert_eq!(fk.on_update, Some(ReferentialAction::Cascade));
        assert!(matches!(
            t.columns[3].constraints[1].kind,
            ColumnConstraintKind::OnUpdate(_)
        ));
        let TableConstraintKind::Unique { columns, .. } = &t.constraints[0].kind else {
            unreachable!()
        };
        assert_eq!(columns[0].length, Some(10));
        assert_eq!(t.constraints[1].name.as_ref().unwrap().value, "fk");
        let names: Vec<_> = t.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["ENGINE", "DEFAULT CHARSET", "COMMENT"]);
    }

    #[test]
    fn test_create_table_variants() {
        let Statement::CreateTable(t) = oracle(
            "CREATE GLOBAL TEMPORARY TABLE tmp (a NUMBER(10) DEFAULT -1 NOT NULL)",
        ) else {
            unreachable!()
        };
        assert_eq!(t.temporary, Some(TemporaryKind::GlobalTemporary));
        assert_eq!(t.columns[0].constraints.len(), 2);

        let Statement::CreateTable(t) = mysql("CREATE TABLE t2 LIKE t1") else {
            unreachable!()
        };
        assert_eq!(t.like.unwrap().name.value, "t1");

        let Statement::CreateTable(t) = oracle("CREATE TABLE t3 AS SELECT * FROM t1") else {
            unreachable!()
        };
        assert!(t.as_query.is_some());
    }

    #[test]
    fn test_create_table_needs_a_body() {
        let d = first_error("CREATE TABLE t", Dialect::MySql);
        assert!(d.message.contains("column definitions"), "{}", d.message);
    }

    #[test]
    fn test_or_replace_only_where_allowed() {
        let d = first_error("CREATE OR REPLACE TABLE t (a INT)", Dialect::Oracle);
        assert!(d.message.contains("OR REPLACE"), "{}", d.message);
        assert!(matches!(
            oracle("CREATE OR REPLACE FORCE VIEW v AS SELECT 1 FROM dual WITH READ ONLY"),
            Statement::CreateView(v) if v.or_replace
                && v.force == Some(true)
                && v.check_option == Some(ViewCheckOption::ReadOnly)
        ));
    }

    #[test]
    fn test_create_index() {
        let Statement::CreateIndex(i) =
            oracle("CREATE UNIQUE INDEX s.ix ON s.t (a DESC, b) LOCAL TABLESPACE users")
        else {
            unreachable!()
        };
        assert_eq!(i.columns.len(), 2);
        assert_eq!(i.scope, Some(duosql_ast::IndexScope::Local));
        assert_eq!(i.options[0].name, "TABLESPACE");

        let Statement::CreateIndex(i) = mysql("CREATE INDEX ix ON t (a) USING BTREE") else {
            unreachable!()
        };
        assert_eq!(i.options[0].name, "USING");
    }

    #[test]
    fn test_materialized_views() {
        let Statement::CreateMaterializedView(mv) = oracle(
            "CREATE MATERIALIZED VIEW mv REFRESH FAST ON DEMAND START WITH SYSDATE NEXT SYSDATE + 1 \
             ENABLE QUERY REWRITE AS SELECT a FROM t",
        ) else {
            unreachable!()
        };
        assert!(matches!(
            mv.refresh,
            Some(RefreshSpec::Refresh {
                start_with: Some(_),
                next: Some(_),
                ..
            })
        ));
        assert_eq!(mv.query_rewrite, Some(true));

        let Statement::CreateMaterializedViewLog(log) = oracle(
            "CREATE MATERIALIZED VIEW LOG ON t WITH PRIMARY KEY, ROWID, (a, b) \
             INCLUDING NEW VALUES PURGE IMMEDIATE",
        ) else {
            unreachable!()
        };
        assert_eq!(log.with.len(), 3);
        assert_eq!(log.new_values, Some(true));
    }

    #[test]
    fn test_sequences() {
        let Statement::CreateSequence(s) = oracle(
            "CREATE SEQUENCE seq START WITH 1 INCREMENT BY -2 MAXVALUE 100 NOCACHE CYCLE NOORDER",
        ) else {
            unreachable!()
        };
        assert_eq!(
            s.options,
            [
                SequenceOption::StartWith(Literal::Integer(1)),
                SequenceOption::IncrementBy(Literal::Integer(-2)),
                SequenceOption::MaxValue(Some(Literal::Integer(100))),
                SequenceOption::Cache(None),
                SequenceOption::Cycle(true),
                SequenceOption::Order(false),
            ]
        );
        assert!(first_error("ALTER SEQUENCE seq", Dialect::Oracle)
            .message
            .contains("sequence option"));
    }

    #[test]
    fn test_synonym_link_profile_context() {
        assert!(matches!(
            oracle("CREATE OR REPLACE PUBLIC SYNONYM s FOR u.t"),
            Statement::CreateSynonym(s) if s.public && s.or_replace
        ));
        let Statement::CreateDatabaseLink(l) = oracle(
            "CREATE DATABASE LINK lnk CONNECT TO scott@tn IDENTIFIED BY 'pw' HOST '10.0.0.1:2881'",
        ) else {
            unreachable!()
        };
        assert_eq!(l.tenant.unwrap().value, "tn");
        assert_eq!(l.host.as_deref(), Some("10.0.0.1:2881"));
        let Statement::CreateDatabaseLink(l) =
            mysql("CREATE DATABASE LINK lnk CONNECT TO scott@tn IDENTIFIED BY pw")
        else {
            unreachable!()
        };
        assert_eq!(l.tenant.unwrap().value, "tn");

        let Statement::CreateProfile(p) = oracle(
            "CREATE PROFILE app LIMIT FAILED_LOGIN_ATTEMPTS 5 PASSWORD_LOCK_TIME 1/24 PASSWORD_LIFE_TIME UNLIMITED",
        ) else {
            unreachable!()
        };
        assert_eq!(p.limits.len(), 3);
        assert!(matches!(
            oracle("CREATE CONTEXT ctx USING pkg ACCESSED GLOBALLY"),
            Statement::CreateContext(c) if c.scope.is_some()
        ));
    }

    #[test]
    fn test_database_tablespace_tenant() {
        let Statement::CreateDatabase(d) =
            mysql("CREATE SCHEMA IF NOT EXISTS d DEFAULT CHARACTER SET = utf8mb4")
        else {
            unreachable!()
        };
        assert_eq!(d.options[0].name, "DEFAULT CHARACTER SET");

        let Statement::CreateTenant(t) = mysql(
            "CREATE TENANT tn replica_num = 1, primary_zone = 'z1', resource_pool_list = ('p1') \
             SET ob_tcp_invited_nodes = '%'",
        ) else {
            unreachable!()
        };
        assert_eq!(t.options.len(), 3);
        assert!(matches!(t.options[2].value, OptionValue::List(_)));
        assert_eq!(t.variables.len(), 1);

        let Statement::AlterTenant(a) = mysql("ALTER TENANT tn SET VARIABLES a = 1, b = 2") else {
            unreachable!()
        };
        assert!(matches!(a.action, AlterTenantAction::SetVariables(ref v) if v.len() == 2));
        assert!(matches!(
            mysql("ALTER TENANT tn LOCK"),
            Statement::AlterTenant(a) if a.action == AlterTenantAction::Lock
        ));
    }

    #[test]
    fn test_alter_table_actions() {
        let Statement::AlterTable(a) = mysql(
            "ALTER TABLE t ADD COLUMN c INT, ADD (d INT, e INT), ADD INDEX ix (c), \
             DROP COLUMN x, DROP PRIMARY KEY, MODIFY c BIGINT NOT NULL, \
             CHANGE COLUMN d dd INT, RENAME COLUMN e TO ee, ALTER COLUMN c SET DEFAULT 0, \
             DROP PARTITION p0, p1, ENGINE = InnoDB, RENAME TO t2",
        ) else {
            unreachable!()
        };
        assert_eq!(a.actions.len(), 12);
        assert!(matches!(a.actions[2], AlterTableAction::AddConstraint(_)));
        assert!(matches!(
            &a.actions[9],
            AlterTableAction::DropPartitions { names, .. } if names.len() == 2
        ));
        assert!(matches!(a.actions[10], AlterTableAction::SetOptions { .. }));
        assert!(matches!(a.actions.last(), Some(AlterTableAction::RenameTable { .. })));
    }

    #[test]
    fn test_drop_variants() {
        let Statement::Drop(d) = mysql("DROP TABLE IF EXISTS a, b.c CASCADE") else {
            unreachable!()
        };
        assert_eq!(d.object_type, ObjectType::Table);
        assert!(d.if_exists);
        assert_eq!(d.names.len(), 2);
        assert_eq!(d.behavior, Some(DropBehavior::Cascade));

        let Statement::Drop(d) = oracle("DROP TABLE t CASCADE CONSTRAINTS") else {
            unreachable!()
        };
        assert_eq!(d.behavior, Some(DropBehavior::CascadeConstraints));
        assert!(matches!(
            mysql("DROP INDEX ix ON t"),
            Statement::Drop(d) if d.object_type == ObjectType::Index && d.table.is_some()
        ));
        assert!(matches!(
            oracle("DROP PUBLIC DATABASE LINK lnk"),
            Statement::Drop(d) if d.public && d.object_type == ObjectType::DatabaseLink
        ));
        assert!(matches!(
            oracle("DROP MATERIALIZED VIEW LOG ON t"),
            Statement::Drop(d) if d.object_type == ObjectType::MaterializedViewLog
        ));
    }

    #[test]
    fn test_misc_schema_statements() {
        assert!(matches!(mysql("TRUNCATE t"), Statement::Truncate(_)));
        assert!(matches!(
            mysql("RENAME TABLE a TO b, c TO d"),
            Statement::RenameTable(r) if r.renames.len() == 2
        ));
        let Statement::Comment(c) = oracle("COMMENT ON COLUMN s.t.c IS 'note'") else {
            unreachable!()
        };
        assert_eq!(c.object.schema.unwrap().value, "s");
        assert_eq!(c.column.unwrap().value, "c");
        assert!(first_error("COMMENT ON COLUMN c IS 'x'", Dialect::Oracle)
            .message
            .contains("table-qualified"));
        assert!(matches!(
            oracle("FLASHBACK TABLE t TO BEFORE DROP RENAME TO t_old"),
            Statement::Flashback(f) if f.rename_to.is_some()
        ));
        assert!(matches!(
            oracle("PURGE RECYCLEBIN"),
            Statement::Purge(p) if p.target == PurgeTarget::RecycleBin
        ));
    }

    #[test]
    fn test_ddl_round_trips() {
        for sql in [
            "CREATE TABLE t (a INT NOT NULL DEFAULT 0, b VARCHAR(10), PRIMARY KEY (a)) ENGINE = InnoDB",
            "CREATE TEMPORARY TABLE t (a INT)",
            "CREATE UNIQUE INDEX ix ON t (a(8), b DESC)",
            "CREATE VIEW v (x) AS SELECT a FROM t WITH CHECK OPTION",
            "ALTER TABLE t ADD COLUMN c INT, DROP INDEX ix, ALTER COLUMN c DROP DEFAULT",
            "DROP VIEW IF EXISTS v",
            "RENAME TABLE a TO b",
            "CREATE DATABASE d DEFAULT CHARSET = utf8mb4",
        ] {
            round_trip_in(sql, Dialect::MySql);
        }
        for sql in [
            "CREATE SEQUENCE s START WITH 10 NOMAXVALUE NOCYCLE",
            "COMMENT ON TABLE t IS 'it''s'",
            "ALTER TABLE t MODIFY (a NUMBER(5), b VARCHAR2(20))",
            "CREATE MATERIALIZED VIEW LOG ON t WITH SEQUENCE EXCLUDING NEW VALUES PURGE START WITH SYSDATE",
            "PURGE TABLE t",
        ] {
            round_trip_in(sql, Dialect::Oracle);
        }
    }

    #[test]
    fn test_alter_profile_limits() {
        let Statement::AlterProfile(p) = oracle("ALTER PROFILE p LIMIT SESSIONS_PER_USER 2") else {
            unreachable!()
        };
        assert_eq!(p.name.value, "p");
        assert_eq!(p.limits.len(), 1);
        assert_eq!(
            round_trip_in("ALTER PROFILE p LIMIT SESSIONS_PER_USER 2", Dialect::Oracle),
            "ALTER PROFILE p LIMIT SESSIONS_PER_USER 2"
        );
    }
}
