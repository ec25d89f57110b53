// Transaction control, session statements, privileges and system
// administration.

use duosql_ast::{
    AlterSessionStatement, AlterSystemAction, AlterSystemStatement, AlterUserStatement,
    CallStatement, CreateRoleStatement, CreateUserStatement, DescribeStatement,
    DropPrincipalStatement, ExplainFormat, ExplainStatement, FreezeKind, GrantObject,
    GrantStatement, IsolationLevel, KillStatement, KillTarget, PrincipalKind, Privilege,
    RevokeStatement, RoleSpec, SetKind, SetStatement, SetTarget, Setting, ShowFilter, ShowKind,
    ShowStatement, SystemParameter, TransactionCharacteristic, TransactionKind,
    TransactionStatement, UseStatement, UserAttribute, UserIdentification, Variable,
    VariableAssignment, VariableScope,
};

use super::expr::system_variable;
use super::{PResult, Parser};
use crate::token::{Keyword, TokenKind};

impl Parser {
    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    pub(crate) fn parse_transaction(&mut self) -> PResult<TransactionStatement> {
        let start = self.start();
        let kind = if self.eat_kw(Keyword::Start) {
            self.expect_kw(Keyword::Transaction)?;
            let characteristics = if self.at_transaction_characteristic() {
                self.parse_comma_list(Self::parse_transaction_characteristic)?
            } else {
                Vec::new()
            };
            TransactionKind::Start(characteristics)
        } else if self.eat_kw(Keyword::Begin) {
            TransactionKind::Begin {
                work: self.eat_word("WORK"),
            }
        } else if self.eat_kw(Keyword::Commit) {
            TransactionKind::Commit {
                work: self.eat_word("WORK"),
            }
        } else if self.eat_kw(Keyword::Rollback) {
            let work = self.eat_word("WORK");
            let to_savepoint = if self.eat_kw(Keyword::To) {
                self.eat_kw(Keyword::Savepoint);
                Some(self.parse_ident()?)
            } else {
                None
            };
            TransactionKind::Rollback { work, to_savepoint }
        } else if self.eat_kw(Keyword::Savepoint) {
            TransactionKind::Savepoint(self.parse_ident()?)
        } else {
            self.expect_kw(Keyword::Release)?;
            self.expect_kw(Keyword::Savepoint)?;
            TransactionKind::ReleaseSavepoint(self.parse_ident()?)
        };
        Ok(TransactionStatement {
            kind,
            span: self.span_from(start),
        })
    }

    fn at_transaction_characteristic(&self) -> bool {
        self.check_word("ISOLATION") || self.check_kw(Keyword::Read) || self.check_kw(Keyword::With)
    }

    fn parse_transaction_characteristic(&mut self) -> PResult<TransactionCharacteristic> {
        if self.eat_word("ISOLATION") {
            self.expect_word("LEVEL")?;
            let level = if self.eat_kw(Keyword::Read) {
                if self.eat_word("UNCOMMITTED") {
                    IsolationLevel::ReadUncommitted
                } else {
                    self.expect_word("COMMITTED")?;
                    IsolationLevel::ReadCommitted
                }
            } else if self.eat_word("REPEATABLE") {
                self.expect_kw(Keyword::Read)?;
                IsolationLevel::RepeatableRead
            } else {
                self.expect_word("SERIALIZABLE")?;
                IsolationLevel::Serializable
            };
            return Ok(TransactionCharacteristic::IsolationLevel(level));
        }
        if self.eat_kw(Keyword::Read) {
            if self.eat_kw(Keyword::Only) {
                return Ok(TransactionCharacteristic::ReadOnly);
            }
            self.expect_word("WRITE")?;
            return Ok(TransactionCharacteristic::ReadWrite);
        }
        if self.eat_kw(Keyword::With) {
            self.expect_word("CONSISTENT")?;
            self.expect_word("SNAPSHOT")?;
            return Ok(TransactionCharacteristic::ConsistentSnapshot);
        }
        Err(self.error_expected("transaction characteristic"))
    }

    // -----------------------------------------------------------------------
    // SET
    // -----------------------------------------------------------------------

    pub(crate) fn parse_set(&mut self) -> PResult<SetStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Set)?;
        let kind = if self.eat_kw(Keyword::Names) {
            let charset = self.parse_charset_name()?;
            let collation = if self.eat_kw(Keyword::Collate) {
                Some(self.parse_name_text()?)
            } else {
                None
            };
            SetKind::Names { charset, collation }
        } else if self.eat_charset_word() {
            SetKind::CharacterSet(self.parse_charset_name()?)
        } else if self.check_word("PASSWORD")
            && (self.is_kw_at(1, Keyword::For) || matches!(self.peek_nth(1), TokenKind::Eq))
        {
            self.advance();
            let user = if self.eat_kw(Keyword::For) {
                Some(self.parse_user_spec()?)
            } else {
                None
            };
            self.expect(&TokenKind::Eq)?;
            SetKind::Password {
                user,
                password: self.parse_string()?,
            }
        } else if self.is_kw_at(0, Keyword::Transaction)
            || self.scope_at(0).is_some() && self.is_kw_at(1, Keyword::Transaction)
        {
            let scope = self.scope_at(0);
            if scope.is_some() {
                self.advance();
            }
            self.expect_kw(Keyword::Transaction)?;
            SetKind::Transaction {
                scope,
                characteristics: self.parse_comma_list(Self::parse_transaction_characteristic)?,
            }
        } else if self.eat_kw(Keyword::Role) {
            let spec = if self.eat_kw(Keyword::All) {
                RoleSpec::All
            } else if self.eat_word("NONE") {
                RoleSpec::None
            } else if self.eat_kw(Keyword::Default) {
                RoleSpec::Default
            } else {
                RoleSpec::Roles(self.parse_comma_list(Self::parse_user_spec)?)
            };
            SetKind::Role(spec)
        } else {
            SetKind::Variables(self.parse_comma_list(Self::parse_variable_assignment)?)
        };
        Ok(SetStatement {
            kind,
            span: self.span_from(start),
        })
    }

    /// `DEFAULT`, a string or a name; `None` is `DEFAULT`.
    fn parse_charset_name(&mut self) -> PResult<Option<String>> {
        if self.eat_kw(Keyword::Default) {
            return Ok(None);
        }
        self.parse_name_text().map(Some)
    }

    fn scope_at(&self, n: usize) -> Option<VariableScope> {
        if self.is_kw_at(n, Keyword::Global) {
            Some(VariableScope::Global)
        } else if self.is_kw_at(n, Keyword::Session) {
            Some(VariableScope::Session)
        } else if self.is_kw_at(n, Keyword::Local) {
            Some(VariableScope::Local)
        } else {
            None
        }
    }

    /// `@v = e`, `@@[scope.]v = e` or `[scope] v = e`; `:=` is accepted for `=`.
    pub(crate) fn parse_variable_assignment(&mut self) -> PResult<VariableAssignment> {
        let start = self.start();
        let target = match self.peek() {
            TokenKind::UserVar(name) => {
                let target = SetTarget::User(name.clone());
                self.advance();
                target
            }
            TokenKind::SystemVar(text) => {
                let target = match system_variable(text) {
                    Variable::System { scope, name } => SetTarget::System { scope, name },
                    Variable::User(name) => SetTarget::User(name),
                };
                self.advance();
                target
            }
            _ => {
                let scope = self.scope_at(0).filter(|_| self.is_ident_at(1));
                if scope.is_some() {
                    self.advance();
                }
                if !self.is_ident_at(0) {
                    return Err(self.error_expected("variable"));
                }
                let name = self.parse_word_ident().value;
                SetTarget::System { scope, name }
            }
        };
        if !self.eat(&TokenKind::Eq) && !self.eat(&TokenKind::Assign) {
            return Err(self.error_expected("="));
        }
        let value = self.parse_expr()?;
        Ok(VariableAssignment {
            target,
            value,
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // SHOW, USE, DESCRIBE, EXPLAIN
    // -----------------------------------------------------------------------

    pub(crate) fn parse_show(&mut self) -> PResult<ShowStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Show)?;
        let full = self.eat_kw(Keyword::Full);
        let kind = if self.eat_word("TABLES") {
            let from = if self.eat_kw(Keyword::From) || self.eat_kw(Keyword::In) {
                Some(self.parse_ident()?)
            } else {
                None
            };
            ShowKind::Tables { full, from }
        } else if self.eat_word("PROCESSLIST") {
            ShowKind::ProcessList { full }
        } else if self.eat_kw(Keyword::Columns) || self.eat_word("FIELDS") {
            self.expect_from_or_in()?;
            ShowKind::Columns {
                full,
                table: self.parse_qualified_name()?,
            }
        } else if full {
            return Err(self.error_expected("TABLES, COLUMNS or PROCESSLIST"));
        } else if self.eat_kw(Keyword::Databases) || self.eat_word("SCHEMAS") {
            ShowKind::Databases
        } else if self.eat_kw(Keyword::Index) || self.eat_word("INDEXES") || self.eat_word("KEYS")
        {
            self.expect_from_or_in()?;
            ShowKind::Index {
                table: self.parse_qualified_name()?,
            }
        } else if self.eat_kw(Keyword::Create) {
            if self.eat_kw(Keyword::Table) {
                ShowKind::CreateTable(self.parse_qualified_name()?)
            } else {
                self.expect_kw(Keyword::View)?;
                ShowKind::CreateView(self.parse_qualified_name()?)
            }
        } else if self.eat_word("WARNINGS") {
            ShowKind::Warnings
        } else if self.eat_word("ERRORS") {
            ShowKind::Errors
        } else if self.eat_word("GRANTS") {
            let user = if self.eat_kw(Keyword::For) {
                Some(self.parse_user_spec()?)
            } else {
                None
            };
            ShowKind::Grants { user }
        } else if self.eat_word("TENANTS") {
            ShowKind::Tenants
        } else {
            let scope = self.scope_at(0);
            if scope.is_some() {
                self.advance();
            }
            if self.eat_word("VARIABLES") {
                ShowKind::Variables { scope }
            } else if self.eat_word("STATUS") {
                ShowKind::Status { scope }
            } else {
                return Err(self.error_expected("SHOW target"));
            }
        };
        let filter = if self.eat_kw(Keyword::Like) {
            Some(ShowFilter::Like(self.parse_string()?))
        } else if self.eat_kw(Keyword::Where) {
            Some(ShowFilter::Where(self.parse_expr()?))
        } else {
            None
        };
        Ok(ShowStatement {
            kind,
            filter,
            span: self.span_from(start),
        })
    }

    fn expect_from_or_in(&mut self) -> PResult<()> {
        if self.eat_kw(Keyword::From) || self.eat_kw(Keyword::In) {
            Ok(())
        } else {
            Err(self.error_expected("FROM or IN"))
        }
    }

    pub(crate) fn parse_use(&mut self) -> PResult<UseStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Use)?;
        let database = self.parse_ident()?;
        Ok(UseStatement {
            database,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_describe(&mut self) -> PResult<DescribeStatement> {
        let start = self.start();
        if !self.eat_kw(Keyword::Describe) {
            self.expect_kw(Keyword::Desc)?;
        }
        let table = self.parse_qualified_name()?;
        let column = if self.at_ident() {
            Some(self.parse_ident()?)
        } else {
            None
        };
        Ok(DescribeStatement {
            table,
            column,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_explain(&mut self) -> PResult<ExplainStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Explain)?;
        let format = if self.eat_word("BASIC") {
            Some(ExplainFormat::Basic)
        } else if self.eat_word("EXTENDED") {
            Some(ExplainFormat::Extended)
        } else if self.eat_word("OUTLINE") {
            Some(ExplainFormat::Outline)
        } else if self.eat_kw(Keyword::Partitions) {
            Some(ExplainFormat::Partitions)
        } else if self.check_word("FORMAT") && matches!(self.peek_nth(1), TokenKind::Eq) {
            self.advance();
            self.advance();
            Some(ExplainFormat::Format(self.parse_word_ident()))
        } else {
            None
        };
        let statement = self.nested(Self::parse_statement)?;
        Ok(ExplainStatement {
            format,
            statement: Box::new(statement),
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // Users, roles, privileges
    // -----------------------------------------------------------------------

    pub(crate) fn parse_create_user(&mut self, start: u32) -> PResult<CreateUserStatement> {
        self.expect_kw(Keyword::User)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let users = self.parse_comma_list(|p| {
            let user = p.parse_user_spec()?;
            let password = if p.check_word("IDENTIFIED") && p.is_kw_at(1, Keyword::By) {
                p.advance();
                p.advance();
                Some(p.parse_name_text()?)
            } else {
                None
            };
            Ok(UserIdentification { user, password })
        })?;
        let attributes = self.parse_user_attributes()?;
        Ok(CreateUserStatement {
            if_not_exists,
            users,
            attributes,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_user(&mut self) -> PResult<AlterUserStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::User)?;
        let user = self.parse_user_spec()?;
        let attributes = self.parse_user_attributes()?;
        if attributes.is_empty() {
            return Err(self.error_expected("user attribute"));
        }
        Ok(AlterUserStatement {
            user,
            attributes,
            span: self.span_from(start),
        })
    }

    fn parse_user_attributes(&mut self) -> PResult<Vec<UserAttribute>> {
        let mut attributes = Vec::new();
        loop {
            let attribute = if self.eat_word("IDENTIFIED") {
                self.expect_kw(Keyword::By)?;
                UserAttribute::IdentifiedBy(self.parse_name_text()?)
            } else if self.eat_kw(Keyword::Profile) {
                UserAttribute::Profile(self.parse_ident()?)
            } else if self.check_kw(Keyword::Default) && self.is_kw_at(1, Keyword::Tablespace) {
                self.advance();
                self.advance();
                UserAttribute::DefaultTablespace(self.parse_ident()?)
            } else if self.eat_word("ACCOUNT") {
                if self.eat_kw(Keyword::Lock) {
                    UserAttribute::AccountLock(true)
                } else {
                    self.expect_word("UNLOCK")?;
                    UserAttribute::AccountLock(false)
                }
            } else {
                return Ok(attributes);
            };
            attributes.push(attribute);
        }
    }

    pub(crate) fn parse_create_role(&mut self, start: u32) -> PResult<CreateRoleStatement> {
        self.expect_kw(Keyword::Role)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let roles = self.parse_comma_list(Self::parse_user_spec)?;
        let password = if self.eat_word("IDENTIFIED") {
            self.expect_kw(Keyword::By)?;
            Some(self.parse_name_text()?)
        } else {
            if self.eat_kw(Keyword::Not) {
                self.expect_word("IDENTIFIED")?;
            }
            None
        };
        Ok(CreateRoleStatement {
            if_not_exists,
            roles,
            password,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_drop_principal(&mut self) -> PResult<DropPrincipalStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Drop)?;
        let kind = if self.eat_kw(Keyword::User) {
            PrincipalKind::User
        } else {
            self.expect_kw(Keyword::Role)?;
            PrincipalKind::Role
        };
        let if_exists = self.parse_if_exists()?;
        let names = self.parse_comma_list(Self::parse_user_spec)?;
        let cascade = self.eat_kw(Keyword::Cascade);
        Ok(DropPrincipalStatement {
            kind,
            if_exists,
            names,
            cascade,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_grant(&mut self) -> PResult<GrantStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Grant)?;
        let privileges = self.parse_comma_list(Self::parse_privilege)?;
        let object = self.parse_grant_object()?;
        self.expect_kw(Keyword::To)?;
        let grantees = self.parse_comma_list(Self::parse_user_spec)?;
        let with_grant_option = if self.eat_kw(Keyword::With) {
            if !self.eat_kw(Keyword::Grant) {
                self.expect_word("ADMIN")?;
            }
            self.expect_kw(Keyword::Option)?;
            true
        } else {
            false
        };
        Ok(GrantStatement {
            privileges,
            object,
            grantees,
            with_grant_option,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_revoke(&mut self) -> PResult<RevokeStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Revoke)?;
        let privileges = self.parse_comma_list(Self::parse_privilege)?;
        let object = self.parse_grant_object()?;
        self.expect_kw(Keyword::From)?;
        let grantees = self.parse_comma_list(Self::parse_user_spec)?;
        Ok(RevokeStatement {
            privileges,
            object,
            grantees,
            span: self.span_from(start),
        })
    }

    /// One or more words, e.g. `SELECT`, `CREATE VIEW`, `ALL PRIVILEGES`,
    /// with an optional column list.
    fn parse_privilege(&mut self) -> PResult<Privilege> {
        let mut words: Vec<String> = Vec::new();
        while let Some(word) = self.word_at(0) {
            if matches!(
                self.peek(),
                TokenKind::Keyword(Keyword::On | Keyword::To | Keyword::From)
            ) {
                break;
            }
            words.push(word.to_ascii_uppercase());
            self.advance();
        }
        if words.is_empty() {
            return Err(self.error_expected("privilege"));
        }
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_list(Self::parse_ident)?
        } else {
            Vec::new()
        };
        Ok(Privilege {
            name: words.join(" "),
            columns,
        })
    }

    fn parse_grant_object(&mut self) -> PResult<Option<GrantObject>> {
        if !self.eat_kw(Keyword::On) {
            return Ok(None);
        }
        // MySQL's `ON TABLE t` form.
        if self.check_kw(Keyword::Table) && !matches!(self.peek_nth(1), TokenKind::Dot) {
            self.advance();
        }
        if self.eat(&TokenKind::Star) {
            self.expect(&TokenKind::Dot)?;
            self.expect(&TokenKind::Star)?;
            return Ok(Some(GrantObject::Global));
        }
        if self.is_ident_at(0)
            && matches!(self.peek_nth(1), TokenKind::Dot)
            && matches!(self.peek_nth(2), TokenKind::Star)
        {
            let schema = self.parse_ident()?;
            self.advance();
            self.advance();
            return Ok(Some(GrantObject::AllInSchema(schema)));
        }
        Ok(Some(GrantObject::Object(self.parse_qualified_name()?)))
    }

    // -----------------------------------------------------------------------
    // KILL, CALL
    // -----------------------------------------------------------------------

    pub(crate) fn parse_kill(&mut self) -> PResult<KillStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Kill)?;
        let has_id_after = !matches!(self.peek_nth(1), TokenKind::Eof | TokenKind::Semicolon);
        let target = if has_id_after && self.eat_word("CONNECTION") {
            Some(KillTarget::Connection)
        } else if has_id_after && self.eat_word("QUERY") {
            Some(KillTarget::Query)
        } else {
            None
        };
        let id = self.parse_expr()?;
        Ok(KillStatement {
            target,
            id,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_call(&mut self) -> PResult<CallStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Call)?;
        let procedure = self.parse_qualified_name()?;
        let args = if self.eat(&TokenKind::LeftParen) {
            if self.eat(&TokenKind::RightParen) {
                Vec::new()
            } else {
                let args = self.parse_comma_list(Self::parse_expr)?;
                self.expect(&TokenKind::RightParen)?;
                args
            }
        } else {
            Vec::new()
        };
        Ok(CallStatement {
            procedure,
            args,
            span: self.span_from(start),
        })
    }

    // -----------------------------------------------------------------------
    // ALTER SYSTEM / ALTER SESSION
    // -----------------------------------------------------------------------

    fn at_setting(&self) -> bool {
        self.word_at(0).is_some() && matches!(self.peek_nth(1), TokenKind::Eq)
    }

    fn parse_setting(&mut self) -> PResult<Setting> {
        if !self.at_setting() {
            return Err(self.error_expected("name = value"));
        }
        let name = self.parse_word_ident();
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(Setting { name, value })
    }

    /// Settings that follow without separating commas.
    fn parse_trailing_settings(&mut self) -> PResult<Vec<Setting>> {
        let mut settings = Vec::new();
        while self.at_setting() {
            settings.push(self.parse_setting()?);
        }
        Ok(settings)
    }

    pub(crate) fn parse_alter_system(&mut self) -> PResult<AlterSystemStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::System)?;
        let action = if self.eat_kw(Keyword::Set) {
            let params = self.parse_comma_list(|p| {
                let setting = p.parse_setting()?;
                let targets = p.parse_trailing_settings()?;
                Ok(SystemParameter { setting, targets })
            })?;
            AlterSystemAction::Set(params)
        } else if self.check_word("MAJOR") || self.check_word("MINOR") {
            let kind = if self.eat_word("MAJOR") {
                FreezeKind::Major
            } else {
                self.advance();
                FreezeKind::Minor
            };
            self.expect_word("FREEZE")?;
            AlterSystemAction::Freeze {
                kind,
                targets: self.parse_trailing_settings()?,
            }
        } else if self.eat_word("FLUSH") {
            let cache = self.parse_word_ident();
            self.expect_word("CACHE")?;
            let targets = self.parse_trailing_settings()?;
            let global = self.eat_kw(Keyword::Global);
            AlterSystemAction::FlushCache {
                cache,
                targets,
                global,
            }
        } else if self.eat_kw(Keyword::Kill) {
            self.expect_kw(Keyword::Session)?;
            let session = self.parse_expr()?;
            let immediate = self.eat_word("IMMEDIATE");
            AlterSystemAction::KillSession { session, immediate }
        } else if self.eat_word("CHECKPOINT") {
            AlterSystemAction::Checkpoint
        } else {
            return Err(self.error_expected("SET, FREEZE, FLUSH, KILL SESSION or CHECKPOINT"));
        };
        Ok(AlterSystemStatement {
            action,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_alter_session(&mut self) -> PResult<AlterSessionStatement> {
        let start = self.start();
        self.expect_kw(Keyword::Alter)?;
        self.expect_kw(Keyword::Session)?;
        self.expect_kw(Keyword::Set)?;
        let mut settings = vec![self.parse_setting()?];
        loop {
            if self.check(&TokenKind::Comma) && self.word_at(1).is_some() {
                self.advance();
            }
            if !self.at_setting() {
                break;
            }
            settings.push(self.parse_setting()?);
        }
        Ok(AlterSessionStatement {
            settings,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::parser::tests::{first_error, mysql, oracle, round_trip_in};
    use duosql_ast::{
        AlterSystemAction, ExplainFormat, GrantObject, IsolationLevel, KillTarget, RoleSpec,
        SetKind, SetTarget, ShowFilter, ShowKind, Statement, TransactionCharacteristic,
        TransactionKind, UserAttribute, VariableScope,
    };

    #[test]
    fn test_transactions() {
        let Statement::Transaction(t) =
            mysql("START TRANSACTION READ ONLY, WITH CONSISTENT SNAPSHOT")
        else {
            unreachable!()
        };
        assert_eq!(
            t.kind,
            TransactionKind::Start(vec![
                TransactionCharacteristic::ReadOnly,
                TransactionCharacteristic::ConsistentSnapshot
            ])
        );
        assert!(matches!(
            mysql("ROLLBACK WORK TO SAVEPOINT sp1"),
            Statement::Transaction(t) if matches!(
                t.kind,
                TransactionKind::Rollback { work: true, to_savepoint: Some(_) }
            )
        ));
        assert!(matches!(
            oracle("COMMIT"),
            Statement::Transaction(t) if t.kind == TransactionKind::Commit { work: false }
        ));
        assert!(matches!(
            mysql("RELEASE SAVEPOINT sp1"),
            Statement::Transaction(t) if matches!(t.kind, TransactionKind::ReleaseSavepoint(_))
        ));
    }

    #[test]
    fn test_set_variables() {
        let Statement::Set(s) = mysql("SET @a = 1, @@global.max_connections = 100, SESSION sql_mode = DEFAULT, b := 2")
        else {
            unreachable!()
        };
        let SetKind::Variables(vars) = s.kind else {
            unreachable!()
        };
        assert_eq!(vars[0].target, SetTarget::User("a".into()));
        assert_eq!(
            vars[1].target,
            SetTarget::System {
                scope: Some(VariableScope::Global),
                name: "max_connections".into()
            }
        );
        assert_eq!(
            vars[2].target,
            SetTarget::System {
                scope: Some(VariableScope::Session),
                name: "sql_mode".into()
            }
        );
        assert_eq!(vars.len(), 4);
    }

    #[test]
    fn test_set_forms() {
        assert!(matches!(
            mysql("SET NAMES utf8mb4 COLLATE utf8mb4_bin"),
            Statement::Set(s) if matches!(s.kind, SetKind::Names { charset: Some(_), collation: Some(_) })
        ));
        assert!(matches!(
            mysql("SET CHARACTER SET DEFAULT"),
            Statement::Set(s) if s.kind == SetKind::CharacterSet(None)
        ));
        assert!(matches!(
            mysql("SET PASSWORD FOR 'u'@'%' = 'secret'"),
            Statement::Set(s) if matches!(s.kind, SetKind::Password { user: Some(_), .. })
        ));
        let Statement::Set(s) = mysql("SET GLOBAL TRANSACTION ISOLATION LEVEL REPEATABLE READ") else {
            unreachable!()
        };
        assert_eq!(
            s.kind,
            SetKind::Transaction {
                scope: Some(VariableScope::Global),
                characteristics: vec![TransactionCharacteristic::IsolationLevel(
                    IsolationLevel::RepeatableRead
                )],
            }
        );
        assert!(matches!(
            oracle("SET ROLE NONE"),
            Statement::Set(s) if s.kind == SetKind::Role(RoleSpec::None)
        ));
    }

    #[test]
    fn test_show_variants() {
        let Statement::Show(s) = mysql("SHOW FULL TABLES FROM db LIKE 't%'") else {
            unreachable!()
        };
        assert!(matches!(s.kind, ShowKind::Tables { full: true, from: Some(_) }));
        assert_eq!(s.filter, Some(ShowFilter::Like("t%".into())));
        assert!(matches!(
            mysql("SHOW GLOBAL VARIABLES WHERE variable_name = 'x'"),
            Statement::Show(s) if s.kind == ShowKind::Variables { scope: Some(VariableScope::Global) }
                && matches!(s.filter, Some(ShowFilter::Where(_)))
        ));
        assert!(matches!(
            mysql("SHOW INDEX FROM db.t"),
            Statement::Show(s) if matches!(s.kind, ShowKind::Index { .. })
        ));
        assert!(matches!(
            mysql("SHOW CREATE TABLE t"),
            Statement::Show(s) if matches!(s.kind, ShowKind::CreateTable(_))
        ));
        assert!(matches!(
            mysql("SHOW FULL PROCESSLIST"),
            Statement::Show(s) if s.kind == ShowKind::ProcessList { full: true }
        ));
        assert!(first_error("SHOW FULL DATABASES", Dialect::MySql)
            .message
            .contains("expected"));
    }

    #[test]
    fn test_use_describe_explain() {
        assert!(matches!(mysql("USE db"), Statement::Use(u) if u.database.value == "db"));
        assert!(matches!(
            oracle("DESC hr.emp"),
            Statement::Describe(d) if d.column.is_none()
        ));
        assert!(matches!(
            mysql("DESCRIBE t c"),
            Statement::Describe(d) if d.column.is_some()
        ));
        let Statement::Explain(e) = mysql("EXPLAIN FORMAT = JSON SELECT * FROM t") else {
            unreachable!()
        };
        assert!(matches!(e.format, Some(ExplainFormat::Format(_))));
        assert!(matches!(*e.statement, Statement::Select(_)));
        assert!(matches!(
            oracle("EXPLAIN EXTENDED UPDATE t SET a = 1"),
            Statement::Explain(e) if e.format == Some(ExplainFormat::Extended)
                && matches!(*e.statement, Statement::Update(_))
        ));
    }

    #[test]
    fn test_users_and_roles() {
        let Statement::CreateUser(u) = oracle(
            "CREATE USER scott IDENTIFIED BY tiger DEFAULT TABLESPACE users PROFILE app ACCOUNT LOCK",
        ) else {
            unreachable!()
        };
        assert_eq!(u.users[0].password.as_deref(), Some("tiger"));
        assert_eq!(u.attributes.len(), 3);
        assert_eq!(u.attributes[2], UserAttribute::AccountLock(true));

        let Statement::CreateUser(u) = mysql(
            "CREATE USER IF NOT EXISTS 'a'@'%' IDENTIFIED BY 'x', b@localhost",
        ) else {
            unreachable!()
        };
        assert!(u.if_not_exists);
        assert_eq!(u.users.len(), 2);
        assert_eq!(u.users[1].user.host.as_deref(), Some("localhost"));

        assert!(first_error("ALTER USER u", Dialect::Oracle)
            .message
            .contains("user attribute"));
        assert!(matches!(
            oracle("CREATE ROLE r NOT IDENTIFIED"),
            Statement::CreateRole(r) if r.password.is_none()
        ));
        assert!(matches!(
            mysql("DROP USER IF EXISTS a, b"),
            Statement::DropPrincipal(d) if d.if_exists && d.names.len() == 2
        ));
    }

    #[test]
    fn test_grant_and_revoke() {
        let Statement::Grant(g) =
            mysql("GRANT SELECT (a, b), INSERT ON db.* TO 'u'@'%' WITH GRANT OPTION")
        else {
            unreachable!()
        };
        assert_eq!(g.privileges.len(), 2);
        assert_eq!(g.privileges[0].columns.len(), 2);
        assert!(matches!(g.object, Some(GrantObject::AllInSchema(_))));
        assert!(g.with_grant_option);

        let Statement::Grant(g) = oracle("GRANT CREATE SESSION, dba TO scott WITH ADMIN OPTION")
        else {
            unreachable!()
        };
        assert_eq!(g.privileges[0].name, "CREATE SESSION");
        assert!(g.object.is_none());

        assert!(matches!(
            mysql("GRANT ALL PRIVILEGES ON *.* TO admin"),
            Statement::Grant(g) if g.object == Some(GrantObject::Global)
        ));
        assert!(matches!(
            oracle("REVOKE SELECT ON hr.emp FROM scott"),
            Statement::Revoke(r) if matches!(r.object, Some(GrantObject::Object(_)))
        ));
    }

    #[test]
    fn test_kill_and_call() {
        assert!(matches!(
            mysql("KILL QUERY 42"),
            Statement::Kill(k) if k.target == Some(KillTarget::Query)
        ));
        assert!(matches!(mysql("KILL 42"), Statement::Kill(k) if k.target.is_none()));
        assert!(matches!(
            mysql("CALL db.proc(1, 'a')"),
            Statement::Call(c) if c.args.len() == 2
        ));
        assert!(matches!(mysql("CALL proc"), Statement::Call(c) if c.args.is_empty()));
    }

    #[test]
    fn test_alter_system_and_session() {
        let Statement::AlterSystem(s) =
            mysql("ALTER SYSTEM SET memory_limit = '10G' SERVER = '127.0.0.1:2882', enable_sql_audit = true")
        else {
            unreachable!()
        };
        let AlterSystemAction::Set(params) = s.action else {
            unreachable!()
        };
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].targets.len(), 1);

        assert!(matches!(
            mysql("ALTER SYSTEM MAJOR FREEZE TENANT = t1"),
            Statement::AlterSystem(s) if matches!(s.action, AlterSystemAction::Freeze { ref targets, .. } if targets.len() == 1)
        ));
        assert!(matches!(
            oracle("ALTER SYSTEM FLUSH PLAN CACHE GLOBAL"),
            Statement::AlterSystem(s) if matches!(s.action, AlterSystemAction::FlushCache { global: true, .. })
        ));
        assert!(matches!(
            oracle("ALTER SYSTEM KILL SESSION '12,34' IMMEDIATE"),
            Statement::AlterSystem(s) if matches!(s.action, AlterSystemAction::KillSession { immediate: true, .. })
        ));
        assert!(matches!(
            oracle("ALTER SESSION SET nls_date_format = 'YYYY-MM-DD' time_zone = '+08:00'"),
            Statement::AlterSession(s) if s.settings.len() == 2
        ));
    }

    #[test]
    fn test_admin_round_trips() {
        for sql in [
            "START TRANSACTION ISOLATION LEVEL READ COMMITTED",
            "SET @x = 1, GLOBAL wait_timeout = 10",
            "SET NAMES DEFAULT",
            "SHOW COLUMNS FROM t LIKE 'a%'",
            "GRANT SELECT, UPDATE (a) ON db.t TO u@'%' WITH GRANT OPTION",
            "REVOKE ALL PRIVILEGES ON *.* FROM u",
            "EXPLAIN SELECT 1",
            "KILL CONNECTION 7",
            "CALL p()",
            "ALTER SYSTEM SET a = 1 TENANT = 't1', b = 2",
        ] {
            round_trip_in(sql, Dialect::MySql);
        }
        for sql in [
            "CREATE USER u IDENTIFIED BY pw PROFILE p",
            "ALTER USER u ACCOUNT UNLOCK",
            "DROP ROLE r",
            "ALTER SESSION SET a = 1 b = 'x'",
            "ALTER SYSTEM CHECKPOINT",
        ] {
            round_trip_in(sql, Dialect::Oracle);
        }
    }

    #[test]
    fn test_isolation_level_in_both_dialects() {
        for dialect in [Dialect::MySql, Dialect::Oracle] {
            assert_eq!(
                round_trip_in("START TRANSACTION ISOLATION LEVEL READ COMMITTED", dialect),
                "START TRANSACTION ISOLATION LEVEL READ COMMITTED"
            );
        }
        let Statement::Set(s) = mysql("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE") else {
            unreachable!()
        };
        assert_eq!(
            s.kind,
            SetKind::Transaction {
                scope: None,
                characteristics: vec![TransactionCharacteristic::IsolationLevel(
                    IsolationLevel::Serializable
                )],
            }
        );
    }
}
