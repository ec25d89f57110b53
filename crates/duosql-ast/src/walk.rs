//! Generic pre-order traversal over the AST.
//!
//! [`NodeRef`] is a borrowed, type-erased view of any node that carries a
//! span. A single callback receives every node in source order together with
//! its [`NodeKind`], which is enough for tooling (highlighters, linters,
//! table extractors) without a per-node visitor trait.

#[allow(clippy::wildcard_imports)]
use crate::*;

/// What the callback wants the walker to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Descend into the children of the current node.
    Continue,
    /// Do not visit the children of the current node; continue with its
    /// next sibling.
    SkipChildren,
    /// Abort the whole traversal.
    Stop,
}

/// Discriminator for [`Statement`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Merge,
    CreateTable,
    CreateIndex,
    CreateView,
    CreateMaterializedView,
    CreateMaterializedViewLog,
    CreateDatabase,
    CreateTablespace,
    CreateTenant,
    CreateUser,
    CreateRole,
    CreateSequence,
    CreateSynonym,
    CreateDatabaseLink,
    CreateProfile,
    CreateContext,
    AlterTable,
    AlterTablespace,
    AlterTenant,
    AlterUser,
    AlterSequence,
    AlterProfile,
    Drop,
    DropPrincipal,
    Truncate,
    RenameTable,
    Comment,
    Flashback,
    Purge,
    Transaction,
    Set,
    Show,
    Use,
    Describe,
    Explain,
    Grant,
    Revoke,
    Kill,
    Call,
    AlterSystem,
    AlterSession,
}

/// Discriminator for [`Expr`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Literal,
    Column,
    Pseudo,
    SequenceValue,
    Variable,
    Placeholder,
    DefaultValue,
    Unary,
    Binary,
    Assign,
    Is,
    Between,
    In,
    Like,
    Quantified,
    Case,
    Cast,
    Extract,
    Interval,
    Exists,
    Subquery,
    Row,
    Function,
    Collate,
    JsonAccess,
    Json,
    JsonObject,
    Xml,
}

/// Kind of a node visited by [`walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Statement(StatementKind),
    Query,
    With,
    Cte,
    QuerySpec,
    Hint,
    SelectItem,
    TableRef,
    Hierarchical,
    GroupBy,
    OrderingTerm,
    WindowSpec,
    Expr(ExprKind),
    Assignment,
    Returning,
    MergeClause,
    ColumnDef,
    TableConstraint,
    AlterAction,
    PartitionOption,
    Subpartition,
    PartitionDef,
    VariableAssignment,
}

/// A borrowed reference to any spanned AST node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Statement(&'a Statement),
    Query(&'a SelectStatement),
    With(&'a WithClause),
    Cte(&'a Cte),
    QuerySpec(&'a QuerySpec),
    Hint(&'a Hint),
    SelectItem(&'a SelectItem),
    TableRef(&'a TableRef),
    Hierarchical(&'a HierarchicalClause),
    GroupBy(&'a GroupBy),
    OrderingTerm(&'a OrderingTerm),
    WindowSpec(&'a WindowSpec),
    Expr(&'a Expr),
    Assignment(&'a Assignment),
    Returning(&'a ReturningClause),
    MergeClause(&'a MergeClause),
    ColumnDef(&'a ColumnDef),
    TableConstraint(&'a TableConstraint),
    AlterAction(&'a AlterTableAction),
    PartitionOption(&'a PartitionOption),
    Subpartition(&'a SubpartitionOption),
    PartitionDef(&'a PartitionDef),
    VariableAssignment(&'a VariableAssignment),
}

impl<'a> From<&'a Statement> for NodeRef<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Self::Statement(stmt)
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self::Expr(expr)
    }
}

impl<'a> From<&'a SelectStatement> for NodeRef<'a> {
    fn from(query: &'a SelectStatement) -> Self {
        Self::Query(query)
    }
}

impl Statement {
    /// Discriminator of this statement.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select(_) => StatementKind::Select,
            Self::Insert(_) => StatementKind::Insert,
            Self::Update(_) => StatementKind::Update,
            Self::Delete(_) => StatementKind::Delete,
            Self::Merge(_) => StatementKind::Merge,
            Self::CreateTable(_) => StatementKind::CreateTable,
            Self::CreateIndex(_) => StatementKind::CreateIndex,
            Self::CreateView(_) => StatementKind::CreateView,
            Self::CreateMaterializedView(_) => StatementKind::CreateMaterializedView,
            Self::CreateMaterializedViewLog(_) => StatementKind::CreateMaterializedViewLog,
            Self::CreateDatabase(_) => StatementKind::CreateDatabase,
            Self::CreateTablespace(_) => StatementKind::CreateTablespace,
            Self::CreateTenant(_) => StatementKind::CreateTenant,
            Self::CreateUser(_) => StatementKind::CreateUser,
            Self::CreateRole(_) => StatementKind::CreateRole,
            Self::CreateSequence(_) => StatementKind::CreateSequence,
            Self::CreateSynonym(_) => StatementKind::CreateSynonym,
            Self::CreateDatabaseLink(_) => StatementKind::CreateDatabaseLink,
            Self::CreateProfile(_) => StatementKind::CreateProfile,
            Self::CreateContext(_) => StatementKind::CreateContext,
            Self::AlterTable(_) => StatementKind::AlterTable,
            Self::AlterTablespace(_) => StatementKind::AlterTablespace,
            Self::AlterTenant(_) => StatementKind::AlterTenant,
            Self::AlterUser(_) => StatementKind::AlterUser,
            Self::AlterSequence(_) => StatementKind::AlterSequence,
            Self::AlterProfile(_) => StatementKind::AlterProfile,
            Self::Drop(_) => StatementKind::Drop,
            Self::DropPrincipal(_) => StatementKind::DropPrincipal,
            Self::Truncate(_) => StatementKind::Truncate,
            Self::RenameTable(_) => StatementKind::RenameTable,
            Self::Comment(_) => StatementKind::Comment,
            Self::Flashback(_) => StatementKind::Flashback,
            Self::Purge(_) => StatementKind::Purge,
            Self::Transaction(_) => StatementKind::Transaction,
            Self::Set(_) => StatementKind::Set,
            Self::Show(_) => StatementKind::Show,
            Self::Use(_) => StatementKind::Use,
            Self::Describe(_) => StatementKind::Describe,
            Self::Explain(_) => StatementKind::Explain,
            Self::Grant(_) => StatementKind::Grant,
            Self::Revoke(_) => StatementKind::Revoke,
            Self::Kill(_) => StatementKind::Kill,
            Self::Call(_) => StatementKind::Call,
            Self::AlterSystem(_) => StatementKind::AlterSystem,
            Self::AlterSession(_) => StatementKind::AlterSession,
        }
    }

    /// Pre-order walk rooted at this statement.
    pub fn walk<'a, F>(&'a self, f: &mut F) -> WalkControl
    where
        F: FnMut(NodeRef<'a>) -> WalkControl,
    {
        walk(NodeRef::Statement(self), f)
    }
}

impl Expr {
    /// Discriminator of this expression.
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Literal(..) => ExprKind::Literal,
            Self::Column(..) => ExprKind::Column,
            Self::Pseudo(..) => ExprKind::Pseudo,
            Self::SequenceValue { .. } => ExprKind::SequenceValue,
            Self::Variable(..) => ExprKind::Variable,
            Self::Placeholder(..) => ExprKind::Placeholder,
            Self::DefaultValue(_) => ExprKind::DefaultValue,
            Self::Unary { .. } => ExprKind::Unary,
            Self::Binary { .. } => ExprKind::Binary,
            Self::Assign { .. } => ExprKind::Assign,
            Self::Is { .. } => ExprKind::Is,
            Self::Between { .. } => ExprKind::Between,
            Self::In { .. } => ExprKind::In,
            Self::Like { .. } => ExprKind::Like,
            Self::Quantified { .. } => ExprKind::Quantified,
            Self::Case { .. } => ExprKind::Case,
            Self::Cast { .. } => ExprKind::Cast,
            Self::Extract { .. } => ExprKind::Extract,
            Self::Interval { .. } => ExprKind::Interval,
            Self::Exists { .. } => ExprKind::Exists,
            Self::Subquery(..) => ExprKind::Subquery,
            Self::Row(..) => ExprKind::Row,
            Self::Function(_) => ExprKind::Function,
            Self::Collate { .. } => ExprKind::Collate,
            Self::JsonAccess { .. } => ExprKind::JsonAccess,
            Self::Json(_) => ExprKind::Json,
            Self::JsonObject { .. } => ExprKind::JsonObject,
            Self::Xml(_) => ExprKind::Xml,
        }
    }

    /// Pre-order walk rooted at this expression.
    pub fn walk<'a, F>(&'a self, f: &mut F) -> WalkControl
    where
        F: FnMut(NodeRef<'a>) -> WalkControl,
    {
        walk(NodeRef::Expr(self), f)
    }
}

impl<'a> NodeRef<'a> {
    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Statement(s) => NodeKind::Statement(s.kind()),
            Self::Query(_) => NodeKind::Query,
            Self::With(_) => NodeKind::With,
            Self::Cte(_) => NodeKind::Cte,
            Self::QuerySpec(_) => NodeKind::QuerySpec,
            Self::Hint(_) => NodeKind::Hint,
            Self::SelectItem(_) => NodeKind::SelectItem,
            Self::TableRef(_) => NodeKind::TableRef,
            Self::Hierarchical(_) => NodeKind::Hierarchical,
            Self::GroupBy(_) => NodeKind::GroupBy,
            Self::OrderingTerm(_) => NodeKind::OrderingTerm,
            Self::WindowSpec(_) => NodeKind::WindowSpec,
            Self::Expr(e) => NodeKind::Expr(e.kind()),
            Self::Assignment(_) => NodeKind::Assignment,
            Self::Returning(_) => NodeKind::Returning,
            Self::MergeClause(_) => NodeKind::MergeClause,
            Self::ColumnDef(_) => NodeKind::ColumnDef,
            Self::TableConstraint(_) => NodeKind::TableConstraint,
            Self::AlterAction(_) => NodeKind::AlterAction,
            Self::PartitionOption(_) => NodeKind::PartitionOption,
            Self::Subpartition(_) => NodeKind::Subpartition,
            Self::PartitionDef(_) => NodeKind::PartitionDef,
            Self::VariableAssignment(_) => NodeKind::VariableAssignment,
        }
    }

    #[must_use]
    pub fn span(self) -> Span {
        match self {
            Self::Statement(s) => s.span(),
            Self::Query(q) => q.span,
            Self::With(w) => w.span,
            Self::Cte(c) => c.span,
            Self::QuerySpec(q) => q.span,
            Self::Hint(h) => h.span,
            Self::SelectItem(i) => i.span(),
            Self::TableRef(t) => t.span(),
            Self::Hierarchical(h) => h.span,
            Self::GroupBy(g) => g.span,
            Self::OrderingTerm(o) => o.span,
            Self::WindowSpec(w) => w.span,
            Self::Expr(e) => e.span(),
            Self::Assignment(a) => a.span,
            Self::Returning(r) => r.span,
            Self::MergeClause(m) => m.span(),
            Self::ColumnDef(c) => c.span,
            Self::TableConstraint(c) => c.span,
            Self::AlterAction(a) => a.span(),
            Self::PartitionOption(p) => p.span,
            Self::Subpartition(s) => s.span,
            Self::PartitionDef(d) => d.span,
            Self::VariableAssignment(v) => v.span,
        }
    }

    /// Direct children in source order.
    #[must_use]
    pub fn children(self) -> Vec<NodeRef<'a>> {
        let mut out = Children(Vec::new());
        match self {
            Self::Statement(s) => out.statement(s),
            Self::Query(q) => out.query(q),
            Self::With(w) => out.0.extend(w.ctes.iter().map(NodeRef::Cte)),
            Self::Cte(c) => out.0.push(NodeRef::Query(&c.query)),
            Self::QuerySpec(q) => out.query_spec(q),
            Self::Hint(_) => {}
            Self::SelectItem(item) => {
                if let SelectItem::Expr { expr, .. } = item {
                    out.expr(expr);
                }
            }
            Self::TableRef(t) => out.table_ref(t),
            Self::Hierarchical(h) => {
                out.opt_expr(h.start_with.as_ref());
                out.expr(&h.connect_by);
            }
            Self::GroupBy(g) => {
                for item in &g.items {
                    match item {
                        GroupingElement::Expr(e) => out.expr(e),
                        GroupingElement::Rollup(list) | GroupingElement::Cube(list) => {
                            out.exprs(list);
                        }
                        GroupingElement::GroupingSets(sets) => {
                            for set in sets {
                                out.exprs(set);
                            }
                        }
                    }
                }
            }
            Self::OrderingTerm(o) => out.expr(&o.expr),
            Self::WindowSpec(w) => out.window(w),
            Self::Expr(e) => out.expr_children(e),
            Self::Assignment(a) => out.expr(&a.value),
            Self::Returning(r) => {
                out.0.extend(r.items.iter().map(NodeRef::SelectItem));
                out.exprs(&r.into);
            }
            Self::MergeClause(m) => match m {
                MergeClause::Update {
                    assignments,
                    where_clause,
                    delete_where,
                    ..
                } => {
                    out.assignments(assignments);
                    out.opt_expr(where_clause.as_ref());
                    out.opt_expr(delete_where.as_ref());
                }
                MergeClause::Insert {
                    values,
                    where_clause,
                    ..
                } => {
                    out.exprs(values);
                    out.opt_expr(where_clause.as_ref());
                }
            },
            Self::ColumnDef(c) => {
                for constraint in &c.constraints {
                    match &constraint.kind {
                        ColumnConstraintKind::Default(e)
                        | ColumnConstraintKind::Check(e)
                        | ColumnConstraintKind::OnUpdate(e)
                        | ColumnConstraintKind::Generated { expr: e, .. } => out.expr(e),
                        _ => {}
                    }
                }
            }
            Self::TableConstraint(c) => {
                if let TableConstraintKind::Check(e) = &c.kind {
                    out.expr(e);
                }
            }
            Self::AlterAction(a) => out.alter_action(a),
            Self::PartitionOption(p) => {
                out.partition_method(&p.method);
                if let Some(ref sub) = p.subpartition {
                    out.0.push(NodeRef::Subpartition(sub));
                }
                out.0.extend(p.partitions.iter().map(NodeRef::PartitionDef));
            }
            Self::Subpartition(s) => {
                out.partition_method(&s.method);
                out.0.extend(s.template.iter().map(NodeRef::PartitionDef));
            }
            Self::PartitionDef(d) => {
                match &d.values {
                    Some(
                        PartitionValues::LessThan(bounds)
                        | PartitionValues::In(bounds)
                        | PartitionValues::List(bounds),
                    ) => {
                        for b in bounds {
                            if let PartitionBound::Expr(e) = b {
                                out.expr(e);
                            }
                        }
                    }
                    None => {}
                }
                out.0.extend(d.subpartitions.iter().map(NodeRef::PartitionDef));
            }
            Self::VariableAssignment(v) => out.expr(&v.value),
        }
        out.0
    }
}

/// Accumulator used by [`NodeRef::children`].
struct Children<'a>(Vec<NodeRef<'a>>);

impl<'a> Children<'a> {
    fn expr(&mut self, e: &'a Expr) {
        self.0.push(NodeRef::Expr(e));
    }

    fn opt_expr(&mut self, e: Option<&'a Expr>) {
        if let Some(e) = e {
            self.expr(e);
        }
    }

    fn exprs(&mut self, list: &'a [Expr]) {
        self.0.extend(list.iter().map(NodeRef::Expr));
    }

    fn hints(&mut self, hints: &'a [Hint]) {
        self.0.extend(hints.iter().map(NodeRef::Hint));
    }

    fn assignments(&mut self, list: &'a [Assignment]) {
        self.0.extend(list.iter().map(NodeRef::Assignment));
    }

    fn ordering(&mut self, terms: &'a [OrderingTerm]) {
        self.0.extend(terms.iter().map(NodeRef::OrderingTerm));
    }

    fn limit(&mut self, limit: Option<&'a LimitClause>) {
        if let Some(l) = limit {
            // `LIMIT a, b` puts the offset first in the source.
            match &l.offset {
                Some(off) if off.span().start < l.limit.span().start => {
                    self.expr(off);
                    self.expr(&l.limit);
                }
                off => {
                    self.expr(&l.limit);
                    self.opt_expr(off.as_ref());
                }
            }
        }
    }

    fn returning(&mut self, r: Option<&'a ReturningClause>) {
        if let Some(r) = r {
            self.0.push(NodeRef::Returning(r));
        }
    }

    fn partition(&mut self, p: Option<&'a PartitionOption>) {
        if let Some(p) = p {
            self.0.push(NodeRef::PartitionOption(p));
        }
    }

    fn settings(&mut self, list: &'a [Setting]) {
        for s in list {
            self.expr(&s.value);
        }
    }

    fn statement(&mut self, stmt: &'a Statement) {
        match stmt {
            Statement::Select(q) => self.0.push(NodeRef::Query(q)),
            Statement::Insert(s) => {
                self.hints(&s.hints);
                match &s.source {
                    InsertSource::Values(rows) => {
                        for row in rows {
                            self.exprs(row);
                        }
                    }
                    InsertSource::Select(q) => self.0.push(NodeRef::Query(q)),
                    InsertSource::Set(list) => self.assignments(list),
                }
                self.assignments(&s.on_duplicate);
                self.returning(s.returning.as_ref());
            }
            Statement::Update(s) => {
                self.hints(&s.hints);
                self.0.extend(s.tables.iter().map(NodeRef::TableRef));
                self.assignments(&s.assignments);
                self.opt_expr(s.where_clause.as_ref());
                self.ordering(&s.order_by);
                self.limit(s.limit.as_ref());
                self.returning(s.returning.as_ref());
            }
            Statement::Delete(s) => {
                self.hints(&s.hints);
                self.0.push(NodeRef::TableRef(&s.table));
                self.opt_expr(s.where_clause.as_ref());
                self.ordering(&s.order_by);
                self.limit(s.limit.as_ref());
                self.returning(s.returning.as_ref());
            }
            Statement::Merge(s) => {
                self.hints(&s.hints);
                self.0.push(NodeRef::TableRef(&s.source));
                self.expr(&s.on);
                self.0.extend(s.clauses.iter().map(NodeRef::MergeClause));
            }
            Statement::CreateTable(s) => {
                self.0.extend(s.columns.iter().map(NodeRef::ColumnDef));
                self.0
                    .extend(s.constraints.iter().map(NodeRef::TableConstraint));
                self.partition(s.partition.as_ref());
                if let Some(ref q) = s.as_query {
                    self.0.push(NodeRef::Query(q));
                }
            }
            Statement::CreateIndex(s) => self.partition(s.partition.as_ref()),
            Statement::CreateView(s) => self.0.push(NodeRef::Query(&s.query)),
            Statement::CreateMaterializedView(s) => {
                self.partition(s.partition.as_ref());
                if let Some(RefreshSpec::Refresh {
                    start_with, next, ..
                }) = &s.refresh
                {
                    self.opt_expr(start_with.as_ref());
                    self.opt_expr(next.as_ref());
                }
                self.0.push(NodeRef::Query(&s.query));
            }
            Statement::CreateMaterializedViewLog(s) => {
                if let Some(MvLogPurge::Schedule { start_with, next }) = &s.purge {
                    self.opt_expr(start_with.as_ref());
                    self.opt_expr(next.as_ref());
                }
            }
            Statement::CreateTenant(s) => {
                self.0
                    .extend(s.variables.iter().map(NodeRef::VariableAssignment));
            }
            Statement::AlterTenant(s) => {
                if let AlterTenantAction::SetVariables(vars) = &s.action {
                    self.0.extend(vars.iter().map(NodeRef::VariableAssignment));
                }
            }
            Statement::CreateProfile(CreateProfileStatement { limits, .. })
            | Statement::AlterProfile(AlterProfileStatement { limits, .. }) => {
                for limit in limits {
                    if let ProfileLimitValue::Expr(e) = &limit.value {
                        self.expr(e);
                    }
                }
            }
            Statement::AlterTable(s) => {
                self.0.extend(s.actions.iter().map(NodeRef::AlterAction));
            }
            Statement::Set(s) => {
                if let SetKind::Variables(vars) = &s.kind {
                    self.0.extend(vars.iter().map(NodeRef::VariableAssignment));
                }
            }
            Statement::Show(s) => {
                if let Some(ShowFilter::Where(e)) = &s.filter {
                    self.expr(e);
                }
            }
            Statement::Explain(s) => self.0.push(NodeRef::Statement(&s.statement)),
            Statement::Kill(s) => self.expr(&s.id),
            Statement::Call(s) => self.exprs(&s.args),
            Statement::AlterSystem(s) => match &s.action {
                AlterSystemAction::Set(params) => {
                    for p in params {
                        self.expr(&p.setting.value);
                        self.settings(&p.targets);
                    }
                }
                AlterSystemAction::Freeze { targets, .. }
                | AlterSystemAction::FlushCache { targets, .. } => self.settings(targets),
                AlterSystemAction::KillSession { session, .. } => self.expr(session),
                AlterSystemAction::Checkpoint => {}
            },
            Statement::AlterSession(s) => self.settings(&s.settings),
            Statement::CreateDatabase(_)
            | Statement::CreateTablespace(_)
            | Statement::CreateUser(_)
            | Statement::CreateRole(_)
            | Statement::CreateSequence(_)
            | Statement::CreateSynonym(_)
            | Statement::CreateDatabaseLink(_)
            | Statement::CreateContext(_)
            | Statement::AlterTablespace(_)
            | Statement::AlterUser(_)
            | Statement::AlterSequence(_)
            | Statement::Drop(_)
            | Statement::DropPrincipal(_)
            | Statement::Truncate(_)
            | Statement::RenameTable(_)
            | Statement::Comment(_)
            | Statement::Flashback(_)
            | Statement::Purge(_)
            | Statement::Transaction(_)
            | Statement::Use(_)
            | Statement::Describe(_)
            | Statement::Grant(_)
            | Statement::Revoke(_) => {}
        }
    }

    fn query(&mut self, q: &'a SelectStatement) {
        if let Some(ref with) = q.with {
            self.0.push(NodeRef::With(with));
        }
        self.select_core(&q.body.select);
        for (_, core) in &q.body.compounds {
            self.select_core(core);
        }
        self.ordering(&q.order_by);
        self.limit(q.limit.as_ref());
        if let Some(ref fetch) = q.fetch {
            self.opt_expr(fetch.offset.as_ref());
            self.opt_expr(fetch.count.as_ref());
        }
        if let Some(ForUpdate {
            wait: Some(LockWait::Wait(e)),
            ..
        }) = &q.for_update
        {
            self.expr(e);
        }
    }

    fn select_core(&mut self, core: &'a SelectCore) {
        match core {
            SelectCore::Select(spec) => self.0.push(NodeRef::QuerySpec(spec)),
            SelectCore::Nested(q) => self.0.push(NodeRef::Query(q)),
        }
    }

    fn query_spec(&mut self, q: &'a QuerySpec) {
        self.hints(&q.hints);
        self.0.extend(q.columns.iter().map(NodeRef::SelectItem));
        self.exprs(&q.into);
        self.0.extend(q.from.iter().map(NodeRef::TableRef));
        self.opt_expr(q.where_clause.as_ref());
        if let Some(ref h) = q.hierarchical {
            self.0.push(NodeRef::Hierarchical(h));
        }
        if let Some(ref g) = q.group_by {
            self.0.push(NodeRef::GroupBy(g));
        }
        self.opt_expr(q.having.as_ref());
        self.0
            .extend(q.windows.iter().map(|w| NodeRef::WindowSpec(&w.spec)));
    }

    fn table_ref(&mut self, t: &'a TableRef) {
        match t {
            TableRef::Table { .. } => {}
            TableRef::Subquery { query, .. } => self.0.push(NodeRef::Query(query)),
            TableRef::Join {
                left,
                right,
                constraint,
                ..
            } => {
                self.0.push(NodeRef::TableRef(left));
                self.0.push(NodeRef::TableRef(right));
                if let Some(JoinConstraint::On(e)) = constraint {
                    self.expr(e);
                }
            }
            TableRef::Nested { inner, .. } => self.0.push(NodeRef::TableRef(inner)),
        }
    }

    fn window(&mut self, w: &'a WindowSpec) {
        self.exprs(&w.partition_by);
        self.ordering(&w.order_by);
        if let Some(ref frame) = w.frame {
            self.frame_bound(&frame.start);
            if let Some(ref end) = frame.end {
                self.frame_bound(end);
            }
        }
    }

    fn frame_bound(&mut self, bound: &'a FrameBound) {
        if let FrameBound::Preceding(e) | FrameBound::Following(e) = bound {
            self.expr(e);
        }
    }

    fn json_behavior(&mut self, b: Option<&'a JsonBehavior>) {
        if let Some(JsonBehavior::Default(e)) = b {
            self.expr(e);
        }
    }

    fn partition_method(&mut self, method: &'a PartitionMethod) {
        match method {
            PartitionMethod::Hash(exprs) | PartitionMethod::List { exprs, .. } => {
                self.exprs(exprs);
            }
            PartitionMethod::Range {
                exprs, interval, ..
            } => {
                self.exprs(exprs);
                self.opt_expr(interval.as_ref());
            }
            PartitionMethod::Key(_) => {}
        }
    }

    fn alter_action(&mut self, action: &'a AlterTableAction) {
        match action {
            AlterTableAction::AddColumns { columns, .. }
            | AlterTableAction::ModifyColumns { columns, .. } => {
                self.0.extend(columns.iter().map(NodeRef::ColumnDef));
            }
            AlterTableAction::AddConstraint(c) => self.0.push(NodeRef::TableConstraint(c)),
            AlterTableAction::ChangeColumn { column, .. } => {
                self.0.push(NodeRef::ColumnDef(column));
            }
            AlterTableAction::AlterColumnDefault { default, .. } => {
                self.opt_expr(default.as_ref());
            }
            AlterTableAction::AddPartitions { partitions, .. } => {
                self.0.extend(partitions.iter().map(NodeRef::PartitionDef));
            }
            AlterTableAction::Partition(p) => self.0.push(NodeRef::PartitionOption(p)),
            AlterTableAction::DropColumn { .. }
            | AlterTableAction::DropConstraint { .. }
            | AlterTableAction::DropPrimaryKey { .. }
            | AlterTableAction::DropIndex { .. }
            | AlterTableAction::RenameTable { .. }
            | AlterTableAction::RenameColumn { .. }
            | AlterTableAction::SetOptions { .. }
            | AlterTableAction::DropPartitions { .. }
            | AlterTableAction::TruncatePartitions { .. } => {}
        }
    }

    #[allow(clippy::too_many_lines)]
    fn expr_children(&mut self, e: &'a Expr) {
        match e {
            Expr::Literal(..)
            | Expr::Column(..)
            | Expr::Pseudo(..)
            | Expr::SequenceValue { .. }
            | Expr::Variable(..)
            | Expr::Placeholder(..)
            | Expr::DefaultValue(_) => {}
            Expr::Unary { expr, .. }
            | Expr::Is { expr, .. }
            | Expr::Cast { expr, .. }
            | Expr::Extract { expr, .. }
            | Expr::Collate { expr, .. } => self.expr(expr),
            Expr::Interval { value, .. } => self.expr(value),
            Expr::Binary { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            Expr::Assign { target, value, .. } => {
                self.expr(target);
                self.expr(value);
            }
            Expr::Between {
                expr, low, high, ..
            } => {
                self.expr(expr);
                self.expr(low);
                self.expr(high);
            }
            Expr::In { expr, set, .. } => {
                self.expr(expr);
                match set {
                    InSet::List(items) => self.exprs(items),
                    InSet::Subquery(q) => self.0.push(NodeRef::Query(q)),
                }
            }
            Expr::Like {
                expr,
                pattern,
                escape,
                ..
            } => {
                self.expr(expr);
                self.expr(pattern);
                if let Some(esc) = escape {
                    self.expr(esc);
                }
            }
            Expr::Quantified { left, subquery, .. } => {
                self.expr(left);
                self.0.push(NodeRef::Query(subquery));
            }
            Expr::Case {
                operand,
                whens,
                else_expr,
                ..
            } => {
                if let Some(op) = operand {
                    self.expr(op);
                }
                for (when, then) in whens {
                    self.expr(when);
                    self.expr(then);
                }
                if let Some(el) = else_expr {
                    self.expr(el);
                }
            }
            Expr::Exists { subquery, .. } | Expr::Subquery(subquery, _) => {
                self.0.push(NodeRef::Query(subquery));
            }
            Expr::Row(items, _) => self.exprs(items),
            Expr::Function(call) => {
                if let FunctionArgs::List(args) = &call.args {
                    for arg in args {
                        self.expr(&arg.value);
                    }
                }
                self.ordering(&call.order_by);
                self.ordering(&call.within_group);
                if let Some(WindowRef::Spec(spec)) = &call.over {
                    self.0.push(NodeRef::WindowSpec(spec));
                }
            }
            Expr::JsonAccess { expr, path, .. } => {
                self.expr(expr);
                self.expr(path);
            }
            Expr::Json(json) => {
                self.expr(&json.expr);
                self.expr(&json.path);
                self.json_behavior(json.on_empty.as_ref());
                self.json_behavior(json.on_error.as_ref());
            }
            Expr::JsonObject { entries, .. } => {
                for (k, v) in entries {
                    self.expr(k);
                    self.expr(v);
                }
            }
            Expr::Xml(xml) => match &**xml {
                XmlExpr::Element {
                    attributes,
                    content,
                    ..
                } => {
                    for (attr, _) in attributes {
                        self.expr(attr);
                    }
                    self.exprs(content);
                }
                XmlExpr::Agg { expr, order_by, .. } => {
                    self.expr(expr);
                    self.ordering(order_by);
                }
                XmlExpr::Parse { expr, .. } | XmlExpr::Serialize { expr, .. } => self.expr(expr),
            },
        }
    }
}

/// Visit `node` and its descendants in pre-order.
///
/// Returns [`WalkControl::Stop`] if the callback stopped the traversal,
/// otherwise [`WalkControl::Continue`].
pub fn walk<'a, F>(node: NodeRef<'a>, f: &mut F) -> WalkControl
where
    F: FnMut(NodeRef<'a>) -> WalkControl,
{
    match f(node) {
        WalkControl::Stop => return WalkControl::Stop,
        WalkControl::SkipChildren => return WalkControl::Continue,
        WalkControl::Continue => {}
    }
    for child in node.children() {
        if walk(child, f) == WalkControl::Stop {
            return WalkControl::Stop;
        }
    }
    WalkControl::Continue
}
