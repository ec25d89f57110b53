//! Enter/exit listener over [`walk`](crate::walk::walk) order.

use crate::walk::{NodeRef, WalkControl};

/// Callbacks fired around every node of a tree, in pre-order.
///
/// Both methods default to no-ops so implementors override only what they
/// need. `exit` fires after all children of the node were visited, so
/// enter/exit pairs nest exactly like the tree.
pub trait Listener<'a> {
    fn enter(&mut self, _node: NodeRef<'a>) {}

    fn exit(&mut self, _node: NodeRef<'a>) {}
}

/// Drive `listener` over `root` and all of its descendants.
pub fn walk_listener<'a, L>(root: NodeRef<'a>, listener: &mut L)
where
    L: Listener<'a> + ?Sized,
{
    listener.enter(root);
    for child in root.children() {
        walk_listener(child, listener);
    }
    listener.exit(root);
}

/// Listener built from a pair of closures.
pub struct FnListener<E, X> {
    pub on_enter: E,
    pub on_exit: X,
}

impl<'a, E, X> Listener<'a> for FnListener<E, X>
where
    E: FnMut(NodeRef<'a>),
    X: FnMut(NodeRef<'a>),
{
    fn enter(&mut self, node: NodeRef<'a>) {
        (self.on_enter)(node);
    }

    fn exit(&mut self, node: NodeRef<'a>) {
        (self.on_exit)(node);
    }
}

/// Adapt a listener to a [`walk`](crate::walk::walk) callback that only
/// fires `enter`. Useful when a consumer wants early termination.
pub fn enter_only<'a, L>(listener: &mut L) -> impl FnMut(NodeRef<'a>) -> WalkControl + '_
where
    L: Listener<'a> + ?Sized,
{
    move |node| {
        listener.enter(node);
        WalkControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{ExprKind, NodeKind};
    use crate::{BinaryOp, ColumnRef, Expr, Literal, Span};

    fn expr() -> Expr {
        // a * 2
        Expr::Binary {
            left: Box::new(Expr::Column(ColumnRef::bare("a"), Span::new(0, 1))),
            op: BinaryOp::Mul,
            right: Box::new(Expr::Literal(Literal::Integer(2), Span::new(4, 5))),
            span: Span::new(0, 5),
        }
    }

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        depth: usize,
        max_depth: usize,
    }

    impl<'a> Listener<'a> for Trace {
        fn enter(&mut self, node: NodeRef<'a>) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
            self.events.push(format!("enter {:?}", node.kind()));
        }

        fn exit(&mut self, node: NodeRef<'a>) {
            self.depth -= 1;
            self.events.push(format!("exit {:?}", node.kind()));
        }
    }

    #[test]
    fn test_enter_exit_nest() {
        let e = expr();
        let mut trace = Trace::default();
        walk_listener(NodeRef::from(&e), &mut trace);
        assert_eq!(trace.depth, 0);
        assert_eq!(trace.max_depth, 2);
        assert_eq!(
            trace.events,
            [
                "enter Expr(Binary)",
                "enter Expr(Column)",
                "exit Expr(Column)",
                "enter Expr(Literal)",
                "exit Expr(Literal)",
                "exit Expr(Binary)",
            ]
        );
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Nothing;
        impl Listener<'_> for Nothing {}
        let e = expr();
        walk_listener(NodeRef::from(&e), &mut Nothing);
    }

    #[test]
    fn test_fn_listener() {
        let e = expr();
        let mut entered = 0;
        let mut exited = Vec::new();
        let mut listener = FnListener {
            on_enter: |_: NodeRef<'_>| entered += 1,
            on_exit: |node: NodeRef<'_>| exited.push(node.kind()),
        };
        walk_listener(NodeRef::from(&e), &mut listener);
        assert_eq!(entered, 3);
        assert_eq!(exited.last(), Some(&NodeKind::Expr(ExprKind::Binary)));
    }

    #[test]
    fn test_enter_only_adapter() {
        let e = expr();
        let mut trace = Trace::default();
        e.walk(&mut enter_only(&mut trace));
        assert_eq!(trace.events.len(), 3);
    }
}
