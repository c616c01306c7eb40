//! The expression handle.
//!
//! An `Expression` exclusively owns one node. Consuming it (moving it into
//! a parent node's argument list, or `release`-ing the finished tree)
//! happens at most once; Rust's move semantics enforce that statically.
//! A default-constructed handle owns nothing and represents an omitted
//! clause, such as a `for` loop's missing condition.

use lume_ir::{Expr, ExprKind, Type, Var};

/// Exclusive owner of one expression node.
#[derive(Debug, Default)]
pub struct Expression {
    node: Option<Box<Expr>>,
}

impl Expression {
    /// The empty handle, representing an omitted clause.
    pub fn empty() -> Self {
        Expression { node: None }
    }

    pub(crate) fn from_node(node: Expr) -> Self {
        Expression {
            node: Some(Box::new(node)),
        }
    }

    pub(crate) fn poison() -> Self {
        Expression::from_node(Expr::poison())
    }

    /// Check if this handle owns no node.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Check if this handle owns a poison node.
    pub fn is_poison(&self) -> bool {
        self.node.as_ref().is_some_and(|node| node.is_poison())
    }

    /// The owned node's type; `None` for the empty handle.
    pub fn ty(&self) -> Option<Type> {
        self.node.as_ref().map(|node| node.ty())
    }

    /// The owned node's canonical textual rendering; empty for the empty
    /// handle.
    pub fn description(&self) -> String {
        self.node
            .as_ref()
            .map(|node| node.description())
            .unwrap_or_default()
    }

    /// Transfer ownership of the finished tree to the caller (typically
    /// the downstream code generator).
    ///
    /// Releasing an empty handle is a programming error, caught by a debug
    /// assertion; release builds yield a poison node.
    pub fn release(self) -> Box<Expr> {
        self.take_or_poison("release")
    }

    pub(crate) fn into_node(self) -> Option<Box<Expr>> {
        self.node
    }

    /// Take the owned node, substituting poison (with a debug assertion)
    /// if the handle is empty.
    pub(crate) fn take_or_poison(self, context: &str) -> Box<Expr> {
        match self.node {
            Some(node) => node,
            None => {
                debug_assert!(false, "{context} applied to an empty expression handle");
                Box::new(Expr::poison())
            }
        }
    }
}

/// Conversion into an expression operand.
///
/// Implemented for already-built expressions, variables, and the bare
/// literal types. Bare numeric and boolean literals convert to
/// *unresolved* literals that adopt a concrete type when combined with a
/// typed operand or an explicit-width constructor.
pub trait IntoExpr {
    fn into_expr(self) -> Expression;
}

impl IntoExpr for Expression {
    fn into_expr(self) -> Expression {
        self
    }
}

impl IntoExpr for &Var {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::new(ExprKind::VarRef(self.clone())))
    }
}

impl IntoExpr for Var {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::new(ExprKind::VarRef(self)))
    }
}

impl IntoExpr for i32 {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::int_literal(i64::from(self)))
    }
}

impl IntoExpr for i64 {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::int_literal(self))
    }
}

impl IntoExpr for f32 {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::float_literal(self))
    }
}

impl IntoExpr for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::float_literal(self as f32))
    }
}

impl IntoExpr for bool {
    fn into_expr(self) -> Expression {
        Expression::from_node(Expr::bool_literal(self))
    }
}

impl From<&Var> for Expression {
    fn from(var: &Var) -> Self {
        var.into_expr()
    }
}
