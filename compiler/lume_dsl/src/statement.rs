//! The statement handle.

use lume_ir::{Stmt, StmtKind};

use crate::Expression;

/// Exclusive owner of one statement node.
///
/// Like [`Expression`], a default-constructed handle owns nothing and
/// stands for an omitted clause (e.g. a `for` loop's missing init).
#[derive(Debug, Default)]
pub struct Statement {
    node: Option<Box<Stmt>>,
}

impl Statement {
    /// The empty handle, representing an omitted clause.
    pub fn empty() -> Self {
        Statement { node: None }
    }

    pub(crate) fn from_node(node: Stmt) -> Self {
        Statement {
            node: Some(Box::new(node)),
        }
    }

    pub(crate) fn poison() -> Self {
        Statement::from_node(Stmt::poison())
    }

    /// Check if this handle owns no node.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Check if this handle owns a poison node.
    pub fn is_poison(&self) -> bool {
        self.node.as_ref().is_some_and(|node| node.is_poison())
    }

    /// The owned node's canonical textual rendering; empty for the empty
    /// handle.
    pub fn description(&self) -> String {
        self.node
            .as_ref()
            .map(|node| node.description())
            .unwrap_or_default()
    }

    /// Transfer ownership of the finished tree to the caller.
    ///
    /// Releasing an empty handle is a programming error, caught by a debug
    /// assertion; release builds yield a poison node.
    pub fn release(self) -> Box<Stmt> {
        match self.node {
            Some(node) => node,
            None => {
                debug_assert!(false, "release applied to an empty statement handle");
                Box::new(Stmt::poison())
            }
        }
    }

    /// Take the owned node, substituting `Nop` if the handle is empty.
    /// Used where an omitted clause is legal (loop slots, block children).
    pub(crate) fn take_or_nop(self) -> Box<Stmt> {
        self.node.unwrap_or_else(|| Box::new(Stmt::nop()))
    }

    pub(crate) fn into_node(self) -> Option<Box<Stmt>> {
        self.node
    }
}

impl From<Expression> for Statement {
    /// An expression used where a statement is expected. A poison
    /// expression becomes a poison statement without re-reporting; an
    /// empty handle stays empty.
    fn from(expr: Expression) -> Self {
        match expr.into_node() {
            None => Statement::empty(),
            Some(node) if node.is_poison() => Statement::poison(),
            Some(node) => Statement::from_node(Stmt::new(StmtKind::Expr(*node))),
        }
    }
}
