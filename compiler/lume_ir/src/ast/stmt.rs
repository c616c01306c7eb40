//! Statement nodes.

use std::fmt;

use super::expr::Expr;
use crate::Var;

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
}

/// Statement variants.
#[derive(Clone, PartialEq)]
pub enum StmtKind {
    /// Braced sequence of statements.
    Block(Vec<Stmt>),

    /// Variable declaration, with or without an initializer.
    Declare { var: Var, init: Option<Expr> },

    /// Conditional with an optional else branch.
    If {
        cond: Expr,
        then_stmt: Box<Stmt>,
        else_stmt: Option<Box<Stmt>>,
    },

    /// C-style loop. The init slot always holds a statement (`Nop` when the
    /// clause was omitted); omitted condition and increment are `None`.
    For {
        init: Box<Stmt>,
        cond: Option<Expr>,
        next: Option<Expr>,
        body: Box<Stmt>,
    },

    /// Do-while loop.
    Do { body: Box<Stmt>, cond: Expr },

    /// Expression used as a statement.
    Expr(Expr),

    /// The empty statement, `;`.
    Nop,

    /// Placeholder substituted after a detected error.
    Poison,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt { kind }
    }

    pub fn nop() -> Self {
        Stmt::new(StmtKind::Nop)
    }

    pub fn poison() -> Self {
        Stmt::new(StmtKind::Poison)
    }

    pub fn is_poison(&self) -> bool {
        matches!(self.kind, StmtKind::Poison)
    }

    /// Canonical textual rendering. Every statement description ends in a
    /// terminator (`;` or `}`).
    pub fn description(&self) -> String {
        match &self.kind {
            StmtKind::Block(stmts) => {
                if stmts.is_empty() {
                    "{ }".to_string()
                } else {
                    let children: Vec<String> =
                        stmts.iter().map(|s| terminated(s.description())).collect();
                    format!("{{ {} }}", children.join(" "))
                }
            }
            StmtKind::Declare { var, init } => match init {
                Some(init) => format!("{} {} = {};", var.ty(), var.name(), init.description()),
                None => format!("{} {};", var.ty(), var.name()),
            },
            StmtKind::If {
                cond,
                then_stmt,
                else_stmt,
            } => {
                let mut text = format!(
                    "if ({}) {}",
                    cond.description(),
                    terminated(then_stmt.description())
                );
                if let Some(else_stmt) = else_stmt {
                    text.push_str(" else ");
                    text.push_str(&terminated(else_stmt.description()));
                }
                text
            }
            StmtKind::For {
                init,
                cond,
                next,
                body,
            } => format!(
                "for ({} {}; {}) {}",
                terminated(init.description()),
                cond.as_ref().map(Expr::description).unwrap_or_default(),
                next.as_ref().map(Expr::description).unwrap_or_default(),
                terminated(body.description())
            ),
            StmtKind::Do { body, cond } => format!(
                "do {} while ({});",
                terminated(body.description()),
                cond.description()
            ),
            StmtKind::Expr(expr) => format!("{};", expr.description()),
            StmtKind::Nop => ";".to_string(),
            StmtKind::Poison => "<poison>;".to_string(),
        }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Append a terminator unless the text already ends in one.
fn terminated(text: String) -> String {
    if text.ends_with(';') || text.ends_with('}') {
        text
    } else {
        let mut text = text;
        text.push(';');
        text
    }
}
