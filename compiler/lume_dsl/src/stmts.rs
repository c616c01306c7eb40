//! Statement construction operations.

use lume_ir::{Expr, Stmt, StmtKind, Type, Var};

use crate::error::{report_error, TypeError};
use crate::session::{self, Session};
use crate::{Expression, IntoExpr, Statement};

/// A braced block of statements, in order.
///
/// Anything convertible to a statement is accepted, so expression results
/// can be listed directly. Empty handles contribute nothing.
pub fn block<I>(stmts: I) -> Statement
where
    I: IntoIterator,
    I::Item: Into<Statement>,
{
    session::debug_assert_active();
    let children: Vec<Stmt> = stmts
        .into_iter()
        .map(Into::into)
        .filter_map(Statement::into_node)
        .map(|node| *node)
        .collect();
    Statement::from_node(Stmt::new(StmtKind::Block(children)))
}

/// Declare a variable without an initializer.
pub fn declare(var: &Var) -> Statement {
    declare_impl(var, None)
}

/// Declare a variable with an initializer.
///
/// The initializer's *resolved* type must equal the declared type exactly;
/// unlike binary operands, a bare literal is not promoted here and keeps
/// its provisional default (so bare `1` cannot initialize a `half4`).
pub fn declare_init(var: &Var, init: impl IntoExpr) -> Statement {
    declare_impl(var, Some(init.into_expr()))
}

fn declare_impl(var: &Var, init: Option<Expression>) -> Statement {
    session::debug_assert_active();
    let declared_twice = !var.mark_declared(Session::emitted_name(var.base_name()));
    debug_assert!(
        !declared_twice,
        "variable '{}' is declared twice",
        var.base_name()
    );

    let init = match init {
        None => None,
        Some(expr) => {
            let node = expr.take_or_poison("declaration initializer");
            if node.is_poison() {
                return Statement::poison();
            }
            if node.ty() != var.ty() {
                report_error(&TypeError::ExpectedType {
                    expected: var.ty(),
                    found: node.ty(),
                });
                return Statement::poison();
            }
            Some(*node)
        }
    };

    Statement::from_node(Stmt::new(StmtKind::Declare {
        var: var.clone(),
        init,
    }))
}

/// `if (cond) then_stmt`.
pub fn if_then(cond: impl IntoExpr, then_stmt: impl Into<Statement>) -> Statement {
    if_impl(cond.into_expr(), then_stmt.into(), None)
}

/// `if (cond) then_stmt else else_stmt`.
pub fn if_then_else(
    cond: impl IntoExpr,
    then_stmt: impl Into<Statement>,
    else_stmt: impl Into<Statement>,
) -> Statement {
    if_impl(cond.into_expr(), then_stmt.into(), Some(else_stmt.into()))
}

fn if_impl(cond: Expression, then_stmt: Statement, else_stmt: Option<Statement>) -> Statement {
    session::debug_assert_active();
    let Some(cond) = check_condition(cond, "if condition") else {
        return Statement::poison();
    };
    Statement::from_node(Stmt::new(StmtKind::If {
        cond: *cond,
        then_stmt: then_stmt.take_or_nop(),
        else_stmt: else_stmt.map(Statement::take_or_nop),
    }))
}

/// `for (init; cond; next) body`.
///
/// Any of init/cond/next may be the empty handle for an omitted clause; a
/// present condition must be boolean.
pub fn for_loop(
    init: impl Into<Statement>,
    cond: Expression,
    next: Expression,
    body: impl Into<Statement>,
) -> Statement {
    session::debug_assert_active();
    let cond = if cond.is_empty() {
        None
    } else {
        match check_condition(cond, "for condition") {
            Some(cond) => Some(*cond),
            None => return Statement::poison(),
        }
    };
    let next = next.into_node().map(|node| *node);
    let init: Statement = init.into();
    let body: Statement = body.into();
    Statement::from_node(Stmt::new(StmtKind::For {
        init: init.take_or_nop(),
        cond,
        next,
        body: body.take_or_nop(),
    }))
}

/// `while (cond) body` - sugar that builds the desugared
/// `for (; cond;) body` directly; there is no distinct while node.
pub fn while_loop(cond: impl IntoExpr, body: impl Into<Statement>) -> Statement {
    for_loop(
        Statement::empty(),
        cond.into_expr(),
        Expression::empty(),
        body,
    )
}

/// `do body while (cond);`.
pub fn do_while(body: impl Into<Statement>, cond: impl IntoExpr) -> Statement {
    session::debug_assert_active();
    let Some(cond) = check_condition(cond.into_expr(), "do-while condition") else {
        return Statement::poison();
    };
    let body: Statement = body.into();
    Statement::from_node(Stmt::new(StmtKind::Do {
        body: body.take_or_nop(),
        cond: *cond,
    }))
}

/// Check a condition expression: it must resolve to `bool`.
///
/// Poison conditions poison the statement silently. Returns `None` after
/// reporting (or swallowing) the failure.
fn check_condition(cond: Expression, context: &str) -> Option<Box<Expr>> {
    let node = cond.take_or_poison(context);
    if node.is_poison() {
        return None;
    }
    if node.ty() != Type::BOOL {
        report_error(&TypeError::ExpectedType {
            expected: Type::BOOL,
            found: node.ty(),
        });
        return None;
    }
    Some(node)
}
