//! Expression nodes.
//!
//! Expressions form owned trees: children are boxed and have exactly one
//! owner. A node is immutable once built, except that the type checker may
//! resolve an unresolved literal in place before it is combined into a
//! parent node.

use std::fmt;

use super::operators::{BinaryOp, Fixity, UnaryOp};
use crate::{ScalarKind, Type, Var};

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
}

/// Expression variants.
#[derive(Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal. `ty: None` means unresolved: it behaves as `int`
    /// until combined with a typed operand or an explicit-width constructor.
    IntLiteral { value: i64, ty: Option<Type> },

    /// Floating-point literal. Unresolved behaves as `float`.
    FloatLiteral { value: f32, ty: Option<Type> },

    /// Boolean literal. Unresolved behaves as `bool`.
    BoolLiteral { value: bool, ty: Option<Type> },

    /// Variable reference.
    VarRef(Var),

    /// Binary operation, including assignment and compound-assignment
    /// forms. `ty` is the result type fixed at construction.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        ty: Type,
    },

    /// Unary prefix or postfix operation.
    Unary {
        op: UnaryOp,
        fix: Fixity,
        operand: Box<Expr>,
    },

    /// Ternary conditional.
    Ternary {
        cond: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },

    /// Vector-construction call. Arguments are kept in the order given and
    /// are never flattened; a splat keeps its single argument.
    Construct { ty: Type, args: Vec<Expr> },

    /// Placeholder substituted after a detected error. Answers every query
    /// with safe defaults and never triggers further diagnostics.
    Poison,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }

    /// Unresolved integer literal.
    pub fn int_literal(value: i64) -> Self {
        Expr::new(ExprKind::IntLiteral { value, ty: None })
    }

    /// Unresolved floating-point literal.
    pub fn float_literal(value: f32) -> Self {
        Expr::new(ExprKind::FloatLiteral { value, ty: None })
    }

    /// Unresolved boolean literal.
    pub fn bool_literal(value: bool) -> Self {
        Expr::new(ExprKind::BoolLiteral { value, ty: None })
    }

    pub fn poison() -> Self {
        Expr::new(ExprKind::Poison)
    }

    pub fn is_poison(&self) -> bool {
        matches!(self.kind, ExprKind::Poison)
    }

    /// Check if this is a literal that has not yet been resolved to a
    /// concrete type.
    pub fn is_unresolved_literal(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::IntLiteral { ty: None, .. }
                | ExprKind::FloatLiteral { ty: None, .. }
                | ExprKind::BoolLiteral { ty: None, .. }
        )
    }

    /// The boolean value of a boolean literal, resolved or not.
    pub fn as_bool_literal(&self) -> Option<bool> {
        match self.kind {
            ExprKind::BoolLiteral { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The type of this expression.
    ///
    /// Unresolved literals report their provisional default (`int` for
    /// integers, `float` for floats, `bool` for booleans). Poison reports
    /// `bool`, a safe default that keeps downstream checks quiet.
    pub fn ty(&self) -> Type {
        match &self.kind {
            ExprKind::IntLiteral { ty, .. } => ty.unwrap_or(Type::INT),
            ExprKind::FloatLiteral { ty, .. } => ty.unwrap_or(Type::FLOAT),
            ExprKind::BoolLiteral { ty, .. } => ty.unwrap_or(Type::BOOL),
            ExprKind::VarRef(var) => var.ty(),
            ExprKind::Binary { ty, .. } | ExprKind::Construct { ty, .. } => *ty,
            ExprKind::Unary { op, operand, .. } => match op {
                UnaryOp::Not => Type::BOOL,
                _ => operand.ty(),
            },
            ExprKind::Ternary { if_true, .. } => if_true.ty(),
            ExprKind::Poison => Type::BOOL,
        }
    }

    /// Resolve an unresolved literal to the given scalar base kind.
    ///
    /// Integer literals resolve to any numeric kind (converting the value
    /// to floating point where needed); float literals resolve to the
    /// floating-point kinds; boolean literals resolve only to `bool`.
    /// Returns `false` when the literal cannot adopt the kind, or when the
    /// expression is not an unresolved literal; the node is unchanged in
    /// that case.
    pub fn resolve_literal(&mut self, kind: ScalarKind) -> bool {
        if !self.is_unresolved_literal() {
            return false;
        }
        let resolved = Some(Type::Scalar(kind));
        #[allow(clippy::cast_precision_loss)]
        let new_kind = match (&self.kind, kind) {
            (&ExprKind::IntLiteral { value, .. }, ScalarKind::Int | ScalarKind::Short) => {
                ExprKind::IntLiteral {
                    value,
                    ty: resolved,
                }
            }
            (&ExprKind::IntLiteral { value, .. }, ScalarKind::Float | ScalarKind::Half) => {
                ExprKind::FloatLiteral {
                    value: value as f32,
                    ty: resolved,
                }
            }
            (&ExprKind::FloatLiteral { value, .. }, ScalarKind::Float | ScalarKind::Half) => {
                ExprKind::FloatLiteral {
                    value,
                    ty: resolved,
                }
            }
            (&ExprKind::BoolLiteral { value, .. }, ScalarKind::Bool) => ExprKind::BoolLiteral {
                value,
                ty: resolved,
            },
            _ => return false,
        };
        self.kind = new_kind;
        true
    }

    /// Check if this expression denotes a mutable storage location,
    /// eligible as an assignment or increment/decrement target.
    ///
    /// Variable references are assignable; so is an assignment whose own
    /// target is, and a comma whose right operand is. Poison counts as
    /// assignable so that one detected error never cascades into a second.
    pub fn is_assignable(&self) -> bool {
        match &self.kind {
            ExprKind::VarRef(_) | ExprKind::Poison => true,
            ExprKind::Binary { op, lhs, rhs, .. } => {
                if op.is_assignment() {
                    lhs.is_assignable()
                } else {
                    matches!(op, BinaryOp::Comma) && rhs.is_assignable()
                }
            }
            _ => false,
        }
    }

    /// Canonical textual rendering.
    ///
    /// Binary, assignment, and comma expressions are always fully
    /// parenthesized; unary operators attach directly with no space;
    /// construction calls preserve argument nesting.
    pub fn description(&self) -> String {
        match &self.kind {
            ExprKind::IntLiteral { value, .. } => value.to_string(),
            ExprKind::FloatLiteral { value, .. } => format_float(*value),
            ExprKind::BoolLiteral { value, .. } => value.to_string(),
            ExprKind::VarRef(var) => var.name().to_string(),
            ExprKind::Binary { op, lhs, rhs, .. } => format!(
                "({} {} {})",
                lhs.description(),
                op.as_symbol(),
                rhs.description()
            ),
            ExprKind::Unary { op, fix, operand } => match fix {
                Fixity::Prefix => format!("{}{}", op.as_symbol(), operand.description()),
                Fixity::Postfix => format!("{}{}", operand.description(), op.as_symbol()),
            },
            ExprKind::Ternary {
                cond,
                if_true,
                if_false,
            } => format!(
                "({} ? {} : {})",
                cond.description(),
                if_true.description(),
                if_false.description()
            ),
            ExprKind::Construct { ty, args } => {
                let args: Vec<String> = args.iter().map(Expr::description).collect();
                format!("{}({})", ty, args.join(", "))
            }
            ExprKind::Poison => "<poison>".to_string(),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.description(), self.ty())
    }
}

/// Format a float the way the language prints it: the shortest form that
/// re-parses to the same `f32`, always carrying a decimal point or an
/// exponent (`1` prints `1.0`, very large magnitudes print like
/// `3.4028235e38`).
pub(super) fn format_float(value: f32) -> String {
    let mut text = format!("{value:?}");
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}
