//! Named construction operations for operators.
//!
//! These are the core of the builder: each operation fully type-checks its
//! operands, resolves unresolved literals against the other operand, folds
//! boolean constants for the logical connectives, and on failure reports
//! one diagnostic and yields a poison node instead of failing the call.
//!
//! The `std::ops` overloads in [`crate::sugar`] are sugar over these.

use lume_ir::{BinaryOp, Expr, ExprKind, Fixity, Type, UnaryOp};

use crate::error::{report_error, TypeError};
use crate::session;
use crate::{Expression, IntoExpr};

/// Build a binary expression, covering assignment and compound-assignment
/// forms.
///
/// Checks run in a fixed order: poison short-circuit, literal resolution,
/// category/type compatibility, then (for assignment forms) lvalue-ness —
/// so a type mismatch always wins over a non-assignable target. `&&` and
/// `||` additionally fold literal boolean operands.
pub fn binary(op: BinaryOp, lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expression {
    session::debug_assert_active();
    let mut lhs = lhs.into_expr().take_or_poison("binary operator");
    let mut rhs = rhs.into_expr().take_or_poison("binary operator");

    // One detected error never cascades into a second.
    if lhs.is_poison() || rhs.is_poison() {
        return Expression::poison();
    }

    resolve_pair(&mut lhs, &mut rhs);
    let (left, right) = (lhs.ty(), rhs.ty());

    let compatible = match op {
        // Sequencing has no type restriction at all.
        BinaryOp::Comma => true,
        _ => left == right && op.operand_category().permits(left.base()),
    };
    if !compatible {
        report_error(&TypeError::BinaryTypeMismatch { op, left, right });
        return Expression::poison();
    }

    if op.is_assignment() && !lhs.is_assignable() {
        report_error(&TypeError::NotAssignable);
        return Expression::poison();
    }

    let (lhs, rhs) = match fold_logical(op, lhs, rhs) {
        Ok(folded) => return Expression::from_node(*folded),
        Err(operands) => operands,
    };

    let ty = if op.yields_bool() {
        Type::BOOL
    } else if matches!(op, BinaryOp::Comma) {
        right
    } else {
        // Arithmetic/bitwise results and assignments take the (equal)
        // operand type; assignment forms specifically the target's.
        left
    };
    Expression::from_node(Expr::new(ExprKind::Binary {
        op,
        lhs,
        rhs,
        ty,
    }))
}

/// Boolean-algebra simplification for `&&`/`||`, applied eagerly at each
/// combination step. Returns the folded node, or hands the operands back
/// when neither is a literal. Both operands are already known boolean.
fn fold_logical(
    op: BinaryOp,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
) -> Result<Box<Expr>, (Box<Expr>, Box<Expr>)> {
    let resolved_bool = |value| {
        Box::new(Expr::new(ExprKind::BoolLiteral {
            value,
            ty: Some(Type::BOOL),
        }))
    };
    match (op, lhs.as_bool_literal(), rhs.as_bool_literal()) {
        (BinaryOp::And, Some(true), _) => Ok(rhs),
        (BinaryOp::And, _, Some(true)) => Ok(lhs),
        (BinaryOp::And, Some(false), _) | (BinaryOp::And, _, Some(false)) => {
            Ok(resolved_bool(false))
        }
        (BinaryOp::Or, Some(false), _) => Ok(rhs),
        (BinaryOp::Or, _, Some(false)) => Ok(lhs),
        (BinaryOp::Or, Some(true), _) | (BinaryOp::Or, _, Some(true)) => Ok(resolved_bool(true)),
        _ => Err((lhs, rhs)),
    }
}

/// Resolve an unresolved literal operand against the other operand's
/// scalar base kind. Two unresolved literals keep their provisional
/// defaults; an uncoercible literal is left as-is so the compatibility
/// check reports its provisional type.
fn resolve_pair(lhs: &mut Expr, rhs: &mut Expr) {
    if lhs.is_unresolved_literal() && !rhs.is_unresolved_literal() {
        let _ = lhs.resolve_literal(rhs.ty().base());
    } else if rhs.is_unresolved_literal() && !lhs.is_unresolved_literal() {
        let _ = rhs.resolve_literal(lhs.ty().base());
    }
}

/// Build a unary expression.
///
/// `!` requires scalar `bool`; `~` an integer base; `-` a numeric base;
/// `++`/`--` a numeric base *and* an assignable operand, with the type
/// checked first exactly as compound assignment orders its checks.
pub fn unary(op: UnaryOp, fix: Fixity, operand: impl IntoExpr) -> Expression {
    session::debug_assert_active();
    let operand = operand.into_expr().take_or_poison("unary operator");
    if operand.is_poison() {
        return Expression::poison();
    }

    let ty = operand.ty();
    let compatible = match op {
        UnaryOp::Not => ty == Type::BOOL,
        UnaryOp::BitNot => ty.is_integer(),
        UnaryOp::Neg | UnaryOp::Inc | UnaryOp::Dec => ty.is_numeric(),
    };
    if !compatible {
        report_error(&TypeError::UnaryTypeMismatch { op, operand: ty });
        return Expression::poison();
    }

    if op.is_mutating() && !operand.is_assignable() {
        report_error(&TypeError::NotAssignable);
        return Expression::poison();
    }

    Expression::from_node(Expr::new(ExprKind::Unary { op, fix, operand }))
}

/// Build a ternary conditional.
///
/// The condition must resolve to `bool`; the branches resolve against each
/// other and must end up with the identical type — there is no implicit
/// widening between dissimilar shapes.
pub fn ternary(cond: impl IntoExpr, if_true: impl IntoExpr, if_false: impl IntoExpr) -> Expression {
    session::debug_assert_active();
    let cond = cond.into_expr().take_or_poison("ternary condition");
    let mut if_true = if_true.into_expr().take_or_poison("ternary branch");
    let mut if_false = if_false.into_expr().take_or_poison("ternary branch");
    if cond.is_poison() || if_true.is_poison() || if_false.is_poison() {
        return Expression::poison();
    }

    if cond.ty() != Type::BOOL {
        report_error(&TypeError::ExpectedType {
            expected: Type::BOOL,
            found: cond.ty(),
        });
        return Expression::poison();
    }

    resolve_pair(&mut if_true, &mut if_false);
    if if_true.ty() != if_false.ty() {
        report_error(&TypeError::TernaryMismatch {
            left: if_true.ty(),
            right: if_false.ty(),
        });
        return Expression::poison();
    }

    Expression::from_node(Expr::new(ExprKind::Ternary {
        cond,
        if_true,
        if_false,
    }))
}

macro_rules! binary_fns {
    ($($(#[$doc:meta])* $name:ident => $op:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expression {
                binary(BinaryOp::$op, lhs, rhs)
            }
        )*
    };
}

binary_fns! {
    /// `lhs + rhs`.
    add => Add,
    /// `lhs - rhs`.
    sub => Sub,
    /// `lhs * rhs`.
    mul => Mul,
    /// `lhs / rhs`.
    div => Div,
    /// `lhs % rhs`.
    rem => Mod,
    /// `lhs << rhs`.
    shl => Shl,
    /// `lhs >> rhs`.
    shr => Shr,
    /// `lhs & rhs`.
    bit_and => BitAnd,
    /// `lhs | rhs`.
    bit_or => BitOr,
    /// `lhs ^ rhs`.
    bit_xor => BitXor,
    /// `lhs == rhs`.
    eq => Eq,
    /// `lhs != rhs`.
    ne => NotEq,
    /// `lhs < rhs`.
    lt => Lt,
    /// `lhs <= rhs`.
    le => LtEq,
    /// `lhs > rhs`.
    gt => Gt,
    /// `lhs >= rhs`.
    ge => GtEq,
    /// `lhs && rhs`, with literal boolean operands folded away.
    logical_and => And,
    /// `lhs || rhs`, with literal boolean operands folded away.
    logical_or => Or,
    /// `lhs , rhs`: evaluate left then right, take the right's type.
    comma => Comma,
    /// `lhs = rhs`.
    assign => Assign,
    /// `lhs += rhs`.
    add_assign => AddAssign,
    /// `lhs -= rhs`.
    sub_assign => SubAssign,
    /// `lhs *= rhs`.
    mul_assign => MulAssign,
    /// `lhs /= rhs`.
    div_assign => DivAssign,
    /// `lhs %= rhs`.
    rem_assign => ModAssign,
    /// `lhs <<= rhs`.
    shl_assign => ShlAssign,
    /// `lhs >>= rhs`.
    shr_assign => ShrAssign,
    /// `lhs &= rhs`.
    bit_and_assign => BitAndAssign,
    /// `lhs |= rhs`.
    bit_or_assign => BitOrAssign,
    /// `lhs ^= rhs`.
    bit_xor_assign => BitXorAssign,
}

/// Logical not, `!operand`.
pub fn logical_not(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Not, Fixity::Prefix, operand)
}

/// Bitwise not, `~operand`.
pub fn bit_not(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::BitNot, Fixity::Prefix, operand)
}

/// Arithmetic negation, `-operand`.
pub fn neg(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Neg, Fixity::Prefix, operand)
}

/// Prefix increment, `++operand`.
pub fn pre_increment(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Inc, Fixity::Prefix, operand)
}

/// Postfix increment, `operand++`.
pub fn post_increment(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Inc, Fixity::Postfix, operand)
}

/// Prefix decrement, `--operand`.
pub fn pre_decrement(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Dec, Fixity::Prefix, operand)
}

/// Postfix decrement, `operand--`.
pub fn post_decrement(operand: impl IntoExpr) -> Expression {
    unary(UnaryOp::Dec, Fixity::Postfix, operand)
}
