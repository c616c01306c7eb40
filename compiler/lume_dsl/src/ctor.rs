//! Literal and vector-construction expressions.
//!
//! The explicit-width scalar constructors (`float`, `half`, `int`, `short`,
//! `boolean`) resolve a literal immediately. The vector constructors accept
//! a single value (a splat) or a tuple of 2-4 values summing to the
//! vector's arity; bare literals coerce to the vector's base kind as they
//! are placed.

use smallvec::SmallVec;

use lume_ir::{Expr, ExprKind, ScalarKind, Type};

use crate::error::{report_error, TypeError};
use crate::session;
use crate::{Expression, IntoExpr};

/// A `float` literal of the exact given value.
///
/// An infinite or NaN value is reported through the sink, but the literal
/// is still produced so the surrounding call chain does not fail.
pub fn float(value: f32) -> Expression {
    float_scalar(ScalarKind::Float, value)
}

/// A `half` literal.
///
/// Carries the full `f32` value; narrowing to storage precision is the
/// downstream code generator's concern. Infinite/NaN values are reported
/// the same way as for [`float`].
pub fn half(value: f32) -> Expression {
    float_scalar(ScalarKind::Half, value)
}

fn float_scalar(kind: ScalarKind, value: f32) -> Expression {
    session::debug_assert_active();
    if value.is_infinite() {
        report_error(&TypeError::InfiniteValue);
    } else if value.is_nan() {
        report_error(&TypeError::NanValue);
    }
    Expression::from_node(Expr::new(ExprKind::FloatLiteral {
        value,
        ty: Some(Type::Scalar(kind)),
    }))
}

/// An `int` literal.
pub fn int(value: i32) -> Expression {
    session::debug_assert_active();
    Expression::from_node(Expr::new(ExprKind::IntLiteral {
        value: i64::from(value),
        ty: Some(Type::INT),
    }))
}

/// A `short` literal.
pub fn short(value: i16) -> Expression {
    session::debug_assert_active();
    Expression::from_node(Expr::new(ExprKind::IntLiteral {
        value: i64::from(value),
        ty: Some(Type::SHORT),
    }))
}

/// A `bool` literal.
pub fn boolean(value: bool) -> Expression {
    session::debug_assert_active();
    Expression::from_node(Expr::new(ExprKind::BoolLiteral {
        value,
        ty: Some(Type::BOOL),
    }))
}

/// Argument pack for a vector constructor: a single value or a tuple of
/// 2-4 values, each convertible to an expression.
pub trait ConstructorArgs {
    fn into_args(self) -> SmallVec<[Expression; 4]>;
}

impl<T: IntoExpr> ConstructorArgs for T {
    fn into_args(self) -> SmallVec<[Expression; 4]> {
        let mut args = SmallVec::new();
        args.push(self.into_expr());
        args
    }
}

macro_rules! impl_constructor_args {
    ($(($($name:ident : $param:ident),+)),* $(,)?) => {
        $(
            impl<$($param: IntoExpr),+> ConstructorArgs for ($($param,)+) {
                fn into_args(self) -> SmallVec<[Expression; 4]> {
                    let ($($name,)+) = self;
                    let mut args = SmallVec::new();
                    $(args.push($name.into_expr());)+
                    args
                }
            }
        )*
    };
}

impl_constructor_args! {
    (a: A, b: B),
    (a: A, b: B, c: C),
    (a: A, b: B, c: C, d: D),
}

/// Build a vector-construction expression for `ty`.
///
/// Acceptance, checked in order: a single scalar argument splats to any
/// arity; otherwise the argument component counts must sum to the arity
/// exactly. Bare literals coerce to the base kind before placement; a
/// resolved argument of a foreign base kind is a type error.
fn construct(ty: Type, args: impl ConstructorArgs) -> Expression {
    session::debug_assert_active();
    let base = ty.base();
    let mut nodes: SmallVec<[Expr; 4]> = SmallVec::new();
    for arg in args.into_args() {
        let node = arg.take_or_poison("constructor argument");
        if node.is_poison() {
            return Expression::poison();
        }
        nodes.push(*node);
    }

    for node in &mut nodes {
        let placed = if node.is_unresolved_literal() {
            node.resolve_literal(base)
        } else {
            node.ty().base() == base
        };
        if !placed {
            report_error(&TypeError::ExpectedType {
                expected: Type::Scalar(base),
                found: node.ty(),
            });
            return Expression::poison();
        }
    }

    let splat = nodes.len() == 1 && nodes[0].ty().is_scalar();
    if !splat {
        let found: usize = nodes.iter().map(|node| node.ty().components()).sum();
        if found != ty.components() {
            report_error(&TypeError::ConstructorArity {
                ty,
                expected: ty.components(),
                found,
            });
            return Expression::poison();
        }
    }

    Expression::from_node(Expr::new(ExprKind::Construct {
        ty,
        args: nodes.into_vec(),
    }))
}

macro_rules! vector_ctors {
    ($($(#[$doc:meta])* $name:ident => $ty:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(args: impl ConstructorArgs) -> Expression {
                construct(Type::$ty, args)
            }
        )*
    };
}

vector_ctors! {
    /// `float2(...)`.
    float2 => FLOAT2,
    /// `float3(...)`.
    float3 => FLOAT3,
    /// `float4(...)`.
    float4 => FLOAT4,
    /// `half2(...)`.
    half2 => HALF2,
    /// `half3(...)`.
    half3 => HALF3,
    /// `half4(...)`.
    half4 => HALF4,
    /// `int2(...)`.
    int2 => INT2,
    /// `int3(...)`.
    int3 => INT3,
    /// `int4(...)`.
    int4 => INT4,
    /// `short2(...)`.
    short2 => SHORT2,
    /// `short3(...)`.
    short3 => SHORT3,
    /// `short4(...)`.
    short4 => SHORT4,
    /// `bool2(...)`.
    bool2 => BOOL2,
    /// `bool3(...)`.
    bool3 => BOOL3,
    /// `bool4(...)`.
    bool4 => BOOL4,
}
