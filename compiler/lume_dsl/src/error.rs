//! Type errors raised while building expressions and statements.
//!
//! Every variant is recoverable by design: it is reported exactly once
//! through the installed sink and the failed operation yields a poison
//! node, so the surrounding construction continues without unwinding.

use thiserror::Error;

use lume_ir::{BinaryOp, Type, UnaryOp};

/// A violation detected during construction.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum TypeError {
    /// A `float`/`half` literal was built from an infinite value.
    #[error("floating point value is infinite")]
    InfiniteValue,

    /// A `float`/`half` literal was built from a NaN value.
    #[error("floating point value is NaN")]
    NanValue,

    /// Vector constructor arguments do not sum to the vector's arity.
    #[error("invalid arguments to '{ty}' constructor (expected {expected} scalars, but found {found})")]
    ConstructorArity {
        ty: Type,
        expected: usize,
        found: usize,
    },

    /// Binary operands are incompatible with each other or the operator.
    #[error("type mismatch: '{op}' cannot operate on '{left}', '{right}'")]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: Type,
        right: Type,
    },

    /// Unary operand is incompatible with the operator.
    #[error("'{op}' cannot operate on '{operand}'")]
    UnaryTypeMismatch { op: UnaryOp, operand: Type },

    /// Assignment or increment/decrement target is not an lvalue.
    #[error("cannot assign to this expression")]
    NotAssignable,

    /// A condition or declaration initializer has the wrong type.
    #[error("expected '{expected}', but found '{found}'")]
    ExpectedType { expected: Type, found: Type },

    /// Ternary branches resolve to different types.
    #[error("ternary operator result mismatch: '{left}', '{right}'")]
    TernaryMismatch { left: Type, right: Type },
}

/// Report a violation through the installed sink, fully formatted.
pub(crate) fn report_error(error: &TypeError) {
    lume_diagnostic::report(&format!("error: {error}\n"));
}
