//! Embedded AST builder for the Lume shading language.
//!
//! Trees are constructed directly from Rust expressions, never parsed:
//! each construction operation fully type-checks its operands, promotes
//! unresolved literals, folds boolean constants, and reports violations
//! through the [`lume_diagnostic`] sink *as the tree is built*. By the
//! time a tree is released to the downstream code generator it is already
//! verified well-typed, or explicitly poisoned.
//!
//! # Usage
//!
//! ```
//! use lume_dsl::{Session, SessionOptions, Type, Var};
//! use lume_dsl::{add, declare_init, float2};
//!
//! let _session = Session::guard(SessionOptions { mangle: false });
//!
//! let a = Var::new(Type::FLOAT, "a");
//! let sum = add(&a, 1);
//! assert_eq!(sum.description(), "(a + 1.0)");
//!
//! let v = float2((0.5, &a));
//! assert_eq!(v.description(), "float2(0.5, a)");
//!
//! let init = Var::new(Type::FLOAT2, "v");
//! assert_eq!(declare_init(&init, v).description(), "float2 v = float2(0.5, a);");
//! ```
//!
//! # Error recovery
//!
//! A detected violation is reported exactly once and the failed operation
//! yields a poison node; building continues and poison operands never
//! trigger follow-on diagnostics. No error unwinds across a builder call.

mod ctor;
mod error;
mod expression;
mod ops;
mod session;
mod statement;
mod stmts;
mod sugar;

pub use error::TypeError;
pub use expression::{Expression, IntoExpr};
pub use session::{Session, SessionGuard, SessionOptions};
pub use statement::Statement;

pub use ctor::{
    bool2, bool3, bool4, boolean, float, float2, float3, float4, half, half2, half3, half4, int,
    int2, int3, int4, short, short2, short3, short4, ConstructorArgs,
};
pub use ops::{
    add, add_assign, assign, binary, bit_and, bit_and_assign, bit_not, bit_or, bit_or_assign,
    bit_xor, bit_xor_assign, comma, div, div_assign, eq, ge, gt, le, logical_and, logical_not,
    logical_or, lt, mul, mul_assign, ne, neg, post_decrement, post_increment, pre_decrement,
    pre_increment, rem, rem_assign, shl, shl_assign, shr, shr_assign, sub, sub_assign, ternary,
    unary,
};
pub use stmts::{
    block, declare, declare_init, do_while, for_loop, if_then, if_then_else, while_loop,
};

// The IR surface a builder user needs by name.
pub use lume_ir::{BinaryOp, Expr, Fixity, ScalarKind, Stmt, Type, UnaryOp, Var};
