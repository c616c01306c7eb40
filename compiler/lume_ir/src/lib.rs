//! Lume IR - AST and type catalog for the Lume shading-language builder.
//!
//! This crate contains the data structures shared by the DSL front end:
//! - `Type` and `ScalarKind`: the scalar/vector type catalog
//! - AST nodes (`Expr`, `Stmt`) and their canonical `description()` text
//! - `Var`: variable identity shared between references and a declaration
//!
//! # Design Notes
//!
//! Nodes are owned trees (`Box` children): every node has exactly one owner,
//! matching the move-once handle model of `lume_dsl`. The `description()`
//! printers are pure functions of node shape - identical trees always print
//! identically, which is what the DSL's behavioral tests compare against.
//!
//! Unresolved numeric literals carry `ty: None` and behave as `int`/`float`
//! until the type checker resolves them against a typed operand.

pub mod ast;
mod ty;
mod var;

pub use ast::{BinaryOp, Expr, ExprKind, Fixity, OperandCategory, Stmt, StmtKind, UnaryOp};
pub use ty::{Arity, ScalarKind, Type};
pub use var::Var;
