//! AST node types.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes (`Expr`, `ExprKind`)
//! - `operators`: binary and unary operators with their category metadata
//! - `stmt`: statement nodes (`Stmt`, `StmtKind`)

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, Fixity, OperandCategory, UnaryOp};
pub use stmt::{Stmt, StmtKind};

#[cfg(test)]
mod tests;
