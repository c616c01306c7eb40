//! Binary and unary operators.
//!
//! All operator types used in expressions, including the assignment and
//! compound-assignment forms (those are binary operators whose left operand
//! must additionally be assignable).

use std::fmt;

use crate::ScalarKind;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Shift
    Shl,
    Shr,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Sequencing
    Comma,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in descriptions and in error messages to show the exact
    /// operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Comma => ",",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
        }
    }

    /// Operand category this operator requires of both operands.
    pub const fn operand_category(self) -> OperandCategory {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::AddAssign
            | Self::SubAssign
            | Self::MulAssign
            | Self::DivAssign
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq => OperandCategory::Numeric,
            Self::Mod
            | Self::Shl
            | Self::Shr
            | Self::BitAnd
            | Self::BitOr
            | Self::BitXor
            | Self::ModAssign
            | Self::ShlAssign
            | Self::ShrAssign
            | Self::BitAndAssign
            | Self::BitOrAssign
            | Self::BitXorAssign => OperandCategory::Integer,
            Self::And | Self::Or => OperandCategory::Boolean,
            Self::Eq | Self::NotEq | Self::Comma | Self::Assign => OperandCategory::Any,
        }
    }

    /// Check if this is `=` or any compound-assignment operator.
    ///
    /// These require an assignable left operand, checked after the type
    /// compatibility check.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::AddAssign
                | Self::SubAssign
                | Self::MulAssign
                | Self::DivAssign
                | Self::ModAssign
                | Self::ShlAssign
                | Self::ShrAssign
                | Self::BitAndAssign
                | Self::BitOrAssign
                | Self::BitXorAssign
        )
    }

    /// Check if this is a compound-assignment operator (`+=` and friends,
    /// excluding plain `=`).
    pub const fn is_compound_assignment(self) -> bool {
        self.is_assignment() && !matches!(self, Self::Assign)
    }

    /// Check if the result type is `bool` regardless of operand type.
    pub const fn yields_bool(self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::And
                | Self::Or
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation `-`.
    Neg,
    /// Logical not `!`.
    Not,
    /// Bitwise not `~`.
    BitNot,
    /// Increment `++` (prefix or postfix).
    Inc,
    /// Decrement `--` (prefix or postfix).
    Dec,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }

    /// Check if this operator mutates its operand, requiring it to be
    /// assignable.
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Inc | Self::Dec)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Whether a unary operator attaches before or after its operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// Operand category required by a binary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperandCategory {
    /// Any integer or floating-point base kind.
    Numeric,
    /// Integer base kinds only.
    Integer,
    /// Boolean base kind only.
    Boolean,
    /// No base-kind restriction.
    Any,
}

impl OperandCategory {
    /// Check whether a scalar base kind satisfies this category.
    pub const fn permits(self, kind: ScalarKind) -> bool {
        match self {
            Self::Numeric => kind.is_numeric(),
            Self::Integer => kind.is_integer(),
            Self::Boolean => kind.is_boolean(),
            Self::Any => true,
        }
    }
}
