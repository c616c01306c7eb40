//! Scalar kinds and the scalar/vector type catalog.
//!
//! Types are small `Copy` values compared structurally. The canonical name
//! (`bool`, `int`, `short`, `float`, `half`, `float3`, ...) is what the
//! printer and every diagnostic message render.

use std::fmt;

/// Scalar component kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int,
    /// 16-bit signed integer.
    Short,
    /// 32-bit floating point.
    Float,
    /// 16-bit floating point.
    Half,
}

impl ScalarKind {
    /// Canonical type name, as rendered in descriptions and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Short => "short",
            Self::Float => "float",
            Self::Half => "half",
        }
    }

    /// Check if this kind is numeric (any integer or floating-point kind).
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool)
    }

    /// Check if this kind is an integer kind.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Short)
    }

    /// Check if this kind is a floating-point kind.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Half)
    }

    /// Check if this kind is boolean.
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Bool)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Vector arity. Only 2-, 3-, and 4-component vectors exist.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Two,
    Three,
    Four,
}

impl Arity {
    /// Component count as a plain number.
    pub const fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// A scalar or vector type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Scalar(ScalarKind),
    Vector(ScalarKind, Arity),
}

impl Type {
    // The full catalog, pre-defined for O(1) reference the way primitive
    // type indices are pre-interned in larger compilers.

    pub const BOOL: Self = Self::Scalar(ScalarKind::Bool);
    pub const INT: Self = Self::Scalar(ScalarKind::Int);
    pub const SHORT: Self = Self::Scalar(ScalarKind::Short);
    pub const FLOAT: Self = Self::Scalar(ScalarKind::Float);
    pub const HALF: Self = Self::Scalar(ScalarKind::Half);

    pub const BOOL2: Self = Self::Vector(ScalarKind::Bool, Arity::Two);
    pub const BOOL3: Self = Self::Vector(ScalarKind::Bool, Arity::Three);
    pub const BOOL4: Self = Self::Vector(ScalarKind::Bool, Arity::Four);
    pub const INT2: Self = Self::Vector(ScalarKind::Int, Arity::Two);
    pub const INT3: Self = Self::Vector(ScalarKind::Int, Arity::Three);
    pub const INT4: Self = Self::Vector(ScalarKind::Int, Arity::Four);
    pub const SHORT2: Self = Self::Vector(ScalarKind::Short, Arity::Two);
    pub const SHORT3: Self = Self::Vector(ScalarKind::Short, Arity::Three);
    pub const SHORT4: Self = Self::Vector(ScalarKind::Short, Arity::Four);
    pub const FLOAT2: Self = Self::Vector(ScalarKind::Float, Arity::Two);
    pub const FLOAT3: Self = Self::Vector(ScalarKind::Float, Arity::Three);
    pub const FLOAT4: Self = Self::Vector(ScalarKind::Float, Arity::Four);
    pub const HALF2: Self = Self::Vector(ScalarKind::Half, Arity::Two);
    pub const HALF3: Self = Self::Vector(ScalarKind::Half, Arity::Three);
    pub const HALF4: Self = Self::Vector(ScalarKind::Half, Arity::Four);

    /// The scalar base kind: a scalar's own kind, a vector's component kind.
    pub const fn base(self) -> ScalarKind {
        match self {
            Self::Scalar(kind) | Self::Vector(kind, _) => kind,
        }
    }

    /// Number of scalar components (1 for scalars).
    pub const fn components(self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(_, arity) => arity.count(),
        }
    }

    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Vector(..))
    }

    /// Check if the base kind is numeric.
    pub const fn is_numeric(self) -> bool {
        self.base().is_numeric()
    }

    /// Check if the base kind is an integer kind.
    pub const fn is_integer(self) -> bool {
        self.base().is_integer()
    }

    /// Check if the base kind is a floating-point kind.
    pub const fn is_float(self) -> bool {
        self.base().is_float()
    }

    /// Check if the base kind is boolean.
    pub const fn is_boolean(self) -> bool {
        self.base().is_boolean()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.write_str(kind.name()),
            Self::Vector(kind, arity) => write!(f, "{}{}", kind.name(), arity.count()),
        }
    }
}
