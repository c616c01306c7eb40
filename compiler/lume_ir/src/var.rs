//! Variable identity.
//!
//! A `Var` is created by the host before use and shared (cheaply cloned)
//! between every reference to it and its single declaration. Equality is
//! identity, not name equality: two variables named `a` are distinct.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::Type;

/// A variable: identity, declared type, display name.
///
/// The emitted name is settable exactly once, when the variable is declared
/// (the session's mangling policy decides the final spelling). References
/// printed before declaration fall back to the base name.
#[derive(Clone)]
pub struct Var {
    inner: Arc<VarInner>,
}

struct VarInner {
    ty: Type,
    base_name: String,
    emitted_name: OnceLock<String>,
}

impl Var {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Var {
            inner: Arc::new(VarInner {
                ty,
                base_name: name.into(),
                emitted_name: OnceLock::new(),
            }),
        }
    }

    pub fn ty(&self) -> Type {
        self.inner.ty
    }

    /// The name the variable was created with.
    pub fn base_name(&self) -> &str {
        &self.inner.base_name
    }

    /// The display name: the emitted (possibly mangled) name once declared,
    /// the base name before that.
    pub fn name(&self) -> &str {
        self.inner
            .emitted_name
            .get()
            .map_or(&self.inner.base_name, String::as_str)
    }

    pub fn is_declared(&self) -> bool {
        self.inner.emitted_name.get().is_some()
    }

    /// Latch the emitted name, marking the variable declared.
    ///
    /// Returns `false` if the variable was already declared; the first
    /// emitted name is kept. Declaring twice is a programming error the
    /// caller is expected to assert on.
    pub fn mark_declared(&self, emitted_name: String) -> bool {
        self.inner.emitted_name.set(emitted_name).is_ok()
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Var {}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.inner.ty, self.name())
    }
}
