//! The process-wide construction context.
//!
//! A session brackets a sequence of builder calls: it must be started
//! before the first and ended after the last, and only one session is
//! active at a time. The session carries the name-mangling policy applied
//! when variables are declared.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Options for a session.
#[derive(Copy, Clone, Debug)]
pub struct SessionOptions {
    /// Append a uniqueness suffix to declared variable names. On by
    /// default; tests turn it off for deterministic textual comparison.
    pub mangle: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions { mangle: true }
    }
}

struct SessionState {
    mangle: bool,
    /// Next suffix per base name.
    counters: FxHashMap<String, u32>,
}

static SESSION: Mutex<Option<SessionState>> = Mutex::new(None);

/// The process-wide session.
pub struct Session;

impl Session {
    /// Start a session.
    ///
    /// # Panics
    /// Panics if a session is already active; that is a programming error,
    /// not a recoverable diagnostic.
    pub fn start(options: SessionOptions) {
        let mut slot = SESSION.lock();
        assert!(slot.is_none(), "a DSL session is already active");
        *slot = Some(SessionState {
            mangle: options.mangle,
            counters: FxHashMap::default(),
        });
        tracing::debug!(mangle = options.mangle, "DSL session started");
    }

    /// End the active session.
    ///
    /// # Panics
    /// Panics if no session is active.
    pub fn end() {
        let mut slot = SESSION.lock();
        assert!(slot.is_some(), "no DSL session is active");
        *slot = None;
        tracing::debug!("DSL session ended");
    }

    pub fn is_active() -> bool {
        SESSION.lock().is_some()
    }

    /// Start a session that ends when the returned guard is dropped.
    pub fn guard(options: SessionOptions) -> SessionGuard {
        Session::start(options);
        SessionGuard { _private: () }
    }

    /// The emitted name for a variable declared with `base` as its name:
    /// the base itself with mangling off, `<base>_<n>` with it on.
    pub(crate) fn emitted_name(base: &str) -> String {
        let mut slot = SESSION.lock();
        match slot.as_mut() {
            Some(state) if state.mangle => {
                let counter = state.counters.entry(base.to_string()).or_insert(0);
                *counter += 1;
                format!("{base}_{counter}")
            }
            _ => base.to_string(),
        }
    }
}

/// Asserts (in debug builds) that builder calls are bracketed by a session.
pub(crate) fn debug_assert_active() {
    debug_assert!(
        Session::is_active(),
        "builder call outside a DSL session; call Session::start first"
    );
}

/// Ends the session on drop. Created by [`Session::guard`].
pub struct SessionGuard {
    _private: (),
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        Session::end();
    }
}
