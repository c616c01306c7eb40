//! Shared harness for the behavioral tests.
//!
//! The session and the error sink are process-wide, so tests serialize on
//! one lock and bracket themselves with a mangling-off session for
//! deterministic descriptions.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use lume_diagnostic::{ErrorReporter, ScopedReporter};
use lume_dsl::{Session, SessionGuard, SessionOptions};

static TEST_LOCK: Mutex<()> = Mutex::new(());

/// One test's worth of DSL context. Ends the session before releasing the
/// lock (fields drop in declaration order).
pub struct DslTest {
    _session: SessionGuard,
    _lock: MutexGuard<'static, ()>,
}

/// Take the lock and start a session with mangling off.
pub fn start() -> DslTest {
    let lock = TEST_LOCK.lock();
    DslTest {
        _session: Session::guard(SessionOptions { mangle: false }),
        _lock: lock,
    }
}

/// Scopes exactly one expected diagnostic.
///
/// Installs a reporter expecting the given message; the reporter panics on
/// any other message or on a second one, and the guard's drop fails the
/// test if the expectation never fired. The previously installed handler
/// is restored either way.
pub struct ExpectError {
    expected: Arc<Mutex<Option<String>>>,
    _scope: ScopedReporter,
}

struct ExpectReporter {
    expected: Arc<Mutex<Option<String>>>,
}

impl ErrorReporter for ExpectReporter {
    fn report(&mut self, message: &str) {
        match self.expected.lock().take() {
            Some(expected) => assert_eq!(message, expected, "diagnostic mismatch"),
            None => panic!("unexpected diagnostic: {message}"),
        }
    }
}

impl ExpectError {
    pub fn new(message: &str) -> Self {
        let expected = Arc::new(Mutex::new(Some(message.to_string())));
        ExpectError {
            expected: expected.clone(),
            _scope: ScopedReporter::install(Box::new(ExpectReporter { expected })),
        }
    }
}

impl Drop for ExpectError {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert!(
                self.expected.lock().is_none(),
                "expected diagnostic was never reported"
            );
        }
    }
}
