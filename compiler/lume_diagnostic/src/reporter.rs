//! The installable error handler and its scoping guard.

use parking_lot::Mutex;

/// Receiver for fully formatted diagnostic text.
///
/// The message arrives complete: `error: ` prefix, formatted body, trailing
/// newline. Implementations must not assume they can re-enter the sink.
pub trait ErrorReporter: Send {
    fn report(&mut self, message: &str);
}

/// The single installed handler. `None` selects the logging fallback.
static REPORTER: Mutex<Option<Box<dyn ErrorReporter>>> = Mutex::new(None);

/// Install a handler (or none), returning the previously installed one.
pub fn set_reporter(
    reporter: Option<Box<dyn ErrorReporter>>,
) -> Option<Box<dyn ErrorReporter>> {
    std::mem::replace(&mut *REPORTER.lock(), reporter)
}

/// Forward one diagnostic to the installed handler.
///
/// Without a handler the message is logged at error level; the process is
/// never aborted on a diagnostic.
pub fn report(message: &str) {
    match REPORTER.lock().as_mut() {
        Some(handler) => handler.report(message),
        None => tracing::error!(target: "lume_dsl", "{}", message.trim_end()),
    }
}

/// Guard that installs a handler for a scope and restores the previous one
/// when dropped, on every exit path.
pub struct ScopedReporter {
    previous: Option<Box<dyn ErrorReporter>>,
}

impl ScopedReporter {
    pub fn install(reporter: Box<dyn ErrorReporter>) -> Self {
        ScopedReporter {
            previous: set_reporter(Some(reporter)),
        }
    }
}

impl Drop for ScopedReporter {
    fn drop(&mut self) {
        set_reporter(self.previous.take());
    }
}
