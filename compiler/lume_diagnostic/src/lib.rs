//! Diagnostic sink for the Lume DSL front end.
//!
//! The type checker reports every detected violation exactly once, as fully
//! formatted text (`error: ...\n`), through a single process-wide handler.
//! With no handler installed the sink degrades to structured logging and
//! never terminates the process.
//!
//! Handler replacement is scoped: [`ScopedReporter`] restores the previous
//! handler on every exit path, including an early return or panic inside
//! the scope.

mod reporter;

pub use reporter::{report, set_reporter, ErrorReporter, ScopedReporter};
