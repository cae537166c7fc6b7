use std::{
    cell::{Cell, RefCell},
    fmt::{self, Display, Formatter},
    panic::Location,
    thread,
};

use indent_write::indentable::Indented;
use thiserror::Error;

use crate::reporter::Reporter;

/// The diagnostic lines of a failed test, one per [`Reporter::log`] or
/// failed check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureLog(pub Vec<String>);

impl Display for FailureLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|line| {
            write!(
                f,
                "\n{}",
                Indented {
                    item: line,
                    indent: "    ",
                }
            )
        })
    }
}

/// A test ran to completion (or was stopped) after being marked as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("test `{name}` failed{log}")]
pub struct TestFailure {
    pub name: String,
    pub log: FailureLog,
}

/**
A [`Reporter`] for ordinary `#[test]` functions.

Rust's test harness only knows about panics, so a failed check can't mark
a test as failed without stopping it. `TestContext` fills that gap: checks
record failures on it and the test keeps running, so a single run surfaces
every failed check. The test fails at the end, either when the context is
dropped or when [`finish`][TestContext::finish] is called.

```should_panic
use soft_asserts::{equal, string_contains, TestContext};

let t = TestContext::new();

// Both of these fail, and both are reported when `t` is dropped.
equal(&t, 1, 2);
string_contains(&t, "golang testing helpers", "python");
```
*/
#[derive(Debug)]
pub struct TestContext {
    name: String,
    failed: Cell<bool>,
    finished: Cell<bool>,
    log: RefCell<Vec<String>>,
}

impl TestContext {
    /// Create a context named after the current thread. The test harness
    /// runs every test on a thread named after the test's path.
    pub fn new() -> Self {
        Self::named(thread::current().name().unwrap_or("<unnamed>"))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: Cell::new(false),
            finished: Cell::new(false),
            log: RefCell::new(Vec::new()),
        }
    }

    /// A copy of every diagnostic line recorded so far.
    pub fn log_lines(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn failure(&self) -> TestFailure {
        TestFailure {
            name: self.name.clone(),
            log: FailureLog(self.log_lines()),
        }
    }

    /// End the test, returning the failure if it was marked as failed.
    /// A finished context doesn't panic when dropped.
    pub fn finish(self) -> Result<(), TestFailure> {
        self.finished.set(true);

        if self.failed.get() {
            Err(self.failure())
        } else {
            Ok(())
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TestContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn fail(&self) {
        #[cfg(feature = "tracing")]
        tracing::warn!(test = %self.name, "test marked as failed");

        self.failed.set(true);
    }

    fn fail_now(&self) {
        self.fail();
        self.finished.set(true);
        panic!("{}", self.failure());
    }

    fn failed(&self) -> bool {
        self.failed.get()
    }

    fn log_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        let line = format!("{}:{}: {}", location.file(), location.line(), message);

        #[cfg(feature = "tracing")]
        tracing::info!(test = %self.name, "{}", line);

        self.log.borrow_mut().push(line);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Never panic while unwinding; the test is already failing.
        if self.failed.get() && !self.finished.get() && !thread::panicking() {
            panic!("{}", self.failure());
        }
    }
}
