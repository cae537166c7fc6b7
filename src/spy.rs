use std::{cell::Cell, fmt, panic::Location};

use crate::{
    equality::{is_false_with, is_true_with},
    reporter::Reporter,
};

/**
A [`Reporter`] that observes failures instead of reporting them.

A spy wraps another reporter (usually the test's real
[`TestContext`][crate::TestContext]). Failures reported through the spy
set a flag and send their message to the wrapped reporter's log, but never
fail the wrapped reporter. Everything else is forwarded as-is.

This makes it possible to test that a check *fails*: run the check
against the spy, then verify with [`expect_failure`][Spy::expect_failure]
that it reported something. The verification itself reports to the
wrapped reporter, so a check that wrongly passes fails the real test.

```
use soft_asserts::{equal, Reporter, Spy, TestContext};

let t = TestContext::named("doc");
let spy = Spy::on(&t);
let _guard = spy.expect_failure_on_drop();

equal(&spy, 1, 2);

assert!(spy.spied_on_a_failure());
assert!(!t.failed());
```
*/
#[derive(Debug)]
pub struct Spy<'a, R: Reporter + ?Sized> {
    inner: &'a R,
    failed: Cell<bool>,
}

impl<'a, R: Reporter + ?Sized> Spy<'a, R> {
    pub fn on(inner: &'a R) -> Self {
        Self {
            inner,
            failed: Cell::new(false),
        }
    }

    /// Whether a failure was reported through this spy. Once set, this
    /// stays set.
    pub fn spied_on_a_failure(&self) -> bool {
        self.failed.get()
    }

    fn record_failure(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(test = self.inner.name(), "spy intercepted a failure");

        self.failed.set(true);
    }

    #[track_caller]
    fn verify<T: Reporter + ?Sized>(&self, real: &T, expected: Expected) {
        match expected {
            Expected::Failure => is_true_with(
                real,
                self.spied_on_a_failure(),
                format_args!("[spy] expected a failure, but nothing failed"),
            ),
            Expected::Success => is_false_with(
                real,
                self.spied_on_a_failure(),
                format_args!("[spy] expected success, but something failed"),
            ),
        }
    }

    /// Fail the wrapped reporter if no failure was reported through this
    /// spy.
    #[track_caller]
    pub fn expect_failure(&self) {
        self.verify(self.inner, Expected::Failure)
    }

    /// Fail the wrapped reporter if a failure was reported through this
    /// spy.
    #[track_caller]
    pub fn expect_success(&self) {
        self.verify(self.inner, Expected::Success)
    }

    /// Run [`expect_failure`][Spy::expect_failure] when the returned guard
    /// is dropped. A resulting failure is attributed to the caller of this
    /// method.
    #[track_caller]
    #[must_use = "the expectation is checked when the guard is dropped"]
    pub fn expect_failure_on_drop(&self) -> Expectation<'_, 'a, R> {
        Expectation {
            spy: self,
            expected: Expected::Failure,
            location: Location::caller(),
        }
    }

    /// Run [`expect_success`][Spy::expect_success] when the returned guard
    /// is dropped.
    #[track_caller]
    #[must_use = "the expectation is checked when the guard is dropped"]
    pub fn expect_success_on_drop(&self) -> Expectation<'_, 'a, R> {
        Expectation {
            spy: self,
            expected: Expected::Success,
            location: Location::caller(),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for Spy<'_, R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn fail(&self) {
        self.record_failure();
    }

    fn fail_now(&self) {
        self.record_failure();
    }

    fn failed(&self) -> bool {
        self.inner.failed()
    }

    fn log_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.inner.log_at(location, message)
    }

    fn error_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.record_failure();
        self.inner.log_at(location, message);
    }

    fn fatal_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.record_failure();
        self.inner.log_at(location, message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Failure,
    Success,
}

/// Guard returned by [`Spy::expect_failure_on_drop`] and
/// [`Spy::expect_success_on_drop`].
#[derive(Debug)]
pub struct Expectation<'s, 'a, R: Reporter + ?Sized> {
    spy: &'s Spy<'a, R>,
    expected: Expected,
    location: &'static Location<'static>,
}

impl<R: Reporter + ?Sized> Drop for Expectation<'_, '_, R> {
    fn drop(&mut self) {
        let real = Pinned {
            inner: self.spy.inner,
            location: self.location,
        };

        self.spy.verify(&real, self.expected);
    }
}

/// Forwards to `inner`, attributing everything to a fixed location.
struct Pinned<'r, R: Reporter + ?Sized> {
    inner: &'r R,
    location: &'static Location<'static>,
}

impl<R: Reporter + ?Sized> Reporter for Pinned<'_, R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn fail(&self) {
        self.inner.fail()
    }

    fn fail_now(&self) {
        self.inner.fail_now()
    }

    fn failed(&self) -> bool {
        self.inner.failed()
    }

    fn log_at(&self, _location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.inner.log_at(self.location, message)
    }

    fn error_at(&self, _location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.inner.error_at(self.location, message)
    }

    fn fatal_at(&self, _location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.inner.fatal_at(self.location, message)
    }
}
