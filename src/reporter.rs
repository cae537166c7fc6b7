use std::{fmt, panic::Location};

/// A test reporting context: the channel through which checks report
/// failures.
///
/// This is the subset of a test harness that the checks in this crate
/// need. [`TestContext`][crate::TestContext] implements it for ordinary
/// `#[test]` functions, and [`Spy`][crate::Spy] wraps any other reporter
/// to observe failures instead of surfacing them.
///
/// Failures are recorded with the caller's location. The convenience
/// methods are `#[track_caller]`, as are all the checks, so the recorded
/// location is the line in the test that called the check rather than a
/// line inside this crate.
///
/// A reporter belongs to a single running test and is only used from that
/// test's thread.
pub trait Reporter {
    /// The name of the test this reporter belongs to.
    fn name(&self) -> &str;

    /// Mark the test as failed and keep running.
    fn fail(&self);

    /// Mark the test as failed and stop running it.
    ///
    /// Real contexts don't return from this; a [`Spy`][crate::Spy] does.
    fn fail_now(&self);

    /// Whether the test has been marked as failed.
    fn failed(&self) -> bool;

    /// Record diagnostic text, attributed to `location`. Logging never
    /// changes the failure status.
    fn log_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>);

    /// Record diagnostic text, attributed to the caller.
    #[track_caller]
    fn log(&self, message: fmt::Arguments<'_>) {
        self.log_at(Location::caller(), message)
    }

    /// Log `message` at `location`, then [`fail`][Reporter::fail].
    fn error_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.log_at(location, message);
        self.fail();
    }

    /// Log `message`, then [`fail`][Reporter::fail]. This is the only
    /// reporting method the checks use.
    #[track_caller]
    fn error(&self, message: fmt::Arguments<'_>) {
        self.error_at(Location::caller(), message)
    }

    /// Log `message` at `location`, then [`fail_now`][Reporter::fail_now].
    fn fatal_at(&self, location: &'static Location<'static>, message: fmt::Arguments<'_>) {
        self.log_at(location, message);
        self.fail_now();
    }

    /// Log `message`, then [`fail_now`][Reporter::fail_now].
    #[track_caller]
    fn fatal(&self, message: fmt::Arguments<'_>) {
        self.fatal_at(Location::caller(), message)
    }
}
