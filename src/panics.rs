use std::{
    any::Any,
    fmt,
    ops::Deref,
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{failure_message, reporter::Reporter};

/// A recovered panic value, as returned by [`catch_unwind`].
pub type PanicPayload = Box<dyn Any + Send>;

/// Check that calling `f` panics, reporting `message` if it doesn't.
///
/// Returns the panic payload, or [`None`] if `f` returned normally.
#[track_caller]
pub fn panics_with<R, F, T>(t: &R, f: F, message: fmt::Arguments<'_>) -> Option<PanicPayload>
where
    R: Reporter + ?Sized,
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => {
            t.error(message);
            None
        }
        Err(payload) => Some(payload),
    }
}

/**
Check that calling `f` panics.

This check is intended to replace `#[should_panic]` in tests:

- It checks that a particular closure panics, rather than an entire test
  function.
- The panic is caught, so the test keeps running afterwards, and several
  panicking closures can be checked in the same test.
- The panic payload is returned for further inspection. Use
  [`get_panic_message`] to get the message of an ordinary `panic!`.

The closure is treated as unwind-safe; state it mutated before panicking
is visible afterwards. Panics can't be caught when the crate is built with
`panic = "abort"`.

```
use soft_asserts::{get_panic_message, panics, Reporter, TestContext};

let t = TestContext::named("doc");

let payload = panics(&t, || panic!("{}, {}!", "Hello", "World")).unwrap();
assert_eq!(get_panic_message(&payload), Some("Hello, World!"));

// Didn't panic: reported as a failure, and nothing is returned
assert!(panics(&t, || 1 + 2).is_none());
assert!(t.failed());
# t.finish().unwrap_err();
```
*/
#[track_caller]
pub fn panics<R, F, T>(t: &R, f: F) -> Option<PanicPayload>
where
    R: Reporter + ?Sized,
    F: FnOnce() -> T,
{
    let message = failure_message!("function didn't panic");
    panics_with(t, f, format_args!("{message}"))
}

/// Check that calling `f` doesn't panic, reporting `message` if it does.
///
/// Returns the value returned by `f`, or [`None`] if it panicked. When the
/// panic carries a message, it's logged alongside the failure.
#[track_caller]
pub fn does_not_panic_with<R, F, T>(t: &R, f: F, message: fmt::Arguments<'_>) -> Option<T>
where
    R: Reporter + ?Sized,
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            if let Some(panic) = get_panic_message(&payload) {
                t.log(format_args!("panic message: {panic}"));
            }
            t.error(message);
            None
        }
    }
}

/// Check that calling `f` doesn't panic.
#[track_caller]
pub fn does_not_panic<R, F, T>(t: &R, f: F) -> Option<T>
where
    R: Reporter + ?Sized,
    F: FnOnce() -> T,
{
    let message = failure_message!("function panicked");
    does_not_panic_with(t, f, format_args!("{message}"))
}

/// Get the panic message as a `&str`, if available
///
/// While a panic value can be any type, *usually* it is either a `String`
/// or a `str`, hidden inside a `Box<dyn Any + Send>` (see
/// [`std::thread::Result`] for more info). This function gets the panic
/// message as an &str (if available) from a panic value.
///
/// ```
/// use std::panic::catch_unwind;
/// use soft_asserts::get_panic_message;
///
/// let result = catch_unwind(|| panic!("{}, {}!", "Hello", "World"));
/// let panic = result.unwrap_err();
/// let message = get_panic_message(&panic).unwrap();
///
/// assert_eq!(message, "Hello, World!");
/// ```
#[inline]
#[allow(clippy::borrowed_box)]
pub fn get_panic_message(panic: &PanicPayload) -> Option<&str> {
    panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&'static str>().map(Deref::deref))
}

#[cfg(test)]
mod tests {
    use std::panic::panic_any;

    use super::*;
    use crate::{Spy, TestContext};

    mod bootstrap_tests {
        use super::*;

        // A panic that escaped a check would fail these tests outright, so
        // they establish that the checks contain panics before the spy-based
        // tests below rely on it.
        #[test]
        fn panics_contains_the_panic() {
            let t = TestContext::new();
            panics(&t, || panic!("contained"));
        }

        #[test]
        fn does_not_panic_contains_the_panic() {
            let t = TestContext::named("contained");
            does_not_panic(&t, || panic!("contained"));
            assert!(t.finish().is_err());
        }

        #[test]
        #[should_panic(expected = "function didn't panic")]
        fn unfinished_failure_surfaces_on_drop() {
            let t = TestContext::new();
            panics(&t, || ());
        }
    }

    #[test]
    fn panics_returns_payload() {
        let t = TestContext::new();

        let payload = panics(&t, || panic_any(244i32)).unwrap();
        assert_eq!(payload.downcast_ref::<i32>(), Some(&244));
    }

    #[test]
    fn execution_resumes_after_panic() {
        let t = TestContext::new();
        let mut steps = Vec::new();

        panics(&t, || {
            steps.push("before");
            panic!("stop");
        });
        steps.push("after");

        assert_eq!(steps, ["before", "after"]);
    }

    #[test]
    fn does_not_panic_returns_value() {
        let t = TestContext::new();
        assert_eq!(does_not_panic(&t, || 1 + 2), Some(3));
    }

    #[test]
    fn panics_fails() {
        let t = TestContext::new();
        let spy = Spy::on(&t);
        let _guard = spy.expect_failure_on_drop();
        assert!(panics(&spy, || {}).is_none());
    }

    #[test]
    fn does_not_panic_fails() {
        let t = TestContext::new();
        let spy = Spy::on(&t);
        let _guard = spy.expect_failure_on_drop();
        assert_eq!(does_not_panic(&spy, || panic!("test")), None::<()>);
    }

    #[test]
    fn does_not_panic_logs_panic_message() {
        let t = TestContext::named("logged");
        does_not_panic_with(
            &t,
            || panic!("{} {}", "This", "Message"),
            format_args!("custom"),
        );

        let log = t.finish().unwrap_err().log.0;
        assert_eq!(log.len(), 2);
        assert!(log[0].ends_with("panic message: This Message"));
        assert!(log[1].ends_with(": custom"));
    }

    #[test]
    fn nested_panic_checks() {
        let t = TestContext::new();
        let inner = panics(&t, || {
            panics(&t, || panic!("inner"));
            panic!("outer");
        })
        .unwrap();

        assert_eq!(get_panic_message(&inner), Some("outer"));
    }

    mod panic_messages {
        use crate::get_panic_message;
        use std::panic::{catch_unwind, panic_any};

        #[test]
        fn str_message() {
            let result =
                catch_unwind(|| panic!("Hello, World!")).expect_err("Function didn't panic????");
            assert_eq!(get_panic_message(&result), Some("Hello, World!"));
        }

        #[test]
        fn string_message() {
            let result = catch_unwind(|| panic_any("Hello, World!".to_owned()))
                .expect_err("Function didn't panic????");

            assert_eq!(get_panic_message(&result), Some("Hello, World!"));
        }

        #[test]
        fn other_message() {
            let result = catch_unwind(|| panic_any(25)).expect_err("Function didn't panic????");
            assert_eq!(get_panic_message(&result), None);
        }
    }
}
