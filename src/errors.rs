use std::{error::Error, fmt, iter, ptr};

use crate::{failure_message, reporter::Reporter};

/// Anything that can be viewed as a `&dyn Error`: concrete error types as
/// well as the usual error trait objects.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterate over `err` followed by each of its causes, as reported by
/// [`Error::source`].
pub fn error_chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(err), |&err| err.source())
}

/**
Whether `err`, or any of its causes, is `target`.

A cause matches if it's the same object as `target`, or if it has the
same type and compares equal to it with [`PartialEq`]. Implement
[`PartialEq`] by hand to control which errors count as equivalent. A
missing error matches nothing.

```
use std::{error::Error, fmt};
use soft_asserts::error_matches;

#[derive(Debug, PartialEq)]
struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not found")
    }
}

impl Error for NotFound {}

#[derive(Debug)]
struct LoadFailed(NotFound);

impl fmt::Display for LoadFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("couldn't load config")
    }
}

impl Error for LoadFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

assert!(error_matches(Some(&LoadFailed(NotFound)), &NotFound));
assert!(!error_matches(None::<&LoadFailed>, &NotFound));
```
*/
pub fn error_matches<E, T>(err: Option<&E>, target: &T) -> bool
where
    E: AsDynError + ?Sized,
    T: Error + PartialEq + 'static,
{
    let Some(err) = err else {
        return false;
    };

    error_chain(err.as_dyn_error())
        .filter_map(|cause| cause.downcast_ref::<T>())
        .any(|cause| ptr::eq(cause, target) || cause == target)
}

#[track_caller]
pub fn error_is_with<R, E, T>(t: &R, err: Option<&E>, target: &T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    E: AsDynError + ?Sized,
    T: Error + PartialEq + 'static,
{
    if !error_matches(err, target) {
        t.error(message);
    }
}

/// Check that `err`, or one of its causes, is `target`. See
/// [`error_matches`] for what counts as a match.
#[track_caller]
pub fn error_is<R, E, T>(t: &R, err: Option<&E>, target: &T)
where
    R: Reporter + ?Sized,
    E: AsDynError + ?Sized,
    T: Error + PartialEq + 'static,
{
    let message = failure_message!(
        "error does not match target",
        error debug: err.map(AsDynError::as_dyn_error),
        target debug: target,
    );
    error_is_with(t, err, target, format_args!("{message}"))
}

#[track_caller]
pub fn error_is_not_with<R, E, T>(t: &R, err: Option<&E>, target: &T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    E: AsDynError + ?Sized,
    T: Error + PartialEq + 'static,
{
    if error_matches(err, target) {
        t.error(message);
    }
}

/// Check that neither `err` nor any of its causes is `target`.
#[track_caller]
pub fn error_is_not<R, E, T>(t: &R, err: Option<&E>, target: &T)
where
    R: Reporter + ?Sized,
    E: AsDynError + ?Sized,
    T: Error + PartialEq + 'static,
{
    let message = failure_message!(
        "error matches disallowed target",
        error debug: err.map(AsDynError::as_dyn_error),
        target debug: target,
    );
    error_is_not_with(t, err, target, format_args!("{message}"))
}
