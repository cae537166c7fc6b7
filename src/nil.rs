use std::fmt::{self, Debug};

use crate::{failure_message, reporter::Reporter};

/// Types with an "absent" value: [`None`] for [`Option`], null for raw
/// pointers.
pub trait Nullable {
    fn is_nil(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline]
    fn is_nil(&self) -> bool {
        N::is_nil(self)
    }
}

#[track_caller]
pub fn is_nil_with<R, N>(t: &R, actual: N, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    N: Nullable,
{
    if !actual.is_nil() {
        t.error(message);
    }
}

/**
Check that `actual` is absent.

```
use soft_asserts::{is_nil, not_nil, Reporter, TestContext};

let t = TestContext::named("doc");
let missing: Option<&str> = None;

is_nil(&t, missing);
is_nil(&t, std::ptr::null::<u8>());
not_nil(&t, Some("hello"));
assert!(!t.failed());
```
*/
#[track_caller]
pub fn is_nil<R, N>(t: &R, actual: N)
where
    R: Reporter + ?Sized,
    N: Nullable + Debug,
{
    let message = failure_message!("value is not nil", actual debug: &actual);
    is_nil_with(t, actual, format_args!("{message}"))
}

#[track_caller]
pub fn not_nil_with<R, N>(t: &R, actual: N, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    N: Nullable,
{
    if actual.is_nil() {
        t.error(message);
    }
}

/// Check that `actual` is present.
#[track_caller]
pub fn not_nil<R, N>(t: &R, actual: N)
where
    R: Reporter + ?Sized,
    N: Nullable + Debug,
{
    let message = failure_message!("value is nil", actual debug: &actual);
    not_nil_with(t, actual, format_args!("{message}"))
}
