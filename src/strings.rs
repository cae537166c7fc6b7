use std::fmt;

use crate::{failure_message, reporter::Reporter};

#[track_caller]
pub fn string_contains_with<R>(t: &R, haystack: &str, needle: &str, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
{
    if !haystack.contains(needle) {
        t.error(message);
    }
}

/**
Check that `haystack` contains the substring `needle`.

```
use soft_asserts::{string_contains, Reporter, TestContext};

let t = TestContext::named("doc");
string_contains(&t, "golang testing helpers", "testing");
assert!(!t.failed());

string_contains(&t, "golang testing helpers", "python");
assert!(t.failed());
# t.finish().unwrap_err();
```
*/
#[track_caller]
pub fn string_contains<R>(t: &R, haystack: &str, needle: &str)
where
    R: Reporter + ?Sized,
{
    let message = failure_message!(
        "string does not contain substring",
        string debug: haystack,
        substring debug: needle,
    );
    string_contains_with(t, haystack, needle, format_args!("{message}"))
}

#[track_caller]
pub fn string_does_not_contain_with<R>(
    t: &R,
    haystack: &str,
    needle: &str,
    message: fmt::Arguments<'_>,
) where
    R: Reporter + ?Sized,
{
    if haystack.contains(needle) {
        t.error(message);
    }
}

/// Check that `haystack` doesn't contain the substring `needle`.
#[track_caller]
pub fn string_does_not_contain<R>(t: &R, haystack: &str, needle: &str)
where
    R: Reporter + ?Sized,
{
    let message = failure_message!(
        "string contains disallowed substring",
        string debug: haystack,
        substring debug: needle,
    );
    string_does_not_contain_with(t, haystack, needle, format_args!("{message}"))
}
