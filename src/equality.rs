use std::fmt::{self, Debug};

use crate::{failure_message, reporter::Reporter};

/**
Types with primitive equality: numbers, booleans, characters, strings and
raw pointers.

[`equal`] and [`not_equal`] are restricted to these types. Use
[`deep_equal`] for structs, collections and anything else compared by
content.

Raw pointers compare by address, so two different allocations holding the
same value are never [`equal`]. References compare the values they point
to.

Implement this trait for your own types if they have a cheap, flat
[`PartialEq`] (for instance, a fieldless enum).
*/
pub trait Comparable: PartialEq + Debug {}

macro_rules! comparable {
    ($($type:ty),* $(,)?) => {
        $(impl Comparable for $type {})*
    };
}

comparable! {
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    str, String,
}

impl<T: ?Sized> Comparable for *const T {}
impl<T: ?Sized> Comparable for *mut T {}
impl<T: Comparable + ?Sized> Comparable for &T {}
impl<T: Comparable> Comparable for Option<T> {}

/// Check that `expected == actual`, reporting `message` if not.
#[track_caller]
pub fn equal_with<R, T>(t: &R, expected: T, actual: T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    T: Comparable,
{
    if expected != actual {
        t.error(message);
    }
}

/**
Check that `expected == actual`.

```
use soft_asserts::{equal, Reporter, TestContext};

let t = TestContext::named("doc");
equal(&t, 42, 42);
equal(&t, "same", "same");
assert!(!t.failed());

equal(&t, 1, 2);
assert!(t.failed());
# t.finish().unwrap_err();
```
*/
#[track_caller]
pub fn equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: Comparable,
{
    let message = failure_message!(
        "values are not equal",
        expected debug: &expected,
        actual debug: &actual,
    );
    equal_with(t, expected, actual, format_args!("{message}"));
}

/// Check that `expected != actual`, reporting `message` if not.
#[track_caller]
pub fn not_equal_with<R, T>(t: &R, expected: T, actual: T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    T: Comparable,
{
    if expected == actual {
        t.error(message);
    }
}

/// Check that `expected != actual`.
#[track_caller]
pub fn not_equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: Comparable,
{
    let message = failure_message!(
        "values are equal",
        unexpected debug: &expected,
        actual debug: &actual,
    );
    not_equal_with(t, expected, actual, format_args!("{message}"));
}

#[track_caller]
pub fn is_true_with<R>(t: &R, actual: bool, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
{
    equal_with(t, true, actual, message)
}

/// Check that `actual` is `true`.
#[track_caller]
pub fn is_true<R>(t: &R, actual: bool)
where
    R: Reporter + ?Sized,
{
    let message = failure_message!("value is not true", actual: actual);
    is_true_with(t, actual, format_args!("{message}"))
}

#[track_caller]
pub fn is_false_with<R>(t: &R, actual: bool, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
{
    equal_with(t, false, actual, message)
}

/// Check that `actual` is `false`.
#[track_caller]
pub fn is_false<R>(t: &R, actual: bool)
where
    R: Reporter + ?Sized,
{
    let message = failure_message!("value is not false", actual: actual);
    is_false_with(t, actual, format_args!("{message}"))
}

/// Check that `expected` and `actual` are structurally equal, reporting
/// `message` if not.
#[track_caller]
pub fn deep_equal_with<R, T>(t: &R, expected: &T, actual: &T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    if expected != actual {
        t.error(message);
    }
}

/**
Check that `expected` and `actual` are structurally equal.

Unlike [`equal`], this works with any [`PartialEq`] type. Derived
implementations compare field by field and element by element, and smart
pointers (`Box`, `Rc`, `Arc`) compare the values they point to, so where
the values live doesn't matter.

```
use std::rc::Rc;
use soft_asserts::{deep_equal, Reporter, TestContext};

let t = TestContext::named("doc");
deep_equal(&t, &vec![Rc::new(1), Rc::new(2)], &vec![Rc::new(1), Rc::new(2)]);
assert!(!t.failed());
```
*/
#[track_caller]
pub fn deep_equal<R, T>(t: &R, expected: &T, actual: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    let message = failure_message!(
        "values are not structurally equal",
        expected debug: expected,
        actual debug: actual,
    );
    deep_equal_with(t, expected, actual, format_args!("{message}"))
}

/// Check that `expected` and `actual` are not structurally equal,
/// reporting `message` if they are.
#[track_caller]
pub fn not_deep_equal_with<R, T>(t: &R, expected: &T, actual: &T, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        t.error(message);
    }
}

/// Check that `expected` and `actual` are not structurally equal.
#[track_caller]
pub fn not_deep_equal<R, T>(t: &R, expected: &T, actual: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    let message = failure_message!(
        "values are structurally equal",
        unexpected debug: expected,
        actual debug: actual,
    );
    not_deep_equal_with(t, expected, actual, format_args!("{message}"))
}

#[cfg(test)]
mod tests {
    use std::{ptr, rc::Rc};

    use super::*;
    use crate::{Spy, TestContext};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
        friends: Vec<Person>,
    }

    fn alice(friend: &'static str, friend_age: u32) -> Person {
        Person {
            name: "Alice",
            age: 30,
            friends: vec![Person {
                name: friend,
                age: friend_age,
                friends: Vec::new(),
            }],
        }
    }

    mod passing {
        use super::*;

        #[test]
        fn equal_values() {
            let t = TestContext::new();
            equal(&t, 42, 42);
            equal(&t, "golang", "golang");
            equal(&t, String::from("owned"), String::from("owned"));
            equal(&t, Some('x'), Some('x'));
        }

        #[test]
        fn not_equal_values() {
            let t = TestContext::new();
            not_equal(&t, 1, 2);
            not_equal(&t, "a", "b");
        }

        #[test]
        fn booleans() {
            let t = TestContext::new();
            is_true(&t, true);
            is_false(&t, false);
        }

        #[test]
        fn deep_equal_ignores_identity() {
            let t = TestContext::new();
            let p1 = alice("Bob", 25);
            let p2 = alice("Bob", 25);

            deep_equal(&t, &p1, &p2);
            not_equal(&t, ptr::addr_of!(p1), ptr::addr_of!(p2));
        }

        #[test]
        fn deep_equal_through_indirection() {
            let t = TestContext::new();
            deep_equal(&t, &Rc::new(alice("Bob", 25)), &Rc::new(alice("Bob", 25)));
            deep_equal(&t, &Box::new([1, 2, 3]), &Box::new([1, 2, 3]));
            deep_equal(&t, &[1, 2, 3][..], &vec![1, 2, 3][..]);
        }

        #[test]
        fn not_deep_equal_nested_difference() {
            let t = TestContext::new();
            not_deep_equal(&t, &alice("Bob", 25), &alice("Bob", 26));
        }

        #[test]
        fn same_pointer_is_equal() {
            let t = TestContext::new();
            let p = alice("Bob", 25);
            equal(&t, ptr::addr_of!(p), ptr::addr_of!(p));
        }

        #[test]
        fn repeated_passes_stay_quiet() {
            let t = TestContext::new();
            for _ in 0..3 {
                equal(&t, 7, 7);
            }
            assert!(t.log_lines().is_empty());
        }
    }

    mod failing {
        use super::*;

        #[test]
        fn equal_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            equal(&spy, 1, 2);
        }

        #[test]
        fn not_equal_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            not_equal(&spy, "same", "same");
        }

        #[test]
        fn is_true_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            is_true(&spy, false);
        }

        #[test]
        fn is_false_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            is_false(&spy, true);
        }

        #[test]
        fn deep_equal_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            deep_equal(&spy, &alice("Bob", 25), &alice("Charlie", 25));
        }

        #[test]
        fn not_deep_equal_fails() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            not_deep_equal(&spy, &alice("Bob", 25), &alice("Bob", 25));
        }

        #[test]
        fn nan_is_not_equal_to_itself() {
            let t = TestContext::new();
            let spy = Spy::on(&t);
            let _guard = spy.expect_failure_on_drop();
            equal(&spy, f64::NAN, f64::NAN);
        }
    }

    #[test]
    fn default_message_names_values() {
        let t = TestContext::named("messages");
        equal(&t, 1, 2);

        let log = t.finish().unwrap_err().log.0;
        assert_eq!(log.len(), 1);
        assert!(log[0].contains("values are not equal"));
        assert!(log[0].contains("expected: 1"));
        assert!(log[0].contains("actual: 2"));
    }

    #[test]
    fn custom_message_replaces_default() {
        let t = TestContext::named("messages");
        equal_with(&t, 1, 2, format_args!("{} is not {}", "one", "two"));

        let log = t.finish().unwrap_err().log.0;
        assert!(log[0].ends_with(": one is not two"));
        assert!(!log[0].contains("values are not equal"));
    }

    #[test]
    fn repeated_failures_report_every_time() {
        let t = TestContext::named("repeated");
        for _ in 0..3 {
            is_true(&t, false);
        }
        assert_eq!(t.finish().unwrap_err().log.0.len(), 3);
    }

    #[test]
    fn failure_points_at_caller() {
        let t = TestContext::named("location");
        let line = line!() + 1;
        is_false(&t, true);

        let log = t.finish().unwrap_err().log.0;
        assert!(log[0].starts_with(&format!("{}:{}: ", file!(), line)));
    }
}
