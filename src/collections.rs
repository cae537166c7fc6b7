use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

use crate::{failure_message, reporter::Reporter};

/// A key-value mapping, as far as the map checks are concerned.
pub trait Map {
    fn entry_count(&self) -> usize;
}

/// A [`Map`] that can be searched by a key of type `Q`. As with the std
/// maps, `Q` can be any borrowed form of the key type.
pub trait ContainsKey<Q: ?Sized>: Map {
    fn has_key(&self, key: &Q) -> bool;
}

impl<K, V, S> Map for HashMap<K, V, S> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S, Q> ContainsKey<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> Map for BTreeMap<K, V> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, Q> ContainsKey<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

#[track_caller]
pub fn map_contains_key_with<R, M, Q>(t: &R, map: &M, key: &Q, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    M: ContainsKey<Q> + ?Sized,
    Q: ?Sized,
{
    if !map.has_key(key) {
        t.error(message);
    }
}

/**
Check that `map` has an entry for `key`.

```
use std::collections::HashMap;
use soft_asserts::{map_contains_key, Reporter, TestContext};

let t = TestContext::named("doc");
let map = HashMap::from([("foo".to_owned(), "bar".to_owned())]);

map_contains_key(&t, &map, "foo");
assert!(!t.failed());

map_contains_key(&t, &map, "baz");
assert!(t.failed());
# t.finish().unwrap_err();
```
*/
#[track_caller]
pub fn map_contains_key<R, M, Q>(t: &R, map: &M, key: &Q)
where
    R: Reporter + ?Sized,
    M: ContainsKey<Q> + ?Sized,
    Q: Debug + ?Sized,
{
    let message = failure_message!("map does not contain key", key debug: key);
    map_contains_key_with(t, map, key, format_args!("{message}"))
}

#[track_caller]
pub fn map_does_not_contain_key_with<R, M, Q>(
    t: &R,
    map: &M,
    key: &Q,
    message: fmt::Arguments<'_>,
) where
    R: Reporter + ?Sized,
    M: ContainsKey<Q> + ?Sized,
    Q: ?Sized,
{
    if map.has_key(key) {
        t.error(message);
    }
}

/// Check that `map` has no entry for `key`.
#[track_caller]
pub fn map_does_not_contain_key<R, M, Q>(t: &R, map: &M, key: &Q)
where
    R: Reporter + ?Sized,
    M: ContainsKey<Q> + ?Sized,
    Q: Debug + ?Sized,
{
    let message = failure_message!("map contains disallowed key", key debug: key);
    map_does_not_contain_key_with(t, map, key, format_args!("{message}"))
}

#[track_caller]
pub fn empty_map_with<R, M>(t: &R, map: &M, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    M: Map + ?Sized,
{
    if map.entry_count() != 0 {
        t.error(message);
    }
}

/// Check that `map` has no entries.
#[track_caller]
pub fn empty_map<R, M>(t: &R, map: &M)
where
    R: Reporter + ?Sized,
    M: Map + Debug + ?Sized,
{
    let message = failure_message!("map is not empty", map debug: map);
    empty_map_with(t, map, format_args!("{message}"))
}

#[track_caller]
pub fn not_empty_map_with<R, M>(t: &R, map: &M, message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
    M: Map + ?Sized,
{
    if map.entry_count() == 0 {
        t.error(message);
    }
}

/// Check that `map` has at least one entry.
#[track_caller]
pub fn not_empty_map<R, M>(t: &R, map: &M)
where
    R: Reporter + ?Sized,
    M: Map + Debug + ?Sized,
{
    let message = failure_message!("map is empty", map debug: map);
    not_empty_map_with(t, map, format_args!("{message}"))
}

#[track_caller]
pub fn empty_slice_with<R, T>(t: &R, slice: &[T], message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
{
    if !slice.is_empty() {
        t.error(message);
    }
}

/// Check that `slice` has no elements.
#[track_caller]
pub fn empty_slice<R, T>(t: &R, slice: &[T])
where
    R: Reporter + ?Sized,
    T: Debug,
{
    let message = failure_message!(
        "slice is not empty",
        length: slice.len(),
        slice debug: slice,
    );
    empty_slice_with(t, slice, format_args!("{message}"))
}

#[track_caller]
pub fn not_empty_slice_with<R, T>(t: &R, slice: &[T], message: fmt::Arguments<'_>)
where
    R: Reporter + ?Sized,
{
    if slice.is_empty() {
        t.error(message);
    }
}

/// Check that `slice` has at least one element.
#[track_caller]
pub fn not_empty_slice<R, T>(t: &R, slice: &[T])
where
    R: Reporter + ?Sized,
{
    let message = failure_message!("slice is empty");
    not_empty_slice_with(t, slice, format_args!("{message}"))
}
