/*!
Non-fatal assertions for tests.

Every check in this crate takes a [`Reporter`] and, when its condition
doesn't hold, reports a failure to it and *returns*. The test keeps
running, so one run surfaces every failed check instead of only the
first.

Each check comes in two forms: a default form that describes the failure
with the values involved, and a `_with` form that takes a custom message
as [`format_args!`]:

```should_panic
use soft_asserts::{equal, equal_with, map_contains_key, TestContext};
use std::collections::HashMap;

let t = TestContext::new();
let map = HashMap::from([("foo", "bar")]);

equal(&t, 2 + 2, 5);
equal_with(&t, map.len(), 2, format_args!("map has {} entries", map.len()));
map_contains_key(&t, &map, &"baz");

// All three failures are reported when `t` goes out of scope
```

[`Spy`] wraps a reporter to observe failures without failing the real
test, which is how checks (including the ones in this crate) are tested.
*/

mod collections;
mod context;
mod equality;
mod errors;
mod failure_message;
mod nil;
mod panics;
mod reporter;
mod spy;
mod strings;

pub use collections::{
    empty_map, empty_map_with, empty_slice, empty_slice_with, map_contains_key,
    map_contains_key_with, map_does_not_contain_key, map_does_not_contain_key_with,
    not_empty_map, not_empty_map_with, not_empty_slice, not_empty_slice_with, ContainsKey, Map,
};
pub use context::{FailureLog, TestContext, TestFailure};
pub use equality::{
    deep_equal, deep_equal_with, equal, equal_with, is_false, is_false_with, is_true,
    is_true_with, not_deep_equal, not_deep_equal_with, not_equal, not_equal_with, Comparable,
};
pub use errors::{
    error_chain, error_is, error_is_not, error_is_not_with, error_is_with, error_matches,
    AsDynError,
};
pub use nil::{is_nil, is_nil_with, not_nil, not_nil_with, Nullable};
pub use panics::{
    does_not_panic, does_not_panic_with, get_panic_message, panics, panics_with, PanicPayload,
};
pub use reporter::Reporter;
pub use spy::{Expectation, Spy};
pub use strings::{
    string_contains, string_contains_with, string_does_not_contain,
    string_does_not_contain_with,
};
