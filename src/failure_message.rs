/// Compute the max of list of expressions.
///
/// This is given as a macro so that it can be fully evaluated in a const
/// context
///
/// It guarantees that:
///
/// - All the expressions are evaluated in order, if relevant
/// - Each expression is only evaluated once.
#[macro_export]
#[doc(hidden)]
macro_rules! max {
    ($value:expr $(,)?) => ($value);
    ($lhs:expr $(, $tail:expr)+ $(,)?) => {{
        let lhs = $lhs;
        let tail = $crate::max!($($tail),+);
        if lhs < tail { tail } else { lhs }
    }}
}

/// Get a partial format string for a failure_message key-value pair, with
/// `debug` selecting pretty debug formatting
#[macro_export]
#[doc(hidden)]
macro_rules! make_failure_message_fmt {
    () => {
        "\n {:>padding$}: {}"
    };
    (debug) => {
        "\n {:>padding$}: {:#?}"
    };
}

/// Build the default message of a failed check.
///
/// The message is a [`String`] in a standardized format, which includes:
///
/// - A static description of what went wrong.
/// - Optionally, key-value components of the failed check (for example,
///   the `expected` and `actual` values of a failed [`equal`][crate::equal]).
///   These components are visually aligned for an easier debugging
///   experience.
///
/// The location of the failure isn't part of the message; reporters record
/// it separately from the caller location.
///
/// # Example:
///
/// ```
/// use soft_asserts::failure_message;
///
/// let message = failure_message!(
///     "Check Message",
///     // Add key-value data to the message
///     key: 10,
///
///     // Use the "debug" keyword to debug-print something.
///     // Additionally, notice in the output that the key and long-key
///     // are visually aligned.
///     long_key debug: "Hello\tWorld!",
/// );
///
/// assert_eq!(
///     message,
///  r#"check failed: `(Check Message)`
///       key: 10
///  long_key: "Hello\tWorld!""#
/// );
/// ```
#[macro_export]
macro_rules! failure_message {
    ($message:literal $($(, $key:ident $($spec:ident)? : $value:expr)+)?) => {
        ::std::format!(
            concat!(
                "check failed: `({message})`",

                // This inserts a series of "\n{}: {}" fields for (key, value) pairs
                $($($crate::make_failure_message_fmt!($($spec)?),)+)?
            ),
            $($(stringify!($key), $value,)+)?
            message=$message,
            $(padding = $crate::max!($(stringify!($key).len(),)+),)?
        )
    };

    ($message:literal $($(, $key:ident $($spec:ident)? : $value:expr)+)? ,) => {
        $crate::failure_message!($message $($(, $key $($spec)?: $value)+)?)
    };
}
