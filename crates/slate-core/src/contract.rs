//! Precondition checks for programmer errors.
//!
//! Slate distinguishes two failure classes. External resource failures
//! (a file that cannot be opened, a short write) are returned as `Result`s.
//! Contract violations (a null pointer linked with a non-zero size, an
//! out-of-range position, reading into a read-only view) are bugs in the
//! calling code and are reported through [`contract!`](crate::contract!).
//!
//! Checks are active when `debug_assertions` is on or when the
//! `contract-checks` feature is enabled. Every test suite in the workspace
//! enables the feature. With both off the checks compile out: operations
//! stay memory safe, but their results for violated preconditions are
//! unspecified.

use std::fmt;

/// Whether contract checks are compiled into this build.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "contract-checks"));

/// Check a precondition, panicking with a `contract violation:` message when
/// it does not hold and checks are [`ENABLED`](crate::contract::ENABLED).
///
/// ```should_panic
/// slate_core::contract!(1 + 1 == 3, "arithmetic is broken: {}", 2);
/// ```
#[macro_export]
macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::contract::ENABLED && !($cond) {
            $crate::contract::violated(::std::format_args!($($arg)+));
        }
    };
}

/// Report a contract violation unconditionally.
///
/// Used directly for operations that are never valid, such as reading a
/// read-only view from a stream.
#[cold]
#[track_caller]
pub fn violated(args: fmt::Arguments<'_>) -> ! {
    panic!("contract violation: {args}")
}
