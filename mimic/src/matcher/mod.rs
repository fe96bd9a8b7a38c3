//! The [`matcher`](self) module contains the argument matchers that decide if
//! a recorded argument fits a stub or a verification.

mod any;
mod closure;
mod compare;
mod erased;
mod range;
mod string;

use std::fmt::{Formatter, Result as FmtResult};

pub use any::{any, Any};
pub use closure::{arg_that, Closure};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use erased::ArgMatcher;
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is used to select the stub that answers a call and to
/// select the recorded calls a verification counts.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}
