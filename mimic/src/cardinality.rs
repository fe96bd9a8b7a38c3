//! The [`cardinality`](self) module contains different types and helpers to define
//! how often a call is expected to be received by a mocked object.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Defines the range of expected calls with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait. The default cardinality is [`once`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cardinality {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl Cardinality {
    /// Expect exactly `n` calls.
    pub fn exactly(n: usize) -> Self {
        n.into()
    }

    /// Expect exactly one call.
    pub fn once() -> Self {
        Self::exactly(1)
    }

    /// Expect no call at all.
    pub fn never() -> Self {
        Self::exactly(0)
    }

    /// Expect `n` or more calls.
    pub fn at_least(n: usize) -> Self {
        (n..).into()
    }

    /// Expect one or more calls.
    pub fn at_least_once() -> Self {
        Self::at_least(1)
    }

    /// Expect `n` or less calls.
    pub fn at_most(n: usize) -> Self {
        (..=n).into()
    }

    /// Returns `true` if `count` calls fulfill this cardinality.
    pub fn contains(&self, count: usize) -> bool {
        (self.lower, self.upper).contains(&count)
    }

    /// Smallest number of calls that fulfills this cardinality.
    pub fn min_count(&self) -> usize {
        match self.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x + 1,
        }
    }

    /// Largest number of calls that fulfills this cardinality, `None` if there
    /// is no upper limit.
    pub fn max_count(&self) -> Option<usize> {
        match self.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        }
    }

    /// Returns `true` if no number of calls fulfills this cardinality, like
    /// `..0` or `3..2`.
    pub fn is_empty(&self) -> bool {
        match (self.lower, self.upper) {
            (_, Bound::Excluded(0)) => true,
            (_, Bound::Unbounded) => false,
            _ => self.max_count().map_or(false, |max| self.min_count() > max),
        }
    }

    /// Returns `true` if this cardinality is only fulfilled by zero calls.
    pub fn is_never(&self) -> bool {
        self.contains(0) && !self.contains(1)
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::once()
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fn plural(n: usize) -> &'static str {
            if n == 1 {
                "time"
            } else {
                "times"
            }
        }

        if self.is_empty() {
            return write!(f, "an empty range of times");
        }

        match (self.min_count(), self.max_count()) {
            (_, Some(0)) => write!(f, "never"),
            (0, None) => write!(f, "any number of times"),
            (min, None) => write!(f, "at least {min} {}", plural(min)),
            (0, Some(max)) => write!(f, "at most {max} {}", plural(max)),
            (min, Some(max)) if min == max => write!(f, "exactly {min} {}", plural(min)),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}

impl From<usize> for Cardinality {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for Cardinality {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);

/// Expect exactly `n` calls. Shorthand for [`Cardinality::exactly`].
pub fn times(n: usize) -> Cardinality {
    Cardinality::exactly(n)
}

/// Shorthand for [`Cardinality::once`].
pub fn once() -> Cardinality {
    Cardinality::once()
}

/// Shorthand for [`Cardinality::never`].
pub fn never() -> Cardinality {
    Cardinality::never()
}

/// Shorthand for [`Cardinality::at_least`].
pub fn at_least(n: usize) -> Cardinality {
    Cardinality::at_least(n)
}

/// Shorthand for [`Cardinality::at_least_once`].
pub fn at_least_once() -> Cardinality {
    Cardinality::at_least_once()
}

/// Shorthand for [`Cardinality::at_most`].
pub fn at_most(n: usize) -> Cardinality {
    Cardinality::at_most(n)
}
