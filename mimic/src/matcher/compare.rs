use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::Matcher;

macro_rules! impl_matcher {
    ($type:ident, $method:ident, $fmt:tt, |$expected:ident, $value:ident| $check:expr, $($bound:tt)+) => {
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[must_use]
        #[derive(Debug, Clone)]
        pub struct $type<T>(pub T);

        impl<T, X> Matcher<X> for $type<T>
        where
            T: Debug,
            $($bound)+
        {
            fn matches(&self, value: &X) -> bool {
                let $expected = &self.0;
                let $value = value;

                $check
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_matcher!(Eq, eq, "eq({:?})", |expected, value| expected == value, T: PartialEq<X>);
impl_matcher!(Ne, ne, "ne({:?})", |expected, value| expected != value, T: PartialEq<X>);

impl_matcher!(Lt, lt, "lt({:?})", |expected, value| value < expected, X: PartialOrd<T>);
impl_matcher!(Le, le, "le({:?})", |expected, value| value <= expected, X: PartialOrd<T>);
impl_matcher!(Gt, gt, "gt({:?})", |expected, value| value > expected, X: PartialOrd<T>);
impl_matcher!(Ge, ge, "ge({:?})", |expected, value| value >= expected, X: PartialOrd<T>);
