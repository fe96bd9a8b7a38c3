use std::any::{type_name, TypeId};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::{ArgValue, Matcher};

/// Type erased [`Matcher`] for a single argument of a mocked method.
///
/// The matcher remembers the argument type `T` it was created for. Values of
/// any other type are rejected.
pub struct ArgMatcher {
    type_id: TypeId,
    type_name: &'static str,
    inner: Box<dyn ErasedMatcher>,
}

impl ArgMatcher {
    /// Create a new [`ArgMatcher`] that applies `matcher` to arguments of type `T`.
    pub fn new<T, M>(matcher: M) -> Self
    where
        T: 'static,
        M: Matcher<T> + Send + Sync + 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            inner: Box::new(Typed {
                matcher,
                _marker: PhantomData::<fn(&T)>,
            }),
        }
    }

    /// Create a new [`ArgMatcher`] that accepts any value of type `T`.
    pub fn any_of<T: 'static>() -> Self {
        Self::new::<T, _>(super::any())
    }

    /// Returns `true` if the passed argument is of the expected type and
    /// accepted by the wrapped matcher.
    pub fn matches(&self, value: &dyn ArgValue) -> bool {
        ErasedMatcher::matches(&*self.inner, value)
    }

    /// Id of the argument type this matcher was created for.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the argument type this matcher was created for.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for ArgMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        ErasedMatcher::fmt(&*self.inner, f)
    }
}

impl Debug for ArgMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ArgMatcher<{}>(", self.type_name)?;
        ErasedMatcher::fmt(&*self.inner, f)?;
        write!(f, ")")
    }
}

trait ErasedMatcher: Send + Sync {
    fn matches(&self, value: &dyn ArgValue) -> bool;

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

struct Typed<T, M> {
    matcher: M,
    _marker: PhantomData<fn(&T)>,
}

impl<T, M> ErasedMatcher for Typed<T, M>
where
    T: 'static,
    M: Matcher<T> + Send + Sync,
{
    fn matches(&self, value: &dyn ArgValue) -> bool {
        value
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|value| self.matcher.matches(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(&self.matcher, f)
    }
}
