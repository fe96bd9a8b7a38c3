//! The [`response`](self) module contains the responses a stub may answer a
//! call with: a fixed value, a configured failure or a computed answer.

use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::{ConfiguredFailure, Invocation, TypeSignature};

type ValueFn = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;
type AnswerFn = Arc<dyn Fn(&Invocation) -> Box<dyn Any + Send> + Send + Sync>;

/// Type erased response of a stub.
#[derive(Clone)]
pub enum Response {
    /// Return a clone of a fixed value.
    Return { value: ValueFn, ty: TypeSignature },

    /// Raise the configured failure.
    Fail(ConfiguredFailure),

    /// Compute the returned value from the invocation.
    Answer { answer: AnswerFn, ty: TypeSignature },
}

impl Response {
    /// Type of the value this response produces, `None` for [`Response::Fail`].
    pub fn value_type(&self) -> Option<&TypeSignature> {
        match self {
            Self::Return { ty, .. } | Self::Answer { ty, .. } => Some(ty),
            Self::Fail(_) => None,
        }
    }

    /// Execute the response for the passed `invocation`.
    ///
    /// # Errors
    /// Returns the [`ConfiguredFailure`] if this response is [`Response::Fail`].
    pub fn respond(&self, invocation: &Invocation) -> Result<Box<dyn Any + Send>, ConfiguredFailure> {
        match self {
            Self::Return { value, .. } => Ok(value()),
            Self::Fail(failure) => Err(failure.clone()),
            Self::Answer { answer, .. } => Ok(answer(invocation)),
        }
    }
}

impl Debug for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Return { ty, .. } => write!(f, "Return<{}>", ty.name()),
            Self::Fail(failure) => write!(f, "Fail({:?})", failure.message()),
            Self::Answer { ty, .. } => write!(f, "Answer<{}>", ty.name()),
        }
    }
}

/// Trait for everything that can be turned into the [`Response`] of a stub for
/// a method returning `R`.
pub trait IntoResponse<R> {
    /// Convert `self` into a type erased [`Response`].
    fn into_response(self) -> Response;
}

impl<R> IntoResponse<R> for Response {
    fn into_response(self) -> Response {
        self
    }
}

/// Creates a [`Return`] response that returns a clone of `value` on every call.
pub fn return_<T>(value: T) -> Return<T> {
    Return(value)
}

/// Response that returns a clone of the passed value `T` when called.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Return<T>(pub T);

impl<T> IntoResponse<T> for Return<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn into_response(self) -> Response {
        let value = self.0;

        Response::Return {
            value: Arc::new(move || -> Box<dyn Any + Send> { Box::new(value.clone()) }),
            ty: TypeSignature::of::<T>(),
        }
    }
}

/// Creates a [`Fail`] response that raises a [`ConfiguredFailure`] with `message`.
pub fn fail<M: Into<String>>(message: M) -> Fail {
    Fail(ConfiguredFailure::new(message))
}

/// Response that raises a [`ConfiguredFailure`] when called.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fail(pub ConfiguredFailure);

impl<R> IntoResponse<R> for Fail {
    fn into_response(self) -> Response {
        Response::Fail(self.0)
    }
}

/// Creates an [`Answer`] response that calls `func` with the invocation.
pub fn answer<F>(func: F) -> Answer<F> {
    Answer(func)
}

/// Response that computes the returned value from the invocation.
#[derive(Debug, Clone, Copy)]
pub struct Answer<F>(pub F);

impl<R, F> IntoResponse<R> for Answer<F>
where
    R: Send + 'static,
    F: Fn(&Invocation) -> R + Send + Sync + 'static,
{
    fn into_response(self) -> Response {
        let func = self.0;

        Response::Answer {
            answer: Arc::new(move |invocation: &Invocation| -> Box<dyn Any + Send> {
                Box::new(func(invocation))
            }),
            ty: TypeSignature::of::<R>(),
        }
    }
}
