//! The [`verify`](self) module checks the recorded calls of mocked objects
//! against expected calls.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::error::Calls;
use crate::{
    ArgMatcher, CallPattern, Cardinality, InOrder, MethodId, MockHandle, VerificationError,
};

impl MockHandle {
    /// Start to define a verification of calls of `method` matching `matchers`.
    pub fn verification(&self, method: MethodId, matchers: Vec<ArgMatcher>) -> Verification<'_> {
        Verification {
            handle: self,
            pattern: CallPattern::new(method, matchers),
        }
    }

    /// Verify that the mock received calls matching `pattern` as often as
    /// `cardinality` expects.
    ///
    /// The check is executed on a snapshot of the log taken when this method
    /// is called. On success the matching calls are marked as verified.
    ///
    /// # Errors
    /// Returns [`VerificationError::CountMismatch`] if the number of matching
    /// calls does not fit `cardinality`.
    pub fn verify(
        &self,
        pattern: &CallPattern,
        cardinality: Cardinality,
    ) -> Result<(), VerificationError> {
        let snapshot = self.snapshot();
        let matching = snapshot
            .iter()
            .filter(|invocation| pattern.matches(invocation))
            .map(|invocation| invocation.seq())
            .collect::<Vec<_>>();

        if cardinality.contains(matching.len()) {
            tracing::debug!(mock = %self.name(), %pattern, %cardinality, "Verification succeeded");

            self.recorder().mark_verified(matching);

            return Ok(());
        }

        let recorded = snapshot
            .iter()
            .filter(|invocation| invocation.method() == pattern.method());
        let err = VerificationError::CountMismatch {
            mock: self.name().into(),
            expected: pattern.to_string(),
            cardinality,
            actual: matching.len(),
            recorded: Calls::new("Recorded calls of this method", recorded),
        };

        tracing::debug!(mock = %self.name(), %err, "Verification failed");

        Err(err)
    }

    /// Verify that every call this mock received was matched by a successful
    /// verification.
    ///
    /// # Errors
    /// Returns [`VerificationError::UnverifiedInteractions`] listing the calls
    /// no verification has accounted for.
    pub fn verify_no_more_interactions(&self) -> Result<(), VerificationError> {
        let unverified = self.recorder().unverified();

        if unverified.is_empty() {
            return Ok(());
        }

        Err(VerificationError::UnverifiedInteractions {
            mock: self.name().into(),
            unverified: Calls::new("Unverified calls", unverified),
        })
    }
}

/// Verify that none of the passed mocks has unverified interactions.
///
/// # Errors
/// Returns the error of the first mock that has unverified interactions.
pub fn verify_no_more_interactions<'a, I>(handles: I) -> Result<(), VerificationError>
where
    I: IntoIterator<Item = &'a MockHandle>,
{
    handles
        .into_iter()
        .try_for_each(MockHandle::verify_no_more_interactions)
}

/// An expected call on a mocked object that still needs a cardinality.
///
/// Created by the typed `as_<trait>_verify_<method>` methods of a mock handle
/// or by [`MockHandle::verification`].
#[must_use = "A verification is only executed if one of its methods is called"]
pub struct Verification<'a> {
    handle: &'a MockHandle,
    pattern: CallPattern,
}

impl<'a> Verification<'a> {
    /// Verify that the call was received as often as `cardinality` expects.
    ///
    /// # Errors
    /// See [`MockHandle::verify`].
    pub fn times<C: Into<Cardinality>>(self, cardinality: C) -> Result<(), VerificationError> {
        self.handle.verify(&self.pattern, cardinality.into())
    }

    /// Verify that the call was received exactly once.
    ///
    /// # Errors
    /// See [`MockHandle::verify`].
    pub fn once(self) -> Result<(), VerificationError> {
        self.times(Cardinality::once())
    }

    /// Verify that the call was never received.
    ///
    /// # Errors
    /// See [`MockHandle::verify`].
    pub fn never(self) -> Result<(), VerificationError> {
        self.times(Cardinality::never())
    }

    /// Verify that the call was received at least `n` times.
    ///
    /// # Errors
    /// See [`MockHandle::verify`].
    pub fn at_least(self, n: usize) -> Result<(), VerificationError> {
        self.times(Cardinality::at_least(n))
    }

    /// Verify that the call was received at most `n` times.
    ///
    /// # Errors
    /// See [`MockHandle::verify`].
    pub fn at_most(self, n: usize) -> Result<(), VerificationError> {
        self.times(Cardinality::at_most(n))
    }

    /// Verify that the call was received as often as `cardinality` expects,
    /// after the calls verified before by `in_order`.
    ///
    /// # Errors
    /// See [`InOrder::verify`].
    pub fn in_order<C: Into<Cardinality>>(
        self,
        in_order: &InOrder,
        cardinality: C,
    ) -> Result<(), VerificationError> {
        in_order.verify(self.handle, &self.pattern, cardinality.into())
    }

    pub fn pattern(&self) -> &CallPattern {
        &self.pattern
    }
}

impl Debug for Verification<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Verification")
            .field("mock", &self.handle.name())
            .field("pattern", &self.pattern)
            .finish()
    }
}
