//! The [`in_order`](self) module contains [`InOrder`], a verification that
//! checks the order of calls across one or more mocked objects.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Calls;
use crate::{CallPattern, Cardinality, Invocation, MockHandle, VerificationError};

/// Verifies that calls were received in a certain order.
///
/// The in-order verification keeps a cursor on the merged log of all registered
/// mocks. Each successful verification consumes the matching calls after the
/// cursor and moves the cursor behind the last consumed call. The next
/// verification only sees the calls that were received after that point.
///
/// A verification with [`once`](Cardinality::once) consumes the first matching
/// call after the cursor. Any other cardinality counts all matching calls after
/// the cursor, checks the count against the cardinality and consumes all of
/// them. A verification with [`never`](Cardinality::never) does not move the
/// cursor.
#[must_use]
#[derive(Clone)]
pub struct InOrder {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    mocks: Vec<MockHandle>,
    cursor: Option<u64>,
    last: Option<String>,
}

impl InOrder {
    /// Create a new in-order verification for the passed mocks.
    pub fn new<'a, I>(handles: I) -> Self
    where
        I: IntoIterator<Item = &'a MockHandle>,
    {
        let mocks = handles.into_iter().cloned().collect();

        Self {
            inner: Arc::new(Mutex::new(Inner {
                mocks,
                cursor: None,
                last: None,
            })),
        }
    }

    /// Verify that `handle` received calls matching `pattern` after the calls
    /// verified before, as often as `cardinality` expects.
    ///
    /// # Errors
    /// Returns [`VerificationError::UnknownMock`] if `handle` was not passed to
    /// [`new`](Self::new) and [`VerificationError::NotInOrder`] if not enough
    /// matching calls were found after the cursor.
    pub fn verify(
        &self,
        handle: &MockHandle,
        pattern: &CallPattern,
        cardinality: Cardinality,
    ) -> Result<(), VerificationError> {
        let mut inner = self.inner.lock();

        if !inner.mocks.iter().any(|mock| mock.id() == handle.id()) {
            return Err(VerificationError::UnknownMock {
                mock: handle.name().into(),
            });
        }

        let remaining = inner.remaining();
        let matching = remaining
            .iter()
            .filter(|invocation| invocation.mock_id() == handle.id() && pattern.matches(invocation))
            .collect::<Vec<_>>();

        let (ok, taken) = if cardinality == Cardinality::once() {
            (!matching.is_empty(), matching.len().min(1))
        } else {
            (cardinality.contains(matching.len()), matching.len())
        };

        if !ok {
            let err = VerificationError::NotInOrder {
                mock: handle.name().into(),
                expected: pattern.to_string(),
                cardinality,
                after: inner
                    .last
                    .as_ref()
                    .map_or_else(|| "the start".into(), |last| format!("`{last}`")),
                actual: matching.len(),
                recorded: Calls::new("Calls after the last verified call", &remaining),
            };

            tracing::debug!(mock = %handle.name(), %err, "In-order verification failed");

            return Err(err);
        }

        let consumed = &matching[..taken];
        if let Some(last) = consumed.last() {
            inner.cursor = Some(last.seq());
            inner.last = Some(last.to_string());
        }

        handle
            .recorder()
            .mark_verified(consumed.iter().map(|invocation| invocation.seq()));

        tracing::debug!(
            mock = %handle.name(),
            %pattern,
            %cardinality,
            consumed = taken,
            "In-order verification succeeded"
        );

        Ok(())
    }
}

impl Inner {
    /// Merged log of all registered mocks after the cursor, ordered by the
    /// sequence number of the calls.
    fn remaining(&self) -> Vec<Arc<Invocation>> {
        let mut ret = self
            .mocks
            .iter()
            .flat_map(MockHandle::snapshot)
            .filter(|invocation| self.cursor.map_or(true, |cursor| invocation.seq() > cursor))
            .collect::<Vec<_>>();

        ret.sort_by_key(|invocation| invocation.seq());

        ret
    }
}

impl Debug for InOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let inner = self.inner.lock();

        f.debug_struct("InOrder")
            .field(
                "mocks",
                &inner.mocks.iter().map(MockHandle::name).collect::<Vec<_>>(),
            )
            .field("cursor", &inner.cursor)
            .finish()
    }
}
