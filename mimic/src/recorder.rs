//! The [`recorder`](self) module implements the append-only log of calls a
//! mocked object has received.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Arguments, Invocation, MethodId};

/// Append-only, ordered log of the invocations of one mocked object.
///
/// Besides the invocations the recorder remembers which of them have been
/// matched by a successful verification.
#[derive(Default, Debug)]
pub struct Recorder {
    inner: Mutex<Inner>,
}

#[derive(Default, Debug)]
struct Inner {
    invocations: Vec<Arc<Invocation>>,
    verified: HashSet<u64>,
}

impl Recorder {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new invocation of `method` with the passed `args`.
    ///
    /// The sequence number is assigned while the log is locked, so the order
    /// of the log always matches the order of the sequence numbers.
    pub fn record(
        &self,
        mock_id: usize,
        mock_name: Arc<str>,
        method: MethodId,
        args: Arguments,
    ) -> Arc<Invocation> {
        let mut inner = self.inner.lock();

        let invocation = Arc::new(Invocation::new(
            mock_id,
            mock_name,
            method,
            args,
            next_sequence(),
        ));
        inner.invocations.push(invocation.clone());

        invocation
    }

    /// Get a snapshot of the current log.
    ///
    /// Invocations recorded after the snapshot was taken are not part of it.
    pub fn snapshot(&self) -> Vec<Arc<Invocation>> {
        self.inner.lock().invocations.clone()
    }

    /// Number of recorded invocations.
    pub fn len(&self) -> usize {
        self.inner.lock().invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark the invocations with the passed sequence numbers as verified.
    pub fn mark_verified<I>(&self, seqs: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.inner.lock().verified.extend(seqs);
    }

    /// Get all invocations that were not marked as verified yet.
    pub fn unverified(&self) -> Vec<Arc<Invocation>> {
        let inner = self.inner.lock();

        inner
            .invocations
            .iter()
            .filter(|invocation| !inner.verified.contains(&invocation.seq()))
            .cloned()
            .collect()
    }
}

/// Get the next sequence number.
///
/// Sequence numbers are shared by all recorders, so invocations of different
/// mocks can be merged into one ordered sequence.
pub fn next_sequence() -> u64 {
    NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);
