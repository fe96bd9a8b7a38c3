//! The [`invocation`](self) module implements the records that are created for
//! every call on a mocked object.

use std::any::{type_name, Any};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::MethodId;

/// Value that can be recorded as argument of an invocation.
///
/// Implemented for any type that is [`Any`], [`Debug`], [`Send`] and [`Sync`].
pub trait ArgValue: Any + Debug + Send + Sync {
    /// Get the value as [`Any`] to downcast it to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Get the name of the concrete type of the value.
    fn value_type_name(&self) -> &'static str;
}

impl<T> ArgValue for T
where
    T: Any + Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Ordered list of type erased arguments of an invocation.
#[derive(Default, Debug)]
pub struct Arguments {
    values: Vec<Box<dyn ArgValue>>,
}

impl Arguments {
    /// Create a new empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty argument list with space for `capacity` arguments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append `value` to the list.
    pub fn push<T: ArgValue>(&mut self, value: T) {
        self.values.push(Box::new(value));
    }

    /// Append `value` and return the list.
    #[must_use]
    pub fn with<T: ArgValue>(mut self, value: T) -> Self {
        self.push(value);

        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the argument at `index`, type erased.
    pub fn get_raw(&self, index: usize) -> Option<&dyn ArgValue> {
        self.values.get(index).map(|value| &**value)
    }

    /// Get the argument at `index` as `T`.
    ///
    /// Returns `None` if there is no argument at `index` or if it is not of type `T`.
    pub fn get<T: 'static>(&self, index: usize) -> Option<&T> {
        self.get_raw(index)?.as_any().downcast_ref::<T>()
    }

    /// Iterate over the type erased arguments.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ArgValue> + '_ {
        self.values.iter().map(|value| &**value)
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }

        Ok(())
    }
}

/// A single recorded call on a mocked object.
///
/// Invocations are immutable once they are recorded.
#[derive(Debug)]
pub struct Invocation {
    mock_id: usize,
    mock_name: Arc<str>,
    method: MethodId,
    args: Arguments,
    seq: u64,
}

impl Invocation {
    pub(crate) fn new(
        mock_id: usize,
        mock_name: Arc<str>,
        method: MethodId,
        args: Arguments,
        seq: u64,
    ) -> Self {
        Self {
            mock_id,
            mock_name,
            method,
            args,
            seq,
        }
    }

    /// Id of the mock that received the call.
    pub fn mock_id(&self) -> usize {
        self.mock_id
    }

    /// Name of the mock that received the call.
    pub fn mock_name(&self) -> &str {
        &self.mock_name
    }

    pub fn method(&self) -> MethodId {
        self.method
    }

    pub fn args(&self) -> &Arguments {
        &self.args
    }

    /// Get the argument at `index` as `T`.
    pub fn argument<T: 'static>(&self, index: usize) -> Option<&T> {
        self.args.get(index)
    }

    /// Sequence number of the call. Sequence numbers are unique and increase
    /// monotonically across all mocks.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{} {}.{}({})", self.seq, self.mock_name, self.method, self.args)
    }
}
