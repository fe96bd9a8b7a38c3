//! The [`error`](self) module contains the errors that are reported by the
//! different parts of the engine.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::Cardinality;

/// Error that is raised when a stub is registered that does not fit the
/// signature of the mocked method.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigurationError {
    /// The mocked type does not provide a method with the requested name.
    #[error("Mock `{mock}` does not provide a method `{method}`")]
    UnknownMethod { mock: String, method: String },

    /// The number of argument matchers differs from the number of parameters.
    #[error("Stub for `{method}` has {actual} argument matcher(s), but the method takes {expected} argument(s)")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// A matcher was created for a different type than the parameter it is applied to.
    #[error("Argument matcher #{index} of stub for `{method}` expects `{actual}`, but the argument is of type `{expected}`")]
    ArgumentTypeMismatch {
        method: String,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// The response produces a value of a different type than the method returns.
    #[error("Stub for `{method}` produces `{actual}`, but the method returns `{expected}`")]
    ReturnTypeMismatch {
        method: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Error that is reported if the recorded interactions of one or more mocks
/// do not match the expected interactions.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum VerificationError {
    /// The call was not received the expected number of times.
    #[error("Expected `{mock}` to receive `{expected}` {cardinality}, but it was received {actual} time(s)\n{recorded}")]
    CountMismatch {
        mock: String,
        expected: String,
        cardinality: Cardinality,
        actual: usize,
        recorded: Calls,
    },

    /// The call was not found after the last call verified in order.
    #[error("Expected `{mock}` to receive `{expected}` {cardinality} in order after {after}, but found {actual} matching call(s)\n{recorded}")]
    NotInOrder {
        mock: String,
        expected: String,
        cardinality: Cardinality,
        after: String,
        actual: usize,
        recorded: Calls,
    },

    /// There are recorded calls no verification has accounted for.
    #[error("Found unverified interactions on `{mock}`\n{unverified}")]
    UnverifiedInteractions { mock: String, unverified: Calls },

    /// The mock was not registered with the in-order verification.
    #[error("Mock `{mock}` is not part of this in-order verification")]
    UnknownMock { mock: String },
}

/// Failure that was deliberately configured as response of a stub.
///
/// The failure is raised as panic when the stubbed method is called.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct ConfiguredFailure {
    message: String,
}

impl ConfiguredFailure {
    /// Create a new failure with the passed `message`.
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message the failure is raised with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A call to a mocked method that has no matching stub and no default value.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("No stub matches call `{call}` on `{mock}` and {reason}")]
pub struct UnstubbedCall {
    pub mock: String,
    pub call: String,
    pub reason: &'static str,
}

/// Error returned if a [`DefaultAnswer`](crate::DefaultAnswer) could not be
/// parsed from a string.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Unknown default answer `{0}`, expected `default` or `fail`")]
pub struct UnknownDefaultAnswer(pub String);

/// List of rendered calls that is attached to verification errors.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Calls {
    title: &'static str,
    calls: Vec<String>,
}

impl Calls {
    pub(crate) fn new<I>(title: &'static str, calls: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self {
            title,
            calls: calls.into_iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Rendered calls.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Display for Calls {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.calls.is_empty() {
            return write!(f, "{}: none", self.title);
        }

        write!(f, "{}:", self.title)?;
        for call in &self.calls {
            write!(f, "\n  - {call}")?;
        }

        Ok(())
    }
}
