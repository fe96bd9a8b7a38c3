//! The [`pattern`](self) module implements [`CallPattern`], the method and
//! argument matchers shared by stubs and verifications.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{ArgMatcher, ConfigurationError, Invocation, MethodId, MethodSignature};

/// A method identity together with one [`ArgMatcher`] per argument.
#[derive(Debug)]
pub struct CallPattern {
    method: MethodId,
    matchers: Vec<ArgMatcher>,
}

impl CallPattern {
    /// Create a new pattern for `method` with the passed argument `matchers`.
    pub fn new(method: MethodId, matchers: Vec<ArgMatcher>) -> Self {
        Self { method, matchers }
    }

    pub fn method(&self) -> MethodId {
        self.method
    }

    pub fn matchers(&self) -> &[ArgMatcher] {
        &self.matchers
    }

    /// Returns `true` if the invocation targets the same method and every
    /// argument is accepted by the matcher at the same position.
    ///
    /// Matching stops at the first rejected argument.
    pub fn matches(&self, invocation: &Invocation) -> bool {
        let args = invocation.args();

        invocation.method() == self.method
            && args.len() == self.matchers.len()
            && self
                .matchers
                .iter()
                .zip(args.iter())
                .all(|(matcher, arg)| matcher.matches(arg))
    }

    /// Check that the pattern fits the passed method `signature`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the number of matchers or the type of
    /// a matcher does not fit the parameters of the method.
    pub fn validate(&self, signature: &MethodSignature) -> Result<(), ConfigurationError> {
        if self.matchers.len() != signature.arity() {
            return Err(ConfigurationError::ArityMismatch {
                method: self.method.to_string(),
                expected: signature.arity(),
                actual: self.matchers.len(),
            });
        }

        for (index, (matcher, param)) in self.matchers.iter().zip(signature.params()).enumerate() {
            if matcher.type_id() != param.ty().id() {
                return Err(ConfigurationError::ArgumentTypeMismatch {
                    method: self.method.to_string(),
                    index,
                    expected: param.ty().name(),
                    actual: matcher.type_name(),
                });
            }
        }

        Ok(())
    }
}

impl Display for CallPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.method)?;
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{matcher}")?;
        }
        write!(f, ")")
    }
}
