//! The [`stub`](self) module implements the stub registry of a mocked object.
//!
//! Stubs are stored per method. A new stub is inserted in front of all stubs
//! registered before, so the most recently registered stub that matches a call
//! wins.

use std::collections::{HashMap, VecDeque};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::{
    ArgMatcher, CallPattern, ConfigurationError, Invocation, MethodId, MethodSignature, Response,
};

/// A programmed response for calls that match a [`CallPattern`].
///
/// Rules are immutable once they are registered.
#[derive(Debug)]
pub struct StubRule {
    pattern: CallPattern,
    response: Response,
}

impl StubRule {
    /// Create a new rule that answers calls of `method` matching `matchers`
    /// with `response`.
    pub fn new(method: MethodId, matchers: Vec<ArgMatcher>, response: Response) -> Self {
        Self {
            pattern: CallPattern::new(method, matchers),
            response,
        }
    }

    pub fn pattern(&self) -> &CallPattern {
        &self.pattern
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Check that this rule fits the passed method `signature`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the matchers do not fit the
    /// parameters of the method or if the response produces a value of a
    /// different type than the method returns.
    pub fn validate(&self, signature: &MethodSignature) -> Result<(), ConfigurationError> {
        self.pattern.validate(signature)?;

        match self.response.value_type() {
            Some(ty) if ty != signature.returns() => Err(ConfigurationError::ReturnTypeMismatch {
                method: signature.id().to_string(),
                expected: signature.returns().name(),
                actual: ty.name(),
            }),
            _ => Ok(()),
        }
    }
}

impl Display for StubRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} => {:?}", self.pattern, self.response)
    }
}

/// Registry of all stubs of one mocked object.
#[derive(Default, Debug)]
pub struct StubRegistry {
    rules: HashMap<MethodId, VecDeque<Arc<StubRule>>>,
}

impl StubRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `rule` at the head of the rule list of its method.
    pub fn register(&mut self, rule: StubRule) {
        self.rules
            .entry(rule.pattern.method())
            .or_default()
            .push_front(Arc::new(rule));
    }

    /// Find the most recently registered rule that matches `invocation`.
    pub fn resolve(&self, invocation: &Invocation) -> Option<Arc<StubRule>> {
        self.rules
            .get(&invocation.method())?
            .iter()
            .find(|rule| rule.pattern.matches(invocation))
            .cloned()
    }

    /// Number of rules registered for `method`.
    pub fn count(&self, method: &MethodId) -> usize {
        self.rules.get(method).map_or(0, VecDeque::len)
    }
}
