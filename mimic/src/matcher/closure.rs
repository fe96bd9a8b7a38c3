use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a matcher from a user supplied predicate.
pub fn arg_that<F>(predicate: F) -> Closure<F> {
    Closure {
        predicate,
        description: None,
    }
}

/// Matcher that forwards to a user supplied predicate.
#[must_use]
pub struct Closure<F> {
    predicate: F,
    description: Option<String>,
}

impl<F> Closure<F> {
    /// Set the description that is used when the matcher is rendered in a
    /// failure message.
    pub fn describe<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());

        self
    }
}

impl<T, F> Matcher<T> for Closure<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.description {
            Some(description) => write!(f, "arg_that({description})"),
            None => write!(f, "arg_that(..)"),
        }
    }
}

impl<F> Debug for Closure<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Closure")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
