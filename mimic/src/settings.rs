//! The [`settings`](self) module contains the configuration of a mocked object.

use std::env::var;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::UnknownDefaultAnswer;

/// Name of the environment variable that defines the process wide
/// [`DefaultAnswer`].
pub const DEFAULT_ANSWER_ENV: &str = "MIMIC_DEFAULT_ANSWER";

/// Defines how a mocked object answers a call no stub matches.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum DefaultAnswer {
    /// Return the default value of the return type (`None`, `0`, `false`,
    /// an empty collection, ...).
    #[default]
    ReturnDefault,

    /// Fail the call.
    Fail,
}

impl DefaultAnswer {
    /// Get the process wide default answer.
    ///
    /// It is read once from the [`MIMIC_DEFAULT_ANSWER`](DEFAULT_ANSWER_ENV)
    /// environment variable and falls back to [`DefaultAnswer::ReturnDefault`].
    pub fn global() -> Self {
        *GLOBAL_DEFAULT_ANSWER
    }
}

impl FromStr for DefaultAnswer {
    type Err = UnknownDefaultAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "return_default" => Ok(Self::ReturnDefault),
            "fail" => Ok(Self::Fail),
            _ => Err(UnknownDefaultAnswer(s.into())),
        }
    }
}

/// Settings a mocked object is created with.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MockSettings {
    name: Option<String>,
    default_answer: Option<DefaultAnswer>,
}

impl MockSettings {
    /// Create new settings that use the defaults for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name the mock is referred to in logs and failure messages.
    #[must_use]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());

        self
    }

    /// Set how the mock answers calls no stub matches.
    #[must_use]
    pub fn default_answer(mut self, answer: DefaultAnswer) -> Self {
        self.default_answer = Some(answer);

        self
    }

    /// Get the configured name, if any.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the configured default answer or the process wide default.
    pub fn get_default_answer(&self) -> DefaultAnswer {
        self.default_answer.unwrap_or_else(DefaultAnswer::global)
    }
}

static GLOBAL_DEFAULT_ANSWER: Lazy<DefaultAnswer> = Lazy::new(|| match var(DEFAULT_ANSWER_ENV) {
    Ok(value) => value.parse().unwrap_or_else(|err| {
        tracing::warn!(%err, "Ignoring invalid {}", DEFAULT_ANSWER_ENV);

        DefaultAnswer::default()
    }),
    Err(_) => DefaultAnswer::default(),
});
