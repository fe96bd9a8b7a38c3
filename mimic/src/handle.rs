//! The [`handle`](self) module implements [`MockHandle`], the shared state of a
//! mocked object, and the interception routine every mocked method is routed
//! through.

use std::any::type_name;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::UnstubbedCall;
use crate::recorder::Recorder;
use crate::response::{fail, Answer, IntoResponse, Return};
use crate::stub::StubRegistry;
use crate::{
    ArgMatcher, Arguments, Capabilities, ConfigurationError, DefaultAnswer, Invocation, MethodId,
    MockSettings, Mockable, StubRule, TypeSignature,
};

/// Handle to the state of one mocked object.
///
/// The handle owns the interaction log and the stub registry of the mock.
/// Cloning the handle shares this state, so a test can keep a handle while the
/// mocked object itself is moved into the code under test.
#[derive(Clone)]
pub struct MockHandle {
    inner: Arc<Inner>,
}

struct Inner {
    id: usize,
    name: Arc<str>,
    capabilities: Capabilities,
    settings: MockSettings,
    recorder: Recorder,
    stubs: Mutex<StubRegistry>,
}

impl MockHandle {
    /// Create a new handle for a mock that provides the passed `capabilities`.
    pub fn new(capabilities: Capabilities, settings: MockSettings) -> Self {
        let id = next_mock_id();
        let name: Arc<str> = settings
            .get_name()
            .unwrap_or(capabilities.type_name())
            .into();

        tracing::debug!(mock = %name, id, methods = capabilities.methods().len(), "Created mock");

        Self {
            inner: Arc::new(Inner {
                id,
                name,
                capabilities,
                settings,
                recorder: Recorder::new(),
                stubs: Mutex::new(StubRegistry::new()),
            }),
        }
    }

    /// Create a new handle for the mocked type `T`.
    pub fn of<T: Mockable>(settings: MockSettings) -> Self {
        Self::new(T::capabilities(), settings)
    }

    /// Unique id of the mock.
    pub fn id(&self) -> usize {
        self.inner.id
    }

    /// Name of the mock used in logs and failure messages.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.inner.capabilities
    }

    pub fn settings(&self) -> &MockSettings {
        &self.inner.settings
    }

    /// Register a new stub.
    ///
    /// The stub is checked against the signature of its method and is
    /// preferred over all stubs registered before.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the mock has no such method or if the
    /// stub does not fit the signature of the method.
    pub fn register_stub(&self, rule: StubRule) -> Result<(), ConfigurationError> {
        let method = rule.pattern().method();
        let signature = self.inner.capabilities.get(&method).ok_or_else(|| {
            ConfigurationError::UnknownMethod {
                mock: self.name().into(),
                method: method.to_string(),
            }
        })?;

        if let Err(err) = rule.validate(signature) {
            tracing::debug!(mock = %self.name(), %err, "Rejected stub");

            return Err(err);
        }

        tracing::debug!(mock = %self.name(), stub = %rule, "Registered stub");

        self.inner.stubs.lock().register(rule);

        Ok(())
    }

    /// Start to define a stub for `method` with the passed argument `matchers`.
    pub fn when<R: 'static>(&self, method: MethodId, matchers: Vec<ArgMatcher>) -> StubBuilder<'_, R> {
        StubBuilder {
            handle: self,
            method,
            matchers,
            _marker: PhantomData,
        }
    }

    /// Intercept a call of `method` with the passed `args`.
    ///
    /// The call is recorded and answered by the most recently registered
    /// matching stub. Without a matching stub `default` is used to create the
    /// returned value.
    ///
    /// # Panics
    /// Panics with the configured failure if the matching stub is configured to
    /// fail, and if no stub matches and the call can not be answered with a
    /// default value.
    pub fn invoke<R: 'static>(&self, method: MethodId, args: Arguments, default: Option<fn() -> R>) -> R {
        let inner = &*self.inner;

        let invocation = inner
            .recorder
            .record(inner.id, inner.name.clone(), method, args);

        tracing::debug!(
            mock = %inner.name,
            %method,
            seq = invocation.seq(),
            args = %invocation.args(),
            "Recorded invocation"
        );

        let rule = inner.stubs.lock().resolve(&invocation);

        if let Some(rule) = rule {
            tracing::trace!(mock = %inner.name, seq = invocation.seq(), stub = %rule, "Resolved stub");

            match rule.response().respond(&invocation) {
                Ok(value) => match value.downcast::<R>() {
                    Ok(value) => return *value,
                    Err(_) => panic!(
                        "{}",
                        ConfigurationError::ReturnTypeMismatch {
                            method: method.to_string(),
                            expected: type_name::<R>(),
                            actual: rule
                                .response()
                                .value_type()
                                .map_or("<unknown>", TypeSignature::name),
                        }
                    ),
                },
                Err(failure) => {
                    tracing::debug!(mock = %inner.name, seq = invocation.seq(), %failure, "Raising configured failure");

                    panic!("{failure}");
                }
            }
        }

        let reason = match (inner.settings.get_default_answer(), default) {
            (DefaultAnswer::ReturnDefault, Some(default)) => return default(),
            (DefaultAnswer::ReturnDefault, None) => "the return type has no default value",
            (DefaultAnswer::Fail, _) => "the mock is configured to fail unstubbed calls",
        };

        panic!(
            "{}",
            UnstubbedCall {
                mock: inner.name.to_string(),
                call: invocation.to_string(),
                reason,
            }
        );
    }

    /// Get a snapshot of all calls the mock has received so far.
    pub fn snapshot(&self) -> Vec<Arc<Invocation>> {
        self.inner.recorder.snapshot()
    }

    pub(crate) fn recorder(&self) -> &Recorder {
        &self.inner.recorder
    }
}

impl Debug for MockHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MockHandle")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("invocations", &self.inner.recorder.len())
            .finish_non_exhaustive()
    }
}

/// Builder to define the response of a new stub.
///
/// The stub is registered as soon as one of the `will` or `then_*` methods is
/// called.
#[must_use = "The stub is only registered after a response was defined"]
pub struct StubBuilder<'a, R> {
    handle: &'a MockHandle,
    method: MethodId,
    matchers: Vec<ArgMatcher>,
    _marker: PhantomData<fn() -> R>,
}

impl<'a, R: 'static> StubBuilder<'a, R> {
    /// Register the stub with the passed `response`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the stub does not fit the signature of
    /// the mocked method.
    pub fn will<A: IntoResponse<R>>(self, response: A) -> Result<(), ConfigurationError> {
        let Self {
            handle,
            method,
            matchers,
            ..
        } = self;

        handle.register_stub(StubRule::new(method, matchers, response.into_response()))
    }

    /// Answer matching calls with a clone of `value`.
    ///
    /// # Errors
    /// See [`will`](Self::will).
    pub fn then_return(self, value: R) -> Result<(), ConfigurationError>
    where
        R: Clone + Send + Sync,
    {
        self.will(Return(value))
    }

    /// Fail matching calls with a [`ConfiguredFailure`](crate::ConfiguredFailure).
    ///
    /// # Errors
    /// See [`will`](Self::will).
    pub fn then_fail<M: Into<String>>(self, message: M) -> Result<(), ConfigurationError> {
        self.will(fail(message))
    }

    /// Answer matching calls with the value computed by `func`.
    ///
    /// # Errors
    /// See [`will`](Self::will).
    pub fn then_answer<F>(self, func: F) -> Result<(), ConfigurationError>
    where
        R: Send,
        F: Fn(&Invocation) -> R + Send + Sync + 'static,
    {
        self.will(Answer(func))
    }
}

impl<R> Debug for StubBuilder<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StubBuilder")
            .field("mock", &self.handle.name())
            .field("method", &self.method)
            .field("matchers", &self.matchers)
            .finish()
    }
}

fn next_mock_id() -> usize {
    NEXT_MOCK_ID.fetch_add(1, Ordering::Relaxed)
}

static NEXT_MOCK_ID: AtomicUsize = AtomicUsize::new(0);
