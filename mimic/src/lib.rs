#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! `mimic` is a record, stub and verify test-double engine.
//!
//! A mocked type is declared with the [`mock!`] macro. Every call on the mocked
//! object is recorded by its [`MockHandle`], answered from the stubs registered
//! with [`when!`] and can be checked afterwards with [`verify!`] or an
//! [`InOrder`] verification.

extern crate self as mimic;

pub mod cardinality;
pub mod error;
pub mod fixture;
pub mod handle;
pub mod in_order;
pub mod invocation;
pub mod matcher;
pub mod pattern;
pub mod recorder;
pub mod response;
pub mod settings;
pub mod signature;
pub mod stub;
pub mod verify;

mod example;

pub use mimic_macros::{mock, verify, when};

pub use cardinality::{at_least, at_least_once, at_most, never, once, times, Cardinality};
pub use error::{ConfigurationError, ConfiguredFailure, VerificationError};
pub use fixture::{with_fixture, Fixture};
pub use handle::{MockHandle, StubBuilder};
pub use in_order::InOrder;
pub use invocation::{ArgValue, Arguments, Invocation};
pub use matcher::{ArgMatcher, Matcher};
pub use pattern::CallPattern;
pub use response::{IntoResponse, Response};
pub use settings::{DefaultAnswer, MockSettings};
pub use signature::{Capabilities, MethodId, MethodSignature, Mockable, ParamSignature, TypeSignature};
pub use stub::StubRule;
pub use verify::{verify_no_more_interactions, Verification};
