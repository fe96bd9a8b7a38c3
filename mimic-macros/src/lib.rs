#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::no_effect_underscore_binding,
    clippy::similar_names
)]

use call::CallMode;
use proc_macro::TokenStream;

mod call;
mod misc;
mod mock;

/// Generate a mocked type for one or more traits.
#[proc_macro]
pub fn mock(input: TokenStream) -> TokenStream {
    mock::exec(input.into()).into()
}

/// Start to define a stub for a method of a mocked type.
#[proc_macro]
pub fn when(input: TokenStream) -> TokenStream {
    call::exec(input.into(), CallMode::When).into()
}

/// Verify the calls a mocked type has received.
#[proc_macro]
pub fn verify(input: TokenStream) -> TokenStream {
    call::exec(input.into(), CallMode::Verify).into()
}
