#![allow(clippy::module_inception)]
mod handle;
mod method;
mod mock;
mod mocked;
mod parsed;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse2;

use mocked::Mocked;
use parsed::Parsed;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let parsed = match parse2::<Parsed>(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    #[allow(clippy::let_and_return)]
    let tokens = match Mocked::new(parsed) {
        Ok(mocked) => mocked.into_token_stream(),
        Err(err) => err.to_compile_error(),
    };

    #[cfg(feature = "debug")]
    println!("\nmock!:\n{tokens:#}\n");

    tokens
}
