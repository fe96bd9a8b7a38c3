use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::Result as ParseResult;

use super::{handle::Handle, method::MethodContext, mock::Mock, parsed::Parsed};

/// Mocked implementation of a mock! macro
pub(crate) struct Mocked {
    mock: Mock,
    handle: Handle,
}

impl Mocked {
    pub(crate) fn new(parsed: Parsed) -> ParseResult<Self> {
        let Parsed { ty, impls } = parsed;

        let mut methods = Vec::new();
        for impl_ in &impls {
            for method in &impl_.methods {
                methods.push(MethodContext::new(&ty.ident, &impl_.trait_, method)?);
            }
        }

        let handle = Handle::new(&ty, &methods);
        let mock = Mock::new(ty, impls, methods);

        Ok(Self { mock, handle })
    }
}

impl ToTokens for Mocked {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { mock, handle } = self;

        tokens.extend(quote! {
            #mock
            #handle
        });
    }
}
