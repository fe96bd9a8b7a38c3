use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Ident, ItemStruct, Visibility};

use crate::misc::{format_handle, ident_mimic};

use super::method::MethodContext;

/// Typed handle of the mocked type.
///
/// The handle dereferences to the untyped `MockHandle` and adds one typed
/// `when` and `verify` method for each mocked method.
pub(crate) struct Handle {
    vis: Visibility,
    ident: Ident,
    ident_mock: Ident,
    methods: Vec<TokenStream>,
}

impl Handle {
    pub(crate) fn new(ty: &ItemStruct, methods: &[MethodContext]) -> Self {
        let mimic = ident_mimic();

        let mut counts = HashMap::<&Ident, usize>::new();
        for method in methods {
            *counts.entry(&method.ident).or_default() += 1;
        }

        let methods = methods
            .iter()
            .map(|m| m.render_handle(&mimic, counts[&m.ident] == 1))
            .collect();

        Self {
            vis: ty.vis.clone(),
            ident: format_handle(&ty.ident),
            ident_mock: ty.ident.clone(),
            methods,
        }
    }
}

impl ToTokens for Handle {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            vis,
            ident,
            ident_mock,
            methods,
        } = self;

        let mimic = ident_mimic();
        let doc = format!("Handle to stub and verify the calls of a [`{ident_mock}`].");

        tokens.extend(quote! {
            #[doc = #doc]
            #[derive(Clone, Debug)]
            #vis struct #ident(#mimic::MockHandle);

            impl #ident {
                #( #methods )*
            }

            impl ::std::ops::Deref for #ident {
                type Target = #mimic::MockHandle;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl ::std::convert::AsRef<#mimic::MockHandle> for #ident {
                fn as_ref(&self) -> &#mimic::MockHandle {
                    &self.0
                }
            }
        });
    }
}
