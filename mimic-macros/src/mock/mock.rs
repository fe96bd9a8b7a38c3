use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::ItemStruct;

use crate::misc::{format_handle, ident_mimic};

use super::{method::MethodContext, parsed::MockedImpl};

/// The mocked type itself, its constructors and its trait implementations.
pub(crate) struct Mock {
    ty: ItemStruct,
    impls: Vec<MockedImpl>,
    methods: Vec<MethodContext>,
}

impl Mock {
    pub(crate) fn new(ty: ItemStruct, impls: Vec<MockedImpl>, methods: Vec<MethodContext>) -> Self {
        Self { ty, impls, methods }
    }

    fn render_impls(&self, tokens: &mut TokenStream) {
        let mimic = ident_mimic();
        let ident = &self.ty.ident;

        for impl_ in &self.impls {
            let MockedImpl {
                attrs,
                unsafety,
                trait_,
                items,
                ..
            } = impl_;

            let methods = self
                .methods
                .iter()
                .filter(|m| &m.trait_ == trait_)
                .map(|m| m.render_impl(&mimic));

            tokens.extend(quote! {
                #( #attrs )*
                #unsafety impl #trait_ for #ident {
                    #( #items )*
                    #( #methods )*
                }
            });
        }
    }
}

impl ToTokens for Mock {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ItemStruct {
            attrs, vis, ident, ..
        } = &self.ty;

        let mimic = ident_mimic();
        let ident_handle = format_handle(ident);
        let type_name = ident.to_string();
        let signatures = self.methods.iter().map(|m| m.render_signature(&mimic));

        tokens.extend(quote! {
            #( #attrs )*
            #[derive(Clone, Debug)]
            #vis struct #ident {
                mock_handle: #mimic::MockHandle,
            }

            impl #ident {
                /// Create a new mocked object and the handle to stub and verify
                /// its calls.
                pub fn mock() -> (#ident_handle, Self) {
                    Self::mock_with(#mimic::MockSettings::new())
                }

                /// Create a new mocked object with the passed `settings`.
                pub fn mock_with(settings: #mimic::MockSettings) -> (#ident_handle, Self) {
                    let mock_handle = #mimic::MockHandle::of::<Self>(settings);

                    (#ident_handle(mock_handle.clone()), Self { mock_handle })
                }

                /// Get a new handle to stub and verify the calls of this object.
                pub fn mock_handle(&self) -> #ident_handle {
                    #ident_handle(self.mock_handle.clone())
                }
            }

            impl Default for #ident {
                fn default() -> Self {
                    Self::mock().1
                }
            }

            impl #mimic::Mockable for #ident {
                fn capabilities() -> #mimic::Capabilities {
                    #mimic::Capabilities::new(#type_name)
                        #( .with_method(#signatures) )*
                }
            }
        });

        self.render_impls(tokens);
    }
}
