use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse_quote, Attribute, Error, FnArg, GenericParam, Pat, Path, Result as ParseResult,
    ReturnType, Signature, TraitItemFn, Type,
};

use crate::misc::{format_verify_call, format_when_call, AttribsEx, TypeEx};

/// Everything the code generation needs to know about one mocked method.
pub(crate) struct MethodContext {
    pub trait_: Path,
    pub trait_name: String,
    pub ident: Ident,
    pub attrs: Vec<Attribute>,
    pub sig: Signature,
    pub params: Vec<Param>,
    pub ret: Type,
    pub no_default: bool,
}

/// A parameter of a mocked method.
pub(crate) struct Param {
    pub ident: Ident,

    /// Type the argument is recorded as.
    pub owned: Type,

    /// Expression that converts the argument to the recorded value.
    pub record: TokenStream,
}

impl MethodContext {
    pub(crate) fn new(mock: &Ident, trait_: &Path, method: &TraitItemFn) -> ParseResult<Self> {
        let mut sig = method.sig.clone();

        if sig.receiver().is_none() {
            return Err(Error::new_spanned(
                &sig,
                "Associated functions without `self` receiver can not be mocked!",
            ));
        }

        if let Some(asyncness) = &sig.asyncness {
            return Err(Error::new_spanned(
                asyncness,
                "Async methods are not supported!",
            ));
        }

        if let Some(param) = sig
            .generics
            .params
            .iter()
            .find(|p| !matches!(p, GenericParam::Lifetime(_)))
        {
            return Err(Error::new_spanned(
                param,
                "Generic methods are not supported!",
            ));
        }

        let mut params = Vec::new();
        for (index, input) in sig.inputs.iter_mut().enumerate() {
            let FnArg::Typed(pat_type) = input else {
                continue;
            };

            if pat_type.ty.contains_impl_trait() {
                return Err(Error::new_spanned(
                    &pat_type.ty,
                    "`impl Trait` arguments are not supported!",
                ));
            }

            let ident = match &*pat_type.pat {
                Pat::Ident(p) => p.ident.clone(),
                _ => format_ident!("arg{index}"),
            };
            pat_type.pat = Box::new(parse_quote!(#ident));

            let borrowed = match &*pat_type.ty {
                Type::Reference(r) => r.elem.find_borrow(),
                ty => ty.find_borrow(),
            };
            if let Some(borrow) = borrowed {
                return Err(Error::new_spanned(
                    borrow,
                    "Arguments are recorded as owned values, only a top level `&T` may borrow!",
                ));
            }

            let (owned, record) = match &*pat_type.ty {
                Type::Reference(r) => {
                    let elem = (*r.elem).clone().replace_self_type(mock, trait_);

                    (
                        parse_quote!(<#elem as ::std::borrow::ToOwned>::Owned),
                        quote!(<#elem as ::std::borrow::ToOwned>::to_owned(#ident)),
                    )
                }
                ty => (ty.clone().replace_self_type(mock, trait_), quote!(#ident)),
            };

            params.push(Param {
                ident,
                owned,
                record,
            });
        }

        let ret = match &sig.output {
            ReturnType::Default => parse_quote!(()),
            ReturnType::Type(_, ty) if matches!(&**ty, Type::Reference(_)) => {
                return Err(Error::new_spanned(
                    ty,
                    "Mocked methods must return owned values!",
                ))
            }
            ReturnType::Type(_, ty) if ty.contains_impl_trait() => {
                return Err(Error::new_spanned(
                    ty,
                    "`impl Trait` return types are not supported!",
                ))
            }
            ReturnType::Type(_, ty) => (**ty).clone().replace_self_type(mock, trait_),
        };

        let trait_name = trait_
            .segments
            .last()
            .map(|s| s.ident.unraw().to_string())
            .unwrap_or_default();

        Ok(Self {
            trait_: trait_.clone(),
            trait_name,
            ident: sig.ident.clone(),
            attrs: method.attrs.clone().remove_mimic_attrs(),
            no_default: method.attrs.has_mimic_attr("no_default", &["no_default"])?,
            sig,
            params,
            ret,
        })
    }

    fn method_id(&self, mimic: &Ident) -> TokenStream {
        let trait_name = &self.trait_name;
        let name = self.ident.unraw().to_string();

        quote!(#mimic::MethodId::new(#trait_name, #name))
    }

    /// Implementation of the method inside the trait implementation of the
    /// mocked type.
    pub(crate) fn render_impl(&self, mimic: &Ident) -> TokenStream {
        let Self {
            attrs,
            sig,
            params,
            ret,
            no_default,
            ..
        } = self;

        let method_id = self.method_id(mimic);
        let count = params.len();
        let records = params.iter().map(|p| &p.record);
        let default = if *no_default {
            quote!(None)
        } else {
            quote!(Some(<#ret as ::std::default::Default>::default))
        };

        quote! {
            #( #attrs )*
            #sig {
                self.mock_handle.invoke::<#ret>(
                    #method_id,
                    #mimic::Arguments::with_capacity(#count) #( .with(#records) )*,
                    #default,
                )
            }
        }
    }

    /// Runtime signature of the method that is added to the capabilities of
    /// the mocked type.
    pub(crate) fn render_signature(&self, mimic: &Ident) -> TokenStream {
        let method_id = self.method_id(mimic);
        let ret = &self.ret;
        let params = self.params.iter().map(|p| {
            let owned = &p.owned;
            let name = p.ident.unraw().to_string();

            quote!(.with_param(#mimic::ParamSignature::of::<#owned>(#name)))
        });
        let without_default = self.no_default.then(|| quote!(.without_default()));

        quote! {
            #mimic::MethodSignature::new::<#ret>(#method_id)
                #( #params )*
                #without_default
        }
    }

    /// Typed `when` and `verify` methods of the mock handle.
    ///
    /// If `shortcut` is set the methods are additionally generated without
    /// the trait prefix.
    pub(crate) fn render_handle(&self, mimic: &Ident, shortcut: bool) -> TokenStream {
        let method_id = self.method_id(mimic);
        let ret = &self.ret;

        let types = (0..self.params.len())
            .map(|i| format_ident!("M{i}"))
            .collect::<Vec<_>>();
        let args = (0..self.params.len())
            .map(|i| format_ident!("m{i}"))
            .collect::<Vec<_>>();
        let bounds = self.params.iter().zip(&types).map(|(p, t)| {
            let owned = &p.owned;

            quote!(#t: #mimic::Matcher<#owned> + Send + Sync + 'static)
        });
        let bounds = quote!(#( #bounds, )*);
        let matchers = self.params.iter().zip(&args).map(|(p, a)| {
            let owned = &p.owned;

            quote!(#mimic::ArgMatcher::new::<#owned, _>(#a))
        });
        let matchers = quote!(vec![ #( #matchers ),* ]);

        let mut names = vec![(
            format_when_call(&self.ident, Some(&self.trait_)),
            format_verify_call(&self.ident, Some(&self.trait_)),
        )];
        if shortcut {
            names.push((
                format_when_call(&self.ident, None),
                format_verify_call(&self.ident, None),
            ));
        }

        let methods = names.into_iter().map(|(when, verify)| {
            quote! {
                pub fn #when<#( #types ),*>(&self, #( #args: #types ),*) -> #mimic::StubBuilder<'_, #ret>
                where
                    #bounds
                {
                    self.0.when::<#ret>(#method_id, #matchers)
                }

                pub fn #verify<#( #types ),*>(&self, #( #args: #types ),*) -> #mimic::Verification<'_>
                where
                    #bounds
                {
                    self.0.verification(#method_id, #matchers)
                }
            }
        });

        quote!(#( #methods )*)
    }
}
