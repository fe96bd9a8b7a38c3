use syn::{
    parse::{Parse, ParseStream, Result as ParseResult},
    parse2, Attribute, Error, Fields, ImplItem, ItemImpl, ItemStruct, Path, Token, TraitItemFn,
    Type,
};

use crate::misc::AttribsEx;

/// Parsed code inside the mock! macro
pub(crate) struct Parsed {
    pub ty: ItemStruct,
    pub impls: Vec<MockedImpl>,
}

/// A trait implementation of the mocked type
pub(crate) struct MockedImpl {
    pub attrs: Vec<Attribute>,
    pub unsafety: Option<Token![unsafe]>,
    pub trait_: Path,
    pub items: Vec<ImplItem>,
    pub methods: Vec<TraitItemFn>,
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut ty = input.parse::<ItemStruct>()?;

        if !matches!(ty.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                &ty.fields,
                "The mocked type must be declared as unit struct!",
            ));
        }

        if !ty.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &ty.generics,
                "Generic mocked types are not supported!",
            ));
        }

        ty.attrs = ty.attrs.remove_derives(&["Clone", "Debug", "Default"])?;

        let mut impls = Vec::new();
        while !input.is_empty() {
            let impl_ = input.parse::<ItemImpl>()?;

            match &*impl_.self_ty {
                Type::Path(p) if p.qself.is_none() && p.path.is_ident(&ty.ident) => (),
                _ => {
                    return Err(Error::new_spanned(
                        &impl_.self_ty,
                        "Implementing mock traits for different type in the same mock!{} block is not supported!",
                    ))
                }
            }

            impls.push(MockedImpl::new(impl_)?);
        }

        Ok(Self { ty, impls })
    }
}

impl MockedImpl {
    fn new(impl_: ItemImpl) -> ParseResult<Self> {
        let ItemImpl {
            attrs,
            unsafety,
            generics,
            trait_,
            items: impl_items,
            self_ty,
            ..
        } = impl_;

        if !generics.params.is_empty() {
            return Err(Error::new_spanned(
                generics,
                "Generic trait implementations are not supported!",
            ));
        }

        let trait_ = match trait_ {
            Some((None, path, _)) => path,
            _ => {
                return Err(Error::new_spanned(
                    self_ty,
                    "Expected trait implementation for the mocked type!",
                ))
            }
        };

        let mut items = Vec::new();
        let mut methods = Vec::new();

        for item in impl_items {
            match item {
                ImplItem::Verbatim(ts) => {
                    let method = parse2::<TraitItemFn>(ts)?;
                    if let Some(block) = &method.default {
                        return Err(Error::new_spanned(
                            block,
                            "Mocked methods must not have a body!",
                        ));
                    }

                    methods.push(method);
                }
                ImplItem::Fn(f) => {
                    return Err(Error::new_spanned(
                        f.block,
                        "Mocked methods must not have a body!",
                    ))
                }
                item @ (ImplItem::Type(_) | ImplItem::Const(_)) => items.push(item),
                item => {
                    return Err(Error::new_spanned(
                        item,
                        "Unsupported item in mocked trait implementation!",
                    ))
                }
            }
        }

        Ok(Self {
            attrs,
            unsafety,
            trait_,
            items,
            methods,
        })
    }
}
