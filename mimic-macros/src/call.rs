use std::borrow::Cow;

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token::Comma,
    Expr, ExprCall, Path, Result as ParseResult, Token, Type,
};

use crate::misc::{format_verify_call, format_when_call, ident_mimic};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum CallMode {
    When,
    Verify,
}

pub(crate) fn exec(input: TokenStream, mode: CallMode) -> TokenStream {
    let mut call: Call = match parse2(input) {
        Ok(call) => call,
        Err(err) => {
            return err.to_compile_error();
        }
    };

    if mode == CallMode::When && (call.in_order.is_some() || call.cardinality.is_some()) {
        return syn::Error::new_spanned(
            &call.method,
            "when! does not accept an in-order verification or a cardinality",
        )
        .to_compile_error();
    }

    call.mode = mode;

    call.into_token_stream()
}

/// Parsed content of the `when!` and `verify!` macros:
///
/// `[in_order =>] obj [as Trait], method(matchers..) [, cardinality]`
struct Call {
    mode: CallMode,
    in_order: Option<Expr>,
    obj: Box<Expr>,
    as_trait: Option<Path>,
    method: Ident,
    args: Punctuated<Expr, Comma>,
    cardinality: Option<Expr>,
}

impl Parse for Call {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut obj = input.parse::<Expr>()?;

        let in_order = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;

            Some(std::mem::replace(&mut obj, input.parse()?))
        } else {
            None
        };

        let (obj, as_trait) = if let Expr::Cast(o) = obj {
            if let Type::Path(as_trait) = *o.ty {
                (o.expr, Some(as_trait.path))
            } else {
                return Err(input.error("Expect trait path"));
            }
        } else {
            (Box::new(obj), None)
        };

        input.parse::<Token![,]>()?;

        let call: ExprCall = input.parse()?;

        let method = if let Expr::Path(p) = *call.func {
            if let Some(method) = p.path.get_ident() {
                method.clone()
            } else {
                return Err(input.error("Expect method identifier"));
            }
        } else {
            return Err(input.error("Expect method identifier"));
        };

        let args = call.args;

        let mut cardinality = None;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;

            if !input.is_empty() {
                cardinality = Some(input.parse()?);
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(Self {
            mode: CallMode::When,
            in_order,
            obj,
            as_trait,
            method,
            args,
            cardinality,
        })
    }
}

impl ToTokens for Call {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            mode,
            in_order,
            obj,
            as_trait,
            method,
            args,
            cardinality,
        } = self;

        let mimic = ident_mimic();
        let args = args.iter().map(|a| {
            if a.to_token_stream().to_string() == "_" {
                Cow::Owned(Expr::Verbatim(quote!(#mimic::matcher::any())))
            } else {
                Cow::Borrowed(a)
            }
        });

        match mode {
            CallMode::When => {
                let method = format_when_call(method, as_trait.as_ref());

                tokens.extend(quote! {
                    #obj.#method(#( #args ),*)
                });
            }
            CallMode::Verify => {
                let method = format_verify_call(method, as_trait.as_ref());
                let cardinality = match cardinality {
                    Some(cardinality) => quote!(#cardinality),
                    None => quote!(#mimic::Cardinality::default()),
                };

                let check = match in_order {
                    Some(in_order) => quote!(in_order(&#in_order, #cardinality)),
                    None => quote!(times(#cardinality)),
                };

                tokens.extend(quote! {
                    #obj.#method(#( #args ),*).#check
                });
            }
        }

        #[cfg(feature = "debug")]
        println!("\n{mode:?}:\n{tokens:#}\n");
    }
}
