use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;
use syn::{
    parse_quote,
    visit_mut::{self, VisitMut},
    Lifetime, Path, Type, TypePath, TypeReference,
};

pub(crate) trait TypeEx {
    /// Replace `Self` with the mocked type and `Self::X` with
    /// `<Mock as Trait>::X`.
    fn replace_self_type(self, mock: &Ident, as_trait: &Path) -> Self;

    fn contains_impl_trait(&self) -> bool;

    /// Returns the first borrow inside the type that is not `'static`.
    fn find_borrow(&self) -> Option<TokenStream>;
}

impl TypeEx for Type {
    fn replace_self_type(mut self, mock: &Ident, as_trait: &Path) -> Self {
        struct Visitor<'a> {
            mock: &'a Ident,
            as_trait: &'a Path,
        }

        impl VisitMut for Visitor<'_> {
            fn visit_type_mut(&mut self, ty: &mut Type) {
                if let Type::Path(TypePath { qself: None, path }) = ty {
                    if path.segments.first().is_some_and(|s| s.ident == "Self") {
                        let mock = self.mock;
                        let as_trait = self.as_trait;

                        *ty = if path.segments.len() == 1 {
                            parse_quote!(#mock)
                        } else {
                            let rest = path.segments.iter().skip(1);

                            parse_quote!(<#mock as #as_trait> #( :: #rest )*)
                        };
                    }
                }

                visit_mut::visit_type_mut(self, ty);
            }
        }

        Visitor { mock, as_trait }.visit_type_mut(&mut self);

        self
    }

    fn contains_impl_trait(&self) -> bool {
        struct Visitor(bool);

        impl VisitMut for Visitor {
            fn visit_type_mut(&mut self, ty: &mut Type) {
                if matches!(ty, Type::ImplTrait(_)) {
                    self.0 = true;
                }

                visit_mut::visit_type_mut(self, ty);
            }
        }

        let mut visitor = Visitor(false);
        visitor.visit_type_mut(&mut self.clone());

        visitor.0
    }

    fn find_borrow(&self) -> Option<TokenStream> {
        struct Visitor(Option<TokenStream>);

        impl VisitMut for Visitor {
            fn visit_type_reference_mut(&mut self, r: &mut TypeReference) {
                let is_static = r.lifetime.as_ref().is_some_and(|l| l.ident == "static");
                if !is_static && self.0.is_none() {
                    self.0 = Some(r.to_token_stream());
                }

                visit_mut::visit_type_reference_mut(self, r);
            }

            fn visit_lifetime_mut(&mut self, l: &mut Lifetime) {
                if l.ident != "static" && self.0.is_none() {
                    self.0 = Some(l.to_token_stream());
                }
            }
        }

        let mut visitor = Visitor(None);
        visitor.visit_type_mut(&mut self.clone());

        visitor.0
    }
}
