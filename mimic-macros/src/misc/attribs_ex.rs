use quote::ToTokens;
use syn::{
    punctuated::Punctuated, token::Comma, Attribute, Error, Meta, Path, Result as ParseResult,
};

pub(crate) trait AttribsEx: Sized {
    /// Returns `true` if a `#[mimic(..)]` attribute contains `ident`. Any flag
    /// not listed in `known` is an error.
    fn has_mimic_attr(&self, ident: &str, known: &[&str]) -> ParseResult<bool>;
    fn remove_mimic_attrs(self) -> Self;
    fn remove_derives(self, idents: &[&str]) -> ParseResult<Self>;
}

impl AttribsEx for Vec<Attribute> {
    fn has_mimic_attr(&self, ident: &str, known: &[&str]) -> ParseResult<bool> {
        let mut ret = false;

        for attr in self.iter().filter(|a| a.path().is_ident("mimic")) {
            let Meta::List(ml) = &attr.meta else {
                return Err(Error::new_spanned(
                    attr,
                    "Expected a list of flags like `#[mimic(no_default)]`!",
                ));
            };

            let flags = ml.parse_args_with(Punctuated::<Path, Comma>::parse_separated_nonempty)?;
            for flag in &flags {
                if !known.iter().any(|k| flag.is_ident(k)) {
                    return Err(Error::new_spanned(
                        flag,
                        format!(
                            "Unknown `mimic` attribute, expected one of: {}",
                            known.join(", ")
                        ),
                    ));
                }

                ret |= flag.is_ident(ident);
            }
        }

        Ok(ret)
    }

    fn remove_mimic_attrs(mut self) -> Self {
        self.retain(|a| !a.path().is_ident("mimic"));

        self
    }

    fn remove_derives(self, idents: &[&str]) -> ParseResult<Self> {
        let mut ret = Vec::with_capacity(self.len());

        for mut attr in self {
            if attr.path().is_ident("derive") {
                if let Meta::List(ml) = &mut attr.meta {
                    let paths = ml.parse_args_with(Punctuated::<Path, Comma>::parse_terminated)?;
                    let paths = paths
                        .into_iter()
                        .filter(|p| !idents.iter().any(|i| p.is_ident(i)))
                        .collect::<Punctuated<Path, Comma>>();

                    if paths.is_empty() {
                        continue;
                    }

                    ml.tokens = paths.into_token_stream();
                }
            }

            ret.push(attr);
        }

        Ok(ret)
    }
}
