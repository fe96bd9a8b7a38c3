mod attribs_ex;
mod type_ex;

use convert_case::{Case, Casing};
use proc_macro2::Ident;
use quote::format_ident;
use syn::Path;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use type_ex::TypeEx;

pub(crate) fn format_when_call(method: &Ident, as_trait: Option<&Path>) -> Ident {
    format_call(method, as_trait, "when")
}

pub(crate) fn format_verify_call(method: &Ident, as_trait: Option<&Path>) -> Ident {
    format_call(method, as_trait, "verify")
}

fn format_call(method: &Ident, as_trait: Option<&Path>, mode: &str) -> Ident {
    if let Some(t) = as_trait {
        format_ident!("as_{}_{}_{}", format_trait(t), mode, method)
    } else {
        format_ident!("{}_{}", mode, method)
    }
}

fn format_trait(t: &Path) -> String {
    t.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("_")
        .replace(|c: char| !c.is_alphanumeric(), "_")
        .to_case(Case::Snake)
}

pub(crate) fn format_handle(ident: &Ident) -> Ident {
    format_ident!("{}Handle", ident)
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_mimic() -> Ident {
    format_ident!("mimic")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_mimic() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("mimic") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("mimic"),
    }
}
