mod contract;

use proc_macro2::TokenStream;
use syn::Attribute;

pub use contract::ClauseKind;

/// Attributes understood by [`requires`] and [`ensures`]. The outermost one expands the whole
/// contract, so the remaining ones are collected from the item rather than expanded on their own.
pub const CONTRACT_ATTRS: &[&str] = &["requires", "ensures"];

/// Crate names under which the attributes may be referred to with a path, e.g.
/// `#[contracts_rs::requires(..)]`.
const CONTRACT_CRATES: &[&str] = &["contracts_rs", "contracts_attrs"];

pub fn requires(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::expand(ClauseKind::Requires, attr, item).unwrap_or_else(|err| err.to_compile_error())
}

pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::expand(ClauseKind::Ensures, attr, item).unwrap_or_else(|err| err.to_compile_error())
}

fn path_is_one_of(path: &syn::Path, idents: &[&str]) -> bool {
    idents.iter().any(|ident| path.is_ident(ident))
}

fn contract_attr_kind(attr: &Attribute) -> Option<ClauseKind> {
    let path = attr.path();
    let last = path.segments.last()?;
    let qualified = match path.segments.len() {
        1 => path_is_one_of(path, CONTRACT_ATTRS),
        2 => CONTRACT_CRATES.iter().any(|krate| path.segments[0].ident == krate),
        _ => false,
    };
    if !qualified {
        return None;
    }
    if last.ident == "requires" {
        Some(ClauseKind::Requires)
    } else if last.ident == "ensures" {
        Some(ClauseKind::Ensures)
    } else {
        None
    }
}
