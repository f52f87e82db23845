use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{ToTokens, quote, quote_spanned};
use syn::{
    Expr, ItemFn, LitStr, Macro, ReturnType, Token,
    parse::{ParseStream, Parser},
    spanned::Spanned,
    visit_mut::{self, VisitMut},
};

use crate::contract_attr_kind;

/// Macros that get the name of the enclosing function filled in.
const LOOP_CONTRACT_MACROS: &[&str] = &["invariant", "decreases"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    Requires,
    Ensures,
}

struct Clause {
    kind: ClauseKind,
    cond: Expr,
    /// Human readable description used in the violation message instead of the condition's
    /// source text.
    msg: Option<LitStr>,
    span: Span,
}

impl Clause {
    fn parse(kind: ClauseKind, tokens: TokenStream) -> syn::Result<Clause> {
        let span = tokens.span();
        let parser = |input: ParseStream| -> syn::Result<Clause> {
            let cond: Expr = input.parse()?;
            let mut msg = None;
            if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
                msg = Some(input.parse::<LitStr>()?);
                input.parse::<Option<Token![,]>>()?;
            }
            Ok(Clause { kind, cond, msg, span })
        };
        parser.parse2(tokens)
    }

    fn text(&self) -> String {
        match &self.msg {
            Some(msg) => msg.value(),
            None => self.cond.to_token_stream().to_string(),
        }
    }

    fn render(&self, function: &str) -> TokenStream {
        let cond = &self.cond;
        let text = self.text();
        let check = match self.kind {
            ClauseKind::Requires => quote!(requires),
            ClauseKind::Ensures => quote!(ensures),
        };
        quote_spanned! {self.span=>
            ::contracts_rs::check::#check(#function, #text, #cond);
        }
    }
}

pub(crate) fn expand(
    kind: ClauseKind,
    attr: TokenStream,
    item: TokenStream,
) -> syn::Result<TokenStream> {
    let mut clauses = vec![Clause::parse(kind, attr)?];
    let mut item_fn = syn::parse2::<ItemFn>(item)?;

    if let Some(asyncness) = &item_fn.sig.asyncness {
        return Err(syn::Error::new(asyncness.span(), "contracts are not supported on async fns"));
    }
    if let Some(constness) = &item_fn.sig.constness {
        return Err(syn::Error::new(constness.span(), "contracts are not supported on const fns"));
    }

    let mut attrs = Vec::with_capacity(item_fn.attrs.len());
    for attr in std::mem::take(&mut item_fn.attrs) {
        match contract_attr_kind(&attr) {
            Some(kind) => {
                let tokens = attr.meta.require_list()?.tokens.clone();
                clauses.push(Clause::parse(kind, tokens)?);
            }
            None => attrs.push(attr),
        }
    }
    item_fn.attrs = attrs;

    let function = item_fn.sig.ident.to_string();
    FillFunctionName { function: &function }.visit_block_mut(&mut item_fn.block);

    Ok(render(item_fn, &function, &clauses))
}

fn render(item_fn: ItemFn, function: &str, clauses: &[Clause]) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = item_fn;
    let span = sig.span();

    let requires = clauses
        .iter()
        .filter(|clause| clause.kind == ClauseKind::Requires)
        .map(|clause| clause.render(function));
    let ensures: Vec<_> = clauses
        .iter()
        .filter(|clause| clause.kind == ClauseKind::Ensures)
        .map(|clause| clause.render(function))
        .collect();

    if ensures.is_empty() {
        return quote_spanned! {span=>
            #(#attrs)*
            #vis #sig {
                #(#requires)*
                #block
            }
        };
    }

    let ret = match &sig.output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => ty.to_token_stream(),
    };
    quote_spanned! {span=>
        #(#attrs)*
        #vis #sig {
            #(#requires)*
            #[allow(clippy::redundant_closure_call, clippy::let_unit_value)]
            let result: #ret = (|| -> #ret #block)();
            if ::contracts_rs::check::check_ensures() {
                #(#ensures)*
            }
            result
        }
    }
}

/// Rewrites `invariant!(..)` and `decreases!(..)` inside a contract-annotated function so the
/// violation names the function instead of the module.
struct FillFunctionName<'a> {
    function: &'a str,
}

impl VisitMut for FillFunctionName<'_> {
    fn visit_macro_mut(&mut self, mac: &mut Macro) {
        let is_loop_contract = mac
            .path
            .segments
            .last()
            .is_some_and(|segment| LOOP_CONTRACT_MACROS.iter().any(|name| segment.ident == name));
        if is_loop_contract && !starts_with_at(&mac.tokens) {
            let function = self.function;
            let tokens = &mac.tokens;
            mac.tokens = quote!(@fn #function; #tokens);
        }
        visit_mut::visit_macro_mut(self, mac);
    }

    // Nested functions report their own name.
    fn visit_item_fn_mut(&mut self, _: &mut ItemFn) {}
}

fn starts_with_at(tokens: &TokenStream) -> bool {
    matches!(tokens.clone().into_iter().next(), Some(TokenTree::Punct(p)) if p.as_char() == '@')
}
