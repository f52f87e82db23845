use proc_macro::TokenStream;

/// Checks a precondition on entry to the function.
///
/// ```ignore
/// #[requires(y != 0, "y must not be 0")]
/// fn div(x: i32, y: i32) -> i32 { .. }
/// ```
///
/// The optional string replaces the condition's source text in the violation message.
/// Preconditions are checked in every build profile.
#[proc_macro_attribute]
pub fn requires(attr: TokenStream, item: TokenStream) -> TokenStream {
    contracts_attrs_impl::requires(attr.into(), item.into()).into()
}

/// Checks a postcondition on exit from the function. The returned value is bound to `result`.
///
/// ```ignore
/// #[ensures(result >= x && result >= y)]
/// fn max(x: i32, y: i32) -> i32 { .. }
/// ```
#[proc_macro_attribute]
pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    contracts_attrs_impl::ensures(attr.into(), item.into()).into()
}
