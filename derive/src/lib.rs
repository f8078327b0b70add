mod inspect;

use proc_macro::TokenStream;

#[proc_macro_derive(Inspect, attributes(nilcheck))]
pub fn derive_inspect(input: TokenStream) -> TokenStream { inspect::derive_inspect_impl(input) }
