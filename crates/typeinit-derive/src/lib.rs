use proc_macro::TokenStream;

mod type_init;

#[proc_macro_derive(TypeInit)]
pub fn derive_type_init(input: TokenStream) -> TokenStream {
    type_init::derive_type_init(input.into()).into()
}
