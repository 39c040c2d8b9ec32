use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Type};
use typeinit_core::{Decl, DeclKind, GeneratedInit, Member, expand};

// derive_type_init
pub fn derive_type_init(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let decl = match adapt(&input) {
        Ok(decl) => decl,
        Err(err) => return err.to_compile_error(),
    };

    let expansion = expand(&decl);

    if let Some(diagnostic) = expansion.diagnostics.first() {
        return Error::new_spanned(&input.ident, diagnostic.to_string()).to_compile_error();
    }

    let init = expansion
        .generated
        .first()
        .expect("successful expansion yields one declaration");

    render_init(&input, init)
}

/// Map the derive input onto the neutral declaration view.
///
/// Enums and unions map to kinds the expansion rejects with its own
/// diagnostic. Tuple structs have no member names to mirror into
/// parameters, so the adapter rejects them directly.
fn adapt(input: &DeriveInput) -> Result<Decl, Error> {
    let members = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    let ident = field.ident.as_ref().expect("named field");
                    let ty = &field.ty;

                    Member::stored(ident.to_string(), quote!(#ty).to_string())
                })
                .collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    &data.fields,
                    "TypeInit can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) => return Ok(Decl::new(DeclKind::Enum)),
        Data::Union(_) => return Ok(Decl::new(DeclKind::Other)),
    };

    Ok(Decl::with_members(DeclKind::Struct, members))
}

/// Render the generated initializer as an inherent `new` constructor.
///
/// Parameter order and the `Self` field order both come from the expansion,
/// which preserves field declaration order.
fn render_init(input: &DeriveInput, init: &GeneratedInit) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut params = Vec::new();
    let mut names = Vec::new();

    for field in init.params() {
        let name: Ident = match syn::parse_str(field.name.as_str()) {
            Ok(name) => name,
            Err(err) => return err.to_compile_error(),
        };
        let ty: Type = match syn::parse_str(field.ty.as_str()) {
            Ok(ty) => ty,
            Err(err) => return err.to_compile_error(),
        };

        params.push(quote!(#name: #ty));
        names.push(name);
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn new(#(#params),*) -> Self {
                Self { #(#names),* }
            }
        }
    }
}
