// Sift Procedural Macros
// Provides the Diffable derive used by sift-diff

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Type};

/// Derive macro for the Diffable trait
///
/// Every named field becomes a record entry keyed by its name. `Option`
/// fields holding `None` are left out of the record, so they diff as absent.
/// Field types must implement `serde::Serialize`.
///
/// # Attributes
///
/// - `#[diff(skip)]` - never compare this field
/// - `#[diff(rename = "name")]` - use `name` as the record key
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Diffable)]
/// pub struct User {
///     pub id: i32,
///     #[diff(rename = "displayName")]
///     pub display_name: Option<String>,
///     #[diff(skip)]
///     pub updated_at: DateTime<Utc>,
/// }
/// ```
#[proc_macro_derive(Diffable, attributes(diff))]
pub fn derive_diffable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_diffable(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_diffable(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::sift_diff::Diffable for #name #ty_generics #where_clause {
                        fn to_record(&self) -> ::core::result::Result<::sift_diff::Record, ::sift_diff::DiffError> {
                            ::core::result::Result::Ok(::sift_diff::Record::new())
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Diffable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Diffable can only be derived for structs",
            ));
        }
    };

    let mut inserts = Vec::new();
    for field in fields {
        let options = FieldOptions::from_attrs(&field.attrs)?;
        if options.skip {
            continue;
        }

        // Named fields always carry an ident
        let Some(ident) = &field.ident else { continue };
        let key = options
            .rename
            .unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_string());

        let insert = if is_option(&field.ty) {
            quote! {
                if let ::core::option::Option::Some(value) = &self.#ident {
                    record.insert(
                        ::std::string::String::from(#key),
                        ::sift_diff::field_value(#key, value)?,
                    );
                }
            }
        } else {
            quote! {
                record.insert(
                    ::std::string::String::from(#key),
                    ::sift_diff::field_value(#key, &self.#ident)?,
                );
            }
        };
        inserts.push(insert);
    }

    let capacity = inserts.len();

    Ok(quote! {
        impl #impl_generics ::sift_diff::Diffable for #name #ty_generics #where_clause {
            fn to_record(&self) -> ::core::result::Result<::sift_diff::Record, ::sift_diff::DiffError> {
                let mut record = ::sift_diff::Record::with_capacity(#capacity);
                #(#inserts)*
                ::core::result::Result::Ok(record)
            }
        }
    })
}

/// Parsed `#[diff(...)]` options for one field
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    rename: Option<String>,
}

impl FieldOptions {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("diff")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    options.rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `rename = \"...\"`"))
                }
            })?;
        }

        Ok(options)
    }
}

/// Check if a field type is `Option<_>` (syntactic, by last path segment)
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "Option")
            .unwrap_or(false),
        _ => false,
    }
}
