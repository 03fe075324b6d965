use darling::{FromField, FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, Meta, ext::IdentExt, parse_macro_input};

#[derive(Debug)]
struct ParsedField {
    ident: Ident,
    /// The query key, if the field is annotated with `#[query_param]`.
    key: Option<String>,
}

// Nested meta for `#[query_param(name = "...")]`
#[derive(Default, Debug, FromMeta)]
#[darling(default, from_word = || Ok(Default::default()))]
struct QueryParam {
    name: Option<String>,
}

impl QueryParam {
    fn parse(meta: &Meta) -> darling::Result<Self> {
        if let Meta::List(list) = meta {
            for item in NestedMeta::parse_meta_list(list.tokens.clone())? {
                match &item {
                    NestedMeta::Meta(meta) if meta.path().is_ident("name") => {}
                    NestedMeta::Meta(meta) => {
                        let path = meta.path();
                        return Err(darling::Error::custom(format!(
                            "`{}` is not a supported option for `#[query_param]`. The only supported option is `name`.",
                            quote!(#path)
                        ))
                        .with_span(path));
                    }
                    NestedMeta::Lit(lit) => {
                        return Err(darling::Error::custom(
                            "Use `#[query_param(name = \"...\")]` to set the query key.",
                        )
                        .with_span(lit));
                    }
                }
            }
        }
        Self::from_meta(meta)
    }
}

impl FromField for ParsedField {
    fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(darling::Error::unsupported_shape("tuple struct").with_span(field));
        };
        let mut bindings = Vec::new();
        for attr in &field.attrs {
            if !attr.path().is_ident("query_param") {
                continue;
            }
            bindings.push(QueryParam::parse(&attr.meta)?);
        }

        let key = match bindings.len() {
            0 => None,
            1 => match bindings.remove(0).name {
                Some(name) if name.is_empty() => {
                    return Err(darling::Error::custom(format!(
                        "The query key for field `{}` can't be empty.",
                        ident.unraw()
                    ))
                    .with_span(&ident));
                }
                Some(name) => Some(name),
                None => Some(ident.unraw().to_string()),
            },
            _ => {
                return Err(darling::Error::custom(format!(
                    "Field `{}` can have at most one `#[query_param]` attribute.",
                    ident.unraw()
                ))
                .with_span(&ident));
            }
        };

        Ok(Self { ident, key })
    }
}

pub(super) fn derive_query_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_query_params(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_query_params(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let fields = named_fields(&input)?;
    reject_generics(&input)?;

    let mut errors = darling::Error::accumulator();
    let fields: Vec<ParsedField> = fields
        .named
        .iter()
        .filter_map(|field| errors.handle(ParsedField::from_field(field)))
        .collect();
    errors.finish()?;

    let struct_ident = &input.ident;
    let entries = fields.iter().map(|ParsedField { ident, key }| {
        let name = ident.unraw().to_string();
        match key {
            Some(key) => quote! {
                ::queryparam::Field::Bound {
                    name: #name,
                    key: #key,
                    slot: ::queryparam::__private::SlotOf(&mut self.#ident).slot(),
                }
            },
            None => quote! { ::queryparam::Field::Unbound { name: #name } },
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::queryparam::QueryRecord for #struct_ident {
            fn fields(&mut self) -> ::std::vec::Vec<::queryparam::Field<'_>> {
                #[allow(unused_imports)]
                use ::queryparam::__private::{SupportedSlot as _, UnsupportedSlot as _};
                ::std::vec![#(#entries),*]
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#struct_ident> for ::queryparam::Target<'static> {
            fn from(_: #struct_ident) -> Self {
                ::queryparam::Target::detached::<#struct_ident>()
            }
        }
    })
}

/// Only structs with named fields can be derived.
fn named_fields(input: &DeriveInput) -> Result<&syn::FieldsNamed, darling::Error> {
    let kind = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => return Ok(fields),
            Fields::Unnamed(_) => "a tuple struct",
            Fields::Unit => "a unit struct",
        },
        Data::Enum(_) => "an enum",
        Data::Union(_) => "a union",
    };
    let struct_ident = &input.ident;
    Err(darling::Error::custom(format!(
        "`#[derive(QueryParams)]` can only be applied to structs with named fields, but `{struct_ident}` is {kind}.",
    ))
    .with_span(struct_ident))
}

fn reject_generics(input: &DeriveInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    if let Some(generic) = input.generics.type_params().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(QueryParams)]` can't be applied to structs with generic type parameters, such as `{struct_ident}`. Implement `QueryRecord` by hand instead.",
        ))
        .with_span(&generic.ident));
    }
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(QueryParams)]` can't be applied to structs with generic lifetimes, such as `{struct_ident}`. Implement `QueryRecord` by hand instead.",
        ))
        .with_span(&lifetime.lifetime.ident));
    }
    if let Some(constant) = input.generics.const_params().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(QueryParams)]` can't be applied to structs with const generic parameters, such as `{struct_ident}`.",
        ))
        .with_span(&constant.ident));
    }
    Ok(())
}
