use proc_macro::TokenStream;

mod query_params;

/// Derive an implementation of `queryparam::QueryRecord` for a struct with named fields.
///
/// Annotate a field with `#[query_param]` to populate it from the query key with the same
/// name, or with `#[query_param(name = "key")]` to pick the key explicitly.
/// Fields without the annotation are left untouched.
#[proc_macro_derive(QueryParams, attributes(query_param))]
pub fn derive_query_params(input: TokenStream) -> TokenStream {
    query_params::derive_query_params(input)
}
