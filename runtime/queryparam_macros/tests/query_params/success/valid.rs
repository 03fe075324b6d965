use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct OneScalar {
    #[query_param]
    name: String,
}

#[derive(QueryParams)]
struct Private {
    #[query_param(name = "q")]
    query: String,
}

#[derive(QueryParams)]
pub struct Collections {
    #[query_param]
    tags: Vec<String>,
    #[query_param(name = "alias")]
    aliases: Option<Vec<String>>,
    #[query_param]
    qualified: std::vec::Vec<std::string::String>,
}

#[derive(QueryParams)]
pub struct Unsupported {
    #[query_param]
    age: u32,
    #[query_param]
    ids: Vec<u64>,
    #[query_param]
    maybe: Option<String>,
}

#[derive(QueryParams)]
pub struct Mixed {
    #[query_param]
    name: String,
    /// Not bound to any key.
    notes: String,
    counter: u64,
    #[query_param]
    r#type: String,
}

#[derive(QueryParams)]
pub struct NoFields {}

#[derive(QueryParams)]
pub struct OnlyUnbound {
    a: u8,
    b: String,
}

type Name = String;
type Names = Vec<String>;

#[derive(QueryParams)]
pub struct Aliased {
    #[query_param]
    name: Name,
    #[query_param]
    names: Names,
    #[query_param]
    maybe: Option<Names>,
    #[query_param]
    label: &'static str,
}

fn main() {}
