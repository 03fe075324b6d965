use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct Request {
    #[query_param(name = "")]
    name: String,
}

fn main() {}
