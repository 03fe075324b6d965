use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct Request {
    #[query_param]
    #[query_param(name = "n")]
    name: String,
}

fn main() {}
