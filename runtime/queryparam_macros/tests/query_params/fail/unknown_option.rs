use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct Request {
    #[query_param(key = "n")]
    name: String,
}

fn main() {}
