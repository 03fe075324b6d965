use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct Request<T> {
    #[query_param]
    name: T,
}

fn main() {}
