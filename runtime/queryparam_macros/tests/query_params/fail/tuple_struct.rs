use queryparam::QueryParams;

#[derive(QueryParams)]
pub struct Request(String);

fn main() {}
