use queryparam::QueryParams;

#[derive(QueryParams)]
pub enum Request {
    Name,
    Nicknames,
}

fn main() {}
