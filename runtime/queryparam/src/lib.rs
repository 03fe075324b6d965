//! Populate the fields of a struct from the query parameters of a URL.
//!
//! Annotate the fields you care about with `#[query_param]` and derive [`QueryParams`]:
//!
//! ```rust
//! use queryparam::QueryParams;
//!
//! #[derive(QueryParams, Default)]
//! pub struct Search {
//!     #[query_param(name = "q")]
//!     pub query: String,
//!     #[query_param]
//!     pub tags: Vec<String>,
//!     // Not annotated, therefore never touched.
//!     pub page: u32,
//! }
//!
//! let uri: http::Uri = "/search?q=rust&tags=web,http".parse().unwrap();
//! let mut search = Search::default();
//! queryparam::unmarshal(Some(&uri), &mut search).unwrap();
//!
//! assert_eq!(search.query, "rust");
//! assert_eq!(search.tags, vec!["web", "http"]);
//! ```
//!
//! Only two shapes are supported: `String` and collections of strings
//! (`Vec<String>`, or `Option<Vec<String>>` if the collection may be missing).
//! A collection is filled by splitting the first value of its key on the
//! [`Unmarshaller`]'s delimiter (`,` by default).
//!
//! Check out [`Unmarshaller::unmarshal`] for the exact semantics.
#[doc(hidden)]
pub mod __private;
#[cfg(feature = "config")]
pub mod config;
pub mod errors;
mod record;
mod source;
mod unmarshal;

pub use errors::UnmarshalError;
pub use queryparam_macros::QueryParams;
pub use record::{Field, QueryRecord, Slot, Target};
pub use source::{QueryMap, QuerySource};
pub use unmarshal::{DEFAULT_DELIMITER, Unmarshaller, unmarshal};
