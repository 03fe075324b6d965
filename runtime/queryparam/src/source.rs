use std::borrow::Cow;

use http::Uri;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// A multi-valued, case-sensitive mapping from query keys to values.
///
/// The values for a key are returned in the order they appear in the query.
/// Only the first one is used by [`Unmarshaller::unmarshal`].
///
/// [`Unmarshaller::unmarshal`]: crate::Unmarshaller::unmarshal
pub trait QuerySource {
    /// All the values associated with `key`, in order.
    ///
    /// It returns an empty collection if `key` is absent.
    fn get_all(&self, key: &str) -> SmallVec<[Cow<'_, str>; 1]>;

    /// The first value associated with `key`, if there is one.
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get_all(key).into_iter().next()
    }
}

/// Percent-decoded query parameters, parsed from the query component of a [`Uri`].
///
/// A URI without a query component has no parameters.
impl QuerySource for Uri {
    fn get_all(&self, key: &str) -> SmallVec<[Cow<'_, str>; 1]> {
        let Some(query) = self.query() else {
            return SmallVec::new();
        };
        form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        let query = self.query()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<B> QuerySource for http::Request<B> {
    fn get_all(&self, key: &str) -> SmallVec<[Cow<'_, str>; 1]> {
        self.uri().get_all(key)
    }

    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.uri().get(key)
    }
}

impl QuerySource for http::request::Parts {
    fn get_all(&self, key: &str) -> SmallVec<[Cow<'_, str>; 1]> {
        self.uri.get_all(key)
    }

    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.uri.get(key)
    }
}

/// An owned collection of query parameters.
///
/// Keys are kept in the order they were first seen.
///
/// # Example
///
/// ```rust
/// use queryparam::{QueryMap, QuerySource};
///
/// let query = QueryMap::parse("name=Tom&name=Jim&city=Rome%20Nord");
/// assert_eq!(query.get("name").as_deref(), Some("Tom"));
/// assert_eq!(query.get_all("name").len(), 2);
/// assert_eq!(query.get("city").as_deref(), Some("Rome Nord"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    params: IndexMap<String, SmallVec<[String; 1]>>,
}

impl QueryMap {
    /// Create a new, empty [`QueryMap`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Keys and values are percent-decoded; `+` is decoded as a space.
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes()).collect()
    }

    /// Parse the query component of `uri`.
    pub fn from_uri(uri: &Uri) -> Self {
        uri.query().map(Self::parse).unwrap_or_default()
    }

    /// Replace the values associated with `key`.
    ///
    /// `values` can be empty: the key is then registered without values and
    /// treated as absent during unmarshalling.
    pub fn insert<K, I, V>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.params
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    /// Add a value for `key`, after the ones it already has.
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Returns `true` if `key` has been registered, with or without values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over each key and its values, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[String])> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl QuerySource for QueryMap {
    fn get_all(&self, key: &str) -> SmallVec<[Cow<'_, str>; 1]> {
        self.params
            .get(key)
            .map(|values| values.iter().map(|v| Cow::Borrowed(v.as_str())).collect())
            .unwrap_or_default()
    }

    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.params
            .get(key)?
            .first()
            .map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

impl From<&Uri> for QueryMap {
    fn from(uri: &Uri) -> Self {
        Self::from_uri(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_values_are_percent_decoded() {
        let uri: Uri = "https://example.com/some/path?name=Tom%20Riddle&city=New+York"
            .parse()
            .unwrap();
        assert_eq!(uri.get("name").as_deref(), Some("Tom Riddle"));
        assert_eq!(uri.get("city").as_deref(), Some("New York"));
    }

    #[test]
    fn uri_keys_are_case_sensitive() {
        let uri: Uri = "/path?Name=Tom".parse().unwrap();
        assert_eq!(uri.get("name"), None);
        assert_eq!(uri.get("Name").as_deref(), Some("Tom"));
    }

    #[test]
    fn uri_repeated_keys_preserve_order() {
        let uri: Uri = "/path?id=2&other=x&id=1".parse().unwrap();
        let ids = uri.get_all("id");
        assert_eq!(ids.as_slice(), &[Cow::Borrowed("2"), Cow::Borrowed("1")]);
        assert_eq!(uri.get("id").as_deref(), Some("2"));
    }

    #[test]
    fn uri_without_query_has_no_values() {
        let uri: Uri = "/path".parse().unwrap();
        assert!(uri.get_all("name").is_empty());
        assert_eq!(uri.get("name"), None);
    }

    #[test]
    fn request_delegates_to_its_uri() {
        let request = http::Request::get("/path?name=Tom").body(()).unwrap();
        assert_eq!(request.get("name").as_deref(), Some("Tom"));
        let (parts, _) = request.into_parts();
        assert_eq!(parts.get("name").as_deref(), Some("Tom"));
    }

    #[test]
    fn query_map_parse() {
        let map = QueryMap::parse("name=Tom&age=23&name=Jim&empty=");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("name").as_deref(), Some("Tom"));
        assert_eq!(map.get_all("name").len(), 2);
        assert_eq!(map.get("empty").as_deref(), Some(""));

        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "age", "empty"]);
    }

    #[test]
    fn query_map_key_without_values() {
        let mut map = QueryMap::new();
        map.insert("name", Vec::<String>::new());
        assert!(map.contains_key("name"));
        assert_eq!(map.get("name"), None);
        assert!(map.get_all("name").is_empty());
    }

    #[test]
    fn query_map_insert_replaces() {
        let mut map = QueryMap::new();
        map.append("name", "Tom");
        map.insert("name", ["Jim", "Bob"]);
        assert_eq!(map.get("name").as_deref(), Some("Jim"));
        assert_eq!(map.get_all("name").len(), 2);
    }

    #[test]
    fn query_map_from_uri() {
        let uri: Uri = "/path?name=Tom".parse().unwrap();
        assert_eq!(QueryMap::from(&uri), QueryMap::parse("name=Tom"));

        let uri: Uri = "/path".parse().unwrap();
        assert!(QueryMap::from_uri(&uri).is_empty());
    }
}
