use crate::errors::{InvalidFieldType, UnmarshalError};
use crate::record::{Field, Slot, Target};
use crate::source::QuerySource;

/// The delimiter used by [`Unmarshaller::default`] to split values into collections.
pub const DEFAULT_DELIMITER: &str = ",";

/// Populate `target` from `source` using the default [`Unmarshaller`].
///
/// Values for collection fields are split on [`DEFAULT_DELIMITER`].
/// Check out [`Unmarshaller::unmarshal`] for more details.
pub fn unmarshal<'t>(
    source: Option<&dyn QuerySource>,
    target: impl Into<Target<'t>>,
) -> Result<(), UnmarshalError> {
    Unmarshaller::default().unmarshal(source, target)
}

/// Copies query parameters into the bound fields of a record.
///
/// The only knob is the delimiter used to split a value into a collection
/// of strings. It defaults to [`DEFAULT_DELIMITER`].
///
/// # Example
///
/// ```rust
/// use queryparam::{QueryMap, QueryParams, Unmarshaller};
///
/// #[derive(QueryParams, Default)]
/// pub struct Request {
///     #[query_param(name = "name")]
///     pub names: Vec<String>,
/// }
///
/// let query = QueryMap::parse("name=Tom-Jim");
/// let mut request = Request::default();
/// Unmarshaller::with_delimiter("-")
///     .unmarshal(Some(&query), &mut request)
///     .unwrap();
/// assert_eq!(request.names, vec!["Tom", "Jim"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmarshaller {
    delimiter: String,
}

impl Default for Unmarshaller {
    fn default() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }
}

impl Unmarshaller {
    /// An [`Unmarshaller`] that splits collections on [`DEFAULT_DELIMITER`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An [`Unmarshaller`] that splits collections on `delimiter`.
    ///
    /// An empty delimiter is accepted here, but every attempt to populate a
    /// collection will fail with [`UnmarshalError::InvalidDelimiter`].
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Build an [`Unmarshaller`] from its configuration.
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::UnmarshalConfig) -> Self {
        Self::with_delimiter(config.delimiter.clone())
    }

    /// The delimiter used to split values into collections.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Populate the bound fields of `target` with the query parameters in `source`.
    ///
    /// Fields are processed in declaration order:
    ///
    /// - unbound fields are skipped;
    /// - bound fields whose key is absent from `source` (or has no values) are skipped,
    ///   whatever their type;
    /// - `String` fields are overwritten with the first value of their key;
    /// - collection fields get the first value of their key split on the
    ///   [delimiter](Self::delimiter). Each segment, empty ones included, is
    ///   appended to the collection.
    ///
    /// Fields that are skipped keep their current value.
    ///
    /// # Errors
    ///
    /// Processing stops at the first error. Fields populated before it are not rolled back.
    ///
    /// - [`UnmarshalError::InvalidSource`] if `source` is `None`. `target` is not inspected.
    /// - [`UnmarshalError::NonReferenceTarget`] if the record was passed by value.
    /// - [`UnmarshalError::InvalidFieldType`] if a bound field with a present key
    ///   is neither a string nor a collection of strings.
    /// - [`UnmarshalError::NilCollectionField`] if a bound `Option<Vec<String>>` field
    ///   with a present key is `None`.
    /// - [`UnmarshalError::InvalidDelimiter`] if the delimiter is empty and a
    ///   collection field has to be populated.
    pub fn unmarshal<'t>(
        &self,
        source: Option<&dyn QuerySource>,
        target: impl Into<Target<'t>>,
    ) -> Result<(), UnmarshalError> {
        let source = source.ok_or(UnmarshalError::InvalidSource)?;
        let record = match target.into() {
            Target::Borrowed(record) => record,
            Target::Detached { type_name } => {
                return Err(UnmarshalError::NonReferenceTarget { type_name });
            }
        };

        for field in record.fields() {
            let (name, key, slot) = match field {
                Field::Bound { name, key, slot } => (name, key, slot),
                Field::Unbound { name } => {
                    tracing::trace!(field = name, "Skipping field without a query binding");
                    continue;
                }
            };
            let Some(raw) = source.get(key) else {
                tracing::trace!(field = name, key, "Query key is absent, skipping field");
                continue;
            };
            match slot {
                Slot::Scalar(value) => {
                    *value = raw.into_owned();
                }
                Slot::Collection(values) => {
                    self.split_into(&raw, values)?;
                }
                Slot::NullableCollection(values) => {
                    let Some(values) = values.as_mut() else {
                        return Err(UnmarshalError::NilCollectionField { field: name.into() });
                    };
                    self.split_into(&raw, values)?;
                }
                Slot::Unsupported { type_name } => {
                    return Err(UnmarshalError::InvalidFieldType(InvalidFieldType {
                        field: name.into(),
                        type_name,
                    }));
                }
            }
            tracing::trace!(field = name, key, "Populated field from query");
        }
        Ok(())
    }

    fn split_into(&self, raw: &str, values: &mut Vec<String>) -> Result<(), UnmarshalError> {
        if self.delimiter.is_empty() {
            return Err(UnmarshalError::InvalidDelimiter);
        }
        values.extend(raw.split(self.delimiter.as_str()).map(ToOwned::to_owned));
        Ok(())
    }
}
