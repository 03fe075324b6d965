//! Errors that can happen when unmarshalling query parameters.

/// The error returned by [`Unmarshaller::unmarshal`] when the operation fails.
///
/// Unmarshalling stops at the first failure: fields processed before the error
/// keep the values they were assigned.
///
/// See the documentation of each variant for more details.
///
/// [`Unmarshaller::unmarshal`]: crate::Unmarshaller::unmarshal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UnmarshalError {
    /// No query source was provided.
    #[error("invalid source. A query source must be provided")]
    InvalidSource,
    /// The record was handed over by value, so none of the changes would be
    /// visible to the caller.
    ///
    /// Pass a `&mut` reference to the record instead.
    #[error("invalid target. `{type_name}` must be passed by mutable reference")]
    NonReferenceTarget {
        /// The type of the record that was passed by value.
        type_name: &'static str,
    },
    #[error(transparent)]
    /// See [`InvalidFieldType`] for details.
    InvalidFieldType(InvalidFieldType),
    /// A `#[query_param]` collection was `None` while its key was present in the source.
    ///
    /// Collections are appended to, never allocated: set the field to `Some(vec![])`
    /// before unmarshalling, or turn it into a `Vec<String>`.
    #[error("nil collection field. `{field}` must be initialized before unmarshalling")]
    NilCollectionField {
        /// The name of the offending field.
        field: String,
    },
    /// The delimiter used to split values into collections is empty.
    #[error("invalid delimiter. The delimiter must not be empty")]
    InvalidDelimiter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field type. `{field}` must be `String` or `Vec<String>`, found `{type_name}`")]
/// A field annotated with `#[query_param]` has a type that can't hold query values.
///
/// Only `String`, `Vec<String>` and `Option<Vec<String>>` are supported.
/// The error is only returned when the source contains a value for the field's key.
pub struct InvalidFieldType {
    pub(crate) field: String,
    pub(crate) type_name: &'static str,
}

impl InvalidFieldType {
    /// The name of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The declared type of the offending field.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
