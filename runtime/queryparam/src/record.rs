/// A struct whose fields can be populated from query parameters.
///
/// You'll rarely implement this trait by hand: `#[derive(QueryParams)]` does it for you.
///
/// # Manual implementation
///
/// ```rust
/// use queryparam::{Field, QueryRecord, Slot};
///
/// #[derive(Default)]
/// pub struct Filters {
///     pub owner: String,
///     pub labels: Vec<String>,
///     pub cursor: u64,
/// }
///
/// impl QueryRecord for Filters {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::Bound { name: "owner", key: "owner", slot: Slot::Scalar(&mut self.owner) },
///             Field::Bound { name: "labels", key: "label", slot: Slot::Collection(&mut self.labels) },
///             Field::Unbound { name: "cursor" },
///         ]
///     }
/// }
/// ```
pub trait QueryRecord {
    /// The fields of the record, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A single field of a [`QueryRecord`].
#[derive(Debug)]
pub enum Field<'a> {
    /// The field must be populated from the query parameter named `key`.
    Bound {
        /// The name of the field, as written in the struct definition.
        name: &'a str,
        /// The query key the field is bound to.
        key: &'a str,
        /// Where the value goes.
        slot: Slot<'a>,
    },
    /// The field has no binding and is left untouched.
    Unbound {
        /// The name of the field, as written in the struct definition.
        name: &'a str,
    },
}

impl Field<'_> {
    /// The name of the field, as written in the struct definition.
    pub fn name(&self) -> &str {
        match self {
            Field::Bound { name, .. } | Field::Unbound { name } => *name,
        }
    }

    /// The query key the field is bound to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Field::Bound { key, .. } => Some(*key),
            Field::Unbound { .. } => None,
        }
    }
}

/// The declared shape of a bound field, with mutable access to its storage.
#[derive(Debug)]
pub enum Slot<'a> {
    /// A single string, overwritten with the first value of the key.
    Scalar(&'a mut String),
    /// A collection of strings. Values are appended to it.
    Collection(&'a mut Vec<String>),
    /// A collection of strings that may not have been initialized.
    ///
    /// Unmarshalling into `None` fails with [`UnmarshalError::NilCollectionField`].
    ///
    /// [`UnmarshalError::NilCollectionField`]: crate::UnmarshalError::NilCollectionField
    NullableCollection(&'a mut Option<Vec<String>>),
    /// Any other type. Unmarshalling into it fails with [`UnmarshalError::InvalidFieldType`].
    ///
    /// [`UnmarshalError::InvalidFieldType`]: crate::UnmarshalError::InvalidFieldType
    Unsupported {
        /// The declared type of the field.
        type_name: &'static str,
    },
}

/// The destination of [`Unmarshaller::unmarshal`].
///
/// Build it from a `&mut` reference to your record. `#[derive(QueryParams)]` also lets you
/// build it from the record itself, by value: the resulting target is [`Target::Detached`]
/// and unmarshalling into it is rejected, since the caller would never see the changes.
///
/// [`Unmarshaller::unmarshal`]: crate::Unmarshaller::unmarshal
pub enum Target<'a> {
    /// A record borrowed mutably from the caller.
    Borrowed(&'a mut (dyn QueryRecord + 'a)),
    /// A record that was moved in, by value.
    Detached {
        /// The type of the record.
        type_name: &'static str,
    },
}

impl Target<'static> {
    /// A [`Target::Detached`] for records of type `T`.
    pub fn detached<T>() -> Self {
        Target::Detached {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl<'a, T> From<&'a mut T> for Target<'a>
where
    T: QueryRecord + 'a,
{
    fn from(record: &'a mut T) -> Self {
        Target::Borrowed(record)
    }
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Borrowed(_) => f.write_str("Borrowed(..)"),
            Target::Detached { type_name } => f
                .debug_struct("Detached")
                .field("type_name", type_name)
                .finish(),
        }
    }
}
