//! Support code for `#[derive(QueryParams)]`. Not part of the public API.
//!
//! The derive can't see through type aliases, so it lets method resolution pick the
//! [`Slot`] of each field: `SlotOf(&mut field).slot()` resolves to [`SupportedSlot::slot`]
//! when the field type is one of the supported shapes (receiver taken by value), and
//! falls back to [`UnsupportedSlot::slot`] (receiver taken by reference) otherwise.
use crate::Slot;

/// A mutable reference to a field whose [`Slot`] must be determined.
pub struct SlotOf<'a, T: ?Sized>(pub &'a mut T);

pub trait SupportedSlot<'a> {
    fn slot(self) -> Slot<'a>;
}

impl<'a> SupportedSlot<'a> for SlotOf<'a, String> {
    fn slot(self) -> Slot<'a> {
        Slot::Scalar(self.0)
    }
}

impl<'a> SupportedSlot<'a> for SlotOf<'a, Vec<String>> {
    fn slot(self) -> Slot<'a> {
        Slot::Collection(self.0)
    }
}

impl<'a> SupportedSlot<'a> for SlotOf<'a, Option<Vec<String>>> {
    fn slot(self) -> Slot<'a> {
        Slot::NullableCollection(self.0)
    }
}

pub trait UnsupportedSlot {
    fn slot(&self) -> Slot<'static>;
}

impl<T: ?Sized> UnsupportedSlot for SlotOf<'_, T> {
    fn slot(&self) -> Slot<'static> {
        Slot::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }
}
