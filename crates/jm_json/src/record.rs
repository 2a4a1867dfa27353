//! The record abstraction: a Rust value described by a [`RecordInfo`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::RecordInfo;
use crate::value::ValueError;

// -----------------------------------------------------------------------------
// Record

/// A value whose fields are mapped to JSON keys by a [`RecordInfo`].
///
/// The converter only ever sees records as `dyn Record`; field access goes
/// through the accessor pair of each [`FieldSpec`](crate::info::FieldSpec).
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Record) instead of implementing this
/// trait by hand. It also implements [`Schema`], [`Typed`](crate::info::Typed),
/// [`ToValue`](crate::value::ToValue) and [`FromValue`](crate::value::FromValue),
/// which let the record appear as a field of another record.
///
/// # Type Identification
///
/// `Box<dyn Record>` is itself `Any`, use the inherent `downcast_*` methods
/// on `dyn Record`, not the ones of `dyn Any`:
///
/// ```
/// use jm_json::derive::Record;
/// use jm_json::record::Schema;
///
/// #[derive(Record, Default)]
/// struct Point { x: i32 }
///
/// let record = Point::schema().instantiate();
///
/// assert!(record.is::<Point>());
/// assert_eq!(record.downcast_ref::<Point>().unwrap().x, 0);
/// ```
pub trait Record: Any + Send + Sync {
    /// Returns the schema of the underlying type.
    fn record_info(&self) -> &'static RecordInfo;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Record {
    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    #[inline]
    pub fn is<T: Record>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Downcasts a boxed record, giving it back on mismatch.
    pub fn downcast<T: Record>(self: Box<Self>) -> Result<Box<T>, Box<dyn Record>> {
        if self.is::<T>() {
            match self.into_any().downcast() {
                Ok(record) => Ok(record),
                Err(_) => unreachable!("type id checked"),
            }
        } else {
            Err(self)
        }
    }

    /// Like [`downcast_ref`](Self::downcast_ref), with a [`ValueError`] on mismatch.
    ///
    /// This is what field accessors use.
    pub fn try_downcast_ref<T: Record>(&self) -> Result<&T, ValueError> {
        let found = self.record_info().type_path();
        self.downcast_ref().ok_or(ValueError::RecordMismatch {
            expected: core::any::type_name::<T>(),
            found,
        })
    }

    /// Like [`downcast_mut`](Self::downcast_mut), with a [`ValueError`] on mismatch.
    pub fn try_downcast_mut<T: Record>(&mut self) -> Result<&mut T, ValueError> {
        let found = self.record_info().type_path();
        self.downcast_mut().ok_or(ValueError::RecordMismatch {
            expected: core::any::type_name::<T>(),
            found,
        })
    }
}

impl fmt::Debug for dyn Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Record<{}>", self.record_info().type_path())
    }
}

// -----------------------------------------------------------------------------
// Schema

/// Static access to the schema of a concrete record type.
///
/// The `Default` bound is the factory used by deserialization: a record is
/// always built from its default value, then populated field by field.
pub trait Schema: Record + Default + Sized {
    fn schema() -> &'static RecordInfo;
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::Record;
    use crate::derive::Record;
    use crate::record::Schema;
    use crate::value::ValueError;

    #[derive(Record, Default, Debug)]
    struct A {
        a: i32,
    }

    #[derive(Record, Default, Debug)]
    struct B {
        b: bool,
    }

    #[test]
    fn downcast_round_trip() {
        let boxed: Box<dyn Record> = Box::new(A { a: 3 });
        assert!(boxed.is::<A>());
        assert!(!boxed.is::<B>());

        let boxed = boxed.downcast::<B>().unwrap_err();
        let a = boxed.downcast::<A>().unwrap();
        assert_eq!(a.a, 3);
    }

    #[test]
    fn try_downcast_reports_types() {
        let mut b = B::default();
        let record: &mut dyn Record = &mut b;
        record.try_downcast_mut::<B>().unwrap().b = true;

        let err = record.try_downcast_ref::<A>().unwrap_err();
        assert!(matches!(err, ValueError::RecordMismatch { found, .. } if found == B::schema().type_path()));
        assert!(b.b);
    }
}
