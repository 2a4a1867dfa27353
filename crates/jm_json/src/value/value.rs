use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::record::{Record, Schema};
use crate::value::{JsonEnum, ValueError};

// -----------------------------------------------------------------------------
// RecordValue

/// A nested record carried by a [`Value`].
///
/// Reads from a record borrow it, values produced by deserialization own it.
#[derive(Debug)]
pub enum RecordValue<'a> {
    Borrowed(&'a dyn Record),
    Owned(Box<dyn Record>),
}

impl RecordValue<'_> {
    #[inline]
    pub fn as_record(&self) -> &dyn Record {
        match self {
            Self::Borrowed(record) => *record,
            Self::Owned(record) => &**record,
        }
    }
}

// -----------------------------------------------------------------------------
// Value

/// A field value in transit between a record and its JSON form.
///
/// Scalars are produced and consumed by the
/// [type handlers](crate::registry::TypeHandler), records and sequences by
/// the converter itself. `Option<T>` fields map `None` to [`Value::Null`].
///
/// # Examples
///
/// ```
/// use jm_json::value::{FromValue, ToValue, Value};
///
/// let value = 42_u8.to_value();
/// assert!(matches!(value, Value::UInt(42)));
///
/// assert_eq!(i64::from_value(value).unwrap(), 42);
/// assert!(u8::from_value(Value::Int(-1)).is_err());
/// assert!(Option::<u8>::from_value(Value::Null).unwrap().is_none());
/// ```
#[derive(Debug)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(Cow<'a, str>),
    Date(DateTime<Utc>),
    Uuid(Uuid),
    /// The variant name of a unit-only enum.
    Enum(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Record(RecordValue<'a>),
    Seq(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns a short name of the variant, for messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Uuid(_) => "uuid",
            Self::Enum(_) => "enum",
            Self::Bytes(_) => "bytes",
            Self::Record(_) => "record",
            Self::Seq(_) => "seq",
        }
    }

    /// Returns the text of a `String` or `Enum` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) | Self::Enum(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested record, if any.
    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Self::Record(record) => Some(record.as_record()),
            _ => None,
        }
    }

    /// Takes the nested record out of the value.
    pub fn into_record<T: Schema>(self) -> Result<T, ValueError> {
        match self {
            Self::Record(RecordValue::Owned(record)) => match record.downcast::<T>() {
                Ok(record) => Ok(*record),
                Err(record) => Err(ValueError::RecordMismatch {
                    expected: core::any::type_name::<T>(),
                    found: record.record_info().type_path(),
                }),
            },
            Self::Record(RecordValue::Borrowed(record)) => {
                Err(ValueError::BorrowedRecord(record.record_info().type_path()))
            }
            other => Err(ValueError::Mismatch {
                expected: "record",
                found: other.kind_name(),
            }),
        }
    }

    /// Resolves an enum variant from an `Enum` or `String` value.
    pub fn into_enum<T: JsonEnum>(self) -> Result<T, ValueError> {
        let Some(name) = self.as_str() else {
            return Err(ValueError::Mismatch {
                expected: "enum",
                found: self.kind_name(),
            });
        };
        T::from_variant_name(name).ok_or_else(|| ValueError::UnknownVariant {
            variant: name.to_string(),
            target: core::any::type_name::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordValue, Value};
    use crate::value::ValueError;

    #[derive(crate::derive::Record, Default, Debug, PartialEq)]
    struct Empty {}

    #[test]
    fn into_record_rejects_scalars() {
        let err = Value::Bool(true).into_record::<Empty>().unwrap_err();
        assert_eq!(
            err,
            ValueError::Mismatch {
                expected: "record",
                found: "bool"
            }
        );
    }

    #[test]
    fn into_record_needs_ownership() {
        let empty = Empty {};
        let err = Value::Record(RecordValue::Borrowed(&empty))
            .into_record::<Empty>()
            .unwrap_err();
        assert!(matches!(err, ValueError::BorrowedRecord(path) if path.ends_with("Empty")));

        let owned = Value::Record(RecordValue::Owned(Box::new(Empty {})));
        assert_eq!(owned.into_record::<Empty>().unwrap(), Empty {});
    }
}
