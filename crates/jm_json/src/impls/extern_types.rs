use alloc::borrow::Cow;
use alloc::string::ToString;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::impls::{impl_scalar_typed, mismatch};
use crate::value::{Blob, FromValue, ToValue, Value, ValueError};

impl_scalar_typed!(Date: DateTime<Utc>);
impl_scalar_typed!(Uuid: Uuid);
impl_scalar_typed!(Blob: Blob);

// -----------------------------------------------------------------------------
// DateTime<Utc>

impl ToValue for DateTime<Utc> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Date(*self)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Date(v) => Ok(v),
            // epoch milliseconds
            Value::Int(millis) => {
                DateTime::from_timestamp_millis(millis).ok_or_else(|| ValueError::OutOfRange {
                    value: millis.to_string(),
                    target: "DateTime<Utc>",
                })
            }
            other => Err(mismatch("date", &other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Uuid

impl ToValue for Uuid {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Uuid(*self)
    }
}

impl FromValue for Uuid {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(text) => Uuid::parse_str(&text).map_err(|_| ValueError::OutOfRange {
                value: text.into_owned(),
                target: "Uuid",
            }),
            other => Err(mismatch("uuid", &other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Blob

impl ToValue for Blob {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(Cow::Borrowed(&self.0))
    }
}

impl FromValue for Blob {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(bytes) => Ok(Blob(bytes.into_owned())),
            Value::Seq(items) => items
                .into_iter()
                .map(u8::from_value)
                .collect::<Result<_, _>>()
                .map(Blob),
            other => Err(mismatch("bytes", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use crate::value::{Blob, FromValue, Value};

    #[test]
    fn date_from_millis() {
        let date = DateTime::<Utc>::from_value(Value::Int(1_500)).unwrap();
        assert_eq!(date.timestamp_millis(), 1_500);
    }

    #[test]
    fn uuid_from_text() {
        let id = Uuid::from_u128(0xabcd);
        let parsed = Uuid::from_value(Value::String(id.to_string().into())).unwrap();
        assert_eq!(parsed, id);
        assert!(Uuid::from_value(Value::String("nope".into())).is_err());
    }

    #[test]
    fn blob_from_numbers() {
        let value = Value::Seq(vec![Value::UInt(1), Value::UInt(255)]);
        assert_eq!(Blob::from_value(value).unwrap(), Blob(vec![1, 255]));
        assert!(Blob::from_value(Value::Seq(vec![Value::UInt(256)])).is_err());
    }
}
