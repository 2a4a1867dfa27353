use alloc::borrow::Cow;
use alloc::vec::Vec;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::info::TypeInfo;
use crate::registry::{HandlerError, TypeHandler};
use crate::value::Value;

// -----------------------------------------------------------------------------
// DateHandler

/// Points in time, written as epoch milliseconds.
///
/// Reads numbers, numeric strings and RFC 3339 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateHandler;

impl DateHandler {
    fn from_millis(&self, millis: i64) -> Result<Value<'static>, HandlerError> {
        DateTime::from_timestamp_millis(millis)
            .map(Value::Date)
            .ok_or_else(|| HandlerError::parse(self.name(), millis.to_string(), "timestamp out of range"))
    }

    fn from_text(&self, text: &str) -> Result<Value<'static>, HandlerError> {
        let trimmed = text.trim();
        if let Ok(millis) = trimmed.parse::<i64>() {
            return self.from_millis(millis);
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|date| Value::Date(date.with_timezone(&Utc)))
            .map_err(|err| HandlerError::parse(self.name(), text, err))
    }
}

impl TypeHandler for DateHandler {
    fn name(&self) -> &'static str {
        "date"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Date(date) => Ok(JsonValue::from(date.timestamp_millis())),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        match json {
            JsonValue::Number(number) => match number.as_i64() {
                Some(millis) => self.from_millis(millis),
                None => Err(HandlerError::parse(self.name(), number.to_string(), "not integral milliseconds")),
            },
            JsonValue::String(text) => self.from_text(text),
            other => Err(HandlerError::unexpected_json(self.name(), "a timestamp", other)),
        }
    }

    fn parse_str(&self, _: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        self.from_text(text)
    }
}

// -----------------------------------------------------------------------------
// UuidHandler

/// UUIDs, as hyphenated strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidHandler;

impl TypeHandler for UuidHandler {
    fn name(&self) -> &'static str {
        "uuid"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Uuid(id) => Ok(JsonValue::String(id.hyphenated().to_string())),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        let Some(text) = json.as_str() else {
            return Err(HandlerError::unexpected_json(self.name(), "a string", json));
        };
        Uuid::parse_str(text.trim())
            .map(Value::Uuid)
            .map_err(|err| HandlerError::parse(self.name(), text, err))
    }
}

// -----------------------------------------------------------------------------
// BlobHandler

/// Byte strings, as standard base64.
///
/// Also reads an array of byte values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobHandler;

impl TypeHandler for BlobHandler {
    fn name(&self) -> &'static str {
        "blob"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Bytes(bytes) => Ok(JsonValue::String(STANDARD.encode(bytes))),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        match json {
            JsonValue::String(text) => STANDARD
                .decode(text)
                .map(|bytes| Value::Bytes(Cow::Owned(bytes)))
                .map_err(|err| HandlerError::parse(self.name(), text.as_str(), err)),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|v| u8::try_from(v).ok())
                        .ok_or_else(|| HandlerError::unexpected_json(self.name(), "a byte value", item))
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(|bytes| Value::Bytes(Cow::Owned(bytes))),
            other => Err(HandlerError::unexpected_json(self.name(), "a base64 string", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::{BlobHandler, DateHandler, UuidHandler};
    use crate::info::{TypeInfo, Typed};
    use crate::registry::TypeHandler;
    use crate::value::Value;

    fn ty() -> TypeInfo {
        u8::type_info()
    }

    #[test]
    fn date_forms() {
        let expect = |value: Value<'static>, millis: i64| match value {
            Value::Date(date) => assert_eq!(date.timestamp_millis(), millis),
            other => panic!("unexpected {other:?}"),
        };
        expect(DateHandler.from_json(&ty(), &json!(86_400_000)).unwrap(), 86_400_000);
        expect(DateHandler.from_json(&ty(), &json!("1000")).unwrap(), 1_000);
        expect(
            DateHandler.from_json(&ty(), &json!("1970-01-01T00:00:02+00:00")).unwrap(),
            2_000,
        );
        assert!(DateHandler.parse_str(&ty(), "yesterday").is_err());
    }

    #[test]
    fn uuid_hyphenated() {
        let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let json = UuidHandler.to_json(&ty(), &Value::Uuid(id)).unwrap();
        assert_eq!(json, json!("01234567-89ab-cdef-0123-456789abcdef"));
        assert!(matches!(UuidHandler.from_json(&ty(), &json), Ok(Value::Uuid(read)) if read == id));
    }

    #[test]
    fn blob_base64() {
        let json = BlobHandler
            .to_json(&ty(), &Value::Bytes(b"hi!".as_slice().into()))
            .unwrap();
        assert_eq!(json, json!("aGkh"));
        assert!(matches!(BlobHandler.from_json(&ty(), &json), Ok(Value::Bytes(bytes)) if *bytes == *b"hi!"));
        assert!(matches!(BlobHandler.from_json(&ty(), &json!([104, 105])), Ok(Value::Bytes(bytes)) if *bytes == *b"hi"));
        assert!(BlobHandler.from_json(&ty(), &json!("***")).is_err());
    }
}
