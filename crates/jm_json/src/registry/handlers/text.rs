use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use serde_json::Value as JsonValue;

use crate::info::TypeInfo;
use crate::registry::{HandlerError, TypeHandler};
use crate::value::Value;

// -----------------------------------------------------------------------------
// BoolHandler

/// Booleans; also reads `"true"` and `"false"` in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolHandler;

impl TypeHandler for BoolHandler {
    fn name(&self) -> &'static str {
        "bool"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Bool(v) => Ok(JsonValue::Bool(*v)),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        match json {
            JsonValue::Bool(v) => Ok(Value::Bool(*v)),
            JsonValue::String(text) if text.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            JsonValue::String(text) if text.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            JsonValue::String(text) => Err(HandlerError::parse(self.name(), text.as_str(), "not a boolean")),
            other => Err(HandlerError::unexpected_json(self.name(), "a boolean", other)),
        }
    }
}

// -----------------------------------------------------------------------------
// CharHandler

/// Characters, as one-character strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharHandler;

impl TypeHandler for CharHandler {
    fn name(&self) -> &'static str {
        "char"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Char(c) => Ok(JsonValue::String(c.to_string())),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        let Some(text) = json.as_str() else {
            return Err(HandlerError::unexpected_json(self.name(), "a string", json));
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Value::Char(c)),
            _ => Err(HandlerError::parse(self.name(), text, "not a single character")),
        }
    }
}

// -----------------------------------------------------------------------------
// StringHandler

/// Strings; also reads numbers and booleans as their textual form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringHandler;

impl TypeHandler for StringHandler {
    fn name(&self) -> &'static str {
        "string"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::String(text) | Value::Enum(text) => Ok(JsonValue::String(String::from(&**text))),
            Value::Char(c) => Ok(JsonValue::String(c.to_string())),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        let text = match json {
            JsonValue::String(text) => text.clone(),
            JsonValue::Number(number) => number.to_string(),
            JsonValue::Bool(v) => v.to_string(),
            other => return Err(HandlerError::unexpected_json(self.name(), "a string", other)),
        };
        Ok(Value::String(Cow::Owned(text)))
    }

    fn parse_str(&self, _: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        Ok(Value::String(Cow::Owned(text.into())))
    }
}

// -----------------------------------------------------------------------------
// EnumHandler

/// Unit-only enums, by variant name.
///
/// Unknown names are rejected when the value reaches the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumHandler;

impl TypeHandler for EnumHandler {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::Enum(name) | Value::String(name) => Ok(JsonValue::String(String::from(&**name))),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        match json {
            JsonValue::String(name) => Ok(Value::Enum(Cow::Owned(name.clone()))),
            other => Err(HandlerError::unexpected_json(self.name(), "a variant name", other)),
        }
    }
}
