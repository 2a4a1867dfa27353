use serde_json::{Number, Value as JsonValue};

use crate::info::TypeInfo;
use crate::registry::{HandlerError, TypeHandler};
use crate::value::Value;

// Bounds of the `f64` values that convert to `i64` / `u64` without saturating.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

fn write_integer(handler: &'static str, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
    match value {
        Value::Int(v) => Ok(JsonValue::from(*v)),
        Value::UInt(v) => Ok(JsonValue::from(*v)),
        other => Err(HandlerError::unexpected_value(handler, other)),
    }
}

fn integer_from_number(handler: &'static str, number: &Number) -> Result<Value<'static>, HandlerError> {
    if let Some(v) = number.as_i64() {
        return Ok(Value::Int(v));
    }
    if let Some(v) = number.as_u64() {
        return Ok(Value::UInt(v));
    }
    match number.as_f64() {
        Some(v) if v.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&v) => Ok(Value::Int(v as i64)),
        Some(v) if v.fract() == 0.0 && (0.0..U64_UPPER).contains(&v) => Ok(Value::UInt(v as u64)),
        _ => Err(HandlerError::parse(handler, number.to_string(), "not an integer")),
    }
}

fn integer_from_str(handler: &'static str, text: &str) -> Result<Value<'static>, HandlerError> {
    let trimmed = text.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(Value::Int(v));
    }
    trimmed
        .parse::<u64>()
        .map(Value::UInt)
        .map_err(|err| HandlerError::parse(handler, text, err))
}

fn read_integer(handler: &'static str, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
    match json {
        JsonValue::Number(number) => integer_from_number(handler, number),
        JsonValue::String(text) => integer_from_str(handler, text),
        other => Err(HandlerError::unexpected_json(handler, "an integer", other)),
    }
}

// -----------------------------------------------------------------------------
// IntHandler / UIntHandler

/// Signed integers. Range checks happen when the value reaches the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntHandler;

impl TypeHandler for IntHandler {
    fn name(&self) -> &'static str {
        "int"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        write_integer(self.name(), value)
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        read_integer(self.name(), json)
    }

    fn parse_str(&self, _: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        integer_from_str(self.name(), text)
    }
}

/// Unsigned integers. Range checks happen when the value reaches the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct UIntHandler;

impl TypeHandler for UIntHandler {
    fn name(&self) -> &'static str {
        "uint"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        write_integer(self.name(), value)
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        read_integer(self.name(), json)
    }

    fn parse_str(&self, _: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        integer_from_str(self.name(), text)
    }
}

// -----------------------------------------------------------------------------
// FloatHandler

/// Floating point numbers. `NaN` and infinities have no JSON form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatHandler;

impl FloatHandler {
    fn from_text(&self, text: &str) -> Result<Value<'static>, HandlerError> {
        text.trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|err| HandlerError::parse(self.name(), text, err))
    }
}

impl TypeHandler for FloatHandler {
    fn name(&self) -> &'static str {
        "float"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        let v = match value {
            Value::Float(v) => *v,
            Value::Int(v) => return Ok(JsonValue::from(*v)),
            Value::UInt(v) => return Ok(JsonValue::from(*v)),
            other => return Err(HandlerError::unexpected_value(self.name(), other)),
        };
        Number::from_f64(v)
            .map(JsonValue::Number)
            .ok_or(HandlerError::NonFinite {
                handler: self.name(),
                value: v,
            })
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        match json {
            JsonValue::Number(number) => number
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| HandlerError::parse(self.name(), number.to_string(), "not a float")),
            JsonValue::String(text) => self.from_text(text),
            other => Err(HandlerError::unexpected_json(self.name(), "a number", other)),
        }
    }

    fn parse_str(&self, _: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        self.from_text(text)
    }
}
