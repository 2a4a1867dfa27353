use alloc::string::{String, ToString};
use alloc::vec::Vec;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::info::{KeyPath, SeqInfo, TypeInfo};
use crate::record::Record;
use crate::serde::ser::serialize_record;
use crate::serde::{Diagnostics, JsonError, SerdeContext};
use crate::value::{ValueError, Value};

/// Converts `value`, declared as `declared`, and stores it in `container`
/// under `key`.
///
/// A nested `key` descends into the objects named by its leading segments,
/// creating them when absent or `null`. Nothing is inserted when the
/// conversion fails.
pub fn write_value(
    ctx: &SerdeContext<'_>,
    container: &mut JsonMap<String, JsonValue>,
    key: &str,
    declared: &TypeInfo,
    value: &Value<'_>,
    diags: &mut Diagnostics,
) -> Result<(), JsonError> {
    let json = value_to_json(ctx, declared, value, diags)?;

    let mut object = container;
    let mut rest = key;
    while let Some((head, tail)) = KeyPath::split_first(rest) {
        let slot = object
            .entry(head)
            .or_insert_with(|| JsonValue::Object(JsonMap::new()));
        if slot.is_null() {
            *slot = JsonValue::Object(JsonMap::new());
        }
        object = match slot {
            JsonValue::Object(map) => map,
            other => return Err(JsonError::unexpected_json("an object", other)),
        };
        rest = tail;
    }
    object.insert(rest.to_string(), json);
    Ok(())
}

/// Converts `value` to JSON according to its declared type.
///
/// `null` stays `null`. A registered handler is used when there is one;
/// otherwise records become objects and sequences become arrays. Any other
/// type is unsupported.
pub fn value_to_json(
    ctx: &SerdeContext<'_>,
    declared: &TypeInfo,
    value: &Value<'_>,
    diags: &mut Diagnostics,
) -> Result<JsonValue, JsonError> {
    if value.is_null() {
        return Ok(JsonValue::Null);
    }

    if let Some(handler) = ctx.registry().get(declared) {
        return Ok(handler.to_json(declared, value)?);
    }

    match declared {
        TypeInfo::Record(_) => match value {
            Value::Record(record) => record_to_json(ctx, record.as_record(), diags),
            other => Err(mismatch("record", other)),
        },
        TypeInfo::Seq(seq) => match value {
            Value::Seq(items) => seq_to_json(ctx, seq, items, diags),
            other => Err(mismatch("seq", other)),
        },
        _ => Err(JsonError::UnsupportedType(declared.type_path())),
    }
}

fn mismatch(expected: &'static str, found: &Value<'_>) -> JsonError {
    JsonError::Value(ValueError::Mismatch {
        expected,
        found: found.kind_name(),
    })
}

fn record_to_json(
    ctx: &SerdeContext<'_>,
    record: &dyn Record,
    diags: &mut Diagnostics,
) -> Result<JsonValue, JsonError> {
    serialize_record(&ctx.nested()?, record, diags).map(JsonValue::Object)
}

fn seq_to_json(
    ctx: &SerdeContext<'_>,
    seq: &SeqInfo,
    items: &[Value<'_>],
    diags: &mut Diagnostics,
) -> Result<JsonValue, JsonError> {
    items
        .iter()
        .map(|item| element_to_json(ctx, seq.item(), item, diags))
        .collect::<Result<Vec<_>, _>>()
        .map(JsonValue::Array)
}

// Elements only use a handler registered for their exact type; everything
// else is normalized by the shape of the value.
fn element_to_json(
    ctx: &SerdeContext<'_>,
    item: &TypeInfo,
    value: &Value<'_>,
    diags: &mut Diagnostics,
) -> Result<JsonValue, JsonError> {
    if value.is_null() {
        return Ok(JsonValue::Null);
    }
    if let Some(handler) = ctx.registry().get_type(item.id()) {
        return Ok(handler.to_json(item, value)?);
    }

    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        Value::Int(v) => JsonValue::from(*v),
        Value::UInt(v) => JsonValue::from(*v),
        Value::Float(v) => match Number::from_f64(*v) {
            Some(number) => JsonValue::Number(number),
            None => return Err(JsonError::NonFinite(*v)),
        },
        Value::Char(c) => JsonValue::String(c.to_string()),
        Value::String(text) | Value::Enum(text) => JsonValue::String(text.to_string()),
        Value::Date(date) => JsonValue::from(date.timestamp_millis()),
        Value::Uuid(id) => JsonValue::String(id.hyphenated().to_string()),
        Value::Bytes(bytes) => JsonValue::String(STANDARD.encode(bytes)),
        Value::Record(record) => return record_to_json(ctx, record.as_record(), diags),
        Value::Seq(items) => {
            let inner = item.element_type().unwrap_or(item);
            return items
                .iter()
                .map(|value| element_to_json(ctx, inner, value, diags))
                .collect::<Result<Vec<_>, _>>()
                .map(JsonValue::Array);
        }
    })
}
