use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::info::{KeyPath, RecordInfo, SeqInfo, TypeInfo};
use crate::serde::de::deserialize_record;
use crate::serde::{Diagnostics, JsonError, SerdeContext};
use crate::value::{RecordValue, Value};

/// Reads the value stored in `container` under `key`, declared as `declared`.
///
/// A nested `key` descends into the objects named by its leading segments.
/// Returns `Ok(None)` when the key is absent, which includes an absent or
/// `null` intermediate object. A present `null` reads as [`Value::Null`].
pub fn read_value(
    ctx: &SerdeContext<'_>,
    container: &JsonMap<String, JsonValue>,
    key: &str,
    declared: &TypeInfo,
    diags: &mut Diagnostics,
) -> Result<Option<Value<'static>>, JsonError> {
    let mut object = container;
    let mut rest = key;
    while let Some((head, tail)) = KeyPath::split_first(rest) {
        object = match object.get(head) {
            None | Some(JsonValue::Null) => return Ok(None),
            Some(JsonValue::Object(map)) => map,
            Some(other) => return Err(JsonError::unexpected_json("an object", other)),
        };
        rest = tail;
    }

    match object.get(rest) {
        Some(json) => value_from_json(ctx, declared, json, diags).map(Some),
        None => Ok(None),
    }
}

/// Converts `json` to a [`Value`] according to the declared type.
///
/// `null` reads as [`Value::Null`]. A registered handler is tried first; if
/// it fails, records are read from objects and sequences from arrays (or
/// from strings holding a JSON array). The handler error is returned when
/// no structural reading applies.
pub fn value_from_json(
    ctx: &SerdeContext<'_>,
    declared: &TypeInfo,
    json: &JsonValue,
    diags: &mut Diagnostics,
) -> Result<Value<'static>, JsonError> {
    if json.is_null() {
        return Ok(Value::Null);
    }

    let mut handler_error = None;
    if let Some(handler) = ctx.registry().get(declared) {
        match handler.from_json(declared, json) {
            Ok(value) => return Ok(value),
            Err(error) => handler_error = Some(error),
        }
    }

    match declared {
        TypeInfo::Record(record) => record_from_json(ctx, record.info(), json, diags),
        TypeInfo::Seq(seq) => seq_from_json(ctx, seq, json, diags),
        _ => Err(match handler_error {
            Some(error) => error.into(),
            None => JsonError::UnsupportedType(declared.type_path()),
        }),
    }
}

fn record_from_json(
    ctx: &SerdeContext<'_>,
    info: &'static RecordInfo,
    json: &JsonValue,
    diags: &mut Diagnostics,
) -> Result<Value<'static>, JsonError> {
    let Some(object) = json.as_object() else {
        return Err(JsonError::unexpected_json("an object", json));
    };
    deserialize_record(&ctx.nested()?, info, object, diags)
        .map(|record| Value::Record(RecordValue::Owned(record)))
}

fn seq_from_json(
    ctx: &SerdeContext<'_>,
    seq: &SeqInfo,
    json: &JsonValue,
    diags: &mut Diagnostics,
) -> Result<Value<'static>, JsonError> {
    let parsed: Vec<JsonValue>;
    let items = match json {
        JsonValue::Array(items) => items,
        JsonValue::String(text) => {
            parsed = serde_json::from_str(text).map_err(JsonError::MalformedArrayLiteral)?;
            &parsed
        }
        other => return Err(JsonError::unexpected_json("an array", other)),
    };

    items
        .iter()
        .map(|item| element_from_json(ctx, seq.item(), item, diags))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Seq)
}

// Scalar elements go through the textual form of the JSON value and the
// element handler's `parse_str`.
fn element_from_json(
    ctx: &SerdeContext<'_>,
    item: &TypeInfo,
    json: &JsonValue,
    diags: &mut Diagnostics,
) -> Result<Value<'static>, JsonError> {
    if json.is_null() {
        return Ok(Value::Null);
    }

    match item {
        TypeInfo::Record(record) => record_from_json(ctx, record.info(), json, diags),
        TypeInfo::Seq(seq) => seq_from_json(ctx, seq, json, diags),
        _ => {
            let Some(handler) = ctx.registry().get(item) else {
                return Err(JsonError::UnsupportedType(item.type_path()));
            };
            let text = match json {
                JsonValue::String(text) => Cow::Borrowed(text.as_str()),
                other => Cow::Owned(other.to_string()),
            };
            Ok(handler.parse_str(item, &text)?)
        }
    }
}
