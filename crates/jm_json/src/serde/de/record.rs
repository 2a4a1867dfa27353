use alloc::boxed::Box;
use alloc::string::String;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::info::{FieldSpec, RecordInfo};
use crate::record::Record;
use crate::serde::de::read_value;
use crate::serde::policy::field_failure;
use crate::serde::{Diagnostic, DiagnosticKind, Diagnostics, JsonError, SerdeContext};

/// Deserializes a new record of schema `info` from a JSON object.
///
/// The record starts from its default value; see [`deserialize_fields`].
pub fn deserialize_record(
    ctx: &SerdeContext<'_>,
    info: &'static RecordInfo,
    object: &JsonMap<String, JsonValue>,
    diags: &mut Diagnostics,
) -> Result<Box<dyn Record>, JsonError> {
    let mut record = info.instantiate();
    deserialize_fields(ctx, info, &mut *record, object, diags)?;
    Ok(record)
}

/// Deserializes the fields of `info` from a JSON object into `record`.
///
/// Per field, in schema order:
/// - an absent key leaves an optional field untouched and fails with
///   [`JsonError::MissingRequiredKey`] for a required one;
/// - `null` leaves the field untouched with a [`DiagnosticKind::NullValue`];
/// - a conversion failure is skipped for an optional field and fails the
///   record for a required one.
///
/// Fields set before a failure stay set.
pub fn deserialize_fields(
    ctx: &SerdeContext<'_>,
    info: &RecordInfo,
    record: &mut dyn Record,
    object: &JsonMap<String, JsonValue>,
    diags: &mut Diagnostics,
) -> Result<(), JsonError> {
    for field in info.iter() {
        match read_field(ctx, info, field, record, object, diags) {
            Ok(true) => {}
            Ok(false) if field.is_optional() => {}
            Ok(false) => return Err(JsonError::MissingRequiredKey(String::from(field.key()))),
            Err(error) => field_failure(ctx, info, field, error, diags)?,
        }
    }
    Ok(())
}

// Returns `false` if the key is absent.
fn read_field(
    ctx: &SerdeContext<'_>,
    info: &RecordInfo,
    field: &FieldSpec,
    record: &mut dyn Record,
    object: &JsonMap<String, JsonValue>,
    diags: &mut Diagnostics,
) -> Result<bool, JsonError> {
    let Some(value) = read_value(ctx, object, field.key(), field.declared_type(), diags)? else {
        return Ok(false);
    };

    if value.is_null() {
        ctx.report(
            diags,
            Diagnostic {
                record: info.type_path(),
                key: String::from(field.key()),
                kind: DiagnosticKind::NullValue,
            },
        );
    } else {
        field.set(record, value)?;
    }
    Ok(true)
}
