use alloc::string::String;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::info::FieldSpec;
use crate::record::Record;
use crate::serde::policy::field_failure;
use crate::serde::ser::write_value;
use crate::serde::{Diagnostics, JsonError, SerdeContext};

/// Serializes `record` into a new JSON object.
///
/// Fields are written in schema order. A field that fails is skipped if it
/// is optional (with a diagnostic) and fails the whole record otherwise.
pub fn serialize_record(
    ctx: &SerdeContext<'_>,
    record: &dyn Record,
    diags: &mut Diagnostics,
) -> Result<JsonMap<String, JsonValue>, JsonError> {
    let info = record.record_info();
    let mut object = JsonMap::with_capacity(info.field_len());

    for field in info.iter() {
        if let Err(error) = write_field(ctx, &mut object, field, record, diags) {
            field_failure(ctx, info, field, error, diags)?;
        }
    }

    Ok(object)
}

#[inline]
fn write_field(
    ctx: &SerdeContext<'_>,
    object: &mut JsonMap<String, JsonValue>,
    field: &FieldSpec,
    record: &dyn Record,
    diags: &mut Diagnostics,
) -> Result<(), JsonError> {
    let value = field.get(record)?;
    write_value(ctx, object, field.key(), field.declared_type(), &value, diags)
}
