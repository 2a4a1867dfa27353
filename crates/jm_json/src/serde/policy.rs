use alloc::string::{String, ToString};

use crate::info::{FieldSpec, RecordInfo};
use crate::serde::{Diagnostic, DiagnosticKind, Diagnostics, JsonError, SerdeContext};

/// Applies the required/optional policy to a failed field.
///
/// An optional field is skipped with a diagnostic, a required field fails
/// the record. Exceeding the depth limit always fails.
pub(crate) fn field_failure(
    ctx: &SerdeContext<'_>,
    info: &RecordInfo,
    field: &FieldSpec,
    error: JsonError,
    diags: &mut Diagnostics,
) -> Result<(), JsonError> {
    if field.is_optional() && !matches!(error.root_cause(), JsonError::DepthLimitExceeded(_)) {
        ctx.report(
            diags,
            Diagnostic {
                record: info.type_path(),
                key: String::from(field.key()),
                kind: DiagnosticKind::SkippedOptional {
                    reason: error.to_string(),
                },
            },
        );
        Ok(())
    } else {
        Err(JsonError::conversion(field.key(), error))
    }
}
