use alloc::string::{String, ToString};

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::info::TypeInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// HandlerError

/// A [`TypeHandler`] could not convert its input.
///
/// On the read path this is not final: the converter falls back to the
/// structural interpretation of the declared type first.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandlerError {
    #[error("`{handler}` handler cannot write a {found} value")]
    UnexpectedValue {
        handler: &'static str,
        found: &'static str,
    },
    #[error("`{handler}` handler expected {expected}, found JSON {found}")]
    UnexpectedJson {
        handler: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{handler}` handler cannot parse {text:?}: {reason}")]
    Parse {
        handler: &'static str,
        text: String,
        reason: String,
    },
    #[error("`{handler}` handler cannot write non-finite number {value}")]
    NonFinite { handler: &'static str, value: f64 },
    #[error("`{handler}` handler failed: {message}")]
    Custom {
        handler: &'static str,
        message: String,
    },
}

impl HandlerError {
    /// Creates a [`HandlerError::Parse`].
    pub fn parse(handler: &'static str, text: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            handler,
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a [`HandlerError::UnexpectedValue`] for `value`.
    #[inline]
    pub fn unexpected_value(handler: &'static str, value: &Value<'_>) -> Self {
        Self::UnexpectedValue {
            handler,
            found: value.kind_name(),
        }
    }

    /// Creates a [`HandlerError::UnexpectedJson`] for `json`.
    #[inline]
    pub fn unexpected_json(handler: &'static str, expected: &'static str, json: &JsonValue) -> Self {
        Self::UnexpectedJson {
            handler,
            expected,
            found: json_kind_name(json),
        }
    }
}

/// Returns a short name of the kind of a JSON value, for messages.
///
/// ```
/// use jm_json::registry::json_kind_name;
/// use serde_json::json;
///
/// assert_eq!(json_kind_name(&json!(null)), "null");
/// assert_eq!(json_kind_name(&json!({"a": 1})), "object");
/// ```
pub const fn json_kind_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// -----------------------------------------------------------------------------
// TypeHandler

/// A converter between values of one type (or kind) and JSON.
///
/// Handlers are registered per [`ScalarKind`](crate::info::ScalarKind) or
/// per exact type in a [`TypeRegistry`](crate::registry::TypeRegistry).
/// `ty` is the declared type being converted; the default handlers only
/// look at the value.
///
/// # Examples
///
/// A handler for a packed color, written as `"#rrggbb"`:
///
/// ```
/// use jm_json::info::TypeInfo;
/// use jm_json::registry::{HandlerError, TypeHandler};
/// use jm_json::value::Value;
/// use serde_json::Value as JsonValue;
///
/// struct HexColor;
///
/// impl TypeHandler for HexColor {
///     fn name(&self) -> &'static str {
///         "hex_color"
///     }
///
///     fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
///         match value {
///             Value::UInt(rgb) => Ok(JsonValue::String(format!("#{rgb:06x}"))),
///             other => Err(HandlerError::unexpected_value(self.name(), other)),
///         }
///     }
///
///     fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
///         let text = json
///             .as_str()
///             .ok_or_else(|| HandlerError::unexpected_json(self.name(), "string", json))?;
///         let hex = text.strip_prefix('#').unwrap_or(text);
///         u64::from_str_radix(hex, 16)
///             .map(Value::UInt)
///             .map_err(|err| HandlerError::parse(self.name(), text, err))
///     }
/// }
///
/// let ty = TypeInfo::opaque::<u32>();
/// assert_eq!(HexColor.to_json(&ty, &Value::UInt(0xff8000)).unwrap(), "#ff8000");
/// assert!(matches!(HexColor.parse_str(&ty, "#0000ff"), Ok(Value::UInt(0xff))));
/// ```
pub trait TypeHandler: Send + Sync + 'static {
    /// A short name for messages.
    fn name(&self) -> &'static str;

    /// Writes `value` as JSON.
    fn to_json(&self, ty: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError>;

    /// Reads a value from JSON.
    fn from_json(&self, ty: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError>;

    /// Parses a value from its textual form, used for sequence elements.
    ///
    /// Defaults to reading `text` as a JSON string.
    fn parse_str(&self, ty: &TypeInfo, text: &str) -> Result<Value<'static>, HandlerError> {
        self.from_json(ty, &JsonValue::String(text.into()))
    }
}
