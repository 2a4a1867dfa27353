use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::record::Schema;
use crate::registry::TypeRegistry;
use crate::serde::de::deserialize_fields;
use crate::serde::ser::serialize_record;
use crate::serde::{Diagnostics, JsonConfig, JsonError, SerdeContext};

/// Maps records of type `R` to and from JSON.
///
/// The serializer borrows a populated [`TypeRegistry`] and is cheap to
/// create. Methods ending in `_with` collect [`Diagnostics`] into the given
/// collector; the others discard them.
///
/// # Examples
///
/// ```
/// use jm_json::derive::Record;
/// use jm_json::registry::TypeRegistry;
/// use jm_json::serde::{JsonError, JsonSerializer};
/// use serde_json::json;
///
/// #[derive(Record, Default, Debug, PartialEq)]
/// struct Item {
///     id: u32,
///     #[record(optional)]
///     tags: Vec<String>,
/// }
///
/// let registry = TypeRegistry::new();
/// let serializer = JsonSerializer::<Item>::new(&registry);
///
/// let items = serializer.from_str_all(r#"[{"id": 1}, {"id": 2, "tags": "[\"a\"]"}]"#).unwrap();
/// assert_eq!(items[1], Item { id: 2, tags: vec!["a".into()] });
///
/// let json = serializer.serialize_all(&items).unwrap();
/// assert_eq!(json[0], json!({"id": 1, "tags": []}));
///
/// let err = serializer.from_str("{}").unwrap_err();
/// assert!(matches!(err, JsonError::MissingRequiredKey(key) if key == "id"));
/// ```
pub struct JsonSerializer<'a, R: Schema> {
    context: SerdeContext<'a>,
    marker: PhantomData<fn() -> R>,
}

impl<'a, R: Schema> JsonSerializer<'a, R> {
    /// Creates a serializer with the default [`JsonConfig`].
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            context: SerdeContext::new(registry, JsonConfig::new()),
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn with_config(self, config: JsonConfig) -> Self {
        Self {
            context: SerdeContext::new(self.context.registry(), config),
            marker: PhantomData,
        }
    }

    #[inline]
    pub const fn context(&self) -> &SerdeContext<'a> {
        &self.context
    }

    /// Serializes one record into a JSON object.
    #[inline]
    pub fn serialize(&self, record: &R) -> Result<JsonMap<String, JsonValue>, JsonError> {
        self.serialize_with(record, &mut Diagnostics::new())
    }

    pub fn serialize_with(
        &self,
        record: &R,
        diags: &mut Diagnostics,
    ) -> Result<JsonMap<String, JsonValue>, JsonError> {
        serialize_record(&self.context, record, diags)
    }

    /// Deserializes one record from a JSON object.
    ///
    /// The record is built from `R::default()` and only returned when every
    /// required field succeeded.
    #[inline]
    pub fn deserialize(&self, object: &JsonMap<String, JsonValue>) -> Result<R, JsonError> {
        self.deserialize_with(object, &mut Diagnostics::new())
    }

    pub fn deserialize_with(
        &self,
        object: &JsonMap<String, JsonValue>,
        diags: &mut Diagnostics,
    ) -> Result<R, JsonError> {
        let mut record = R::default();
        self.deserialize_into(&mut record, object, diags)?;
        Ok(record)
    }

    /// Deserializes a JSON object into an existing record.
    ///
    /// Fields without a key in `object` keep their value. On error, the
    /// fields read before the failing one have already been overwritten.
    pub fn deserialize_into(
        &self,
        record: &mut R,
        object: &JsonMap<String, JsonValue>,
        diags: &mut Diagnostics,
    ) -> Result<(), JsonError> {
        deserialize_fields(&self.context, R::schema(), record, object, diags)
    }

    /// Serializes records in order. The first failure aborts the batch.
    #[inline]
    pub fn serialize_all(&self, records: &[R]) -> Result<Vec<JsonValue>, JsonError> {
        self.serialize_all_with(records, &mut Diagnostics::new())
    }

    pub fn serialize_all_with(
        &self,
        records: &[R],
        diags: &mut Diagnostics,
    ) -> Result<Vec<JsonValue>, JsonError> {
        records
            .iter()
            .map(|record| self.serialize_with(record, diags).map(JsonValue::Object))
            .collect()
    }

    /// Deserializes records in order. The first failure aborts the batch.
    ///
    /// Every element must be a JSON object.
    #[inline]
    pub fn deserialize_all(&self, array: &[JsonValue]) -> Result<Vec<R>, JsonError> {
        self.deserialize_all_with(array, &mut Diagnostics::new())
    }

    pub fn deserialize_all_with(
        &self,
        array: &[JsonValue],
        diags: &mut Diagnostics,
    ) -> Result<Vec<R>, JsonError> {
        array
            .iter()
            .map(|json| match json {
                JsonValue::Object(object) => self.deserialize_with(object, diags),
                other => Err(JsonError::unexpected_json("an object", other)),
            })
            .collect()
    }

    /// Serializes one record as JSON text.
    pub fn to_string(&self, record: &R) -> Result<String, JsonError> {
        let object = JsonValue::Object(self.serialize(record)?);
        serde_json::to_string(&object).map_err(JsonError::Syntax)
    }

    /// Serializes one record as indented JSON text.
    pub fn to_string_pretty(&self, record: &R) -> Result<String, JsonError> {
        let object = JsonValue::Object(self.serialize(record)?);
        serde_json::to_string_pretty(&object).map_err(JsonError::Syntax)
    }

    /// Deserializes one record from JSON text holding an object.
    pub fn from_str(&self, text: &str) -> Result<R, JsonError> {
        match serde_json::from_str::<JsonValue>(text).map_err(JsonError::Syntax)? {
            JsonValue::Object(object) => self.deserialize(&object),
            other => Err(JsonError::unexpected_json("an object", &other)),
        }
    }

    /// Deserializes records from JSON text holding an array of objects.
    pub fn from_str_all(&self, text: &str) -> Result<Vec<R>, JsonError> {
        match serde_json::from_str::<JsonValue>(text).map_err(JsonError::Syntax)? {
            JsonValue::Array(array) => self.deserialize_all(&array),
            other => Err(JsonError::unexpected_json("an array", &other)),
        }
    }
}

impl<R: Schema> Clone for JsonSerializer<'_, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Schema> Copy for JsonSerializer<'_, R> {}

impl<R: Schema> core::fmt::Debug for JsonSerializer<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JsonSerializer")
            .field("record", &core::any::type_name::<R>())
            .field("context", &self.context)
            .finish()
    }
}
