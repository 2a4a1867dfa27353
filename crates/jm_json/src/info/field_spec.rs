use alloc::boxed::Box;
use core::fmt;

use crate::info::{KeyPath, TypeInfo, Typed};
use crate::record::Record;
use crate::value::{Value, ValueError};

/// Reads a field of a record as a dynamic [`Value`].
pub type FieldGetter = for<'a> fn(&'a dyn Record) -> Result<Value<'a>, ValueError>;

/// Writes a dynamic [`Value`] into a field of a record.
pub type FieldSetter = fn(&mut dyn Record, Value<'static>) -> Result<(), ValueError>;

// -----------------------------------------------------------------------------
// FieldSpec

/// The descriptor of one serialized field.
///
/// Carries the JSON key (possibly a nested [`KeyPath`]), the optionality flag,
/// the declared type, and a typed accessor pair. The element type of a
/// sequence field is part of its declared type, see
/// [`element_type`](Self::element_type).
///
/// # Examples
///
/// ```
/// use jm_json::info::{FieldSpec, ScalarKind};
/// use jm_json::record::Record;
/// use jm_json::value::{FromValue, ToValue, Value, ValueError};
///
/// # #[derive(jm_json::derive::Record, Default)]
/// # struct Point { x: i32 }
/// fn get_x(record: &dyn Record) -> Result<Value<'_>, ValueError> {
///     Ok(record.try_downcast_ref::<Point>()?.x.to_value())
/// }
///
/// fn set_x(record: &mut dyn Record, value: Value<'static>) -> Result<(), ValueError> {
///     record.try_downcast_mut::<Point>()?.x = i32::from_value(value)?;
///     Ok(())
/// }
///
/// let spec = FieldSpec::new::<i32>("x", "x", get_x, set_x).with_optional(true);
///
/// assert_eq!(spec.key(), "x");
/// assert!(spec.is_optional());
/// assert_eq!(spec.declared_type().scalar_kind(), Some(ScalarKind::Int));
/// assert!(spec.element_type().is_none());
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    name: &'static str,
    key: Box<str>,
    optional: bool,
    declared: TypeInfo,
    getter: FieldGetter,
    setter: FieldSetter,
}

impl FieldSpec {
    /// Creates a required field of type `T`.
    ///
    /// `name` is the Rust field name, `key` the JSON key.
    pub fn new<T: Typed>(
        name: &'static str,
        key: impl Into<Box<str>>,
        getter: FieldGetter,
        setter: FieldSetter,
    ) -> Self {
        Self {
            name,
            key: key.into(),
            optional: false,
            declared: T::type_info(),
            getter,
            setter,
        }
    }

    /// Sets the optionality flag.
    #[inline]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Returns the Rust field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the JSON key, separators included.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns `true` if the key addresses a nested object.
    #[inline]
    pub fn is_nested(&self) -> bool {
        KeyPath::is_nested(&self.key)
    }

    #[inline]
    pub const fn declared_type(&self) -> &TypeInfo {
        &self.declared
    }

    /// Returns the element type, present iff the declared type is a sequence.
    #[inline]
    pub fn element_type(&self) -> Option<&TypeInfo> {
        self.declared.element_type()
    }

    /// Reads the field from `record`.
    #[inline]
    pub fn get<'a>(&self, record: &'a dyn Record) -> Result<Value<'a>, ValueError> {
        (self.getter)(record)
    }

    /// Writes `value` into the field of `record`.
    #[inline]
    pub fn set(&self, record: &mut dyn Record, value: Value<'static>) -> Result<(), ValueError> {
        (self.setter)(record, value)
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("key", &KeyPath::display(&self.key))
            .field("optional", &self.optional)
            .field("declared", &self.declared)
            .finish()
    }
}
