use crate::value::{Value, ValueError};

/// Reads a Rust value as a [`Value`], borrowing where possible.
///
/// Implemented for the supported types in [`impls`](crate::impls) and by the
/// derive macros. Field getters are built on it.
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

/// Builds a Rust value from an owned [`Value`].
///
/// Conversions are lenient between numeric kinds as long as the value fits,
/// and strict otherwise. Field setters are built on it.
///
/// ```
/// use jm_json::value::{FromValue, Value};
///
/// assert_eq!(f32::from_value(Value::Int(3)).unwrap(), 3.0);
/// assert_eq!(char::from_value(Value::String("x".into())).unwrap(), 'x');
/// assert!(bool::from_value(Value::Int(1)).is_err());
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError>;
}

/// A unit-only enum, serialized by variant name.
///
/// Use [`derive::JsonEnum`](crate::derive::JsonEnum) to implement this
/// together with [`Typed`](crate::info::Typed), [`ToValue`] and [`FromValue`].
///
/// ```
/// use jm_json::derive::JsonEnum;
/// use jm_json::value::JsonEnum as _;
///
/// #[derive(JsonEnum, Debug, PartialEq)]
/// enum Level {
///     Low,
///     #[record(rename = "HIGH")]
///     High,
/// }
///
/// assert_eq!(Level::High.variant_name(), "HIGH");
/// assert_eq!(Level::from_variant_name("Low"), Some(Level::Low));
/// assert_eq!(Level::variant_names(), ["Low", "HIGH"]);
/// ```
pub trait JsonEnum: Sized + 'static {
    fn variant_name(&self) -> &'static str;

    fn from_variant_name(name: &str) -> Option<Self>;

    fn variant_names() -> &'static [&'static str];
}
