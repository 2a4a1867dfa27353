use crate::info::{TypeInfo, Typed};
use crate::value::{FromValue, ToValue, Value, ValueError};

impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    #[inline]
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}
