use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use crate::impls::{impl_scalar_typed, mismatch};
use crate::value::{FromValue, ToValue, Value, ValueError};

impl_scalar_typed!(Bool: bool);
impl_scalar_typed!(Int: i8, i16, i32, i64, isize);
impl_scalar_typed!(UInt: u8, u16, u32, u64, usize);
impl_scalar_typed!(Float: f32, f64);
impl_scalar_typed!(Char: char);
impl_scalar_typed!(String: String);

impl ToValue for bool {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(mismatch("bool", &other)),
        }
    }
}

macro_rules! impl_integer {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {$(
        impl ToValue for $ty {
            #[inline]
            fn to_value(&self) -> Value<'_> {
                Value::$variant(*self as $wide)
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
                let out_of_range = |value: String| ValueError::OutOfRange {
                    value,
                    target: stringify!($ty),
                };
                match value {
                    Value::Int(v) => <$ty>::try_from(v).map_err(|_| out_of_range(v.to_string())),
                    Value::UInt(v) => <$ty>::try_from(v).map_err(|_| out_of_range(v.to_string())),
                    other => Err(mismatch(stringify!($ty), &other)),
                }
            }
        }
    )+};
}

impl_integer!(Int as i64: i8, i16, i32, i64, isize);
impl_integer!(UInt as u64: u8, u16, u32, u64, usize);

fn float_from_value(target: &'static str, value: Value<'static>) -> Result<f64, ValueError> {
    match value {
        Value::Float(v) => Ok(v),
        Value::Int(v) => Ok(v as f64),
        Value::UInt(v) => Ok(v as f64),
        other => Err(mismatch(target, &other)),
    }
}

impl ToValue for f64 {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    #[inline]
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        float_from_value("f64", value)
    }
}

impl ToValue for f32 {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    /// Finite values beyond the `f32` range are out of range; precision
    /// loss is not.
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        let v = float_from_value("f32", value)?;
        if v.is_finite() && !(f64::from(f32::MIN)..=f64::from(f32::MAX)).contains(&v) {
            return Err(ValueError::OutOfRange {
                value: v.to_string(),
                target: "f32",
            });
        }
        Ok(v as f32)
    }
}

impl ToValue for char {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Char(*self)
    }
}

impl FromValue for char {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::Char(v) => Ok(v),
            Value::String(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ValueError::OutOfRange {
                        value: text.into_owned(),
                        target: "char",
                    }),
                }
            }
            other => Err(mismatch("char", &other)),
        }
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl FromValue for String {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        match value {
            Value::String(text) | Value::Enum(text) => Ok(text.into_owned()),
            Value::Char(c) => Ok(c.to_string()),
            other => Err(mismatch("string", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::{ScalarKind, Typed};
    use crate::value::{FromValue, ToValue, Value, ValueError};

    #[test]
    fn integer_kinds() {
        assert_eq!(i16::type_info().scalar_kind(), Some(ScalarKind::Int));
        assert_eq!(usize::type_info().scalar_kind(), Some(ScalarKind::UInt));
        assert!(matches!((-3_i8).to_value(), Value::Int(-3)));
        assert!(matches!(7_u32.to_value(), Value::UInt(7)));
    }

    #[test]
    fn integer_range_checks() {
        assert_eq!(u8::from_value(Value::Int(255)).unwrap(), 255);
        assert_eq!(
            u8::from_value(Value::Int(256)).unwrap_err(),
            ValueError::OutOfRange {
                value: "256".into(),
                target: "u8"
            }
        );
        assert!(i32::from_value(Value::UInt(u64::MAX)).is_err());
        assert!(i32::from_value(Value::Float(1.0)).is_err());
    }

    #[test]
    fn float_range_checks() {
        assert_eq!(f32::from_value(Value::Float(0.5)).unwrap(), 0.5);
        assert_eq!(f32::from_value(Value::UInt(3)).unwrap(), 3.0);
        assert!(f32::from_value(Value::Float(f64::NAN)).unwrap().is_nan());
        assert!(matches!(
            f32::from_value(Value::Float(1e300)),
            Err(ValueError::OutOfRange { target: "f32", .. })
        ));
        assert!(f32::from_value(Value::Float(-1e39)).is_err());
        assert_eq!(f64::from_value(Value::Float(1e300)).unwrap(), 1e300);
    }

    #[test]
    fn char_from_text() {
        assert_eq!(char::from_value(Value::String("é".into())).unwrap(), 'é');
        assert!(char::from_value(Value::String("ab".into())).is_err());
        assert!(char::from_value(Value::String("".into())).is_err());
    }

    #[test]
    fn string_from_enum_name() {
        assert_eq!(
            String::from_value(Value::Enum("Admin".into())).unwrap(),
            "Admin"
        );
    }
}
