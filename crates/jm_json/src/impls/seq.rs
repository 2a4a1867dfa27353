use alloc::boxed::Box;
use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use jm_utils::hash::hashbrown::HashSet as HashbrownSet;

use crate::impls::mismatch;
use crate::info::{SeqInfo, SeqShape, TypeInfo, Typed};
use crate::value::{FromValue, ToValue, Value, ValueError};

fn collect_items<T, C>(value: Value<'static>) -> Result<C, ValueError>
where
    T: FromValue,
    C: FromIterator<T>,
{
    match value {
        Value::Seq(items) => items.into_iter().map(T::from_value).collect(),
        other => Err(mismatch("seq", &other)),
    }
}

macro_rules! impl_seq {
    ($shape:ident: $ty:ident<T $(, $param:ident)*> $(where $($bound:tt)+)?) => {
        impl<T: Typed $(, $param: 'static)*> Typed for $ty<T $(, $param)*> {
            fn type_info() -> TypeInfo {
                TypeInfo::Seq(SeqInfo::of::<Self>(SeqShape::$shape, T::type_info()))
            }
        }

        impl<T: ToValue $(, $param)*> ToValue for $ty<T $(, $param)*> {
            fn to_value(&self) -> Value<'_> {
                Value::Seq(self.iter().map(ToValue::to_value).collect())
            }
        }

        impl<T: FromValue $(, $param)*> FromValue for $ty<T $(, $param)*>
        $(where $($bound)+)?
        {
            fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
                collect_items::<T, Self>(value)
            }
        }
    };
}

impl_seq!(Array: Vec<T>);
impl_seq!(List: VecDeque<T>);
impl_seq!(List: LinkedList<T>);
impl_seq!(Set: BTreeSet<T> where T: Ord);
impl_seq!(Set: HashSet<T, S> where T: Eq + Hash, S: BuildHasher + Default);
impl_seq!(Set: HashbrownSet<T, S> where T: Eq + Hash, S: BuildHasher + Default);

impl<T: Typed> Typed for Box<[T]> {
    fn type_info() -> TypeInfo {
        TypeInfo::Seq(SeqInfo::of::<Self>(SeqShape::Array, T::type_info()))
    }
}

impl<T: ToValue> ToValue for Box<[T]> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Box<[T]> {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        collect_items::<T, Vec<T>>(value).map(Vec::into_boxed_slice)
    }
}
