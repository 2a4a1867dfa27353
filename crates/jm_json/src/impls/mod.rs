//! [`Typed`], [`ToValue`] and [`FromValue`] for the supported field types.
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `bool`, `char`, `String`
//!     - `i8`-`i64`, `isize` (kind `Int`), `u8`-`u64`, `usize` (kind `UInt`)
//!     - `f32`, `f64`
//!     - `chrono::DateTime<Utc>`, `uuid::Uuid`, [`Blob`]
//! - `Option<T>`: transparent, `None` is `null`.
//! - sequences:
//!     - arrays: `Vec<T>`, `Box<[T]>`
//!     - lists: `VecDeque<T>`, `LinkedList<T>`
//!     - sets: `BTreeSet<T>`, `std::collections::HashSet<T, S>`, `hashbrown::HashSet<T, S>`
//!
//! Records and unit-only enums get theirs from the derive macros.
//!
//! [`Typed`]: crate::info::Typed
//! [`ToValue`]: crate::value::ToValue
//! [`FromValue`]: crate::value::FromValue
//! [`Blob`]: crate::value::Blob

// -----------------------------------------------------------------------------
// Modules

mod extern_types;
mod native;
mod option;
mod seq;

macro_rules! impl_scalar_typed {
    ($kind:ident: $($ty:ty),+ $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            #[inline]
            fn type_info() -> $crate::info::TypeInfo {
                $crate::info::TypeInfo::Scalar($crate::info::ScalarInfo::of::<Self>(
                    $crate::info::ScalarKind::$kind,
                ))
            }
        }
    )+};
}

pub(crate) use impl_scalar_typed;

#[inline]
fn mismatch(expected: &'static str, found: &crate::value::Value<'_>) -> crate::value::ValueError {
    crate::value::ValueError::Mismatch {
        expected,
        found: found.kind_name(),
    }
}
