use crate::info::TypeInfo;

/// Static access to the [`TypeInfo`] of a type.
///
/// Implemented for the supported scalar types and containers in
/// [`impls`](crate::impls), and by `#[derive(Record)]` / `#[derive(JsonEnum)]`.
///
/// A custom type the engine has no structure for reports
/// [`TypeInfo::Opaque`] and needs a handler registered for it exactly:
///
/// ```
/// use jm_json::info::{TypeInfo, Typed};
///
/// struct Rgb(u32);
///
/// impl Typed for Rgb {
///     fn type_info() -> TypeInfo {
///         TypeInfo::opaque::<Self>()
///     }
/// }
///
/// assert!(!Rgb::type_info().is_structural());
/// ```
pub trait Typed: 'static {
    fn type_info() -> TypeInfo;
}
