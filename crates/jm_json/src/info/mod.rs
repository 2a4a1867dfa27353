//! Static type information driving the mapping.
//!
//! ## Menu
//!
//! - [`Type`]: a `TypeId` plus the type path.
//! - [`TypeInfo`]: the declared type of a field, one of
//!     - [`ScalarInfo`]: a type handled by the registry, tagged with a [`ScalarKind`].
//!     - [`RecordType`]: a nested record, resolving its [`RecordInfo`] lazily.
//!     - [`SeqInfo`]: an array or collection, with its [`SeqShape`] and element type.
//!     - `Opaque`: anything else.
//! - [`Typed`]: static access to a type's `TypeInfo`.
//! - [`FieldSpec`]: the descriptor of one serialized field.
//! - [`RecordInfo`]: the ordered field descriptors of a record type; the schema.
//! - [`KeyPath`], [`KEY_SEPARATOR`]: keys addressing nested JSON objects.

// -----------------------------------------------------------------------------
// Modules

mod field_spec;
mod key_path;
mod record_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_spec::{FieldGetter, FieldSetter, FieldSpec};
pub use key_path::{KEY_SEPARATOR, KeyPath};
pub use record_info::{RecordInfo, RecordInfoCell};
pub use type_info::{RecordType, ScalarInfo, ScalarKind, SeqInfo, SeqShape, Type, TypeInfo};
pub use typed::Typed;
