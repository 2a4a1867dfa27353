use alloc::boxed::Box;
use alloc::vec::Vec;
use std::sync::OnceLock;

use jm_utils::hash::{FixedHashState, HashSet};

use crate::info::{FieldSpec, KeyPath, Type};
use crate::record::Record;

// -----------------------------------------------------------------------------
// RecordInfo

/// The schema of a record type: its ordered field descriptors and a factory.
///
/// Built once per type and immutable afterwards, usually by
/// `#[derive(Record)]` through a [`RecordInfoCell`].
///
/// # Examples
///
/// ```
/// use jm_json::derive::Record;
/// use jm_json::record::Schema;
///
/// #[derive(Record, Default)]
/// struct Point {
///     x: i32,
///     #[record(key = "y_pos", optional)]
///     y: i32,
/// }
///
/// let info = Point::schema();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().key(), "y_pos");
/// assert!(info.field("y_pos").unwrap().is_optional());
/// assert_eq!(info.type_ident(), "Point");
/// ```
pub struct RecordInfo {
    ty: Type,
    fields: Box<[FieldSpec]>,
    new: fn() -> Box<dyn Record>,
}

impl RecordInfo {
    /// Creates the schema of `T`; fields are kept in the given order.
    ///
    /// Two fields sharing a key would overwrite each other in the output;
    /// that is reported with `log::warn!`.
    pub fn new<T: Record + Default>(fields: Vec<FieldSpec>) -> Self {
        let ty = Type::of::<T>();

        {
            let mut seen: HashSet<&str> =
                HashSet::with_capacity_and_hasher(fields.len(), FixedHashState);
            for field in &fields {
                if !seen.insert(field.key()) {
                    log::warn!(
                        "record `{}` declares key `{}` more than once",
                        ty.path(),
                        KeyPath::display(field.key()),
                    );
                }
            }
        }

        Self {
            ty,
            fields: fields.into_boxed_slice(),
            new: || Box::new(T::default()),
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    #[inline]
    pub fn type_ident(&self) -> &'static str {
        self.ty.ident()
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Returns the field with the given JSON key.
    ///
    /// This is O(N) complexity.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key() == key)
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Creates a default-initialized instance.
    #[inline]
    pub fn instantiate(&self) -> Box<dyn Record> {
        (self.new)()
    }
}

impl core::fmt::Debug for RecordInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordInfo")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// RecordInfoCell

/// Lazily built storage for the [`RecordInfo`] of a non-generic record type.
///
/// ```
/// use jm_json::info::{RecordInfo, RecordInfoCell};
///
/// # #[derive(jm_json::derive::Record, Default)]
/// # struct Empty {}
/// static CELL: RecordInfoCell = RecordInfoCell::new();
///
/// let info = CELL.get_or_init(|| RecordInfo::new::<Empty>(Vec::new()));
/// assert_eq!(info.field_len(), 0);
/// ```
pub struct RecordInfoCell(OnceLock<RecordInfo>);

impl RecordInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> RecordInfo) -> &RecordInfo {
        self.0.get_or_init(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Record;
    use crate::record::Schema;

    #[derive(Record, Default, Debug, PartialEq)]
    struct Twice {
        first: i32,
        #[record(key = "first")]
        second: i32,
    }

    #[test]
    fn duplicate_keys_still_build() {
        let info = Twice::schema();

        assert_eq!(info.field_len(), 2);
        assert_eq!(info.field("first").unwrap().name(), "first");
        assert_eq!(info.field_at(1).unwrap().key(), "first");
    }

    #[test]
    fn instantiate_uses_default() {
        let record = Twice::schema().instantiate();
        assert_eq!(record.downcast_ref::<Twice>(), Some(&Twice::default()));
    }
}
