use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::RecordInfo;
use crate::record::Schema;

// -----------------------------------------------------------------------------
// Type

/// A concrete Rust type: its [`TypeId`] and its type path.
///
/// # Examples
///
/// ```
/// use jm_json::info::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert!(ty.is::<Vec<u8>>());
/// assert_eq!(ty.ident(), "Vec");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::vec::Vec<u8>`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type name without module path and generics.
    pub fn ident(&self) -> &'static str {
        let bare = match self.path.find('<') {
            Some(index) => &self.path[..index],
            None => self.path,
        };
        match bare.rfind("::") {
            Some(index) => &bare[index + 2..],
            None => bare,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// ScalarKind

/// The scalar kinds the default handlers know how to convert.
///
/// Handler dispatch is a table indexed by this tag, see
/// [`TypeRegistry`](crate::registry::TypeRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    UInt,
    Float,
    Char,
    String,
    /// Points in time, `chrono::DateTime<Utc>`.
    Date,
    Uuid,
    /// Unit-only enums, carried by variant name.
    Enum,
    /// Opaque byte strings, see [`Blob`](crate::value::Blob).
    Blob,
}

impl ScalarKind {
    /// Number of kinds.
    pub const COUNT: usize = 10;

    /// All kinds, in index order.
    pub const ALL: [ScalarKind; Self::COUNT] = [
        Self::Bool,
        Self::Int,
        Self::UInt,
        Self::Float,
        Self::Char,
        Self::String,
        Self::Date,
        Self::Uuid,
        Self::Enum,
        Self::Blob,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
            Self::Date => "date",
            Self::Uuid => "uuid",
            Self::Enum => "enum",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// A scalar type and its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    #[inline]
    pub fn of<T: ?Sized + 'static>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}

// -----------------------------------------------------------------------------
// RecordType

/// A nested record type.
///
/// The [`RecordInfo`] is resolved lazily, so a record type holding a
/// `Vec<Self>` does not recurse while its schema is being built.
#[derive(Clone, Copy)]
pub struct RecordType {
    ty: Type,
    info: fn() -> &'static RecordInfo,
}

impl RecordType {
    #[inline]
    pub fn of<T: Schema>() -> Self {
        Self {
            ty: Type::of::<T>(),
            info: T::schema,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the schema of the record type.
    #[inline]
    pub fn info(&self) -> &'static RecordInfo {
        (self.info)()
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.ty).finish()
    }
}

// -----------------------------------------------------------------------------
// SeqInfo

/// The container shape of a sequence type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqShape {
    /// `Vec<T>`, `Box<[T]>`.
    Array,
    /// Ordered collections: `VecDeque<T>`, `LinkedList<T>`.
    List,
    /// Unordered collections: `HashSet<T>`, `BTreeSet<T>`.
    Set,
}

/// A sequence type and its element type.
#[derive(Clone, Debug)]
pub struct SeqInfo {
    ty: Type,
    shape: SeqShape,
    item: Box<TypeInfo>,
}

impl SeqInfo {
    #[inline]
    pub fn of<T: ?Sized + 'static>(shape: SeqShape, item: TypeInfo) -> Self {
        Self {
            ty: Type::of::<T>(),
            shape,
            item: Box::new(item),
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn shape(&self) -> SeqShape {
        self.shape
    }

    /// Returns the element type.
    #[inline]
    pub fn item(&self) -> &TypeInfo {
        &self.item
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// The declared type of a field, as seen by the converter.
///
/// # Examples
///
/// ```
/// use jm_json::info::{ScalarKind, SeqShape, TypeInfo, Typed};
///
/// let info = <Vec<i32> as Typed>::type_info();
/// let seq = info.as_seq().unwrap();
///
/// assert_eq!(seq.shape(), SeqShape::Array);
/// assert_eq!(info.element_type().unwrap().scalar_kind(), Some(ScalarKind::Int));
///
/// // `Option` is transparent.
/// assert_eq!(<Option<bool> as Typed>::type_info().scalar_kind(), Some(ScalarKind::Bool));
/// ```
#[derive(Clone, Debug)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Record(RecordType),
    Seq(SeqInfo),
    /// A type with no structure known to the engine.
    ///
    /// Only convertible when a handler is registered for it exactly.
    Opaque(Type),
}

impl TypeInfo {
    /// Creates an [`Opaque`](TypeInfo::Opaque) info for `T`.
    #[inline]
    pub fn opaque<T: ?Sized + 'static>() -> Self {
        Self::Opaque(Type::of::<T>())
    }

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Record(info) => info.ty(),
            Self::Seq(info) => info.ty(),
            Self::Opaque(ty) => ty,
        }
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.ty().id()
    }

    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(info) => Some(info.kind()),
            _ => None,
        }
    }

    pub const fn as_record(&self) -> Option<&RecordType> {
        match self {
            Self::Record(info) => Some(info),
            _ => None,
        }
    }

    pub const fn as_seq(&self) -> Option<&SeqInfo> {
        match self {
            Self::Seq(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns `true` for records and sequences, the shapes the converter
    /// handles itself.
    #[inline]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Record(_) | Self::Seq(_))
    }

    /// Returns the element type of a sequence, `None` otherwise.
    #[inline]
    pub fn element_type(&self) -> Option<&TypeInfo> {
        self.as_seq().map(SeqInfo::item)
    }
}
