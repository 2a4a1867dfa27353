use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use jm_utils::TypeIdMap;

use crate::info::{ScalarKind, TypeInfo};
use crate::registry::TypeHandler;
use crate::registry::handlers;

// -----------------------------------------------------------------------------
// TypeRegistry

/// The lookup from a declared type to its [`TypeHandler`].
///
/// Two tables are kept: one slot per [`ScalarKind`], and handlers for exact
/// types. [`get`](Self::get) tries the exact type first, then the kind of a
/// scalar. Records and sequences only ever match an exact-type handler; the
/// converter handles them structurally otherwise.
///
/// Registration needs `&mut self`; share the registry by reference (or in an
/// `Arc`) once it is populated.
///
/// # Examples
///
/// ```
/// use jm_json::info::{ScalarKind, TypeInfo, Typed};
/// use jm_json::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// assert_eq!(registry.get(&u16::type_info()).unwrap().name(), "uint");
/// assert_eq!(registry.get(&Option::<bool>::type_info()).unwrap().name(), "bool");
/// assert!(registry.get(&Vec::<bool>::type_info()).is_none());
/// assert!(registry.get(&TypeInfo::opaque::<()>()).is_none());
///
/// assert!(TypeRegistry::empty().get_kind(ScalarKind::Int).is_none());
/// ```
pub struct TypeRegistry {
    kind_handlers: [Option<Arc<dyn TypeHandler>>; ScalarKind::COUNT],
    type_handlers: TypeIdMap<Arc<dyn TypeHandler>>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any handler.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            kind_handlers: [const { None }; ScalarKind::COUNT],
            type_handlers: TypeIdMap::new(),
        }
    }

    /// Creates a registry with the default handler of every [`ScalarKind`].
    ///
    /// See [`handlers`](crate::registry::handlers).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_kind(ScalarKind::Bool, handlers::BoolHandler);
        registry.register_kind(ScalarKind::Int, handlers::IntHandler);
        registry.register_kind(ScalarKind::UInt, handlers::UIntHandler);
        registry.register_kind(ScalarKind::Float, handlers::FloatHandler);
        registry.register_kind(ScalarKind::Char, handlers::CharHandler);
        registry.register_kind(ScalarKind::String, handlers::StringHandler);
        registry.register_kind(ScalarKind::Date, handlers::DateHandler);
        registry.register_kind(ScalarKind::Uuid, handlers::UuidHandler);
        registry.register_kind(ScalarKind::Enum, handlers::EnumHandler);
        registry.register_kind(ScalarKind::Blob, handlers::BlobHandler);
        registry
    }

    /// Sets the handler of a scalar kind, returning the previous one.
    ///
    /// Replacing a handler is logged as a warning.
    pub fn register_kind(
        &mut self,
        kind: ScalarKind,
        handler: impl TypeHandler,
    ) -> Option<Arc<dyn TypeHandler>> {
        let previous = self.kind_handlers[kind.index()].replace(Arc::new(handler));
        if let Some(previous) = &previous {
            log::warn!("handler `{}` of kind `{kind}` was replaced", previous.name());
        }
        previous
    }

    /// Sets the handler of the exact type `T`, returning the previous one.
    ///
    /// An exact-type handler takes precedence over the kind handler and is
    /// the only way to convert an opaque type. `Option<T>` shares the handler
    /// of `T`.
    ///
    /// Replacing a handler is logged as a warning.
    pub fn register_type<T: ?Sized + 'static>(
        &mut self,
        handler: impl TypeHandler,
    ) -> Option<Arc<dyn TypeHandler>> {
        let previous = self
            .type_handlers
            .insert_type::<T>(Arc::new(handler) as Arc<dyn TypeHandler>);
        if let Some(previous) = &previous {
            log::warn!(
                "handler `{}` of type `{}` was replaced",
                previous.name(),
                core::any::type_name::<T>(),
            );
        }
        previous
    }

    /// Returns the handler for a declared type, if any.
    pub fn get(&self, info: &TypeInfo) -> Option<&dyn TypeHandler> {
        if let Some(handler) = self.type_handlers.get(&info.id()) {
            return Some(&**handler);
        }
        self.get_kind(info.scalar_kind()?)
    }

    /// Returns the handler of a scalar kind, if any.
    #[inline]
    pub fn get_kind(&self, kind: ScalarKind) -> Option<&dyn TypeHandler> {
        self.kind_handlers[kind.index()].as_deref()
    }

    /// Returns the handler registered for an exact type, if any.
    #[inline]
    pub fn get_type(&self, type_id: TypeId) -> Option<&dyn TypeHandler> {
        self.type_handlers.get(&type_id).map(|handler| &**handler)
    }

    /// Returns `true` if [`get`](Self::get) would find a handler.
    #[inline]
    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.get(info).is_some()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<_> = ScalarKind::ALL
            .iter()
            .filter_map(|kind| self.get_kind(*kind).map(|handler| (kind.name(), handler.name())))
            .collect();
        f.debug_struct("TypeRegistry")
            .field("kinds", &kinds)
            .field("types", &self.type_handlers.len())
            .finish()
    }
}
