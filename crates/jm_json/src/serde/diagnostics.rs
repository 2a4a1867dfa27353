use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::info::KeyPath;

/// What happened to a field that did not make it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An optional field failed to convert and was left out.
    SkippedOptional { reason: String },
    /// The input held `null`; the field kept its default.
    NullValue,
}

/// A non-fatal event on one field of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Type path of the record.
    pub record: &'static str,
    /// Key of the field.
    pub key: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = KeyPath::display(&self.key);
        match &self.kind {
            DiagnosticKind::SkippedOptional { reason } => {
                write!(f, "{}: skipped optional field `{key}`: {reason}", self.record)
            }
            DiagnosticKind::NullValue => {
                write!(f, "{}: null value for field `{key}`", self.record)
            }
        }
    }
}

/// Collects the [`Diagnostic`]s of one or more operations.
///
/// # Examples
///
/// ```
/// use jm_json::derive::Record;
/// use jm_json::registry::TypeRegistry;
/// use jm_json::serde::{DiagnosticKind, Diagnostics, JsonSerializer};
/// use serde_json::json;
///
/// #[derive(Record, Default)]
/// struct Note {
///     #[record(optional)]
///     title: Option<String>,
/// }
///
/// let registry = TypeRegistry::new();
/// let serializer = JsonSerializer::<Note>::new(&registry);
/// let mut diags = Diagnostics::new();
///
/// let object = json!({ "title": null });
/// let note = serializer.deserialize_with(object.as_object().unwrap(), &mut diags).unwrap();
///
/// assert!(note.title.is_none());
/// assert_eq!(diags.len(), 1);
/// assert_eq!(diags.iter().next().unwrap().kind, DiagnosticKind::NullValue);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = alloc::vec::IntoIter<Diagnostic>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = core::slice::Iter<'a, Diagnostic>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
