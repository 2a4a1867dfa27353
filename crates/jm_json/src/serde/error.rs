use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::info::KeyPath;
use crate::registry::HandlerError;
use crate::value::ValueError;

/// An error while mapping records to or from JSON.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The declared type has no handler and is neither a record nor a sequence.
    #[error("unsupported type `{0}`")]
    UnsupportedType(&'static str),
    /// A required field is absent, directly or through a nested key.
    #[error("missing required key `{}`", KeyPath::display(.0))]
    MissingRequiredKey(String),
    /// A required field failed to convert.
    #[error("cannot convert field `{}`: {source}", KeyPath::display(.key))]
    ConversionFailure {
        key: String,
        #[source]
        source: Box<JsonError>,
    },
    /// A string standing in for a JSON array does not parse as one.
    #[error("malformed array literal: {0}")]
    MalformedArrayLiteral(#[source] serde_json::Error),
    #[error(transparent)]
    Handler(#[from] HandlerError),
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("expected JSON {expected}, found {found}")]
    UnexpectedJson {
        expected: &'static str,
        found: &'static str,
    },
    #[error("nesting exceeds the depth limit of {0}")]
    DepthLimitExceeded(usize),
    #[error("cannot write non-finite number {0}")]
    NonFinite(f64),
    #[error("invalid JSON text: {0}")]
    Syntax(#[source] serde_json::Error),
}

impl JsonError {
    /// Wraps a field failure with the key of the field.
    #[inline]
    pub fn conversion(key: impl Into<String>, source: JsonError) -> Self {
        Self::ConversionFailure {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Creates a [`JsonError::UnexpectedJson`] for `json`.
    #[inline]
    pub fn unexpected_json(expected: &'static str, json: &serde_json::Value) -> Self {
        Self::UnexpectedJson {
            expected,
            found: crate::registry::json_kind_name(json),
        }
    }

    /// Follows [`ConversionFailure`](Self::ConversionFailure) sources down to
    /// the innermost error.
    pub fn root_cause(&self) -> &JsonError {
        let mut error = self;
        while let Self::ConversionFailure { source, .. } = error {
            error = source;
        }
        error
    }
}
