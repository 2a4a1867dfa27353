use alloc::string::String;

use thiserror::Error;

/// A [`Value`](crate::value::Value) could not be turned into the requested Rust type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected a {expected} value, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("value {value} does not fit into `{target}`")]
    OutOfRange { value: String, target: &'static str },
    #[error("`{variant}` is not a variant of `{target}`")]
    UnknownVariant {
        variant: String,
        target: &'static str,
    },
    #[error("expected a record of type `{expected}`, found `{found}`")]
    RecordMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("cannot take ownership of a borrowed `{0}` record")]
    BorrowedRecord(&'static str),
}
