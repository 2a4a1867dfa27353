//! The default [`TypeHandler`](crate::registry::TypeHandler) of every
//! [`ScalarKind`](crate::info::ScalarKind).
//!
//! | kind | JSON form | also reads |
//! |---|---|---|
//! | `Bool` | `true` | `"true"`, `"false"` |
//! | `Int`, `UInt` | `12` | numeric strings, integral floats |
//! | `Float` | `1.5` | numeric strings |
//! | `Char` | `"c"` | |
//! | `String` | `"text"` | numbers, booleans |
//! | `Date` | epoch milliseconds | numeric strings, RFC 3339 strings |
//! | `Uuid` | hyphenated string | |
//! | `Enum` | variant name | |
//! | `Blob` | standard base64 | arrays of byte values |

mod extern_types;
mod number;
mod text;

pub use extern_types::{BlobHandler, DateHandler, UuidHandler};
pub use number::{FloatHandler, IntHandler, UIntHandler};
pub use text::{BoolHandler, CharHandler, EnumHandler, StringHandler};
