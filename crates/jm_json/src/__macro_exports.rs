//! Items used by the code `jm_json_derive` generates.
//!
//! Not a public API; the generated code must not depend on the prelude or
//! on `alloc` being linked by the caller.
#![doc(hidden)]

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::vec::Vec;
pub use core::any::Any;
pub use core::option::Option::{self, None, Some};
pub use core::result::Result::{self, Err, Ok};
