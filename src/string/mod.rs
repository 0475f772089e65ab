//! Byte-length counting for zero-terminated character sequences.
//!
//! The raw functions here follow the C contract of `strlen` with one difference: a null pointer
//! is a valid input and counts as an empty sequence, rather than being undefined behavior. The
//! safe wrappers cover the two ways such a sequence usually reaches Rust code, as a [`CStr`] that
//! has already been validated, or as a plain byte buffer that may or may not contain its
//! terminator.
//!
//! [`CStr`]: std::ffi::CStr

mod error;
mod length;
mod tests;

pub use error::*;
pub use length::*;
