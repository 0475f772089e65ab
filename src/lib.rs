//! Small, strongly typed reimplementations of pieces of the C standard library.
//!
//! # Purpose
//! Each module takes a C facility whose contract is mostly implicit (a pointer that had better be
//! terminated, a global `errno` that had better be checked) and gives it a Rust interface where
//! those expectations are visible in the types.
//!
//! - [`string`] counts the bytes of zero-terminated sequences, treating a null pointer as empty.
//! - [`math`] wraps the `<math.h>` functions so that domain and range errors come back as
//!   [`Result`]s instead of through `errno`.
//! - `time` converts timestamps into calendar fields and formats them with `strftime`.
//!
//! # Error Handling
//! Errors are strongly typed: each failure is its own (usually zero-sized) struct implementing
//! [`Error`](std::error::Error), and operations that can fail in more than one way return an enum
//! of those structs, so callers can match on exactly what went wrong. Conditions that can only be
//! caused by a bug, such as an `errno` value the C library documents as impossible, panic instead.
//!
//! # Dependencies
//! The `time` module relies on `libc` for the calendar conversions and `strftime`, and is only
//! built on Linux with the `time` feature (enabled by default). The rest of the crate only needs
//! `std`, plus some derive macros to cut down on repetitive error boilerplate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod math;
pub mod string;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
