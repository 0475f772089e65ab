//! Checked wrappers around the floating point functions of C's `<math.h>`.
//!
//! C reports a bad argument or an unrepresentable result by setting the global `errno` to `EDOM`
//! or `ERANGE` and returning NaN or an infinity, which callers then have to remember to inspect
//! and clear. Here each function has a raw form, returning whatever IEEE 754 produces, and a
//! checked form, which turns those same conditions into a [`MathError`].
//!
//! Some functions that Rust doesn't provide on [`f64`] ([`frexp`], [`modf`] and [`ldexp`]) are
//! implemented directly on the bit representation.

mod error;
mod float;
mod function;

pub use std::f64::consts::PI;

pub use error::*;
pub use float::*;
pub use function::*;
