//! Calendar time, as provided by the C library.
//!
//! A [`Timestamp`] counts seconds since the Unix epoch. Converting one to a [`BrokenDown`] time
//! splits it into calendar fields, either in UTC or in the process's local time zone, which can
//! then be rendered with any `strftime` pattern.
#![cfg(target_os = "linux")]

mod broken_down;
mod error;
mod panic;
mod timestamp;

pub use broken_down::*;
pub use error::*;
pub use timestamp::*;

/// The conversion characters understood by every C library's `strftime`.
pub const SPECIFIERS: [char; 22] = [
    'a', 'A', 'b', 'B', 'c', 'd', 'H', 'I', 'j', 'm', 'M',
    'p', 'S', 'U', 'w', 'W', 'x', 'X', 'y', 'Y', 'Z', '%',
];
