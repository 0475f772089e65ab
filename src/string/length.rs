use std::ffi::{CStr, c_char};

use crate::string::MissingSentinelError;

/// Counts the bytes before the first zero byte of the sequence starting at `text`, walking it by
/// index.
///
/// A null `text` is treated as an absent sequence and results in a length of 0.
///
/// # Safety
/// If `text` isn't null, it must point to a readable sequence of bytes which contains a zero byte
/// at some finite offset. Nothing after that byte is read.
pub unsafe fn length(text: *const c_char) -> usize {
    if text.is_null() {
        return 0;
    }

    let mut size = 0;
    // SAFETY: The caller guarantees that a terminator exists, so every offset up to and including
    // it is within the sequence.
    while unsafe { *text.add(size) } != 0 {
        size += 1;
    }
    size
}

/// Counts the bytes before the first zero byte of the sequence starting at `text`, by advancing a
/// second pointer to the terminator and taking the distance between the two.
///
/// Observably identical to [`length`].
///
/// # Safety
/// Same requirements as [`length`].
pub unsafe fn length_by_offset(text: *const c_char) -> usize {
    if text.is_null() {
        return 0;
    }

    let mut end = text;
    // SAFETY: As with length, end never moves past the terminator.
    while unsafe { *end } != 0 {
        end = unsafe { end.add(1) };
    }

    // SAFETY: Both pointers are derived from text and end is never before it, so the offset is
    // non-negative and fits in an isize.
    unsafe { end.offset_from(text) as usize }
}

/// Returns the length of an already validated sequence, or 0 if there isn't one.
pub fn cstr_length(text: Option<&CStr>) -> usize {
    match text {
        // SAFETY: A CStr is always terminated by a zero byte.
        Some(value) => unsafe { length(value.as_ptr()) },
        None => 0,
    }
}

/// Returns the number of bytes before the first zero byte in `bytes`, or 0 if there are no bytes
/// at all.
///
/// Unlike the raw functions, the scan is bounded by the slice, so a buffer without a terminator is
/// reported as an error instead of being read past its end.
pub fn bytes_length(bytes: Option<&[u8]>) -> Result<usize, MissingSentinelError> {
    match bytes {
        Some(value) => value.iter().position(|b| *b == 0).ok_or(MissingSentinelError),
        None => Ok(0),
    }
}
