use std::io;

use libc::c_int;

/// Reads the calling thread's `errno`.
pub fn err_no() -> c_int {
    // raw_os_error is always Some when constructed from last_os_error.
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}
