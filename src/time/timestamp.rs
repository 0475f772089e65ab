use std::mem::MaybeUninit;
use std::ptr;

use derive_more::{Display, From};
use libc::{EOVERFLOW, time_t, tm};

use crate::time::panic::{Panic, UnexpectedErrorPanic};
use crate::time::{BrokenDown, OverflowError};
use crate::util;

type ConvertFn = unsafe extern "C" fn(*const time_t, *mut tm) -> *mut tm;

/// Seconds since 1970-01-01 00:00:00 UTC.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Timestamp {
        // SAFETY: time accepts a null output pointer and can't otherwise fail.
        Timestamp(unsafe { libc::time(ptr::null_mut()) }.into())
    }

    pub fn to_utc(self) -> Result<BrokenDown, OverflowError> {
        self.convert(libc::gmtime_r)
    }

    /// Converts to the local time zone, as configured by `TZ` or the system default.
    pub fn to_local(self) -> Result<BrokenDown, OverflowError> {
        self.convert(libc::localtime_r)
    }

    fn convert(self, convert_fn: ConvertFn) -> Result<BrokenDown, OverflowError> {
        let time = time_t::try_from(self.0).map_err(|_| OverflowError)?;
        let mut raw: MaybeUninit<tm> = MaybeUninit::uninit();

        // SAFETY: Both pointers are valid for the duration of the call and the reentrant
        // conversions don't keep either of them.
        if unsafe { convert_fn(&time, raw.as_mut_ptr()) }.is_null() {
            match util::syscall::err_no() {
                EOVERFLOW => return Err(OverflowError),
                e =>         UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: The conversion either initializes raw or returns null and we've diverged.
        Ok(BrokenDown::from_tm(unsafe { raw.assume_init() }))
    }
}
