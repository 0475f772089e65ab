use std::ffi::CString;
use std::fmt::{self, Debug, Display, Formatter};

use libc::tm;

use crate::time::{FormatError, InteriorNulError, OutputTooLongError};

const INITIAL_CAPACITY: usize = 1000;
const MAX_CAPACITY: usize = 64 * 1024;

/// A calendar time split into its fields, in either UTC or local time.
#[derive(Clone, Copy)]
pub struct BrokenDown(tm);

impl BrokenDown {
    pub(crate) const fn from_tm(raw: tm) -> BrokenDown {
        BrokenDown(raw)
    }

    pub const fn year(&self) -> i64 {
        self.0.tm_year as i64 + 1900
    }

    /// Month of the year, starting at 1 for January.
    pub const fn month(&self) -> u32 {
        self.0.tm_mon as u32 + 1
    }

    pub const fn day(&self) -> u32 {
        self.0.tm_mday as u32
    }

    pub const fn hour(&self) -> u32 {
        self.0.tm_hour as u32
    }

    pub const fn minute(&self) -> u32 {
        self.0.tm_min as u32
    }

    /// Seconds past the minute, which may be 60 for a leap second.
    pub const fn second(&self) -> u32 {
        self.0.tm_sec as u32
    }

    /// Days since January 1st, starting at 0.
    pub const fn year_day(&self) -> u32 {
        self.0.tm_yday as u32
    }

    /// Days since Sunday, starting at 0.
    pub const fn week_day(&self) -> u32 {
        self.0.tm_wday as u32
    }

    /// Renders this time according to a `strftime` pattern, in the process's current locale.
    pub fn format(&self, pattern: &str) -> Result<String, FormatError> {
        // strftime returns 0 both when the buffer is too small and when the output is legitimately
        // empty. A trailing marker makes the output non-empty, so 0 always means the former.
        let mut marked = String::with_capacity(pattern.len() + 1);
        marked.push_str(pattern);
        marked.push('|');
        let c_pattern = CString::new(marked).map_err(|_| InteriorNulError)?;

        let mut capacity = INITIAL_CAPACITY;
        loop {
            let mut buffer = Vec::<u8>::with_capacity(capacity);
            // SAFETY: The buffer has room for capacity bytes, which is the limit passed on, and
            // both the pattern and the tm are valid for the duration of the call.
            let written = unsafe {
                libc::strftime(buffer.as_mut_ptr().cast(), capacity, c_pattern.as_ptr(), &self.0)
            };

            if written > 0 {
                // SAFETY: strftime initialized the first written bytes, which doesn't include the
                // trailing nul.
                unsafe { buffer.set_len(written - 1) };
                return Ok(String::from_utf8_lossy(&buffer).into_owned());
            }

            if capacity == MAX_CAPACITY {
                break;
            }
            // The last attempt is clamped so the full maximum is always tried.
            capacity = (capacity * 2).min(MAX_CAPACITY);
        }

        Err(OutputTooLongError)?
    }

    /// Renders a single conversion, `%` followed by `specifier`.
    pub fn format_specifier(&self, specifier: char) -> Result<String, FormatError> {
        self.format(&format!("%{specifier}"))
    }
}

impl Display for BrokenDown {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(), self.month(), self.day(), self.hour(), self.minute(), self.second()
        )
    }
}

impl Debug for BrokenDown {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokenDown")
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("hour", &self.hour())
            .field("minute", &self.minute())
            .field("second", &self.second())
            .field("year_day", &self.year_day())
            .field("week_day", &self.week_day())
            .field("dst", &self.0.tm_isdst)
            .finish()
    }
}
