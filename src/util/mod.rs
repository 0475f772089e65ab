#[cfg(feature = "time")]
pub mod syscall;
