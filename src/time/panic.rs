use std::error::Error;

use derive_more::{Display, Error};
use libc::c_int;

pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
