use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("byte sequence contains no zero terminator")]
pub struct MissingSentinelError;
