use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("timestamp out of range for calendar conversion")]
pub struct OverflowError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("format pattern contains a nul byte")]
pub struct InteriorNulError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("formatted output exceeds the maximum buffer size")]
pub struct OutputTooLongError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum FormatError {
    InteriorNul(InteriorNulError),
    OutputTooLong(OutputTooLongError),
}
