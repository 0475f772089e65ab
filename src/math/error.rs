use derive_more::{Display, Error, From, IsVariant};

/// An argument was outside of the function's domain, C's `EDOM`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("argument outside of the function's domain")]
pub struct DomainError;

/// The result can't be represented as a finite value, C's `ERANGE`. This covers both poles (such
/// as `log(0)`) and overflow.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("result is not representable")]
pub struct RangeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum MathError {
    Domain(DomainError),
    Range(RangeError),
}

/// Maps a raw result to the error C would report for it, given the arguments that produced it.
///
/// NaN arguments propagate silently, as does an infinite result from an infinite argument.
/// Underflow isn't reported.
pub(crate) fn classify(args: &[f64], result: f64) -> Result<f64, MathError> {
    if args.iter().any(|arg| arg.is_nan()) {
        return Ok(result);
    }

    if result.is_nan() {
        Err(DomainError)?
    }
    if result.is_infinite() && args.iter().all(|arg| arg.is_finite()) {
        Err(RangeError)?
    }
    Ok(result)
}
