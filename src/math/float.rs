use crate::math::{MathError, error};

const EXP_MASK: u64 = 0x7ff << 52;
const EXP_BIAS: i32 = 0x3ff;

/// `x = mantissa * 2^exponent`, as produced by [`frexp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frexp {
    pub mantissa: f64,
    pub exponent: i32,
}

/// The parts of a number split by [`modf`], both with the sign of the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modf {
    pub fractional: f64,
    pub integral: f64,
}

/// Returns 2^n for a normal exponent, `-1022 <= n <= 1023`.
fn pow2(n: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&n));
    f64::from_bits(((EXP_BIAS + n) as u64) << 52)
}

/// Splits `x` into a mantissa in `0.5 <= |m| < 1` and a power of two.
///
/// Zero, infinities and NaN are returned as the mantissa, with an exponent of 0.
pub fn frexp(x: f64) -> Frexp {
    if x == 0.0 || !x.is_finite() {
        return Frexp { mantissa: x, exponent: 0 };
    }

    // Subnormals have no implicit leading bit, so scale them into the normal range first.
    let (x, bias) = if x.abs() < f64::MIN_POSITIVE {
        (x * pow2(54), -54)
    } else {
        (x, 0)
    };

    let bits = x.to_bits();
    let raw_exp = ((bits & EXP_MASK) >> 52) as i32;

    Frexp {
        mantissa: f64::from_bits((bits & !EXP_MASK) | (((EXP_BIAS - 1) as u64) << 52)),
        exponent: raw_exp - (EXP_BIAS - 1) + bias,
    }
}

/// Splits `x` into its integral and fractional parts.
pub fn modf(x: f64) -> Modf {
    let integral = x.trunc();
    let fractional = if x.is_infinite() {
        0.0
    } else {
        x - integral
    };

    Modf {
        // Keeps -0.0 for negative whole numbers and infinities. NaN stays NaN.
        fractional: fractional.copysign(x),
        integral,
    }
}

/// Computes `x * 2^exp` without overflowing or flushing to zero along the way.
pub fn ldexp(x: f64, exp: i32) -> Result<f64, MathError> {
    let mut y = x;
    let mut n = exp;

    if n > 1023 {
        y *= pow2(1023);
        n -= 1023;
        if n > 1023 {
            y *= pow2(1023);
            n = (n - 1023).min(1023);
        }
    } else if n < -1022 {
        // Scale by 2^-969 rather than 2^-1022 so that a subnormal result is only rounded once.
        y *= pow2(-1022) * pow2(53);
        n += 1022 - 53;
        if n < -1022 {
            y *= pow2(-1022) * pow2(53);
            n = (n + 1022 - 53).max(-1022);
        }
    }

    error::classify(&[x], y * pow2(n))
}
