use derive_more::Display;

use crate::math::{MathError, error};

/// A function of one argument from `<math.h>`, displayed as its C name.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unary {
    #[display("sin")]
    Sin,
    #[display("cos")]
    Cos,
    #[display("tan")]
    Tan,
    #[display("asin")]
    Asin,
    #[display("acos")]
    Acos,
    #[display("atan")]
    Atan,
    #[display("exp")]
    Exp,
    #[display("log")]
    Log,
    #[display("log10")]
    Log10,
    #[display("sinh")]
    Sinh,
    #[display("cosh")]
    Cosh,
    #[display("tanh")]
    Tanh,
    #[display("sqrt")]
    Sqrt,
    #[display("floor")]
    Floor,
    #[display("ceil")]
    Ceil,
    #[display("fabs")]
    Fabs,
}

impl Unary {
    pub const ALL: [Unary; 16] = [
        Unary::Sin, Unary::Cos, Unary::Tan,
        Unary::Asin, Unary::Acos, Unary::Atan,
        Unary::Exp, Unary::Log, Unary::Log10,
        Unary::Sinh, Unary::Cosh, Unary::Tanh,
        Unary::Sqrt, Unary::Floor, Unary::Ceil, Unary::Fabs,
    ];

    /// Evaluates the function, returning NaN or an infinity where C would set `errno`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Unary::Sin   => x.sin(),
            Unary::Cos   => x.cos(),
            Unary::Tan   => x.tan(),
            Unary::Asin  => x.asin(),
            Unary::Acos  => x.acos(),
            Unary::Atan  => x.atan(),
            Unary::Exp   => x.exp(),
            Unary::Log   => x.ln(),
            Unary::Log10 => x.log10(),
            Unary::Sinh  => x.sinh(),
            Unary::Cosh  => x.cosh(),
            Unary::Tanh  => x.tanh(),
            Unary::Sqrt  => x.sqrt(),
            Unary::Floor => x.floor(),
            Unary::Ceil  => x.ceil(),
            Unary::Fabs  => x.abs(),
        }
    }

    /// Evaluates the function, reporting domain and range errors.
    pub fn checked(self, x: f64) -> Result<f64, MathError> {
        error::classify(&[x], self.apply(x))
    }
}

/// A function of two arguments from `<math.h>`, displayed as its C name.
///
/// Arguments are taken in C order, so `Atan2.apply(y, x)` is the angle of the point `(x, y)`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binary {
    #[display("fmod")]
    Fmod,
    #[display("atan2")]
    Atan2,
    #[display("pow")]
    Pow,
}

impl Binary {
    pub const ALL: [Binary; 3] = [Binary::Fmod, Binary::Atan2, Binary::Pow];

    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Binary::Fmod  => x % y,
            Binary::Atan2 => x.atan2(y),
            Binary::Pow   => x.powf(y),
        }
    }

    pub fn checked(self, x: f64, y: f64) -> Result<f64, MathError> {
        error::classify(&[x, y], self.apply(x, y))
    }
}
