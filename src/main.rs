use std::ffi::c_char;
use std::ptr;

use libc_sandbox::math::{self, Binary, PI, Unary};
use libc_sandbox::string;

const UNARY_INPUTS: [f64; 17] = [
    0.333333333, 0.75, 1.000010, 1.0, 0.999999,
    0.000010, 0.0, -0.000010,
    -0.999999, -1.0, -1.000010,
    2.0 * PI, PI, PI / 2.0,
    -PI / 2.0, -PI, -2.0 * PI,
];

const BINARY_INPUTS: [(f64, f64); 11] = [
    (1.0, 2.0), (3.0, 4.0), (0.0, 2.0), (0.0, -2.0), (1.0, 2.0), (1.0, -2.0),
    (0.0, 0.0), (2.0, 0.0), (-2.0, 0.0), (-1.0, -1.0), (-2.0, -4.0),
];

fn show(result: Result<f64, math::MathError>) -> String {
    match result {
        Ok(value) => format!("{value:.6}"),
        Err(error) => format!("error: {error}"),
    }
}

fn string_demo() {
    println!("\n[string]\n");

    let scenarios: [(&str, *const c_char); 4] = [
        ("\"hello\"", c"hello".as_ptr()),
        ("\"\"", c"".as_ptr()),
        ("null", ptr::null()),
        ("\"a\"", c"a".as_ptr()),
    ];

    for (label, text) in scenarios {
        // SAFETY: Every pointer above is either null or comes from a CStr literal.
        let (by_index, by_offset) = unsafe {
            (string::length(text), string::length_by_offset(text))
        };
        println!("length({label}) = {by_index}, length_by_offset({label}) = {by_offset}");
    }
}

fn math_demo() {
    println!("\n[math]\n");

    for x in UNARY_INPUTS {
        println!("<{x:.6}>");
        for f in Unary::ALL {
            println!("  {f}({x:.6}) = {}", show(f.checked(x)));
        }

        let math::Frexp { mantissa, exponent } = math::frexp(x);
        println!("  frexp({x:.6}) = ({mantissa:.6}, {exponent})");
        let math::Modf { fractional, integral } = math::modf(x);
        println!("  modf({x:.6}) = ({fractional:.6}, {integral:.6})");
        println!();
    }

    for (x, y) in BINARY_INPUTS {
        for f in Binary::ALL {
            println!("{f}({x:.6}, {y:.6}) = {}", show(f.checked(x, y)));
        }
        println!("ldexp({x:.6}, {}) = {}", y as i32, show(math::ldexp(x, y as i32)));
        println!();
    }
}

#[cfg(all(feature = "time", target_os = "linux"))]
fn time_demo() {
    use libc_sandbox::time::{SPECIFIERS, Timestamp};

    println!("\n[time]\n");

    let now = Timestamp::now();
    println!("{now}");

    for (zone, converted) in [("utc", now.to_utc()), ("local", now.to_local())] {
        let broken_down = match converted {
            Ok(value) => value,
            Err(error) => {
                println!("{zone}: {error}");
                continue;
            },
        };

        println!("{zone}: {broken_down} (day {} of the year)", broken_down.year_day());
        for specifier in SPECIFIERS {
            match broken_down.format_specifier(specifier) {
                Ok(output) => println!("  {specifier}: <{output}>"),
                Err(error) => println!("  {specifier}: {error}"),
            }
        }
    }
}

fn main() {
    string_demo();
    math_demo();

    #[cfg(all(feature = "time", target_os = "linux"))]
    time_demo();
}
