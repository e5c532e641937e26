use crate::domain::ports::Console;
use crate::utils::error::{Result, TourError};

pub const DIVISION_BY_ZERO: &str = "Error: División por cero";

/// Truncating integer division. `i32::MIN / -1` wraps.
pub fn try_divide(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(TourError::DivisionByZero { dividend: a });
    }
    Ok(a.wrapping_div(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotient {
    pub value: i32,
    /// Set when `value` is the fallback for a zero divisor.
    pub recovered: bool,
}

/// Division that recovers from a zero divisor by printing a diagnostic and
/// returning 0. The failure never reaches the caller.
pub fn divide(console: &mut dyn Console, a: i32, b: i32) -> i32 {
    divide_recovering(console, a, b).value
}

/// Same as [`divide`], but also tells the caller whether it recovered.
pub fn divide_recovering(console: &mut dyn Console, a: i32, b: i32) -> Quotient {
    match try_divide(a, b) {
        Ok(value) => Quotient {
            value,
            recovered: false,
        },
        Err(e) => {
            tracing::warn!("Recovered from {}", e);
            console.line(DIVISION_BY_ZERO);
            Quotient {
                value: 0,
                recovered: true,
            }
        }
    }
}
