use crate::domain::ports::Console;

/// Larger of two values, written as an `if` expression.
pub fn max_of(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

pub fn compare(console: &mut dyn Console, a: i32, b: i32) {
    if a > b {
        console.line("a es mayor que b");
    } else {
        console.line("a es menor o igual a b");
    }
}

pub fn evaluate_number(x: i32) -> &'static str {
    match x {
        1 => "x es 1",
        2 => "x es 2",
        _ => "x no es 1 ni 2",
    }
}
