use crate::domain::ports::Console;
use std::ops::RangeInclusive;

/// Prints one line per value in `range`, ascending. Returns the number of steps.
pub fn count_through(console: &mut dyn Console, range: RangeInclusive<i32>) -> usize {
    let mut steps = 0;
    for i in range {
        console.line(&format!("Iteración número {}", i));
        steps += 1;
    }
    steps
}

/// Checks the condition before each pass; may not run at all.
pub fn count_while(console: &mut dyn Console, start: i32, limit: i32) -> i32 {
    let mut i = start;
    while i < limit {
        console.line(&format!("Valor de i: {}", i));
        i += 1;
    }
    i
}

/// Checks the condition after each pass; always runs at least once.
pub fn count_do_while(console: &mut dyn Console, start: i32, limit: i32) -> i32 {
    let mut i = start;
    loop {
        console.line("Ejecutado al menos una vez");
        i = i.saturating_add(1);
        if i >= limit {
            break;
        }
    }
    i
}
