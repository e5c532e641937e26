use crate::domain::ports::Console;

pub const GREETING: &str = "Hola, bienvenido a Kotlin";

/// Sum of two integers. Overflow wraps instead of panicking.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtraction as a function value rather than a named function.
pub fn subtraction() -> impl Fn(i32, i32) -> i32 {
    |a, b| a.wrapping_sub(b)
}

pub fn greet(console: &mut dyn Console) {
    console.line(GREETING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemoryConsole;

    #[test]
    fn test_add() {
        assert_eq!(add(10, 5), 15);
        assert_eq!(add(-3, 3), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_subtraction_value() {
        let subtract = subtraction();
        assert_eq!(subtract(10, 5), 5);
        assert_eq!(subtract(5, 10), -5);

        let applied: Vec<i32> = [(3, 1), (0, 4)].iter().map(|&(a, b)| subtract(a, b)).collect();
        assert_eq!(applied, vec![2, -4]);
    }

    #[test]
    fn test_greet() {
        let mut console = MemoryConsole::new();
        greet(&mut console);
        assert_eq!(console.lines(), [GREETING]);
    }
}
