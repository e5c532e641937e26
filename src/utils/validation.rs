use crate::utils::error::{Result, TourError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ordered(field_name: &str, start: i32, end: i32) -> Result<()> {
    if start > end {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", start, end),
            reason: "Range start must not be greater than its end".to_string(),
        });
    }
    Ok(())
}

/// Rejects `start..end` loops that would run more than `max_steps` times.
pub fn validate_span(field_name: &str, start: i32, end: i32, max_steps: i64) -> Result<()> {
    let steps = i64::from(end) - i64::from(start);
    check_steps(field_name, format!("{}..{}", start, end), steps, max_steps)
}

/// Rejects `start..=end` loops that would run more than `max_steps` times.
pub fn validate_inclusive_span(field_name: &str, start: i32, end: i32, max_steps: i64) -> Result<()> {
    let steps = i64::from(end) - i64::from(start) + 1;
    check_steps(field_name, format!("{}..={}", start, end), steps, max_steps)
}

fn check_steps(field_name: &str, value: String, steps: i64, max_steps: i64) -> Result<()> {
    if steps > max_steps {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value,
            reason: format!("Loop would run more than {} times", max_steps),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("person.name", "Carlos").is_ok());
        assert!(validate_non_empty_string("person.name", "   ").is_err());
        assert!(validate_non_empty_string("person.name", "").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("person.age", 0).is_ok());
        assert!(validate_non_negative("person.age", -1).is_err());
    }

    #[test]
    fn test_validate_span() {
        assert!(validate_ordered("loops.range", 1, 5).is_ok());
        assert!(validate_ordered("loops.range", 5, 1).is_err());
        assert!(validate_span("loops.range", 1, 5, 10).is_ok());
        assert!(validate_span("loops.range", i32::MIN, i32::MAX, 10_000).is_err());
    }

    #[test]
    fn test_validate_inclusive_span_counts_both_ends() {
        assert!(validate_inclusive_span("loops.range", 1, 10_000, 10_000).is_ok());
        assert!(validate_inclusive_span("loops.range", 0, 10_000, 10_000).is_err());
        assert!(validate_span("loops.while_limit", 0, 10_000, 10_000).is_ok());
    }
}
