use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLessonError { name: String },

    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Serialization,
    Arithmetic,
}

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::IoError(_) => ErrorCategory::Io,
            TourError::SerializationError(_) => ErrorCategory::Serialization,
            TourError::TomlError { .. } | TourError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TourError::UnknownLessonError { .. } => ErrorCategory::Input,
            TourError::DivisionByZero { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not read or write a file: {}", e),
            TourError::SerializationError(e) => format!("Could not render the report: {}", e),
            TourError::TomlError { message } => format!("The configuration file is not valid TOML: {}", message),
            TourError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            TourError::UnknownLessonError { name } => format!("There is no lesson called '{}'", name),
            TourError::DivisionByZero { dividend } => format!("Cannot divide {} by zero", dividend),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::IoError(_) => "Check that the path exists and is readable",
            TourError::SerializationError(_) => "Retry with --format text",
            TourError::TomlError { .. } => "Fix the TOML syntax or run without --config to use defaults",
            TourError::InvalidConfigValueError { .. } => "Adjust the value in the configuration file",
            TourError::UnknownLessonError { .. } => "Run with --list to see the available lessons",
            TourError::DivisionByZero { .. } => "Use a non-zero divisor",
        }
    }

    /// Process exit code for errors that reach the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Arithmetic => 1,
            ErrorCategory::Serialization => 2,
            ErrorCategory::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let err = TourError::UnknownLessonError {
            name: "generics".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("generics"));

        let err = TourError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_division_error_display() {
        let err = TourError::DivisionByZero { dividend: 10 };
        assert_eq!(err.to_string(), "Division by zero: 10 / 0");
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
    }
}
