use crate::core::tour::Lesson;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest loop the configuration may ask for.
pub const MAX_LOOP_STEPS: i64 = 10_000;

/// Every value the lessons use. Missing sections and keys fall back to the
/// walkthrough defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub tour: TourSection,
    pub variables: VariablesConfig,
    pub arithmetic: ArithmeticConfig,
    pub control: ControlConfig,
    pub loops: LoopsConfig,
    pub person: PersonConfig,
    pub employee: EmployeeConfig,
    pub vehicle: VehicleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourSection {
    pub name: String,
    pub lessons: Vec<String>,
}

impl Default for TourSection {
    fn default() -> Self {
        Self {
            name: "Diseño de apps".to_string(),
            lessons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablesConfig {
    pub name: String,
    pub age: i32,
    pub surname: Option<String>,
}

impl Default for VariablesConfig {
    fn default() -> Self {
        Self {
            name: "Alan".to_string(),
            age: 25,
            surname: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub augend: i32,
    pub addend: i32,
    pub dividend: i32,
    pub divisor: i32,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            augend: 10,
            addend: 5,
            dividend: 10,
            divisor: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub a: i32,
    pub b: i32,
    pub number: i32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self { a: 10, b: 5, number: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopsConfig {
    pub range_start: i32,
    pub range_end: i32,
    pub while_limit: i32,
    pub do_while_limit: i32,
}

impl Default for LoopsConfig {
    fn default() -> Self {
        Self {
            range_start: 1,
            range_end: 5,
            while_limit: 5,
            do_while_limit: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub name: String,
    pub age: i32,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            name: "Carlos".to_string(),
            age: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeConfig {
    pub name: String,
    pub age: i32,
    pub job_title: String,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        Self {
            name: "Laura".to_string(),
            age: 28,
            job_title: "Ingeniera".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub brand: String,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            brand: "Toyota".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TourError::TomlError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TourError::TomlError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Lessons named in `[tour] lessons`, or every lesson when the list is empty.
    pub fn lessons(&self) -> Result<Vec<Lesson>> {
        if self.tour.lessons.is_empty() {
            return Ok(Lesson::ALL.to_vec());
        }
        self.tour.lessons.iter().map(|name| name.parse()).collect()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("tour.name", &self.tour.name)?;

        validation::validate_non_empty_string("variables.name", &self.variables.name)?;
        validation::validate_non_negative("variables.age", self.variables.age)?;

        validation::validate_non_empty_string("person.name", &self.person.name)?;
        validation::validate_non_negative("person.age", self.person.age)?;

        validation::validate_non_empty_string("employee.name", &self.employee.name)?;
        validation::validate_non_negative("employee.age", self.employee.age)?;
        validation::validate_non_empty_string("employee.job_title", &self.employee.job_title)?;

        validation::validate_non_empty_string("vehicle.brand", &self.vehicle.brand)?;

        let loops = &self.loops;
        validation::validate_ordered("loops.range_start", loops.range_start, loops.range_end)?;
        validation::validate_inclusive_span("loops.range_end", loops.range_start, loops.range_end, MAX_LOOP_STEPS)?;
        validation::validate_span("loops.while_limit", 0, loops.while_limit, MAX_LOOP_STEPS)?;
        // the do-while picks up where the while loop stopped
        let do_while_start = loops.while_limit.max(0);
        validation::validate_span(
            "loops.do_while_limit",
            do_while_start,
            loops.do_while_limit,
            MAX_LOOP_STEPS,
        )?;

        self.lessons()?;
        Ok(())
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TourConfig::from_toml_str("").unwrap();
        assert_eq!(config, TourConfig::default());
        assert_eq!(config.person.name, "Carlos");
        assert_eq!(config.arithmetic.divisor, 0);
        assert_eq!(config.lessons().unwrap(), Lesson::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[tour]
name = "Repaso"
lessons = ["loops", "interfaces"]

[vehicle]
brand = "Seat"

[loops]
range_end = 3
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tour.name, "Repaso");
        assert_eq!(config.vehicle.brand, "Seat");
        assert_eq!(config.loops.range_start, 1);
        assert_eq!(config.loops.range_end, 3);
        assert_eq!(
            config.lessons().unwrap(),
            vec![Lesson::Loops, Lesson::Interfaces]
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SYNTAX_TOUR_TEST_BRAND", "Renault");

        let toml_content = r#"
[vehicle]
brand = "${SYNTAX_TOUR_TEST_BRAND}"

[person]
name = "${SYNTAX_TOUR_UNSET_VARIABLE}"
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.vehicle.brand, "Renault");
        assert_eq!(config.person.name, "${SYNTAX_TOUR_UNSET_VARIABLE}");

        std::env::remove_var("SYNTAX_TOUR_TEST_BRAND");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TourConfig::from_toml_str("[person\nname = 1").unwrap_err();
        assert!(matches!(err, TourError::TomlError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TourConfig::from_toml_str("[person]\nage = -3\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[loops]\nrange_start = 9\nrange_end = 2\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[loops]\nrange_end = 1000000\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[loops]\nrange_start = 0\nrange_end = 10000\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[loops]\nrange_start = 1\nrange_end = 10000\n").unwrap();
        assert!(config.validate().is_ok());

        let config = TourConfig::from_toml_str("[vehicle]\nbrand = \" \"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[tour]\nlessons = [\"generics\"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(TourError::UnknownLessonError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[employee]\nname = \"Ana\"\njob_title = \"Arquitecta\"\n")
            .unwrap();

        let config = TourConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.employee.name, "Ana");
        assert_eq!(config.employee.age, 28);
        assert_eq!(config.employee.job_title, "Arquitecta");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TourConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TourError::IoError(_)));
    }
}
