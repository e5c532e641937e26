pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::tour::Lesson;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TourConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print the transcript as the lessons run
    Text,
    /// Print a JSON report once the tour finishes
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "syntax-tour")]
#[command(about = "An annotated tour of basic language constructs")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lesson to run; repeat to run several. Defaults to every lesson
    #[arg(short, long = "lesson")]
    pub lessons: Vec<Lesson>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "List the available lessons and exit")]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file if one was given, otherwise the defaults.
    pub fn load_tour_config(&self) -> Result<TourConfig> {
        match &self.config {
            Some(path) => TourConfig::from_file(path),
            None => Ok(TourConfig::default()),
        }
    }

    /// Lessons from the command line win over the configuration file.
    pub fn selected_lessons(&self, config: &TourConfig) -> Result<Vec<Lesson>> {
        if self.lessons.is_empty() {
            config.lessons()
        } else {
            Ok(self.lessons.clone())
        }
    }
}
