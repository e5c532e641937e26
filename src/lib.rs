pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::console::{MemoryConsole, StdoutConsole};
pub use config::toml_config::TourConfig;
pub use core::tour::{Lesson, Tour, TourReport};
pub use utils::error::{Result, TourError};
