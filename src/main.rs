use clap::Parser;
use syntax_tour::utils::{logger, validation::Validate};
use syntax_tour::{CliConfig, Lesson, OutputFormat, MemoryConsole, StdoutConsole, Tour, TourError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.list {
        for lesson in Lesson::ALL {
            println!("{:<12} {}", lesson.name(), lesson.title());
        }
        return Ok(());
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Tour failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), TourError> {
    let config = cli.load_tour_config()?;
    config.validate()?;
    let lessons = cli.selected_lessons(&config)?;

    if let Some(path) = &cli.config {
        tracing::info!("📁 Loaded configuration from {}", path.display());
    }

    let tour = Tour::new(config);

    match cli.format {
        OutputFormat::Text => {
            tour.run(&mut StdoutConsole::new(), &lessons);
        }
        OutputFormat::Json => {
            let mut console = MemoryConsole::new();
            let report = tour.run(&mut console, &lessons);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
