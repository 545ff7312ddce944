use std::path::PathBuf;

use bakecat_core::{AppConfig, ConfigError, DescriptionSettings};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod describe;

#[derive(Debug, Parser)]
#[command(name = "bakecat-cli")]
#[command(about = "Bakery product description tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse canonical description text into a structured record (JSON).
    Parse {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Render a structured record (JSON) as canonical description text.
    Generate {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Estimate servings for a weight such as "500g".
    Servings { weight: String },
    /// Multiply a weight by an integer factor.
    Scale { weight: String, multiplier: u32 },
    /// List size variants (1x, 2x, ...) of a base weight and price.
    Variants {
        weight: String,
        /// Base price, e.g. "24.50".
        #[arg(long)]
        price: Option<String>,
        /// Number of variants; defaults to BAKECAT_VARIANT_COUNT.
        #[arg(long)]
        count: Option<u32>,
    },
    /// Parse then regenerate text, failing if the record does not survive.
    Roundtrip {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bakecat_core::load_app_config();

    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(cli.command, config)?;
    println!("{output}");
    Ok(())
}

/// Dispatches one command. Configuration errors only surface for commands
/// that read configuration.
fn run(command: Commands, config: Result<AppConfig, ConfigError>) -> anyhow::Result<String> {
    let output = match command {
        Commands::Parse { file } => {
            let settings = load_settings(config)?;
            describe::run_parse(&describe::read_input(file.as_deref())?, &settings)?
        }
        Commands::Generate { file } => {
            describe::run_generate(&describe::read_input(file.as_deref())?)?
        }
        Commands::Servings { weight } => bakecat_describe::calculate_servings(&weight),
        Commands::Scale { weight, multiplier } => {
            bakecat_describe::scale_weight(&weight, multiplier)
        }
        Commands::Variants {
            weight,
            price,
            count,
        } => {
            let count = match count {
                Some(count) => count,
                None => config?.variant_count,
            };
            describe::run_variants(&weight, price.as_deref(), count)?
        }
        Commands::Roundtrip { file } => {
            let settings = load_settings(config)?;
            describe::run_roundtrip(&describe::read_input(file.as_deref())?, &settings)?
        }
    };
    Ok(output)
}

fn load_settings(config: Result<AppConfig, ConfigError>) -> anyhow::Result<DescriptionSettings> {
    let config = config?;
    let settings = bakecat_core::load_settings_or_default(&config.settings_path)?;
    tracing::debug!(env = %config.env, settings = ?config.settings_path, "configuration loaded");
    Ok(settings)
}
