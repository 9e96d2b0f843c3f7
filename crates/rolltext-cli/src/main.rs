use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rolltext_core::{AppConfig, Direction};

mod commands;

#[derive(Parser)]
#[command(name = "rolltext")]
#[command(author, version, about = "Rolling character transitions for counters, prices and tickers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/rolltext/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animated terminal demo
    Demo,
    /// Print the column actions between two texts
    Diff {
        from: String,
        to: String,
        /// Use the simple diff instead of the full one
        #[arg(long)]
        simple: bool,
        /// Character list to use; repeat for several, earlier lists win
        #[arg(short = 'a', long = "alphabet")]
        alphabets: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the path every column takes between two texts
    Path {
        from: String,
        to: String,
        /// up, down or any
        #[arg(short = 'd', long, value_parser = parse_direction)]
        direction: Option<Direction>,
        /// Character list to use; repeat for several, earlier lists win
        #[arg(short = 'a', long = "alphabet")]
        alphabets: Vec<String>,
    },
    /// Format a number with the configured locale
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Fraction digits (defaults to locale.decimals)
        #[arg(long)]
        decimals: Option<usize>,
        /// Format as a currency amount
        #[arg(long)]
        currency: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file when used with --init
        #[arg(long)]
        force: bool,
    },
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    match s.to_lowercase().as_str() {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        "any" => Ok(Direction::Any),
        other => Err(format!("unknown direction '{}', expected up, down or any", other)),
    }
}

fn init_logging(config: &AppConfig, interactive: bool) {
    let env_filter = std::env::var("RUST_LOG").ok();
    // The demo owns the terminal; only log there when explicitly asked
    if interactive && env_filter.is_none() {
        return;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env_filter.unwrap_or_else(|| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config_path.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    let interactive = matches!(cli.command, Some(Commands::Demo) | None);
    init_logging(&config, interactive);

    match cli.command {
        Some(Commands::Demo) | None => commands::demo::run(config).await,
        Some(Commands::Diff {
            from,
            to,
            simple,
            alphabets,
            json,
        }) => commands::diff::run(&config, &from, &to, simple, &alphabets, json),
        Some(Commands::Path {
            from,
            to,
            direction,
            alphabets,
        }) => commands::path::run(&config, &from, &to, direction, &alphabets),
        Some(Commands::Format {
            amount,
            decimals,
            currency,
        }) => commands::format::run(&config, amount, decimals, currency),
        Some(Commands::Config { init, force }) => {
            commands::config::run(&config, &config_path, init, force)
        }
    }
}
