use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::constants::APP_NAME;
use crate::domain::Currency;
use crate::state::{App, AppConfig};

// LazyWallet version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LazyWallet - a local, in-memory wallet in your terminal
#[derive(Debug, Parser)]
#[command(version = VERSION, about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Starting balance, overriding the config file
    #[arg(short, long, value_name = "AMOUNT")]
    balance: Option<f64>,

    /// Default exchange rate, overriding the config file
    #[arg(short, long, value_name = "RATE")]
    rate: Option<f64>,

    /// Currency the balance is shown in (USD, EUR, GBP, JPY, AUD, CAD)
    #[arg(long, value_name = "CODE")]
    currency: Option<Currency>,

    /// Write logs to this file (the terminal UI owns stdout)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the effective configuration and where it is read from
    Config,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Display version
    Version,
}

impl Cli {
    /// Loads the configuration and applies command line overrides.
    fn effective_config(&self) -> AppConfig {
        let mut config = AppConfig::load(self.config.as_deref());
        if let Some(balance) = self.balance {
            config.initial_balance = balance;
        }
        if let Some(rate) = self.rate {
            config.default_rate = rate;
        }
        if let Some(currency) = self.currency {
            config.reference_currency = currency;
        }
        config
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => AppConfig::config_path(),
        }
    }
}

/// Application entry point
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if handle_cli_commands(&cli)? {
        return Ok(());
    }

    // Build the app before touching the terminal so config errors print normally
    let config = cli.effective_config();
    let mut app = App::new(&config).wrap_err("Invalid wallet configuration")?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}

/// Handles subcommands.
/// Returns Ok(true) if a command was handled and the app should exit, Ok(false) otherwise.
fn handle_cli_commands(cli: &Cli) -> Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Config => {
            let path = cli.config_path()?;
            let config = cli.effective_config();
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::InitConfig { force } => {
            let path = cli.config_path()?;
            if path.exists() && !force {
                println!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            } else {
                AppConfig::default()
                    .save(&path)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
        }
        Commands::Version => {
            println!("{APP_NAME} v{VERSION}");
            println!("A terminal wallet with local, in-memory transfers");
        }
    }
    Ok(true)
}

/// Sends `tracing` output to `path`.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
