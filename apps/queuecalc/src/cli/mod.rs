//! # queuecalc CLI Module
//!
//! This module implements the CLI interface for queuecalc.
//!
//! ## Available Commands
//!
//! - `mm1` - Metrics of a single-server queue
//! - `mmc` - Metrics of a multi-server queue
//! - `formulae` - Print the formula reference
//! - `server` - Start the HTTP server

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use queuecalc::{AppConfig, AppError, presenter::TimeUnit};
use queuecalc_core::Model;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// queuecalc - M/M/1 and M/M/c queue calculator
///
/// Computes steady-state utilization, queue lengths, waiting times and the
/// Erlang-C waiting probability.
#[derive(Parser, Debug)]
#[command(name = "queuecalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Also print the formula reference after each result
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./queuecalc.toml if present)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places in text output (overrides config)
    #[arg(long, global = true)]
    pub digits: Option<usize>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Model selector for `formulae`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Mm1,
    Mmc,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Mm1 => Model::MM1,
            ModelArg::Mmc => Model::MMC,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute M/M/1 metrics
    Mm1 {
        /// Arrival rate λ
        #[arg(short, long, allow_negative_numbers = true)]
        lambda: f64,

        /// Service rate μ
        #[arg(short, long, allow_negative_numbers = true)]
        mu: f64,

        /// Unit the rates are expressed in
        #[arg(short, long, value_enum)]
        units: Option<TimeUnit>,
    },

    /// Compute M/M/c metrics
    Mmc {
        /// Arrival rate λ
        #[arg(short, long, allow_negative_numbers = true)]
        lambda: f64,

        /// Service rate μ of one server
        #[arg(short, long, allow_negative_numbers = true)]
        mu: f64,

        /// Number of servers c (positive integer)
        #[arg(short = 'c', long, default_value = "1", allow_negative_numbers = true)]
        servers: f64,

        /// Unit the rates are expressed in
        #[arg(short, long, value_enum)]
        units: Option<TimeUnit>,
    },

    /// Print the formula reference
    Formulae {
        /// Model to describe
        #[arg(short, long, value_enum, default_value = "mmc")]
        model: ModelArg,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments against the resolved config.
pub async fn execute(cli: Cli, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(digits) = cli.digits {
        config.display.digits = digits;
        config.validate()?;
    }
    let output = OutputOptions {
        json_mode: cli.json_mode,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Mm1 { lambda, mu, units } => {
            let display = with_units(&config, units);
            cmd_mm1(lambda, mu, display, output)
        }
        Commands::Mmc {
            lambda,
            mu,
            servers,
            units,
        } => {
            let display = with_units(&config, units);
            cmd_mmc(lambda, mu, servers, display, output)
        }
        Commands::Formulae { model } => cmd_formulae(model.into(), output),
        Commands::Server { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            cmd_server(&config).await
        }
    }
}
