//! # queuecalc
//!
//! The main binary for the queuecalc steady-state queue calculator.
//!
//! This application provides:
//! - CLI interface for M/M/1 and M/M/c computations
//! - HTTP JSON API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/queuecalc (THE BINARY)           │
//! │                                                      │
//! │   ┌───────────┐   ┌───────────┐   ┌─────────────┐    │
//! │   │   CLI     │   │ HTTP API  │   │  Presenter  │    │
//! │   │  (clap)   │   │  (axum)   │   │   (text)    │    │
//! │   └─────┬─────┘   └─────┬─────┘   └──────┬──────┘    │
//! │         └───────────────┼────────────────┘           │
//! │                         ▼                            │
//! │                ┌─────────────────┐                   │
//! │                │ queuecalc-core  │                   │
//! │                │  (THE LOGIC)    │                   │
//! │                └─────────────────┘                   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! queuecalc mm1 --lambda 2 --mu 3
//! queuecalc mmc --lambda 2 --mu 2 --servers 2 --units per_min
//! queuecalc formulae --model mmc
//! queuecalc server --host 0.0.0.0 --port 8080
//! ```

mod cli;

use clap::Parser;
use queuecalc::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // QUEUECALC_LOG_FORMAT=json enables machine-parseable output.
    let log_format =
        std::env::var("QUEUECALC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "queuecalc=info,queuecalc_core=info,tower_http=debug".into());

    // Logs go to stderr so stdout stays clean for results and --json-mode.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  queuecalc v{}
  M/M/1 · M/M/c · Erlang C
"#,
        env!("CARGO_PKG_VERSION")
    );
}
