//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use queuecalc::{
    AppConfig, AppError,
    api::{self, ComputeResponse, FormulaeResponse},
    config::DisplayConfig,
    presenter::{TimeUnit, formulae, render_text},
};
use queuecalc_core::{
    MetricsResult, Model, QueueError, compute_mm1, compute_mmc, server_count_from_real,
};

/// Output switches shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json_mode: bool,
    pub verbose: bool,
}

/// Display settings with an optional per-command unit override.
pub fn with_units(config: &AppConfig, units: Option<TimeUnit>) -> DisplayConfig {
    DisplayConfig {
        units: units.unwrap_or(config.display.units),
        ..config.display
    }
}

// =============================================================================
// COMPUTE COMMANDS
// =============================================================================

/// Compute and print M/M/1 metrics.
pub fn cmd_mm1(
    lambda: f64,
    mu: f64,
    display: DisplayConfig,
    output: OutputOptions,
) -> Result<(), AppError> {
    report(compute_mm1(lambda, mu), Model::MM1, display, output)
}

/// Compute and print M/M/c metrics.
pub fn cmd_mmc(
    lambda: f64,
    mu: f64,
    servers: f64,
    display: DisplayConfig,
    output: OutputOptions,
) -> Result<(), AppError> {
    let outcome = server_count_from_real(servers).and_then(|c| compute_mmc(lambda, mu, c));
    report(outcome, Model::MMC, display, output)
}

fn report(
    outcome: Result<MetricsResult, QueueError>,
    model: Model,
    display: DisplayConfig,
    output: OutputOptions,
) -> Result<(), AppError> {
    if output.json_mode {
        let response = ComputeResponse::from(outcome.clone());
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_default()
        );
        return outcome.map(|_| ()).map_err(AppError::from);
    }

    let result = outcome?;
    println!("{} Queue Metrics", model);
    println!("====================");
    print!("{}", render_text(&result, display.units, display.digits));

    if output.verbose {
        println!();
        print_formulae(model);
    }
    Ok(())
}

// =============================================================================
// FORMULAE COMMAND
// =============================================================================

/// Print the formula reference.
pub fn cmd_formulae(model: Model, output: OutputOptions) -> Result<(), AppError> {
    if output.json_mode {
        let response = FormulaeResponse::for_model(model);
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_default()
        );
        return Ok(());
    }

    print_formulae(model);
    Ok(())
}

fn print_formulae(model: Model) {
    println!("{} Formulae", model);
    println!("====================");
    for line in formulae(model) {
        println!("  {}", line);
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &AppConfig) -> Result<(), AppError> {
    let server = &config.server;

    println!("queuecalc HTTP API Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", server.host);
    println!("  Port:       {}", server.port);
    println!("  Rate limit: {} req/s (0 = off)", server.rate_limit);
    println!();
    println!("Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /mm1             - M/M/1 metrics");
    println!("  POST /mmc             - M/M/c metrics");
    println!("  GET  /formulae/{{model}} - Formula reference");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(server).await
}
