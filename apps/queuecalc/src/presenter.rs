//! # Presenter
//!
//! Turns engine output into text for people.
//!
//! The engine hands back full-precision `f64`; rounding, trailing-zero
//! trimming, time units and the formula reference are all decided here.

use clap::ValueEnum;
use queuecalc_core::{MetricsResult, Model};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Decimal places used when nothing else is configured.
pub const DEFAULT_DIGITS: usize = 6;

/// Largest accepted `digits` setting. f64 carries ~15-17 significant digits.
pub const MAX_DIGITS: usize = 15;

/// Text shown in place of a NaN or infinite value.
pub const UNDEFINED: &str = "undefined";

// =============================================================================
// NUMBER FORMATTING
// =============================================================================

/// Fixed-point with `digits` decimals, trailing zeros trimmed.
///
/// `2.000000` becomes `2`, `0.500000` becomes `0.5`.
#[must_use]
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }

    let fixed = format!("{:.*}", digits, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// TIME UNITS
// =============================================================================

/// The unit the rates were given in; W and Wq come out in the matching
/// time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Rates per hour.
    PerHour,
    /// Rates per minute.
    PerMin,
    /// Rates per second.
    PerSec,
    /// No unit attached.
    #[default]
    #[serde(rename = "none")]
    #[value(name = "none")]
    Unitless,
}

impl TimeUnit {
    /// Suffix appended to time-valued metrics.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::PerHour => " h",
            Self::PerMin => " min",
            Self::PerSec => " s",
            Self::Unitless => "",
        }
    }

    /// Parse the configuration spelling (`per_hour`, `per_min`, `per_sec`, `none`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name.trim(), true).ok()
    }
}

// =============================================================================
// FORMULA REFERENCE
// =============================================================================

const MM1_FORMULAE: &[&str] = &[
    "Stability:             λ < μ",
    "Utilization:           ρ = λ / μ",
    "Idle probability:      P0 = 1 − ρ",
    "Waiting probability:   Pw = ρ",
    "Mean wait in queue:    Wq = Pw / (μ − λ) = ρ / (μ − λ)",
    "Mean time in system:   W = Wq + 1/μ",
    "Mean queue length:     Lq = λ · Wq",
    "Mean number in system: L = λ · W",
];

const MMC_FORMULAE: &[&str] = &[
    "Stability:             λ < c·μ  (ρ = λ / (c·μ) < 1)",
    "Offered load:          a = λ / μ,  ρ = a / c",
    "Idle probability:      P0 = [ Σ_{n=0}^{c−1} aⁿ/n! + aᶜ / (c!·(1 − ρ)) ]⁻¹",
    "Erlang C:              Pw = aᶜ / (c!·(1 − ρ)) · P0",
    "Mean wait in queue:    Wq = Pw / (c·μ − λ)",
    "Mean time in system:   W = Wq + 1/μ",
    "Mean queue length:     Lq = λ · Wq",
    "Mean number in system: L = λ · W",
];

/// Reference formulas for a model, one per line.
#[must_use]
pub const fn formulae(model: Model) -> &'static [&'static str] {
    match model {
        Model::MM1 => MM1_FORMULAE,
        Model::MMC => MMC_FORMULAE,
    }
}

/// Resolve a model from its short name (`mm1`, `mmc`) or Kendall notation.
#[must_use]
pub fn parse_model(name: &str) -> Option<Model> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mm1" | "m/m/1" => Some(Model::MM1),
        "mmc" | "m/m/c" => Some(Model::MMC),
        _ => None,
    }
}

// =============================================================================
// RESULT RENDERING
// =============================================================================

/// Render a result as an aligned table.
#[must_use]
pub fn render_text(result: &MetricsResult, unit: TimeUnit, digits: usize) -> String {
    let num = |v: f64| format_number(v, digits);
    let time = |v: f64| {
        let s = num(v);
        if s == UNDEFINED {
            s
        } else {
            format!("{}{}", s, unit.suffix())
        }
    };

    let rows = [
        ("Model", result.model.to_string()),
        ("Servers (c)", result.servers.to_string()),
        ("Utilization (ρ)", num(result.utilization)),
        ("L", num(result.l)),
        ("Lq", num(result.lq)),
        ("W", time(result.w)),
        ("Wq", time(result.wq)),
        ("P0", num(result.p0)),
        ("Pw", num(result.pw)),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<16} {}", label, value);
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
