//! # eq-bench
//!
//! Benchmark scaffolding for the eq-core comparison strategies.
//!
//! ## Pieces
//!
//! - **Generators**: seeded buffers and the equal / copy / different fixture triplet
//! - **Competition**: baseline + competitors timed with [`QuickBench`], each
//!   competitor's time ratio checked against a declared band
//! - **Config**: competition limits as JSON (`CompetitionConfig`)
//! - **Criterion benches**: per-variant throughput, equal and early-mismatch inputs
//!
//! ## Running
//!
//! ```bash
//! # Criterion benches
//! cargo bench -p eq-bench
//!
//! # Ratio check against the default limits
//! cargo run -p eq-bench --release --bin eq-compete
//!
//! # Custom limits
//! cargo run -p eq-bench --release --bin eq-compete -- --config limits.json
//! ```

pub mod competition;
pub mod config;
pub mod equality;
pub mod generators;
pub mod utils;

pub use competition::{Competition, CompetitionReport, ReportRow, Verdict};
pub use config::{CompetitionConfig, CompetitorSpec, RatioBand};
pub use equality::{equality_competition, EqualityInputs};
pub use generators::*;
pub use utils::*;

use eq_core::{EqError, Variant, Width};
use thiserror::Error;

/// Errors from configuring or running a competition
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Buffer(#[from] EqError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Variant `{variant}` has no {width} strategy")]
    UnsupportedWidth { variant: Variant, width: Width },

    #[error("Competition `{0}` has no baseline")]
    MissingBaseline(String),

    #[error("Competition `{name}`: {failures} competitor(s) outside their ratio band")]
    LimitsViolated { name: String, failures: usize },
}

pub type Result<T> = std::result::Result<T, BenchError>;
