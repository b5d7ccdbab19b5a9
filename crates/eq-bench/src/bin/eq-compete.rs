//! Equality competition runner
//!
//! Times every configured strategy against the baseline and checks each
//! time ratio against its declared band.
//!
//! Exit code 0 = all competitors within their bands, 1 = at least one outside
//!
//! Usage:
//!   eq-compete                          - default limits, both widths
//!   eq-compete --width words            - word members only
//!   eq-compete --config limits.json     - custom limits
//!   eq-compete --dump-config > l.json   - write the default limits

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eq_bench::{equality_competition, CompetitionConfig, EqualityInputs, ThroughputMetrics};
use eq_core::scalar::UNROLLED_WORDS;
use eq_core::{Variant, Width};

#[derive(Parser)]
#[command(name = "eq-compete", about = "Check equality strategy timings against ratio bands")]
struct Cli {
    /// JSON limits file (defaults to the built-in limits)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Restrict to one element width (`bytes` or `words`)
    #[arg(short, long)]
    width: Option<Width>,

    /// Buffer length in bytes
    #[arg(long)]
    len: Option<usize>,

    /// Timed calls per member
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Seed for buffer contents
    #[arg(long)]
    seed: Option<u64>,

    /// Widen every band by this factor
    #[arg(long, value_name = "FACTOR")]
    relaxed: Option<f64>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Report only; never fail on out-of-band ratios
    #[arg(long)]
    no_check: bool,
}

fn build_config(cli: &Cli) -> Result<CompetitionConfig> {
    let mut config = match (&cli.config, cli.width) {
        (Some(path), width) => {
            let config = CompetitionConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            match width {
                Some(width) => config.only_width(width)?,
                None => config,
            }
        }
        (None, Some(Width::Bytes)) => CompetitionConfig::bytes_default(),
        (None, Some(Width::Words)) => CompetitionConfig::words_default(),
        (None, None) => CompetitionConfig::default(),
    };
    if let Some(len) = cli.len {
        config = config.with_buffer_len(len);
        if len != UNROLLED_WORDS * 8 {
            log::info!("dropping unrolled16: it only runs on {UNROLLED_WORDS} words");
            config.competitors.retain(|c| c.variant != Variant::Unrolled16);
        }
    }
    if let Some(iterations) = cli.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(factor) = cli.relaxed {
        config = config.relaxed(factor);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let inputs = EqualityInputs::new(config.buffer_len, config.seed)?;
    let report = equality_competition(&config, &inputs)?.run()?;

    println!("{report}");
    for row in &report.rows {
        let metrics = ThroughputMetrics::from_benchmark(config.buffer_len, row.mean);
        println!("  {:<24} {}", row.name, metrics.summary());
    }

    if !cli.no_check {
        report.ensure_pass()?;
    }
    Ok(())
}
