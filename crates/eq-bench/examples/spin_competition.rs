//! Competition sanity check on synthetic work
//!
//! Spins for a fixed count as the baseline, then for 3x, 5x and 7x that
//! count. Each competitor must land within 4% of its multiple.
//!
//! Run with: cargo run -p eq-bench --release --example spin_competition

use anyhow::Result;
use eq_bench::{spin_work, Competition, QuickBench, RatioBand};

const SPIN: u64 = 10_000;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Spin Competition ===");
    println!("Baseline: {SPIN} spins; competitors at 3x, 5x, 7x\n");

    let report = Competition::new("spin_multiples", QuickBench::new(2_000))
        .baseline("spin x1", || spin_work(SPIN))
        .competitor("spin x3", Some(RatioBand::new(2.88, 3.12)), || spin_work(SPIN * 3))
        .competitor("spin x5", Some(RatioBand::new(4.80, 5.20)), || spin_work(SPIN * 5))
        .competitor("spin x7", Some(RatioBand::new(6.72, 7.28)), || spin_work(SPIN * 7))
        .run()?;

    println!("{report}");

    if report.is_pass() {
        println!("✓ All ratios within bands");
    } else {
        println!("✗ {} ratio(s) outside bands", report.failures().count());
    }

    report.ensure_pass()?;
    Ok(())
}
