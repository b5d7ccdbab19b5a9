//! Baseline-relative timing competitions
//!
//! One member is the baseline; every other member declares the band its
//! mean time must fall in, as a multiple of the baseline's mean time.
//! A member expected to take three times as long as the baseline might
//! declare `2.88..=3.12`.

use std::fmt;
use std::time::Duration;

use crate::config::RatioBand;
use crate::utils::{time_ratio, QuickBench};
use crate::{BenchError, Result};

/// Where a measured ratio landed relative to its band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The reference member
    Baseline,
    /// No band declared; measured only
    Unchecked,
    Within,
    /// Faster than the band allows
    TooFast,
    /// Slower than the band allows
    TooSlow,
}

impl Verdict {
    pub fn from_ratio(ratio: f64, band: Option<RatioBand>) -> Self {
        match band {
            None => Self::Unchecked,
            Some(b) if ratio < b.min => Self::TooFast,
            Some(b) if ratio > b.max => Self::TooSlow,
            Some(_) => Self::Within,
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Self::TooFast | Self::TooSlow)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Unchecked => "-",
            Self::Within => "ok",
            Self::TooFast => "TOO FAST",
            Self::TooSlow => "TOO SLOW",
        }
    }
}

struct Member<'a> {
    name: String,
    band: Option<RatioBand>,
    run: Box<dyn FnMut() + 'a>,
}

/// A set of closures timed against a baseline
pub struct Competition<'a> {
    name: String,
    bench: QuickBench,
    baseline: Option<Member<'a>>,
    competitors: Vec<Member<'a>>,
}

impl<'a> Competition<'a> {
    pub fn new(name: impl Into<String>, bench: QuickBench) -> Self {
        Self {
            name: name.into(),
            bench,
            baseline: None,
            competitors: Vec::new(),
        }
    }

    /// Set the reference member (replaces any previous one)
    pub fn baseline(mut self, name: impl Into<String>, run: impl FnMut() + 'a) -> Self {
        self.baseline = Some(Member {
            name: name.into(),
            band: None,
            run: Box::new(run),
        });
        self
    }

    /// Add a competitor with an optional expected ratio band
    pub fn competitor(
        mut self,
        name: impl Into<String>,
        band: Option<RatioBand>,
        run: impl FnMut() + 'a,
    ) -> Self {
        self.competitors.push(Member {
            name: name.into(),
            band,
            run: Box::new(run),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.competitors.len() + usize::from(self.baseline.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time every member and compare competitors against the baseline
    pub fn run(self) -> Result<CompetitionReport> {
        let Competition {
            name,
            bench,
            baseline,
            competitors,
        } = self;

        let mut baseline = baseline.ok_or_else(|| BenchError::MissingBaseline(name.clone()))?;

        log::info!(
            "competition `{}`: {} competitor(s), {} iterations",
            name,
            competitors.len(),
            bench.iterations()
        );

        let base_mean = bench.run(&mut baseline.run);
        log::debug!("  {} (baseline): {:?}", baseline.name, base_mean);

        let mut rows = Vec::with_capacity(competitors.len() + 1);
        rows.push(ReportRow {
            name: baseline.name,
            mean: base_mean,
            ratio: 1.0,
            band: None,
            verdict: Verdict::Baseline,
        });

        for mut member in competitors {
            let mean = bench.run(&mut member.run);
            let ratio = time_ratio(base_mean, mean);
            let verdict = Verdict::from_ratio(ratio, member.band);

            match (verdict.is_failure(), member.band) {
                (true, Some(band)) => log::warn!(
                    "  {}: ratio {:.3} outside {} ({})",
                    member.name,
                    ratio,
                    band,
                    verdict.label()
                ),
                _ => log::debug!("  {}: {:?}, ratio {:.3}", member.name, mean, ratio),
            }

            rows.push(ReportRow {
                name: member.name,
                mean,
                ratio,
                band: member.band,
                verdict,
            });
        }

        Ok(CompetitionReport { name, rows })
    }
}

/// Outcome for one member
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub mean: Duration,
    pub ratio: f64,
    pub band: Option<RatioBand>,
    pub verdict: Verdict,
}

/// Outcome of a whole competition; the first row is the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionReport {
    pub name: String,
    pub rows: Vec<ReportRow>,
}

impl CompetitionReport {
    pub fn failures(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.verdict.is_failure())
    }

    pub fn is_pass(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn row(&self, name: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// `Err(LimitsViolated)` if any competitor fell outside its band
    pub fn ensure_pass(&self) -> Result<()> {
        match self.failures().count() {
            0 => Ok(()),
            failures => Err(BenchError::LimitsViolated {
                name: self.name.clone(),
                failures,
            }),
        }
    }
}

impl fmt::Display for CompetitionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Competition: {}", self.name)?;
        writeln!(
            f,
            "{:<24} {:>12} {:>8} {:>16}  {}",
            "member", "mean", "ratio", "band", "verdict"
        )?;
        for row in &self.rows {
            let band = row.band.map(|b| b.to_string()).unwrap_or_else(|| "-".into());
            writeln!(
                f,
                "{:<24} {:>12} {:>8.3} {:>16}  {}",
                row.name,
                format!("{:.1?}", row.mean),
                row.ratio,
                band,
                row.verdict.label()
            )?;
        }
        Ok(())
    }
}
