//! Competition limits for the equality strategies

use std::fmt;
use std::path::Path;

use eq_core::scalar::UNROLLED_WORDS;
use eq_core::{Variant, Width};
use serde::{Deserialize, Serialize};

use crate::generators::DEFAULT_SEED;
use crate::{BenchError, Result};

/// Accepted range for `competitor time / baseline time`, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioBand {
    pub min: f64,
    pub max: f64,
}

impl RatioBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, ratio: f64) -> bool {
        (self.min..=self.max).contains(&ratio)
    }

    /// Divide `min` and multiply `max` by `factor`
    pub fn widened(self, factor: f64) -> Self {
        Self {
            min: self.min / factor,
            max: self.max * factor,
        }
    }
}

impl fmt::Display for RatioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}..{:.3}", self.min, self.max)
    }
}

/// One competition member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSpec {
    pub variant: Variant,
    pub width: Width,

    /// Expected ratio to the baseline; `None` = measure only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<RatioBand>,

    /// Heap allocations one call may perform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allocations: Option<usize>,
}

impl CompetitorSpec {
    pub fn new(variant: Variant, width: Width) -> Self {
        Self {
            variant,
            width,
            band: None,
            max_allocations: Some(0),
        }
    }

    pub fn with_band(mut self, min: f64, max: f64) -> Self {
        self.band = Some(RatioBand::new(min, max));
        self
    }

    pub fn with_max_allocations(mut self, max: Option<usize>) -> Self {
        self.max_allocations = max;
        self
    }

    /// Display name, e.g. `words/lanes`
    pub fn label(&self) -> String {
        format!("{}/{}", self.width, self.variant)
    }
}

/// Everything needed to run one equality competition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionConfig {
    pub name: String,

    /// Byte length of the compared buffers; word members see `buffer_len / 8` words
    pub buffer_len: usize,

    /// Seed for the buffer contents
    pub seed: u64,

    /// Timed calls per member
    pub iterations: usize,

    pub baseline: CompetitorSpec,

    pub competitors: Vec<CompetitorSpec>,
}

impl Default for CompetitionConfig {
    /// Every strategy of both widths on 128 bytes (16 words), against the
    /// byte for-loop
    fn default() -> Self {
        use Variant::*;
        use Width::*;

        Self {
            name: "byte_array_equality".into(),
            buffer_len: UNROLLED_WORDS * 8,
            seed: DEFAULT_SEED,
            iterations: 200_000,
            baseline: CompetitorSpec::new(ForLoop, Bytes),
            competitors: vec![
                CompetitorSpec::new(Sequence, Bytes).with_band(0.40, 2.50),
                CompetitorSpec::new(SliceEq, Bytes).with_band(0.01, 0.60),
                CompetitorSpec::new(Widened, Bytes).with_band(0.03, 0.80),
                CompetitorSpec::new(Lanes, Bytes).with_band(0.01, 0.80),
                CompetitorSpec::new(Raw, Bytes).with_band(0.03, 0.80),
                CompetitorSpec::new(Memcmp, Bytes).with_band(0.01, 0.80),
                CompetitorSpec::new(ForLoop, Words).with_band(0.03, 0.80),
                CompetitorSpec::new(Sequence, Words).with_band(0.03, 1.00),
                CompetitorSpec::new(Unrolled16, Words).with_band(0.01, 0.60),
                CompetitorSpec::new(SliceEq, Words).with_band(0.01, 0.60),
                CompetitorSpec::new(Lanes, Words).with_band(0.01, 0.80),
                CompetitorSpec::new(Raw, Words).with_band(0.01, 0.80),
                CompetitorSpec::new(Memcmp, Words).with_band(0.01, 0.80),
            ],
        }
    }
}

impl CompetitionConfig {
    /// Byte strategies only, against the byte for-loop
    pub fn bytes_default() -> Self {
        let mut config = Self::default();
        config.name = "bytes_equality".into();
        config.competitors.retain(|c| c.width == Width::Bytes);
        config
    }

    /// Word strategies only, against the word for-loop (16 words)
    pub fn words_default() -> Self {
        use Variant::*;
        use Width::Words;

        Self {
            name: "words_equality".into(),
            baseline: CompetitorSpec::new(ForLoop, Words),
            competitors: vec![
                CompetitorSpec::new(Sequence, Words).with_band(0.30, 2.50),
                CompetitorSpec::new(Unrolled16, Words).with_band(0.05, 1.50),
                CompetitorSpec::new(SliceEq, Words).with_band(0.05, 1.50),
                CompetitorSpec::new(Lanes, Words).with_band(0.05, 1.50),
                CompetitorSpec::new(Raw, Words).with_band(0.05, 1.50),
                CompetitorSpec::new(Memcmp, Words).with_band(0.05, 2.50),
            ],
            ..Self::default()
        }
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("loaded competition config `{}` from {}", config.name, path.as_ref().display());
        Ok(config)
    }

    /// Save as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Widen every band by `factor` (noisy machines, CI)
    pub fn relaxed(mut self, factor: f64) -> Self {
        for spec in &mut self.competitors {
            spec.band = spec.band.map(|b| b.widened(factor));
        }
        self
    }

    /// Builder pattern: set buffer length
    pub fn with_buffer_len(mut self, len: usize) -> Self {
        self.buffer_len = len;
        self
    }

    /// Builder pattern: set iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder pattern: set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Keep only members of `width` (the baseline must already have that width)
    pub fn only_width(mut self, width: Width) -> Result<Self> {
        if self.baseline.width != width {
            return Err(BenchError::Config(format!(
                "baseline `{}` is not a {width} member",
                self.baseline.label()
            )));
        }
        self.competitors.retain(|c| c.width == width);
        Ok(self)
    }

    /// Baseline followed by competitors
    pub fn members(&self) -> impl Iterator<Item = &CompetitorSpec> {
        std::iter::once(&self.baseline).chain(self.competitors.iter())
    }

    /// Check member/width combinations, bands and buffer length
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::Config("iterations must be > 0".into()));
        }

        let has_words = self.members().any(|m| m.width == Width::Words);
        if has_words && self.buffer_len % 8 != 0 {
            return Err(BenchError::Config(format!(
                "buffer_len {} is not a multiple of 8, required by word members",
                self.buffer_len
            )));
        }

        for member in self.members() {
            if !member.variant.supports(member.width) {
                return Err(BenchError::UnsupportedWidth {
                    variant: member.variant,
                    width: member.width,
                });
            }

            if member.variant == Variant::Unrolled16 && self.buffer_len != UNROLLED_WORDS * 8 {
                return Err(BenchError::Config(format!(
                    "unrolled16 needs buffer_len {}, got {}",
                    UNROLLED_WORDS * 8,
                    self.buffer_len
                )));
            }

            if let Some(band) = member.band {
                if !(band.min >= 0.0 && band.min <= band.max) {
                    return Err(BenchError::Config(format!(
                        "`{}` has an invalid band {band}",
                        member.label()
                    )));
                }
            }
        }

        Ok(())
    }
}
