//! Equality competition wiring
//!
//! Turns a [`CompetitionConfig`] into a [`Competition`] over one seeded
//! buffer and a bit-identical copy of it, so every member runs its full
//! equal-input scan.

use eq_core::{to_words, Width};

use crate::competition::Competition;
use crate::config::{CompetitionConfig, CompetitorSpec};
use crate::generators::random_bytes;
use crate::utils::{black_box, QuickBench};
use crate::{BenchError, Result};

/// Input pair shared by every member
#[derive(Debug, Clone)]
pub struct EqualityInputs {
    pub bytes_a: Vec<u8>,
    pub bytes_b: Vec<u8>,
    pub words_a: Vec<u64>,
    pub words_b: Vec<u64>,
}

impl EqualityInputs {
    /// Seeded buffer of `len` bytes plus an independent copy
    pub fn new(len: usize, seed: u64) -> Result<Self> {
        let bytes_a = random_bytes(len, seed);
        let bytes_b = bytes_a.clone();
        // Word views only exist for whole words; byte-only configs may use any length
        let (words_a, words_b) = if len % 8 == 0 {
            let words = to_words(&bytes_a)?;
            (words.clone(), words)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Self {
            bytes_a,
            bytes_b,
            words_a,
            words_b,
        })
    }

    /// Run `spec`'s strategy once on these inputs
    pub fn compare(&self, spec: &CompetitorSpec) -> Result<bool> {
        let unsupported = || BenchError::UnsupportedWidth {
            variant: spec.variant,
            width: spec.width,
        };

        match spec.width {
            Width::Bytes => {
                let f = spec.variant.byte_fn().ok_or_else(unsupported)?;
                Ok(f(&self.bytes_a, &self.bytes_b))
            }
            Width::Words => {
                let f = spec.variant.word_fn().ok_or_else(unsupported)?;
                Ok(f(&self.words_a, &self.words_b))
            }
        }
    }
}

fn member<'a>(
    inputs: &'a EqualityInputs,
    spec: &CompetitorSpec,
) -> Result<Box<dyn FnMut() + 'a>> {
    // Sanity run: an equal pair must compare equal before it is timed
    if !inputs.compare(spec)? {
        return Err(BenchError::Config(format!(
            "`{}` reported equal inputs as unequal",
            spec.label()
        )));
    }

    let run: Box<dyn FnMut() + 'a> = match spec.width {
        Width::Bytes => {
            let f = spec.variant.byte_fn().ok_or(BenchError::UnsupportedWidth {
                variant: spec.variant,
                width: spec.width,
            })?;
            Box::new(move || {
                black_box(f(black_box(inputs.bytes_a.as_slice()), black_box(inputs.bytes_b.as_slice())));
            })
        }
        Width::Words => {
            let f = spec.variant.word_fn().ok_or(BenchError::UnsupportedWidth {
                variant: spec.variant,
                width: spec.width,
            })?;
            Box::new(move || {
                black_box(f(black_box(inputs.words_a.as_slice()), black_box(inputs.words_b.as_slice())));
            })
        }
    };
    Ok(run)
}

/// Build the competition described by `config` over `inputs`
pub fn equality_competition<'a>(
    config: &CompetitionConfig,
    inputs: &'a EqualityInputs,
) -> Result<Competition<'a>> {
    config.validate()?;

    let mut competition = Competition::new(config.name.clone(), QuickBench::new(config.iterations))
        .baseline(config.baseline.label(), member(inputs, &config.baseline)?);

    for spec in &config.competitors {
        competition = competition.competitor(spec.label(), spec.band, member(inputs, spec)?);
    }

    Ok(competition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_core::Variant;

    #[test]
    fn test_inputs_are_equal_copies() {
        let inputs = EqualityInputs::new(128, 0).unwrap();
        assert_eq!(inputs.bytes_a, inputs.bytes_b);
        assert_ne!(inputs.bytes_a.as_ptr(), inputs.bytes_b.as_ptr());
        assert_eq!(inputs.words_a.len(), 16);
        assert_eq!(inputs.words_a, inputs.words_b);
    }

    #[test]
    fn test_inputs_odd_length_has_no_words() {
        let inputs = EqualityInputs::new(13, 0).unwrap();
        assert_eq!(inputs.bytes_a.len(), 13);
        assert!(inputs.words_a.is_empty());
    }

    #[test]
    fn test_compare_every_default_member() {
        let config = CompetitionConfig::default();
        let inputs = EqualityInputs::new(config.buffer_len, config.seed).unwrap();
        for spec in config.members() {
            assert!(inputs.compare(spec).unwrap(), "{}", spec.label());
        }
    }

    #[test]
    fn test_compare_unsupported() {
        let inputs = EqualityInputs::new(16, 0).unwrap();
        let spec = CompetitorSpec::new(Variant::Unrolled16, Width::Bytes);
        assert!(matches!(inputs.compare(&spec), Err(BenchError::UnsupportedWidth { .. })));
    }

    #[test]
    fn test_competition_runs_all_members() {
        let config = CompetitionConfig::default().with_iterations(3).relaxed(1e6);
        let inputs = EqualityInputs::new(config.buffer_len, config.seed).unwrap();
        let competition = equality_competition(&config, &inputs).unwrap();
        assert_eq!(competition.len(), config.competitors.len() + 1);

        let report = competition.run().unwrap();
        assert_eq!(report.rows.len(), config.competitors.len() + 1);
        assert_eq!(report.rows[0].name, "bytes/for_loop");
        assert!(report.row("words/unrolled16").is_some());
    }

    #[test]
    fn test_competition_rejects_invalid_config() {
        let config = CompetitionConfig::default().with_buffer_len(24);
        let inputs = EqualityInputs::new(24, 0).unwrap();
        assert!(equality_competition(&config, &inputs).is_err());
    }
}
