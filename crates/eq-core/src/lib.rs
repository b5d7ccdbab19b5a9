//! # eq-core
//!
//! Exact equality comparison of fixed-layout binary buffers (`&[u8]` and
//! `&[u64]`), implemented several ways so their cost can be measured
//! side by side.
//!
//! Every strategy shares one contract:
//!
//! - `true` iff both buffers have the same length and every element pair matches
//! - a length mismatch returns `false` before any element is read
//! - the scan stops at the first mismatching element or lane
//! - two empty buffers are equal
//!
//! The one exception is [`scalar::words_unrolled16`], which only accepts
//! 16-word buffers and returns [`EqError::InvalidLength`] otherwise.
//!
//! ## Strategies
//!
//! | [`Variant`] | bytes | words |
//! |---|---|---|
//! | `for_loop` | [`scalar::bytes_for_loop`] | [`scalar::words_for_loop`] |
//! | `unrolled16` | - | [`scalar::words_unrolled16`] |
//! | `sequence` | [`scalar::bytes_sequence`] | [`scalar::words_sequence`] |
//! | `slice_eq` | [`scalar::bytes_slice_eq`] | [`scalar::words_slice_eq`] |
//! | `widened` | [`widened::bytes_as_words`] | - |
//! | `lanes` | [`lanes::bytes_lanes`] | [`lanes::words_lanes`] |
//! | `raw` | [`raw::bytes_raw`] | [`raw::words_raw`] |
//! | `memcmp` | [`native::bytes_memcmp`] | [`native::words_memcmp`] |

pub mod absent;
pub mod convert;
mod error;
pub mod lanes;
pub mod native;
pub mod raw;
pub mod scalar;
pub mod widened;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use absent::{eq_optional, AbsentPolicy};
pub use convert::{to_bytes, to_words};
pub use error::*;

/// Function pointer type for byte comparison strategies
pub type ByteEqFn = fn(&[u8], &[u8]) -> bool;

/// Function pointer type for word comparison strategies
pub type WordEqFn = fn(&[u64], &[u64]) -> bool;

/// Element width a strategy operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Bytes,
    Words,
}

impl Width {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Words => "words",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Width {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(Self::Bytes),
            "words" => Ok(Self::Words),
            _ => Err(format!("unknown width `{s}` (expected `bytes` or `words`)")),
        }
    }
}

// ============ Variant Registry ============

/// Comparison strategy, selected by the caller at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Index-by-index loop (baseline)
    ForLoop,
    /// Hand-unrolled 16-word compare
    Unrolled16,
    /// `Iterator::eq`
    Sequence,
    /// Slice `==`
    SliceEq,
    /// Bytes read as `u64` words
    Widened,
    /// `wide` vector lanes
    Lanes,
    /// Raw pointer loads with 4/2/1 remainder
    Raw,
    /// libc `memcmp`
    Memcmp,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::ForLoop,
        Variant::Unrolled16,
        Variant::Sequence,
        Variant::SliceEq,
        Variant::Widened,
        Variant::Lanes,
        Variant::Raw,
        Variant::Memcmp,
    ];

    /// Stable snake_case name used by configs and the CLI
    pub const fn name(self) -> &'static str {
        match self {
            Self::ForLoop => "for_loop",
            Self::Unrolled16 => "unrolled16",
            Self::Sequence => "sequence",
            Self::SliceEq => "slice_eq",
            Self::Widened => "widened",
            Self::Lanes => "lanes",
            Self::Raw => "raw",
            Self::Memcmp => "memcmp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Byte strategy, if this variant has one
    pub fn byte_fn(self) -> Option<ByteEqFn> {
        match self {
            Self::ForLoop => Some(scalar::bytes_for_loop),
            Self::Unrolled16 => None,
            Self::Sequence => Some(scalar::bytes_sequence),
            Self::SliceEq => Some(scalar::bytes_slice_eq),
            Self::Widened => Some(widened::bytes_as_words),
            Self::Lanes => Some(lanes::bytes_lanes),
            Self::Raw => Some(raw::bytes_raw),
            Self::Memcmp => Some(native::bytes_memcmp),
        }
    }

    /// Word strategy, if this variant has one.
    ///
    /// For `Unrolled16` this is [`scalar::words_unrolled16_or_false`]: a
    /// non-16 length reads as `false` instead of an error.
    pub fn word_fn(self) -> Option<WordEqFn> {
        match self {
            Self::ForLoop => Some(scalar::words_for_loop),
            Self::Unrolled16 => Some(scalar::words_unrolled16_or_false),
            Self::Sequence => Some(scalar::words_sequence),
            Self::SliceEq => Some(scalar::words_slice_eq),
            Self::Widened => None,
            Self::Lanes => Some(lanes::words_lanes),
            Self::Raw => Some(raw::words_raw),
            Self::Memcmp => Some(native::words_memcmp),
        }
    }

    pub fn supports(self, width: Width) -> bool {
        match width {
            Width::Bytes => self.byte_fn().is_some(),
            Width::Words => self.word_fn().is_some(),
        }
    }

    /// Variants that provide a strategy for `width`
    pub fn for_width(width: Width) -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(move |v| v.supports(width))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown variant `{s}`"))
    }
}
