//! Scalar comparison strategies
//!
//! Plain index loops, a hand-unrolled 16-word compare, and the iterator /
//! slice-equality primitives provided by the standard library.

use crate::error::{EqError, EqResult};

/// Word count accepted by [`words_unrolled16`]
pub const UNROLLED_WORDS: usize = 16;

// ============ Element-wise Scan ============

#[inline]
#[allow(clippy::needless_range_loop)]
fn for_loop<T: Copy + Eq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}

/// Index-by-index byte compare; the baseline every other strategy is measured against
pub fn bytes_for_loop(a: &[u8], b: &[u8]) -> bool {
    for_loop(a, b)
}

/// Index-by-index word compare
pub fn words_for_loop(a: &[u64], b: &[u64]) -> bool {
    for_loop(a, b)
}

// ============ Fixed-width Unrolled ============

/// Compare exactly [`UNROLLED_WORDS`] words with a fully unrolled expression.
///
/// Any other length on either side is rejected with [`EqError::InvalidLength`];
/// `a` is checked before `b`.
pub fn words_unrolled16(a: &[u64], b: &[u64]) -> EqResult<bool> {
    EqError::check_exact("a", UNROLLED_WORDS, a.len())?;
    EqError::check_exact("b", UNROLLED_WORDS, b.len())?;

    Ok(a[0] == b[0] && a[1] == b[1] && a[2] == b[2] && a[3] == b[3]
        && a[4] == b[4] && a[5] == b[5] && a[6] == b[6] && a[7] == b[7]
        && a[8] == b[8] && a[9] == b[9] && a[10] == b[10] && a[11] == b[11]
        && a[12] == b[12] && a[13] == b[13] && a[14] == b[14] && a[15] == b[15])
}

/// [`words_unrolled16`] flattened into the plain `bool` signature.
///
/// An `InvalidLength` rejection reads as "not equal". Only meant for the
/// variant registry, where every entry must share one function-pointer type.
pub fn words_unrolled16_or_false(a: &[u64], b: &[u64]) -> bool {
    words_unrolled16(a, b).unwrap_or(false)
}

// ============ Sequence / Library ============

// `Iterator::eq` alone walks the common prefix before noticing a length
// mismatch, so the length is checked up front.
#[inline]
fn sequence<T: Copy + Eq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().eq(b.iter())
}

/// Iterator-driven compare (`Iterator::eq`)
pub fn bytes_sequence(a: &[u8], b: &[u8]) -> bool {
    sequence(a, b)
}

/// Iterator-driven compare (`Iterator::eq`)
pub fn words_sequence(a: &[u64], b: &[u64]) -> bool {
    sequence(a, b)
}

/// Slice `==`, which lowers to `memcmp` for bytes
pub fn bytes_slice_eq(a: &[u8], b: &[u8]) -> bool {
    a == b
}

pub fn words_slice_eq(a: &[u64], b: &[u64]) -> bool {
    a == b
}
