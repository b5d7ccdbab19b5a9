//! Lane-parallel scan
//!
//! Whole 128-bit (bytes) or 256-bit (words) vectors are compared at once
//! using the portable `wide` types; the compiler lowers them to SSE/AVX/NEON
//! where available. The trailing `len % lanes` elements fall back to a
//! scalar scan.

use wide::{u64x4, u8x16};

/// Bytes per vector compare
pub const BYTE_LANES: usize = 16;

/// Words per vector compare
pub const WORD_LANES: usize = 4;

#[inline(always)]
fn load_bytes(chunk: &[u8]) -> u8x16 {
    let mut lane = [0u8; BYTE_LANES];
    lane.copy_from_slice(chunk);
    u8x16::new(lane)
}

#[inline(always)]
fn load_words(chunk: &[u64]) -> u64x4 {
    let mut lane = [0u64; WORD_LANES];
    lane.copy_from_slice(chunk);
    u64x4::new(lane)
}

/// Compare byte buffers sixteen bytes per step
pub fn bytes_lanes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut lanes_a = a.chunks_exact(BYTE_LANES);
    let mut lanes_b = b.chunks_exact(BYTE_LANES);

    for (la, lb) in lanes_a.by_ref().zip(lanes_b.by_ref()) {
        if load_bytes(la) != load_bytes(lb) {
            return false;
        }
    }

    lanes_a
        .remainder()
        .iter()
        .zip(lanes_b.remainder())
        .all(|(x, y)| x == y)
}

/// Compare word buffers four words per step
pub fn words_lanes(a: &[u64], b: &[u64]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut lanes_a = a.chunks_exact(WORD_LANES);
    let mut lanes_b = b.chunks_exact(WORD_LANES);

    for (la, lb) in lanes_a.by_ref().zip(lanes_b.by_ref()) {
        if load_words(la) != load_words(lb) {
            return false;
        }
    }

    lanes_a
        .remainder()
        .iter()
        .zip(lanes_b.remainder())
        .all(|(x, y)| x == y)
}
