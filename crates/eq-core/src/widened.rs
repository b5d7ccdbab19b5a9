//! Widened-word scan
//!
//! Byte buffers are read as native-endian `u64` words, eight bytes per
//! iteration. Lengths that are not a multiple of eight finish with a short
//! byte-wise tail.

/// Bytes consumed per widened iteration
pub const WORD_BYTES: usize = size_of::<u64>();

/// Compare two byte buffers eight bytes at a time
pub fn bytes_as_words(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut words_a = a.chunks_exact(WORD_BYTES);
    let mut words_b = b.chunks_exact(WORD_BYTES);

    for (wa, wb) in words_a.by_ref().zip(words_b.by_ref()) {
        let wa: u64 = bytemuck::pod_read_unaligned(wa);
        let wb: u64 = bytemuck::pod_read_unaligned(wb);
        if wa != wb {
            return false;
        }
    }

    // Tail (0..=7 bytes)
    words_a
        .remainder()
        .iter()
        .zip(words_b.remainder())
        .all(|(x, y)| x == y)
}
