//! Test data generators for benchmarks

use eq_core::{to_bytes, to_words, EqResult};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate reproducible random bytes
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u8>()).collect()
}

/// Encode `text` as UTF-16LE, left-padded with spaces to `chars` code units.
///
/// `utf16_padded("Hello, world!", 64)` is the 128-byte (1024-bit key) fixture.
pub fn utf16_padded(text: &str, chars: usize) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let pad = chars.saturating_sub(units.len());

    std::iter::repeat_n(u16::from(b' '), pad)
        .chain(units)
        .flat_map(u16::to_le_bytes)
        .collect()
}

/// Copy of `buf` with the last element's bits inverted
pub fn with_flipped_last<T: Copy + std::ops::Not<Output = T>>(buf: &[T]) -> Vec<T> {
    let mut out = buf.to_vec();
    if let Some(last) = out.last_mut() {
        *last = !*last;
    }
    out
}

/// Copy of `buf` with the first element's bits inverted (early-mismatch input)
pub fn with_flipped_first<T: Copy + std::ops::Not<Output = T>>(buf: &[T]) -> Vec<T> {
    let mut out = buf.to_vec();
    if let Some(first) = out.first_mut() {
        *first = !*first;
    }
    out
}

/// Buffer triplet for correctness checks: a buffer, a bit-identical copy
/// in separate storage, and a same-length buffer with different content
#[derive(Debug, Clone)]
pub struct EqualityFixture {
    pub bytes: Vec<u8>,
    pub same_bytes: Vec<u8>,
    pub other_bytes: Vec<u8>,
    pub words: Vec<u64>,
    pub same_words: Vec<u64>,
    pub other_words: Vec<u64>,
}

impl EqualityFixture {
    /// Build from two same-length byte buffers whose length is a multiple of 8
    pub fn new(bytes: Vec<u8>, other_bytes: Vec<u8>) -> EqResult<Self> {
        let words = to_words(&bytes)?;
        let same_bytes = to_bytes(&words);
        let same_words = to_words(&same_bytes)?;
        let other_words = to_words(&other_bytes)?;

        Ok(Self {
            bytes,
            same_bytes,
            other_bytes,
            words,
            same_words,
            other_words,
        })
    }

    /// The "Hello, world!" / "Emm?" pair, 128 bytes each
    pub fn greeting() -> EqResult<Self> {
        Self::new(
            utf16_padded("Hello, world!", GREETING_CHARS),
            utf16_padded("Emm?", GREETING_CHARS),
        )
    }

    /// Seeded random buffer and a copy differing in the last byte
    pub fn random(len: usize, seed: u64) -> EqResult<Self> {
        let bytes = random_bytes(len, seed);
        let other = with_flipped_last(&bytes);
        Self::new(bytes, other)
    }
}

/// UTF-16 code units in the greeting fixture (1024 bits)
pub const GREETING_CHARS: usize = 1024 / 8 / 2;

/// Common buffer sizes (bytes) for benchmarks
pub const BUFFER_SIZES: &[usize] = &[16, 128, 1024, 4096, 65536];

/// Default seed; fixed so results are repeatable
pub const DEFAULT_SEED: u64 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let buf1 = random_bytes(100, 42);
        let buf2 = random_bytes(100, 42);
        assert_eq!(buf1, buf2);
        assert_ne!(buf1, random_bytes(100, 43));
    }

    #[test]
    fn test_utf16_padded() {
        let buf = utf16_padded("Hi", 4);
        assert_eq!(buf, vec![b' ', 0, b' ', 0, b'H', 0, b'i', 0]);

        // Text longer than the pad width is kept whole
        assert_eq!(utf16_padded("Hello", 2).len(), 10);
    }

    #[test]
    fn test_flips() {
        assert_eq!(with_flipped_last(&[0u8, 1, 2]), vec![0, 1, 0xFD]);
        assert_eq!(with_flipped_first(&[0u64, 1]), vec![u64::MAX, 1]);
        assert!(with_flipped_last::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_greeting_fixture() {
        let f = EqualityFixture::greeting().unwrap();
        assert_eq!(f.bytes.len(), 128);
        assert_eq!(f.other_bytes.len(), 128);
        assert_eq!(f.words.len(), 16);
        assert_eq!(f.bytes, f.same_bytes);
        assert_ne!(f.bytes.as_ptr(), f.same_bytes.as_ptr());
        assert_eq!(f.words, f.same_words);
        assert_ne!(f.bytes, f.other_bytes);
        assert_ne!(f.words, f.other_words);
    }

    #[test]
    fn test_random_fixture_rejects_partial_word() {
        assert!(EqualityFixture::random(12, DEFAULT_SEED).is_err());
        assert!(EqualityFixture::random(128, DEFAULT_SEED).is_ok());
    }
}
