//! Byte/word buffer conversion
//!
//! Straight block copies of the underlying storage in native byte order,
//! no per-element transformation.

use crate::error::{EqError, EqResult};

/// Reinterpret a byte buffer as words.
///
/// Fails with `InvalidLength` unless `bytes.len()` is a multiple of 8.
pub fn to_words(bytes: &[u8]) -> EqResult<Vec<u64>> {
    EqError::check_multiple("bytes", size_of::<u64>(), bytes.len())?;

    let mut words = vec![0u64; bytes.len() / size_of::<u64>()];
    bytemuck::cast_slice_mut::<u64, u8>(&mut words).copy_from_slice(bytes);
    log::trace!("to_words: {} bytes -> {} words", bytes.len(), words.len());
    Ok(words)
}

/// Copy a word buffer out as bytes
pub fn to_bytes(words: &[u64]) -> Vec<u8> {
    let bytes = bytemuck::cast_slice::<u64, u8>(words).to_vec();
    log::trace!("to_bytes: {} words -> {} bytes", words.len(), bytes.len());
    bytes
}
