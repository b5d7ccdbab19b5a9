//! Native bulk-memory comparison via the platform C library's `memcmp`

/// `memcmp` over two byte regions of identical length.
///
/// Zero-length regions are equal without calling into libc.
#[inline]
fn memcmp_eq(a: *const libc::c_void, b: *const libc::c_void, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    // Safety: callers pass pointers from live slices spanning `len` bytes,
    // borrowed for the duration of this call only.
    unsafe { libc::memcmp(a, b, len) == 0 }
}

/// Compare byte buffers with `memcmp`, after an explicit length check
pub fn bytes_memcmp(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && memcmp_eq(a.as_ptr().cast(), b.as_ptr().cast(), a.len())
}

/// Compare word buffers with `memcmp` over their byte representation
pub fn words_memcmp(a: &[u64], b: &[u64]) -> bool {
    a.len() == b.len() && memcmp_eq(a.as_ptr().cast(), b.as_ptr().cast(), size_of_val(a))
}
