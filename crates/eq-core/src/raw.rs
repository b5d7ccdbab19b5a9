//! Raw-memory scan
//!
//! Walks both buffers through raw pointers: 8-byte unaligned loads for the
//! bulk, then at most one 4-, one 2- and one 1-byte load selected by the low
//! bits of the length. No loop handles the tail.
//!
//! Pointers come from the borrowed slices and never outlive the call.

use std::ptr;

/// Compare byte buffers through raw pointer loads
pub fn bytes_raw(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let len = a.len();
    let mut x1 = a.as_ptr();
    let mut x2 = b.as_ptr();

    // Safety: both slices are exactly `len` bytes. The bulk loop reads
    // `len / 8 * 8` bytes, and each remainder step only runs when its bit is
    // set in `len`, so the total never exceeds `len`. All loads are
    // `read_unaligned`, so slice alignment does not matter.
    unsafe {
        for _ in 0..len / 8 {
            if ptr::read_unaligned(x1 as *const u64) != ptr::read_unaligned(x2 as *const u64) {
                return false;
            }
            x1 = x1.add(8);
            x2 = x2.add(8);
        }

        if len & 4 != 0 {
            if ptr::read_unaligned(x1 as *const u32) != ptr::read_unaligned(x2 as *const u32) {
                return false;
            }
            x1 = x1.add(4);
            x2 = x2.add(4);
        }

        if len & 2 != 0 {
            if ptr::read_unaligned(x1 as *const u16) != ptr::read_unaligned(x2 as *const u16) {
                return false;
            }
            x1 = x1.add(2);
            x2 = x2.add(2);
        }

        if len & 1 != 0 && *x1 != *x2 {
            return false;
        }
    }

    true
}

/// Compare word buffers by viewing them as bytes
pub fn words_raw(a: &[u64], b: &[u64]) -> bool {
    a.len() == b.len() && bytes_raw(bytemuck::cast_slice(a), bytemuck::cast_slice(b))
}
