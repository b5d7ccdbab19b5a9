//! Allocation expectations for every competition member.
//!
//! Installs a counting global allocator. Counting is per thread so the
//! test harness and other tests in this binary do not leak into the numbers.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use eq_bench::{black_box, CompetitionConfig, EqualityInputs};

/// Global allocator that counts allocation events on the current thread.
struct CountingAlloc;

thread_local! {
    static ALLOC_CALLS: Cell<usize> = const { Cell::new(0) };
}

fn record() {
    // Thread-local storage may already be gone during thread teardown
    let _ = ALLOC_CALLS.try_with(|c| c.set(c.get() + 1));
}

// SAFETY: This allocator delegates to `System` and only records statistics.
// It preserves the required layout/size contracts of the global allocator API.
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record();
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record();
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record();
        }
        new_ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn alloc_calls() -> usize {
    ALLOC_CALLS.with(Cell::get)
}

/// Allocation events while running `f`
fn count_allocations<R>(f: impl FnOnce() -> R) -> (usize, R) {
    let before = alloc_calls();
    let out = f();
    (alloc_calls() - before, out)
}

#[test]
fn default_members_stay_within_allocation_limits() {
    let config = CompetitionConfig::default();
    let inputs = EqualityInputs::new(config.buffer_len, config.seed).unwrap();

    for spec in config.members() {
        let Some(limit) = spec.max_allocations else { continue };

        // The first call may touch lazily initialized state; measure the second
        inputs.compare(spec).unwrap();
        let (calls, equal) = count_allocations(|| black_box(inputs.compare(spec)));

        assert!(equal.unwrap(), "{} rejected equal inputs", spec.label());
        assert!(
            calls <= limit,
            "{} allocated {calls} time(s), limit {limit}",
            spec.label()
        );
    }
}

#[test]
fn conversion_allocates_once() {
    let bytes = vec![0xA5u8; 256];

    let (calls, words) = count_allocations(|| eq_core::to_words(&bytes));
    assert_eq!(calls, 1);
    let words = words.unwrap();

    let (calls, back) = count_allocations(|| eq_core::to_bytes(&words));
    assert_eq!(calls, 1);
    assert_eq!(back, bytes);
}

#[test]
fn counter_sees_allocations() {
    let (calls, v) = count_allocations(|| black_box(Vec::<u64>::with_capacity(8)));
    assert_eq!(calls, 1);
    drop(v);
}
