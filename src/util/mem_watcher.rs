// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Heap usage accounting.
//!
//! [`CountingAlloc`] forwards to the system allocator and keeps per-thread
//! counters, so that a test installing it as `#[global_allocator]` can check
//! that a piece of code leaves no allocation behind.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Allocation counters of the current thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    /// Bytes allocated and not yet freed by this thread.
    pub live_bytes: isize,
    /// Number of successful fresh allocations (`alloc`, `alloc_zeroed`) made by
    /// this thread. A `realloc` only adjusts `live_bytes`, even when it moves
    /// the block.
    pub allocations: usize,
}

impl Usage {
    pub fn current() -> Self {
        Usage {
            live_bytes: LIVE_BYTES.with(Cell::get),
            allocations: ALLOCATIONS.with(Cell::get),
        }
    }
}

/// Measures the heap usage of the current thread across `f`.
pub fn watch<T>(f: impl FnOnce() -> T) -> (T, Usage) {
    let before = Usage::current();
    let result = f();
    let after = Usage::current();
    let delta = Usage {
        live_bytes: after.live_bytes - before.live_bytes,
        allocations: after.allocations - before.allocations,
    };
    (result, delta)
}

pub struct CountingAlloc;

impl CountingAlloc {
    fn record_alloc(ptr: *mut u8, layout: Layout) {
        if ptr.is_null() {
            return;
        }
        // Counters are skipped once the thread's locals are torn down.
        let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + layout.size() as isize));
        let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
    }

    fn record_dealloc(layout: Layout) {
        let _ = LIVE_BYTES.try_with(|live| live.set(live.get() - layout.size() as isize));
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        Self::record_alloc(ptr, layout);
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        Self::record_alloc(ptr, layout);
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        Self::record_dealloc(layout);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            let _ = LIVE_BYTES.try_with(|live| {
                live.set(live.get() - layout.size() as isize + new_size as isize)
            });
        }
        new_ptr
    }
}
