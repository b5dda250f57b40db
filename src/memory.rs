//! Heap accounting through a counting global allocator.
//!
//! A tracing collector exposes "used memory" and lets a program request a
//! collection. Ownership-based memory has neither a collector nor a pause to
//! measure; the closest honest reading is how many bytes are live right now,
//! which this allocator keeps. A binary opts in with
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: gc_pressure::memory::CountingAllocator = gc_pressure::memory::CountingAllocator;
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

pub struct CountingAllocator;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static DEALLOCATED: AtomicUsize = AtomicUsize::new(0);
static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record_dealloc(layout.size());
            record_alloc(new_size);
        }
        new_ptr
    }
}

fn record_alloc(size: usize) {
    ALLOCATED.fetch_add(size, Ordering::Relaxed);
    ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    let current = CURRENT.fetch_add(size, Ordering::Relaxed) + size;
    PEAK.fetch_max(current, Ordering::Relaxed);
}

fn record_dealloc(size: usize) {
    DEALLOCATED.fetch_add(size, Ordering::Relaxed);
    CURRENT.fetch_sub(size, Ordering::Relaxed);
}

/// True once the counting allocator has served at least one request, i.e.
/// it is installed as the global allocator of this process.
pub fn is_active() -> bool {
    ALLOCATIONS.load(Ordering::Relaxed) > 0
}

/// Number of allocation requests served so far.
pub fn allocation_count() -> u64 {
    ALLOCATIONS.load(Ordering::Relaxed)
}

/// Point-in-time copy of the allocator counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocSnapshot {
    allocated: usize,
    deallocated: usize,
    current: usize,
    peak: usize,
    allocations: u64,
}

impl AllocSnapshot {
    pub fn capture() -> Self {
        Self {
            allocated: ALLOCATED.load(Ordering::Relaxed),
            deallocated: DEALLOCATED.load(Ordering::Relaxed),
            current: CURRENT.load(Ordering::Relaxed),
            peak: PEAK.load(Ordering::Relaxed),
            allocations: ALLOCATIONS.load(Ordering::Relaxed),
        }
    }

    /// Bytes live at capture time.
    pub fn in_use(&self) -> usize {
        self.current
    }

    /// Highest live byte count seen since process start.
    pub fn peak(&self) -> usize {
        self.peak
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }

    pub fn deallocated(&self) -> usize {
        self.deallocated
    }

    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Counter deltas between `earlier` and `self`. `in_use` and `peak` are
    /// carried over from `self` since they are levels, not totals.
    pub fn since(&self, earlier: &AllocSnapshot) -> AllocSnapshot {
        AllocSnapshot {
            allocated: self.allocated.saturating_sub(earlier.allocated),
            deallocated: self.deallocated.saturating_sub(earlier.deallocated),
            current: self.current,
            peak: self.peak,
            allocations: self.allocations.saturating_sub(earlier.allocations),
        }
    }
}

pub fn to_mb(bytes: usize) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_mb() {
        assert_eq!(to_mb(0), 0.0);
        assert_eq!(to_mb(1024 * 1024), 1.0);
        assert_eq!(to_mb(3 * 512 * 1024), 1.5);
    }

    #[test]
    fn test_since_subtracts_totals() {
        let earlier = AllocSnapshot {
            allocated: 100,
            deallocated: 40,
            current: 60,
            peak: 80,
            allocations: 3,
        };
        let later = AllocSnapshot {
            allocated: 300,
            deallocated: 240,
            current: 60,
            peak: 120,
            allocations: 7,
        };
        let delta = later.since(&earlier);
        assert_eq!(delta.allocated(), 200);
        assert_eq!(delta.deallocated(), 200);
        assert_eq!(delta.allocations(), 4);
        assert_eq!(delta.peak(), 120);
        assert_eq!(delta.in_use(), 60);
    }
}
