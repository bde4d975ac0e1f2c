use std::sync::atomic::{AtomicU64, Ordering};

/// A collision-free source of fresh identifiers.
///
/// Implementations must hand out strictly increasing positive integers
/// and never reuse one. The codec's correctness does not depend on how
/// identifiers are produced, only that they are distinct.
pub trait IdAllocator: Send + Sync + 'static {
    /// Returns a fresh identifier, never seen before from this source.
    fn allocate(&self) -> u64;
}

/// The identifier the reference deployment's database sequence starts
/// at: 62^5, so the very first code already needs six characters.
pub const DEFAULT_SEQUENCE_START: u64 = 916_132_832;

/// In-process sequence allocator.
///
/// Stands in for the database sequence of a production deployment;
/// identifiers are strictly increasing within a single process.
#[derive(Debug)]
pub struct SequenceAllocator {
    next: AtomicU64,
}

impl SequenceAllocator {
    /// Creates an allocator starting at [`DEFAULT_SEQUENCE_START`].
    pub fn new() -> Self {
        Self::starting_at(DEFAULT_SEQUENCE_START)
    }

    /// Creates an allocator starting at a specific identifier.
    ///
    /// Useful for resuming from a known state or partitioning ranges
    /// across nodes.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequenceAllocator {
    fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
