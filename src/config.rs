//! Tunable thresholds for the secondary index and pools.
//!
//! Mirrors the `Config`-with-`Default` pattern used elsewhere in this
//! code's lineage: a plain data struct, no builder, constructed once per
//! tree and passed down to whatever needs it.

/// Configuration for a [`crate::tree::PhTree`].
///
/// None of these affect correctness — every threshold here only changes
/// which secondary-index representation a node picks, or how aggressively
/// pools retain freed arrays. Getting them wrong costs memory or CPU, never
/// wrong answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial capacity for a fresh ordered-leaf secondary index.
    pub ordered_leaf_initial_capacity: usize,
    /// Entry count at or above which an ordered leaf is promoted to an
    /// array hypercube (direct-indexed by `hcPos`).
    pub array_hypercube_promotion_threshold: usize,
    /// Entry count at or below which an array hypercube is demoted back to
    /// an ordered leaf. Must be strictly less than the promotion threshold
    /// to avoid thrashing between the two representations.
    pub array_hypercube_demotion_threshold: usize,
    /// Linear search is used below this many entries in an ordered leaf;
    /// binary search above it.
    pub linear_search_threshold: usize,
    /// Capacity class boundaries (in elements) the array pools bucket by.
    pub pool_array_size_classes: &'static [usize],
}

impl Config {
    /// Initial capacity for a node whose hypercube has `2^dim` possible
    /// addresses. Small cubes (`dim <= 3`, so `2^dim <= 8`) start at 2
    /// entries; larger ones start at the configured default.
    pub fn initial_capacity_for_dim(&self, dim: usize) -> usize {
        if dim <= 3 {
            2
        } else {
            self.ordered_leaf_initial_capacity
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ordered_leaf_initial_capacity: 4,
            array_hypercube_promotion_threshold: 64,
            array_hypercube_demotion_threshold: 16,
            linear_search_threshold: 8,
            pool_array_size_classes: &[2, 4, 8, 16, 32, 64, 128, 256],
        }
    }
}
