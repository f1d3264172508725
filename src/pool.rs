//! Object pools for secondary-index backing storage.
//!
//! Splits and merges churn through many small allocations as nodes are
//! created and torn down. Rather than hand every one of those back to the
//! allocator, a [`Pools`] keeps free lists of the backing `Vec`s bucketed by
//! capacity class (for ordered-leaf arrays) or by the tree's fixed
//! dimensionality (for array-hypercube arrays), and hands them back out
//! cleared but with their capacity intact.

use crate::config::Config;
use crate::index::{ArrayHypercubeIndex, OrderedLeafIndex, SecondaryIndex};

pub struct Pools<V> {
    /// Free ordered-leaf backing arrays, bucketed by
    /// `Config::pool_array_size_classes` index.
    ordered_leaf_free: Vec<Vec<(Vec<u64>, Vec<crate::entry::Entry<V>>)>>,
    /// Free array-hypercube backing arrays. Every node in a tree shares the
    /// same dimension, so a single bucket suffices.
    array_hypercube_free: Vec<Vec<Option<crate::entry::Entry<V>>>>,
}

impl<V> Pools<V> {
    pub fn new(config: &Config) -> Self {
        Self {
            ordered_leaf_free: (0..config.pool_array_size_classes.len())
                .map(|_| Vec::new())
                .collect(),
            array_hypercube_free: Vec::new(),
        }
    }

    fn size_class_index(config: &Config, capacity: usize) -> usize {
        config
            .pool_array_size_classes
            .iter()
            .position(|&class| class >= capacity)
            .unwrap_or_else(|| config.pool_array_size_classes.len().saturating_sub(1))
    }

    pub fn acquire_ordered_leaf(&mut self, dim: usize, config: &Config) -> OrderedLeafIndex<V> {
        let capacity = config.initial_capacity_for_dim(dim);
        let class = Self::size_class_index(config, capacity);
        if let Some(bucket) = self.ordered_leaf_free.get_mut(class) {
            if let Some((hc_pos, entries)) = bucket.pop() {
                return OrderedLeafIndex::from_recycled(
                    hc_pos,
                    entries,
                    config.linear_search_threshold,
                );
            }
        }
        OrderedLeafIndex::with_capacity(capacity, config.linear_search_threshold)
    }

    pub fn release_ordered_leaf(&mut self, index: OrderedLeafIndex<V>, config: &Config) {
        let (hc_pos, entries) = index.into_recycled_arrays();
        let class = Self::size_class_index(config, hc_pos.capacity());
        if let Some(bucket) = self.ordered_leaf_free.get_mut(class) {
            bucket.push((hc_pos, entries));
        }
    }

    pub fn acquire_array_hypercube(&mut self, dim: usize) -> ArrayHypercubeIndex<V> {
        if let Some(slots) = self.array_hypercube_free.pop() {
            ArrayHypercubeIndex::from_recycled(slots, dim)
        } else {
            ArrayHypercubeIndex::new(dim)
        }
    }

    pub fn release_array_hypercube(&mut self, index: ArrayHypercubeIndex<V>) {
        self.array_hypercube_free.push(index.into_recycled_array());
    }

    /// A freshly allocated node always starts life as an ordered leaf; only
    /// `maybe_promote` switches representation once it fills up.
    pub fn acquire_index(&mut self, dim: usize, config: &Config) -> SecondaryIndex<V> {
        SecondaryIndex::OrderedLeaf(self.acquire_ordered_leaf(dim, config))
    }

    /// Return a node's secondary index to the pool when the node itself is
    /// being torn down (e.g. absorbed by a merge).
    pub fn release_index(&mut self, index: SecondaryIndex<V>, config: &Config) {
        match index {
            SecondaryIndex::OrderedLeaf(leaf) => self.release_ordered_leaf(leaf, config),
            SecondaryIndex::ArrayHypercube(array) => self.release_array_hypercube(array),
        }
    }
}
