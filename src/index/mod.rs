//! Per-node secondary index: the ordered map from `hc_pos` to [`Entry`].
//!
//! Two representations coexist behind one enum: an [`OrderedLeafIndex`] for
//! sparse nodes and an [`ArrayHypercubeIndex`] for dense ones. `Node` holds
//! the enum directly and dispatches with `match` rather than through a
//! trait object, so there is no vtable indirection on the hot path.

pub mod array_hypercube;
pub mod ordered_leaf;

use crate::config::Config;
use crate::entry::Entry;

pub use array_hypercube::ArrayHypercubeIndex;
pub use ordered_leaf::OrderedLeafIndex;

/// The secondary index held by a [`crate::node::Node`].
pub enum SecondaryIndex<V> {
    OrderedLeaf(OrderedLeafIndex<V>),
    ArrayHypercube(ArrayHypercubeIndex<V>),
}

impl<V> SecondaryIndex<V> {
    pub fn new_ordered_leaf(dim: usize, config: &Config) -> Self {
        SecondaryIndex::OrderedLeaf(OrderedLeafIndex::with_capacity(
            config.initial_capacity_for_dim(dim),
            config.linear_search_threshold,
        ))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.len(),
            SecondaryIndex::ArrayHypercube(i) => i.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, hc_pos: u64) -> Option<&Entry<V>> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.get(hc_pos),
            SecondaryIndex::ArrayHypercube(i) => i.get(hc_pos),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, hc_pos: u64) -> Option<&mut Entry<V>> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.get_mut(hc_pos),
            SecondaryIndex::ArrayHypercube(i) => i.get_mut(hc_pos),
        }
    }

    #[inline]
    pub fn get_or_create_with(
        &mut self,
        hc_pos: u64,
        make: impl FnOnce() -> Entry<V>,
    ) -> (&mut Entry<V>, bool) {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.get_or_create_with(hc_pos, make),
            SecondaryIndex::ArrayHypercube(i) => i.get_or_create_with(hc_pos, make),
        }
    }

    #[inline]
    pub fn remove(&mut self, hc_pos: u64) -> Option<Entry<V>> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.remove(hc_pos),
            SecondaryIndex::ArrayHypercube(i) => i.remove(hc_pos),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &Entry<V>> + '_> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => Box::new(i.iter()),
            SecondaryIndex::ArrayHypercube(i) => Box::new(i.iter()),
        }
    }

    pub fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut Entry<V>> + '_> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => Box::new(i.iter_mut()),
            SecondaryIndex::ArrayHypercube(i) => Box::new(i.iter_mut()),
        }
    }

    pub fn masked_iter(&self, min_mask: u64, max_mask: u64) -> Box<dyn Iterator<Item = &Entry<V>> + '_> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => Box::new(i.masked_iter(min_mask, max_mask)),
            SecondaryIndex::ArrayHypercube(i) => Box::new(i.masked_iter(min_mask, max_mask)),
        }
    }

    pub fn first_value(&self) -> Option<&V> {
        match self {
            SecondaryIndex::OrderedLeaf(i) => i.first_value(),
            SecondaryIndex::ArrayHypercube(i) => i.first_value(),
        }
    }

    /// Convert to an array hypercube in place if the entry count has crossed
    /// the promotion threshold. A no-op if already an array hypercube.
    pub fn maybe_promote(&mut self, dim: usize, config: &Config) {
        if let SecondaryIndex::OrderedLeaf(leaf) = self {
            if leaf.len() >= config.array_hypercube_promotion_threshold {
                let entries = std::mem::replace(
                    leaf,
                    OrderedLeafIndex::with_capacity(0, config.linear_search_threshold),
                )
                .into_entries();
                let mut array = ArrayHypercubeIndex::new(dim);
                for e in entries {
                    let hc_pos = e.hc_pos;
                    array.get_or_create_with(hc_pos, || e);
                }
                *self = SecondaryIndex::ArrayHypercube(array);
            }
        }
    }

    /// Convert to an ordered leaf in place if the entry count has dropped to
    /// the demotion threshold. A no-op if already an ordered leaf.
    pub fn maybe_demote(&mut self, config: &Config) {
        if let SecondaryIndex::ArrayHypercube(array) = self {
            if array.len() <= config.array_hypercube_demotion_threshold {
                let entries = std::mem::replace(array, ArrayHypercubeIndex::new(0)).into_entries();
                let mut leaf = OrderedLeafIndex::with_capacity(
                    entries.len(),
                    config.linear_search_threshold,
                );
                for e in entries {
                    let hc_pos = e.hc_pos;
                    leaf.get_or_create_with(hc_pos, || e);
                }
                *self = SecondaryIndex::OrderedLeaf(leaf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::key_from_slice;

    #[test]
    fn promotes_and_demotes_without_losing_entries() {
        let mut config = Config::default();
        config.array_hypercube_promotion_threshold = 3;
        config.array_hypercube_demotion_threshold = 1;

        let mut idx: SecondaryIndex<u64> = SecondaryIndex::new_ordered_leaf(2, &config);
        for hc in 0u64..4 {
            idx.get_or_create_with(hc, || Entry::new_value(hc, key_from_slice(&[hc]), hc));
            idx.maybe_promote(2, &config);
        }
        assert!(matches!(idx, SecondaryIndex::ArrayHypercube(_)));
        assert_eq!(idx.len(), 4);

        idx.remove(0);
        idx.remove(1);
        idx.remove(2);
        idx.maybe_demote(&config);
        assert!(matches!(idx, SecondaryIndex::OrderedLeaf(_)));
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get(3).unwrap().child.as_value(), Some(&3));
    }
}
