//! The per-slot record stored in a node's secondary index.

use crate::key::Key;
use crate::node::Node;

/// What an [`Entry`] points at: either a terminal value, or a subtree.
pub enum Child<V> {
    /// A terminal leaf holding the user's value.
    Value(V),
    /// A link to a subtree; the entry's `kd_key` is the infix carrier for
    /// everything stored below this subnode.
    Node(Box<Node<V>>),
}

impl<V> Child<V> {
    /// `true` if this child is a terminal value.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Child::Value(_))
    }

    /// `true` if this child links to a subnode.
    #[inline]
    pub fn is_node(&self) -> bool {
        matches!(self, Child::Node(_))
    }

    #[inline]
    pub fn as_node(&self) -> Option<&Node<V>> {
        match self {
            Child::Node(n) => Some(n),
            Child::Value(_) => None,
        }
    }

    #[inline]
    pub fn as_node_mut(&mut self) -> Option<&mut Node<V>> {
        match self {
            Child::Node(n) => Some(n),
            Child::Value(_) => None,
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Child::Value(v) => Some(v),
            Child::Node(_) => None,
        }
    }

    #[inline]
    pub fn as_value_mut(&mut self) -> Option<&mut V> {
        match self {
            Child::Value(v) => Some(v),
            Child::Node(_) => None,
        }
    }
}

/// A single slot in a node's secondary index.
///
/// `hc_pos` is kept on the entry itself (in addition to being the index key
/// it's stored under) so that iteration can report it without threading
/// extra state through the secondary-index representations.
pub struct Entry<V> {
    pub hc_pos: u64,
    pub kd_key: Key,
    pub child: Child<V>,
}

impl<V> Entry<V> {
    #[inline]
    pub fn new(hc_pos: u64, kd_key: Key, child: Child<V>) -> Self {
        Self { hc_pos, kd_key, child }
    }

    #[inline]
    pub fn new_value(hc_pos: u64, kd_key: Key, value: V) -> Self {
        Self { hc_pos, kd_key, child: Child::Value(value) }
    }

    #[inline]
    pub fn new_node(hc_pos: u64, kd_key: Key, node: Box<Node<V>>) -> Self {
        Self { hc_pos, kd_key, child: Child::Node(node) }
    }
}
