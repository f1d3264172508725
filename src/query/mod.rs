//! Traversal engines over a [`crate::node::Node`] tree: full iteration,
//! axis-aligned window queries, distance-bounded range queries, and
//! nearest-neighbor search.
//!
//! All of these are stack-based lazy iterators in the style of the crate's
//! original full-tree walk: no recursion, just an explicit `Vec` of
//! in-progress node iterators that gets pushed to on descent and popped on
//! exhaustion.

pub mod knn;
pub mod range;
pub mod window;

use crate::entry::{Child, Entry};
use crate::key::Key;
use crate::node::Node;

pub use knn::nearest_neighbors;
pub use range::RangeIter;
pub use window::WindowIter;

/// Unconditional in-order traversal of every key/value pair in the tree.
pub struct Iter<'a, V> {
    stack: Vec<Box<dyn Iterator<Item = &'a Entry<V>> + 'a>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>) -> Self {
        Self { stack: vec![root.iter_boxed()] }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(entry) => match &entry.child {
                    Child::Value(v) => return Some((entry.kd_key.clone(), v)),
                    Child::Node(sub) => self.stack.push(sub.iter_boxed()),
                },
            }
        }
        None
    }
}
