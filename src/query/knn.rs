//! Nearest-neighbor search via incremental best-first traversal.
//!
//! A priority queue ordered by distance (subtrees ordered by their lower
//! bound, values by their exact distance) guarantees that values pop out in
//! non-decreasing distance order, so the first `k` value-pops are exactly
//! the `k` nearest neighbors.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::distance::DistanceMetric;
use crate::entry::Child;
use crate::key::Key;
use crate::node::Node;

enum Candidate<'a, V> {
    Subtree(&'a Node<V>),
    Hit(Key, &'a V),
}

struct HeapItem<'a, V> {
    dist: OrderedFloat<f64>,
    candidate: Candidate<'a, V>,
}

impl<'a, V> PartialEq for HeapItem<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}
impl<'a, V> Eq for HeapItem<'a, V> {}
impl<'a, V> PartialOrd for HeapItem<'a, V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<'a, V> Ord for HeapItem<'a, V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.cmp(&other.dist)
    }
}

/// The `k` nearest entries to `center`, nearest first, with their distance.
pub fn nearest_neighbors<'a, V, M: DistanceMetric>(
    root: &'a Node<V>,
    center: &Key,
    k: usize,
    metric: &M,
) -> Vec<(Key, &'a V, f64)> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<HeapItem<'a, V>>> = BinaryHeap::new();
    heap.push(Reverse(HeapItem { dist: OrderedFloat(0.0), candidate: Candidate::Subtree(root) }));

    let mut results: Vec<(Key, &'a V, f64)> = Vec::with_capacity(k);
    loop {
        let top_dist = match heap.peek() {
            Some(Reverse(item)) => item.dist,
            None => break,
        };
        // Once we have k results, only keep draining ties at the k-th
        // distance (the heap's monotonic order means top_dist can only be
        // == or > the last accepted distance here, never <).
        if results.len() >= k && top_dist.0 > results.last().unwrap().2 {
            break;
        }
        let Reverse(item) = heap.pop().expect("peeked above");
        match item.candidate {
            Candidate::Hit(key, value) => results.push((key, value, item.dist.0)),
            Candidate::Subtree(node) => {
                for entry in node.iter_boxed() {
                    match &entry.child {
                        Child::Value(v) => {
                            let d = metric.distance(center, &entry.kd_key);
                            heap.push(Reverse(HeapItem {
                                dist: OrderedFloat(d),
                                candidate: Candidate::Hit(entry.kd_key.clone(), v),
                            }));
                        }
                        Child::Node(sub) => {
                            let d = metric.min_dist_to_region(center, &entry.kd_key, sub.post_len);
                            heap.push(Reverse(HeapItem {
                                dist: OrderedFloat(d),
                                candidate: Candidate::Subtree(sub),
                            }));
                        }
                    }
                }
            }
        }
    }
    results
}
