//! Distance metrics for nearest-neighbor and range-by-distance queries.
//!
//! The core only needs two numbers from a metric: the distance between two
//! full keys, and a lower bound on the distance from a point to everything
//! under a given subnode (used to prune the search without descending into
//! it). Both are expressed over the same bit-sliced integer keys the tree
//! stores; interpreting those integers as signed, float-transcoded, or
//! otherwise is entirely up to the caller's own `IntTranscoder`.

use crate::key::Key;

/// A distance function over k-dimensional integer keys, plus the pruning
/// bound the k-NN and range-by-distance queries need to skip whole
/// subtrees.
pub trait DistanceMetric {
    /// Distance between two full keys.
    fn distance(&self, a: &Key, b: &Key) -> f64;

    /// A lower bound on the distance from `center` to any key that could be
    /// stored under a subnode whose infix carrier is `region_key` and whose
    /// post length is `post_len`. Returning `0.0` is always sound (just
    /// disables pruning for that subtree); a tighter bound prunes more.
    fn min_dist_to_region(&self, center: &Key, region_key: &Key, post_len: u8) -> f64;
}

/// Euclidean distance treating each key component as an unsigned integer
/// coordinate. Provided as a ready-to-use metric for integer-coordinate
/// point data and as a worked example for implementing custom metrics; the
/// core itself is metric-agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl DistanceMetric for EuclideanDistance {
    fn distance(&self, a: &Key, b: &Key) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(&xa, &xb)| {
                let d = xa as f64 - xb as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    fn min_dist_to_region(&self, center: &Key, region_key: &Key, post_len: u8) -> f64 {
        // Every key under this subnode agrees with `region_key` on every bit
        // above `post_len`, and is free to vary on `post_len` and below. So
        // per dimension, the minimum possible distance to `center` is zero
        // if `center`'s own value could fall inside that window, else the
        // distance from `center` to the nearest edge of it.
        let window = if post_len >= 63 { u64::MAX } else { (1u64 << (post_len + 1)) - 1 };
        center
            .iter()
            .zip(region_key.iter())
            .map(|(&c, &r)| {
                let lo = r & !window;
                let hi = lo | window;
                let nearest = c.clamp(lo, hi);
                let d = c as f64 - nearest as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}
