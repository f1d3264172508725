//! Distance-bounded range query: every entry within `radius` of a center
//! point under an arbitrary [`DistanceMetric`].

use crate::distance::DistanceMetric;
use crate::entry::{Child, Entry};
use crate::key::Key;
use crate::node::Node;

pub struct RangeIter<'a, V, M> {
    center: Key,
    radius: f64,
    metric: &'a M,
    stack: Vec<Box<dyn Iterator<Item = &'a Entry<V>> + 'a>>,
}

impl<'a, V, M: DistanceMetric> RangeIter<'a, V, M> {
    pub(crate) fn new(root: &'a Node<V>, center: Key, radius: f64, metric: &'a M) -> Self {
        Self { center, radius, metric, stack: vec![root.iter_boxed()] }
    }
}

impl<'a, V, M: DistanceMetric> Iterator for RangeIter<'a, V, M> {
    type Item = (Key, &'a V, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(entry) => match &entry.child {
                    Child::Value(v) => {
                        let d = self.metric.distance(&self.center, &entry.kd_key);
                        if d <= self.radius {
                            return Some((entry.kd_key.clone(), v, d));
                        }
                    }
                    Child::Node(sub) => {
                        let lower_bound =
                            self.metric.min_dist_to_region(&self.center, &entry.kd_key, sub.post_len);
                        if lower_bound <= self.radius {
                            self.stack.push(sub.iter_boxed());
                        }
                    }
                },
            }
        }
        None
    }
}
