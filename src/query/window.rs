//! Axis-aligned window (bounding-box) query.

use crate::bits;
use crate::entry::{Child, Entry};
use crate::key::Key;
use crate::node::Node;

/// Lazily yields every `(key, value)` pair whose key falls within
/// `[min, max]` component-wise.
pub struct WindowIter<'a, V> {
    min: Key,
    max: Key,
    stack: Vec<Box<dyn Iterator<Item = &'a Entry<V>> + 'a>>,
}

impl<'a, V> WindowIter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, min: Key, max: Key) -> Self {
        let min_mask = bits::hc(&min, root.post_len);
        let max_mask = bits::hc(&max, root.post_len);
        let stack = vec![root.masked_iter_boxed(min_mask, max_mask)];
        Self { min, max, stack }
    }

    fn key_in_window(&self, key: &Key) -> bool {
        key.iter()
            .zip(self.min.iter())
            .zip(self.max.iter())
            .all(|((&k, &lo), &hi)| k >= lo && k <= hi)
    }

    /// `true` if some key under a subnode whose infix carrier is
    /// `region_key` and post length is `post_len` could fall in the window.
    fn region_overlaps(&self, region_key: &Key, post_len: u8) -> bool {
        let window = if post_len >= 63 { u64::MAX } else { (1u64 << (post_len + 1)) - 1 };
        region_key
            .iter()
            .zip(self.min.iter())
            .zip(self.max.iter())
            .all(|((&r, &lo), &hi)| {
                let lower = r & !window;
                let upper = lower | window;
                upper >= lo && lower <= hi
            })
    }
}

impl<'a, V> Iterator for WindowIter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(entry) => match &entry.child {
                    Child::Value(v) => {
                        if self.key_in_window(&entry.kd_key) {
                            return Some((entry.kd_key.clone(), v));
                        }
                    }
                    Child::Node(sub) => {
                        if self.region_overlaps(&entry.kd_key, sub.post_len) {
                            let min_mask = bits::hc(&self.min, sub.post_len);
                            let max_mask = bits::hc(&self.max, sub.post_len);
                            self.stack.push(sub.masked_iter_boxed(min_mask, max_mask));
                        }
                    }
                },
            }
        }
        None
    }
}
