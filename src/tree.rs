//! The public PH-tree map type.

use log::{debug, trace};

use crate::bits;
use crate::config::Config;
use crate::distance::DistanceMetric;
use crate::error::{PhTreeError, Result};
use crate::key::Key;
use crate::node::Node;
use crate::pool::Pools;
use crate::query::{self, Iter, RangeIter, WindowIter};

/// A k-dimensional point/hypercube index over fixed-width integer keys.
///
/// Every key inserted into a given tree must have the same number of
/// dimensions; that number is fixed at construction and checked on every
/// operation.
pub struct PhTree<V> {
    dim: usize,
    config: Config,
    root: Node<V>,
    pools: Pools<V>,
    size: usize,
}

impl<V> PhTree<V> {
    /// Create an empty tree over `dim`-dimensional keys, using default
    /// tuning parameters.
    pub fn new(dim: usize) -> Self {
        Self::with_config(dim, Config::default())
    }

    /// Create an empty tree with explicit tuning parameters.
    pub fn with_config(dim: usize, config: Config) -> Self {
        let root = Node::new_leaf(bits::ROOT_POST_LEN, 0, dim, &config);
        let pools = Pools::new(&config);
        Self { dim, config, root, pools, size: 0 }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn check_dim(&self, key: &Key) -> Result<()> {
        if key.len() != self.dim {
            Err(PhTreeError::DimensionMismatch { expected: self.dim, actual: key.len() })
        } else {
            Ok(())
        }
    }

    /// Insert `key -> value`, returning the prior value if the key already
    /// existed.
    pub fn put(&mut self, key: &Key, value: V) -> Result<Option<V>> {
        self.check_dim(key)?;
        let prior = self.root.insert(key, value, self.dim, &mut self.pools, &self.config);
        if prior.is_none() {
            self.size += 1;
        }
        trace!("put: size is now {}", self.size);
        Ok(prior)
    }

    /// Insert `key -> value` only if `key` is not already present. Returns
    /// `true` if the insertion happened.
    pub fn put_if_absent(&mut self, key: &Key, value: V) -> Result<bool> {
        self.check_dim(key)?;
        if self.root.get(key).is_some() {
            return Ok(false);
        }
        self.root.insert(key, value, self.dim, &mut self.pools, &self.config);
        self.size += 1;
        Ok(true)
    }

    pub fn get(&self, key: &Key) -> Result<Option<&V>> {
        self.check_dim(key)?;
        Ok(self.root.get(key))
    }

    pub fn contains(&self, key: &Key) -> Result<bool> {
        self.check_dim(key)?;
        Ok(self.root.contains(key))
    }

    /// Remove and return the value stored at `key`, if any.
    pub fn remove(&mut self, key: &Key) -> Result<Option<V>> {
        self.check_dim(key)?;
        let outcome = self.root.remove_with(key, self.dim, &mut self.pools, &self.config, |_| true);
        let removed = outcome.into_option();
        if removed.is_some() {
            self.size -= 1;
        }
        debug!("remove: size is now {}", self.size);
        Ok(removed)
    }

    /// Remove `key` only if its current value equals `expected`. Returns
    /// `true` if the removal happened.
    pub fn remove_if(&mut self, key: &Key, expected: &V) -> Result<bool>
    where
        V: PartialEq,
    {
        self.check_dim(key)?;
        let outcome =
            self.root.remove_with(key, self.dim, &mut self.pools, &self.config, |v| v == expected);
        let removed = outcome.was_removed();
        if removed {
            self.size -= 1;
        }
        Ok(removed)
    }

    /// Replace the value at `key` if it is present, returning the prior
    /// value. Does nothing (and returns `None`) if `key` is absent.
    pub fn replace(&mut self, key: &Key, value: V) -> Result<Option<V>> {
        self.check_dim(key)?;
        if self.root.get(key).is_none() {
            return Ok(None);
        }
        Ok(self.root.insert(key, value, self.dim, &mut self.pools, &self.config))
    }

    /// Compare-and-swap: replace the value at `key` with `new_value` only
    /// if its current value equals `expected`. Returns `true` if the swap
    /// happened.
    pub fn replace_if(&mut self, key: &Key, expected: &V, new_value: V) -> Result<bool>
    where
        V: PartialEq,
    {
        self.check_dim(key)?;
        match self.root.get(key) {
            Some(current) if current == expected => {
                self.root.insert(key, new_value, self.dim, &mut self.pools, &self.config);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Move the value at `old_key` to `new_key`. Returns whatever value was
    /// previously stored at `new_key` (displaced by the move), or `None` if
    /// `old_key` held nothing to move.
    pub fn update(&mut self, old_key: &Key, new_key: &Key) -> Result<Option<V>> {
        self.check_dim(old_key)?;
        self.check_dim(new_key)?;
        match self.remove(old_key)? {
            Some(value) => self.put(new_key, value),
            None => Ok(None),
        }
    }

    /// Unconditionally recompute the value at `key`. `f` receives the
    /// current value, if any, and its return value becomes the new state:
    /// `Some(v)` inserts or updates, `None` removes (or is a no-op if
    /// nothing was there). Returns the prior value.
    pub fn compute<F>(&mut self, key: &Key, mut f: F) -> Result<Option<V>>
    where
        F: FnMut(&Key, Option<&V>) -> Option<V>,
    {
        self.check_dim(key)?;
        let current = self.root.get(key);
        let was_present = current.is_some();
        let new_value = f(key, current);
        match (was_present, new_value) {
            (true, Some(v)) => self.replace(key, v),
            (false, Some(v)) => {
                self.put(key, v)?;
                Ok(None)
            }
            (true, None) => self.remove(key),
            (false, None) => Ok(None),
        }
    }

    /// Invoke `f(key, None)` and insert its result only if `key` is absent.
    /// A no-op (and `f` is not called) if `key` is already present. Returns
    /// the prior value (always `None` when `f` was actually called, since it
    /// only runs on the absent path).
    pub fn compute_if_absent<F>(&mut self, key: &Key, mut f: F) -> Result<Option<V>>
    where
        F: FnMut(&Key, Option<&V>) -> Option<V>,
    {
        self.check_dim(key)?;
        if self.root.get(key).is_some() {
            return Ok(None);
        }
        match f(key, None) {
            Some(v) => {
                self.put(key, v)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Invoke `f(key, Some(current))` and apply its result only if `key` is
    /// present: `Some(v)` replaces the value, `None` removes the entry. A
    /// no-op (and `f` is not called) if `key` is absent. Returns the prior
    /// value.
    pub fn compute_if_present<F>(&mut self, key: &Key, mut f: F) -> Result<Option<V>>
    where
        F: FnMut(&Key, Option<&V>) -> Option<V>,
    {
        self.check_dim(key)?;
        let current = match self.root.get(key) {
            Some(v) => v,
            None => return Ok(None),
        };
        let new_value = f(key, Some(current));
        match new_value {
            Some(v) => self.replace(key, v),
            None => self.remove(key),
        }
    }

    /// Remove every entry, releasing the backing arrays to the pool as it
    /// walks down (rather than dropping the whole tree at once).
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(bits::ROOT_POST_LEN, 0, self.dim, &self.config);
        self.size = 0;
        trace!("clear: tree reset to empty");
    }

    /// Every `(key, value)` pair in the tree, in no particular order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root)
    }

    /// Every `(key, value)` pair whose key falls within `[min, max]`
    /// component-wise.
    pub fn query(&self, min: &Key, max: &Key) -> Result<WindowIter<'_, V>> {
        self.check_dim(min)?;
        self.check_dim(max)?;
        Ok(WindowIter::new(&self.root, min.clone(), max.clone()))
    }

    /// The `k` nearest entries to `center` under `metric`, nearest first.
    pub fn nearest_neighbor<M: DistanceMetric>(
        &self,
        center: &Key,
        k: usize,
        metric: &M,
    ) -> Result<Vec<(Key, &V, f64)>> {
        self.check_dim(center)?;
        Ok(query::nearest_neighbors(&self.root, center, k, metric))
    }

    /// Every entry within `radius` of `center` under `metric`.
    pub fn range_query<'a, M: DistanceMetric>(
        &'a self,
        center: &Key,
        radius: f64,
        metric: &'a M,
    ) -> Result<RangeIter<'a, V, M>> {
        self.check_dim(center)?;
        Ok(RangeIter::new(&self.root, center.clone(), radius, metric))
    }
}
