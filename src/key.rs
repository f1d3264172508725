//! The k-dimensional key type.

use smallvec::SmallVec;

/// A k-dimensional key: one `u64` per dimension.
///
/// Stored inline up to 4 dimensions (the common case for point/rectangle
/// indexes) before spilling to the heap, avoiding an allocation per key for
/// the 2D/3D/4D workloads this index is usually built for.
pub type Key = SmallVec<[u64; 4]>;

/// Build a [`Key`] from a slice of components.
#[inline]
pub fn key_from_slice(components: &[u64]) -> Key {
    Key::from_slice(components)
}
