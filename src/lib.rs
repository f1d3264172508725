//! A PH-tree: a k-dimensional point/hypercube index over fixed-width
//! integer keys, structured as a bit-sliced trie.
//!
//! Each [`Node`](crate::node::Node) is addressed at one bit position
//! (`post_len`) and dispatches on the resulting hypercube address (`hc_pos`)
//! through a per-node secondary index that starts sparse (an ordered list)
//! and promotes to a dense, directly-indexed array once it fills up. Keys
//! that collide at a given `hc_pos` but diverge somewhere in their shared
//! infix split into a new intermediate node at the first bit where they
//! differ; removing down to a single surviving child merges the subnode
//! back into its parent.
//!
//! The public entry point is [`PhTree`]. [`Key`] is a fixed-width integer
//! vector (one `u64` per dimension); callers that need floats, signed
//! integers, or strings map their own domain onto that representation
//! before calling in (see [`bits::flip_sign_bit`] for the standard
//! order-preserving transform for signed integers).

pub mod bits;
pub mod config;
pub mod distance;
pub mod entry;
pub mod error;
pub mod index;
pub mod key;
pub mod node;
pub mod pool;
pub mod query;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use bits::{flip_sign_bit, unflip_sign_bit};
pub use config::Config;
pub use distance::{DistanceMetric, EuclideanDistance};
pub use error::{PhTreeError, Result};
pub use key::{key_from_slice, Key};
pub use query::{Iter, RangeIter, WindowIter};
pub use tree::PhTree;
