//! Left-leaning red-black tree collections for Rust.
//!
//! This crate provides [`LlrbMap`] and [`LlrbSet`], ordered collections backed
//! by a left-leaning red-black binary search tree whose nodes also track the
//! size of their subtree. On top of the usual ordered-collection API they
//! answer order-statistic questions in O(log n):
//!
//! - [`select`](LlrbSet::select) - the element at a given sorted position
//! - [`rank`](LlrbSet::rank) - how many elements are smaller than a key
//! - [`range_count`](LlrbSet::range_count) - how many elements fall in `lo..=hi`
//! - [`floor`](LlrbSet::floor) / [`ceiling`](LlrbSet::ceiling) - nearest neighbours of a key
//!
//! # Example
//!
//! ```
//! use llrb_tree::{LlrbSet, Rank};
//!
//! let set: LlrbSet<i32> = [10, 5, 15, 3, 7, 12, 18].into_iter().collect();
//!
//! assert_eq!(set.len(), 7);
//! assert_eq!(set.floor(&9), Some(&7));
//! assert_eq!(set.ceiling(&9), Some(&10));
//! assert_eq!(set.select(0), Ok(&3));
//! assert_eq!(set.rank(&12), 4);
//! assert_eq!(set.range_count(&5, &12), 4);
//! assert_eq!(set[Rank(6)], 18);
//!
//! let ascending: Vec<_> = set.iter().copied().collect();
//! assert_eq!(ascending, [3, 5, 7, 10, 12, 15, 18]);
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children by handle. Insertion
//! and deletion recurse from the root and restore the red-black shape with
//! rotations and color flips on the way back up, so every path from the
//! root to an empty subtree crosses the same number of black links and the
//! height stays below `2 * log2(n + 1)`.
//!
//! The collections are single-writer: iterators borrow the collection, so the
//! tree cannot be restructured while one is alive.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod llrb_map;
pub mod llrb_set;

pub use error::TreeError;
pub use llrb_map::LlrbMap;
pub use llrb_set::LlrbSet;
pub use order_statistic::Rank;
