//! Cairn: region-bound mutable containers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the cairn sub-crates. For most users, adding `cairn` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::{PriorityQueue, Region};
//!
//! // A region is an allocation scope. Everything a queue allocates is
//! // accounted against it and cannot outlive it.
//! let region = Region::new();
//!
//! let mut queue = PriorityQueue::new(&region);
//! queue.enqueue_all([5, 3, 8, 1]);
//!
//! assert_eq!(queue.peek(), Some(&8));
//! assert_eq!(queue.dequeue(), Some(8));
//! assert_eq!(queue.dequeue(), Some(5));
//!
//! // Views expose the raw heap layout, not sorted order.
//! assert_eq!(queue.len(), 2);
//! println!("{queue}"); // Queue {3, 1}
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`region`] | `cairn-region` | `Region`, `RegionConfig`, `RegionError` |
//! | [`queue`] | `cairn-queue` | `PriorityQueue`, `Iter`, `NonEmpty` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Region allocation scopes and byte accounting (`cairn-region`).
pub use cairn_region as region;

/// The region-bound max-heap priority queue (`cairn-queue`).
pub use cairn_queue as queue;

pub use cairn_queue::{Iter, NonEmpty, PriorityQueue};
pub use cairn_region::{Region, RegionConfig, RegionError};
