//! Region-bound binary max-heap priority queue.
//!
//! [`PriorityQueue`] keeps its elements in a contiguous, array-packed
//! binary max-heap whose backing buffer is accounted against a
//! [`cairn_region::Region`]. The queue borrows the region for its whole
//! lifetime, so the borrow checker guarantees that neither the queue nor
//! any view derived from it (iterators, slices) outlives the scope that
//! created it.
//!
//! # Architecture
//!
//! ```text
//! PriorityQueue<'r, T: Ord>
//! ├── &'r Region           (lifetime anchor + byte accounting)
//! ├── Vec<T>               (backing store, len == logical size)
//! └── policy capacity      (grows as 2n + 2: 8, 18, 38, 78, …)
//! ```
//!
//! Mutations first ensure capacity, then edit the array, then repair
//! the heap invariant locally (sift-up after an append, sift-down after
//! a root replacement). Read operations never allocate.
//!
//! # Ordering caveat
//!
//! Views expose elements in **raw backing-array order** — some valid
//! heap layout, not sorted order and not insertion order. Only
//! membership and count are guaranteed. Elements that compare equal are
//! dequeued in an arbitrary, unspecified order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod iter;
pub mod nonempty;
pub mod queue;

// Public re-exports for the primary API surface.
pub use iter::Iter;
pub use nonempty::NonEmpty;
pub use queue::PriorityQueue;
