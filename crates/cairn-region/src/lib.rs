//! Region allocation scopes for cairn containers.
//!
//! A [`Region`] is an allocation scope: a capability that bounds the
//! lifetime of every buffer a container bound to it ever acquires.
//! Containers hold a shared borrow of their region for their whole
//! lifetime, so the borrow checker — not a runtime flag — guarantees
//! that no container, and no view derived from one, survives the scope
//! that created it.
//!
//! # Architecture
//!
//! ```text
//! Region (lifetime anchor + byte accounting)
//! ├── RegionConfig (initial container capacity, optional byte budget)
//! └── Cell counters (live bytes, peak bytes, allocation count)
//! ```
//!
//! The region does not own container storage. Containers own their own
//! buffers and report each acquisition and release, which keeps the
//! region free of type parameters and lets many containers of different
//! element types share one scope.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod region;

// Public re-exports for the primary API surface.
pub use config::RegionConfig;
pub use error::RegionError;
pub use region::Region;
