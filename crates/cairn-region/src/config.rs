//! Region configuration parameters.

/// Configuration for a [`crate::Region`].
///
/// Controls the starting capacity of containers bound to the region and
/// an optional byte budget. All values are immutable after the region
/// is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    /// Starting capacity (in elements) for containers created in the region.
    ///
    /// Default: 8. A container grows from here on demand; the growth
    /// policy belongs to the container, not the region.
    pub initial_capacity: usize,

    /// Optional upper bound on live bytes across all containers in the
    /// region.
    ///
    /// Default: `None` (unbounded). When set, exceeding the budget is a
    /// fatal condition on the container path — see
    /// [`crate::Region::charge`].
    pub byte_budget: Option<usize>,
}

impl RegionConfig {
    /// Default starting capacity for containers, in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            byte_budget: None,
        }
    }

    /// Create a config with a byte budget and the default initial capacity.
    pub fn with_budget(byte_budget: usize) -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            byte_budget: Some(byte_budget),
        }
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new()
    }
}
