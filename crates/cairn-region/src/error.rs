//! Region-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during region accounting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The region's byte budget would be exceeded by the requested charge.
    BudgetExceeded {
        /// Number of live bytes the charge would bring the region to.
        requested: usize,
        /// The configured byte budget.
        budget: usize,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExceeded { requested, budget } => {
                write!(
                    f,
                    "region budget exceeded: charge would reach {requested} bytes, budget {budget} bytes"
                )
            }
        }
    }
}

impl Error for RegionError {}
