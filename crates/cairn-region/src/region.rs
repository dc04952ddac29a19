//! The [`Region`] allocation scope.
//!
//! A region is the capability every container buffer is accounted
//! against. Containers borrow their region (`&'r Region`) for their
//! whole lifetime; when the region goes out of scope, the borrow
//! checker has already proven that no container bound to it is still
//! alive.

use std::cell::Cell;

use crate::config::RegionConfig;
use crate::error::RegionError;

/// An allocation scope with byte-level accounting.
///
/// The region owns no container storage itself. Containers own their
/// buffers and report each acquisition ([`charge`](Self::charge)) and
/// release ([`credit`](Self::credit)). The region provides:
///
/// - a lifetime anchor: a container holds `&'r Region`, so neither it
///   nor any iterator or slice borrowed from it can outlive the region;
/// - accounting: live bytes, peak bytes and buffer counts across all
///   containers bound to the scope;
/// - an optional byte budget, enforced fatally on the container path.
///
/// Counters use `Cell`, which makes the region `!Sync`: a region and
/// everything bound to it belong to a single thread. Multiple
/// containers of different element types may share one region.
pub struct Region {
    config: RegionConfig,
    /// Bytes currently held by live container buffers.
    live_bytes: Cell<usize>,
    /// High-water mark of `live_bytes`.
    peak_bytes: Cell<usize>,
    /// Number of buffer acquisitions since the region was created.
    allocations: Cell<usize>,
}

impl Region {
    /// Create a region with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegionConfig::new())
    }

    /// Create a region with an explicit configuration.
    pub fn with_config(config: RegionConfig) -> Self {
        Self {
            config,
            live_bytes: Cell::new(0),
            peak_bytes: Cell::new(0),
            allocations: Cell::new(0),
        }
    }

    /// The region's configuration.
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Record a buffer acquisition of `bytes`, failing if the byte
    /// budget would be exceeded.
    ///
    /// Returns `Err(RegionError::BudgetExceeded)` without updating any
    /// counter if the charge would push live bytes past the configured
    /// budget.
    pub fn try_charge(&self, bytes: usize) -> Result<(), RegionError> {
        let new_live = self.live_bytes.get().saturating_add(bytes);
        if let Some(budget) = self.config.byte_budget {
            if new_live > budget {
                return Err(RegionError::BudgetExceeded {
                    requested: new_live,
                    budget,
                });
            }
        }
        self.live_bytes.set(new_live);
        if new_live > self.peak_bytes.get() {
            self.peak_bytes.set(new_live);
        }
        self.allocations.set(self.allocations.get() + 1);
        Ok(())
    }

    /// Record a buffer acquisition of `bytes`.
    ///
    /// Exhausting the region is a programmer error, not a recoverable
    /// condition: containers treat the budget as an assertion about
    /// their workload, so ordinary container operations stay
    /// infallible. Use [`try_charge`](Self::try_charge) to probe the
    /// budget without aborting.
    ///
    /// # Panics
    ///
    /// Panics if the configured byte budget would be exceeded.
    pub fn charge(&self, bytes: usize) {
        if let Err(e) = self.try_charge(bytes) {
            panic!("region exhausted: {e}");
        }
    }

    /// Record the release of a buffer of `bytes`.
    pub fn credit(&self, bytes: usize) {
        debug_assert!(
            bytes <= self.live_bytes.get(),
            "credit exceeds live bytes"
        );
        self.live_bytes
            .set(self.live_bytes.get().saturating_sub(bytes));
    }

    /// Bytes currently held by live container buffers.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.get()
    }

    /// High-water mark of live bytes over the region's lifetime.
    pub fn peak_bytes(&self) -> usize {
        self.peak_bytes.get()
    }

    /// Number of buffer acquisitions since the region was created.
    pub fn allocation_count(&self) -> usize {
        self.allocations.get()
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_region_starts_empty() {
        let region = Region::new();
        assert_eq!(region.live_bytes(), 0);
        assert_eq!(region.peak_bytes(), 0);
        assert_eq!(region.allocation_count(), 0);
    }

    #[test]
    fn charge_and_credit_track_live_bytes() {
        let region = Region::new();
        region.charge(100);
        region.charge(50);
        assert_eq!(region.live_bytes(), 150);
        assert_eq!(region.allocation_count(), 2);

        region.credit(100);
        assert_eq!(region.live_bytes(), 50);
        // Peak is not reduced by credits.
        assert_eq!(region.peak_bytes(), 150);
    }

    #[test]
    fn peak_tracks_high_water_mark() {
        let region = Region::new();
        region.charge(80);
        region.credit(80);
        region.charge(30);
        assert_eq!(region.live_bytes(), 30);
        assert_eq!(region.peak_bytes(), 80);
    }

    #[test]
    fn try_charge_over_budget_fails_without_mutation() {
        let region = Region::with_config(RegionConfig::with_budget(100));
        region.charge(60);
        let result = region.try_charge(50);
        assert_eq!(
            result,
            Err(RegionError::BudgetExceeded {
                requested: 110,
                budget: 100,
            })
        );
        // The failed charge left all counters untouched.
        assert_eq!(region.live_bytes(), 60);
        assert_eq!(region.allocation_count(), 1);
    }

    #[test]
    fn charge_exactly_at_budget_succeeds() {
        let region = Region::with_config(RegionConfig::with_budget(100));
        assert!(region.try_charge(100).is_ok());
        assert_eq!(region.live_bytes(), 100);
    }

    #[test]
    #[should_panic(expected = "region exhausted")]
    fn charge_over_budget_panics() {
        let region = Region::with_config(RegionConfig::with_budget(10));
        region.charge(11);
    }

    #[test]
    fn unbudgeted_region_accepts_any_charge() {
        let region = Region::new();
        assert!(region.try_charge(usize::MAX / 2).is_ok());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// A step in a charge/credit workload. Credits are expressed as
        /// a fraction of live bytes so they never exceed what is held.
        #[derive(Clone, Debug)]
        enum Step {
            Charge(usize),
            CreditHalf,
        }

        fn arb_step() -> impl Strategy<Value = Step> {
            prop_oneof![
                2 => (1usize..4096).prop_map(Step::Charge),
                1 => Just(Step::CreditHalf),
            ]
        }

        proptest! {
            #[test]
            fn live_never_exceeds_peak(
                steps in proptest::collection::vec(arb_step(), 0..50),
            ) {
                let region = Region::new();
                for step in steps {
                    match step {
                        Step::Charge(bytes) => region.charge(bytes),
                        Step::CreditHalf => region.credit(region.live_bytes() / 2),
                    }
                    prop_assert!(region.live_bytes() <= region.peak_bytes());
                }
            }

            #[test]
            fn budget_bounds_live_bytes(
                budget in 1usize..10_000,
                steps in proptest::collection::vec(arb_step(), 0..50),
            ) {
                let region = Region::with_config(RegionConfig::with_budget(budget));
                let mut accepted = 0usize;
                for step in steps {
                    match step {
                        Step::Charge(bytes) => {
                            let before = (
                                region.live_bytes(),
                                region.peak_bytes(),
                                region.allocation_count(),
                            );
                            match region.try_charge(bytes) {
                                Ok(()) => accepted += 1,
                                Err(RegionError::BudgetExceeded { requested, budget: b }) => {
                                    prop_assert_eq!(b, budget);
                                    prop_assert!(requested > budget);
                                    // A rejected charge mutates nothing.
                                    let after = (
                                        region.live_bytes(),
                                        region.peak_bytes(),
                                        region.allocation_count(),
                                    );
                                    prop_assert_eq!(before, after);
                                }
                            }
                        }
                        Step::CreditHalf => region.credit(region.live_bytes() / 2),
                    }
                    prop_assert!(region.live_bytes() <= budget);
                }
                prop_assert_eq!(region.allocation_count(), accepted);
            }
        }
    }
}
