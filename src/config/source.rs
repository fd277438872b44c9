//! The snapshot interface the calculator's hosts read rate tables through.

use crate::models::RateConfig;

/// Anything that can hand out the current rate table.
///
/// Implementations return an owned copy so the caller can compute without
/// holding any lock or borrow on the source.
pub trait RateConfigSource {
    /// Returns the current list of rate configurations, in lookup order.
    fn snapshot(&self) -> Vec<RateConfig>;
}

impl RateConfigSource for Vec<RateConfig> {
    fn snapshot(&self) -> Vec<RateConfig> {
        self.clone()
    }
}
