use crate::core::market::MarketId;

/// Failure of a single market assessment.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The profile carries a quantity outside of its domain.
    #[error("invalid profile: `{field}` is out of range ({value})")]
    InvalidProfile { field: &'static str, value: f64 },

    #[error("market {0} is not in the catalog")]
    UnknownMarket(MarketId),
}
