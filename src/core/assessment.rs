use serde::Serialize;

use crate::{
    core::market::MarketId,
    quantity::{currency::Euros, time::Hours},
};

/// Suitability and earnings of a profile on a single market.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MarketAssessment {
    pub market_id: MarketId,

    pub eligible: bool,

    /// Only present for eligible assets.
    #[serde(flatten)]
    pub revenue: Option<Revenue>,
}

impl MarketAssessment {
    pub const fn ineligible(market_id: MarketId) -> Self {
        Self { market_id, eligible: false, revenue: None }
    }

    pub const fn eligible(market_id: MarketId, revenue: Revenue) -> Self {
        Self { market_id, eligible: true, revenue: Some(revenue) }
    }
}

/// Annual revenue breakdown.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Revenue {
    /// Remuneration for being available.
    pub capacity_revenue: Euros,

    /// Remuneration for the activated energy.
    pub energy_revenue: Euros,

    pub total_revenue: Euros,

    /// Expected activation duration per day.
    #[serde(rename = "avg_activation_hours")]
    pub average_activation_time: Hours,
}

impl Revenue {
    pub fn new(
        capacity_revenue: Euros,
        energy_revenue: Euros,
        average_activation_time: Hours,
    ) -> Self {
        Self {
            capacity_revenue,
            energy_revenue,
            total_revenue: capacity_revenue + energy_revenue,
            average_activation_time,
        }
    }

    /// Share of the capacity remuneration in the total, `0.0..=1.0`.
    #[must_use]
    pub fn capacity_share(&self) -> Option<f64> {
        (self.total_revenue > Euros::ZERO).then(|| self.capacity_revenue / self.total_revenue)
    }
}
