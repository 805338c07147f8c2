use std::collections::BTreeMap;

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::asset::{ActivationFrequency, AssetType},
    prelude::*,
    quantity::price::{EuroPerMegawatt, EuroPerMegawattHour},
};

/// Balancing or capacity market product.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
)]
pub enum MarketId {
    /// Frequency containment reserve.
    #[serde(rename = "FCR")]
    #[display("FCR")]
    Fcr,

    /// Automatic frequency restoration reserve.
    #[serde(rename = "aFRR")]
    #[display("aFRR")]
    Afrr,

    /// Manual frequency restoration reserve.
    #[serde(rename = "mFRR")]
    #[display("mFRR")]
    Mfrr,

    /// Capacity remuneration mechanism.
    #[serde(rename = "CRM")]
    #[display("CRM")]
    Crm,
}

/// Which of the profile capacity bids is compared against the market reference price.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BidDirection {
    #[default]
    Up,
    Down,
}

/// How the profile maximum activation time is interpreted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationBasis {
    /// Maximum activation time is the total per day.
    #[default]
    PerDay,

    /// Maximum activation time is per single activation,
    /// and gets multiplied by the nominal number of daily activations.
    PerActivation,
}

/// Static market configuration, never mutated once loaded.
#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MarketDefinition {
    #[serde(rename = "market_id")]
    pub id: MarketId,

    pub eligible_asset_types: EnumSet<AssetType>,

    /// Capacity remuneration per megawatt per year.
    #[serde(rename = "capacity_price_per_mw_year")]
    pub capacity_price: EuroPerMegawatt,

    #[serde(rename = "energy_price_per_mwh")]
    pub energy_price: EuroPerMegawattHour,

    #[serde(default, rename = "activation_probabilities")]
    pub activation_probability_table: BTreeMap<ActivationFrequency, f64>,

    /// Enables bid scaling: capacity revenue is multiplied by `reference / bid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_capacity_price: Option<EuroPerMegawatt>,

    #[serde(default)]
    pub bid_direction: BidDirection,

    /// Upper bound of the bid scaling factor, unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bid_scaling: Option<f64>,

    #[serde(default)]
    pub activation_basis: ActivationBasis,
}

impl MarketDefinition {
    /// Check that the configured constants make sense.
    pub fn validate(&self) -> Result {
        ensure!(
            self.capacity_price.is_finite() && self.capacity_price > EuroPerMegawatt::ZERO,
            "{}: capacity price must be positive, got {}",
            self.id,
            self.capacity_price,
        );
        ensure!(
            self.energy_price.is_finite() && self.energy_price > EuroPerMegawattHour::ZERO,
            "{}: energy price must be positive, got {}",
            self.id,
            self.energy_price,
        );
        for (frequency, probability) in &self.activation_probability_table {
            ensure!(
                (0.0..=1.0).contains(probability),
                "{}: «{frequency}» activation probability must be within 0..=1, got {probability}",
                self.id,
            );
        }
        if let Some(reference_price) = self.reference_capacity_price {
            ensure!(
                reference_price.is_finite() && reference_price > EuroPerMegawatt::ZERO,
                "{}: reference capacity price must be positive, got {reference_price}",
                self.id,
            );
        }
        if let Some(max_bid_scaling) = self.max_bid_scaling {
            ensure!(
                max_bid_scaling.is_finite() && max_bid_scaling >= 0.0,
                "{}: bid scaling cap must be non-negative, got {max_bid_scaling}",
                self.id,
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn is_eligible(&self, asset_type: AssetType) -> bool {
        self.eligible_asset_types.contains(asset_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> MarketDefinition {
        MarketDefinition {
            id: MarketId::Mfrr,
            eligible_asset_types: AssetType::Battery | AssetType::Genset,
            capacity_price: EuroPerMegawatt::from(50_000.0),
            energy_price: EuroPerMegawattHour::from(80.0),
            activation_probability_table: BTreeMap::new(),
            reference_capacity_price: None,
            bid_direction: BidDirection::Up,
            max_bid_scaling: None,
            activation_basis: ActivationBasis::PerDay,
        }
    }

    #[test]
    fn test_is_eligible() {
        let market = market();
        assert!(market.is_eligible(AssetType::Battery));
        assert!(!market.is_eligible(AssetType::HeatPump));
    }

    #[test]
    fn test_validate_ok() {
        assert!(market().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity_price() {
        let market = MarketDefinition { capacity_price: EuroPerMegawatt::ZERO, ..market() };
        assert!(market.validate().is_err());
    }

    #[test]
    fn test_validate_probability_out_of_range() {
        let market = MarketDefinition {
            activation_probability_table: BTreeMap::from([(ActivationFrequency::Other, 1.5)]),
            ..market()
        };
        assert!(market.validate().is_err());
    }

    #[test]
    fn test_validate_zero_energy_price() {
        let market = MarketDefinition { energy_price: EuroPerMegawattHour::ZERO, ..market() };
        assert!(market.validate().is_err());
    }

    #[test]
    fn test_validate_nan_energy_price() {
        let market =
            MarketDefinition { energy_price: EuroPerMegawattHour::from(f64::NAN), ..market() };
        assert!(market.validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_reference_price() {
        for reference_price in [0.0, -15.0] {
            let market = MarketDefinition {
                reference_capacity_price: Some(EuroPerMegawatt::from(reference_price)),
                ..market()
            };
            assert!(market.validate().is_err(), "{reference_price}");
        }
    }

    #[test]
    fn test_validate_negative_probability() {
        let market = MarketDefinition {
            activation_probability_table: BTreeMap::from([(ActivationFrequency::OnceAWeek, -0.1)]),
            ..market()
        };
        assert!(market.validate().is_err());
    }

    #[test]
    fn test_validate_negative_scaling_cap() {
        let market = MarketDefinition { max_bid_scaling: Some(-1.0), ..market() };
        assert!(market.validate().is_err());
    }
}
