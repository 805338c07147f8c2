use std::{collections::BTreeSet, ffi::OsStr, fmt::Debug, fs, ops::RangeInclusive, path::Path};

use bon::Builder;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    core::{
        asset::{
            ActivationFrequency,
            AssetStatus,
            AssetType,
            ConnectionType,
            IndustrySector,
            Location,
            Purpose,
        },
        market::BidDirection,
    },
    prelude::*,
    quantity::{energy::MegawattHours, power::Megawatts, price::EuroPerMegawatt, time::Hours},
};

/// Immutable snapshot of the questionnaire answers.
#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Builder)]
pub struct AssetProfile {
    pub asset_type: AssetType,

    /// Nameplate flexible power.
    #[serde(rename = "power_mw")]
    pub power: Megawatts,

    #[serde(default, rename = "max_loading_capacity_mw")]
    pub max_loading_capacity: Option<Megawatts>,

    #[serde(default, rename = "storage_size_mwh")]
    #[builder(default)]
    pub storage_size: MegawattHours,

    /// Whether the output is fully controllable.
    #[serde(default)]
    #[builder(default)]
    pub steerable: bool,

    pub activation_frequency: ActivationFrequency,

    #[serde(rename = "max_activation_time_hours")]
    pub max_activation_time: Hours,

    #[serde(default)]
    #[builder(default)]
    pub availability_constrained: bool,

    #[serde(default)]
    #[builder(default)]
    pub unavailable_dates: BTreeSet<NaiveDate>,

    /// Capacity bid for upward flexibility, also accepted as a single `capacity_bid_price`.
    #[serde(default, alias = "capacity_bid_price")]
    pub capacity_bid_price_up: Option<EuroPerMegawatt>,

    #[serde(default)]
    pub capacity_bid_price_down: Option<EuroPerMegawatt>,

    #[serde(default)]
    pub company: Option<CompanyContext>,
}

/// Reporting-only context, never used in the earnings formula.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CompanyContext {
    pub industry_sector: IndustrySector,
    pub asset_status: AssetStatus,
    pub connection_type: ConnectionType,
    pub location: Location,
    pub purpose: Purpose,
}

impl AssetProfile {
    const POWER_RANGE: RangeInclusive<f64> = 0.1..=100.0;
    const STORAGE_SIZE_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
    const ACTIVATION_TIME_RANGE: RangeInclusive<f64> = 0.25..=24.0;

    /// Read the profile from a TOML or JSON file, depending on its extension.
    #[instrument]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the profile from `{}`", path.display()))?;
        let profile: Self = if path.extension() == Some(OsStr::new("json")) {
            serde_json::from_str(&contents).context("failed to parse the JSON profile")?
        } else {
            toml::from_str(&contents).context("failed to parse the TOML profile")?
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Apply the questionnaire input ranges.
    ///
    /// The estimation engine trusts profiles that passed this check.
    pub fn validate(&self) -> Result {
        ensure!(
            Self::POWER_RANGE.contains(&self.power.0.0),
            "power must be within {:?} MW, got {}",
            Self::POWER_RANGE,
            self.power,
        );
        if let Some(max_loading_capacity) = self.max_loading_capacity {
            ensure!(
                Self::POWER_RANGE.contains(&max_loading_capacity.0.0),
                "maximum (un)loading capacity must be within {:?} MW, got {max_loading_capacity}",
                Self::POWER_RANGE,
            );
        }
        ensure!(
            Self::STORAGE_SIZE_RANGE.contains(&self.storage_size.0.0),
            "storage size must be within {:?} MWh, got {}",
            Self::STORAGE_SIZE_RANGE,
            self.storage_size,
        );
        ensure!(
            Self::ACTIVATION_TIME_RANGE.contains(&self.max_activation_time.0.0),
            "maximum activation time must be within {:?} hours, got {}",
            Self::ACTIVATION_TIME_RANGE,
            self.max_activation_time,
        );
        for bid_price in
            [self.capacity_bid_price_up, self.capacity_bid_price_down].into_iter().flatten()
        {
            ensure!(
                bid_price.is_non_negative(),
                "capacity bid price must be non-negative, got {bid_price}",
            );
        }
        ensure!(
            self.availability_constrained || self.unavailable_dates.is_empty(),
            "unavailable dates are only allowed with availability constraints",
        );
        Ok(())
    }

    /// Capacity bid for the given direction, if any was submitted.
    #[must_use]
    pub const fn capacity_bid_price(&self, direction: BidDirection) -> Option<EuroPerMegawatt> {
        match direction {
            BidDirection::Up => self.capacity_bid_price_up,
            BidDirection::Down => self.capacity_bid_price_down,
        }
    }

    /// Upward flexibility follows the maximum (un)loading capacity, or the nameplate power.
    pub fn upward_capacity(&self) -> Megawatts {
        self.max_loading_capacity.unwrap_or(self.power)
    }

    /// Symmetric to [`AssetProfile::upward_capacity`].
    pub fn downward_capacity(&self) -> Megawatts {
        self.max_loading_capacity.unwrap_or(self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
        asset_type = "battery"
        power_mw = 10.0
        max_loading_capacity_mw = 8.0
        storage_size_mwh = 20.0
        steerable = true
        activation_frequency = "once_per_day"
        max_activation_time_hours = 2.0
        availability_constrained = true
        unavailable_dates = ["2025-03-01", "2025-03-02"]
        capacity_bid_price = 12.5

        [company]
        industry_sector = "energy"
        asset_status = "existing"
        connection_type = "tso"
        location = "flanders"
        purpose = "own_company"
    "#;

    fn profile() -> AssetProfile {
        AssetProfile::builder()
            .asset_type(AssetType::Battery)
            .power(Megawatts::from(10.0))
            .activation_frequency(ActivationFrequency::OncePerDay)
            .max_activation_time(Hours::from(2.0))
            .build()
    }

    #[test]
    fn test_parse_toml() {
        let profile: AssetProfile = toml::from_str(PROFILE).unwrap();
        assert_eq!(profile.asset_type, AssetType::Battery);
        assert_eq!(profile.power, Megawatts::from(10.0));
        assert_eq!(profile.unavailable_dates.len(), 2);
        assert_eq!(profile.capacity_bid_price_up, Some(EuroPerMegawatt::from(12.5)));
        assert_eq!(profile.capacity_bid_price_down, None);
        assert_eq!(profile.company.unwrap().connection_type, ConnectionType::Tso);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_parse_json() {
        let profile: AssetProfile = serde_json::from_str(
            r#"{
                "asset_type": "heat_pump",
                "power_mw": 1.5,
                "activation_frequency": "once_a_week",
                "max_activation_time_hours": 4.0,
                "capacity_bid_price_up": 10.0,
                "capacity_bid_price_down": 20.0
            }"#,
        )
        .unwrap();
        assert_eq!(profile.asset_type, AssetType::HeatPump);
        assert_eq!(profile.storage_size, MegawattHours::ZERO);
        assert!(!profile.steerable);
        assert!(profile.company.is_none());
        assert_eq!(
            profile.capacity_bid_price(BidDirection::Down),
            Some(EuroPerMegawatt::from(20.0)),
        );
    }

    #[test]
    fn test_read_demo_profiles() {
        const DEMOS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/profiles");

        let battery = AssetProfile::read_from(format!("{DEMOS}/battery.toml")).unwrap();
        assert_eq!(battery.capacity_bid_price_down, Some(EuroPerMegawatt::from(8.0)));

        let chp = AssetProfile::read_from(format!("{DEMOS}/chp.json")).unwrap();
        assert_eq!(chp.asset_type, AssetType::Chp);
        assert_eq!(chp.company.unwrap().asset_status, AssetStatus::PlannedAddition);
    }

    #[test]
    fn test_missing_profile_file() {
        assert!(AssetProfile::read_from("/nonexistent/profile.toml").is_err());
    }

    #[test]
    fn test_unknown_asset_type_is_rejected() {
        let result = toml::from_str::<AssetProfile>(
            r#"
                asset_type = "nuclear"
                power_mw = 10.0
                activation_frequency = "other"
                max_activation_time_hours = 1.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_power_out_of_range() {
        let profile = AssetProfile { power: Megawatts::from(150.0), ..profile() };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_activation_time_out_of_range() {
        let profile = AssetProfile { max_activation_time: Hours::from(25.0), ..profile() };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_negative_bid() {
        let profile = AssetProfile {
            capacity_bid_price_down: Some(EuroPerMegawatt::from(-1.0)),
            ..profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_dates_without_constraint() {
        let profile = AssetProfile {
            unavailable_dates: BTreeSet::from([NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()]),
            ..profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_capacities_fall_back_to_power() {
        let profile = profile();
        assert_eq!(profile.upward_capacity(), Megawatts::from(10.0));

        let profile = AssetProfile { max_loading_capacity: Some(Megawatts::from(8.0)), ..profile };
        assert_eq!(profile.downward_capacity(), Megawatts::from(8.0));
    }
}
