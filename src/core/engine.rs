//! Suitability and earnings estimation.
//!
//! The engine is a pure function of the profile and market definitions:
//! it keeps no state, so assessments may run concurrently against a shared catalog.

use crate::{
    core::{
        Error,
        assessment::{MarketAssessment, Revenue},
        asset::ActivationFrequency,
        market::{ActivationBasis, MarketDefinition},
        profile::AssetProfile,
    },
    prelude::{Result, debug, instrument},
    quantity::{power::Megawatts, price::EuroPerMegawatt, time::Hours},
};

/// Annualizes the daily activation estimate.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Used when the market does not map the profile activation frequency.
pub const DEFAULT_ACTIVATION_PROBABILITY: f64 = 0.1;

/// Lowest bid price the reference price gets divided by.
pub const BID_PRICE_FLOOR: EuroPerMegawatt = EuroPerMegawatt::ONE_CENT;

/// Assess the profile against every market, preserving the market order.
///
/// Fails on the first market that cannot be assessed.
#[instrument(skip_all, fields(asset_type = %profile.asset_type, power = %profile.power))]
pub fn assess_all<'a>(
    profile: &AssetProfile,
    markets: impl IntoIterator<Item = &'a MarketDefinition>,
) -> Result<Vec<MarketAssessment>, Error> {
    markets.into_iter().map(|market| assess(profile, market)).collect()
}

/// Check the suitability and estimate the annual revenue on a single market.
pub fn assess(
    profile: &AssetProfile,
    market: &MarketDefinition,
) -> Result<MarketAssessment, Error> {
    if !market.is_eligible(profile.asset_type) {
        debug!(market_id = %market.id, asset_type = %profile.asset_type, "not eligible");
        return Ok(MarketAssessment::ineligible(market.id));
    }
    check_profile(profile)?;

    let activation_probability = activation_probability(market, profile.activation_frequency);
    let capacity_revenue = market.capacity_price * profile.power * bid_scaling(profile, market);
    let average_activation_time =
        daily_activation_time(profile, market.activation_basis) * activation_probability;
    let energy_revenue =
        profile.power * average_activation_time * DAYS_PER_YEAR * market.energy_price;

    let revenue = Revenue::new(capacity_revenue, energy_revenue, average_activation_time);
    debug!(
        market_id = %market.id,
        activation_probability,
        capacity = %revenue.capacity_revenue,
        energy = %revenue.energy_revenue,
        total = %revenue.total_revenue,
        "assessed",
    );
    Ok(MarketAssessment::eligible(market.id, revenue))
}

/// Defensive check against corrupted profiles, the questionnaire ranges are enforced upstream.
fn check_profile(profile: &AssetProfile) -> Result<(), Error> {
    if !profile.power.is_finite() || profile.power <= Megawatts::ZERO {
        return Err(Error::InvalidProfile { field: "power_mw", value: profile.power.0.0 });
    }
    if !profile.max_activation_time.is_non_negative()
        || profile.max_activation_time > Hours::ONE_DAY
    {
        return Err(Error::InvalidProfile {
            field: "max_activation_time_hours",
            value: profile.max_activation_time.0.0,
        });
    }
    for (field, bid_price) in [
        ("capacity_bid_price_up", profile.capacity_bid_price_up),
        ("capacity_bid_price_down", profile.capacity_bid_price_down),
    ] {
        if let Some(bid_price) = bid_price
            && !bid_price.is_non_negative()
        {
            return Err(Error::InvalidProfile { field, value: bid_price.0.0 });
        }
    }
    Ok(())
}

fn activation_probability(market: &MarketDefinition, frequency: ActivationFrequency) -> f64 {
    market.activation_probability_table.get(&frequency).copied().unwrap_or_else(|| {
        debug!(market_id = %market.id, %frequency, "unmapped activation frequency");
        DEFAULT_ACTIVATION_PROBABILITY
    })
}

/// Capacity remuneration multiplier for markets normalizing against a reference bid.
///
/// No reference price or no bid means no adjustment.
fn bid_scaling(profile: &AssetProfile, market: &MarketDefinition) -> f64 {
    let (Some(reference_price), Some(bid_price)) =
        (market.reference_capacity_price, profile.capacity_bid_price(market.bid_direction))
    else {
        return 1.0;
    };
    let scaling = reference_price / bid_price.max(BID_PRICE_FLOOR);
    market.max_bid_scaling.map_or(scaling, |max_bid_scaling| scaling.min(max_bid_scaling))
}

fn daily_activation_time(profile: &AssetProfile, basis: ActivationBasis) -> Hours {
    match basis {
        ActivationBasis::PerDay => profile.max_activation_time,
        ActivationBasis::PerActivation => (profile.max_activation_time
            * profile.activation_frequency.nominal_activations_per_day())
        .min(Hours::ONE_DAY),
    }
}
