use clap::Parser;

use crate::{
    cli::OutputArgs,
    core::{
        asset::{ActivationFrequency, AssetType},
        catalog::MarketCatalog,
        engine::assess_all,
        profile::AssetProfile,
    },
    prelude::*,
    quantity::{power::Megawatts, price::EuroPerMegawatt, time::Hours},
};

#[derive(Parser)]
pub struct QuoteArgs {
    /// Flexible technology.
    #[clap(long)]
    pub asset_type: AssetType,

    /// Power available for flexibility in megawatts.
    #[clap(long = "power-mw")]
    pub power: Megawatts,

    /// How often the asset can be activated.
    #[clap(long)]
    pub activation_frequency: ActivationFrequency,

    /// Maximum activation time in hours.
    #[clap(long = "max-activation-hours")]
    pub max_activation_time: Hours,

    /// Whether the asset output is fully controllable.
    #[clap(long)]
    pub steerable: bool,

    /// Capacity bid for upward flexibility in euro per megawatt.
    #[clap(long = "bid-price-up")]
    pub capacity_bid_price_up: Option<EuroPerMegawatt>,

    /// Capacity bid for downward flexibility in euro per megawatt.
    #[clap(long = "bid-price-down")]
    pub capacity_bid_price_down: Option<EuroPerMegawatt>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl QuoteArgs {
    pub fn to_profile(&self) -> Result<AssetProfile> {
        let profile = AssetProfile::builder()
            .asset_type(self.asset_type)
            .power(self.power)
            .activation_frequency(self.activation_frequency)
            .max_activation_time(self.max_activation_time)
            .steerable(self.steerable)
            .maybe_capacity_bid_price_up(self.capacity_bid_price_up)
            .maybe_capacity_bid_price_down(self.capacity_bid_price_down)
            .build();
        profile.validate()?;
        Ok(profile)
    }
}

#[instrument(skip_all)]
pub fn quote(args: &QuoteArgs, catalog: &MarketCatalog) -> Result {
    let profile = args.to_profile()?;
    let assessments = assess_all(&profile, catalog)?;
    args.output.report(&profile, &assessments)
}
