use std::path::PathBuf;

use clap::Parser;

use crate::{
    cli::OutputArgs,
    core::{catalog::MarketCatalog, engine::assess_all, market::MarketId, profile::AssetProfile},
    prelude::*,
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// Asset profile, JSON when the extension is `.json` and TOML otherwise.
    #[clap(long = "profile", env = "PROFILE_PATH")]
    pub profile_path: PathBuf,

    /// Markets to assess in the given order, all catalog markets by default.
    #[clap(long = "market", value_delimiter = ',', num_args = 1..)]
    pub market_ids: Vec<MarketId>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[instrument(skip_all, fields(profile = %args.profile_path.display()))]
pub fn estimate(args: &EstimateArgs, catalog: &MarketCatalog) -> Result {
    let profile = AssetProfile::read_from(&args.profile_path)?;
    let assessments = if args.market_ids.is_empty() {
        assess_all(&profile, catalog)?
    } else {
        assess_all(&profile, catalog.select(&args.market_ids)?)?
    };
    args.output.report(&profile, &assessments)
}
