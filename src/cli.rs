mod catalog;
mod estimate;
mod quote;

use clap::{Parser, Subcommand};

pub use self::{estimate::estimate, quote::quote};
use crate::{
    cli::{catalog::CatalogArgs, estimate::EstimateArgs, quote::QuoteArgs},
    core::{assessment::MarketAssessment, catalog::MarketCatalog, profile::AssetProfile},
    prelude::*,
    tables::{build_assessments_table, build_markets_table, build_profile_table},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assess a complete asset profile read from a TOML or JSON file.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Quick estimate from the asset type, power, and activation constraints.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Show the market catalog.
    #[clap(name = "markets")]
    Markets(OutputArgs),
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Print JSON instead of tables.
    #[clap(long, env = "OUTPUT_JSON")]
    pub json: bool,
}

impl OutputArgs {
    /// Render the assessments in the requested format.
    fn report(&self, profile: &AssetProfile, assessments: &[MarketAssessment]) -> Result {
        if let Some((market_id, revenue)) = assessments
            .iter()
            .filter_map(|assessment| Some((assessment.market_id, assessment.revenue?)))
            .max_by_key(|(_, revenue)| revenue.total_revenue)
        {
            info!(%market_id, total = %revenue.total_revenue, "most lucrative market");
        } else {
            warn!(asset_type = %profile.asset_type, "the asset is not suitable for any market");
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(assessments)?);
        } else {
            println!("{}", build_profile_table(profile));
            println!("{}", build_assessments_table(assessments));
        }
        Ok(())
    }

    /// Render the market catalog in the requested format.
    pub fn markets(&self, catalog: &MarketCatalog) -> Result {
        if self.json {
            println!("{}", serde_json::to_string_pretty(catalog)?);
        } else {
            println!("{}", build_markets_table(catalog));
        }
        Ok(())
    }
}
