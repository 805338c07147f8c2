use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::{
    assessment::MarketAssessment,
    catalog::MarketCatalog,
    market::{ActivationBasis, BidDirection},
    profile::AssetProfile,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_profile_table(profile: &AssetProfile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Question", "Answer"]);
    table.add_row(vec![Cell::new("Flexible technology"), Cell::new(profile.asset_type)]);
    table.add_row(vec![Cell::new("Power"), Cell::new(profile.power)]);
    table.add_row(vec![Cell::new("Upward capacity"), Cell::new(profile.upward_capacity())]);
    table.add_row(vec![Cell::new("Downward capacity"), Cell::new(profile.downward_capacity())]);
    table.add_row(vec![Cell::new("Storage size"), Cell::new(profile.storage_size)]);
    table.add_row(vec![
        Cell::new("Fully controllable"),
        Cell::new(if profile.steerable { "yes" } else { "no" }),
    ]);
    table.add_row(vec![Cell::new("Activation frequency"), Cell::new(profile.activation_frequency)]);
    table.add_row(vec![
        Cell::new("Maximum activation time"),
        Cell::new(profile.max_activation_time),
    ]);
    if profile.availability_constrained {
        table.add_row(vec![
            Cell::new("Unavailable dates"),
            Cell::new(profile.unavailable_dates.iter().join(", ")),
        ]);
    }
    for (question, bid_price) in [
        ("Upward capacity bid", profile.capacity_bid_price_up),
        ("Downward capacity bid", profile.capacity_bid_price_down),
    ] {
        if let Some(bid_price) = bid_price {
            table.add_row(vec![Cell::new(question), Cell::new(bid_price)]);
        }
    }
    if let Some(company) = profile.company {
        table.add_row(vec![Cell::new("Industry sector"), Cell::new(company.industry_sector)]);
        table.add_row(vec![Cell::new("Asset status"), Cell::new(company.asset_status)]);
        table.add_row(vec![Cell::new("Connection"), Cell::new(company.connection_type)]);
        table.add_row(vec![Cell::new("Location"), Cell::new(company.location)]);
        table.add_row(vec![Cell::new("Purpose"), Cell::new(company.purpose)]);
    }
    table
}

#[must_use]
pub fn build_markets_table(catalog: &MarketCatalog) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Market",
        "Eligible assets",
        "Capacity price",
        "Energy price",
        "Reference bid",
        "Activation time",
    ]);
    for market in catalog {
        let reference_bid = market.reference_capacity_price.map_or_else(
            || "none".to_string(),
            |price| {
                let direction = match market.bid_direction {
                    BidDirection::Up => "up",
                    BidDirection::Down => "down",
                };
                match market.max_bid_scaling {
                    Some(max_bid_scaling) => format!("{price} {direction}, ≤{max_bid_scaling}×"),
                    None => format!("{price} {direction}"),
                }
            },
        );
        table.add_row(vec![
            Cell::new(market.id).add_attribute(Attribute::Bold),
            Cell::new(market.eligible_asset_types.iter().join(", ")),
            Cell::new(format!("{}·yr", market.capacity_price)).set_alignment(CellAlignment::Right),
            Cell::new(market.energy_price).set_alignment(CellAlignment::Right),
            Cell::new(reference_bid).add_attribute(Attribute::Dim),
            Cell::new(match market.activation_basis {
                ActivationBasis::PerDay => "per day",
                ActivationBasis::PerActivation => "per activation",
            }),
        ]);
    }
    table
}

#[must_use]
pub fn build_assessments_table(assessments: &[MarketAssessment]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Market",
        "Suitable",
        "Activation",
        "Capacity",
        "Energy",
        "Total",
        "Capacity share",
    ]);
    for assessment in assessments {
        let mut row = vec![
            Cell::new(assessment.market_id).add_attribute(Attribute::Bold),
            if assessment.eligible {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("no").fg(Color::Red)
            },
        ];
        if let Some(revenue) = assessment.revenue {
            row.extend([
                Cell::new(format!("{}/day", revenue.average_activation_time))
                    .set_alignment(CellAlignment::Right),
                Cell::new(revenue.capacity_revenue).set_alignment(CellAlignment::Right),
                Cell::new(revenue.energy_revenue).set_alignment(CellAlignment::Right),
                Cell::new(revenue.total_revenue)
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Bold),
                Cell::new(revenue.capacity_share().map_or_else(
                    || "n/a".to_string(),
                    |share| format!("{:.0}%", share * 100.0),
                ))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            ]);
        }
        table.add_row(row);
    }
    table
}
