use std::{fmt::Debug, fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    core::{
        Error,
        market::{MarketDefinition, MarketId},
    },
    prelude::*,
};

/// Fixed, ordered set of market definitions.
///
/// Immutable once loaded: operators change prices by editing the catalog file, not the engine.
#[must_use]
#[derive(Debug, PartialEq, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct MarketCatalog(Vec<MarketDefinition>);

#[derive(Deserialize)]
struct CatalogFile {
    markets: Vec<MarketDefinition>,
}

/// Same shape as [`CatalogFile`], so that the output can be loaded back.
#[derive(Serialize)]
struct CatalogView<'a> {
    markets: &'a [MarketDefinition],
}

impl Serialize for MarketCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CatalogView { markets: &self.0 }.serialize(serializer)
    }
}

impl TryFrom<CatalogFile> for MarketCatalog {
    type Error = anyhow::Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::try_new(file.markets)
    }
}

impl MarketCatalog {
    const BUILTIN: &str = include_str!("../../catalogs/default.toml");

    pub fn try_new(markets: Vec<MarketDefinition>) -> Result<Self> {
        ensure!(!markets.is_empty(), "the catalog must contain at least one market");
        if let Some(market_id) = markets.iter().map(|market| market.id).duplicates().next() {
            bail!("market {market_id} is defined more than once");
        }
        for market in &markets {
            market.validate()?;
        }
        Ok(Self(markets))
    }

    /// Catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(Self::BUILTIN).context("the built-in catalog is invalid")
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    #[instrument]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the catalog from `{}`", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("failed to load the catalog from `{}`", path.display()))
    }

    pub fn get(&self, market_id: MarketId) -> Result<&MarketDefinition, Error> {
        self.0.iter().find(|market| market.id == market_id).ok_or(Error::UnknownMarket(market_id))
    }

    /// Look the markets up in the requested order.
    pub fn select(&self, market_ids: &[MarketId]) -> Result<Vec<&MarketDefinition>, Error> {
        market_ids.iter().map(|market_id| self.get(*market_id)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketDefinition> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a MarketCatalog {
    type Item = &'a MarketDefinition;
    type IntoIter = std::slice::Iter<'a, MarketDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;
    use crate::{
        core::{
            asset::{ActivationFrequency, AssetType},
            market::ActivationBasis,
        },
        quantity::price::{EuroPerMegawatt, EuroPerMegawattHour},
    };

    #[test]
    fn test_builtin() {
        let catalog = MarketCatalog::builtin().unwrap();
        let market_ids = catalog.iter().map(|market| market.id).collect_vec();
        assert_eq!(market_ids, [MarketId::Afrr, MarketId::Mfrr, MarketId::Crm]);

        let afrr = catalog.get(MarketId::Afrr).unwrap();
        assert_eq!(afrr.eligible_asset_types, AssetType::Battery | AssetType::Chp);
        assert_eq!(afrr.capacity_price, EuroPerMegawatt::from(60_000.0));
        assert_eq!(afrr.energy_price, EuroPerMegawattHour::from(100.0));
        assert_eq!(afrr.activation_probability_table[&ActivationFrequency::OncePerDay], 0.5);
        assert_eq!(afrr.reference_capacity_price, None);
        assert_eq!(afrr.activation_basis, ActivationBasis::PerDay);

        let crm = catalog.get(MarketId::Crm).unwrap();
        assert_eq!(crm.eligible_asset_types.len(), 5);
    }

    #[test]
    fn test_bid_scaled_variant() {
        let catalog =
            MarketCatalog::from_toml(include_str!("../../catalogs/bid-scaled.toml")).unwrap();
        let fcr = catalog.get(MarketId::Fcr).unwrap();
        assert!(fcr.reference_capacity_price.is_some());
        assert_eq!(fcr.eligible_asset_types, EnumSet::only(AssetType::Battery));
    }

    #[test]
    fn test_read_from() {
        const PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/catalogs/bid-scaled.toml");
        let catalog = MarketCatalog::read_from(PATH).unwrap();
        let market_ids = catalog.iter().map(|market| market.id).collect_vec();
        assert_eq!(market_ids, [MarketId::Fcr, MarketId::Afrr, MarketId::Mfrr]);
    }

    #[test]
    fn test_read_from_missing_file() {
        let error = MarketCatalog::read_from("catalogs/missing.toml").unwrap_err();
        let message = format!("{error:#}");
        assert!(message.contains("failed to read the catalog from `catalogs/missing.toml`"));
    }

    #[test]
    fn test_json_loads_back() {
        let catalog =
            MarketCatalog::from_toml(include_str!("../../catalogs/bid-scaled.toml")).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with(r#"{"markets":[{"market_id":"FCR""#));
        let loaded: MarketCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_unknown_market() {
        let catalog = MarketCatalog::builtin().unwrap();
        assert_eq!(catalog.get(MarketId::Fcr).unwrap_err(), Error::UnknownMarket(MarketId::Fcr));
    }

    #[test]
    fn test_select_preserves_order() {
        let catalog = MarketCatalog::builtin().unwrap();
        let markets = catalog.select(&[MarketId::Crm, MarketId::Afrr]).unwrap();
        assert_eq!(markets[0].id, MarketId::Crm);
        assert_eq!(markets[1].id, MarketId::Afrr);
        assert!(catalog.select(&[MarketId::Crm, MarketId::Fcr]).is_err());
    }

    #[test]
    fn test_duplicate_market_is_rejected() {
        let result = MarketCatalog::from_toml(
            r#"
                [[markets]]
                market_id = "CRM"
                eligible_asset_types = ["battery"]
                capacity_price_per_mw_year = 40000.0
                energy_price_per_mwh = 60.0

                [[markets]]
                market_id = "CRM"
                eligible_asset_types = ["genset"]
                capacity_price_per_mw_year = 40000.0
                energy_price_per_mwh = 60.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(MarketCatalog::from_toml("markets = []").is_err());
    }

    #[test]
    fn test_unknown_asset_type_is_rejected() {
        let result = MarketCatalog::from_toml(
            r#"
                [[markets]]
                market_id = "CRM"
                eligible_asset_types = ["fusion_reactor"]
                capacity_price_per_mw_year = 40000.0
                energy_price_per_mwh = 60.0
            "#,
        );
        assert!(result.is_err());
    }
}
