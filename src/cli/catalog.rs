use std::path::PathBuf;

use clap::Parser;

use crate::{core::catalog::MarketCatalog, prelude::*};

#[derive(Parser)]
pub struct CatalogArgs {
    /// Market catalog TOML, the built-in one is used when unset.
    #[clap(long = "catalog", env = "CATALOG_PATH", global = true)]
    pub path: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<MarketCatalog> {
        let catalog = match &self.path {
            Some(path) => MarketCatalog::read_from(path)?,
            None => MarketCatalog::builtin()?,
        };
        info!(n_markets = catalog.iter().len(), "loaded the catalog");
        Ok(catalog)
    }
}
