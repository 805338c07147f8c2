#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, estimate, quote},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let catalog = args.catalog.load()?;

    match args.command {
        Command::Estimate(args) => {
            estimate(&args, &catalog)?;
        }
        Command::Quote(args) => {
            quote(&args, &catalog)?;
        }
        Command::Markets(args) => {
            args.markets(&catalog)?;
        }
    }

    info!("done!");
    Ok(())
}
