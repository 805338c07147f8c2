pub mod assessment;
pub mod asset;
pub mod catalog;
pub mod engine;
mod error;
pub mod market;
pub mod profile;

pub use self::error::Error;
