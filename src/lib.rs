pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpCatalogStore, HttpManifestEncoder};
pub use crate::core::{order::OrderFlow, selection::SelectionModel};
pub use utils::error::{CartError, Result};
