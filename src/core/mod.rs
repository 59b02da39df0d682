pub mod catalog;
pub mod manifest;
pub mod order;
pub mod selection;
pub mod totals;

pub use crate::domain::model::{CatalogItem, ItemSnapshot, OrderManifest, SelectionEntry};
pub use crate::domain::ports::{CatalogStore, ConfigProvider, ManifestEncoder};
pub use crate::utils::error::Result;
