use crate::domain::model::{CatalogItem, OrderManifest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the external food catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns the full catalog.
    async fn list_items(&self) -> Result<Vec<CatalogItem>>;

    /// Case-insensitive substring match against item names. The pattern is
    /// forwarded verbatim, so callers must escape it first (see
    /// `core::catalog::CatalogSearch`).
    async fn search(&self, name_pattern: &str) -> Result<Vec<CatalogItem>>;
}

/// Turns a finalized manifest into an opaque token (e.g. a QR code data URL).
/// The core never interprets the token.
#[async_trait]
pub trait ManifestEncoder: Send + Sync {
    async fn encode(&self, manifest: &OrderManifest) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn encoder_endpoint(&self) -> &str;
    fn verbose(&self) -> bool;
}
