use crate::core::catalog::CatalogSearch;
use crate::core::selection::SelectionModel;
use crate::core::{manifest, totals};
use crate::domain::model::{CatalogItem, OrderManifest};
use crate::domain::ports::{CatalogStore, ManifestEncoder};
use crate::utils::error::Result;

/// Drives one ordering session over the two external collaborators: browse
/// the catalog, mutate the selection, finalize into a manifest, hand the
/// manifest to the encoder.
///
/// The flow owns the selection model for the session; totals are always
/// recomputed from a snapshot, never cached. Collaborator failures propagate
/// as-is, retry policy belongs to the caller.
pub struct OrderFlow<S: CatalogStore, E: ManifestEncoder> {
    store: S,
    encoder: E,
    selection: SelectionModel,
}

impl<S: CatalogStore, E: ManifestEncoder> OrderFlow<S, E> {
    pub fn new(store: S, encoder: E) -> Self {
        Self {
            store,
            encoder,
            selection: SelectionModel::new(),
        }
    }

    /// Catalog lookup; `None` or blank text lists everything.
    pub async fn browse(&self, query: Option<&str>) -> Result<Vec<CatalogItem>> {
        let search = CatalogSearch::new(&self.store);
        let items = search.search(query.unwrap_or_default()).await?;
        tracing::info!("Catalog returned {} item(s)", items.len());
        Ok(items)
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection
    }

    /// Builds the manifest for the current selection without encoding it.
    pub fn finalize(&self) -> Result<OrderManifest> {
        manifest::build(&self.selection.snapshot())
    }

    /// Finalizes the current selection and hands the manifest to the encoder,
    /// returning the opaque token. Fails with `EmptySelectionError` when
    /// nothing is selected.
    pub async fn checkout(&self) -> Result<String> {
        let snapshot = self.selection.snapshot();
        let manifest = manifest::build(&snapshot)?;

        tracing::info!(
            "Finalized {} item(s), {} unit(s), {} kcal total",
            manifest.item_count,
            totals::total_quantity(&snapshot),
            manifest.total_calories
        );

        let token = self.encoder.encode(&manifest).await?;
        tracing::info!("Encoder returned token ({} bytes)", token.len());
        Ok(token)
    }
}
