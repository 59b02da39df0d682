use crate::domain::model::CatalogItem;
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

/// Thin query adapter in front of the catalog store. Normalizes user input
/// and makes sure it reaches the store as literal text.
pub struct CatalogSearch<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> CatalogSearch<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Case-insensitive substring search against item names. An empty or
    /// whitespace-only query returns the full catalog.
    ///
    /// The store matches with a pattern language on its side (the backing
    /// service feeds the text into a regex), so the query is escaped here:
    /// a user typing `c++` must match the literal text, not a broken or
    /// wildcard pattern.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogItem>> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Empty query, listing full catalog");
            return self.store.list_items().await;
        }

        let pattern = regex::escape(query);
        tracing::debug!("Searching catalog with pattern '{}'", pattern);
        self.store.search(&pattern).await
    }
}
