use serde::{Deserialize, Serialize};

/// A food item as served by the catalog store. Read-only for this crate;
/// the selection model only ever copies fields out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub category: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// The catalog fields captured at selection time, so totals and manifest
/// building never have to re-query the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub calories: u32,
    pub image_url: String,
}

impl From<&CatalogItem> for ItemSnapshot {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories,
            image_url: item.image_url.clone(),
        }
    }
}

/// One cart line: a weak reference to a catalog item plus how many units of
/// it the user wants. `quantity` never drops below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub item_id: String,
    pub snapshot: ItemSnapshot,
    pub quantity: u32,
}

/// One line of a finalized manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLine {
    pub name: String,
    pub quantity: u32,
}

/// The finalized, self-contained summary of a selection. Holds no references
/// back into the selection model, so it stays valid after the cart changes
/// or is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderManifest {
    pub total_calories: u64,
    pub item_count: usize,
    pub lines: Vec<ManifestLine>,
}
