use crate::domain::model::{CatalogItem, ItemSnapshot, SelectionEntry};

/// The user's in-progress cart. Sole owner of "what the user currently
/// wants"; every mutation goes through one of the methods below so the two
/// invariants hold at all times:
///
/// - at most one entry per distinct `item_id` (re-adding increments quantity)
/// - `quantity >= 1` for every entry (decrements clamp at 1; the only way an
///   entry disappears is an explicit `remove`)
///
/// Entries keep insertion order: first-selected-first-listed, regardless of
/// later quantity changes.
///
/// Ephemeral by design: one instance per interactive session, nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct SelectionModel {
    entries: Vec<SelectionEntry>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`. Creates a new entry with quantity 1 and a
    /// field snapshot on first add; increments the existing entry's quantity
    /// on every add after that. Never fails.
    pub fn add(&mut self, item: &CatalogItem) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            tracing::debug!("Incremented '{}' to quantity {}", item.name, entry.quantity);
        } else {
            tracing::debug!("Selected '{}' ({} kcal)", item.name, item.calories);
            self.entries.push(SelectionEntry {
                item_id: item.id.clone(),
                snapshot: ItemSnapshot::from(item),
                quantity: 1,
            });
        }
    }

    /// Deletes the entry for `item_id`. Unknown ids are a no-op, so callers
    /// (e.g. a double-clicked remove button) never need to pre-check.
    pub fn remove(&mut self, item_id: &str) {
        self.entries.retain(|e| e.item_id != item_id);
    }

    /// Applies `delta` to the entry's quantity, clamped so it never drops
    /// below 1. Removing an item is only possible through `remove`, so a
    /// decrement spiral cannot silently empty the cart. Unknown ids are a
    /// no-op.
    pub fn set_quantity(&mut self, item_id: &str, delta: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            let updated = i64::from(entry.quantity).saturating_add(delta);
            entry.quantity = updated.clamp(1, i64::from(u32::MAX)) as u32;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cloned view of the entries in insertion order. Mutating the returned
    /// vector has no effect on the model.
    pub fn snapshot(&self) -> Vec<SelectionEntry> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
