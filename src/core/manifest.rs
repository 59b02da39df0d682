use crate::core::totals;
use crate::domain::model::{ManifestLine, OrderManifest, SelectionEntry};
use crate::utils::error::{CartError, Result};

/// Builds the finalized manifest from a selection snapshot: one
/// `{name, quantity}` line per entry in selection order, plus totals.
///
/// An empty selection is an error, not an empty manifest: there is nothing
/// meaningful to hand to the encoder, and callers are expected to check
/// `SelectionModel::is_empty` before finalizing.
pub fn build(entries: &[SelectionEntry]) -> Result<OrderManifest> {
    if entries.is_empty() {
        return Err(CartError::EmptySelectionError);
    }

    let lines = entries
        .iter()
        .map(|e| ManifestLine {
            name: e.snapshot.name.clone(),
            quantity: e.quantity,
        })
        .collect();

    Ok(OrderManifest {
        total_calories: totals::total_calories(entries),
        item_count: totals::distinct_item_count(entries),
        lines,
    })
}
