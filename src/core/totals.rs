//! Pure aggregation over a selection snapshot. No state, no mutation; an
//! empty slice yields zero for all three.

use crate::domain::model::SelectionEntry;

/// Sum of `calories * quantity` over all entries, widened to u64 so a large
/// cart cannot overflow the per-item u32.
pub fn total_calories(entries: &[SelectionEntry]) -> u64 {
    entries
        .iter()
        .map(|e| u64::from(e.snapshot.calories) * u64::from(e.quantity))
        .sum()
}

/// Sum of quantities over all entries.
pub fn total_quantity(entries: &[SelectionEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.quantity)).sum()
}

/// Number of distinct entries (one per item id, by the selection invariant).
pub fn distinct_item_count(entries: &[SelectionEntry]) -> usize {
    entries.len()
}
