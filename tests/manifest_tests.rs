use calorie_cart::core::{manifest, totals};
use calorie_cart::domain::model::CatalogItem;
use calorie_cart::{CartError, SelectionModel};

fn item(id: &str, name: &str, calories: u32) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        category: "Fruits".to_string(),
        image_url: String::new(),
    }
}

#[test]
fn test_totals_on_empty_snapshot_are_zero() {
    let entries = SelectionModel::new().snapshot();

    assert_eq!(totals::total_calories(&entries), 0);
    assert_eq!(totals::total_quantity(&entries), 0);
    assert_eq!(totals::distinct_item_count(&entries), 0);
}

#[test]
fn test_total_calories_weighs_by_quantity() {
    // add(Apple), add(Apple) => one entry, quantity 2, 190 kcal
    let mut model = SelectionModel::new();
    let apple = item("a1", "Apple", 95);
    model.add(&apple);
    model.add(&apple);

    let entries = model.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].quantity, 2);
    assert_eq!(totals::total_calories(&entries), 190);
    assert_eq!(totals::total_quantity(&entries), 2);
    assert_eq!(totals::distinct_item_count(&entries), 1);
}

#[test]
fn test_totals_after_remove() {
    let mut model = SelectionModel::new();
    model.add(&item("a1", "Apple", 95));
    model.add(&item("b1", "Banana", 105));
    model.remove("a1");

    let entries = model.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].snapshot.name, "Banana");
    assert_eq!(entries[0].quantity, 1);
    assert_eq!(totals::total_calories(&entries), 105);
}

#[test]
fn test_totals_match_independent_recomputation() {
    let mut model = SelectionModel::new();
    model.add(&item("a1", "Apple", 95));
    model.add(&item("b1", "Banana", 105));
    model.add(&item("c1", "Cherry", 50));
    model.set_quantity("a1", 2);
    model.set_quantity("c1", 9);
    model.remove("b1");

    let entries = model.snapshot();
    let expected: u64 = entries
        .iter()
        .map(|e| u64::from(e.snapshot.calories) * u64::from(e.quantity))
        .sum();
    assert_eq!(totals::total_calories(&entries), expected);

    let expected_units: u64 = entries.iter().map(|e| u64::from(e.quantity)).sum();
    assert_eq!(totals::total_quantity(&entries), expected_units);
}

#[test]
fn test_totals_do_not_overflow_u32() {
    let mut model = SelectionModel::new();
    model.add(&item("x1", "Lard Block", u32::MAX));
    model.set_quantity("x1", 99);

    let entries = model.snapshot();
    assert_eq!(totals::total_calories(&entries), u64::from(u32::MAX) * 100);
}

#[test]
fn test_build_on_empty_selection_fails() {
    let entries = SelectionModel::new().snapshot();

    let result = manifest::build(&entries);
    assert!(matches!(result, Err(CartError::EmptySelectionError)));
}

#[test]
fn test_build_produces_ordered_lines_and_totals() {
    let mut model = SelectionModel::new();
    model.add(&item("a1", "Apple", 95));
    model.add(&item("b1", "Banana", 105));

    let manifest = manifest::build(&model.snapshot()).unwrap();

    assert_eq!(manifest.total_calories, 200);
    assert_eq!(manifest.item_count, 2);
    assert_eq!(manifest.lines.len(), 2);
    assert_eq!(manifest.lines[0].name, "Apple");
    assert_eq!(manifest.lines[0].quantity, 1);
    assert_eq!(manifest.lines[1].name, "Banana");
    assert_eq!(manifest.lines[1].quantity, 1);
}

#[test]
fn test_manifest_survives_later_model_mutation() {
    let mut model = SelectionModel::new();
    model.add(&item("a1", "Apple", 95));
    model.add(&item("b1", "Banana", 105));

    let manifest = manifest::build(&model.snapshot()).unwrap();

    model.clear();

    assert_eq!(manifest.item_count, 2);
    assert_eq!(manifest.total_calories, 200);
    assert_eq!(manifest.lines[0].name, "Apple");
}

#[test]
fn test_manifest_reflects_quantity_changes_but_keeps_order() {
    let mut model = SelectionModel::new();
    model.add(&item("a1", "Apple", 95));
    model.add(&item("b1", "Banana", 105));
    model.set_quantity("b1", 2); // Banana x3, still second

    let manifest = manifest::build(&model.snapshot()).unwrap();

    assert_eq!(manifest.lines[0].name, "Apple");
    assert_eq!(manifest.lines[1].name, "Banana");
    assert_eq!(manifest.lines[1].quantity, 3);
    assert_eq!(manifest.total_calories, 95 + 3 * 105);
}
