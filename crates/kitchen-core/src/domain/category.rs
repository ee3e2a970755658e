// ============================================================================
// Kitchen Core - Category Grouping
// File: crates/kitchen-core/src/domain/category.rs
// Description: Orders a kitchen's menu items into displayable categories
// ============================================================================

use serde::Serialize;

use super::MenuItem;
use kitchen_shared::constants::{DEFAULT_CATEGORY_SORT_ORDER, UNCATEGORIZED_LABEL};

/// A display category: its label, resolved sort key, and the name-ordered
/// items carrying it. Derived at read time, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub label: String,
    pub sort_key: i32,
    pub items: Vec<MenuItem>,
}

fn effective_category(item: &MenuItem) -> String {
    match item.category.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => UNCATEGORIZED_LABEL.to_string(),
    }
}

fn effective_sort_order(item: &MenuItem) -> i32 {
    item.category_sort_order.unwrap_or(DEFAULT_CATEGORY_SORT_ORDER)
}

/// Group menu items into ordered categories.
///
/// Each group's sort key is the minimum `category_sort_order` among its
/// items, with missing values counting as the default (100). Groups come
/// back ascending by that key, ties broken by label; items inside a group
/// are name-sorted with a stable sort. Everything is explicit Vec work so
/// the output never depends on hash-map iteration order.
pub fn group_by_category(items: &[MenuItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        let label = effective_category(item);
        let key = effective_sort_order(item);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => {
                group.sort_key = group.sort_key.min(key);
                group.items.push(item.clone());
            }
            None => groups.push(CategoryGroup {
                label,
                sort_key: key,
                items: vec![item.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.items.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups.sort_by(|a, b| a.sort_key.cmp(&b.sort_key).then_with(|| a.label.cmp(&b.label)));

    groups
}
