//! Client-side name filtering.

use crate::types::Item;

/// Items whose name contains `pattern`, compared case-insensitively.
///
/// An absent or empty pattern keeps every item. Order is preserved.
pub fn filter_by_name<'a>(items: &'a [Item], pattern: Option<&str>) -> Vec<&'a Item> {
    let needle = match pattern {
        Some(p) if !p.is_empty() => p.to_lowercase(),
        _ => return items.iter().collect(),
    };
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}
