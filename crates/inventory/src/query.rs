//! Filter and sort pipeline over the collection.

use std::cmp::Ordering;

use crate::item::ItemRecord;

/// Category criterion of a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every record regardless of category.
    #[default]
    All,
    /// Match records whose category equals this value exactly.
    Is(String),
}

impl CategoryFilter {
    fn matches(&self, item: &ItemRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Is(wanted) => item.category.as_deref() == Some(wanted.as_str()),
        }
    }
}

/// Query filter: all criteria must hold for a record to match.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name, category, supplier
    /// and location; empty matches everything.
    pub search_text: String,
    pub category: CategoryFilter,
    pub low_stock_only: bool,
}

impl ItemFilter {
    pub fn matches(&self, item: &ItemRecord) -> bool {
        self.matches_search(item)
            && self.category.matches(item)
            && (!self.low_stock_only || item.is_low_stock())
    }

    fn matches_search(&self, item: &ItemRecord) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(item.name.as_str()),
            item.category.as_deref(),
            item.supplier.as_deref(),
            item.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Ordering applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Stored order (insertion order); the default.
    #[default]
    Insertion,
    /// Case-insensitive lexicographic by name.
    Name,
    /// Ascending by quantity.
    Quantity,
    /// Newest first by creation time.
    DateAdded,
}

impl SortOrder {
    /// Sort `items` in place. Stable, so equal keys keep insertion order.
    pub(crate) fn apply(self, items: &mut [ItemRecord]) {
        match self {
            SortOrder::Insertion => {}
            SortOrder::Name => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
            SortOrder::Quantity => items.sort_by_key(|item| item.quantity),
            SortOrder::DateAdded => items.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use stockroom_core::ItemId;

    fn record(name: &str, quantity: i64) -> ItemRecord {
        ItemRecord {
            id: ItemId::generate(),
            name: name.to_string(),
            quantity,
            category: None,
            supplier: None,
            location: None,
            min_stock: None,
            price: None,
            date_added: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    fn search(text: &str) -> ItemFilter {
        ItemFilter {
            search_text: text.to_string(),
            ..ItemFilter::default()
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ItemFilter::default().matches(&record("Bolts", 3)));
    }

    #[test]
    fn search_is_case_insensitive_across_text_fields() {
        let mut item = record("Hex Bolt M8", 3);
        item.supplier = Some("Acme Fasteners".to_string());
        item.location = Some("Aisle 4".to_string());
        item.category = Some("Hardware".to_string());

        assert!(search("BOLT").matches(&item));
        assert!(search("acme").matches(&item));
        assert!(search("aisle").matches(&item));
        assert!(search("hardware").matches(&item));
        assert!(!search("gasket").matches(&item));
    }

    #[test]
    fn search_does_not_match_absent_fields() {
        let item = record("Bolts", 3);
        assert!(!search("acme").matches(&item));
    }

    #[test]
    fn category_filter_requires_exact_match() {
        let mut item = record("Bolts", 3);
        item.category = Some("Hardware".to_string());

        let all = ItemFilter::default();
        let hardware = ItemFilter {
            category: CategoryFilter::Is("Hardware".to_string()),
            ..ItemFilter::default()
        };
        let tools = ItemFilter {
            category: CategoryFilter::Is("Tools".to_string()),
            ..ItemFilter::default()
        };

        assert!(all.matches(&item));
        assert!(hardware.matches(&item));
        assert!(!tools.matches(&item));
        // Case matters for the category criterion, unlike the text search.
        let lower = ItemFilter {
            category: CategoryFilter::Is("hardware".to_string()),
            ..ItemFilter::default()
        };
        assert!(!lower.matches(&item));
    }

    #[test]
    fn low_stock_filter_uses_default_threshold() {
        let filter = ItemFilter {
            low_stock_only: true,
            ..ItemFilter::default()
        };

        // No explicit min_stock: threshold defaults to 10.
        assert!(filter.matches(&record("Bolts", 10)));
        assert!(!filter.matches(&record("Bolts", 11)));

        let mut custom = record("Nuts", 11);
        custom.min_stock = Some(20);
        assert!(filter.matches(&custom));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut items = vec![record("washer", 1), record("Bolt", 2), record("anchor", 3)];
        SortOrder::Name.apply(&mut items);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["anchor", "Bolt", "washer"]);
    }

    #[test]
    fn quantity_sort_is_ascending() {
        let mut items = vec![record("a", 9), record("b", 1), record("c", 5)];
        SortOrder::Quantity.apply(&mut items);
        let quantities: Vec<i64> = items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 5, 9]);
    }

    #[test]
    fn date_sort_puts_newest_first() {
        let now = Utc::now();
        let mut oldest = record("oldest", 1);
        oldest.date_added = now - Duration::days(2);
        let mut newest = record("newest", 2);
        newest.date_added = now;
        let mut middle = record("middle", 3);
        middle.date_added = now - Duration::days(1);

        let mut items = vec![oldest, newest, middle];
        SortOrder::DateAdded.apply(&mut items);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn insertion_order_is_untouched() {
        let mut items = vec![record("b", 2), record("a", 1)];
        SortOrder::Insertion.apply(&mut items);
        assert_eq!(items[0].name, "b");
    }
}
