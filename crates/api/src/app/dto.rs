use serde::Deserialize;

use stockroom_inventory::{CategoryFilter, ItemDraft, ItemFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create/update requests; field names match the record format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub quantity: i64,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub location: Option<String>,
    pub min_stock: Option<i64>,
    pub price: Option<f64>,
}

impl ItemPayload {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            quantity: self.quantity,
            category: self.category,
            supplier: self.supplier,
            location: self.location,
            min_stock: self.min_stock,
            price: self.price,
        }
    }
}

/// Query string of `GET /items`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub low_stock: bool,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            search_text: self.search.clone().unwrap_or_default(),
            category: match self.category.as_deref() {
                None | Some("all") => CategoryFilter::All,
                Some(category) => CategoryFilter::Is(category.to_string()),
            },
            low_stock_only: self.low_stock,
        }
    }
}
