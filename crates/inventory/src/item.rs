use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, StoreError, StoreResult};

/// Minimum stock threshold used when a record does not carry its own.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// One inventory entry.
///
/// Serialized with camelCase field names so the persistence blob and the
/// import/export documents share one format. Records created through the
/// store always carry materialized `min_stock`/`price`; only imported
/// records may omit them, and queries fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Set once at creation; imported records without one get the import time.
    #[serde(default = "Utc::now")]
    pub date_added: DateTime<Utc>,
    /// Refreshed on creation and every update.
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl ItemRecord {
    /// Threshold below or at which the item counts as low stock.
    pub fn effective_min_stock(&self) -> i64 {
        self.min_stock.unwrap_or(DEFAULT_MIN_STOCK)
    }

    pub fn effective_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.effective_min_stock()
    }

    /// Stock value of this record: quantity x price.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.effective_price()
    }
}

/// Validated input for create/update.
///
/// Optional text fields are normalized on application: trimmed, with blank
/// values treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub location: Option<String>,
    pub min_stock: Option<i64>,
    pub price: Option<f64>,
}

impl ItemDraft {
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(StoreError::validation("quantity must be a non-negative integer"));
        }
        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(StoreError::validation("price must be a finite number"));
            }
        }
        Ok(())
    }
}

/// Trim an optional text field, collapsing blanks to `None`.
pub(crate) fn normalize_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            ..ItemDraft::default()
        }
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = draft("   ", 5).validate().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn draft_rejects_negative_quantity() {
        let err = draft("Bolts", -1).validate().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn draft_rejects_non_finite_price() {
        let mut d = draft("Bolts", 5);
        d.price = Some(f64::NAN);
        assert!(d.validate().is_err());
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let record = ItemRecord {
            id: ItemId::generate(),
            name: "Bolts".to_string(),
            quantity: 10,
            category: None,
            supplier: None,
            location: None,
            min_stock: None,
            price: None,
            date_added: Utc::now(),
            last_updated: Utc::now(),
        };
        assert_eq!(record.effective_min_stock(), DEFAULT_MIN_STOCK);
        assert_eq!(record.effective_price(), 0.0);
        assert_eq!(record.value(), 0.0);
        // quantity == min_stock counts as low.
        assert!(record.is_low_stock());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = ItemRecord {
            id: ItemId::new("1").unwrap(),
            name: "Bolts".to_string(),
            quantity: 3,
            category: Some("Hardware".to_string()),
            supplier: None,
            location: None,
            min_stock: Some(10),
            price: Some(0.5),
            date_added: Utc::now(),
            last_updated: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["minStock"], 10);
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("supplier").is_none());
    }

    #[test]
    fn deserializes_minimal_imported_record() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"id":"7","name":"Washers","quantity":4}"#).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.quantity, 4);
        assert!(record.min_stock.is_none());
        assert!(record.date_added <= record.last_updated);
    }

    #[test]
    fn normalize_text_collapses_blanks() {
        assert_eq!(normalize_text(Some("  Hardware ")), Some("Hardware".to_string()));
        assert_eq!(normalize_text(Some("   ")), None);
        assert_eq!(normalize_text(None), None);
    }
}
