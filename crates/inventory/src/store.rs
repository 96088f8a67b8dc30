//! The inventory store: owned collection + persistence.

use chrono::Utc;
use serde::Serialize;

use stockroom_core::{ItemId, StoreError, StoreResult};
use stockroom_storage::BlobStore;

use crate::item::{DEFAULT_MIN_STOCK, ItemDraft, ItemRecord, normalize_text};
use crate::query::{ItemFilter, SortOrder};
use crate::transfer;

/// Name of the blob slot holding the serialized collection.
pub const STORAGE_SLOT: &str = "warehouse_inventory_items";

/// Aggregate view over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_count: usize,
    /// Sum of quantity x price over all records (price defaults to 0).
    pub total_value: f64,
    pub low_stock_count: usize,
}

/// Owner of the item collection.
///
/// The store is the only mutator of the collection; every mutating operation
/// persists the full collection to the blob slot before returning. A failed
/// persist keeps the in-memory mutation and surfaces `Persistence`, leaving
/// memory ahead of durable state until the caller retries.
#[derive(Debug)]
pub struct InventoryStore<B: BlobStore> {
    blob: B,
    items: Vec<ItemRecord>,
}

impl<B: BlobStore> InventoryStore<B> {
    /// Store with an empty collection; the slot is not touched.
    pub fn new(blob: B) -> Self {
        Self {
            blob,
            items: Vec::new(),
        }
    }

    /// Restore the collection from the slot.
    ///
    /// The restore outcome is returned alongside the store: a missing or
    /// corrupt blob yields an empty collection and a non-fatal `Persistence`
    /// error for the caller to surface.
    pub fn open(blob: B) -> (Self, StoreResult<()>) {
        let mut store = Self::new(blob);
        let outcome = store.restore();
        (store, outcome)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate `draft`, append a fresh record and persist.
    pub fn create(&mut self, draft: ItemDraft) -> StoreResult<ItemRecord> {
        draft.validate()?;

        let now = Utc::now();
        let record = ItemRecord {
            id: ItemId::generate(),
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            category: normalize_text(draft.category.as_deref()),
            supplier: normalize_text(draft.supplier.as_deref()),
            location: normalize_text(draft.location.as_deref()),
            min_stock: Some(draft.min_stock.unwrap_or(DEFAULT_MIN_STOCK)),
            price: Some(draft.price.unwrap_or(0.0)),
            date_added: now,
            last_updated: now,
        };

        self.items.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace every field of the record except `id` and `date_added`.
    pub fn update(&mut self, id: &ItemId, draft: ItemDraft) -> StoreResult<ItemRecord> {
        draft.validate()?;

        let index = self.index_of(id).ok_or(StoreError::NotFound)?;
        let item = &mut self.items[index];
        item.name = draft.name.trim().to_string();
        item.quantity = draft.quantity;
        item.category = normalize_text(draft.category.as_deref());
        item.supplier = normalize_text(draft.supplier.as_deref());
        item.location = normalize_text(draft.location.as_deref());
        item.min_stock = Some(draft.min_stock.unwrap_or(DEFAULT_MIN_STOCK));
        item.price = Some(draft.price.unwrap_or(0.0));
        item.last_updated = Utc::now();

        let updated = item.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the record. Deleting an unknown id is `NotFound`.
    pub fn delete(&mut self, id: &ItemId) -> StoreResult<()> {
        let index = self.index_of(id).ok_or(StoreError::NotFound)?;
        self.items.remove(index);
        self.persist()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Filtered, sorted snapshot of the collection. Never mutates stored order.
    pub fn list(&self, filter: &ItemFilter, sort: SortOrder) -> Vec<ItemRecord> {
        let mut matched: Vec<ItemRecord> = self
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        sort.apply(&mut matched);
        matched
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total_count: self.items.len(),
            total_value: self.items.iter().map(ItemRecord::value).sum(),
            low_stock_count: self.items.iter().filter(|i| i.is_low_stock()).count(),
        }
    }

    /// Distinct non-empty categories in first-occurrence order, preceded by
    /// the synthetic `"all"` sentinel for filter UIs.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec!["all".to_string()];
        for item in &self.items {
            if let Some(category) = item.category.as_deref() {
                if !category.trim().is_empty() && !out[1..].iter().any(|c| c == category) {
                    out.push(category.to_string());
                }
            }
        }
        out
    }

    pub fn export_json(&self) -> StoreResult<String> {
        transfer::export_json(&self.items)
    }

    pub fn export_csv(&self) -> StoreResult<String> {
        transfer::export_csv(&self.items)
    }

    /// Validate and atomically replace the whole collection, then persist.
    ///
    /// Any invalid record rejects the document and leaves the current
    /// collection untouched. Returns the number of imported records.
    pub fn import_json(&mut self, blob: &str) -> StoreResult<usize> {
        let records = transfer::parse_import(blob)?;
        self.items = records;
        self.persist()?;
        Ok(self.items.len())
    }

    /// Write the full collection to the blob slot.
    pub fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.items)
            .map_err(|e| StoreError::persistence(format!("serialize collection: {e}")))?;
        self.blob
            .save(&blob)
            .map_err(|e| StoreError::persistence(e.to_string()))
    }

    /// Load the collection from the blob slot.
    ///
    /// Missing and corrupt blobs both leave the collection empty and report
    /// `Persistence`; the caller decides whether that is worth a warning.
    pub fn restore(&mut self) -> StoreResult<()> {
        let blob = match self.blob.load() {
            Ok(blob) => blob,
            Err(e) => {
                self.items.clear();
                return Err(StoreError::persistence(e.to_string()));
            }
        };

        let Some(blob) = blob else {
            self.items.clear();
            return Err(StoreError::persistence("no stored collection"));
        };

        match serde_json::from_str(&blob) {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                self.items.clear();
                Err(StoreError::persistence(format!("corrupt collection blob: {e}")))
            }
        }
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}
