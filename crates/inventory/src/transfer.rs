//! Import/export of the full collection.
//!
//! Export serializes every record; import replaces the whole collection and
//! is all-or-nothing: one bad record rejects the entire document.

use std::collections::HashSet;

use chrono::NaiveDate;

use stockroom_core::{StoreError, StoreResult};

use crate::item::ItemRecord;

/// Header row of the CSV export, in column order.
pub const CSV_HEADER: [&str; 8] = [
    "Name",
    "Quantity",
    "Category",
    "Supplier",
    "Location",
    "Min Stock",
    "Price",
    "Date Added",
];

const CSV_DATE_FORMAT: &str = "%m/%d/%Y";

/// File name for an export produced on `date`, e.g. `inventory_2026-08-06.csv`.
pub fn export_file_name(extension: &str, date: NaiveDate) -> String {
    format!("inventory_{}.{extension}", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON array of all records.
pub fn export_json(items: &[ItemRecord]) -> StoreResult<String> {
    if items.is_empty() {
        return Err(StoreError::EmptyCollection);
    }
    serde_json::to_string_pretty(items)
        .map_err(|e| StoreError::persistence(format!("serialize collection: {e}")))
}

/// CSV document with a fixed header and one fully-quoted row per record.
///
/// Absent optional fields export as empty cells; present zeros export as `0`.
pub fn export_csv(items: &[ItemRecord]) -> StoreResult<String> {
    if items.is_empty() {
        return Err(StoreError::EmptyCollection);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| StoreError::persistence(format!("encode csv: {e}")))?;

    for item in items {
        let row: [String; 8] = [
            item.name.clone(),
            item.quantity.to_string(),
            item.category.clone().unwrap_or_default(),
            item.supplier.clone().unwrap_or_default(),
            item.location.clone().unwrap_or_default(),
            item.min_stock.map(|m| m.to_string()).unwrap_or_default(),
            item.price.map(|p| p.to_string()).unwrap_or_default(),
            item.date_added.format(CSV_DATE_FORMAT).to_string(),
        ];
        writer
            .write_record(&row)
            .map_err(|e| StoreError::persistence(format!("encode csv: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::persistence(format!("encode csv: {e}")))?;
    String::from_utf8(bytes).map_err(|e| StoreError::persistence(format!("encode csv: {e}")))
}

/// Parse an import document into records, validating every element.
///
/// `Format` errors cover unparseable or non-array documents; `Schema` errors
/// cover array elements that are not valid records (missing/blank id or name,
/// non-integer or negative quantity, duplicate ids).
pub fn parse_import(blob: &str) -> StoreResult<Vec<ItemRecord>> {
    let document: serde_json::Value = serde_json::from_str(blob)
        .map_err(|e| StoreError::format(format!("not valid JSON: {e}")))?;

    let serde_json::Value::Array(entries) = document else {
        return Err(StoreError::format("top-level value must be an array"));
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let record: ItemRecord = serde_json::from_value(entry)
            .map_err(|e| StoreError::schema(format!("record #{index}: {e}")))?;

        if record.id.as_str().trim().is_empty() {
            return Err(StoreError::schema(format!("record #{index}: id cannot be empty")));
        }
        if record.name.trim().is_empty() {
            return Err(StoreError::schema(format!("record #{index}: name cannot be empty")));
        }
        if record.quantity < 0 {
            return Err(StoreError::schema(format!(
                "record #{index}: quantity cannot be negative"
            )));
        }
        if !seen_ids.insert(record.id.as_str().to_string()) {
            return Err(StoreError::schema(format!(
                "record #{index}: duplicate id {}",
                record.id
            )));
        }

        records.push(record);
    }

    Ok(records)
}
