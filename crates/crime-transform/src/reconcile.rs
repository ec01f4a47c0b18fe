//! Schema reconciliation: projecting a source header row onto the
//! canonical column set.

use std::collections::BTreeMap;

use crime_model::{CanonicalField, resolve_column};

/// The projection from a source table's columns onto canonical fields.
#[derive(Debug, Clone)]
pub struct SchemaMapping {
    resolved: BTreeMap<CanonicalField, usize>,
    /// Canonical fields no source column resolved to.
    pub unresolved: Vec<CanonicalField>,
    /// Source headers that were dropped: unrecognized names, plus later
    /// duplicates of an already-bound field.
    pub dropped: Vec<String>,
}

impl SchemaMapping {
    /// Column index bound to a canonical field, if any.
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.resolved.get(&field).copied()
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.resolved.contains_key(&field)
    }
}

/// Build the projection by case-insensitive lookup of every header
/// against the synonym table.
///
/// Headers are scanned in file order and the first header resolving to a
/// field wins, so the result is deterministic; re-running on the same
/// header set yields the same mapping. Unrecognized headers are dropped
/// silently; sources legitimately have different shapes.
pub fn reconcile(headers: &[String]) -> SchemaMapping {
    let mut resolved: BTreeMap<CanonicalField, usize> = BTreeMap::new();
    let mut dropped = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        match resolve_column(header) {
            Some(field) if !resolved.contains_key(&field) => {
                resolved.insert(field, idx);
            }
            _ => dropped.push(header.clone()),
        }
    }

    let unresolved = CanonicalField::ALL
        .into_iter()
        .filter(|field| !resolved.contains_key(field))
        .collect();

    SchemaMapping {
        resolved,
        unresolved,
        dropped,
    }
}
