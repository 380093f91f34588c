//! Persisted print layout — the durable record of which roles land on which page.
//!
//! Written once by the packer, read many times at render time. The JSON field
//! names (`availableHeight`, `availableWidth`, `rolesIds`) are load-bearing:
//! existing persisted records use them, so they must survive any refactor.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One experience's slice of a printed page: the experience id and the subset
/// of its role ids placed on that page, in placement order.
///
/// A split experience produces one record per page it spans, all sharing the
/// same `experience_id`. Records with an empty `roles_ids` are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintConfigContent {
    pub experience_id: String,
    /// Historical field name — persisted records say `rolesIds`, not `roleIds`.
    pub roles_ids: Vec<String>,
}

/// One printed page: 1-based number, leftover capacity after packing, and the
/// content records placed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPage {
    pub number: u32,
    /// Capacity remaining after packing. May be negative when an oversized
    /// header was force-placed.
    pub available_height: f64,
    /// Tracked for downstream consumers; the packer never decrements it.
    pub available_width: f64,
    pub contents: Vec<PrintConfigContent>,
}

/// The persisted print layout. `Default` is the "nothing measured yet"
/// sentinel: zero pages, distinct from a measured single empty page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintConfig {
    pub pages: Vec<PrintPage>,
}

impl PrintConfig {
    /// Validates an untyped persisted value against the schema.
    ///
    /// Malformed records yield `None` so the caller falls back to rendering
    /// the resume unpaginated instead of failing the whole page.
    pub fn from_value(value: &Value) -> Option<PrintConfig> {
        match serde_json::from_value(value.clone()) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Discarding malformed print config: {e}");
                None
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
