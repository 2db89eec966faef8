//! Shared types for table filters
//!
//! Data shapes exchanged between the host shell and the frontend, plus the
//! pure option/selection helpers the filter components are built on.

use serde::{Deserialize, Serialize};

pub mod filters;

pub use filters::{filter_options, group_options, toggle_selection};

// ─────────────────────────────────────────────────────────────────────────────
// Backend Records
// ─────────────────────────────────────────────────────────────────────────────

/// Lightweight record describing a named group within an organisation.
///
/// The backend may send more fields than these; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter Options
// ─────────────────────────────────────────────────────────────────────────────

/// A selectable entry in a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: i64,
}

impl From<&GroupSummary> for FilterOption {
    fn from(group: &GroupSummary) -> Self {
        Self {
            label: group.name.clone(),
            value: group.id,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Table scope handed to the frontend by the host shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Organisation whose groups populate the groups facet. Without it the
    /// facet issues no request.
    pub organisation_id: Option<i64>,
    pub project_id: String,
}
