//! Frontend type definitions
//!
//! Re-exports the shared table-filter types used by the frontend.
//! Facet filters and the generic options widget both take their selection
//! callback as `EventHandler<Vec<i64>>`, so it passes straight through.

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports from table-filters-types (shared with backend)
// ─────────────────────────────────────────────────────────────────────────────

pub use table_filters_types::{FilterOption, GroupSummary, TableConfig};
