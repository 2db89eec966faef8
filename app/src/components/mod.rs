//! UI Components
//!
//! Table filter components: the generic options dropdown and the facet
//! filters built on top of it.

pub mod table_filter_options;
pub mod table_groups_filter;

pub use table_filter_options::{FilterTitle, TableFilterOptions};
pub use table_groups_filter::TableGroupsFilter;
