//! Table filter components for the Dioxus frontend.

pub mod api;
pub mod components;
pub mod query;
pub mod types;
mod utils;
