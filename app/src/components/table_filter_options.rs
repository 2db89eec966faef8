//! Generic filter dropdown used by every table facet.
//!
//! Renders a toggle button with the facet title and, when open, an optional
//! search box above a checkbox list. Selection is owned by the caller: every
//! click reports the new selection through `on_change`.

use dioxus::prelude::*;
use table_filters_types::{filter_options, toggle_selection};

use crate::types::FilterOption;

#[derive(Props, Clone, PartialEq)]
pub struct TableFilterOptionsProps {
    pub class: Option<String>,
    pub title: Element,
    #[props(default)]
    pub is_loading: bool,
    /// Allow more than one selected option
    #[props(default)]
    pub multiple: bool,
    /// Show a search box narrowing the option list
    #[props(default)]
    pub show_search: bool,
    /// Render with the dropdown expanded
    #[props(default)]
    pub default_open: bool,
    pub options: Vec<FilterOption>,
    pub value: Vec<i64>,
    pub on_change: EventHandler<Vec<i64>>,
}

#[component]
pub fn TableFilterOptions(props: TableFilterOptionsProps) -> Element {
    let TableFilterOptionsProps {
        class,
        title,
        is_loading,
        multiple,
        show_search,
        default_open,
        options,
        value,
        on_change,
    } = props;

    let mut dropdown_open = use_signal(|| default_open);
    let mut search_query = use_signal(String::new);

    let visible = filter_options(&options, &search_query());
    let class = match class {
        Some(extra) => format!("table-filter {extra}"),
        None => "table-filter".to_string(),
    };
    let has_selection = !value.is_empty();

    rsx! {
        div {
            class: "{class}",
            button {
                class: "select table-filter-toggle",
                onclick: move |_| dropdown_open.set(!dropdown_open()),
                {title}
                span { class: "ml-auto", "▾" }
            }

            if dropdown_open() {
                // Invisible backdrop to catch clicks outside the dropdown
                div {
                    style: "position: fixed; inset: 0; z-index: 9999;",
                    onclick: move |_| dropdown_open.set(false),
                }
                div {
                    class: "table-filter-dropdown",
                    style: "position: absolute; z-index: 10000; min-width: 240px; max-height: 360px; overflow-y: auto;",

                    if show_search {
                        input {
                            class: "input table-filter-search",
                            r#type: "text",
                            placeholder: "Search...",
                            value: "{search_query}",
                            oninput: move |e| search_query.set(e.value()),
                        }
                    }

                    if is_loading {
                        div { class: "text-sm text-muted p-xs", "Loading..." }
                    } else if visible.is_empty() {
                        div { class: "text-sm text-muted p-xs", "No results" }
                    } else {
                        for option in visible {
                            {
                                let id = option.value;
                                let is_selected = value.contains(&id);
                                let current = value.clone();

                                rsx! {
                                    label {
                                        key: "{id}",
                                        class: "flex items-center gap-xs text-sm p-xs cursor-pointer",
                                        input {
                                            r#type: "checkbox",
                                            checked: is_selected,
                                            onchange: move |_| {
                                                report_toggle(on_change, &current, id, multiple);
                                            }
                                        }
                                        "{option.label}"
                                    }
                                }
                            }
                        }
                    }

                    if has_selection {
                        button {
                            class: "btn btn-sm w-full mt-xs",
                            onclick: move |_| on_change.call(Vec::new()),
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}

/// Report the selection that results from clicking option `id`.
fn report_toggle(on_change: EventHandler<Vec<i64>>, current: &[i64], id: i64, multiple: bool) {
    on_change.call(toggle_selection(current, id, multiple));
}

/// Facet title with a badge counting the selected options.
#[component]
pub fn FilterTitle(label: String, selected: usize) -> Element {
    rsx! {
        span { class: "table-filter-title",
            "{label}"
            if selected > 0 {
                span { class: "filter-badge", "{selected}" }
            }
        }
    }
}
