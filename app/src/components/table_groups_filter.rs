//! Groups facet filter.
//!
//! Lists the groups of the current organisation as options of the generic
//! filter dropdown. Selection state belongs to the caller.

use dioxus::prelude::*;
use table_filters_types::group_options;
use tracing::debug;

use crate::components::table_filter_options::{FilterTitle, TableFilterOptions};
use crate::query::use_group_summaries;

#[derive(Props, Clone, PartialEq)]
pub struct TableGroupsFilterProps {
    /// Selected group ids
    #[props(default)]
    pub value: Vec<i64>,
    pub on_change: EventHandler<Vec<i64>>,
    pub class: Option<String>,
    #[props(default)]
    pub is_loading: bool,
    /// Project the table belongs to. Groups are organisation-scoped, so it
    /// does not take part in the query.
    #[props(into)]
    pub project_id: String,
    /// Organisation whose groups are listed; no request is made without it
    pub organisation_id: Option<i64>,
    /// Render with the dropdown expanded
    #[props(default)]
    pub default_open: bool,
}

#[component]
pub fn TableGroupsFilter(props: TableGroupsFilterProps) -> Element {
    let project_id = props.project_id.clone();
    let mounted_organisation = props.organisation_id;
    use_hook(move || {
        debug!(%project_id, organisation_id = ?mounted_organisation, "groups filter mounted");
    });

    // Track organisation in a signal so the query reacts to changes
    let mut organisation_id = use_signal(|| props.organisation_id);
    if *organisation_id.peek() != props.organisation_id {
        organisation_id.set(props.organisation_id);
    }

    let groups = use_group_summaries(organisation_id);
    let options = use_memo(move || group_options(groups.data().as_deref()));

    let selected = props.value.len();

    rsx! {
        TableFilterOptions {
            class: props.class.clone(),
            title: rsx! {
                FilterTitle { label: "Groups".to_string(), selected }
            },
            is_loading: props.is_loading,
            multiple: true,
            show_search: true,
            default_open: props.default_open,
            options: options(),
            value: props.value.clone(),
            on_change: props.on_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        value: Vec<i64>,
        organisation_id: Option<i64>,
        default_open: bool,
    }

    #[component]
    fn Harness(props: HarnessProps) -> Element {
        rsx! {
            TableGroupsFilter {
                value: props.value.clone(),
                on_change: move |_: Vec<i64>| {},
                project_id: "12",
                organisation_id: props.organisation_id,
                default_open: props.default_open,
            }
        }
    }

    fn render(value: Vec<i64>, organisation_id: Option<i64>, default_open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                value,
                organisation_id,
                default_open,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_title_shows_selected_count() {
        let html = render(vec![1, 2, 3], None, false);
        assert!(html.contains("Groups"));
        assert!(html.contains(r#"<span class="filter-badge">3</span>"#));
    }

    #[test]
    fn test_title_without_selection_has_no_badge() {
        let html = render(vec![], None, false);
        assert!(html.contains("Groups"));
        assert!(!html.contains("filter-badge"));
    }

    #[test]
    fn test_no_organisation_lists_no_groups() {
        let html = render(vec![], None, true);
        assert!(html.contains("table-filter-search"));
        assert!(html.contains("No results"));
        assert!(!html.contains(r#"type="checkbox""#));
    }
}
