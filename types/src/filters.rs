//! Option derivation and selection helpers for filter dropdowns.
//!
//! These functions hold all the non-rendering logic of the filter
//! components so the components themselves stay thin.

use crate::{FilterOption, GroupSummary};

/// Build the sorted option list for a set of group summaries.
///
/// Missing data (still loading, skipped, or failed) yields an empty list.
/// Every summary produces exactly one option; nothing is deduplicated.
///
/// # Examples
/// ```
/// use table_filters_types::{GroupSummary, group_options};
/// let groups = vec![
///     GroupSummary { id: 3, name: "Beta".into() },
///     GroupSummary { id: 1, name: "alpha".into() },
/// ];
/// let options = group_options(Some(groups.as_slice()));
/// assert_eq!(options[0].label, "alpha");
/// assert_eq!(options[1].value, 3);
/// assert!(group_options(None).is_empty());
/// ```
pub fn group_options(groups: Option<&[GroupSummary]>) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = groups
        .unwrap_or_default()
        .iter()
        .map(FilterOption::from)
        .collect();
    // Case-insensitive first, exact label as tie-break
    options.sort_by_cached_key(|o| (o.label.to_lowercase(), o.label.clone()));
    options
}

/// Narrow options to those whose label contains `query`, ignoring case.
///
/// A blank query keeps every option.
pub fn filter_options(options: &[FilterOption], query: &str) -> Vec<FilterOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }

    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Compute the selection that results from clicking `id`.
///
/// In multiple mode the id is removed if selected, appended otherwise.
/// In single mode the id replaces the selection, or clears it when it was
/// already the only selected id.
pub fn toggle_selection(selected: &[i64], id: i64, multiple: bool) -> Vec<i64> {
    let is_selected = selected.contains(&id);

    if multiple {
        let mut next = selected.to_vec();
        if is_selected {
            next.retain(|v| *v != id);
        } else {
            next.push(id);
        }
        next
    } else if is_selected && selected.len() == 1 {
        Vec::new()
    } else {
        vec![id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: i64, name: &str) -> GroupSummary {
        GroupSummary {
            id,
            name: name.to_string(),
        }
    }

    fn option(label: &str, value: i64) -> FilterOption {
        FilterOption {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_group_options_sorted_by_label() {
        let groups = vec![group(3, "Beta"), group(1, "alpha")];
        assert_eq!(
            group_options(Some(groups.as_slice())),
            vec![option("alpha", 1), option("Beta", 3)]
        );
    }

    #[test]
    fn test_group_options_case_tie_break() {
        let groups = vec![group(1, "ops"), group(2, "Ops"), group(3, "Admins")];
        assert_eq!(
            group_options(Some(groups.as_slice())),
            vec![option("Admins", 3), option("Ops", 2), option("ops", 1)]
        );
    }

    #[test]
    fn test_group_options_no_data() {
        assert!(group_options(None).is_empty());
        assert!(group_options(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_group_options_keeps_duplicates() {
        let groups = vec![group(2, "Dev"), group(2, "Dev"), group(5, "Dev")];
        let options = group_options(Some(groups.as_slice()));
        assert_eq!(options.len(), 3);
        assert_eq!(
            options.iter().map(|o| o.value).collect::<Vec<_>>(),
            vec![2, 2, 5]
        );
    }

    #[test]
    fn test_group_options_idempotent() {
        let groups = vec![group(4, "Support"), group(9, "design"), group(1, "QA")];
        let first = group_options(Some(groups.as_slice()));
        let second = group_options(Some(groups.as_slice()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_options_follow_new_data() {
        let before = vec![group(1, "a"), group(2, "b"), group(3, "c")];
        let after = vec![group(8, "Zeta"), group(7, "eta")];

        assert_eq!(group_options(Some(before.as_slice())).len(), 3);
        assert_eq!(
            group_options(Some(after.as_slice())),
            vec![option("eta", 7), option("Zeta", 8)]
        );
    }

    #[test]
    fn test_filter_options() {
        let options = vec![option("Admins", 1), option("Developers", 2), option("QA", 3)];

        assert_eq!(filter_options(&options, ""), options);
        assert_eq!(filter_options(&options, "   "), options);
        assert_eq!(filter_options(&options, "dev"), vec![option("Developers", 2)]);
        assert_eq!(filter_options(&options, " QA "), vec![option("QA", 3)]);
        assert_eq!(
            filter_options(&options, "s"),
            vec![option("Admins", 1), option("Developers", 2)]
        );
        assert!(filter_options(&options, "xyz").is_empty());
    }

    #[test]
    fn test_toggle_selection_multiple() {
        assert_eq!(toggle_selection(&[], 4, true), vec![4]);
        assert_eq!(toggle_selection(&[1, 2], 3, true), vec![1, 2, 3]);
        assert_eq!(toggle_selection(&[1, 2, 3], 2, true), vec![1, 3]);
        assert_eq!(toggle_selection(&[5], 5, true), Vec::<i64>::new());
    }

    #[test]
    fn test_toggle_selection_single() {
        assert_eq!(toggle_selection(&[], 4, false), vec![4]);
        assert_eq!(toggle_selection(&[1], 2, false), vec![2]);
        assert_eq!(toggle_selection(&[2], 2, false), Vec::<i64>::new());
        assert_eq!(toggle_selection(&[1, 2], 2, false), vec![2]);
    }
}
