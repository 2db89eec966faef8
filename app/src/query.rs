//! Group summary queries
//!
//! Fetches the groups of an organisation through the Tauri API and keeps the
//! last good response per organisation in a process-wide cache, so a remounted
//! filter renders immediately while its refetch is in flight.

use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::api;
use crate::types::GroupSummary;

static GROUP_SUMMARY_CACHE: GlobalSignal<SummaryCache> = Signal::global(SummaryCache::default);

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Last successful group list per organisation id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryCache {
    entries: HashMap<i64, Vec<GroupSummary>>,
}

impl SummaryCache {
    pub fn insert(&mut self, organisation_id: i64, groups: Vec<GroupSummary>) {
        self.entries.insert(organisation_id, groups);
    }

    /// Cached groups for `organisation_id`. Never answers for another organisation.
    pub fn snapshot(&self, organisation_id: Option<i64>) -> Option<&[GroupSummary]> {
        organisation_id
            .and_then(|id| self.entries.get(&id))
            .map(Vec::as_slice)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Query
// ─────────────────────────────────────────────────────────────────────────────

/// A completed fetch, tagged with the organisation it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFetch {
    pub organisation_id: i64,
    pub groups: Vec<GroupSummary>,
}

/// Pick the groups a query should expose right now.
///
/// Fresh data wins when it belongs to the current organisation; otherwise the
/// cached snapshot for that organisation is used. No organisation, no data.
pub fn resolve_groups(
    organisation_id: Option<i64>,
    fetched: Option<&GroupFetch>,
    cache: &SummaryCache,
) -> Option<Vec<GroupSummary>> {
    let id = organisation_id?;

    fetched
        .filter(|f| f.organisation_id == id)
        .map(|f| f.groups.as_slice())
        .or_else(|| cache.snapshot(Some(id)))
        .map(<[GroupSummary]>::to_vec)
}

/// Handle returned by [`use_group_summaries`].
#[derive(Clone, Copy)]
pub struct GroupSummariesQuery {
    organisation_id: Signal<Option<i64>>,
    resource: Resource<Option<GroupFetch>>,
}

impl GroupSummariesQuery {
    /// Current groups, or `None` while nothing is available for the organisation.
    pub fn data(&self) -> Option<Vec<GroupSummary>> {
        let organisation_id = (self.organisation_id)();
        let fetched = self.resource.read();
        let fetched = match &*fetched {
            Some(Some(fetch)) => Some(fetch),
            _ => None,
        };
        resolve_groups(organisation_id, fetched, &GROUP_SUMMARY_CACHE.read())
    }
}

/// Fetch the group summaries of the organisation held in `organisation_id`.
///
/// No request is issued while the id is `None`. Refetches whenever the id
/// changes. Failures are logged and leave the query without fresh data.
pub fn use_group_summaries(organisation_id: Signal<Option<i64>>) -> GroupSummariesQuery {
    let resource = use_resource(move || {
        let current = organisation_id();
        async move {
            let Some(id) = current else {
                debug!("no organisation, skipping group summaries request");
                return None;
            };

            match api::get_group_summaries(id).await {
                Ok(groups) => {
                    debug!(organisation_id = id, count = groups.len(), "loaded group summaries");
                    GROUP_SUMMARY_CACHE.write().insert(id, groups.clone());
                    Some(GroupFetch {
                        organisation_id: id,
                        groups,
                    })
                }
                Err(err) => {
                    warn!(organisation_id = id, error = %err, "failed to load group summaries");
                    None
                }
            }
        }
    });

    GroupSummariesQuery {
        organisation_id,
        resource,
    }
}
