//! Dashboard aggregation over the live asset collection.

use std::collections::HashSet;

use super::entities::{Asset, AssetStatus};

/// Summary counts shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub assigned: usize,
    pub faulty: usize,
    /// Distinct assignees, case-insensitive, excluding blank entries and the
    /// unassigned sentinel.
    pub active_users: usize,
}

/// Derive the summary counts from a collection snapshot.
///
/// Recomputed from scratch on every call; no incremental caching, so the
/// counts are correct under any mutation sequence.
pub fn dashboard_metrics(assets: &[Asset]) -> DashboardMetrics {
    let assigned = assets
        .iter()
        .filter(|a| a.status == AssetStatus::Assigned)
        .count();
    let faulty = assets
        .iter()
        .filter(|a| a.status == AssetStatus::Faulty)
        .count();

    let active_users = assets
        .iter()
        .filter_map(Asset::active_assignee)
        .collect::<HashSet<_>>()
        .len();

    DashboardMetrics {
        total: assets.len(),
        assigned,
        faulty,
        active_users,
    }
}
