//! Filtered table views over the asset collection.

use std::collections::HashSet;

use super::entities::{Asset, AssetStatus};

/// View mode controlling which subset of assets is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetFilter {
    #[default]
    All,
    Assigned,
    Faulty,
    ActiveUsers,
}

impl AssetFilter {
    /// Heading shown above the table for this view.
    pub fn label(&self) -> &'static str {
        match self {
            AssetFilter::All => "All Assets",
            AssetFilter::Assigned => "Assigned Assets",
            AssetFilter::Faulty => "Faulty Assets",
            AssetFilter::ActiveUsers => "Assets Assigned to Active Users",
        }
    }
}

/// Ordered rows for one view, plus its heading.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredView {
    pub rows: Vec<Asset>,
    pub label: &'static str,
}

/// Project the collection through a filter.
///
/// Selection never mutates the collection and rows keep insertion order.
/// The active-users view collects the distinct active assignees first and
/// then keeps every asset held by one of them.
pub fn project(assets: &[Asset], filter: AssetFilter) -> FilteredView {
    let rows = match filter {
        AssetFilter::All => assets.to_vec(),
        AssetFilter::Assigned => by_status(assets, AssetStatus::Assigned),
        AssetFilter::Faulty => by_status(assets, AssetStatus::Faulty),
        AssetFilter::ActiveUsers => {
            let active: HashSet<String> =
                assets.iter().filter_map(Asset::active_assignee).collect();
            assets
                .iter()
                .filter(|a| {
                    let key = a.assigned_to.trim().to_lowercase();
                    !key.is_empty() && active.contains(&key)
                })
                .cloned()
                .collect()
        }
    };

    FilteredView {
        rows,
        label: filter.label(),
    }
}

fn by_status(assets: &[Asset], status: AssetStatus) -> Vec<Asset> {
    assets
        .iter()
        .filter(|a| a.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(seq: u64, status: AssetStatus, assigned_to: &str) -> Asset {
        Asset {
            id: format!("asset-{seq}"),
            sequence_number: seq,
            name: format!("Asset {seq}"),
            category: "Furniture".to_string(),
            assigned_to: assigned_to.to_string(),
            status,
            date_added: "2026-01-05T09:30:00Z".to_string(),
        }
    }

    fn sample() -> Vec<Asset> {
        vec![
            asset(1, AssetStatus::Assigned, "Alice"),
            asset(2, AssetStatus::Faulty, "Unassigned"),
            asset(3, AssetStatus::Assigned, "alice"),
            asset(4, AssetStatus::Available, ""),
        ]
    }

    #[test]
    fn all_returns_collection_unchanged() {
        let assets = sample();
        let view = project(&assets, AssetFilter::All);
        assert_eq!(view.rows, assets);
        assert_eq!(view.label, "All Assets");
    }

    #[test]
    fn faulty_selects_only_faulty_rows() {
        let view = project(&sample(), AssetFilter::Faulty);
        assert_eq!(view.label, "Faulty Assets");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].sequence_number, 2);
    }

    #[test]
    fn assigned_keeps_insertion_order() {
        let view = project(&sample(), AssetFilter::Assigned);
        assert_eq!(view.label, "Assigned Assets");
        let sequences: Vec<u64> = view.rows.iter().map(|a| a.sequence_number).collect();
        assert_eq!(sequences, [1, 3]);
    }

    #[test]
    fn active_users_matches_assignees_case_insensitively() {
        let view = project(&sample(), AssetFilter::ActiveUsers);
        assert_eq!(view.label, "Assets Assigned to Active Users");
        let sequences: Vec<u64> = view.rows.iter().map(|a| a.sequence_number).collect();
        assert_eq!(sequences, [1, 3]);
    }

    #[test]
    fn active_users_is_empty_when_nobody_holds_anything() {
        let assets = vec![
            asset(1, AssetStatus::Available, "Unassigned"),
            asset(2, AssetStatus::Retired, "  "),
        ];
        let view = project(&assets, AssetFilter::ActiveUsers);
        assert!(view.rows.is_empty());
    }
}
