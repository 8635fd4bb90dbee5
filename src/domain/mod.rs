//! Domain logic for asset tracking lives here.

pub mod entities;
pub mod filter;
pub mod metrics;
pub mod store;

pub use entities::{normalize_assignee, Asset, AssetDraft, AssetPatch, AssetStatus, UNASSIGNED};
pub use filter::{project, AssetFilter, FilteredView};
pub use metrics::{dashboard_metrics, DashboardMetrics};
pub use store::{AssetStore, StoreError};
