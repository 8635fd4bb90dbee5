//! Local-first inventory tracker core.
//!
//! - Asset records persisted in a two-slot local key-value store.
//! - Human-facing sequence numbers that stay strictly increasing across
//!   restarts, next to opaque unique record ids.
//! - Dashboard metrics and filtered table views recomputed from the live
//!   collection on every mutation.
//!
//! Presentation is deliberately out of scope: a front end drives the tracker
//! through the named operations on [`AssetTracker`] and receives output
//! through the [`RenderSink`] callback trait.

pub mod app;
pub mod domain;
pub mod infra;

pub use app::{AssetTracker, EditPrefill, RenderSink, StatusKind, StatusMessage};
pub use domain::{
    dashboard_metrics, normalize_assignee, project, Asset, AssetDraft, AssetFilter, AssetPatch,
    AssetStatus, AssetStore, DashboardMetrics, FilteredView, StoreError, UNASSIGNED,
};
pub use infra::{
    FileKvStore, IdAllocator, KeyValueStore, KvError, MemoryKvStore, PersistError,
    PersistenceAdapter,
};
