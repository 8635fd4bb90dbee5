//! Operation boundary between the tracker core and a presentation layer.
//!
//! Any front end (desktop shell, web view, test harness) drives the tracker
//! through the named operations on [`AssetTracker`] and receives output
//! through [`RenderSink`]. The core never reaches into presentation
//! internals, and no error escapes a mutating operation as a fault; failures
//! become user-visible status messages instead.

use crate::domain::{
    dashboard_metrics, project, Asset, AssetDraft, AssetFilter, AssetStatus, AssetStore,
    DashboardMetrics, StoreError, UNASSIGNED,
};
use crate::infra::KeyValueStore;

/// Severity of a user-visible status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient user-visible message. Display and auto-dismiss timing belong to
/// the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Render callback contract. The core pushes state; the sink owns all
/// markup, styling, and navigational chrome.
pub trait RenderSink {
    /// Full re-render: dashboard metrics plus the projected table.
    fn render(&mut self, metrics: &DashboardMetrics, rows: &[Asset], label: &str);
    /// Table-only re-render; metrics are unchanged.
    fn render_table(&mut self, rows: &[Asset], label: &str);
    /// Surface a transient status line.
    fn show_status(&mut self, message: &StatusMessage);
}

/// Record fields prepared for an edit form, with the unassigned sentinel
/// folded back to an empty input.
#[derive(Clone, Debug, PartialEq)]
pub struct EditPrefill {
    pub id: String,
    pub sequence_number: u64,
    pub name: String,
    pub category: String,
    pub assigned_to: String,
    pub status: AssetStatus,
}

impl From<&Asset> for EditPrefill {
    fn from(asset: &Asset) -> Self {
        let assigned_to = if asset.assigned_to == UNASSIGNED {
            String::new()
        } else {
            asset.assigned_to.clone()
        };
        Self {
            id: asset.id.clone(),
            sequence_number: asset.sequence_number,
            name: asset.name.clone(),
            category: asset.category.clone(),
            assigned_to,
            status: asset.status,
        }
    }
}

/// The tracker core: owns the asset store and the current view selector.
pub struct AssetTracker<S: KeyValueStore> {
    store: AssetStore<S>,
    filter: AssetFilter,
}

impl<S: KeyValueStore> AssetTracker<S> {
    /// Open against a key-value store, leaving the view on
    /// [`AssetFilter::All`].
    pub fn open(kv: S) -> Self {
        Self {
            store: AssetStore::open(kv),
            filter: AssetFilter::default(),
        }
    }

    pub fn filter(&self) -> AssetFilter {
        self.filter
    }

    pub fn store(&self) -> &AssetStore<S> {
        &self.store
    }

    /// Create an asset from form input. A blank name is rejected with an
    /// error status and no mutation.
    pub fn submit_new(&mut self, draft: AssetDraft, sink: &mut dyn RenderSink) {
        if draft.name.trim().is_empty() {
            sink.show_status(&StatusMessage::new(
                StatusKind::Error,
                "Asset name is required.",
            ));
            return;
        }

        match self.store.create(draft) {
            Ok(asset) => {
                sink.show_status(&StatusMessage::new(
                    StatusKind::Success,
                    format!(
                        "Asset added successfully with ID {}!",
                        asset.sequence_number
                    ),
                ));
                self.render_all(sink);
            }
            Err(err) => self.report_error(err, sink),
        }
    }

    /// Apply form input to an existing asset.
    pub fn submit_edit(&mut self, id: &str, draft: AssetDraft, sink: &mut dyn RenderSink) {
        if draft.name.trim().is_empty() {
            sink.show_status(&StatusMessage::new(
                StatusKind::Error,
                "Asset name is required.",
            ));
            return;
        }

        match self.store.update(id, draft.into()) {
            Ok(_) => {
                sink.show_status(&StatusMessage::new(
                    StatusKind::Success,
                    "Asset updated successfully!",
                ));
                self.render_all(sink);
            }
            Err(err) => self.report_error(err, sink),
        }
    }

    /// Record for form prefill; no mutation.
    pub fn request_edit(&self, id: &str) -> Option<EditPrefill> {
        self.store.find_by_id(id).map(EditPrefill::from)
    }

    /// Delete by id. Deleting an id that is already gone is a quiet no-op.
    pub fn request_delete(&mut self, id: &str, sink: &mut dyn RenderSink) {
        match self.store.delete(id) {
            Ok(true) => {
                sink.show_status(&StatusMessage::new(
                    StatusKind::Success,
                    "Asset deleted successfully!",
                ));
                self.render_all(sink);
            }
            Ok(false) => {}
            Err(err) => self.report_error(err, sink),
        }
    }

    /// Switch the table view. Stored data is untouched and the metrics keep
    /// their values, so only the table is re-rendered.
    pub fn set_filter(&mut self, filter: AssetFilter, sink: &mut dyn RenderSink) {
        self.filter = filter;
        let view = project(self.store.all(), self.filter);
        sink.render_table(&view.rows, view.label);
    }

    /// Recompute metrics and the current projection and push both.
    pub fn render_all(&self, sink: &mut dyn RenderSink) {
        let metrics = dashboard_metrics(self.store.all());
        let view = project(self.store.all(), self.filter);
        sink.render(&metrics, &view.rows, view.label);
    }

    fn report_error(&self, err: StoreError, sink: &mut dyn RenderSink) {
        let text = match err {
            StoreError::NotFound(id) => format!("No asset found with id {id}."),
            StoreError::Persist(err) => format!("Failed to save changes: {err}"),
        };
        sink.show_status(&StatusMessage::new(StatusKind::Error, text));
    }
}
