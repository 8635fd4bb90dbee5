use serde::{Deserialize, Serialize};

/// Sentinel stored for assets that nobody currently holds.
pub const UNASSIGNED: &str = "Unassigned";

/// Lifecycle status of an asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    Faulty,
    Retired,
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Faulty => "Faulty",
            AssetStatus::Retired => "Retired",
        }
    }
}

/// A tracked inventory record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Opaque unique identifier; the primary key for lookup and mutation.
    pub id: String,
    /// Human-facing reference, strictly increasing in creation order and
    /// never reused, even after deletion.
    pub sequence_number: u64,
    pub name: String,
    /// Category vocabulary is owned by the embedding UI; the core treats it
    /// as an opaque string.
    pub category: String,
    /// Trimmed holder name, or [`UNASSIGNED`]; never blank in stored form.
    pub assigned_to: String,
    pub status: AssetStatus,
    /// RFC 3339 creation timestamp; immutable after creation.
    pub date_added: String,
}

impl Asset {
    /// Normalized assignee for distinct-user counting: trimmed and
    /// lower-cased, `None` for a blank value or the [`UNASSIGNED`] sentinel.
    pub fn active_assignee(&self) -> Option<String> {
        let trimmed = self.assigned_to.trim();
        if trimmed.is_empty() || self.assigned_to == UNASSIGNED {
            return None;
        }
        Some(trimmed.to_lowercase())
    }
}

/// Form input for creating or editing an asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub assigned_to: String,
    pub status: AssetStatus,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<AssetStatus>,
}

impl From<AssetDraft> for AssetPatch {
    fn from(draft: AssetDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            assigned_to: Some(draft.assigned_to),
            status: Some(draft.status),
        }
    }
}

/// Collapse raw assignee input to stored form: trimmed, blank becomes
/// [`UNASSIGNED`].
pub fn normalize_assignee(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNASSIGNED.to_string()
    } else {
        trimmed.to_string()
    }
}
