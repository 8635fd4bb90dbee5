//! The in-memory asset collection and its persistence discipline.

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::infra::{IdAllocator, KeyValueStore, PersistError, PersistenceAdapter};

use super::entities::{normalize_assignee, Asset, AssetDraft, AssetPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no asset with id {0}")]
    NotFound(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Single source of truth for asset records.
///
/// Every successful mutation has persisted the full collection before it
/// returns. When a persist fails the in-memory change is rolled back, so the
/// live collection never drifts from the stored blob.
pub struct AssetStore<S: KeyValueStore> {
    persistence: PersistenceAdapter<S>,
    allocator: IdAllocator,
    assets: Vec<Asset>,
}

impl<S: KeyValueStore> AssetStore<S> {
    /// Load both slots and seed the allocator. Corrupt stored data recovers
    /// to an empty collection (see [`PersistenceAdapter::load`]).
    pub fn open(kv: S) -> Self {
        let persistence = PersistenceAdapter::new(kv);
        let (assets, next_sequence) = persistence.load();
        Self {
            persistence,
            allocator: IdAllocator::new(next_sequence),
            assets,
        }
    }

    /// Create a record from a draft: normalize the assignee, allocate
    /// identity, stamp the creation time, append, persist.
    ///
    /// The draft's name is taken verbatim; rejecting a blank name is the
    /// caller's responsibility.
    pub fn create(&mut self, draft: AssetDraft) -> Result<Asset, StoreError> {
        let sequence_number = self.allocator.next_sequence(&mut self.persistence)?;
        let asset = Asset {
            id: IdAllocator::opaque_id(),
            sequence_number,
            name: draft.name,
            category: draft.category,
            assigned_to: normalize_assignee(&draft.assigned_to),
            status: draft.status,
            date_added: now_rfc3339(),
        };

        self.assets.push(asset.clone());
        if let Err(err) = self.persistence.save_assets(&self.assets) {
            self.assets.pop();
            return Err(err.into());
        }
        Ok(asset)
    }

    /// Merge a patch over an existing record. `id`, `sequence_number` and
    /// `date_added` are untouchable.
    pub fn update(&mut self, id: &str, patch: AssetPatch) -> Result<Asset, StoreError> {
        let index = self
            .assets
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let previous = self.assets[index].clone();
        let entry = &mut self.assets[index];
        if let Some(name) = patch.name {
            entry.name = name;
        }
        if let Some(category) = patch.category {
            entry.category = category;
        }
        if let Some(assigned_to) = patch.assigned_to {
            entry.assigned_to = normalize_assignee(&assigned_to);
        }
        if let Some(status) = patch.status {
            entry.status = status;
        }

        if let Err(err) = self.persistence.save_assets(&self.assets) {
            self.assets[index] = previous;
            return Err(err.into());
        }
        Ok(self.assets[index].clone())
    }

    /// Remove by id, reporting whether a record was removed. Deleting an
    /// unknown id is a quiet no-op that skips the redundant persist.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.assets.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        let removed = self.assets.remove(index);
        if let Err(err) = self.persistence.save_assets(&self.assets) {
            self.assets.insert(index, removed);
            return Err(err.into());
        }
        Ok(true)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Insertion-ordered view of the live collection.
    pub fn all(&self) -> &[Asset] {
        &self.assets
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
