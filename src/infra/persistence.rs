//! The two persisted slots and how they load and save.

use serde_json::Error as SerdeError;
use thiserror::Error;

use crate::domain::Asset;

use super::kv::{KeyValueStore, KvError};

/// Slot holding the serialized asset collection.
pub const ASSETS_SLOT: &str = "assets.json";
/// Slot holding the next sequence number, as text.
pub const COUNTER_SLOT: &str = "counter.txt";

const FIRST_SEQUENCE: u64 = 1;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] KvError),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Loads and saves the asset collection and the sequence counter.
///
/// The two slots are written independently; there is no transactionality
/// across them. A crash between a collection save and a counter save costs
/// at worst a gap in the sequence, never a duplicate (see `load`).
pub struct PersistenceAdapter<S> {
    kv: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Read both slots.
    ///
    /// A missing collection slot means a fresh store. An unparseable one is
    /// logged and treated as fresh rather than failing the load. The
    /// returned counter defaults to 1 and is floored at one past the highest
    /// stored sequence number, so a lost or corrupt counter slot can never
    /// mint a duplicate.
    pub fn load(&self) -> (Vec<Asset>, u64) {
        let assets = match self.kv.get(ASSETS_SLOT) {
            Some(raw) => match serde_json::from_str::<Vec<Asset>>(&raw) {
                Ok(assets) => assets,
                Err(err) => {
                    log::warn!("discarding unparseable asset collection: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let stored = match self.kv.get(COUNTER_SLOT) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("discarding unparseable sequence counter: {err}");
                    FIRST_SEQUENCE
                }
            },
            None => FIRST_SEQUENCE,
        };

        let floor = assets
            .iter()
            .map(|a| a.sequence_number + 1)
            .max()
            .unwrap_or(FIRST_SEQUENCE);

        (assets, stored.max(floor))
    }

    /// Serialize and overwrite the full collection.
    pub fn save_assets(&mut self, assets: &[Asset]) -> Result<(), PersistError> {
        let json = serde_json::to_string(assets)?;
        self.kv.set(ASSETS_SLOT, &json)?;
        Ok(())
    }

    /// Overwrite the counter slot with the next sequence number to issue.
    pub fn save_counter(&mut self, next_sequence: u64) -> Result<(), PersistError> {
        self.kv.set(COUNTER_SLOT, &next_sequence.to_string())?;
        Ok(())
    }
}
