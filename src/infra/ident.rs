//! Record identity: opaque unique ids plus the human-facing sequence.

use uuid::Uuid;

use super::kv::KeyValueStore;
use super::persistence::{PersistError, PersistenceAdapter};

/// Mints record identity.
///
/// The incremented counter is durably written before an issued number is
/// committed in memory, so consecutive calls hand out consecutive integers
/// with no repeats across restarts, and a failed write consumes nothing.
#[derive(Debug)]
pub struct IdAllocator {
    next_sequence: u64,
}

impl IdAllocator {
    pub fn new(next_sequence: u64) -> Self {
        Self { next_sequence }
    }

    /// Globally-unique opaque id for a new record.
    pub fn opaque_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Issue the next sequence number, persisting the successor first.
    pub fn next_sequence<S: KeyValueStore>(
        &mut self,
        persistence: &mut PersistenceAdapter<S>,
    ) -> Result<u64, PersistError> {
        let issued = self.next_sequence;
        persistence.save_counter(issued + 1)?;
        self.next_sequence = issued + 1;
        Ok(issued)
    }

    /// The value the next successful call will hand out.
    pub fn peek(&self) -> u64 {
        self.next_sequence
    }
}
