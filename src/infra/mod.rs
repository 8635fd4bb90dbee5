//! Storage plumbing: key-value slots, the persistence adapter, id minting.

pub mod ident;
pub mod kv;
pub mod persistence;

pub use ident::IdAllocator;
pub use kv::{FileKvStore, KeyValueStore, KvError, MemoryKvStore};
pub use persistence::{PersistError, PersistenceAdapter, ASSETS_SLOT, COUNTER_SLOT};
