//! Per-user avatar storage.
//!
//! The store is a flat, per-user container of named byte entries. The cache
//! layer only ever consumes this seam; `FsUserStore` is the directory-backed
//! default and `MemoryStore` the in-memory twin.

use crate::foundation::error::MonogramResult;

pub mod fs;
pub mod memory;

pub use fs::FsUserStore;
pub use memory::MemoryStore;

/// A named byte entry inside a user's store.
pub trait StoreEntry {
    /// Entry name, unique within the store.
    fn name(&self) -> &str;

    /// Read the entry's current content.
    fn bytes(&self) -> MonogramResult<Vec<u8>>;

    /// Replace the entry's content.
    fn write(&mut self, data: &[u8]) -> MonogramResult<()>;

    /// Remove the entry. Deleting an entry that is already gone is a no-op.
    fn delete(self) -> MonogramResult<()>;
}

/// Result of [`UserStore::create`].
///
/// Creation is racy by nature: another request may have created the same
/// entry between a lookup miss and the create call. The contract is explicit
/// about it — callers get the now-existing entry instead of an error and
/// proceed idempotently.
#[derive(Debug)]
pub enum CreateOutcome<E> {
    /// The entry did not exist and was created empty.
    Created(E),
    /// The entry already existed; a concurrent creator won the race.
    Existing(E),
}

impl<E> CreateOutcome<E> {
    /// The entry, regardless of who created it.
    pub fn into_entry(self) -> E {
        match self {
            Self::Created(e) | Self::Existing(e) => e,
        }
    }
}

/// A flat per-user container of named byte entries.
///
/// `get` models the expected cache miss as `None` rather than an error;
/// store failures other than "not there" surface as errors.
pub trait UserStore {
    type Entry: StoreEntry;

    /// Every entry currently in the store, in unspecified order.
    fn list(&self) -> MonogramResult<Vec<Self::Entry>>;

    /// Look up one entry by name.
    fn get(&self, name: &str) -> MonogramResult<Option<Self::Entry>>;

    /// Create an entry, or surface the concurrent creator's one.
    fn create(&self, name: &str) -> MonogramResult<CreateOutcome<Self::Entry>>;
}
