use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::foundation::error::{MonogramError, MonogramResult};
use crate::store::{CreateOutcome, StoreEntry, UserStore};

/// In-memory [`UserStore`].
///
/// Clones share the same underlying map, so entries handed out earlier keep
/// observing later mutations — the same aliasing a directory store has.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Total number of entry writes since construction.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for MemoryStore {
    type Entry = MemoryEntry;

    fn list(&self) -> MonogramResult<Vec<MemoryEntry>> {
        let names: Vec<String> = self.lock().entries.keys().cloned().collect();
        Ok(names
            .into_iter()
            .map(|name| MemoryEntry {
                name,
                inner: self.inner.clone(),
            })
            .collect())
    }

    fn get(&self, name: &str) -> MonogramResult<Option<MemoryEntry>> {
        if self.lock().entries.contains_key(name) {
            Ok(Some(MemoryEntry {
                name: name.to_string(),
                inner: self.inner.clone(),
            }))
        } else {
            Ok(None)
        }
    }

    fn create(&self, name: &str) -> MonogramResult<CreateOutcome<MemoryEntry>> {
        let entry = MemoryEntry {
            name: name.to_string(),
            inner: self.inner.clone(),
        };
        let mut inner = self.lock();
        if inner.entries.contains_key(name) {
            Ok(CreateOutcome::Existing(entry))
        } else {
            inner.entries.insert(name.to_string(), Vec::new());
            Ok(CreateOutcome::Created(entry))
        }
    }
}

/// Handle to one [`MemoryStore`] entry.
#[derive(Clone, Debug)]
pub struct MemoryEntry {
    name: String,
    inner: Arc<Mutex<Inner>>,
}

impl StoreEntry for MemoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn bytes(&self) -> MonogramResult<Vec<u8>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(&self.name)
            .cloned()
            .ok_or(MonogramError::NotFound)
    }

    fn write(&mut self, data: &[u8]) -> MonogramResult<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.entries.insert(self.name.clone(), data.to_vec());
        inner.writes += 1;
        Ok(())
    }

    fn delete(self) -> MonogramResult<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .remove(&self.name);
        Ok(())
    }
}
