use crate::domain::ports::{IdempotencyRecord, IdempotencyStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory idempotency store.
///
/// Uses `Arc<RwLock<HashMap<String, IdempotencyRecord>>>` so clones share the
/// same keys. Nothing survives a restart, and entries are never expired or
/// evicted, so the map grows with every distinct key.
#[derive(Default, Clone)]
pub struct InMemoryIdempotencyStore {
    records: Arc<RwLock<HashMap<String, IdempotencyRecord>>>,
}

impl InMemoryIdempotencyStore {
    /// Creates a new, empty in-memory idempotency store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdempotencyStore for InMemoryIdempotencyStore {
    async fn get(&self, key: &str) -> Result<Option<IdempotencyRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn insert_if_absent(
        &self,
        key: String,
        record: IdempotencyRecord,
    ) -> Result<Option<IdempotencyRecord>> {
        let mut records = self.records.write().await;
        match records.entry(key) {
            Entry::Occupied(existing) => Ok(Some(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(None)
            }
        }
    }
}
