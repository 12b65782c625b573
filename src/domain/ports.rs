use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A reply remembered under an idempotency key.
#[derive(Debug, Clone, PartialEq)]
pub struct IdempotencyRecord {
    /// The raw payload the reply was produced for.
    pub request: Value,
    pub status: u16,
    pub body: Value,
}

#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<IdempotencyRecord>>;

    /// Stores `record` unless `key` is already taken.
    ///
    /// Returns the record already held under `key`, if any, in which case
    /// nothing is written.
    async fn insert_if_absent(
        &self,
        key: String,
        record: IdempotencyRecord,
    ) -> Result<Option<IdempotencyRecord>>;
}

pub type IdempotencyStoreBox = Box<dyn IdempotencyStore>;
