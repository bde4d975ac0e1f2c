use crate::error::StorageError;
use crate::repository::{Repository, UrlRecord};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap's sharded locks let concurrent reads and writes to different
/// buckets proceed without blocking each other, which fits the
/// read-heavy redirect workload.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<u64, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, id: u64, record: UrlRecord) -> Result<(), StorageError> {
        if self.storage.contains_key(&id) {
            return Err(StorageError::Conflict(id));
        }
        self.storage.insert(id, record);
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<Option<UrlRecord>, StorageError> {
        Ok(self.storage.get(&id).map(|entry| entry.value().clone()))
    }
}
