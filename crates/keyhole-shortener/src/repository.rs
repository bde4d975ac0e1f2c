pub mod memory;

use crate::error::StorageError;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

pub use memory::InMemoryRepository;

/// A stored URL record, keyed by the identifier the allocator produced.
///
/// The repository never sees short codes; codes are derived from the
/// identifier on the way out and resolved back to it on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Maps identifiers to URL records.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts a new record. Returns `Err(Conflict)` if the identifier
    /// is already stored; with a correct allocator that never happens.
    async fn insert(&self, id: u64, record: UrlRecord) -> Result<(), StorageError>;

    /// Retrieves the record for an identifier, or `None`.
    async fn get(&self, id: u64) -> Result<Option<UrlRecord>, StorageError>;
}
