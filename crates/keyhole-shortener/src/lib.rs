//! Service layer for the Keyhole URL shortener.
//!
//! Wires the codec to its two external collaborators: an identifier
//! allocator and a persistent store. The codec itself stays pure; this
//! crate owns URL validation, allocation, and storage plumbing.

pub mod allocator;
pub mod error;
pub mod repository;
pub mod service;
pub mod shortener;

pub use allocator::{IdAllocator, SequenceAllocator};
pub use error::{ShortenerError, StorageError};
pub use repository::{InMemoryRepository, Repository, UrlRecord};
pub use service::ShortenerService;
pub use shortener::{ShortLink, Shortener};
