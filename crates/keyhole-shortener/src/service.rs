use crate::allocator::IdAllocator;
use crate::error::ShortenerError;
use crate::repository::{Repository, UrlRecord};
use crate::shortener::{ShortLink, Shortener};
use async_trait::async_trait;
use jiff::Timestamp;
use keyhole_codec::Codec;
use std::sync::Arc;
use tracing::debug;

/// A concrete implementation of the `Shortener` trait.
///
/// Wraps a `Repository`, an `IdAllocator`, and the shared `Codec`:
/// shorten allocates an identifier, persists the record under it, and
/// encodes the code; resolve decodes the code and looks the record up.
/// The codec is constructed once at process start and shared read-only.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, A> {
    repository: Arc<R>,
    allocator: Arc<A>,
    codec: Arc<Codec>,
}

impl<R: Repository, A: IdAllocator> ShortenerService<R, A> {
    pub fn new(repository: R, allocator: A, codec: Arc<Codec>) -> Self {
        Self {
            repository: Arc::new(repository),
            allocator: Arc::new(allocator),
            codec,
        }
    }

    /// Validates that the URL has an http or https scheme and a host.
    fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        };

        if rest.is_empty() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        }

        let scheme = scheme.to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repository, A: IdAllocator> Shortener for ShortenerService<R, A> {
    async fn shorten(&self, original_url: &str) -> Result<ShortLink, ShortenerError> {
        Self::validate_url(original_url)?;

        // The allocator guarantees a fresh identifier, so the insert
        // cannot conflict and the encoded code is unique.
        let id = self.allocator.allocate();

        let record = UrlRecord {
            original_url: original_url.to_string(),
            created_at: Timestamp::now(),
        };
        self.repository.insert(id, record).await?;

        let code = self.codec.encode(id);
        debug!(id, code = %code, "shortened url");

        Ok(ShortLink {
            code,
            original_url: original_url.to_string(),
        })
    }

    async fn resolve(&self, code: &str) -> Result<UrlRecord, ShortenerError> {
        // Decode-invalid is an expected outcome, not a fault: a code we
        // never issued and a missing record look identical to callers.
        let id = self
            .codec
            .decode(code)
            .map_err(|_| ShortenerError::NotFound)?;

        self.repository
            .get(id)
            .await?
            .ok_or(ShortenerError::NotFound)
    }
}
