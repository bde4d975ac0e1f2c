use crate::error::ShortenerError;
use crate::repository::UrlRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A freshly minted short link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLink {
    /// The obfuscated code callers use to reach the URL.
    pub code: String,
    /// The original URL behind the code.
    pub original_url: String,
}

impl ShortLink {
    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.code)
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL: allocates an identifier, stores the record, and
    /// returns the encoded short link.
    async fn shorten(&self, original_url: &str) -> Result<ShortLink, ShortenerError>;

    /// Resolves a short code back to its stored record.
    ///
    /// Codes this deployment never issued and codes whose record is
    /// missing both resolve to [`ShortenerError::NotFound`].
    async fn resolve(&self, code: &str) -> Result<UrlRecord, ShortenerError>;
}
