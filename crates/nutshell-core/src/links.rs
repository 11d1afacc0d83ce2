use crate::hash::LinkHash;
use crate::record::{LinkData, LinkRecord};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ServiceError>;

/// Parameters for creating a short link record.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The target URL to shorten.
    pub url: String,
    /// Optional free-form metadata stored with the record.
    pub data: Option<LinkData>,
    /// Optional caller-supplied hash. When present it is honored
    /// unconditionally; when absent a hash is derived.
    pub hash: Option<LinkHash>,
}

impl GenerateRequest {
    /// Creates a request for the given URL with no metadata and no
    /// caller-supplied hash.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data: None,
            hash: None,
        }
    }
}

/// A partial update to an existing record.
///
/// `None` fields are left unchanged. A present `url` replaces the stored
/// URL wholesale; present `data` is merged key-by-key into the stored
/// metadata.
#[derive(Debug, Clone, Default)]
pub struct UpdatePatch {
    pub url: Option<String>,
    pub data: Option<LinkData>,
}

/// The short link record lifecycle.
#[async_trait]
pub trait ShortLinks: Send + Sync + 'static {
    /// Creates a record, honoring a caller-supplied hash when present and
    /// falling back to find-or-create keyed by the URL otherwise.
    /// Returns the resulting record, existing or newly created.
    async fn generate(&self, request: GenerateRequest) -> Result<LinkRecord>;

    /// Looks up a record by hash and counts the retrieval as one hit.
    /// Fails with `NotFound` if no record matches.
    async fn retrieve(&self, hash: &LinkHash) -> Result<LinkRecord>;

    /// Applies a patch to the record with the given hash.
    /// Fails with `NotFound` if no record matches.
    async fn update(&self, hash: &LinkHash, patch: UpdatePatch) -> Result<LinkRecord>;

    /// Returns the hit count for the given hash.
    /// Fails with `NotFound` if no record matches.
    async fn hits(&self, hash: &LinkHash) -> Result<u64>;

    /// Returns all records, unfiltered, in store-defined order.
    async fn list(&self) -> Result<Vec<LinkRecord>>;
}
