use async_trait::async_trait;
use nutshell_core::{
    GenerateRequest, LinkHash, LinkRecord, RecordStore, ServiceError, ShortLinks, StoreError,
    UpdatePatch,
};
use nutshell_generator::HashGenerator;
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, ServiceError>;

/// A concrete implementation of the `ShortLinks` trait.
///
/// This service wraps a `RecordStore` and a `HashGenerator` to handle:
/// - Hash assignment (caller-supplied or derived)
/// - URL-keyed find-or-create deduplication
/// - Hit counting on retrieval
///
/// Hash uniqueness is enforced by the store's unique-key constraint; no
/// application-level locking is performed and no operation is retried.
#[derive(Debug, Clone)]
pub struct ShortLinkService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S: RecordStore, G: HashGenerator> ShortLinkService<S, G> {
    /// Creates a new `ShortLinkService` over a store and a generator.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<S: RecordStore, G: HashGenerator> ShortLinks for ShortLinkService<S, G> {
    async fn generate(&self, request: GenerateRequest) -> Result<LinkRecord> {
        match request.hash {
            // An explicit hash is always honored, with an unconditional create.
            Some(hash) => {
                trace!(hash = %hash, url = %request.url, "creating record with explicit hash");
                let record = LinkRecord::new(hash, request.url, request.data);
                self.store
                    .create(record)
                    .await
                    .map_err(store_to_service_error)
            }
            None => {
                let hash = self.generator.derive(&request.url);
                trace!(hash = %hash, url = %request.url, "derived hash for record");
                let defaults = LinkRecord::new(hash, request.url.clone(), request.data);
                // An existing record for this URL wins; the derived hash is
                // then discarded.
                self.store
                    .find_or_create(&request.url, defaults)
                    .await
                    .map_err(store_to_service_error)
            }
        }
    }

    async fn retrieve(&self, hash: &LinkHash) -> Result<LinkRecord> {
        trace!(hash = %hash, "retrieving record");

        // The lookup and the hit increment are issued independently; the
        // returned record reflects whichever count the read observed. The
        // increment is best-effort and its result is not surfaced.
        let (found, bumped) = tokio::join!(
            self.store.find_by_hash(hash),
            self.store.bump_hits(hash)
        );

        if let Err(error) = bumped {
            debug!(hash = %hash, error = %error, "hit increment was not applied");
        }

        match found.map_err(store_to_service_error)? {
            Some(record) => Ok(record),
            None => Err(ServiceError::NotFound(hash.to_string())),
        }
    }

    async fn update(&self, hash: &LinkHash, patch: UpdatePatch) -> Result<LinkRecord> {
        let found = self
            .store
            .find_by_hash(hash)
            .await
            .map_err(store_to_service_error)?;

        let Some(mut record) = found else {
            return Err(ServiceError::NotFound(hash.to_string()));
        };

        if let Some(url) = patch.url {
            record.url = url;
        }
        if let Some(data) = patch.data {
            record.merge_data(data);
        }

        debug!(hash = %hash, "saving updated record");
        self.store
            .save(record)
            .await
            .map_err(ServiceError::SaveFailed)
    }

    async fn hits(&self, hash: &LinkHash) -> Result<u64> {
        match self
            .store
            .find_by_hash(hash)
            .await
            .map_err(store_to_service_error)?
        {
            Some(record) => Ok(record.hits),
            None => Err(ServiceError::NotFound(hash.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<LinkRecord>> {
        self.store.list_all().await.map_err(store_to_service_error)
    }
}

/// Converts a StoreError to a ServiceError.
fn store_to_service_error(error: StoreError) -> ServiceError {
    match error {
        StoreError::Duplicate(hash) => ServiceError::DuplicateHash(hash),
        other => ServiceError::Store(other),
    }
}
