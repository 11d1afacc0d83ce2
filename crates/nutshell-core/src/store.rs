use crate::error::StoreResult;
use crate::hash::LinkHash;
use crate::record::LinkRecord;
use async_trait::async_trait;

/// The persistence contract for short link records.
///
/// Backends enforce hash uniqueness; everything else (drivers, pooling,
/// retry policy) is an implementation concern and stays behind this trait.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Inserts a new record. Returns `Err(Duplicate)` if the hash is taken.
    async fn create(&self, record: LinkRecord) -> StoreResult<LinkRecord>;

    /// Retrieves the record for a given hash.
    /// Returns `None` if the hash does not exist.
    async fn find_by_hash(&self, hash: &LinkHash) -> StoreResult<Option<LinkRecord>>;

    /// Returns the existing record with this exact URL, or inserts
    /// `defaults` and returns it. Atomic at the store level.
    async fn find_or_create(&self, url: &str, defaults: LinkRecord) -> StoreResult<LinkRecord>;

    /// Increments the hit counter on every record matching the hash
    /// (in practice exactly one). Zero matches is not an error.
    async fn bump_hits(&self, hash: &LinkHash) -> StoreResult<()>;

    /// Persists a mutated record, keyed by its hash.
    ///
    /// Hit increments that landed after the caller's read must survive
    /// the write.
    async fn save(&self, record: LinkRecord) -> StoreResult<LinkRecord>;

    /// Returns all records, unfiltered, in store-defined order.
    async fn list_all(&self) -> StoreResult<Vec<LinkRecord>>;
}
