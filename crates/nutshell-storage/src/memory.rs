use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use nutshell_core::{LinkHash, LinkRecord, RecordStore, StoreError, StoreResult};

/// In-memory implementation of the `RecordStore` trait using DashMap.
///
/// DashMap's sharded locks allow concurrent reads and writes to different
/// buckets without blocking. A second map indexes records by URL so that
/// find-or-create is atomic per URL.
///
/// Lock order: `url_index` may be held while touching `records`; paths that
/// write `records` first drop the guard before indexing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Records keyed by hash.
    records: DashMap<String, LinkRecord>,
    /// URL -> hash, written after the record it points at.
    url_index: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            url_index: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, record: LinkRecord) -> StoreResult<LinkRecord> {
        let key = record.hash.as_str().to_owned();

        let created = match self.records.entry(key.clone()) {
            Entry::Occupied(_) => return Err(StoreError::Duplicate(record.hash.to_string())),
            Entry::Vacant(slot) => slot.insert(record).clone(),
        };

        // First writer wins when URLs repeat across explicit-hash creates.
        self.url_index
            .entry(created.url.clone())
            .or_insert_with(|| key);

        Ok(created)
    }

    async fn find_by_hash(&self, hash: &LinkHash) -> StoreResult<Option<LinkRecord>> {
        Ok(self.records.get(hash.as_str()).map(|entry| entry.clone()))
    }

    async fn find_or_create(&self, url: &str, defaults: LinkRecord) -> StoreResult<LinkRecord> {
        match self.url_index.entry(url.to_owned()) {
            Entry::Occupied(indexed) => {
                let hash = indexed.get().clone();
                match self.records.get(&hash) {
                    Some(record) => Ok(record.clone()),
                    None => Err(StoreError::InvalidData(format!(
                        "url index points at missing record '{hash}'"
                    ))),
                }
            }
            Entry::Vacant(slot) => {
                let key = defaults.hash.as_str().to_owned();
                match self.records.entry(key.clone()) {
                    Entry::Occupied(_) => Err(StoreError::Duplicate(defaults.hash.to_string())),
                    Entry::Vacant(record_slot) => {
                        record_slot.insert(defaults.clone());
                        slot.insert(key);
                        Ok(defaults)
                    }
                }
            }
        }
    }

    async fn bump_hits(&self, hash: &LinkHash) -> StoreResult<()> {
        if let Some(mut record) = self.records.get_mut(hash.as_str()) {
            record.hits += 1;
        }
        Ok(())
    }

    async fn save(&self, record: LinkRecord) -> StoreResult<LinkRecord> {
        let key = record.hash.as_str().to_owned();

        let (stored, previous_url) = match self.records.get_mut(&key) {
            Some(mut slot) => {
                let previous_url = slot.url.clone();
                let mut stored = record;
                // Never roll back hit increments that landed after the
                // caller's read.
                stored.hits = stored.hits.max(slot.hits);
                *slot = stored.clone();
                (stored, previous_url)
            }
            None => {
                return Err(StoreError::Operation(format!(
                    "no stored record for hash '{}'",
                    record.hash
                )))
            }
        };

        if previous_url != stored.url {
            self.url_index
                .remove_if(&previous_url, |_, indexed| *indexed == key);
            self.url_index
                .entry(stored.url.clone())
                .or_insert_with(|| key);
        }

        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<LinkRecord>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
