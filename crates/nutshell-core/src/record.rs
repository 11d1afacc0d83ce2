use crate::hash::LinkHash;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form metadata attached to a short link record.
pub type LinkData = Map<String, Value>;

/// A stored short link record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Unique hash identifier, either caller-supplied or generated.
    pub hash: LinkHash,
    /// The target URL.
    pub url: String,
    /// Optional free-form metadata.
    pub data: Option<LinkData>,
    /// Number of times the record has been retrieved.
    pub hits: u64,
}

impl LinkRecord {
    /// Creates a fresh record with a zero hit count.
    pub fn new(hash: LinkHash, url: impl Into<String>, data: Option<LinkData>) -> Self {
        Self {
            hash,
            url: url.into(),
            data,
            hits: 0,
        }
    }

    /// Merges `updates` into the record's metadata.
    ///
    /// New keys are added and existing keys are overwritten; keys absent
    /// from `updates` are left untouched.
    pub fn merge_data(&mut self, updates: LinkData) {
        match &mut self.data {
            Some(existing) => {
                for (key, value) in updates {
                    existing.insert(key, value);
                }
            }
            None => self.data = Some(updates),
        }
    }
}
