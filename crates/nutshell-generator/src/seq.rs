use crate::HashGenerator;
use nutshell_core::LinkHash;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator producing prefixed sequential hashes.
///
/// Produces hashes like "qa000000", "qa000001". Useful in tests and in
/// single-writer deployments where derivation randomness is unwanted.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SequentialGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SequentialGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: prefix.into(),
        }
    }

    /// Creates a new sequential generator starting from a specific
    /// counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl HashGenerator for SequentialGenerator {
    fn derive(&self, _url: &str) -> LinkHash {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        LinkHash::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
