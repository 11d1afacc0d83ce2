//! Hash generators for the nutshell short link store.

pub mod salted;
pub mod seq;

use nutshell_core::LinkHash;

pub use salted::{SaltedDigest, SaltedDigestSettings};
pub use seq::SequentialGenerator;

/// Trait for deriving record hashes.
///
/// Implementations are pure generators that don't interact with storage.
/// A derived hash only has to be effectively unique; actual uniqueness is
/// enforced by the store's unique-key constraint, and deduplication of
/// repeated URLs belongs to the store's find-or-create path.
pub trait HashGenerator: Send + Sync + 'static {
    /// Derives a short, URL-safe hash for the given URL.
    ///
    /// Derivation always succeeds, for any input including the empty
    /// string.
    fn derive(&self, url: &str) -> LinkHash;
}
