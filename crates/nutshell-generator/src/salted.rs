use crate::HashGenerator;
use nutshell_core::LinkHash;
use rand::RngCore;
use typed_builder::TypedBuilder;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Settings for [`SaltedDigest`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SaltedDigestSettings {
    /// Length of the derived hash, in characters.
    #[builder(default = 6)]
    length: usize,
}

/// Derives hashes from a blake3 digest of the URL plus a fresh random salt.
///
/// The salt randomizes the digest across calls, so deriving twice for the
/// same URL yields unrelated hashes.
#[derive(Debug, Clone)]
pub struct SaltedDigest {
    settings: SaltedDigestSettings,
}

impl SaltedDigest {
    pub fn new(settings: SaltedDigestSettings) -> Self {
        Self { settings }
    }

    /// Length of the hashes this generator derives.
    pub fn length(&self) -> usize {
        self.settings.length
    }
}

impl Default for SaltedDigest {
    fn default() -> Self {
        Self::new(SaltedDigestSettings::builder().build())
    }
}

impl HashGenerator for SaltedDigest {
    fn derive(&self, url: &str) -> LinkHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(url.as_bytes());

        let mut salt = [0u8; 8];
        rand::rng().fill_bytes(&mut salt);
        hasher.update(&salt);

        let digest = hasher.finalize();
        // The base62 alphabet stays within the validated hash character set.
        LinkHash::new_unchecked(base62(digest.as_bytes(), self.settings.length))
    }
}

/// Folds digest bytes into a base62 token of the requested length.
fn base62(bytes: &[u8], length: usize) -> String {
    let mut acc: u128 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        acc ^= (*byte as u128) << ((i % 16) * 8);
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(ALPHABET[(acc % 62) as usize] as char);
        acc /= 62;
        if acc == 0 {
            // Keep emitting characters once the accumulator drains.
            acc = 0x9E37_79B9_7F4A_7C15;
        }
    }
    out
}
