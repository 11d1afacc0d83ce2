use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated hash identifier for a short link record.
///
/// Hashes must be 3-32 characters long and contain only
/// alphanumeric characters, hyphens, or underscores.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkHash(String);

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 32;

impl LinkHash {
    /// Creates a new `LinkHash` after validating the input.
    ///
    /// Valid hashes are 3-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn new(hash: impl Into<String>) -> std::result::Result<Self, ServiceError> {
        let hash = hash.into();
        Self::validate(&hash)?;
        Ok(Self(hash))
    }

    /// Creates a `LinkHash` without validation.
    ///
    /// Use this only for hashes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(hash: &str) -> std::result::Result<(), ServiceError> {
        if hash.len() < MIN_LENGTH || hash.len() > MAX_LENGTH {
            return Err(ServiceError::InvalidHash(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                hash.len()
            )));
        }

        if !hash
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ServiceError::InvalidHash(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                hash
            )));
        }

        Ok(())
    }
}

impl Display for LinkHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hashes() {
        assert!(LinkHash::new("abc").is_ok());
        assert!(LinkHash::new("Abc-123_xyz").is_ok());
        assert!(LinkHash::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn too_short() {
        assert!(LinkHash::new("ab").is_err());
        assert!(LinkHash::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(LinkHash::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(LinkHash::new("abc def").is_err());
        assert!(LinkHash::new("abc/def").is_err());
        assert!(LinkHash::new("abc!def").is_err());
    }

    #[test]
    fn validation_reports_invalid_hash() {
        let err = LinkHash::new("ab").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidHash(_)));
    }

    #[test]
    fn display_round_trips() {
        let hash = LinkHash::new("abc123").unwrap();
        assert_eq!(hash.to_string(), "abc123");
        assert_eq!(hash.as_str(), "abc123");
    }
}
