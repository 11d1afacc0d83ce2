//! Short link service library.
//!
//! This crate provides [`ShortLinkService`], the orchestration core of the
//! nutshell record store: it assigns hashes (caller-supplied or derived),
//! persists records through a [`RecordStore`][nutshell_core::RecordStore],
//! counts retrievals, and applies merge-style updates.
//!
//! # Example
//!
//! ```rust
//! use nutshell_core::{GenerateRequest, ShortLinks};
//! use nutshell_generator::SaltedDigest;
//! use nutshell_service::ShortLinkService;
//! use nutshell_storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ShortLinkService::new(InMemoryStore::new(), SaltedDigest::default());
//!
//! let record = service
//!     .generate(GenerateRequest::for_url("http://example.com"))
//!     .await?;
//!
//! let retrieved = service.retrieve(&record.hash).await?;
//! assert_eq!(retrieved.url, "http://example.com");
//!
//! assert_eq!(service.hits(&record.hash).await?, 1);
//! # Ok(())
//! # }
//! ```

pub mod service;

pub use service::ShortLinkService;
