//! In-memory storage backend for testing and local development.
//!
//! Stores records and blobs in HashMaps wrapped in `Arc<RwLock<_>>`. Data is
//! not persisted and will be lost when the last clone is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use usersvc::storage::inmemory::{InMemoryBlobStore, InMemoryRepository};
//!
//! let users = InMemoryRepository::new();
//! let blobs = InMemoryBlobStore::new();
//! ```

mod repository;

pub use repository::{InMemoryBlobStore, InMemoryRepository};
