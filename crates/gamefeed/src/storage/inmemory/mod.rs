//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that keeps each table in a `BTreeMap` keyed by `(service, sort key)`, so
//! descending partition scans behave like the real store. Data is not
//! persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamefeed::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
