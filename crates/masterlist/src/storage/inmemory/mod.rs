//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`UserRepository`]
//! that keeps every record in its encoded JSON form inside a HashMap wrapped
//! in `Arc<RwLock<_>>`. Useful for tests and local development where
//! persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use masterlist::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.put_user(&user).await?;
//! ```
//!
//! [`UserRepository`]: masterlist_core::storage::UserRepository

mod repository;

pub use repository::InMemoryRepository;
