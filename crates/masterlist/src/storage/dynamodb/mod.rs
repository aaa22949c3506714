//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`UserRepository`]
//! using `aws-sdk-dynamodb`.
//!
//! [`UserRepository`]: masterlist_core::storage::UserRepository

mod connector;
mod conversions;
mod error;
mod repository;

pub use connector::ConnectError;
pub use repository::DynamoDbRepository;
