//! Storage contract for user records.
//!
//! Backends live in the server crate; this module only defines the trait they
//! implement, the error taxonomy they return, and how those errors map onto
//! HTTP status codes.

mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::UserRepository;
