pub mod error;
pub mod health;
pub mod playlist;
pub mod users;

pub use error::AppError;
