mod operations;
mod requests;
mod types;

pub use operations::{validate_user_id, MAX_USER_ID_BYTES};
pub use requests::UpdateUser;
pub use types::User;
