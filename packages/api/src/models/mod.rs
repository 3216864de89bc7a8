//! Data models exchanged with the notes API.

mod response;
mod user;

pub use response::ApiResponse;
pub use user::UserInfo;
