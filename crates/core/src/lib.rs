pub mod api;
pub mod identifier;
pub mod serde;
pub mod storage;
pub mod users;
