pub mod health;
pub mod http;
#[cfg(feature = "aws")]
pub mod lambda;
pub mod users;
