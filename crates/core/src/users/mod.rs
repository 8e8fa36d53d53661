mod failure;
mod types;

pub use failure::{failure_message, failure_status_code, HandlerFailure};
pub use types::{
    CreateUserResponse, GetUserResponse, UserInput, UserLookup, UserRecord, USER_CREATED_MESSAGE,
};
