use serde::{Deserialize, Serialize};

use crate::users::repo::Role;

/// Request body for updating a user. All fields are replaced; the password is
/// re-hashed before the write.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Plain confirmation payload for mutations that return no record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
