use serde::{Deserialize, Serialize};

use crate::users::repo::Role;

/// JWT payload carried by every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // user ID
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i32,
    pub message: &'static str,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub id: i32,
    pub username: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_known_roles() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw123","role":"user"}"#)
                .expect("valid body");
        assert_eq!(req.role, Role::User);

        let req: RegisterRequest =
            serde_json::from_str(r#"{"username":"bob","password":"pw123","role":"admin"}"#)
                .expect("valid body");
        assert_eq!(req.role, Role::Admin);
    }

    #[test]
    fn register_request_rejects_unknown_role() {
        let res = serde_json::from_str::<RegisterRequest>(
            r#"{"username":"mallory","password":"pw123","role":"superuser"}"#,
        );
        assert!(res.is_err());
    }
}
