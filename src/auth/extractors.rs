use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{auth::jwt::JwtKeys, error::ApiError, state::AppState, users::repo::{Role, User}};

/// Extracts and validates the session token, returning the caller's user ID.
///
/// The Authorization header carries the token verbatim; a `Bearer ` prefix is
/// tolerated and stripped.
#[derive(Debug)]
pub struct AuthUser(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        match keys.verify(token) {
            Ok(claims) => Ok(AuthUser(claims.sub)),
            Err(_) => {
                warn!("invalid or expired token");
                Err(ApiError::Unauthenticated)
            }
        }
    }
}

/// Authenticated caller whose stored role is `admin`.
///
/// Authentication always runs first; the role is only consulted on a verified
/// identity, so an anonymous caller gets 401, never 403.
#[derive(Debug)]
pub struct AdminUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user_id) = AuthUser::from_request_parts(parts, state).await?;

        let user = User::find_by_id(&state.db, user_id)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        if user.role != Role::Admin {
            warn!(user_id = %user_id, "non-admin caller on admin route");
            return Err(ApiError::PermissionDenied);
        }
        Ok(AdminUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: &str) -> Parts {
        let (parts, _) = Request::builder()
            .header(axum::http::header::AUTHORIZATION, value)
            .body(())
            .expect("request builds")
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn accepts_verbatim_token() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(12).expect("sign");
        let mut parts = parts_with_auth(&token);
        let AuthUser(id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extractor accepts");
        assert_eq!(id, 12);
    }

    #[tokio::test]
    async fn accepts_bearer_prefixed_token() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(3).expect("sign");
        let mut parts = parts_with_auth(&format!("Bearer {token}"));
        let AuthUser(id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extractor accepts");
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let state = AppState::fake();
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let state = AppState::fake();
        let mut parts = parts_with_auth("definitely-not-a-token");
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
