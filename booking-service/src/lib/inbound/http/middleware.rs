use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use super::handlers::ApiError;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Identity decoded from a verified token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Why a request was refused at the gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthRejection {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not valid text or carries no token")]
    InvalidHeader,

    #[error("Token rejected: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("Token subject is not a user id")]
    InvalidSubject,

    #[error("Token role is not recognised")]
    InvalidRole,
}

/// Verify the request's token and resolve the caller's identity.
///
/// Accepts `Authorization: Bearer <token>` as well as the bare token.
pub fn authenticate_request(
    authenticator: &Authenticator,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, AuthRejection> {
    let token = extract_token(headers)?;
    let claims = authenticator.validate_token(token)?;

    let user_id = UserId::from_string(&claims.sub).map_err(|_| AuthRejection::InvalidSubject)?;
    let role = claims
        .role
        .parse::<Role>()
        .map_err(|_| AuthRejection::InvalidRole)?;

    Ok(AuthenticatedUser { user_id, role })
}

/// Middleware that gates protected routes.
///
/// Rejected requests get a 401 and never reach the handler.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticate_request(&authenticator, req.headers()) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(rejection) => {
            tracing::warn!(
                reason = %rejection,
                method = %req.method(),
                uri = %req.uri(),
                "Request rejected by auth gate"
            );
            ApiError::from(rejection).into_response()
        }
    }
}

fn extract_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthRejection::MissingHeader)?
        .to_str()
        .map_err(|_| AuthRejection::InvalidHeader)?
        .trim();

    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim(),
        _ => value,
    };
    if token.is_empty() {
        return Err(AuthRejection::InvalidHeader);
    }

    Ok(token)
}
