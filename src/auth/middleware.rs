//! Authentication Middleware
//! Mission: Gate requests on bearer tokens and role membership

use crate::auth::{
    jwt::JwtHandler,
    models::{Claims, UserRole},
};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Allow-set for admin-only route groups.
pub const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// Authentication gate.
///
/// Extracts the bearer credential from the Authorization header, verifies
/// it, and attaches the resolved claims to the request extensions. A missing
/// credential short-circuits with 401; a failed verification short-circuits
/// with 403. Verification failure deliberately shares its status with a role
/// mismatch, so callers cannot tell a tampered token from an expired one.
pub async fn auth_middleware(
    State(jwt): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_owned)
        .ok_or(AuthError::MissingToken)?;

    let claims = jwt
        .verify_token(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Authorization gate.
///
/// Constructed with a fixed role allow-set at route-registration time via
/// `middleware::from_fn_with_state`. Must run after `auth_middleware`; if
/// the claims extension is absent the request is rejected rather than
/// passed through.
pub async fn require_role(
    State(allowed): State<&'static [UserRole]>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or(AuthError::RoleMismatch)?;

    if !allowed.contains(&claims.role) {
        return Err(AuthError::RoleMismatch);
    }

    Ok(next.run(req).await)
}

/// Gate rejection reasons.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    RoleMismatch,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Gate rejections are status-only; no body distinguishes the cases.
        let status = match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken | AuthError::RoleMismatch => StatusCode::FORBIDDEN,
        };
        status.into_response()
    }
}
