//! HTTP surface
//! Mission: Shared application state and router assembly

pub mod dashboard;
pub mod export;

use crate::auth::{
    api as auth_api, auth_middleware, require_role, JwtHandler, UserStore, ADMIN_ONLY,
};
use crate::middleware::request_logging;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub jwt: Arc<JwtHandler>,
}

/// Assemble the full application router.
///
/// Routes are grouped by their gate chain: public, authenticated with any
/// role, and admin-only. The authentication gate always runs before the
/// role gate.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(auth_api::login))
        .route("/weather", get(dashboard::weather))
        .route("/social", get(dashboard::social_feed))
        .route("/public/users", get(dashboard::public_users))
        .with_state(state.clone());

    let authenticated = Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/calendar", get(dashboard::calendar))
        .route("/chat", get(dashboard::chat))
        .route_layer(middleware::from_fn_with_state(
            state.jwt.clone(),
            auth_middleware,
        ))
        .with_state(state.clone());

    let admin = Router::new()
        .route(
            "/users",
            get(auth_api::list_users).post(auth_api::create_user),
        )
        .route("/users/export", get(export::export_users))
        .route(
            "/users/:id",
            put(auth_api::update_user).delete(auth_api::delete_user),
        )
        .route("/reports", get(dashboard::reports))
        .route("/payments", get(dashboard::payments))
        // Layers added last run first: the authentication gate wraps the
        // role gate.
        .route_layer(middleware::from_fn_with_state(ADMIN_ONLY, require_role))
        .route_layer(middleware::from_fn_with_state(
            state.jwt.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}
