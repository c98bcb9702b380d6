//! Authentication API Endpoints
//! Mission: Provide login and user management endpoints

use crate::api::AppState;
use crate::auth::{
    models::{LoginRequest, LoginResponse, PublicUser, UserRole},
    user_store::StoreError,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    info!("🔐 Login attempt: {}", payload.username);

    let user = state
        .store
        .verify_credentials(&payload.username, &payload.password)
        .ok_or_else(|| {
            warn!("❌ Failed login attempt: {}", payload.username);
            ApiError::InvalidCredentials
        })?;

    let token = state
        .jwt
        .issue_token(&user)
        .map_err(|_| ApiError::Internal)?;

    info!(
        "✅ Login successful: {} ({})",
        user.username,
        user.role.as_str()
    );

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

/// List users - GET /users (Admin only), optional ?role= equality filter
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersQuery>,
) -> Json<Vec<PublicUser>> {
    let role = params.role.map(UserRole::from);
    Json(state.store.list(role.as_ref()))
}

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

/// Partial update request; absent fields retain their prior value.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

/// Mutation response carrying the affected record.
#[derive(Debug, Serialize)]
pub struct UserMutationResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create user - POST /users (Admin only)
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserMutationResponse>, ApiError> {
    let user = state.store.create(
        &payload.name,
        &payload.username,
        &payload.password,
        payload.role,
    )?;

    Ok(Json(UserMutationResponse {
        message: "User added",
        user,
    }))
}

/// Update user - PUT /users/:id (Admin only)
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserMutationResponse>, ApiError> {
    let user = state.store.update(id, payload.name, payload.role)?;

    Ok(Json(UserMutationResponse {
        message: "User updated",
        user,
    }))
}

/// Delete user - DELETE /users/:id (Admin only). Idempotent.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Json<MessageResponse> {
    state.store.delete(id);

    Json(MessageResponse {
        message: "User deleted",
    })
}

/// Handler-level API errors, rendered as `{"message": ...}` JSON.
#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    UserNotFound,
    UsernameTaken,
    ExportFailed,
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UsernameTaken => ApiError::UsernameTaken,
            StoreError::NotFound => ApiError::UserNotFound,
            StoreError::Hash(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::UsernameTaken => (StatusCode::CONFLICT, "Username already exists"),
            ApiError::ExportFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Export error"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
