//! Authentication Models
//! Mission: Define user accounts, roles, and token claims

use serde::{Deserialize, Serialize};

/// User account as held by the credential store.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
    pub role: UserRole,
}

/// Role tag used for RBAC.
///
/// The role set is open-ended: "admin" and "user" are the roles this
/// deployment ships with, but unknown tags are accepted and round-trip
/// through serialization unchanged. Role-gated routes only allow-list
/// known roles, so an unknown tag can authenticate but never passes an
/// admin gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    User,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Other(tag) => tag,
        }
    }
}

impl From<String> for UserRole {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            _ => UserRole::Other(tag),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u32, // subject (user id)
    pub role: UserRole,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
}

/// Sanitized user view returned by every read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub role: UserRole,
}

impl PublicUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}
