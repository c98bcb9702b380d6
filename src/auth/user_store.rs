//! User Storage
//! Mission: Own the in-memory user list and all credential checks

use crate::auth::models::{PublicUser, User, UserRole};
use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use parking_lot::RwLock;
use std::fmt;
use tracing::{info, warn};

/// Failures surfaced by store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Username already present (case-sensitive match, checked at creation only).
    UsernameTaken,
    /// No record with the requested id.
    NotFound,
    /// Password hashing failed.
    Hash(bcrypt::BcryptError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UsernameTaken => write!(f, "Username already exists"),
            StoreError::NotFound => write!(f, "User not found"),
            StoreError::Hash(e) => write!(f, "Password hashing failed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<bcrypt::BcryptError> for StoreError {
    fn from(e: bcrypt::BcryptError) -> Self {
        StoreError::Hash(e)
    }
}

/// In-memory credential store.
///
/// The user list lives for the lifetime of the process; there is no
/// persistence across restarts. Handlers run on a multi-threaded runtime,
/// so every access goes through the lock - mutations take the write half,
/// reads the read half. No lock is ever held across an await point.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create a store seeded with the two default accounts.
    pub fn new() -> Result<Self> {
        let users = vec![
            User {
                id: 1,
                name: "Admin".to_string(),
                username: "admin".to_string(),
                password_hash: hash("admin123", DEFAULT_COST)
                    .context("Failed to hash seed password")?,
                role: UserRole::Admin,
            },
            User {
                id: 2,
                name: "User".to_string(),
                username: "user".to_string(),
                password_hash: hash("user123", DEFAULT_COST)
                    .context("Failed to hash seed password")?,
                role: UserRole::User,
            },
        ];

        info!("🔐 Seeded credential store with default admin and user accounts");
        warn!("⚠️  Default credentials active - change them before exposing this service");

        Ok(Self {
            users: RwLock::new(users),
        })
    }

    /// List users, optionally filtered by exact role. Password hashes never
    /// leave the store through this path.
    pub fn list(&self, role: Option<&UserRole>) -> Vec<PublicUser> {
        self.users
            .read()
            .iter()
            .filter(|u| role.map_or(true, |r| &u.role == r))
            .map(PublicUser::from_user)
            .collect()
    }

    /// Create a new user.
    ///
    /// The next id is the current list length plus one. After deletions this
    /// can collide with a surviving id; that is the id scheme the dashboard
    /// was built around and it is kept as-is.
    pub fn create(
        &self,
        name: &str,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<PublicUser, StoreError> {
        let mut users = self.users.write();

        if users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken);
        }

        let user = User {
            id: users.len() as u32 + 1,
            name: name.to_string(),
            username: username.to_string(),
            password_hash: hash(password, DEFAULT_COST)?,
            role,
        };
        let public = PublicUser::from_user(&user);
        users.push(user);

        info!("✅ Created user: {} ({})", public.username, public.role.as_str());

        Ok(public)
    }

    /// Partial update of name and/or role. Username and password are
    /// immutable after creation.
    pub fn update(
        &self,
        id: u32,
        name: Option<String>,
        role: Option<UserRole>,
    ) -> Result<PublicUser, StoreError> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(role) = role {
            user.role = role;
        }

        Ok(PublicUser::from_user(user))
    }

    /// Remove a user by id. Idempotent: deleting an absent id is a no-op.
    pub fn delete(&self, id: u32) {
        self.users.write().retain(|u| u.id != id);
        info!("🗑️  Deleted user id {id} (if present)");
    }

    /// Look up a user by username and check the password against the stored
    /// bcrypt hash. Never compares plaintext.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<User> {
        let users = self.users.read();
        let user = users.iter().find(|u| u.username == username)?;

        match verify(password, &user.password_hash) {
            Ok(true) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
