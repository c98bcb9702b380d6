//! JWT Token Handler
//! Mission: Issue and verify signed, time-limited identity tokens

use crate::auth::models::{Claims, User};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Token lifetime in seconds. There is no revocation list, so a leaked
/// token stays usable until this window elapses.
const TOKEN_TTL_SECS: i64 = 3600;

/// JWT Handler for token operations
pub struct JwtHandler {
    secret: String,
}

impl JwtHandler {
    /// Create a new JWT handler with the process-wide signing secret.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a signed token for a user.
    ///
    /// Claims carry the user id, role, issued-at, and a one-hour expiry.
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id,
            role: user.role.clone(),
            iat: now as usize,
            exp: (now + TOKEN_TTL_SECS) as usize,
        };

        debug!(
            "Issuing token for user {} (id {}), expires in {}s",
            user.username, user.id, TOKEN_TTL_SECS
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verify signature integrity and expiry, returning the embedded claims.
    ///
    /// Malformed, tampered, and expired tokens all surface as the same
    /// opaque error; callers never see a partial claim set.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::UserRole;

    fn test_user() -> User {
        User {
            id: 1,
            name: "Admin".to_string(),
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        let token = handler.issue_token(&test_user()).unwrap();
        assert!(!token.is_empty());

        let claims = handler.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS as usize);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        assert!(handler.verify_token("not.a.token").is_err());
        assert!(handler.verify_token("").is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let issuer = JwtHandler::new("secret1".to_string());
        let verifier = JwtHandler::new("secret2".to_string());

        let token = issuer.issue_token(&test_user()).unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test-secret-key-12345";
        let handler = JwtHandler::new(secret.to_string());

        // Expiry far enough in the past to clear the default validation leeway.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: 1,
            role: UserRole::Admin,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(handler.verify_token(&token).is_err());
    }

    #[test]
    fn test_claims_carry_role_of_issued_user() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());
        let user = User {
            id: 2,
            name: "User".to_string(),
            username: "user".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        };

        let token = handler.issue_token(&user).unwrap();
        let claims = handler.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 2);
        assert_eq!(claims.role, UserRole::User);
    }
}
