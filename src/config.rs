//! Environment-driven configuration.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    /// Load configuration from the environment, honoring a local `.env`.
    ///
    /// Unset or unparsable values fall back to the defaults the service
    /// shipped with (port 3000, a well-known development secret).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "supersecret".to_string());

        Self { port, jwt_secret }
    }
}
