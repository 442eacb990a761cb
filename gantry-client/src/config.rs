//! Client configuration

/// Configuration for the platform API and card vault clients
///
/// # Environment variables
///
/// All fields can be set through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | GANTRY_API_URL | http://localhost:3000 | Platform API base URL |
/// | GANTRY_API_TOKEN | (unset) | Bearer token |
/// | GANTRY_HTTP_TIMEOUT_SECS | 30 | Request timeout in seconds |
/// | CARD_VAULT_URL | https://api.cardvault.io | Card vault base URL |
/// | CARD_VAULT_SECRET_KEY | (empty) | Vault secret key |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform API base URL (e.g., "https://app.gantry.dev")
    pub api_url: String,

    /// Bearer token for platform API authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Card vault base URL
    pub vault_url: String,

    /// Card vault secret key (basic auth username)
    pub vault_secret_key: String,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the URLs
    pub fn new(api_url: impl Into<String>, vault_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: None,
            timeout: 30,
            vault_url: vault_url.into(),
            vault_secret_key: String::new(),
        }
    }

    /// Load the configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("GANTRY_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            token: std::env::var("GANTRY_API_TOKEN").ok(),
            timeout: std::env::var("GANTRY_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            vault_url: std::env::var("CARD_VAULT_URL")
                .unwrap_or_else(|_| "https://api.cardvault.io".into()),
            vault_secret_key: std::env::var("CARD_VAULT_SECRET_KEY").unwrap_or_default(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the vault secret key
    pub fn with_vault_secret_key(mut self, key: impl Into<String>) -> Self {
        self.vault_secret_key = key.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}
