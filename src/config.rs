//! Application Configuration
//!
//! Resolved once at compile time from `SHOE_ADMIN_*` environment variables,
//! with builder-style overrides for tests.

use tracing::level_filters::LevelFilter;

/// Production backend
pub const DEFAULT_API_BASE: &str = "https://americanexpress-shoes-backend-2m38.onrender.com/api/v1";

/// Public USD-based rate table
pub const DEFAULT_RATE_API: &str = "https://open.er-api.com/v6/latest/USD";

/// Local currency units per USD when every rate source fails
pub const DEFAULT_CONVERSION_RATE: f64 = 12.0;

/// localStorage key holding the session flag
pub const AUTH_STORAGE_KEY: &str = "isAuthenticated";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API base URL (e.g., "https://host/api/v1")
    pub api_base: String,
    /// Third-party exchange-rate endpoint
    pub rate_api: String,
    /// Currency code looked up in the third-party rate table
    pub local_currency: String,
    pub fallback_rate: f64,
    pub admin_user: String,
    pub admin_password: String,
    pub log_level: LevelFilter,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

impl AppConfig {
    /// Build from compile-time environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("SHOE_ADMIN_API_BASE") {
            config.api_base = base.to_string();
        }
        if let Some(url) = option_env!("SHOE_ADMIN_RATE_API") {
            config.rate_api = url.to_string();
        }
        if let Some(user) = option_env!("SHOE_ADMIN_USER") {
            config.admin_user = user.to_string();
        }
        if let Some(password) = option_env!("SHOE_ADMIN_PASSWORD") {
            config.admin_password = password.to_string();
        }
        if let Some(level) = option_env!("SHOE_ADMIN_LOG") {
            config.log_level = console_logger::parse_level(level);
        }
        config
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_rate_api(mut self, url: impl Into<String>) -> Self {
        self.rate_api = url.into();
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.admin_user = user.into();
        self.admin_password = password.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            rate_api: DEFAULT_RATE_API.to_string(),
            local_currency: "GHS".to_string(),
            fallback_rate: DEFAULT_CONVERSION_RATE,
            admin_user: "admin".to_string(),
            admin_password: "admin123".to_string(),
            log_level: LevelFilter::INFO,
            toast_duration_ms: 4_000,
        }
    }
}
