//! API configuration loaded from environment variables.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS configuration for the documentation API. The docs site fetches from
/// a browser, so the API is permissive unless origins are pinned.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Allowed CORS origins (from DENALI_DOCS_CORS_ORIGINS, comma-separated).
    /// None means any origin is allowed.
    pub cors_origins: Option<Vec<String>>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("DENALI_DOCS_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect());

        Self { cors_origins }
    }

    /// A config with no origin restrictions (for local development/testing).
    pub fn disabled() -> Self {
        Self { cors_origins: None }
    }

    /// A config with specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
        }
    }

    /// Build the CORS layer for this config. Origins that fail to parse as
    /// header values are skipped.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => {
                let origins: Vec<HeaderValue> =
                    origins.iter().filter_map(|o| o.parse().ok()).collect();
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods([Method::GET])
                    .allow_headers(Any)
            }
            None => CorsLayer::permissive(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_has_no_origins() {
        let config = ApiConfig::disabled();
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn with_cors_origins_keeps_the_list() {
        let config =
            ApiConfig::with_cors_origins(vec!["https://devdocs.denalijs.org".to_string()]);
        assert_eq!(
            config.cors_origins,
            Some(vec!["https://devdocs.denalijs.org".to_string()])
        );
    }
}
