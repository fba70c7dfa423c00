//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site edge.
//! All types derive Serde traits for deserialization from config files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteEdgeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Supported locales and the default.
    pub locales: LocalesConfig,

    /// Reserved path prefixes that bypass locale routing.
    pub routing: RoutingConfig,

    /// Public site description (base URL, routes, static export).
    pub site: SiteConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Supported locale codes, in display order.
    pub supported: Vec<String>,

    /// Locale injected by redirects and used when negotiation finds nothing.
    pub default: String,

    /// Cookie remembering the visitor's locale.
    pub cookie_name: String,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            supported: ["en", "ja", "ko", "zh", "es"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            default: "en".to_string(),
            cookie_name: "NEXT_LOCALE".to_string(),
        }
    }
}

/// Reserved prefixes. Paths starting with these are never locale-rewritten.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Framework internals (bundles, image optimizer).
    pub framework_prefix: String,

    /// API routes.
    pub api_prefix: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            framework_prefix: "/_next".to_string(),
            api_prefix: "/api".to_string(),
        }
    }
}

/// Public site description.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL used in the sitemap and robots.txt.
    pub base_url: String,

    /// Directory holding the static export.
    pub public_dir: String,

    /// Static routes below each locale ("" is the home page).
    pub routes: Vec<String>,

    /// In-page anchor sections of the home page.
    pub sections: Vec<String>,

    /// RFC 3339 timestamp for `<lastmod>`; process start time when unset.
    pub last_modified: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            public_dir: "public".to_string(),
            routes: vec![String::new(), "/menu".to_string()],
            sections: ["about", "menu", "location", "contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            last_modified: None,
        }
    }
}

impl SiteConfig {
    /// Timestamp for `<lastmod>`: the configured value, or now.
    pub fn last_modified(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        match &self.last_modified {
            Some(ts) => Ok(DateTime::parse_from_rfc3339(ts)?.with_timezone(&Utc)),
            None => Ok(Utc::now()),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024, // 64KB
        }
    }
}
