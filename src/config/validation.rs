//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check locale invariants (non-empty, unique, default is supported)
//! - Validate reserved prefixes, routes and the site URL
//! - Reject locales whose path falls under a reserved prefix
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteEdgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use chrono::DateTime;
use thiserror::Error;
use url::Url;

use crate::config::schema::SiteEdgeConfig;
use crate::i18n::{LocaleError, LocaleSet};

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("locales: {0}")]
    Locales(#[from] LocaleError),

    #[error("locales.cookie_name must not be empty")]
    EmptyCookieName,

    #[error("routing.{field} '{value}' must start with '/' and not be '/' alone")]
    InvalidPrefix { field: &'static str, value: String },

    #[error("locale '{code}' is shadowed by reserved prefix '{prefix}'")]
    LocaleShadowedByPrefix { code: String, prefix: String },

    #[error("site.base_url '{0}' is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("site.routes entry '{0}' must be empty or start with '/'")]
    InvalidRoute(String),

    #[error("site.sections entry '{0}' must be non-empty and contain no '#' or whitespace")]
    InvalidSection(String),

    #[error("site.last_modified '{0}' is not an RFC 3339 timestamp")]
    InvalidLastModified(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("{field} '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &SiteEdgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = LocaleSet::new(&config.locales.supported, &config.locales.default) {
        errors.push(ValidationError::Locales(e));
    }
    if config.locales.cookie_name.trim().is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }

    let mut prefixes = Vec::new();
    for (field, value) in [
        ("framework_prefix", &config.routing.framework_prefix),
        ("api_prefix", &config.routing.api_prefix),
    ] {
        if !value.starts_with('/') || value == "/" {
            errors.push(ValidationError::InvalidPrefix {
                field,
                value: value.clone(),
            });
        } else {
            prefixes.push(value);
        }
    }

    // Prefixes match raw, so `/<code>` must not fall under one.
    for code in &config.locales.supported {
        let locale_path = format!("/{code}");
        if let Some(prefix) = prefixes.iter().find(|p| locale_path.starts_with(p.as_str())) {
            errors.push(ValidationError::LocaleShadowedByPrefix {
                code: code.clone(),
                prefix: (*prefix).clone(),
            });
        }
    }

    match Url::parse(&config.site.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.site.base_url.clone())),
    }

    for route in &config.site.routes {
        if !(route.is_empty() || route.starts_with('/')) {
            errors.push(ValidationError::InvalidRoute(route.clone()));
        }
    }

    for section in &config.site.sections {
        if section.is_empty() || section.contains('#') || section.contains(char::is_whitespace) {
            errors.push(ValidationError::InvalidSection(section.clone()));
        }
    }

    if let Some(ts) = &config.site.last_modified {
        if DateTime::parse_from_rfc3339(ts).is_err() {
            errors.push(ValidationError::InvalidLastModified(ts.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SiteEdgeConfig::default()), Ok(()));
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let mut config = SiteEdgeConfig::default();
        config.locales.default = "fr".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Locales(LocaleError::DefaultNotSupported("fr".into()))]
        );
    }

    #[test]
    fn test_empty_locales_rejected() {
        let mut config = SiteEdgeConfig::default();
        config.locales.supported.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Locales(LocaleError::Empty)]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteEdgeConfig::default();
        config.routing.api_prefix = "api".to_string();
        config.routing.framework_prefix = "/".to_string();
        config.site.base_url = "not a url".to_string();
        config.site.routes.push("menu".to_string());
        config.site.sections.push("with space".to_string());
        config.site.last_modified = Some("yesterday".to_string());
        config.timeouts.request_secs = 0;
        config.listener.bind_address = "localhost".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 8);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidRoute("menu".into())));
    }

    #[test]
    fn test_locale_shadowed_by_reserved_prefix_rejected() {
        let mut config = SiteEdgeConfig::default();
        config.locales.supported = vec!["en".to_string(), "apiary".to_string()];
        config.locales.default = "apiary".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::LocaleShadowedByPrefix {
                code: "apiary".into(),
                prefix: "/api".into(),
            }]
        );

        config.routing.api_prefix = "/api/".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_base_url_requires_http_scheme() {
        let mut config = SiteEdgeConfig::default();
        config.site.base_url = "ftp://donuts.example".to_string();
        assert!(validate_config(&config).is_err());

        config.site.base_url = "https://donuts.example".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SiteEdgeConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidAddress { field: "observability.metrics_address", .. }
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidPrefix {
            field: "api_prefix",
            value: "api".into(),
        };
        assert_eq!(
            err.to_string(),
            "routing.api_prefix 'api' must start with '/' and not be '/' alone"
        );
    }
}
