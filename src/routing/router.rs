//! Locale routing decision.
//!
//! # Responsibilities
//! - Classify a request path into exactly one [`RoutingDecision`]
//! - Build the redirect target for unprefixed paths
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Total function: every string classifies, there is no error case
//! - First match wins: bypass, root, locale prefix, redirect
//! - Redirects are permanent (308) so clients keep method and body

use std::sync::Arc;

use axum::http::StatusCode;

use crate::config::RoutingConfig;
use crate::i18n::LocaleSet;
use crate::routing::matcher::{
    AnyMatcher, LocalePrefixMatcher, Matcher, PathPrefixMatcher, StaticAssetMatcher,
};

/// Status used for [`RoutingDecision::RedirectToLocale`].
pub const LOCALE_REDIRECT_STATUS: StatusCode = StatusCode::PERMANENT_REDIRECT;

/// Outcome of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve as-is: framework internals, API routes, static files.
    Bypass,
    /// Permanently redirect to the default-locale-prefixed path.
    RedirectToLocale { location: String },
    /// Hand to the internationalization dispatcher.
    Delegate,
}

impl RoutingDecision {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingDecision::Bypass => "bypass",
            RoutingDecision::RedirectToLocale { .. } => "redirect",
            RoutingDecision::Delegate => "delegate",
        }
    }
}

/// Classifies request paths against the fixed locale configuration.
#[derive(Debug)]
pub struct LocaleRouter {
    bypass: AnyMatcher,
    locale_prefix: LocalePrefixMatcher,
    locales: Arc<LocaleSet>,
}

impl LocaleRouter {
    /// Compile the router from routing config and the locale set.
    pub fn new(config: &RoutingConfig, locales: Arc<LocaleSet>) -> Self {
        let bypass = AnyMatcher::new(vec![
            Box::new(PathPrefixMatcher::new(config.framework_prefix.clone())),
            Box::new(PathPrefixMatcher::new(config.api_prefix.clone())),
            Box::new(StaticAssetMatcher),
        ]);

        Self {
            bypass,
            locale_prefix: LocalePrefixMatcher::new(locales.clone()),
            locales,
        }
    }

    pub fn locales(&self) -> &Arc<LocaleSet> {
        &self.locales
    }

    /// Decide what to do with `path`.
    pub fn decide(&self, path: &str) -> RoutingDecision {
        if self.bypass.matches(path) {
            return RoutingDecision::Bypass;
        }

        if path == "/" || self.locale_prefix.matches(path) {
            return RoutingDecision::Delegate;
        }

        RoutingDecision::RedirectToLocale {
            location: self.redirect_target(path),
        }
    }

    /// `/<default-locale>` followed by `path`.
    fn redirect_target(&self, path: &str) -> String {
        let default = self.locales.default_locale().code();
        let mut location = String::with_capacity(default.len() + path.len() + 2);
        location.push('/');
        location.push_str(default);
        // Inputs without a leading slash still get a segment boundary.
        if !path.starts_with('/') {
            location.push('/');
        }
        location.push_str(path);
        location
    }
}

impl Default for LocaleRouter {
    fn default() -> Self {
        Self::new(&RoutingConfig::default(), Arc::new(LocaleSet::default()))
    }
}
