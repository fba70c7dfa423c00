//! Path matching logic.
//!
//! # Responsibilities
//! - Match reserved path prefixes (framework internals, API)
//! - Match static asset file names (any `.` in the path)
//! - Match locale prefixes by exact first-segment equality
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Matchers see only the path, never headers or query
//! - Reserved prefixes are raw string prefixes
//! - Locale prefixes are whole segments, never substrings
//! - No regex to guarantee O(n) matching

use std::sync::Arc;

use crate::i18n::LocaleSet;

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a raw path prefix such as `/_next` or `/api`.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches paths that look like a file name (contain a `.` anywhere).
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAssetMatcher;

impl Matcher for StaticAssetMatcher {
    fn matches(&self, path: &str) -> bool {
        path.contains('.')
    }
}

/// Matches paths whose first segment is a supported locale code.
#[derive(Debug, Clone)]
pub struct LocalePrefixMatcher {
    locales: Arc<LocaleSet>,
}

impl LocalePrefixMatcher {
    pub fn new(locales: Arc<LocaleSet>) -> Self {
        Self { locales }
    }
}

impl Matcher for LocalePrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        self.locales.locale_of_path(path).is_some()
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
