//! Locale codes and the validated, immutable locale set.
//!
//! The set is built once at startup from configuration and shared via `Arc`.
//! Lookups against request paths use exact segment equality.

use std::fmt;
use thiserror::Error;

/// Errors raised while building a [`LocaleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale set is empty")]
    Empty,

    #[error("invalid locale code '{0}': expected ASCII letters, digits or '-'")]
    InvalidCode(String),

    #[error("duplicate locale code '{0}'")]
    Duplicate(String),

    #[error("default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),
}

/// A supported locale code such as `en` or `ja`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Parse a locale code, rejecting anything that cannot be a single path segment.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        if is_valid_code(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(LocaleError::InvalidCode(code.to_string()))
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`zh` for `zh-hant`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if `code` is non-empty and made of ASCII alphanumerics and `-`.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && !code.starts_with('-')
        && !code.ends_with('-')
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Ordered set of supported locales with exactly one default.
///
/// # Invariants
/// - Non-empty
/// - Codes are unique
/// - The default is a member
#[derive(Debug, Clone)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleSet {
    /// Build a locale set, checking every invariant.
    pub fn new<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self, LocaleError> {
        if codes.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
        for code in codes {
            let locale = Locale::parse(code.as_ref())?;
            if locales.contains(&locale) {
                return Err(LocaleError::Duplicate(locale.0));
            }
            locales.push(locale);
        }

        let default_index = locales
            .iter()
            .position(|l| l.code() == default)
            .ok_or_else(|| LocaleError::DefaultNotSupported(default.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// All supported locales in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns the locale named by the first path segment, if any.
    ///
    /// `/ja` and `/ja/menu` yield `ja`; `/japan` and `/` yield nothing.
    pub fn locale_of_path(&self, path: &str) -> Option<&Locale> {
        let rest = path.strip_prefix('/')?;
        let segment = rest.split('/').next().unwrap_or(rest);
        self.get(segment)
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            locales: ["en", "ja", "ko", "zh", "es"]
                .iter()
                .map(|c| Locale(c.to_string()))
                .collect(),
            default_index: 0,
        }
    }
}
