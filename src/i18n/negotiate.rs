//! Locale negotiation for requests that carry no locale in the path.
//!
//! # Priority
//! 1. Locale cookie, if it names a supported locale
//! 2. `Accept-Language` ranges, highest weight first
//! 3. Default locale

use axum::http::{header, HeaderMap};

use crate::i18n::locale::{Locale, LocaleSet};

/// Where a negotiated locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationSource {
    Cookie,
    AcceptLanguage,
    Default,
}

impl NegotiationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NegotiationSource::Cookie => "cookie",
            NegotiationSource::AcceptLanguage => "accept_language",
            NegotiationSource::Default => "default",
        }
    }
}

/// Picks a locale from request headers.
#[derive(Debug, Clone)]
pub struct Negotiator {
    cookie_name: String,
}

impl Negotiator {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Negotiate a locale for the request headers.
    pub fn negotiate<'a>(
        &self,
        locales: &'a LocaleSet,
        headers: &HeaderMap,
    ) -> (&'a Locale, NegotiationSource) {
        if let Some(locale) = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| cookie_value(v, &self.cookie_name))
            .and_then(|code| locales.get(code))
        {
            return (locale, NegotiationSource::Cookie);
        }

        if let Some(locale) = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| match_accept_language(locales, v))
        {
            return (locale, NegotiationSource::AcceptLanguage);
        }

        (locales.default_locale(), NegotiationSource::Default)
    }
}

/// Extract a named cookie from a `Cookie` header value.
fn cookie_value<'a>(header_value: &'a str, name: &str) -> Option<&'a str> {
    header_value.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.trim_matches('"'))
    })
}

/// Parse an `Accept-Language` value into ranges ordered by weight.
///
/// Ranges with `q=0` or an unparseable weight are dropped. Equal weights keep
/// header order.
pub fn parse_accept_language(value: &str) -> Vec<(String, f32)> {
    let mut ranges: Vec<(String, f32)> = value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let mut weight = 1.0_f32;
            for param in parts {
                let Some((name, q)) = param.split_once('=') else {
                    continue;
                };
                if name.trim().eq_ignore_ascii_case("q") {
                    weight = q.trim().parse().ok()?;
                }
            }
            (weight > 0.0 && weight <= 1.0).then(|| (tag.to_ascii_lowercase(), weight))
        })
        .collect();

    // sort_by is stable
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges
}

/// Match `Accept-Language` ranges against the supported set.
pub fn match_accept_language<'a>(locales: &'a LocaleSet, value: &str) -> Option<&'a Locale> {
    parse_accept_language(value)
        .iter()
        .find_map(|(range, _)| match_range(locales, range))
}

fn match_range<'a>(locales: &'a LocaleSet, range: &str) -> Option<&'a Locale> {
    if range == "*" {
        return Some(locales.default_locale());
    }
    if let Some(exact) = locales.iter().find(|l| l.code().eq_ignore_ascii_case(range)) {
        return Some(exact);
    }
    let primary = range.split('-').next().unwrap_or(range);
    locales
        .iter()
        .find(|l| l.code().eq_ignore_ascii_case(primary))
        .or_else(|| locales.iter().find(|l| l.primary().eq_ignore_ascii_case(primary)))
}
