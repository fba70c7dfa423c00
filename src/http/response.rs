//! Response construction for locale routing.
//!
//! # Responsibilities
//! - Permanent (308) redirect for paths missing a locale prefix
//! - Temporary (307) redirect for negotiated root requests
//! - Content-Language and locale cookie on localized responses
//!
//! # Design Decisions
//! - 308/307 keep the request method and body, unlike 301/302
//! - Negotiated redirects vary on the headers that produced them

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

use crate::i18n::Locale;

/// Redirect to the default-locale-prefixed path. `location` must come from a
/// parsed request URI.
pub fn locale_redirect(location: &str) -> Response {
    Redirect::permanent(location).into_response()
}

/// Redirect the root to a negotiated locale.
pub fn negotiated_redirect(locale: &Locale) -> Response {
    let mut response = Redirect::temporary(&format!("/{}", locale.code())).into_response();
    response.headers_mut().insert(
        header::VARY,
        HeaderValue::from_static("Accept-Language, Cookie"),
    );
    response
}

/// Tag a localized response and remember the locale in a cookie.
pub fn apply_locale_headers(response: &mut Response, locale: &Locale, cookie_name: &str) {
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(locale.code()) {
        headers.insert(header::CONTENT_LANGUAGE, value);
    }

    let cookie = format!("{}={}; Path=/; SameSite=Lax", cookie_name, locale.code());
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(cookie_name = %cookie_name, error = %e, "Locale cookie not set"),
    }
}
