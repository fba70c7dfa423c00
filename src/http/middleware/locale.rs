//! Locale routing middleware.
//!
//! Runs the [`LocaleRouter`](crate::routing::LocaleRouter) decision for every
//! request and acts on it: pass through, redirect, or dispatch to the
//! internationalization layer.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::response::{apply_locale_headers, locale_redirect, negotiated_redirect};
use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::observability::metrics;
use crate::routing::RoutingDecision;

/// Locale of a delegated, locale-prefixed request. Available to handlers as
/// `Extension<ActiveLocale>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale(pub Locale);

pub async fn locale_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let decision = state.router.decide(request.uri().path());
    metrics::record_decision(&decision);

    let response = match &decision {
        RoutingDecision::Bypass => next.run(request).await,
        RoutingDecision::RedirectToLocale { location } => {
            tracing::debug!(
                path = %request.uri().path(),
                location = %location,
                "Redirecting to default locale"
            );
            locale_redirect(location)
        }
        RoutingDecision::Delegate => dispatch(&state, request, next).await,
    };

    metrics::record_latency(&decision, start);
    response
}

/// Internationalization dispatcher for delegated requests.
async fn dispatch(state: &AppState, mut request: Request, next: Next) -> Response {
    let locales = state.router.locales();

    match locales.locale_of_path(request.uri().path()).cloned() {
        Some(locale) => {
            request.extensions_mut().insert(ActiveLocale(locale.clone()));
            let mut response = next.run(request).await;
            // Error pages and directory redirects must not set the cookie.
            if response.status().is_success() {
                apply_locale_headers(&mut response, &locale, state.negotiator.cookie_name());
            }
            response
        }
        None => {
            let (locale, source) = state.negotiator.negotiate(locales, request.headers());
            metrics::record_negotiation(locale.code(), source);
            tracing::debug!(locale = %locale, source = source.as_str(), "Negotiated locale");
            negotiated_redirect(locale)
        }
    }
}
