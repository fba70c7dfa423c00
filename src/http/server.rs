//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, limits, headers)
//! - Run every request through the locale router
//! - Serve sitemap, robots.txt, health and the static export
//! - Bind server to listener and shut down gracefully

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Request},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteEdgeConfig;
use crate::http::middleware::locale_middleware;
use crate::http::request::{request_id, MakeRequestUuid};
use crate::i18n::{LocaleError, LocaleSet, Negotiator};
use crate::lifecycle::shutdown;
use crate::routing::LocaleRouter;
use crate::sitemap::{render_xml, RobotsPolicy, SitemapBuilder};

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid locale configuration: {0}")]
    Locale(#[from] LocaleError),

    #[error("invalid site.last_modified: {0}")]
    LastModified(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Search-engine documents rendered once at startup.
#[derive(Debug, Clone, Default)]
pub struct SiteDocuments {
    pub sitemap_xml: String,
    pub robots_txt: String,
}

impl SiteDocuments {
    /// Render the sitemap and robots policy for the configured site.
    pub fn render(config: &SiteEdgeConfig, locales: &LocaleSet, last_modified: DateTime<Utc>) -> Self {
        let entries = SitemapBuilder::from_config(&config.site).build(locales, last_modified);
        let robots = RobotsPolicy::for_site(&config.site.base_url, &config.routing);

        Self {
            sitemap_xml: render_xml(&entries),
            robots_txt: robots.render(),
        }
    }
}

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<LocaleRouter>,
    pub negotiator: Arc<Negotiator>,
    pub documents: Arc<SiteDocuments>,
}

/// HTTP server for the localized site.
pub struct HttpServer {
    router: Router,
    config: SiteEdgeConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteEdgeConfig) -> Result<Self, ServerError> {
        let locales = Arc::new(LocaleSet::new(
            &config.locales.supported,
            &config.locales.default,
        )?);
        let last_modified = config.site.last_modified()?;

        let state = AppState {
            router: Arc::new(LocaleRouter::new(&config.routing, locales.clone())),
            negotiator: Arc::new(Negotiator::new(config.locales.cookie_name.clone())),
            documents: Arc::new(SiteDocuments::render(&config, &locales, last_modified)),
        };

        tracing::info!(
            locales = ?config.locales.supported,
            default_locale = %config.locales.default,
            public_dir = %config.site.public_dir,
            "Locale routing configured"
        );

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteEdgeConfig, state: AppState) -> Router {
        let public = ServeDir::new(&config.site.public_dir).append_index_html_on_directories(true);
        let health_path = format!("{}/health", config.routing.api_prefix.trim_end_matches('/'));
        #[allow(deprecated)]
        let timeout = TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs));

        let mut router = Router::new()
            .route(&health_path, get(health_handler))
            .route("/sitemap.xml", get(sitemap_handler))
            .route("/robots.txt", get(robots_handler))
            .fallback_service(public)
            .layer(middleware::from_fn_with_state(state.clone(), locale_middleware))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(timeout);

        if config.security.enable_headers {
            for (name, value) in security_headers() {
                router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
            }
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %request_id(req),
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Run the server until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteEdgeConfig {
        &self.config
    }

    /// The assembled router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }
}

fn security_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    ]
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.documents.sitemap_xml.clone(),
    )
}

async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.documents.robots_txt.clone(),
    )
}
