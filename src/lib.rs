//! Locale-aware serving edge for the multilingual shop site.

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod sitemap;

pub use config::schema::SiteEdgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{LocaleRouter, RoutingDecision};
