//! Search-engine documents: sitemap and robots policy.
//!
//! # Data Flow
//! ```text
//! SiteConfig + LocaleSet
//!     → builder.rs (locales × routes, plus anchor sections)
//!     → xml.rs (sitemaps.org urlset with hreflang alternates)
//!
//! SiteConfig + RoutingConfig
//!     → robots.rs (policy, robots.txt text)
//! ```
//!
//! Both documents are rendered once at startup and served from memory.

pub mod builder;
pub mod entry;
pub mod robots;
pub mod xml;

pub use builder::SitemapBuilder;
pub use entry::{ChangeFrequency, SitemapEntry};
pub use robots::{RobotsPolicy, RobotsRule};
pub use xml::render_xml;
