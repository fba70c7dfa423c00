//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! LocalesConfig (supported codes, default)
//!     → locale.rs (validate, freeze as LocaleSet)
//!     → shared via Arc with routing and the dispatcher
//!
//! Delegated request without a locale segment ("/"):
//!     → negotiate.rs (cookie → Accept-Language → default)
//!     → temporary redirect to /<locale>
//! ```
//!
//! # Design Decisions
//! - Locale codes are matched as whole path segments
//! - Negotiated locales are never cached as permanent redirects

pub mod locale;
pub mod negotiate;

pub use locale::{Locale, LocaleError, LocaleSet};
pub use negotiate::{NegotiationSource, Negotiator};
