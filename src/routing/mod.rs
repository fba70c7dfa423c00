//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (ordered classification)
//!     → matcher.rs (reserved prefix, static asset, locale segment)
//!     → Return: Bypass | RedirectToLocale | Delegate
//!
//! Router Compilation (at startup):
//!     RoutingConfig + LocaleSet
//!     → Compile matchers
//!     → Freeze as immutable LocaleRouter
//! ```
//!
//! # Design Decisions
//! - Router compiled at startup, immutable at runtime
//! - No regex in hot path (prefix and segment matching only)
//! - Deterministic: same path always yields the same decision
//! - First match wins

pub mod matcher;
pub mod router;

pub use router::{LocaleRouter, RoutingDecision, LOCALE_REDIRECT_STATUS};
