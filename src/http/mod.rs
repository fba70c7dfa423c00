//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tower layers)
//!     → request.rs (request ID)
//!     → middleware/locale.rs (locale decision, dispatcher)
//!     → response.rs (redirects, locale headers)
//!     → handlers / static export
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use middleware::ActiveLocale;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError, SiteDocuments};
