//! HTTP surface for the dashboard.
//!
//! The router is composable — `app_router()` returns a `Router` that
//! can be mounted on any axum server instance. Routes live under
//! `/api/`; the dashboard page is served at `/`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use router::app_router;
pub use types::ApiContext;
