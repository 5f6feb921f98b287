//! Application router.
//!
//! Returns a composable `Router`: the dashboard page at `/`, the API
//! under `/api/`. Uploads are capped by a body limit sized for phone
//! photos and scanned PDFs.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::web;

/// Upload cap: 25 MB covers scanned multi-page PDFs with slack for
/// multipart overhead.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Build the full application router.
pub fn app_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::upload))
        .route("/report", get(endpoints::report::current))
        .route("/chat/send", post(endpoints::chat::send))
        .route("/chat/messages", get(endpoints::chat::messages))
        .route("/chat/suggestions", get(endpoints::chat::suggestions))
        .with_state(ctx);

    Router::new()
        .route("/", get(web::dashboard))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
