//! `POST /api/analyze` — upload a report and run the analysis.
//!
//! Multipart with a single `file` field. The part's content type wins;
//! a filename-based guess is the fallback. On success the result and a
//! freshly grounded chat session replace the current slot and the full
//! dashboard view is returned. On failure the slot records the
//! user-facing message and the error response carries the same text.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::analysis::chat::ChatSession;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::render::view::{build_report_view, ReportView};

const FALLBACK_MIME: &str = "application/octet-stream";

pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ReportView>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let mime_type = field
            .content_type()
            .map(str::to_string)
            .or_else(|| {
                field
                    .file_name()
                    .map(|name| mime_guess::from_path(name).first_or_octet_stream().to_string())
            })
            .unwrap_or_else(|| FALLBACK_MIME.to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        file = Some((mime_type, bytes.to_vec()));
    }

    let (mime_type, bytes) = file.ok_or_else(|| {
        ApiError::BadRequest("Missing 'file' field in upload".to_string())
    })?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
    }

    ctx.core.begin_analysis()?;

    match ctx.analyzer.analyze(&bytes, &mime_type).await {
        Ok(result) => {
            let result = Arc::new(result);
            let session = ChatSession::new(ctx.client.clone(), &result);
            ctx.core.install_report(result.clone(), session).await?;
            Ok(Json(build_report_view(&result)))
        }
        Err(err) => {
            ctx.core.fail_analysis(err.user_message()).await?;
            Err(err.into())
        }
    }
}
