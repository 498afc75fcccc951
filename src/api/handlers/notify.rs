//! Notification dispatch endpoint handler.

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Dispatches one notification carrying the raw request body as text.
///
/// The body is read manually rather than through an extractor so that read
/// failures surface as a 500 with an "Error reading input" diagnostic
/// instead of an extractor rejection. Bytes are decoded lossily; the
/// payload is treated as text whatever arrives.
pub async fn dispatch_notification(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<(StatusCode, String)> {
    let bytes = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::BodyRead {
            source: anyhow::Error::new(e),
        })?;

    let body = String::from_utf8_lossy(&bytes).into_owned();

    let output = state.dispatcher.dispatch(body).await?;

    Ok((StatusCode::OK, output))
}
