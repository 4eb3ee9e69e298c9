//! HTTP handlers for quotation document export

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::export::{ExportService, QuotationDocument};
use crate::AppState;

/// Fully-resolved quotation snapshot for document generators
pub async fn export_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<QuotationDocument>> {
    let service = ExportService::new(state.store, state.config.export.currency_code.clone());
    Ok(Json(service.snapshot(session_id)?))
}

/// CSV rendition of the quotation document
pub async fn export_csv(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<(HeaderMap, String)> {
    let service = ExportService::new(state.store, state.config.export.currency_code.clone());
    let document = service.snapshot(session_id)?;
    let body = service.render_csv(&document)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    let disposition = format!(
        "attachment; filename=\"Quotation_{}.csv\"",
        document.quotation_number
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    Ok((headers, body))
}
