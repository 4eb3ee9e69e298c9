//! HTTP handlers for quotation line-item endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::quotation::{QuotationService, QuotationView};
use crate::AppState;
use shared::{LineItem, LineItemUpdate, QuotationTotals};

/// Current quotation state with derived totals
pub async fn get_quotation(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<QuotationView>> {
    let service = QuotationService::new(state.store);
    Ok(Json(service.view(session_id)?))
}

/// Append a blank line item
pub async fn add_line_item(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<LineItem>)> {
    let service = QuotationService::new(state.store);
    let item = service.add_item(session_id)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Apply a single field update to a line item
pub async fn update_line_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<LineItemUpdate>,
) -> AppResult<Json<Vec<LineItem>>> {
    let service = QuotationService::new(state.store);
    Ok(Json(service.update_item(session_id, item_id, update)?))
}

/// Remove a line item
pub async fn remove_line_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<LineItem>>> {
    let service = QuotationService::new(state.store);
    Ok(Json(service.remove_item(session_id, item_id)?))
}

/// Input for selecting a catalog material into a line item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMaterialInput {
    pub material_id: String,
}

/// Merge a catalog material into a line item
pub async fn select_material(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<SelectMaterialInput>,
) -> AppResult<Json<LineItem>> {
    let service = QuotationService::new(state.store);
    Ok(Json(service.select_material(
        session_id,
        item_id,
        &input.material_id,
    )?))
}

/// Input for setting the quotation rates
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesInput {
    pub tax_rate: Decimal,
    pub discount: Decimal,
}

/// Set the tax and discount percentages
pub async fn set_rates(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<RatesInput>,
) -> AppResult<Json<QuotationTotals>> {
    let service = QuotationService::new(state.store);
    Ok(Json(service.set_rates(
        session_id,
        input.tax_rate,
        input.discount,
    )?))
}

/// Mark a line item as being edited
pub async fn begin_editing(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let service = QuotationService::new(state.store);
    service.begin_editing(session_id, item_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Release the editing token
pub async fn finish_editing(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = QuotationService::new(state.store);
    service.finish_editing(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
