//! HTTP handlers for the pass-through wizard records

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::DetailsService;
use crate::AppState;
use shared::{ClientDetails, CompanyDetails, PaymentDetails};

/// Client details for a session; 404 until the first wizard step completes
pub async fn get_client(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<ClientDetails>> {
    let service = DetailsService::new(state.store);
    let client = service
        .client(session_id)?
        .ok_or_else(|| AppError::NotFound("Client details".to_string()))?;
    Ok(Json(client))
}

pub async fn set_client(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(client): Json<ClientDetails>,
) -> AppResult<Json<ClientDetails>> {
    let service = DetailsService::new(state.store);
    Ok(Json(service.set_client(session_id, client)?))
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<CompanyDetails>> {
    let service = DetailsService::new(state.store);
    Ok(Json(service.company(session_id)?))
}

pub async fn set_company(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(company): Json<CompanyDetails>,
) -> AppResult<Json<CompanyDetails>> {
    let service = DetailsService::new(state.store);
    Ok(Json(service.set_company(session_id, company)?))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<PaymentDetails>> {
    let service = DetailsService::new(state.store);
    Ok(Json(service.payment(session_id)?))
}

pub async fn set_payment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payment): Json<PaymentDetails>,
) -> AppResult<Json<PaymentDetails>> {
    let service = DetailsService::new(state.store);
    Ok(Json(service.set_payment(session_id, payment)?))
}

/// Terms and conditions payload
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsPayload {
    pub terms: String,
}

pub async fn get_terms(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<TermsPayload>> {
    let service = DetailsService::new(state.store);
    Ok(Json(TermsPayload {
        terms: service.terms(session_id)?,
    }))
}

pub async fn set_terms(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<TermsPayload>,
) -> AppResult<StatusCode> {
    let service = DetailsService::new(state.store);
    service.set_terms(session_id, &payload.terms)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Logo image payload (base64 data or a data URL)
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoPayload {
    pub data: String,
}

pub async fn get_logo(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<LogoPayload>> {
    let service = DetailsService::new(state.store);
    let data = service
        .logo(session_id)?
        .ok_or_else(|| AppError::NotFound("Logo".to_string()))?;
    Ok(Json(LogoPayload { data }))
}

pub async fn set_logo(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<LogoPayload>,
) -> AppResult<StatusCode> {
    let service = DetailsService::new(state.store);
    service.set_logo(session_id, &payload.data)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Discard the session and start a fresh quotation
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = DetailsService::new(state.store);
    service.reset(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
