//! Route definitions for the Construction Quotation Builder

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Static reference data
        .nest("/catalog", catalog_routes())
        // Wizard session state
        .nest("/sessions/:session_id", session_routes())
}

/// Category and material reference data routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_value/subcategories",
            get(handlers::list_subcategories),
        )
        .route("/materials", get(handlers::list_materials))
        .route("/units", get(handlers::list_units))
}

/// Per-session quotation wizard routes
fn session_routes() -> Router<AppState> {
    Router::new()
        // Line items and rates
        .route("/quotation", get(handlers::get_quotation))
        .route("/quotation/items", post(handlers::add_line_item))
        .route(
            "/quotation/items/:item_id",
            put(handlers::update_line_item).delete(handlers::remove_line_item),
        )
        .route(
            "/quotation/items/:item_id/material",
            post(handlers::select_material),
        )
        .route(
            "/quotation/items/:item_id/edit",
            post(handlers::begin_editing),
        )
        .route("/quotation/edit/finish", post(handlers::finish_editing))
        .route("/quotation/rates", put(handlers::set_rates))
        // Pass-through details
        .route(
            "/client",
            get(handlers::get_client).put(handlers::set_client),
        )
        .route(
            "/company",
            get(handlers::get_company).put(handlers::set_company),
        )
        .route(
            "/payment",
            get(handlers::get_payment).put(handlers::set_payment),
        )
        .route("/terms", get(handlers::get_terms).put(handlers::set_terms))
        .route("/logo", get(handlers::get_logo).put(handlers::set_logo))
        .route("/reset", post(handlers::reset_session))
        // Document export
        .route("/export", get(handlers::export_snapshot))
        .route("/export/csv", get(handlers::export_csv))
}
