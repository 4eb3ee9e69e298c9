//! HTTP handlers for the static category and material reference data

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::models::{all_categories, filter_materials, subcategories_for, Category, Material};
use shared::{LabelValue, UNIT_OPTIONS};

/// All construction categories with their subcategories
pub async fn list_categories() -> Json<&'static [Category]> {
    Json(all_categories())
}

/// Subcategory options for one category; empty for unknown codes
pub async fn list_subcategories(
    Path(category_value): Path<String>,
) -> Json<&'static [LabelValue]> {
    Json(subcategories_for(&category_value))
}

/// Material list filter parameters
#[derive(Debug, Deserialize)]
pub struct MaterialQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Materials, optionally narrowed by category and search query
///
/// When both filters are present the result is their intersection.
pub async fn list_materials(
    Query(query): Query<MaterialQuery>,
) -> Json<Vec<&'static Material>> {
    let search = query.search.as_deref().unwrap_or("");
    Json(filter_materials(query.category.as_deref(), search))
}

/// Unit vocabulary for the line-item editor
pub async fn list_units() -> Json<&'static [&'static str]> {
    Json(UNIT_OPTIONS)
}
