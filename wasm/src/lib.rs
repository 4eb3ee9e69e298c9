//! WebAssembly module for the Construction Quotation Builder
//!
//! Provides client-side computation for:
//! - Line total and quotation total calculations
//! - Line-item field updates with their side effects
//! - Material catalog search and taxonomy lookups
//! - Offline input validation

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Line total: quantity times unit price
#[wasm_bindgen]
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    let quantity = Decimal::try_from(quantity).unwrap_or(Decimal::ZERO);
    let unit_price = Decimal::try_from(unit_price).unwrap_or(Decimal::ZERO);
    (quantity * unit_price).to_string().parse().unwrap_or(0.0)
}

/// Compute quotation totals from a line-item collection and the two rates
///
/// Takes the items as JSON and returns the totals as JSON. Tax and discount
/// each apply to the pre-adjustment subtotal.
#[wasm_bindgen]
pub fn quotation_totals(items_json: &str, tax_rate: f64, discount: f64) -> Result<String, JsValue> {
    let line_items: Vec<LineItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid line items JSON: {}", e)))?;

    let state = QuotationState {
        line_items,
        tax_rate: Decimal::try_from(tax_rate).unwrap_or(Decimal::ZERO),
        discount: Decimal::try_from(discount).unwrap_or(Decimal::ZERO),
    };

    serde_json::to_string(&state.totals())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Apply a field update to a line item, returning the updated item as JSON
#[wasm_bindgen]
pub fn apply_line_item_update(item_json: &str, update_json: &str) -> Result<String, JsValue> {
    let mut item: LineItem = serde_json::from_str(item_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid line item JSON: {}", e)))?;
    let update: LineItemUpdate = serde_json::from_str(update_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid update JSON: {}", e)))?;

    item.apply_update(update);

    serde_json::to_string(&item)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Search the material catalog, optionally narrowed to one category
#[wasm_bindgen]
pub fn search_materials_json(query: &str, category: Option<String>) -> Result<String, JsValue> {
    let results = filter_materials(category.as_deref(), query);
    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Subcategory options for a category as JSON; empty for unknown codes
#[wasm_bindgen]
pub fn subcategories_for_json(category_value: &str) -> Result<String, JsValue> {
    serde_json::to_string(subcategories_for(category_value))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Validate a tax or discount percentage
#[wasm_bindgen]
pub fn is_valid_rate_percent(rate: f64) -> bool {
    Decimal::try_from(rate)
        .map(|rate| validate_rate_percent(rate).is_ok())
        .unwrap_or(false)
}

/// Format a currency amount for display
#[wasm_bindgen]
pub fn format_currency_display(amount: f64) -> String {
    let amount = Decimal::try_from(amount).unwrap_or(Decimal::ZERO);
    format_currency(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        assert!((line_total(3.0, 100.0) - 300.0).abs() < 0.001);
        assert!((line_total(2.5, 4.2) - 10.5).abs() < 0.001);
    }

    #[test]
    fn test_quotation_totals_additive() {
        let items = r#"[
            {"id":"00000000-0000-0000-0000-000000000001","category":"flooring","subcategory":"tile","description":"Tiling works","quantity":"3","unit":"sq.ft","unitPrice":"100","total":"300"}
        ]"#;
        let totals = quotation_totals(items, 6.0, 10.0).unwrap();
        let parsed: QuotationTotals = serde_json::from_str(&totals).unwrap();
        assert_eq!(parsed.subtotal, Decimal::from(300));
        assert_eq!(parsed.tax_amount, Decimal::from(18));
        assert_eq!(parsed.discount_amount, Decimal::from(30));
        assert_eq!(parsed.grand_total, Decimal::from(288));
    }

    #[test]
    fn test_category_update_resets_subcategory() {
        let item = serde_json::to_string(&LineItem::new()).unwrap();
        let updated = apply_line_item_update(&item, r#"{"field":"category","value":"painting"}"#)
            .unwrap();
        let parsed: LineItem = serde_json::from_str(&updated).unwrap();
        assert_eq!(parsed.category, "painting");
        assert_eq!(parsed.subcategory, "");
    }

    #[test]
    fn test_rate_validation() {
        assert!(is_valid_rate_percent(0.0));
        assert!(is_valid_rate_percent(100.0));
        assert!(!is_valid_rate_percent(-1.0));
        assert!(!is_valid_rate_percent(100.5));
    }
}
