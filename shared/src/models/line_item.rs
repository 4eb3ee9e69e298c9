//! Quotation line item models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Material;
use crate::types::{DEFAULT_UNIT, FALLBACK_UNIT};

/// One priced row in a quotation
///
/// `total` is derived and always equals `quantity * unit_price`; it is
/// recomputed whenever quantity, unit price, or material selection changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_name: Option<String>,
}

impl LineItem {
    /// Create a blank line item with editor defaults
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            category: String::new(),
            subcategory: String::new(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit: DEFAULT_UNIT.to_string(),
            unit_price: Decimal::ZERO,
            total: Decimal::ZERO,
            material_id: None,
            material_name: None,
        }
    }

    /// Recompute the derived total from the current quantity and unit price
    pub fn recalculate_total(&mut self) {
        self.total = self.quantity * self.unit_price;
    }

    /// Apply a single field update, with its side effects
    pub fn apply_update(&mut self, update: LineItemUpdate) {
        match update {
            LineItemUpdate::Category(value) => {
                self.category = value;
                // changing the category invalidates any prior subcategory pick
                self.subcategory = String::new();
            }
            LineItemUpdate::Subcategory(value) => self.subcategory = value,
            LineItemUpdate::Description(value) => self.description = value,
            LineItemUpdate::Quantity(value) => {
                self.quantity = value;
                self.recalculate_total();
            }
            LineItemUpdate::Unit(value) => self.unit = value,
            LineItemUpdate::UnitPrice(value) => {
                self.unit_price = value;
                self.recalculate_total();
            }
        }
    }

    /// Merge a catalog material into this item
    ///
    /// Unit price and total always come from the material (quantity is kept);
    /// category, subcategory, and unit are filled from the material only when
    /// the item's own value is empty, and a non-empty description is
    /// preserved. The material reference is informational: later catalog
    /// edits do not propagate back into the item.
    pub fn select_material(&mut self, material: &Material) {
        if self.category.is_empty() {
            self.category = material.category.clone();
        }
        if self.subcategory.is_empty() {
            self.subcategory = material.subcategory.clone();
        }
        if self.unit.is_empty() {
            self.unit = if material.unit.is_empty() {
                FALLBACK_UNIT.to_string()
            } else {
                material.unit.clone()
            };
        }
        self.unit_price = material.unit_price;
        self.recalculate_total();
        if self.description.is_empty() {
            self.description = material.description.clone().unwrap_or_default();
        }
        self.material_id = Some(material.id.clone());
        self.material_name = Some(material.name.clone());
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A single line-item field mutation
///
/// Modeled as a sum type so that field/value pairings are checked at compile
/// time instead of being a stringly-typed `(field, value)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LineItemUpdate {
    Category(String),
    Subcategory(String),
    Description(String),
    Quantity(Decimal),
    Unit(String),
    UnitPrice(Decimal),
}
