//! Quotation state and the derived-total calculations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LineItem, LineItemUpdate, Material};

/// The mutable core of a quotation: the ordered line items plus the two
/// percentage rates. Everything else on a quotation (client info, company
/// letterhead, terms text) is inert pass-through data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotationState {
    pub line_items: Vec<LineItem>,
    pub tax_rate: Decimal,
    pub discount: Decimal,
}

/// Derived totals for a quotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotationTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub grand_total: Decimal,
}

/// Sum of all line-item totals; zero for an empty collection
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.total).sum()
}

/// Tax charged on the pre-discount subtotal
pub fn tax_amount(subtotal: Decimal, tax_rate: Decimal) -> Decimal {
    subtotal * tax_rate / Decimal::from(100)
}

/// Discount granted on the pre-tax subtotal
pub fn discount_amount(subtotal: Decimal, discount: Decimal) -> Decimal {
    subtotal * discount / Decimal::from(100)
}

/// Grand total: subtotal plus tax minus discount
///
/// Tax and discount both apply to the same pre-adjustment subtotal. They are
/// never compounded; discount is not taken on the taxed amount, nor tax on
/// the discounted amount.
pub fn grand_total(subtotal: Decimal, tax_rate: Decimal, discount: Decimal) -> Decimal {
    subtotal + tax_amount(subtotal, tax_rate) - discount_amount(subtotal, discount)
}

impl QuotationState {
    /// Append a fresh blank item and return a copy of it
    pub fn add_item(&mut self) -> LineItem {
        let item = LineItem::new();
        self.line_items.push(item.clone());
        item
    }

    /// Apply a field update to the item with the given id
    ///
    /// Unknown ids are a no-op, not an error. Returns the updated item when
    /// one matched.
    pub fn update_item(&mut self, id: Uuid, update: LineItemUpdate) -> Option<&LineItem> {
        let item = self.line_items.iter_mut().find(|item| item.id == id)?;
        item.apply_update(update);
        Some(item)
    }

    /// Remove the item with the given id; absent ids are a no-op
    pub fn remove_item(&mut self, id: Uuid) {
        self.line_items.retain(|item| item.id != id);
    }

    /// Merge a catalog material into the item with the given id
    pub fn select_material(&mut self, id: Uuid, material: &Material) -> Option<&LineItem> {
        let item = self.line_items.iter_mut().find(|item| item.id == id)?;
        item.select_material(material);
        Some(item)
    }

    /// Look up an item by id
    pub fn item(&self, id: Uuid) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Compute the derived totals for the current state
    pub fn totals(&self) -> QuotationTotals {
        let subtotal = subtotal(&self.line_items);
        QuotationTotals {
            subtotal,
            tax_amount: tax_amount(subtotal, self.tax_rate),
            discount_amount: discount_amount(subtotal, self.discount),
            grand_total: grand_total(subtotal, self.tax_rate, self.discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn subtotal_of_empty_collection_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn tax_and_discount_are_independent() {
        let s = dec("300");
        let total = grand_total(s, dec("6"), dec("10"));
        // 300 + 18 - 30, not 300 * 1.06 * 0.90
        assert_eq!(total, dec("288"));
        assert_ne!(total, s * dec("1.06") * dec("0.90"));
    }

    #[test]
    fn update_item_with_unknown_id_is_noop() {
        let mut state = QuotationState::default();
        state.add_item();
        let before = state.clone();
        let result = state.update_item(Uuid::new_v4(), LineItemUpdate::Quantity(dec("5")));
        assert!(result.is_none());
        assert_eq!(state, before);
    }
}
