//! Quotation line-item service
//!
//! Every operation loads the session's state from the store, applies one
//! mutation, and saves it back, so the store always holds the last committed
//! wizard state. Derived totals are recomputed from the stored collection on
//! every read rather than persisted.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::{keys, session_key, KeyValueStore};
use shared::{
    material_by_id, validate_quantity, validate_rate_percent, validate_unit,
    validate_unit_price, LineItem, LineItemUpdate, QuotationState, QuotationTotals,
};

/// Service managing the mutable quotation core for a wizard session
#[derive(Clone)]
pub struct QuotationService {
    store: Arc<dyn KeyValueStore>,
}

/// Full quotation view returned to the wizard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationView {
    pub line_items: Vec<LineItem>,
    pub tax_rate: Decimal,
    pub discount: Decimal,
    pub totals: QuotationTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_item_id: Option<Uuid>,
}

impl QuotationService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the last-saved state for a session; missing keys read as the
    /// empty quotation with zero rates
    pub fn load(&self, session_id: Uuid) -> AppResult<QuotationState> {
        let line_items = match self.store.get(&session_key(session_id, keys::LINE_ITEMS))? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::Internal(format!("corrupt line items: {}", e)))?,
            None => Vec::new(),
        };
        Ok(QuotationState {
            line_items,
            tax_rate: self.load_rate(session_id, keys::TAX_RATE)?,
            discount: self.load_rate(session_id, keys::DISCOUNT)?,
        })
    }

    fn load_rate(&self, session_id: Uuid, key: &str) -> AppResult<Decimal> {
        match self.store.get(&session_key(session_id, key))? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::Internal(format!("corrupt rate: {}", e))),
            None => Ok(Decimal::ZERO),
        }
    }

    fn save_items(&self, session_id: Uuid, items: &[LineItem]) -> AppResult<()> {
        let json = serde_json::to_string(items).map_err(|e| AppError::Internal(e.to_string()))?;
        self.store.set(&session_key(session_id, keys::LINE_ITEMS), &json)?;
        Ok(())
    }

    /// Current view with derived totals
    pub fn view(&self, session_id: Uuid) -> AppResult<QuotationView> {
        let state = self.load(session_id)?;
        let totals = state.totals();
        Ok(QuotationView {
            totals,
            editing_item_id: self.editing_item(session_id)?,
            line_items: state.line_items,
            tax_rate: state.tax_rate,
            discount: state.discount,
        })
    }

    /// Append a blank line item and mark it as the one being edited
    pub fn add_item(&self, session_id: Uuid) -> AppResult<LineItem> {
        self.ensure_not_editing(session_id)?;
        let mut state = self.load(session_id)?;
        let item = state.add_item();
        self.save_items(session_id, &state.line_items)?;
        self.store.set(
            &session_key(session_id, keys::EDITING_ITEM),
            &item.id.to_string(),
        )?;
        Ok(item)
    }

    /// Apply one field update to a line item
    ///
    /// Missing ids leave the collection unchanged; that is not an error.
    pub fn update_item(
        &self,
        session_id: Uuid,
        item_id: Uuid,
        update: LineItemUpdate,
    ) -> AppResult<Vec<LineItem>> {
        match &update {
            LineItemUpdate::Quantity(value) => {
                validate_quantity(*value).map_err(|msg| AppError::Validation {
                    field: "quantity".to_string(),
                    message: msg.to_string(),
                })?
            }
            LineItemUpdate::UnitPrice(value) => {
                validate_unit_price(*value).map_err(|msg| AppError::Validation {
                    field: "unitPrice".to_string(),
                    message: msg.to_string(),
                })?
            }
            LineItemUpdate::Unit(value) => {
                validate_unit(value).map_err(|msg| AppError::Validation {
                    field: "unit".to_string(),
                    message: msg.to_string(),
                })?
            }
            _ => {}
        }

        let mut state = self.load(session_id)?;
        if state.update_item(item_id, update).is_some() {
            self.save_items(session_id, &state.line_items)?;
        }
        Ok(state.line_items)
    }

    /// Remove a line item; absent ids are a no-op
    pub fn remove_item(&self, session_id: Uuid, item_id: Uuid) -> AppResult<Vec<LineItem>> {
        self.ensure_not_editing(session_id)?;
        let mut state = self.load(session_id)?;
        state.remove_item(item_id);
        self.save_items(session_id, &state.line_items)?;
        Ok(state.line_items)
    }

    /// Merge a catalog material into a line item
    pub fn select_material(
        &self,
        session_id: Uuid,
        item_id: Uuid,
        material_id: &str,
    ) -> AppResult<LineItem> {
        let material =
            material_by_id(material_id).ok_or_else(|| AppError::NotFound("Material".to_string()))?;
        let mut state = self.load(session_id)?;
        let item = state
            .select_material(item_id, material)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Line item".to_string()))?;
        self.save_items(session_id, &state.line_items)?;
        Ok(item)
    }

    /// Store the tax and discount percentages
    pub fn set_rates(&self, session_id: Uuid, tax_rate: Decimal, discount: Decimal) -> AppResult<QuotationTotals> {
        validate_rate_percent(tax_rate).map_err(|msg| AppError::Validation {
            field: "taxRate".to_string(),
            message: msg.to_string(),
        })?;
        validate_rate_percent(discount).map_err(|msg| AppError::Validation {
            field: "discount".to_string(),
            message: msg.to_string(),
        })?;

        let tax_json =
            serde_json::to_string(&tax_rate).map_err(|e| AppError::Internal(e.to_string()))?;
        let discount_json =
            serde_json::to_string(&discount).map_err(|e| AppError::Internal(e.to_string()))?;
        self.store
            .set(&session_key(session_id, keys::TAX_RATE), &tax_json)?;
        self.store
            .set(&session_key(session_id, keys::DISCOUNT), &discount_json)?;

        Ok(self.load(session_id)?.totals())
    }

    /// The single-slot editing token for a session
    pub fn editing_item(&self, session_id: Uuid) -> AppResult<Option<Uuid>> {
        Ok(self
            .store
            .get(&session_key(session_id, keys::EDITING_ITEM))?
            .and_then(|raw| Uuid::parse_str(&raw).ok()))
    }

    /// Mark a line item as being edited
    ///
    /// Only one item may be editable at a time; switching requires finishing
    /// the current edit first.
    pub fn begin_editing(&self, session_id: Uuid, item_id: Uuid) -> AppResult<()> {
        if let Some(current) = self.editing_item(session_id)? {
            if current != item_id {
                return Err(AppError::EditingInProgress);
            }
        }
        let state = self.load(session_id)?;
        if state.item(item_id).is_none() {
            return Err(AppError::NotFound("Line item".to_string()));
        }
        self.store.set(
            &session_key(session_id, keys::EDITING_ITEM),
            &item_id.to_string(),
        )?;
        Ok(())
    }

    /// Release the editing token; idempotent
    pub fn finish_editing(&self, session_id: Uuid) -> AppResult<()> {
        self.store
            .remove(&session_key(session_id, keys::EDITING_ITEM))?;
        Ok(())
    }

    /// Structural operations are disabled while a line item is editable
    fn ensure_not_editing(&self, session_id: Uuid) -> AppResult<()> {
        if self.editing_item(session_id)?.is_some() {
            return Err(AppError::EditingInProgress);
        }
        Ok(())
    }

    /// Guard for the export/continue step: a quotation must have at least
    /// one line item and no row still open for editing
    pub fn ensure_exportable(&self, session_id: Uuid) -> AppResult<QuotationState> {
        self.ensure_not_editing(session_id)?;
        let state = self.load(session_id)?;
        if state.is_empty() {
            return Err(AppError::EmptyQuotation);
        }
        Ok(state)
    }
}
