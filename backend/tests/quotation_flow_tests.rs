//! Tests for the quotation service over an in-memory store
//!
//! Exercises the wizard flow end to end: add/update/remove, rates, the
//! single-slot editing token, the empty-quotation export guard, and the
//! load/save persistence boundaries.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use construction_quotation_backend::error::AppError;
use construction_quotation_backend::services::{DetailsService, QuotationService};
use construction_quotation_backend::store::{KeyValueStore, MemoryStore};
use shared::{ClientDetails, LineItemUpdate};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

fn sample_client() -> ClientDetails {
    ClientDetails {
        client_name: "Lim Construction Sdn Bhd".to_string(),
        client_email: "lim@example.com".to_string(),
        client_phone: "012-3456789".to_string(),
        project_name: "Taman Melati Renovation".to_string(),
        project_address: "12 Jalan Melati, Kuala Lumpur".to_string(),
        project_description: "Kitchen and bathroom renovation".to_string(),
        valid_until: None,
        payment_terms: "50% upfront, 50% on completion".to_string(),
    }
}

// =============================================================================
// Wizard flow
// =============================================================================

mod wizard_flow {
    use super::*;

    #[test]
    fn full_scenario_from_empty_to_totals() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        // fresh session reads as the empty quotation
        let view = service.view(session).unwrap();
        assert!(view.line_items.is_empty());
        assert_eq!(view.totals.subtotal, Decimal::ZERO);

        let item = service.add_item(session).unwrap();
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.total, Decimal::ZERO);

        service
            .update_item(session, item.id, LineItemUpdate::UnitPrice(dec("100")))
            .unwrap();
        service
            .update_item(session, item.id, LineItemUpdate::Quantity(dec("3")))
            .unwrap();

        let totals = service.set_rates(session, dec("6"), dec("10")).unwrap();
        assert_eq!(totals.subtotal, dec("300"));
        assert_eq!(totals.tax_amount, dec("18"));
        assert_eq!(totals.discount_amount, dec("30"));
        assert_eq!(totals.grand_total, dec("288"));
    }

    #[test]
    fn state_survives_service_reconstruction() {
        // a new service over the same store sees the last-saved state,
        // the way a routed page re-reads the wizard state on entry
        let store = store();
        let session = Uuid::new_v4();

        let item_id = {
            let service = QuotationService::new(store.clone());
            let item = service.add_item(session).unwrap();
            service
                .update_item(session, item.id, LineItemUpdate::UnitPrice(dec("45.50")))
                .unwrap();
            item.id
        };

        let service = QuotationService::new(store);
        let view = service.view(session).unwrap();
        assert_eq!(view.line_items.len(), 1);
        assert_eq!(view.line_items[0].id, item_id);
        assert_eq!(view.line_items[0].total, dec("45.50"));
    }

    #[test]
    fn sessions_are_isolated() {
        let store = store();
        let service = QuotationService::new(store);
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        service.add_item(first).unwrap();

        assert!(service.view(second).unwrap().line_items.is_empty());
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let item = service.add_item(session).unwrap();
        let items = service
            .update_item(session, Uuid::new_v4(), LineItemUpdate::Quantity(dec("9")))
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0], item);
    }

    #[test]
    fn remove_with_unknown_id_is_noop() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        service.add_item(session).unwrap();
        service.finish_editing(session).unwrap();

        let before = service.view(session).unwrap().line_items;
        let after = service.remove_item(session, Uuid::new_v4()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn material_selection_through_service() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let item = service.add_item(session).unwrap();
        service
            .update_item(session, item.id, LineItemUpdate::Quantity(dec("2")))
            .unwrap();

        let updated = service.select_material(session, item.id, "m043").unwrap();
        assert_eq!(updated.unit_price, dec("1200.00"));
        assert_eq!(updated.total, dec("2400.00"));
        assert_eq!(updated.material_name.as_deref(), Some("Split AC Unit (1.0HP)"));

        let err = service
            .select_material(session, item.id, "m999")
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

// =============================================================================
// Validation at the mutation boundary
// =============================================================================

mod validation {
    use super::*;

    #[test]
    fn negative_quantity_is_rejected() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();
        let item = service.add_item(session).unwrap();

        let err = service
            .update_item(session, item.id, LineItemUpdate::Quantity(dec("-1")))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn out_of_range_rates_are_rejected() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        assert!(service.set_rates(session, dec("101"), dec("0")).is_err());
        assert!(service.set_rates(session, dec("5"), dec("-2")).is_err());
        assert!(service.set_rates(session, dec("100"), dec("100")).is_ok());
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();
        let item = service.add_item(session).unwrap();

        let err = service
            .update_item(session, item.id, LineItemUpdate::Unit("furlong".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}

// =============================================================================
// Editing token
// =============================================================================

mod editing_lock {
    use super::*;

    #[test]
    fn add_marks_the_new_item_as_editing() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let item = service.add_item(session).unwrap();
        assert_eq!(service.editing_item(session).unwrap(), Some(item.id));
    }

    #[test]
    fn structural_operations_blocked_while_editing() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let item = service.add_item(session).unwrap();

        let err = service.add_item(session).unwrap_err();
        assert!(matches!(err, AppError::EditingInProgress));
        let err = service.remove_item(session, item.id).unwrap_err();
        assert!(matches!(err, AppError::EditingInProgress));

        // field updates stay permitted while the row is open
        service
            .update_item(session, item.id, LineItemUpdate::UnitPrice(dec("10")))
            .unwrap();

        service.finish_editing(session).unwrap();
        service.add_item(session).unwrap();
    }

    #[test]
    fn switching_edit_target_requires_finishing_first() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let first = service.add_item(session).unwrap();
        service.finish_editing(session).unwrap();
        let second = service.add_item(session).unwrap();

        let err = service.begin_editing(session, first.id).unwrap_err();
        assert!(matches!(err, AppError::EditingInProgress));

        service.finish_editing(session).unwrap();
        service.begin_editing(session, first.id).unwrap();
        assert_eq!(service.editing_item(session).unwrap(), Some(first.id));
        // re-asserting the same target is fine
        service.begin_editing(session, first.id).unwrap();

        let _ = second;
    }

    #[test]
    fn finish_editing_is_idempotent() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        service.finish_editing(session).unwrap();
        service.finish_editing(session).unwrap();
        assert_eq!(service.editing_item(session).unwrap(), None);
    }
}

// =============================================================================
// Export guard and session reset
// =============================================================================

mod export_guard {
    use super::*;

    #[test]
    fn empty_quotation_cannot_proceed_to_export() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        let err = service.ensure_exportable(session).unwrap_err();
        assert!(matches!(err, AppError::EmptyQuotation));
    }

    #[test]
    fn zero_total_item_is_enough_to_proceed() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        service.add_item(session).unwrap();
        service.finish_editing(session).unwrap();

        let state = service.ensure_exportable(session).unwrap();
        assert_eq!(state.line_items.len(), 1);
        assert_eq!(state.totals().subtotal, Decimal::ZERO);
    }

    #[test]
    fn open_editor_blocks_export() {
        let store = store();
        let service = QuotationService::new(store);
        let session = Uuid::new_v4();

        service.add_item(session).unwrap();

        let err = service.ensure_exportable(session).unwrap_err();
        assert!(matches!(err, AppError::EditingInProgress));
    }

    #[test]
    fn reset_discards_the_whole_session() {
        let store = store();
        let quotations = QuotationService::new(store.clone());
        let details = DetailsService::new(store);
        let session = Uuid::new_v4();

        details.set_client(session, sample_client()).unwrap();
        quotations.add_item(session).unwrap();
        quotations.finish_editing(session).unwrap();
        quotations.set_rates(session, dec("6"), dec("10")).unwrap();

        details.reset(session).unwrap();

        let view = quotations.view(session).unwrap();
        assert!(view.line_items.is_empty());
        assert_eq!(view.tax_rate, Decimal::ZERO);
        assert_eq!(view.discount, Decimal::ZERO);
        assert!(details.client(session).unwrap().is_none());
    }
}

// =============================================================================
// Pass-through details
// =============================================================================

mod details {
    use super::*;

    #[test]
    fn client_round_trips_through_the_store() {
        let store = store();
        let service = DetailsService::new(store);
        let session = Uuid::new_v4();

        assert!(service.client(session).unwrap().is_none());
        service.set_client(session, sample_client()).unwrap();
        let loaded = service.client(session).unwrap().unwrap();
        assert_eq!(loaded, sample_client());
    }

    #[test]
    fn invalid_client_is_rejected() {
        let store = store();
        let service = DetailsService::new(store);
        let session = Uuid::new_v4();

        let mut client = sample_client();
        client.client_email = "not-an-email".to_string();
        assert!(service.set_client(session, client).is_err());
    }

    #[test]
    fn company_defaults_until_overridden() {
        let store = store();
        let service = DetailsService::new(store);
        let session = Uuid::new_v4();

        let company = service.company(session).unwrap();
        assert_eq!(company.name, "Soterra Zenith");

        let mut updated = company.clone();
        updated.name = "Menara Binaan Sdn Bhd".to_string();
        service.set_company(session, updated.clone()).unwrap();
        assert_eq!(service.company(session).unwrap(), updated);
    }

    #[test]
    fn terms_default_to_construction_boilerplate() {
        let store = store();
        let service = DetailsService::new(store);
        let session = Uuid::new_v4();

        let terms = service.terms(session).unwrap();
        assert!(terms.starts_with("1. VALIDITY"));

        service.set_terms(session, "Cash only.").unwrap();
        assert_eq!(service.terms(session).unwrap(), "Cash only.");
    }

    #[test]
    fn logo_must_be_base64() {
        let store = store();
        let service = DetailsService::new(store);
        let session = Uuid::new_v4();

        assert!(service.set_logo(session, "not base64 ???").is_err());
        service.set_logo(session, "aGVsbG8=").unwrap();
        service
            .set_logo(session, "data:image/png;base64,aGVsbG8=")
            .unwrap();
        assert!(service.logo(session).unwrap().is_some());
    }
}
