//! Tests for the quotation aggregation rules
//!
//! Subtotal additivity, the independence of the tax and discount rates, and
//! the end-to-end arithmetic of the quotation state.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::{
    discount_amount, grand_total, subtotal, tax_amount, LineItem, LineItemUpdate, QuotationState,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Build an item whose total equals the given price
fn item_with_total(cents: u64) -> LineItem {
    let mut item = LineItem::new();
    item.apply_update(LineItemUpdate::UnitPrice(Decimal::new(cents as i64, 2)));
    item
}

// =============================================================================
// Subtotal additivity
// =============================================================================
// For any collection, subtotal == Σ item.total, including the empty
// collection where the subtotal is zero.

mod subtotal_additivity {
    use super::*;

    #[test]
    fn empty_collection_sums_to_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn single_item_subtotal_is_its_total() {
        let items = vec![item_with_total(12_345)];
        assert_eq!(subtotal(&items), dec("123.45"));
    }

    #[test]
    fn zero_total_items_contribute_nothing() {
        let items = vec![item_with_total(0), item_with_total(5_000)];
        assert_eq!(subtotal(&items), dec("50.00"));
    }
}

// =============================================================================
// Tax/discount independence
// =============================================================================
// grand_total == S + S*t/100 - S*d/100; the two percentages never compound.

mod rate_independence {
    use super::*;

    #[test]
    fn tax_applies_to_pre_discount_subtotal() {
        let s = dec("300");
        assert_eq!(tax_amount(s, dec("6")), dec("18"));
        assert_eq!(discount_amount(s, dec("10")), dec("30"));
        assert_eq!(grand_total(s, dec("6"), dec("10")), dec("288"));
    }

    #[test]
    fn compounded_formula_is_rejected() {
        let s = dec("1000");
        let additive = grand_total(s, dec("10"), dec("10"));
        let compounded = s * dec("1.10") * dec("0.90");
        // 1000 + 100 - 100 = 1000, while compounding would give 990
        assert_eq!(additive, dec("1000"));
        assert_ne!(additive, compounded);
    }

    #[test]
    fn zero_rates_leave_subtotal_untouched() {
        let s = dec("512.75");
        assert_eq!(grand_total(s, Decimal::ZERO, Decimal::ZERO), s);
    }

    #[test]
    fn full_discount_cancels_subtotal() {
        let s = dec("250");
        assert_eq!(grand_total(s, Decimal::ZERO, dec("100")), Decimal::ZERO);
    }
}

// =============================================================================
// End-to-end state arithmetic
// =============================================================================

mod state_scenario {
    use super::*;

    #[test]
    fn wizard_scenario_produces_expected_totals() {
        let mut state = QuotationState::default();
        let item = state.add_item();
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.total, Decimal::ZERO);

        state.update_item(item.id, LineItemUpdate::UnitPrice(dec("100")));
        assert_eq!(state.item(item.id).unwrap().total, dec("100"));

        state.update_item(item.id, LineItemUpdate::Quantity(dec("3")));
        assert_eq!(state.item(item.id).unwrap().total, dec("300"));

        state.tax_rate = dec("6");
        state.discount = dec("10");

        let totals = state.totals();
        assert_eq!(totals.subtotal, dec("300"));
        assert_eq!(totals.tax_amount, dec("18"));
        assert_eq!(totals.discount_amount, dec("30"));
        assert_eq!(totals.grand_total, dec("288"));
    }

    #[test]
    fn removal_of_absent_id_leaves_collection_unchanged() {
        let mut state = QuotationState::default();
        state.add_item();
        state.add_item();
        let before = state.clone();

        state.remove_item(uuid::Uuid::new_v4());

        assert_eq!(state, before);
    }
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Subtotal additivity over arbitrary collections
    #[test]
    fn subtotal_is_sum_of_item_totals(
        cents in prop::collection::vec(0u64..10_000_000, 0..20),
    ) {
        let items: Vec<LineItem> = cents.iter().map(|&c| item_with_total(c)).collect();
        let expected: Decimal = cents
            .iter()
            .map(|&c| Decimal::new(c as i64, 2))
            .sum();
        prop_assert_eq!(subtotal(&items), expected);
    }

    /// Tax and discount apply independently to the same subtotal
    #[test]
    fn grand_total_matches_additive_formula(
        subtotal_cents in 0u64..100_000_000,
        tax in 0u32..=100,
        discount in 0u32..=100,
    ) {
        let s = Decimal::new(subtotal_cents as i64, 2);
        let t = Decimal::from(tax);
        let d = Decimal::from(discount);

        let expected = s + (s * t / Decimal::from(100)) - (s * d / Decimal::from(100));
        prop_assert_eq!(grand_total(s, t, d), expected);
    }

    /// Totals for an item always satisfy total == quantity * unit_price
    #[test]
    fn item_total_invariant_holds_after_updates(
        quantity_tenths in 0u64..100_000,
        price_cents in 0u64..10_000_000,
    ) {
        let mut item = LineItem::new();
        item.apply_update(LineItemUpdate::Quantity(Decimal::new(quantity_tenths as i64, 1)));
        item.apply_update(LineItemUpdate::UnitPrice(Decimal::new(price_cents as i64, 2)));
        prop_assert_eq!(item.total, item.quantity * item.unit_price);
    }
}
