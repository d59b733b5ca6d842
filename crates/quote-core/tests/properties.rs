//! Property-based tests for the quote state manager.
//!
//! These use proptest to drive `QuoteState` with generated inputs and check:
//! 1. Total hours is the sum of item hours
//! 2. grand total == subtotal + vat, and vat is zero when VAT is off
//! 3. Rejected adds never change the collection
//! 4. Edits and removals with an unknown id never change the collection

use proptest::prelude::*;
use quote_core::{LineItemPatch, Money, Pricing, QuoteState, SequentialIds, VatRate};

// -- Strategies --

/// Hours as the form produces them: halves and tenths, up to 200.
fn hours_strategy() -> impl Strategy<Value = f64> {
    (1u32..=2000).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn description_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,30}").expect("valid regex")
}

fn pricing_strategy() -> impl Strategy<Value = Pricing> {
    (1i64..=50_000, 0u32..=10_000).prop_map(|(rate, bps)| {
        Pricing::new(Money::from_cents(rate), VatRate::from_bps(bps)).expect("valid pricing")
    })
}

fn state_with(pricing: Pricing, items: &[(String, f64)]) -> QuoteState<SequentialIds> {
    let mut state = QuoteState::with_ids(pricing, SequentialIds::new());
    for (description, hours) in items {
        state.add_item(description, *hours).expect("generated item is valid");
    }
    state
}

// -- Properties --

proptest! {
    #[test]
    fn total_hours_is_sum_of_item_hours(
        items in prop::collection::vec((description_strategy(), hours_strategy()), 0..40),
    ) {
        let state = state_with(Pricing::default(), &items);
        let expected: f64 = items.iter().map(|(_, h)| h).sum();
        prop_assert!((state.totals().total_hours - expected).abs() < 1e-9);
    }

    #[test]
    fn grand_total_is_subtotal_plus_vat(
        pricing in pricing_strategy(),
        items in prop::collection::vec((description_strategy(), hours_strategy()), 0..20),
        vat_applied in any::<bool>(),
    ) {
        let mut state = state_with(pricing, &items);
        state.set_vat_applied(vat_applied);

        let totals = state.totals();
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.vat);
        if !vat_applied {
            prop_assert!(totals.vat.is_zero());
        }
    }

    #[test]
    fn invalid_add_never_changes_collection(
        items in prop::collection::vec((description_strategy(), hours_strategy()), 0..10),
        blank in prop::string::string_regex("[ \t\n]{0,5}").expect("valid regex"),
        bad_hours in prop_oneof![Just(0.0), -1000.0f64..=0.0, Just(f64::NAN)],
        description in description_strategy(),
    ) {
        let mut state = state_with(Pricing::default(), &items);
        let before = state.quote().clone();

        prop_assert!(state.add_item(&blank, 1.0).is_err());
        prop_assert!(state.add_item(&description, bad_hours).is_err());
        prop_assert_eq!(state.quote(), &before);
    }

    #[test]
    fn unknown_id_edits_never_change_collection(
        items in prop::collection::vec((description_strategy(), hours_strategy()), 0..10),
        hours in hours_strategy(),
    ) {
        let mut state = state_with(Pricing::default(), &items);
        let before = state.quote().clone();

        prop_assert!(!state.update_item("no-such-item", LineItemPatch::hours(hours)));
        prop_assert!(!state.remove_item("no-such-item"));
        prop_assert_eq!(state.quote(), &before);
    }
}

#[test]
fn worked_example_two_items_at_22_percent() {
    let rate = Money::from_cents(4000);
    let pricing = Pricing::new(rate, VatRate::from_bps(2200)).unwrap();
    let state = state_with(
        pricing,
        &[("Homepage".to_string(), 2.0), ("Checkout".to_string(), 3.5)],
    );

    let totals = state.totals();
    assert_eq!(totals.total_hours, 5.5);
    assert_eq!(totals.subtotal, rate.for_hours(5.5)); // 5.5R = €220.00
    assert_eq!(totals.vat.cents(), 4840); // 0.22 × 5.5R
    assert_eq!(totals.grand_total.cents(), 26840); // 1.22 × 5.5R
}
