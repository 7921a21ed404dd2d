use fortnox_sync::config::GatewayConfig;
use fortnox_sync::domain::event::SourceInvoice;
use fortnox_sync::services::order_builder::build_order;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn invoice(
    descriptions: Vec<String>,
    amount: i64,
    percent_off: Option<f64>,
    tax_percent: Option<f64>,
) -> SourceInvoice {
    let lines: Vec<serde_json::Value> = descriptions
        .iter()
        .map(|d| serde_json::json!({ "description": d, "amount": amount, "quantity": 1 }))
        .collect();
    let mut object = serde_json::json!({
        "id": "in_prop",
        "customer": "cus_prop",
        "billing": "charge_automatically",
        "currency": "eur",
        "date": 1528718400,
        "lines": { "data": lines },
        "metadata": {},
    });
    if let Some(p) = tax_percent {
        object["tax_percent"] = serde_json::json!(p);
    }
    if let Some(p) = percent_off {
        object["discount"] =
            serde_json::json!({ "coupon": { "id": "PROMO", "name": "Promo", "percent_off": p } });
    }
    serde_json::from_value(object).unwrap()
}

proptest! {
    /// Every `×` is gone after substitution and the character count is
    /// unchanged — the replacement is one-for-one.
    #[test]
    fn substitution_is_one_for_one(
        chars in prop::collection::vec(prop_oneof![Just('×'), any::<char>()], 0..40)
    ) {
        let description: String = chars.into_iter().collect();
        let order = build_order(
            &invoice(vec![description.clone()], 1000, None, None),
            "42",
            &GatewayConfig::default(),
        );
        prop_assert!(!order.order_rows[0].description.contains('×'));
        prop_assert_eq!(
            order.order_rows[0].description.chars().count(),
            description.chars().count()
        );
    }

    /// Minor-to-major conversion inverts exactly: price × 100 restores the
    /// original minor-unit amount, with no float drift.
    #[test]
    fn price_scaling_inverts(amount in 0i64..=10_000_000_000) {
        let order = build_order(
            &invoice(vec!["item".to_string()], amount, None, None),
            "42",
            &GatewayConfig::default(),
        );
        prop_assert_eq!(
            order.order_rows[0].price * Decimal::from(100),
            Decimal::from(amount)
        );
    }

    /// Row count is items + one promo row when a percent discount applies +
    /// the trailing date row.
    #[test]
    fn row_count_matches_shape(
        n_items in 0usize..10,
        discount in proptest::option::of(0f64..100.0)
    ) {
        let descriptions = vec!["item".to_string(); n_items];
        let order = build_order(
            &invoice(descriptions, 1000, discount, None),
            "42",
            &GatewayConfig::default(),
        );
        let expected = n_items + usize::from(discount.is_some()) + 1;
        prop_assert_eq!(order.order_rows.len(), expected);
    }

    /// VAT is the tax percent truncated toward zero, never rounded up.
    #[test]
    fn vat_truncates_toward_zero(tax in 0f64..100.0) {
        let order = build_order(
            &invoice(vec!["item".to_string()], 1000, None, Some(tax)),
            "42",
            &GatewayConfig::default(),
        );
        let vat = order.order_rows[0].vat;
        prop_assert!(vat >= 0);
        prop_assert!(f64::from(vat) <= tax);
        prop_assert!(tax - f64::from(vat) < 1.0);
    }
}
