use bigdecimal::{BigDecimal, Zero};
use construction_rollup::service::gantt::parse_date;
use construction_rollup::{compute, position, Normalizer};
use serde_json::json;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[test]
fn camel_case_unit_price_matches_snake_case() {
    let n = Normalizer::default();
    let snake = n.quote(&json!({ "total_amount": 10000,
        "sheets": [{ "items": [{ "budgets": [{ "quantity": 4, "unit_price": 500 }] }] }] }));
    let camel = n.quote(&json!({ "total_amount": 10000,
        "sheets": [{ "items": [{ "budgets": [{ "quantity": 4, "unitPrice": 500 }] }] }] }));

    let a = compute(&snake, &[]);
    let b = compute(&camel, &[]);
    assert_eq!(a.budget_total, dec("2000"));
    assert_eq!(a.budget_total, b.budget_total);
    assert_eq!(a.category_totals, b.category_totals);
}

#[test]
fn negative_sales_profit_from_raw_json() {
    let record = Normalizer::default().quote(&json!({
        "total_amount": 10000000,
        "sales_profit": -500000
    }));
    let f = compute(&record, &[]);
    assert_eq!(f.construction_budget_frame, dec("10500000"));
    assert_eq!(f.construction_profit, dec("10500000"));
    assert_eq!(f.expected_gross_profit, dec("10000000"));
}

#[test]
fn gross_profit_identity_over_mixed_inputs() {
    let n = Normalizer::default();
    let records = [
        json!({}),
        json!({ "total_amount": "12345.67", "sales_profit": 2000.5,
            "sheets": [{ "items": [{ "budgets": [
                { "quantity": 1.5, "unit_price": 333.33, "type": "外注費" },
                { "quantity": 2, "unitPrice": "10" },
                { "quantity": 9 }
            ]}]}, { "items": null }] }),
        json!({ "total_amount": 100, "sales_profit": 5000,
            "sheets": [{ "items": [{ "budgets": [{ "quantity": 1, "unit_price": 1 }] }] }] }),
    ];
    for raw in &records {
        let record = n.quote(raw);
        let f = compute(&record, &[]);
        assert_eq!(f.expected_gross_profit, &record.total_amount - &f.budget_total);
    }
}

#[test]
fn zero_total_never_divides() {
    let record = Normalizer::default().quote(&json!({ "total_amount": 0, "sales_profit": 100 }));
    let f = compute(&record, &[]);
    assert!(f.profit_rate.is_zero());
    assert!(f.sales_profit_rate.is_zero());
    assert!(f.construction_profit_rate.is_zero());
    assert!(f.expected_gross_profit_rate.is_zero());
}

#[test]
fn gantt_position_guards_and_floor() {
    assert!(position(None, parse_date("2024-09-30")).is_none());
    let bar = position(parse_date("2024-04-01"), parse_date("2024-04-02")).unwrap();
    assert_eq!(bar.width_percent, 2.0);
}
