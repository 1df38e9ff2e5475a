use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;

use crate::models::{
    CategoryAmount, CostBreakdown, CostCategory, CostItem, DerivedFinancials, QuoteRecord,
};

/// 计算案件的利润汇总
///
/// 纯函数: 无 I/O, 不会失败。缺失的 sheets/items/budgets 视为空序列。
/// `record.actual_cost` 未设置 (或为 0) 时使用 `cost_items` 的合计。
pub fn compute(record: &QuoteRecord, cost_items: &[CostItem]) -> DerivedFinancials {
    // 1. 展开予算明細, 累计合计与费目别合计
    let mut budget_total = BigDecimal::zero();
    let mut category_totals: IndexMap<String, BigDecimal> = IndexMap::new();
    for line in record.budget_lines() {
        let amount = line.amount();
        if line.is_priced() {
            let entry = category_totals
                .entry(line.category.clone())
                .or_insert_with(BigDecimal::zero);
            *entry = &*entry + &amount;
        }
        budget_total += amount;
    }

    // 2. 利润计算
    let total_amount = &record.total_amount;
    let sales_profit = &record.sales_profit;
    let construction_budget_frame = total_amount - sales_profit;
    let construction_profit = &construction_budget_frame - &budget_total;
    let expected_gross_profit = sales_profit + &construction_profit;

    let actual_cost = match &record.actual_cost {
        Some(cost) if !cost.is_zero() => cost.clone(),
        _ => sum_cost_items(cost_items),
    };
    let final_profit = total_amount - &actual_cost;

    // 3. 百分比
    let profit_rate = percent_of(&final_profit, total_amount);
    let sales_profit_rate = percent_of(sales_profit, total_amount);
    let construction_profit_rate = percent_of(&construction_profit, &construction_budget_frame);
    let expected_gross_profit_rate = percent_of(&expected_gross_profit, total_amount);

    tracing::debug!(
        "汇总完成: 売上 {}, 予算内訳 {}, 予定粗利 {} ({}%), 実行原価 {}",
        total_amount,
        budget_total,
        expected_gross_profit,
        expected_gross_profit_rate,
        actual_cost
    );

    DerivedFinancials {
        construction_budget_frame,
        budget_total,
        construction_profit,
        expected_gross_profit,
        actual_cost,
        final_profit,
        profit_rate,
        sales_profit_rate,
        construction_profit_rate,
        expected_gross_profit_rate,
        category_totals,
    }
}

/// 费目别原価汇总, 按固定费目顺序输出
pub fn cost_breakdown(cost_items: &[CostItem]) -> CostBreakdown {
    let categories = CostCategory::ALL
        .iter()
        .map(|&category| {
            let amount = cost_items
                .iter()
                .filter(|c| c.category == category.id())
                .fold(BigDecimal::zero(), |acc, c| acc + &c.amount);
            CategoryAmount {
                category,
                label: category.label().to_string(),
                amount,
            }
        })
        .collect();

    CostBreakdown {
        categories,
        total_cost: sum_cost_items(cost_items),
    }
}

pub fn sum_cost_items(cost_items: &[CostItem]) -> BigDecimal {
    cost_items
        .iter()
        .fold(BigDecimal::zero(), |acc, c| acc + &c.amount)
}

/// value / denominator × 100, 保留 1 位小数
/// 分母 <= 0 时返回 0
pub fn percent_of(value: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if *denominator <= BigDecimal::zero() {
        return BigDecimal::zero().with_scale(1);
    }
    let ratio = value * BigDecimal::from(100) / denominator;
    round_half_away_from_zero(&ratio)
}

/// 四舍五入到 1 位小数 (远离零方向), 与 toFixed(1) 一致
pub fn round_half_away_from_zero(value: &BigDecimal) -> BigDecimal {
    let shifted = (value * BigDecimal::from(10)).abs();
    let whole = shifted.with_scale(0);  // with_scale 向零截断
    let fraction = &shifted - &whole;
    let rounded = if fraction * BigDecimal::from(2) >= BigDecimal::from(1) {
        whole + BigDecimal::from(1)
    } else {
        whole
    };
    let magnitude = (rounded / BigDecimal::from(10)).with_scale(1);
    if *value < BigDecimal::zero() {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetLine, Item, Sheet};
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn record(total: &str, sales_profit: &str, lines: Vec<BudgetLine>) -> QuoteRecord {
        QuoteRecord {
            total_amount: dec(total),
            sales_profit: dec(sales_profit),
            sheets: vec![Sheet {
                items: vec![Item { budgets: lines }],
            }],
            ..Default::default()
        }
    }

    fn line(quantity: &str, unit_price: Option<&str>, category: &str) -> BudgetLine {
        BudgetLine::new(dec(quantity), unit_price.map(dec), category)
    }

    #[test]
    fn test_concrete_scenario() {
        let r = record(
            "28000000",
            "2800000",
            vec![
                line("100", Some("9500"), "材料費"),
                line("20", Some("20000"), "労務費"),
            ],
        );
        let f = compute(&r, &[]);

        assert_eq!(f.construction_budget_frame, dec("25200000"));
        assert_eq!(f.budget_total, dec("1350000"));
        assert_eq!(f.construction_profit, dec("23850000"));
        assert_eq!(f.expected_gross_profit, dec("26650000"));
        assert_eq!(f.expected_gross_profit_rate, dec("95.2"));
        assert_eq!(f.sales_profit_rate, dec("10.0"));
        // 23850000 / 25200000 = 94.642...
        assert_eq!(f.construction_profit_rate, dec("94.6"));

        let keys: Vec<_> = f.category_totals.keys().cloned().collect();
        assert_eq!(keys, vec!["材料費".to_string(), "労務費".to_string()]);
        assert_eq!(f.category_totals["材料費"], dec("950000"));
        assert_eq!(f.category_totals["労務費"], dec("400000"));
    }

    #[test]
    fn test_negative_sales_profit_propagates() {
        let r = record("10000000", "-500000", vec![]);
        let f = compute(&r, &[]);

        assert_eq!(f.construction_budget_frame, dec("10500000"));
        assert_eq!(f.construction_profit, dec("10500000"));
        assert_eq!(f.expected_gross_profit, dec("10000000"));
        assert_eq!(f.sales_profit_rate, dec("-5.0"));
        assert_eq!(f.expected_gross_profit_rate, dec("100.0"));
    }

    #[test]
    fn test_gross_profit_identity() {
        let cases = [
            record("0", "0", vec![]),
            record("1234567.89", "-98765.4", vec![line("3.5", Some("1200.25"), "外注費")]),
            record("500", "900", vec![line("7", Some("300"), "材料費"), line("1", None, "")]),
        ];
        for r in &cases {
            let f = compute(r, &[]);
            assert_eq!(f.expected_gross_profit, &r.total_amount - &f.budget_total);
        }
    }

    #[test]
    fn test_zero_denominators_yield_zero_rates() {
        let r = record("0", "0", vec![line("10", Some("100"), "材料費")]);
        let f = compute(&r, &[]);

        assert_eq!(f.profit_rate, BigDecimal::zero());
        assert_eq!(f.sales_profit_rate, BigDecimal::zero());
        assert_eq!(f.construction_profit_rate, BigDecimal::zero());
        assert_eq!(f.expected_gross_profit_rate, BigDecimal::zero());
        assert_eq!(f.expected_gross_profit, dec("-1000"));
    }

    #[test]
    fn test_negative_budget_frame_zeroes_construction_rate() {
        let r = record("1000", "1500", vec![line("1", Some("100"), "材料費")]);
        let f = compute(&r, &[]);
        assert_eq!(f.construction_budget_frame, dec("-500"));
        assert_eq!(f.construction_profit, dec("-600"));
        assert_eq!(f.construction_profit_rate, BigDecimal::zero());
        assert_eq!(f.sales_profit_rate, dec("150.0"));
    }

    #[test]
    fn test_negative_total_zeroes_total_based_rates() {
        let r = record("-2000", "100", vec![line("2", Some("50"), "労務費")]);
        let f = compute(&r, &[CostItem::new(dec("300"), "labor")]);
        assert_eq!(f.final_profit, dec("-2300"));
        assert_eq!(f.profit_rate, BigDecimal::zero());
        assert_eq!(f.sales_profit_rate, BigDecimal::zero());
        assert_eq!(f.expected_gross_profit_rate, BigDecimal::zero());
        assert_eq!(f.expected_gross_profit, dec("-2100"));
    }

    #[test]
    fn test_sales_profit_equal_to_total_zeroes_construction_rate() {
        let r = record("1000", "1000", vec![]);
        let f = compute(&r, &[]);
        assert_eq!(f.construction_budget_frame, BigDecimal::zero());
        assert_eq!(f.construction_profit_rate, BigDecimal::zero());
    }

    #[test]
    fn test_missing_sheets_degrade_to_empty() {
        let r = QuoteRecord {
            total_amount: dec("1000000"),
            ..Default::default()
        };
        let f = compute(&r, &[]);
        assert_eq!(f.budget_total, BigDecimal::zero());
        assert!(f.category_totals.is_empty());
    }

    #[test]
    fn test_unpriced_line_counts_zero_and_skips_categories() {
        let r = record(
            "1000",
            "0",
            vec![line("5", None, "機械費"), line("2", Some("100"), "材料費")],
        );
        let f = compute(&r, &[]);
        assert_eq!(f.budget_total, dec("200"));
        assert_eq!(f.category_totals.len(), 1);
        assert!(!f.category_totals.contains_key("機械費"));
    }

    #[test]
    fn test_actual_cost_falls_back_to_cost_items() {
        let items = vec![
            CostItem::new(dec("300000"), "labor"),
            CostItem::new(dec("200000"), "material"),
        ];
        let mut r = record("2000000", "0", vec![]);

        let f = compute(&r, &items);
        assert_eq!(f.actual_cost, dec("500000"));
        assert_eq!(f.final_profit, dec("1500000"));
        assert_eq!(f.profit_rate, dec("75.0"));

        r.actual_cost = Some(dec("0"));
        assert_eq!(compute(&r, &items).actual_cost, dec("500000"));

        r.actual_cost = Some(dec("1800000"));
        let f = compute(&r, &items);
        assert_eq!(f.actual_cost, dec("1800000"));
        assert_eq!(f.final_profit, dec("200000"));
        assert_eq!(f.profit_rate, dec("10.0"));
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round_half_away_from_zero(&dec("12.25")), dec("12.3"));
        assert_eq!(round_half_away_from_zero(&dec("12.24")), dec("12.2"));
        assert_eq!(round_half_away_from_zero(&dec("-12.25")), dec("-12.3"));
        assert_eq!(round_half_away_from_zero(&dec("0.05")), dec("0.1"));
        assert_eq!(round_half_away_from_zero(&dec("7")), dec("7.0"));
    }

    #[test]
    fn test_cost_breakdown_fixed_order() {
        let items = vec![
            CostItem::new(dec("100"), "material"),
            CostItem::new(dec("50"), "labor"),
            CostItem::new(dec("25"), "material"),
            CostItem::new(dec("10"), "misc"),
        ];
        let b = cost_breakdown(&items);

        let ids: Vec<_> = b.categories.iter().map(|c| c.category.id()).collect();
        assert_eq!(ids, vec!["labor", "subcontract", "material", "machine", "expense"]);
        assert_eq!(b.categories[0].amount, dec("50"));
        assert_eq!(b.categories[1].amount, BigDecimal::zero());
        assert_eq!(b.categories[2].amount, dec("125"));
        assert_eq!(b.categories[2].label, "材料費");
        assert_eq!(b.total_cost, dec("185"));
    }
}
