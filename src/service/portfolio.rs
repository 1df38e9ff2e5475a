use bigdecimal::{BigDecimal, Zero};
use rayon::prelude::*;

use crate::models::{PortfolioSummary, ProjectInput, ProjectRollup};
use crate::service::rollup::{compute, percent_of};

/// 多案件并行汇总 (结果保持输入顺序)
pub fn rollup_all(projects: &[ProjectInput]) -> PortfolioSummary {
    let rollups: Vec<ProjectRollup> = projects
        .par_iter()
        .map(|p| ProjectRollup {
            id: p.id.clone(),
            total_amount: p.record.total_amount.clone(),
            sales_profit: p.record.sales_profit.clone(),
            financials: compute(&p.record, &p.cost_items),
        })
        .collect();

    let mut total_amount = BigDecimal::zero();
    let mut budget_total = BigDecimal::zero();
    let mut expected_gross_profit = BigDecimal::zero();
    let mut actual_cost = BigDecimal::zero();
    let mut final_profit = BigDecimal::zero();
    for r in &rollups {
        total_amount += &r.total_amount;
        budget_total += &r.financials.budget_total;
        expected_gross_profit += &r.financials.expected_gross_profit;
        actual_cost += &r.financials.actual_cost;
        final_profit += &r.financials.final_profit;
    }

    let expected_gross_profit_rate = percent_of(&expected_gross_profit, &total_amount);
    let profit_rate = percent_of(&final_profit, &total_amount);

    tracing::info!(
        "案件汇总完成: {} 件, 売上合計 {}, 予定粗利 {} ({}%)",
        rollups.len(),
        total_amount,
        expected_gross_profit,
        expected_gross_profit_rate
    );

    PortfolioSummary {
        project_count: rollups.len(),
        total_amount,
        budget_total,
        expected_gross_profit,
        actual_cost,
        final_profit,
        expected_gross_profit_rate,
        profit_rate,
        projects: rollups,
    }
}
