use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{CostItem, QuoteRecord};

/// 利润汇总结果 (每次调用重新计算, 不缓存)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedFinancials {
    pub construction_budget_frame: BigDecimal,  // 工事予算枠 = 売上 - 営業利益
    pub budget_total: BigDecimal,               // 予算内訳合計
    pub construction_profit: BigDecimal,        // 工事予定利益
    pub expected_gross_profit: BigDecimal,      // 予定粗利
    pub actual_cost: BigDecimal,                // 実行原価
    pub final_profit: BigDecimal,               // 実績粗利
    pub profit_rate: BigDecimal,
    pub sales_profit_rate: BigDecimal,
    pub construction_profit_rate: BigDecimal,
    pub expected_gross_profit_rate: BigDecimal,
    pub category_totals: IndexMap<String, BigDecimal>,  // 首次出现顺序
}

/// 批量汇总的单个输入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    pub id: String,
    pub record: QuoteRecord,
    pub cost_items: Vec<CostItem>,
}

/// 单个案件的汇总结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRollup {
    pub id: String,
    pub total_amount: BigDecimal,
    pub sales_profit: BigDecimal,
    pub financials: DerivedFinancials,
}

/// 多案件汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub project_count: usize,
    pub total_amount: BigDecimal,
    pub budget_total: BigDecimal,
    pub expected_gross_profit: BigDecimal,
    pub actual_cost: BigDecimal,
    pub final_profit: BigDecimal,
    pub expected_gross_profit_rate: BigDecimal,
    pub profit_rate: BigDecimal,
    pub projects: Vec<ProjectRollup>,
}
