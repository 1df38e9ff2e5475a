use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// 未指定费目时的默认值
pub const DEFAULT_BUDGET_CATEGORY: &str = "労務費";

/// 見積/案件记录 (规范化后的严格类型)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub total_amount: BigDecimal,          // 売上 (税抜)
    pub sales_profit: BigDecimal,          // 営業利益, 可为负
    pub sheets: Vec<Sheet>,
    pub actual_cost: Option<BigDecimal>,   // 実行原価
    pub order_amount: Option<BigDecimal>,  // 注文金額 (税込)
}

impl QuoteRecord {
    /// 按文档顺序展开 sheets → items → budgets
    pub fn budget_lines(&self) -> impl Iterator<Item = &BudgetLine> {
        self.sheets
            .iter()
            .flat_map(|sheet| sheet.items.iter())
            .flat_map(|item| item.budgets.iter())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub budgets: Vec<BudgetLine>,
}

/// 予算明細行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    pub quantity: BigDecimal,
    pub unit_price: Option<BigDecimal>,  // None = 未设置单价
    pub category: String,
}

impl BudgetLine {
    pub fn new(quantity: BigDecimal, unit_price: Option<BigDecimal>, category: impl Into<String>) -> Self {
        Self {
            quantity,
            unit_price,
            category: category.into(),
        }
    }

    /// 金额 = 数量 × 单价, 未设置单价时为 0
    pub fn amount(&self) -> BigDecimal {
        match &self.unit_price {
            Some(price) => &self.quantity * price,
            None => BigDecimal::zero(),
        }
    }

    pub fn is_priced(&self) -> bool {
        self.unit_price.as_ref().is_some_and(|p| !p.is_zero())
    }
}
