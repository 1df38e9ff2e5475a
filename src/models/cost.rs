use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 原価明细 (CostItem)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostItem {
    pub amount: BigDecimal,
    pub category: String,  // labor / subcontract / material / machine / expense
}

impl CostItem {
    pub fn new(amount: BigDecimal, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
        }
    }
}

/// 费目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Labor,
    Subcontract,
    Material,
    Machine,
    Expense,
}

impl CostCategory {
    /// 原価画面的固定显示顺序
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Labor,
        CostCategory::Subcontract,
        CostCategory::Material,
        CostCategory::Machine,
        CostCategory::Expense,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CostCategory::Labor => "labor",
            CostCategory::Subcontract => "subcontract",
            CostCategory::Material => "material",
            CostCategory::Machine => "machine",
            CostCategory::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Labor => "労務費",
            CostCategory::Subcontract => "外注費",
            CostCategory::Material => "材料費",
            CostCategory::Machine => "機械費",
            CostCategory::Expense => "経費",
        }
    }
}

/// 单个费目的合计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: CostCategory,
    pub label: String,
    pub amount: BigDecimal,
}

/// 费目别原価汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub categories: Vec<CategoryAmount>,
    pub total_cost: BigDecimal,  // 含未知费目
}
