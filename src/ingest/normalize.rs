use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde_json::Value;
use std::str::FromStr;

use crate::models::{
    BudgetLine, CostItem, Invoice, Item, Payment, ProjectInput, QuoteRecord, ScheduleEntry, Sheet,
    DEFAULT_BUDGET_CATEGORY,
};
use crate::service::gantt;

/// 数据入口: 将后端/Excel 导入的非严格 JSON 规范化为严格类型
///
/// 宽松处理, 不会失败: 缺失、null、类型不符的字段一律按默认值处理。
#[derive(Debug, Clone)]
pub struct Normalizer {
    default_category: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET_CATEGORY)
    }
}

impl Normalizer {
    pub fn new(default_category: &str) -> Self {
        let default_category = if default_category.trim().is_empty() {
            DEFAULT_BUDGET_CATEGORY
        } else {
            default_category.trim()
        };
        Self {
            default_category: default_category.to_string(),
        }
    }

    /// 見積/案件记录
    pub fn quote(&self, value: &Value) -> QuoteRecord {
        // total_amount 为空或 0 时兼容旧字段 total
        let total_amount = first_nonzero(&[value.get("total_amount"), value.get("total")])
            .unwrap_or_else(BigDecimal::zero);

        QuoteRecord {
            total_amount,
            sales_profit: decimal(value.get("sales_profit")).unwrap_or_else(BigDecimal::zero),
            sheets: array(value.get("sheets")).map(|s| self.sheet(s)).collect(),
            actual_cost: decimal(value.get("actual_cost")),
            order_amount: decimal(value.get("order_amount")),
        }
    }

    fn sheet(&self, value: &Value) -> Sheet {
        Sheet {
            items: array(value.get("items")).map(|i| self.item(i)).collect(),
        }
    }

    fn item(&self, value: &Value) -> Item {
        Item {
            budgets: array(value.get("budgets")).map(|b| self.budget_line(b)).collect(),
        }
    }

    /// 单价优先 unit_price, 其次 unitPrice
    fn budget_line(&self, value: &Value) -> BudgetLine {
        BudgetLine {
            quantity: decimal(value.get("quantity")).unwrap_or_else(BigDecimal::zero),
            unit_price: first_nonzero(&[value.get("unit_price"), value.get("unitPrice")]),
            category: text(value.get("type"))
                .unwrap_or_else(|| self.default_category.clone()),
        }
    }

    pub fn cost_items(&self, value: &Value) -> Vec<CostItem> {
        array(Some(value))
            .map(|c| CostItem {
                amount: decimal(c.get("amount")).unwrap_or_else(BigDecimal::zero),
                category: text(c.get("category")).unwrap_or_default(),
            })
            .collect()
    }

    pub fn invoices(&self, value: &Value) -> Vec<Invoice> {
        array(Some(value))
            .map(|i| Invoice {
                total_amount: decimal(i.get("total_amount")).unwrap_or_else(BigDecimal::zero),
                status: text(i.get("status")).unwrap_or_default(),
            })
            .collect()
    }

    pub fn payments(&self, value: &Value) -> Vec<Payment> {
        array(Some(value))
            .map(|p| Payment {
                amount: decimal(p.get("amount")).unwrap_or_else(BigDecimal::zero),
                status: text(p.get("status")).unwrap_or_default(),
                category: text(p.get("category")).unwrap_or_default(),
            })
            .collect()
    }

    /// 批量汇总的单个案件: `{ id, record, cost_items }`
    pub fn project(&self, value: &Value) -> ProjectInput {
        ProjectInput {
            id: identifier(value.get("id")),
            record: self.quote(value.get("record").unwrap_or(&Value::Null)),
            cost_items: self.cost_items(value.get("cost_items").unwrap_or(&Value::Null)),
        }
    }

    /// 工程条目
    ///
    /// 带 period 的条目 (由案件生成) 在起止日期缺失时按 period 补全。
    pub fn schedule(&self, value: &Value) -> ScheduleEntry {
        let mut start_date = text(value.get("start_date")).and_then(|s| gantt::parse_date(&s));
        let mut end_date = text(value.get("end_date")).and_then(|s| gantt::parse_date(&s));

        if let Some(period) = value.get("period").filter(|p| !p.is_null()) {
            let (start, end) = gantt::period_bounds(period.as_str());
            start_date = start_date.or(Some(start));
            end_date = end_date.or(Some(end));
        }

        ScheduleEntry {
            id: identifier(value.get("id").or_else(|| value.get("project_id"))),
            start_date,
            end_date,
            progress_rate: decimal(value.get("progress_rate"))
                .or_else(|| decimal(value.get("progress")))
                .and_then(|r| r.to_f64())
                .unwrap_or(0.0),
        }
    }
}

/// 指数/小数位上限, 超出视为缺失 (金额不会有这么多位)
const MAX_SCALE: i64 = 32;

/// 读取数值: JSON 数字或数字字符串, 其余视为缺失
pub fn decimal(value: Option<&Value>) -> Option<BigDecimal> {
    match value? {
        Value::Number(n) => parse_bounded(&n.to_string()),
        Value::String(s) => parse_bounded(s.trim()),
        _ => None,
    }
}

/// 先检查指数再解析, 解析后再检查小数位
fn parse_bounded(text: &str) -> Option<BigDecimal> {
    if let Some(pos) = text.find(['e', 'E']) {
        let exponent: i64 = text[pos + 1..].parse().ok()?;
        if exponent.abs() > MAX_SCALE {
            return None;
        }
    }
    let parsed = BigDecimal::from_str(text).ok()?;
    let (_, scale) = parsed.as_bigint_and_exponent();
    (scale.abs() <= MAX_SCALE).then_some(parsed)
}

/// 依次取第一个非零数值
fn first_nonzero(candidates: &[Option<&Value>]) -> Option<BigDecimal> {
    candidates
        .iter()
        .filter_map(|v| decimal(*v))
        .find(|d| !d.is_zero())
}

/// 非空白字符串
fn text(value: Option<&Value>) -> Option<String> {
    value?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn identifier(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// 非数组一律视为空序列
fn array<'a>(value: Option<&'a Value>) -> impl Iterator<Item = &'a Value> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flat_map(|a| a.iter())
}
