use bigdecimal::BigDecimal;
use serde_json::Value;
use std::str::FromStr;

use crate::config::RollupConfig;
use crate::ingest::Normalizer;
use crate::models::{
    BillingSummary, CostBreakdown, DerivedFinancials, GanttBar, PortfolioSummary, ProjectInput,
};
use crate::service::{billing, gantt, portfolio, rollup};

/// 汇总服务: 接收原始 JSON, 规范化后交给纯函数计算
///
/// 只持有配置, 可在多个请求间共享。
pub struct RollupService {
    normalizer: Normalizer,
    tax_rate: BigDecimal,
}

impl RollupService {
    pub fn new(config: &RollupConfig) -> Self {
        let tax_rate = match BigDecimal::from_str(config.tax_rate.trim()) {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!(
                    "Invalid tax rate {:?} ({}), falling back to 1.1",
                    config.tax_rate,
                    e
                );
                billing::standard_tax_rate()
            }
        };
        Self {
            normalizer: Normalizer::new(&config.default_budget_category),
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> &BigDecimal {
        &self.tax_rate
    }

    /// 单案件利润汇总
    pub fn rollup(&self, record: &Value, cost_items: &Value) -> DerivedFinancials {
        let record = self.normalizer.quote(record);
        let cost_items = self.normalizer.cost_items(cost_items);
        rollup::compute(&record, &cost_items)
    }

    /// 费目别原価
    pub fn cost_breakdown(&self, cost_items: &Value) -> CostBreakdown {
        rollup::cost_breakdown(&self.normalizer.cost_items(cost_items))
    }

    /// 多案件汇总
    pub fn rollup_batch(&self, projects: &[Value]) -> PortfolioSummary {
        let inputs: Vec<ProjectInput> = projects.iter().map(|p| self.normalizer.project(p)).collect();
        tracing::info!("开始汇总 {} 个案件", inputs.len());
        portfolio::rollup_all(&inputs)
    }

    /// 请求/支付汇总
    pub fn billing(&self, record: &Value, invoices: &Value, payments: &Value) -> BillingSummary {
        let record = self.normalizer.quote(record);
        let invoices = self.normalizer.invoices(invoices);
        let payments = self.normalizer.payments(payments);
        billing::summarize(&record, &invoices, &payments, &self.tax_rate)
    }

    /// 年间工程表
    pub fn gantt(&self, schedules: &[Value]) -> Vec<GanttBar> {
        let entries: Vec<_> = schedules.iter().map(|s| self.normalizer.schedule(s)).collect();
        gantt::layout(&entries)
    }
}

impl Default for RollupService {
    fn default() -> Self {
        Self::new(&RollupConfig::default())
    }
}
