use std::io;

use crate::models::ProjectRollup;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

const HEADER: [&str; 13] = [
    "id",
    "total_amount",
    "sales_profit",
    "construction_budget_frame",
    "budget_total",
    "construction_profit",
    "expected_gross_profit",
    "expected_gross_profit_rate",
    "actual_cost",
    "final_profit",
    "profit_rate",
    "sales_profit_rate",
    "construction_profit_rate",
];

/// 导出案件汇总 CSV (首行为表头, 每个案件一行)
pub fn write_rollups_csv<W: io::Write>(writer: W, rollups: &[ProjectRollup]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for r in rollups {
        let f = &r.financials;
        wtr.write_record([
            r.id.clone(),
            r.total_amount.to_string(),
            r.sales_profit.to_string(),
            f.construction_budget_frame.to_string(),
            f.budget_total.to_string(),
            f.construction_profit.to_string(),
            f.expected_gross_profit.to_string(),
            f.expected_gross_profit_rate.to_string(),
            f.actual_cost.to_string(),
            f.final_profit.to_string(),
            f.profit_rate.to_string(),
            f.sales_profit_rate.to_string(),
            f.construction_profit_rate.to_string(),
        ])?;
    }

    wtr.flush()?;
    tracing::debug!("CSV导出完成, {} 行", rollups.len());
    Ok(())
}
