use crate::export::write_rollups_csv;
use crate::models::{BillingSummary, CostBreakdown, DerivedFinancials, GanttBar, PortfolioSummary};
use crate::service::RollupService;
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::ApiError;

/// 请求体: 单案件汇总
#[derive(Debug, Deserialize)]
pub struct RollupRequest {
    #[serde(default)]
    pub record: Value,
    #[serde(default)]
    pub cost_items: Value,
}

/// 请求体: 费目别原価
#[derive(Debug, Deserialize)]
pub struct CostBreakdownRequest {
    #[serde(default)]
    pub cost_items: Value,
}

/// 请求体: 多案件汇总 / CSV导出
#[derive(Debug, Deserialize)]
pub struct BatchRollupRequest {
    #[serde(default)]
    pub projects: Vec<Value>,
}

/// 请求体: 请求/支付汇总
#[derive(Debug, Deserialize)]
pub struct BillingRequest {
    #[serde(default)]
    pub record: Value,
    #[serde(default)]
    pub invoices: Value,
    #[serde(default)]
    pub payments: Value,
}

/// 请求体: 年间工程表
#[derive(Debug, Deserialize)]
pub struct GanttRequest {
    #[serde(default)]
    pub schedules: Vec<Value>,
}

/// 通用响应体
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 单案件利润汇总
pub async fn rollup(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<RollupRequest>,
) -> Json<DerivedFinancials> {
    Json(service.rollup(&req.record, &req.cost_items))
}

/// 费目别原価
pub async fn cost_breakdown(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<CostBreakdownRequest>,
) -> Json<CostBreakdown> {
    Json(service.cost_breakdown(&req.cost_items))
}

/// 多案件汇总在阻塞线程池中执行 (rayon 并行计算不占用 async worker)
async fn rollup_batch_blocking(
    service: Arc<RollupService>,
    projects: Vec<Value>,
) -> Result<PortfolioSummary, ApiError> {
    let summary =
        tokio::task::spawn_blocking(move || service.rollup_batch(&projects)).await?;
    Ok(summary)
}

/// 多案件汇总
pub async fn rollup_batch(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<BatchRollupRequest>,
) -> Result<Json<PortfolioSummary>, ApiError> {
    let summary = rollup_batch_blocking(service, req.projects).await?;
    Ok(Json(summary))
}

/// 多案件汇总 CSV 导出
pub async fn rollup_export(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<BatchRollupRequest>,
) -> Result<Response, ApiError> {
    let summary = rollup_batch_blocking(service, req.projects).await?;
    let mut buf = Vec::new();
    write_rollups_csv(&mut buf, &summary.projects)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        buf,
    )
        .into_response())
}

/// 请求/支付汇总
pub async fn billing(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<BillingRequest>,
) -> Json<BillingSummary> {
    Json(service.billing(&req.record, &req.invoices, &req.payments))
}

/// 年间工程表
pub async fn gantt(
    State(service): State<Arc<RollupService>>,
    Json(req): Json<GanttRequest>,
) -> Json<Vec<GanttBar>> {
    Json(service.gantt(&req.schedules))
}
