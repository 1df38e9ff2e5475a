pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::service::RollupService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router(service: Arc<RollupService>) -> Router {
    let rollup_routes = Router::new()
        .route("/api/rollup", post(rollup))
        .route("/api/rollup/batch", post(rollup_batch))
        .route("/api/rollup/export", post(rollup_export))
        .route("/api/costs/breakdown", post(cost_breakdown))
        .route("/api/billing", post(billing))
        .route("/api/gantt", post(gantt))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(rollup_routes)
}
