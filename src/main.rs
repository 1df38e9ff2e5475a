use construction_rollup::{api, AppConfig, RollupService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置 (config/rollup.toml 解析失败时退回环境变量)
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::from_env(), Some(e)),
    };

    // 初始化日志 - 使用本地时间格式
    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    if let Some(e) = load_error {
        warn!("Failed to load layered config ({}), using environment only", e);
    }
    info!("Starting server with config: {:?}", config);

    // 汇总服务只持有配置, 所有请求共享
    let service = Arc::new(RollupService::new(&config.rollup));

    let app = api::router(service).layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/rollup         - 单案件利润汇总");
    info!("  POST /api/rollup/batch   - 多案件汇总");
    info!("  POST /api/rollup/export  - 多案件汇总 CSV");
    info!("  POST /api/billing        - 请求/支付汇总");
    info!("  POST /api/gantt          - 年间工程表");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
