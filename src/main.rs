use axum::{routing::get, Router};
use ocr_batch_analytics::{api, create_pool, AppConfig, RecordSource};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 惰性连接池: 存储不可达不阻止启动, 查询时回退合成数据
    let pool = create_pool(&config.database.url)?;
    info!("Database pool created (lazy)");

    let source = Arc::new(RecordSource::new(pool, config.source.clone()));

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/records", get(api::get_records))
        .route("/api/records/export", get(api::export_records_csv))
        .route("/api/dashboard", get(api::get_dashboard))
        .route("/api/batches/export", get(api::export_batches_csv))
        .with_state(source)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/records         - classified record table");
    info!("  GET /api/dashboard       - KPIs + OCR accuracy + batch statistics");
    info!("  GET /api/batches/export  - batch statistics CSV");
    info!("  GET /api/records/export  - record table CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
