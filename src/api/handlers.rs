use crate::export::{write_batch_statistics_csv, write_records_csv};
use crate::models::{BatchStatistics, BillRecord, DataOrigin, GlobalAccuracy, GlobalKpis};
use crate::service::analytics;
use crate::service::RecordSource;
use axum::{
    extract::{Json, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 查询参数: 可选区域过滤
#[derive(Debug, Deserialize)]
pub struct DiscoQuery {
    pub disco: Option<String>,
}

/// 完整记录表响应
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub origin: DataOrigin,
    pub total: usize,
    pub records: Vec<BillRecord>,
}

/// 看板响应: 外部展示层消费的全部计算结果
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub origin: DataOrigin,
    pub kpis: GlobalKpis,
    pub ocr_accuracy: GlobalAccuracy,
    pub batches: Vec<BatchStatistics>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 已分类记录表 (实时或合成, origin 字段标明来源)
pub async fn get_records(
    State(source): State<Arc<RecordSource>>,
    Query(q): Query<DiscoQuery>,
) -> Response {
    let set = source.load(q.disco.as_deref()).await;
    let response = RecordsResponse {
        origin: set.origin,
        total: set.records.len(),
        records: set.records,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 看板聚合: 全局 KPI + OCR 准确率 + 批次统计表
pub async fn get_dashboard(
    State(source): State<Arc<RecordSource>>,
    Query(q): Query<DiscoQuery>,
) -> Response {
    let set = source.load(q.disco.as_deref()).await;
    let response = DashboardResponse {
        origin: set.origin,
        kpis: analytics::global_kpis(&set.records),
        ocr_accuracy: analytics::global_accuracy(&set.records),
        batches: analytics::batch_statistics(&set.records),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 批次统计表 CSV 下载
pub async fn export_batches_csv(
    State(source): State<Arc<RecordSource>>,
    Query(q): Query<DiscoQuery>,
) -> Response {
    let set = source.load(q.disco.as_deref()).await;
    let stats = analytics::batch_statistics(&set.records);

    let mut buf = Vec::new();
    match write_batch_statistics_csv(&stats, &mut buf) {
        Ok(()) => csv_attachment("batch_statistics.csv", buf),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response(),
    }
}

/// 记录表 CSV 下载
pub async fn export_records_csv(
    State(source): State<Arc<RecordSource>>,
    Query(q): Query<DiscoQuery>,
) -> Response {
    let set = source.load(q.disco.as_deref()).await;

    let mut buf = Vec::new();
    match write_records_csv(&set.records, &mut buf) {
        Ok(()) => csv_attachment("records.csv", buf),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response(),
    }
}

fn csv_attachment(filename: &str, body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}
