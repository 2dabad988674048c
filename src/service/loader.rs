use sqlx::PgPool;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::db;
use crate::models::{BillRecord, DataOrigin, RecordSet};
use crate::service::classifier;
use crate::service::synthetic::{SyntheticGenerator, DEFAULT_SAMPLE_SIZE};

/// 实时数据源故障分类
///
/// 空结果与连接失败走同一回退路径: 空表没有分析价值,
/// 且与配置错误无法区分 (沿用原策略, 见 DESIGN.md)。
#[derive(Debug)]
pub enum SourceError {
    /// 存储连接/查询失败
    Unavailable(sqlx::Error),
    /// 查询超出配置时限
    Timeout,
    /// 存储可达但结果为空
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(e) => write!(f, "store unavailable: {}", e),
            SourceError::Timeout => write!(f, "store query timed out"),
            SourceError::Empty => write!(f, "store returned no rows"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Unavailable(e) => Some(e),
            _ => None,
        }
    }
}

/// 记录数据源: 有界实时查询 + 合成回退
pub struct RecordSource {
    pool: PgPool,
    config: SourceConfig,
}

impl RecordSource {
    pub fn new(pool: PgPool, config: SourceConfig) -> Self {
        Self { pool, config }
    }

    /// 实时加载并分类, 失败返回标记错误交由 load 决策
    pub async fn fetch_live(
        &self,
        disco_code: Option<&str>,
    ) -> Result<Vec<BillRecord>, SourceError> {
        let timeout = Duration::from_secs(self.config.fetch_timeout_secs);
        let rows = tokio::time::timeout(timeout, db::fetch_audit_rows(&self.pool, disco_code))
            .await
            .map_err(|_| SourceError::Timeout)?
            .map_err(SourceError::Unavailable)?;

        if rows.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(classifier::classify_rows(rows))
    }

    /// 加载入口: 任何实时故障都就地回退, 永不向调用方抛错
    ///
    /// 结果带 DataOrigin 标记, 合成数据对下游可见而非被吞掉。
    pub async fn load(&self, disco_code: Option<&str>) -> RecordSet {
        match self.fetch_live(disco_code).await {
            Ok(records) => {
                info!("Live store: {} records loaded", records.len());
                RecordSet {
                    origin: DataOrigin::Live,
                    records,
                }
            }
            Err(e) => {
                warn!("Live load failed ({}), falling back to synthetic data", e);
                RecordSet {
                    origin: DataOrigin::Synthetic,
                    records: self.generate_fallback(disco_code),
                }
            }
        }
    }

    /// 合成回退: 有区域过滤时只生成该区域
    fn generate_fallback(&self, disco_code: Option<&str>) -> Vec<BillRecord> {
        let generator = SyntheticGenerator::new(self.config.synthetic_seed);
        let codes: Vec<&str> = disco_code.into_iter().collect();
        classifier::classify_rows(generator.generate(&codes, DEFAULT_SAMPLE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    fn unreachable_source(seed: u64) -> RecordSource {
        // 端口 1 不可达, 惰性池到查询时才报错
        let pool = create_pool("postgres://user:pw@127.0.0.1:1/theftdb").unwrap();
        RecordSource::new(
            pool,
            SourceConfig {
                fetch_timeout_secs: 2,
                synthetic_seed: Some(seed),
            },
        )
    }

    #[tokio::test]
    async fn unreachable_store_falls_back_to_synthetic() {
        let source = unreachable_source(42);
        let set = source.load(None).await;
        assert_eq!(set.origin, DataOrigin::Synthetic);
        assert_eq!(set.records.len(), DEFAULT_SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn fallback_respects_region_filter() {
        let source = unreachable_source(7);
        let set = source.load(Some("37")).await;
        assert_eq!(set.origin, DataOrigin::Synthetic);
        assert!(set.records.iter().all(|r| r.disco_code == "37"));
        assert!(set.records.iter().all(|r| r.disco_name == "HESCO"));
    }

    #[tokio::test]
    async fn fetch_live_reports_tagged_error() {
        let source = unreachable_source(0);
        let err = source.fetch_live(None).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::Unavailable(_) | SourceError::Timeout
        ));
    }

    #[test]
    fn source_error_display() {
        assert_eq!(SourceError::Empty.to_string(), "store returned no rows");
        assert_eq!(SourceError::Timeout.to_string(), "store query timed out");
    }
}
