use serde::{Deserialize, Serialize};

use super::BillRecord;

/// 数据来源标记: 实时库 or 合成回退
///
/// 回退对调用方透明, 但来源必须随结果一起返回, 供下游区分真实/伪造数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Synthetic,
}

/// 一次加载的完整结果: 来源标记 + 已分类记录表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    pub origin: DataOrigin,
    pub records: Vec<BillRecord>,
}

/// 全局 OCR 模型准确率 (仅 A vs N)
///
/// C/D/E 与未处理记录一律排除在分子分母之外:
/// 该指标只度量模型本身的读数置信表现, 不掺业务规则接受度和图像可得性。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalAccuracy {
    pub count_a: u64,
    pub count_n: u64,
    pub total_an: u64,
    /// 百分比; total_an 为 0 时为 0
    pub accuracy: f64,
}

/// 全局 KPI (执行层看板指标)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalKpis {
    pub total_records: u64,
    pub processed_records: u64,
    pub successful_records: u64,
    pub perfect_matches: u64,
    pub image_issues: u64,
    pub processing_rate: f64,
    pub success_rate: f64,
    pub perfect_match_rate: f64,
    pub image_issue_rate: f64,
}

/// 单个批次 (batch_id = 批次号-区域代码) 的统计行
///
/// 批次为派生分组, 每次加载重算, 不持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub batch_id: String,
    pub disco_name: String,
    pub total_records: u64,
    pub processed: u64,
    pub successful: u64,       // A+C+D
    pub flag_a: u64,
    pub flag_c: u64,
    pub flag_d: u64,
    pub flag_e: u64,
    pub flag_n: u64,
    pub total_an: u64,         // A+N
    /// processed/total 百分比, total 为 0 时为 0
    pub processing_rate: f64,
    /// successful/processed 百分比, processed 为 0 时为 0
    pub success_rate: f64,
    /// A/(A+N) 百分比, 分母为 0 时为 0
    pub ocr_model_accuracy: f64,
}
