use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::disco;

/// 账单审计原始行 (tbl_general_bill_print_audit)
///
/// 上游存储可能只返回部分列, 除编号串外全部可空。
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AuditRow {
    pub ref_digits: String,            // 编号串
    pub disco_code: Option<String>,    // 区域代码 (存储端 SUBSTR 派生)
    pub bilmonth: Option<NaiveDate>,   // 账期
    pub verify_code: Option<String>,   // OCR 校验标志
}

/// OCR 校验标志 (闭合枚举)
///
/// `Other` 兜底未知字符, 保证分类映射全覆盖。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerifyFlag {
    A, // 完全匹配
    C,
    D,
    E, // 图像缺失
    N, // 读数不匹配
    Other,
}

impl VerifyFlag {
    pub fn parse(code: &str) -> Self {
        match code {
            "A" => VerifyFlag::A,
            "C" => VerifyFlag::C,
            "D" => VerifyFlag::D,
            "E" => VerifyFlag::E,
            "N" => VerifyFlag::N,
            _ => VerifyFlag::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyFlag::A => "A",
            VerifyFlag::C => "C",
            VerifyFlag::D => "D",
            VerifyFlag::E => "E",
            VerifyFlag::N => "N",
            VerifyFlag::Other => "?",
        }
    }
}

/// 处理状态: 有校验标志即为已处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingStatus {
    Processed,
    Pending,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Processed => "Processed",
            ProcessingStatus::Pending => "Pending",
        }
    }
}

/// 准确度分类 (五桶全覆盖)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccuracyCategory {
    Success,
    ImagesNotAvailable,
    ReadingNotMatched,
    NotProcessed,
    Other,
}

impl AccuracyCategory {
    /// 对外展示文案, 与原报表列值保持一致
    pub fn as_str(&self) -> &'static str {
        match self {
            AccuracyCategory::Success => "Success (A,C,D)",
            AccuracyCategory::ImagesNotAvailable => "Images Not Available (E)",
            AccuracyCategory::ReadingNotMatched => "Reading Not Matched (N)",
            AccuracyCategory::NotProcessed => "Not Processed",
            AccuracyCategory::Other => "Other",
        }
    }
}

/// 已分类账单记录: 原始字段 + 一次性派生字段, 创建后不再变更
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    pub ref_digits: String,
    pub disco_code: String,
    pub bilmonth: Option<NaiveDate>,
    pub verify_flag: Option<VerifyFlag>,
    // 派生字段
    pub disco_name: String,
    pub batch_number: String,
    pub sub_division: String,
    pub batch_id: String,
    pub processing_status: ProcessingStatus,
    pub accuracy_category: AccuracyCategory,
}

impl BillRecord {
    pub fn is_processed(&self) -> bool {
        self.processing_status == ProcessingStatus::Processed
    }

    /// 区域代码优先取存储端派生列, 缺失时从编号串自行解码
    pub fn resolve_disco_code(row: &AuditRow) -> String {
        match &row.disco_code {
            Some(code) if !code.is_empty() => code.clone(),
            _ => disco::disco_code(&row.ref_digits).to_string(),
        }
    }
}
