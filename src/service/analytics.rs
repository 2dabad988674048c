use indexmap::IndexMap;

use crate::models::{BatchStatistics, BillRecord, GlobalAccuracy, GlobalKpis, VerifyFlag};

/// 百分比, 分母为 0 时报 0 而不是除零错误
fn pct(num: u64, den: u64) -> f64 {
    if den > 0 {
        num as f64 / den as f64 * 100.0
    } else {
        0.0
    }
}

fn count_flag(records: &[&BillRecord], flag: VerifyFlag) -> u64 {
    records.iter().filter(|r| r.verify_flag == Some(flag)).count() as u64
}

/// 全局 OCR 模型准确率: 仅统计 A 与 N
///
/// 改动任何 C/D/E/未处理记录都不影响该值。
pub fn global_accuracy(records: &[BillRecord]) -> GlobalAccuracy {
    let count_a = records
        .iter()
        .filter(|r| r.verify_flag == Some(VerifyFlag::A))
        .count() as u64;
    let count_n = records
        .iter()
        .filter(|r| r.verify_flag == Some(VerifyFlag::N))
        .count() as u64;
    let total_an = count_a + count_n;

    GlobalAccuracy {
        count_a,
        count_n,
        total_an,
        accuracy: pct(count_a, total_an),
    }
}

/// 全局 KPI 行 (执行层看板)
pub fn global_kpis(records: &[BillRecord]) -> GlobalKpis {
    let total_records = records.len() as u64;
    let processed_records = records.iter().filter(|r| r.is_processed()).count() as u64;
    let successful_records = records
        .iter()
        .filter(|r| {
            matches!(
                r.verify_flag,
                Some(VerifyFlag::A) | Some(VerifyFlag::C) | Some(VerifyFlag::D)
            )
        })
        .count() as u64;
    let perfect_matches = records
        .iter()
        .filter(|r| r.verify_flag == Some(VerifyFlag::A))
        .count() as u64;
    let image_issues = records
        .iter()
        .filter(|r| r.verify_flag == Some(VerifyFlag::E))
        .count() as u64;

    GlobalKpis {
        total_records,
        processed_records,
        successful_records,
        perfect_matches,
        image_issues,
        processing_rate: pct(processed_records, total_records),
        success_rate: pct(successful_records, processed_records),
        perfect_match_rate: pct(perfect_matches, processed_records),
        image_issue_rate: pct(image_issues, processed_records),
    }
}

/// 按 batch_id 分组统计, 输出按 batch_id 字典序升序
///
/// 批次纯由输入表派生, 每次调用重算; 无已处理记录的批次
/// 各比率报 0, 不视为错误。
pub fn batch_statistics(records: &[BillRecord]) -> Vec<BatchStatistics> {
    let mut groups: IndexMap<&str, Vec<&BillRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.batch_id.as_str()).or_default().push(record);
    }
    groups.sort_unstable_keys();

    groups
        .iter()
        .map(|(batch_id, group)| {
            let total_records = group.len() as u64;
            let processed = group.iter().filter(|r| r.is_processed()).count() as u64;
            let flag_a = count_flag(group, VerifyFlag::A);
            let flag_c = count_flag(group, VerifyFlag::C);
            let flag_d = count_flag(group, VerifyFlag::D);
            let flag_e = count_flag(group, VerifyFlag::E);
            let flag_n = count_flag(group, VerifyFlag::N);
            let successful = flag_a + flag_c + flag_d;
            let total_an = flag_a + flag_n;

            BatchStatistics {
                batch_id: batch_id.to_string(),
                disco_name: group[0].disco_name.clone(),
                total_records,
                processed,
                successful,
                flag_a,
                flag_c,
                flag_d,
                flag_e,
                flag_n,
                total_an,
                processing_rate: pct(processed, total_records),
                success_rate: pct(successful, processed),
                ocr_model_accuracy: pct(flag_a, total_an),
            }
        })
        .collect()
}
