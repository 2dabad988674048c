use crate::disco;
use crate::models::{AccuracyCategory, AuditRow, BillRecord, ProcessingStatus, VerifyFlag};

/// 校验标志 → 准确度分类 (穷举匹配, 编译期保证全覆盖)
pub fn accuracy_category(flag: Option<VerifyFlag>) -> AccuracyCategory {
    match flag {
        Some(VerifyFlag::A) | Some(VerifyFlag::C) | Some(VerifyFlag::D) => {
            AccuracyCategory::Success
        }
        Some(VerifyFlag::E) => AccuracyCategory::ImagesNotAvailable,
        Some(VerifyFlag::N) => AccuracyCategory::ReadingNotMatched,
        Some(VerifyFlag::Other) => AccuracyCategory::Other,
        None => AccuracyCategory::NotProcessed,
    }
}

/// 原始行 → 已分类记录 (纯函数, 产出新的不可变记录)
pub fn classify_row(row: AuditRow) -> BillRecord {
    let disco_code = BillRecord::resolve_disco_code(&row);
    let batch_number = disco::batch_number(&row.ref_digits).to_string();
    let sub_division = disco::sub_division(&row.ref_digits).to_string();
    let batch_id = format!("{}-{}", batch_number, disco_code);
    let verify_flag = row.verify_code.as_deref().map(VerifyFlag::parse);

    let processing_status = if verify_flag.is_some() {
        ProcessingStatus::Processed
    } else {
        ProcessingStatus::Pending
    };

    BillRecord {
        disco_name: disco::disco_name(&disco_code).to_string(),
        disco_code,
        bilmonth: row.bilmonth,
        verify_flag,
        batch_number,
        sub_division,
        batch_id,
        processing_status,
        accuracy_category: accuracy_category(verify_flag),
        ref_digits: row.ref_digits,
    }
}

pub fn classify_rows(rows: Vec<AuditRow>) -> Vec<BillRecord> {
    rows.into_iter().map(classify_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ref_digits: &str, verify_code: Option<&str>) -> AuditRow {
        AuditRow {
            ref_digits: ref_digits.to_string(),
            disco_code: None,
            bilmonth: None,
            verify_code: verify_code.map(str::to_string),
        }
    }

    #[test]
    fn category_mapping_is_total() {
        let cases = [
            (Some(VerifyFlag::A), AccuracyCategory::Success),
            (Some(VerifyFlag::C), AccuracyCategory::Success),
            (Some(VerifyFlag::D), AccuracyCategory::Success),
            (Some(VerifyFlag::E), AccuracyCategory::ImagesNotAvailable),
            (Some(VerifyFlag::N), AccuracyCategory::ReadingNotMatched),
            (Some(VerifyFlag::Other), AccuracyCategory::Other),
            (None, AccuracyCategory::NotProcessed),
        ];
        for (flag, expected) in cases {
            assert_eq!(accuracy_category(flag), expected);
        }
    }

    #[test]
    fn classify_derives_all_fields() {
        let rec = classify_row(row("0215123456789", Some("A")));
        assert_eq!(rec.batch_number, "02");
        assert_eq!(rec.disco_code, "15");
        assert_eq!(rec.sub_division, "02151");
        assert_eq!(rec.batch_id, "02-15");
        assert_eq!(rec.disco_name, "MEPCO");
        assert_eq!(rec.processing_status, ProcessingStatus::Processed);
        assert_eq!(rec.accuracy_category, AccuracyCategory::Success);
    }

    #[test]
    fn pending_record_has_no_flag() {
        let rec = classify_row(row("0211123456789", None));
        assert_eq!(rec.verify_flag, None);
        assert_eq!(rec.processing_status, ProcessingStatus::Pending);
        assert_eq!(rec.accuracy_category, AccuracyCategory::NotProcessed);
    }

    #[test]
    fn malformed_reference_degrades_without_error() {
        let rec = classify_row(row("02", Some("E")));
        assert_eq!(rec.batch_number, "02");
        assert_eq!(rec.disco_code, "");
        assert_eq!(rec.sub_division, "");
        assert_eq!(rec.batch_id, "02-");
        assert_eq!(rec.disco_name, "UNKNOWN");
        assert_eq!(rec.accuracy_category, AccuracyCategory::ImagesNotAvailable);
    }
}
