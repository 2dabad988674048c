use std::io::Write;

use crate::models::{BatchStatistics, BillRecord};

/// 批次统计表 CSV 列头, 与看板表格列一致
pub const BATCH_CSV_HEADER: [&str; 14] = [
    "Batch ID",
    "DISCO",
    "Total Records",
    "Processed",
    "Successful (A,C,D)",
    "Flag A",
    "Flag C",
    "Flag D",
    "Flag E",
    "Flag N",
    "Total A+N",
    "Processing Rate",
    "Success Rate (A,C,D)",
    "OCR Model Accuracy (A vs N)",
];

/// 导出批次统计表为 CSV (UTF-8, 逗号分隔, 带表头, 保持输入行序)
pub fn write_batch_statistics_csv<W: Write>(
    stats: &[BatchStatistics],
    writer: W,
) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(BATCH_CSV_HEADER)?;

    for s in stats {
        w.write_record(&[
            s.batch_id.clone(),
            s.disco_name.clone(),
            s.total_records.to_string(),
            s.processed.to_string(),
            s.successful.to_string(),
            s.flag_a.to_string(),
            s.flag_c.to_string(),
            s.flag_d.to_string(),
            s.flag_e.to_string(),
            s.flag_n.to_string(),
            s.total_an.to_string(),
            s.processing_rate.to_string(),
            s.success_rate.to_string(),
            s.ocr_model_accuracy.to_string(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// 导出已分类记录表为 CSV
pub fn write_records_csv<W: Write>(
    records: &[BillRecord],
    writer: W,
) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record([
        "REF_DIGITS",
        "DISCO_CODE",
        "DISCO_NAME",
        "BILMONTH",
        "VERIFY_CODE",
        "BATCH_NO",
        "SUB_DIV",
        "BATCH_ID",
        "PROCESSING_STATUS",
        "ACCURACY_CATEGORY",
    ])?;

    for r in records {
        w.write_record(&[
            r.ref_digits.clone(),
            r.disco_code.clone(),
            r.disco_name.clone(),
            r.bilmonth.map(|d| d.to_string()).unwrap_or_default(),
            r.verify_flag.map(|f| f.as_str().to_string()).unwrap_or_default(),
            r.batch_number.clone(),
            r.sub_division.clone(),
            r.batch_id.clone(),
            r.processing_status.as_str().to_string(),
            r.accuracy_category.as_str().to_string(),
        ])?;
    }

    w.flush()?;
    Ok(())
}
