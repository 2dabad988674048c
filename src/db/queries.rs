use crate::models::AuditRow;
use sqlx::PgPool;

/// 单次查询行数上限 (设计常量, 与回退数据集规模一致)
pub const ROW_CAP: i64 = 5000;

/// 查询账单打印审计表, 可选按区域代码过滤
///
/// 区域代码取编号串第 3-4 位, 与存储端 SUBSTR 派生列一致。
pub async fn fetch_audit_rows(
    pool: &PgPool,
    disco_code: Option<&str>,
) -> Result<Vec<AuditRow>, sqlx::Error> {
    match disco_code {
        Some(code) => {
            sqlx::query_as::<_, AuditRow>(
                r#"
                SELECT ref_digits,
                       substr(ref_digits, 3, 2) AS disco_code,
                       bilmonth,
                       image_verify_code_pitc AS verify_code
                FROM tbl_general_bill_print_audit
                WHERE substr(ref_digits, 3, 2) = $1
                FETCH FIRST $2 ROWS ONLY
                "#,
            )
            .bind(code)
            .bind(ROW_CAP)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, AuditRow>(
                r#"
                SELECT ref_digits,
                       substr(ref_digits, 3, 2) AS disco_code,
                       bilmonth,
                       image_verify_code_pitc AS verify_code
                FROM tbl_general_bill_print_audit
                FETCH FIRST $1 ROWS ONLY
                "#,
            )
            .bind(ROW_CAP)
            .fetch_all(pool)
            .await
        }
    }
}
