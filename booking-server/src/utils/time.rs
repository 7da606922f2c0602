//! 时间工具函数
//!
//! 日期校验统一在 booking 流程层完成，store 只保存 `YYYY-MM-DD` 字符串。
//! 日历按主机本地时区计算，与前端行为一致。

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 今天的日历日期 (本地时区)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// 今天的日期，记录使用的 ISO 字符串形式
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// 验证日期不在过去 (预订只接受今天及以后)
pub fn validate_not_past(date: NaiveDate) -> AppResult<()> {
    let today = today();
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        )));
    }
    Ok(())
}
