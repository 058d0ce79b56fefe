//! 单元格规范化与去重
//!
//! 纯函数，不涉及 I/O。错误以 `String` 返回原因，由调用方补上文件/行/列信息。

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;

/// 日期列格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 去重用的影子键：去掉首尾空白并转小写
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 按键去重，保留第一次出现的行，返回 (保留的行, 丢弃数量)
pub fn dedup_by_key<T, K, F>(rows: Vec<T>, key: F) -> (Vec<T>, usize)
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let total = rows.len();
    let mut seen = HashSet::with_capacity(total);
    let kept: Vec<T> = rows.into_iter().filter(|row| seen.insert(key(row))).collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

/// 解析整数列；空值为 None
///
/// 表格导出常把整数写成 `1000.0`，小数部分为 0 时接受。
pub fn parse_integer(raw: &str) -> Result<Option<i64>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if let Ok(n) = value.parse::<i64>() {
        return Ok(Some(n));
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        _ => Err(format!("无法解析为整数: '{}'", value)),
    }
}

/// 解析浮点列；空值为 None
pub fn parse_float(raw: &str) -> Result<Option<f64>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(format!("无法解析为数字: '{}'", value)),
    }
}

/// 解析 `YYYY-MM-DD` 日期
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("无法解析日期 '{}' (期望 YYYY-MM-DD): {}", value, e))
}

/// 修复被误识别为日期的整数，例如 `120-01-01` -> 120
///
/// 只截取第一个连字符之前的部分；开头的 `-` 视为负号。
pub fn clean_number(raw: &str) -> Result<Option<i64>, String> {
    let value = raw.trim();
    let (sign, body) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };

    match body.find('-') {
        Some(idx) => {
            let head = body[..idx].trim();
            if head.is_empty() {
                return Err(format!("无法解析为整数: '{}'", value));
            }
            parse_integer(&format!("{}{}", sign, head))
        }
        None => parse_integer(value),
    }
}

/// 空白单元格视为 None
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
