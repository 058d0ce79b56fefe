//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};
use ts_rs::TS;

use crate::errors::AnalyticsError;
use crate::storage::models::TS_EXPORT_PATH;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 1000-1099: 通用错误
/// - 3000-3099: 活动查询错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(rename = "ErrorCode")]
#[ts(repr(enum))]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    InvalidDateFormat = 1012,

    // 活动查询错误 3000-3099
    CampaignNotFound = 3000,
    InvalidCampaignType = 3001,
    InvalidDateRange = 3002,
    InvalidPagination = 3003,
}

impl From<&AnalyticsError> for ErrorCode {
    fn from(err: &AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidCampaignType(_) => ErrorCode::InvalidCampaignType,
            AnalyticsError::InvalidDateRange(_) => ErrorCode::InvalidDateRange,
            AnalyticsError::InvalidPagination(_) => ErrorCode::InvalidPagination,
            AnalyticsError::Validation(_) => ErrorCode::BadRequest,
            AnalyticsError::DateParse(_) => ErrorCode::InvalidDateFormat,
            AnalyticsError::NotFound(_) => ErrorCode::CampaignNotFound,
            _ => ErrorCode::InternalServerError,
        }
    }
}
