//! HTTP API 帮助函数

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::error;

use super::error_code::ErrorCode;
use super::types::ErrorBody;
use crate::errors::{AnalyticsError, Result};

/// 5xx 响应统一使用的错误详情
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, &data)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, detail: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorBody {
            code,
            detail: detail.to_string(),
        },
    )
}

/// 从 AnalyticsError 构建错误响应
///
/// 4xx 原样返回 message；5xx 只记录日志，响应体为固定文案。
pub fn error_from_analytics(err: &AnalyticsError) -> HttpResponse {
    let status = err.http_status();
    let code = ErrorCode::from(err);

    if status.is_server_error() {
        error!("{} [{}]: {}", err.error_type(), err.code(), err.message());
        error_response(status, code, INTERNAL_ERROR_DETAIL)
    } else {
        error_response(status, code, err.message())
    }
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_analytics(&e),
    }
}

/// 查询字符串反序列化失败（例如 page=abc）时返回统一的错误体
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = format!("Parámetros de consulta inválidos: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &detail);
    InternalError::from_response(err, response).into()
}

/// 未匹配路由
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Not Found")
}

/// 解析查询参数中的日期
///
/// 接受 `YYYY-MM-DD`；完整的日期时间（`2024-05-01T10:00:00`、RFC3339）截断到日期。
pub fn parse_query_date(name: &str, raw: Option<&str>) -> Result<NaiveDate> {
    let value = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AnalyticsError::validation(format!("{} es obligatorio", name)))?;

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            AnalyticsError::date_parse(format!(
                "{} debe tener el formato YYYY-MM-DD: '{}'",
                name, value
            ))
        })
}
