//! HTTP API 类型定义

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::error_code::ErrorCode;
use crate::services::Page;
use crate::storage::Campaign;
use crate::storage::models::TS_EXPORT_PATH;

/// GET /campaigns 查询参数
#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct ListCampaignsQuery {
    #[ts(type = "number | null")]
    pub page: Option<u64>,
    #[ts(type = "number | null")]
    pub limit: Option<u64>,
    pub tipo_campania: Option<String>,
}

/// GET /campaigns/search-by-date 查询参数
///
/// 日期以字符串接收，由 handler 解析，以便返回统一的错误体。
#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct SearchByDateQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[ts(type = "number | null")]
    pub page: Option<u64>,
    #[ts(type = "number | null")]
    pub limit: Option<u64>,
    pub tipo_campania: Option<String>,
}

/// 分页响应信封
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct CampaignPage {
    pub data: Vec<Campaign>,
    #[ts(type = "number")]
    pub total: u64,
    #[ts(type = "number")]
    pub page: u64,
    #[serde(rename = "pageSize")]
    #[ts(type = "number")]
    pub page_size: u64,
}

impl From<Page<Campaign>> for CampaignPage {
    fn from(page: Page<Campaign>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

/// 错误响应体
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub detail: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct WelcomeResponse {
    pub message: String,
}
