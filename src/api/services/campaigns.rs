//! 活动查询 API

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use tracing::trace;

use super::helpers::{api_result, error_from_analytics, parse_query_date, success_response};
use super::types::{CampaignPage, ListCampaignsQuery, SearchByDateQuery};
use crate::errors::{AnalyticsError, Result};
use crate::services::{CampaignService, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Page};
use crate::storage::Campaign;

fn page_result(result: Result<Page<Campaign>>) -> HttpResponse {
    api_result(result.map(CampaignPage::from))
}

/// GET /campaigns
pub async fn list_campaigns(
    query: web::Query<ListCampaignsQuery>,
    service: web::Data<Arc<CampaignService>>,
) -> HttpResponse {
    trace!("API: list campaigns with {:?}", query);

    let result = service
        .list_campaigns(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            query.tipo_campania.as_deref(),
        )
        .await;

    page_result(result)
}

/// GET /campaigns/search-by-date
pub async fn search_by_date(
    query: web::Query<SearchByDateQuery>,
    service: web::Data<Arc<CampaignService>>,
) -> HttpResponse {
    trace!("API: search campaigns by date with {:?}", query);

    let start = match parse_query_date("start_date", query.start_date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_from_analytics(&e),
    };
    let end = match parse_query_date("end_date", query.end_date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_from_analytics(&e),
    };

    let result = service
        .search_by_date_range(
            start,
            end,
            query.page.unwrap_or(DEFAULT_PAGE),
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            query.tipo_campania.as_deref(),
        )
        .await;

    page_result(result)
}

/// GET /campaigns/{name}
pub async fn get_campaign_detail(
    path: web::Path<String>,
    service: web::Data<Arc<CampaignService>>,
) -> HttpResponse {
    let name = path.into_inner();
    trace!("API: campaign detail for '{}'", name);

    match service.get_campaign_detail(&name).await {
        Ok(Some(detail)) => success_response(detail),
        Ok(None) => error_from_analytics(&AnalyticsError::not_found("Campaign not found")),
        Err(e) => error_from_analytics(&e),
    }
}

/// `/campaigns` 路由
///
/// `/search-by-date` 必须注册在 `/{name}` 之前。
pub fn campaign_routes() -> actix_web::Scope {
    web::scope("/campaigns")
        .route("", web::get().to(list_campaigns))
        .route("/", web::get().to(list_campaigns))
        .route("/search-by-date", web::get().to(search_by_date))
        .route("/search-by-date/", web::get().to(search_by_date))
        .route("/{name}", web::get().to(get_campaign_detail))
}
