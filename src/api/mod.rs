//! HTTP transport
//!
//! Routes, response envelopes, error mapping and middleware.

pub mod middleware;
pub mod services;

use std::sync::Arc;

use actix_web::web;

use crate::services::CampaignService;

/// 注册所有路由与共享状态（server 与测试共用）
pub fn configure(service: Arc<CampaignService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service))
            .app_data(web::QueryConfig::default().error_handler(services::query_error_handler))
            .configure(services::health_routes)
            .service(services::campaign_routes())
            .default_service(web::to(services::not_found));
    }
}
