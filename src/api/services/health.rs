use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use super::helpers::success_response;
use super::types::{HealthResponse, WelcomeResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to Campaign Analytics API";

/// Health Service
///
/// 存活探针：不访问数据库，只表示进程可以处理请求。
pub struct HealthService;

impl HealthService {
    pub async fn health_check() -> impl Responder {
        trace!("Received health check request");
        success_response(HealthResponse {
            status: "ok".to_string(),
        })
    }

    pub async fn welcome() -> impl Responder {
        success_response(WelcomeResponse {
            message: WELCOME_MESSAGE.to_string(),
        })
    }

    /// HEAD 请求只返回状态码
    pub async fn head() -> impl Responder {
        HttpResponse::Ok().finish()
    }
}

/// `/` 与 `/health` 路由
pub fn health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(HealthService::welcome))
        .route("/", web::head().to(HealthService::head))
        .route("/health", web::get().to(HealthService::health_check))
        .route("/health", web::head().to(HealthService::head));
}
