//! HTTP access log middleware
//!
//! Logs method, route class, status and latency of every request. Runs inside the
//! request-id span, so each line carries the request id.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{info, warn};

/// Access log middleware factory
#[derive(Clone, Default)]
pub struct AccessLogMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AccessLogMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogService {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessLogService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let endpoint = classify_endpoint(req.path());

        Box::pin(async move {
            let result = srv.call(req).await;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            let status = match &result {
                Ok(response) => response.status(),
                Err(e) => e.as_response_error().status_code(),
            };

            if status.is_server_error() {
                warn!(
                    "{} {} -> {} in {:.2}ms",
                    method,
                    endpoint,
                    status.as_u16(),
                    elapsed_ms
                );
            } else {
                info!(
                    "{} {} -> {} in {:.2}ms",
                    method,
                    endpoint,
                    status.as_u16(),
                    elapsed_ms
                );
            }

            result
        })
    }
}

/// 按路由归类，避免把活动名称原样写进日志
fn classify_endpoint(path: &str) -> &'static str {
    match path {
        "/" => "root",
        "/health" | "/health/" => "health",
        "/campaigns" | "/campaigns/" => "campaigns:list",
        "/campaigns/search-by-date" | "/campaigns/search-by-date/" => "campaigns:search",
        p if p.starts_with("/campaigns/") => "campaigns:detail",
        _ => "other",
    }
}
