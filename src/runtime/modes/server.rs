//! Server mode
//!
//! Configures and starts the HTTP server with all campaign routes.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::{AccessLogMiddleware, RequestIdMiddleware};
use crate::config::CorsConfig;
use crate::runtime::lifetime;

/// Validate CORS configuration at startup (runs once)
fn validate_cors_config(cors_config: &CorsConfig) {
    if !cors_config.enabled {
        return;
    }

    if cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed. \
            Set allowed_origins explicitly or use '[\"*\"]' for any origin."
        );
    }

    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");
    if is_any_origin && cors_config.allow_credentials {
        tracing::error!(
            "SECURITY WARNING: allow_any_origin + allow_credentials is a dangerous combination! \
            Disabling credentials."
        );
    }

    for method in &cors_config.allowed_methods {
        if method.parse::<actix_web::http::Method>().is_err() {
            warn!("Ignoring invalid CORS method: {}", method);
        }
    }
}

/// Build CORS middleware from configuration
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    // 关闭时使用浏览器默认的同源策略
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();
    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");

    if is_any_origin {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    for header in &cors_config.allowed_headers {
        cors = cors.allowed_header(header.as_str());
    }

    cors = cors
        .expose_headers(vec![crate::api::middleware::request_id::REQUEST_ID_HEADER])
        .max_age(cors_config.max_age as usize);

    // any origin + credentials 组合强制关闭 credentials
    if cors_config.allow_credentials && !is_any_origin {
        cors = cors.supports_credentials();
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup()
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let campaign_service = startup.campaign_service.clone();

    let config = crate::config::get_config();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AccessLogMiddleware)
            .wrap(RequestIdMiddleware) // 包在 AccessLog 外层，access log 运行在 request span 内
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .configure(crate::api::configure(campaign_service.clone()))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .disable_signals()
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    warn!("Starting server at http://{}", bind_address);
    let server = server.run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(handle, storage) => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
