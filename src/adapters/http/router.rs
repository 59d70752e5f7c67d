use crate::adapters::http::handlers;
use crate::core::service::ConversionService;
use crate::domain::ports::ConfigProvider;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ConversionService>,
}

impl AppState {
    pub fn new(service: ConversionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// 建立完整路由：API、靜態檔案 (可選)、404、CORS 與請求日誌
pub fn create_router<C: ConfigProvider>(state: AppState, config: &C) -> Router {
    let api = Router::new()
        .route(
            "/api",
            get(handlers::documentation).fallback(handlers::get_only),
        )
        .route(
            "/api/r2a",
            get(handlers::roman_to_arabic).fallback(handlers::get_only),
        )
        .route(
            "/api/a2r",
            get(handlers::arabic_to_roman).fallback(handlers::get_only),
        )
        .route(
            "/api/convert",
            post(handlers::convert).fallback(handlers::post_only),
        )
        .route(
            "/api/batch",
            post(handlers::batch).fallback(handlers::post_only),
        )
        .with_state(state);

    let router = match config.static_dir() {
        Some(dir) => {
            tracing::info!("📂 Serving static files from {}", dir);
            let static_files = ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(handlers::not_found.into_service());
            api.fallback_service(static_files)
        }
        None => api.fallback(handlers::not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origins()))
}
