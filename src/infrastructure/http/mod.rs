use axum::{
    http::{header, Method},
    middleware,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::health::{self, HealthState};
use crate::controllers::{settings::SettingsController, thumbnail::ThumbnailController};
use crate::infrastructure::auth::{admin_auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;

/// Build the application router with all routes and middleware
pub fn build_router(
    health_state: HealthState,
    config: Arc<Config>,
    thumbnail_controller: Arc<ThumbnailController>,
    settings_controller: Arc<SettingsController>,
) -> Router {
    // Category thumbnail routes (public)
    let thumbnail_routes = Router::new()
        .route(
            "/api/categories/:categoryId/thumbnail",
            get(ThumbnailController::get_thumbnail),
        )
        .route(
            "/api/categories/:categoryId/thumbnail/resolution",
            get(ThumbnailController::get_resolution),
        )
        .route(
            "/api/categories/:categoryId/subcategories",
            get(ThumbnailController::list_subcategories),
        )
        .with_state(thumbnail_controller);

    // Settings reads (public)
    let settings_routes = Router::new()
        .route("/api/settings/thumbnails", get(SettingsController::get_settings))
        .route("/api/settings/sections", get(SettingsController::list_sections))
        .route(
            "/api/settings/sections/:sectionId",
            get(SettingsController::get_section),
        )
        .with_state(settings_controller.clone());

    // Settings writes (admin only)
    let settings_admin_routes = Router::new()
        .route(
            "/api/settings/thumbnails",
            patch(SettingsController::update_settings),
        )
        .with_state(settings_controller)
        .layer(middleware::from_fn_with_state(config, admin_auth_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(health_state)
        .merge(thumbnail_routes)
        .merge(settings_routes)
        .merge(settings_admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer()),
        )
}

/// Storefront pages on other origins embed thumbnail fragments and the
/// admin panel patches settings from its own origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
}

/// Start the HTTP server on the configured address
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
