use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use autothumb_backend::controllers::{settings::SettingsController, thumbnail::ThumbnailController};
use autothumb_backend::domain::listing::SubcategoryListingService;
use autothumb_backend::domain::settings::{SettingsService, SettingsServiceApi};
use autothumb_backend::domain::thumbnail::ThumbnailService;
use autothumb_backend::infrastructure::config::{Config, LogFormat};
use autothumb_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use autothumb_backend::infrastructure::http::{build_router, start_http_server};
use autothumb_backend::infrastructure::rendering::HtmlThumbnailRenderer;
use autothumb_backend::infrastructure::repositories::{
    ConfiguredImageSizeRegistry, PgCatalogRepository, SettingsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting auto category thumbnails backend on {}:{}",
        config.host,
        config.port
    );
    if config.is_development() {
        tracing::warn!("Running in development mode");
    }

    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let catalog_repo = Arc::new(PgCatalogRepository::new(pool.clone()));
    let settings_repo = Arc::new(SettingsRepository::new(pool.clone()));
    let image_sizes = Arc::new(ConfiguredImageSizeRegistry::with_extra(
        config.extra_image_sizes.clone(),
    ));

    // 2. Services
    tracing::info!("Instantiating services...");
    let settings_service = Arc::new(SettingsService::new(settings_repo, image_sizes.clone()));
    settings_service.install_defaults().await?;

    let renderer = Arc::new(HtmlThumbnailRenderer::new(
        catalog_repo.clone(),
        image_sizes,
        config.placeholder_image_url.clone(),
    ));
    let thumbnail_service = Arc::new(ThumbnailService::new(
        catalog_repo.clone(),
        settings_service.clone(),
        renderer,
    ));
    let listing_service = Arc::new(SubcategoryListingService::new(
        catalog_repo,
        thumbnail_service.clone(),
    ));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let thumbnail_controller = Arc::new(ThumbnailController::new(thumbnail_service, listing_service));
    let settings_controller = Arc::new(SettingsController::new(settings_service));

    let app = build_router(
        Some(pool),
        config.clone(),
        thumbnail_controller,
        settings_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "autothumb_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
