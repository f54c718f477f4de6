use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::settings::{
    SettingsSectionResponse, SettingsSectionSummary, SettingsService, SettingsServiceApi,
    ThumbnailSettings, UpdateThumbnailSettingsRequest,
};
use crate::error::AppResult;
use crate::infrastructure::auth::AuthAdmin;

pub struct SettingsController {
    settings_service: Arc<SettingsService>,
}

impl SettingsController {
    pub fn new(settings_service: Arc<SettingsService>) -> Self {
        Self { settings_service }
    }

    /// GET /api/settings/thumbnails - Current thumbnail settings
    pub async fn get_settings(
        State(controller): State<Arc<SettingsController>>,
    ) -> AppResult<Json<ThumbnailSettings>> {
        let settings = controller.settings_service.current().await?;
        Ok(Json(settings))
    }

    /// PATCH /api/settings/thumbnails - Update thumbnail settings
    pub async fn update_settings(
        State(controller): State<Arc<SettingsController>>,
        Extension(admin): Extension<AuthAdmin>,
        Json(request): Json<UpdateThumbnailSettingsRequest>,
    ) -> AppResult<Json<ThumbnailSettings>> {
        tracing::info!(admin = %admin.subject, "Updating thumbnail settings");
        let settings = controller.settings_service.update(request).await?;
        Ok(Json(settings))
    }

    /// GET /api/settings/sections - Settings sections contributed by this service
    pub async fn list_sections(
        State(controller): State<Arc<SettingsController>>,
    ) -> Json<Vec<SettingsSectionSummary>> {
        Json(controller.settings_service.settings_sections())
    }

    /// GET /api/settings/sections/{sectionId} - Fields of one settings section
    pub async fn get_section(
        State(controller): State<Arc<SettingsController>>,
        Path(section_id): Path<String>,
    ) -> AppResult<Json<SettingsSectionResponse>> {
        let section = controller
            .settings_service
            .settings_section(&section_id)
            .await?;
        Ok(Json(section))
    }
}
