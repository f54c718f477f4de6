use super::error::ThumbnailServiceError;
use super::selector::ThumbnailSelector;
use super::{RenderedThumbnail, ResolutionResult, ThumbnailRenderer};
use crate::domain::catalog::{CatalogRepository, Category, CategoryId};
use crate::domain::listing::SubcategoryThumbnailHandler;
use crate::domain::settings::SettingsServiceApi;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ThumbnailService {
    catalog: Arc<dyn CatalogRepository>,
    settings: Arc<dyn SettingsServiceApi>,
    renderer: Arc<dyn ThumbnailRenderer>,
    selector: ThumbnailSelector,
}

impl ThumbnailService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        settings: Arc<dyn SettingsServiceApi>,
        renderer: Arc<dyn ThumbnailRenderer>,
    ) -> Self {
        let selector = ThumbnailSelector::new(catalog.clone());
        Self {
            catalog,
            settings,
            renderer,
            selector,
        }
    }
}

#[async_trait]
pub trait ThumbnailServiceApi: Send + Sync {
    /// Render the thumbnail shown for a category in a category listing
    async fn render_category_thumbnail(
        &self,
        category_id: CategoryId,
    ) -> Result<RenderedThumbnail, ThumbnailServiceError>;

    /// The resolution decision for a category, without rendering it
    async fn resolve_category_thumbnail(
        &self,
        category_id: CategoryId,
    ) -> Result<ResolutionResult, ThumbnailServiceError>;
}

#[async_trait]
impl ThumbnailServiceApi for ThumbnailService {
    async fn render_category_thumbnail(
        &self,
        category_id: CategoryId,
    ) -> Result<RenderedThumbnail, ThumbnailServiceError> {
        let category = self.find_category(category_id).await?;
        self.render(&category).await
    }

    async fn resolve_category_thumbnail(
        &self,
        category_id: CategoryId,
    ) -> Result<ResolutionResult, ThumbnailServiceError> {
        let category = self.find_category(category_id).await?;
        self.resolve(&category).await
    }
}

#[async_trait]
impl SubcategoryThumbnailHandler for ThumbnailService {
    async fn render_thumbnail(&self, category: &Category) -> AppResult<RenderedThumbnail> {
        Ok(self.render(category).await?)
    }
}

impl ThumbnailService {
    async fn find_category(&self, category_id: CategoryId) -> Result<Category, ThumbnailServiceError> {
        self.catalog
            .find_category(category_id)
            .await
            .map_err(|e| ThumbnailServiceError::Dependency(e.to_string()))?
            .ok_or(ThumbnailServiceError::CategoryNotFound(category_id))
    }

    async fn resolve(&self, category: &Category) -> Result<ResolutionResult, ThumbnailServiceError> {
        // settings are read on every call so changes apply to the next render
        let settings = self
            .settings
            .current()
            .await
            .map_err(|e| ThumbnailServiceError::Dependency(e.to_string()))?;

        self.selector.select(category, &settings).await
    }

    async fn render(&self, category: &Category) -> Result<RenderedThumbnail, ThumbnailServiceError> {
        let resolution = self.resolve(category).await?;

        let html = match &resolution {
            ResolutionResult::UseProductImage { product_id, size } => {
                self.renderer.render_product_image(*product_id, size).await
            }
            ResolutionResult::UseDefaultRendering => {
                self.renderer.render_default_placeholder(category).await
            }
        }
        .map_err(|e| ThumbnailServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            category_id = %category.id,
            resolution = ?resolution,
            "Category thumbnail rendered"
        );

        Ok(RenderedThumbnail { html, resolution })
    }
}
