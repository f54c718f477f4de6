pub mod service;

use crate::domain::catalog::{Category, CategoryId};
use crate::domain::thumbnail::{RenderedThumbnail, ResolutionResult};
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use service::SubcategoryListingService;

/// Strategy invoked once for every subcategory being displayed
#[async_trait]
pub trait SubcategoryThumbnailHandler: Send + Sync {
    async fn render_thumbnail(&self, category: &Category) -> AppResult<RenderedThumbnail>;
}

/// Response item for GET /api/categories/{categoryId}/subcategories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryTile {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub thumbnail_html: String,
    pub resolution: ResolutionResult,
}

impl SubcategoryTile {
    pub fn new(category: Category, thumbnail: RenderedThumbnail) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            thumbnail_html: thumbnail.html,
            resolution: thumbnail.resolution,
        }
    }
}
