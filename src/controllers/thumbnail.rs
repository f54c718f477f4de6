use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::domain::catalog::CategoryId;
use crate::domain::listing::{SubcategoryListingService, SubcategoryTile};
use crate::domain::thumbnail::{ResolutionResult, ThumbnailService, ThumbnailServiceApi};
use crate::error::AppResult;

/// Id used in paths to address the top level of the category tree
const ROOT_CATEGORY: i64 = 0;

pub struct ThumbnailController {
    thumbnail_service: Arc<ThumbnailService>,
    listing_service: Arc<SubcategoryListingService>,
}

impl ThumbnailController {
    pub fn new(
        thumbnail_service: Arc<ThumbnailService>,
        listing_service: Arc<SubcategoryListingService>,
    ) -> Self {
        Self {
            thumbnail_service,
            listing_service,
        }
    }

    /// GET /api/categories/{categoryId}/thumbnail - Rendered thumbnail fragment
    pub async fn get_thumbnail(
        State(controller): State<Arc<ThumbnailController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Html<String>> {
        let rendered = controller
            .thumbnail_service
            .render_category_thumbnail(CategoryId(category_id))
            .await?;
        Ok(Html(rendered.html))
    }

    /// GET /api/categories/{categoryId}/thumbnail/resolution - Resolution decision
    pub async fn get_resolution(
        State(controller): State<Arc<ThumbnailController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Json<ResolutionResult>> {
        let resolution = controller
            .thumbnail_service
            .resolve_category_thumbnail(CategoryId(category_id))
            .await?;
        Ok(Json(resolution))
    }

    /// GET /api/categories/{categoryId}/subcategories - Tiles for each child
    pub async fn list_subcategories(
        State(controller): State<Arc<ThumbnailController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Json<Vec<SubcategoryTile>>> {
        let parent_id = (category_id != ROOT_CATEGORY).then_some(CategoryId(category_id));
        let tiles = controller
            .listing_service
            .render_subcategories(parent_id)
            .await?;
        Ok(Json(tiles))
    }
}
