use super::{SubcategoryThumbnailHandler, SubcategoryTile};
use crate::domain::catalog::{CatalogRepository, CategoryId};
use crate::error::{AppError, AppResult};
use std::sync::Arc;

/// Walks the children of a category and renders a tile for each one
pub struct SubcategoryListingService {
    catalog: Arc<dyn CatalogRepository>,
    handler: Arc<dyn SubcategoryThumbnailHandler>,
}

impl SubcategoryListingService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        handler: Arc<dyn SubcategoryThumbnailHandler>,
    ) -> Self {
        Self { catalog, handler }
    }

    /// Tiles for the direct children of `parent_id`, or for the root
    /// categories when no parent is given. Catalog order (by name) is preserved.
    pub async fn render_subcategories(
        &self,
        parent_id: Option<CategoryId>,
    ) -> AppResult<Vec<SubcategoryTile>> {
        let children = match parent_id {
            Some(parent_id) => {
                self.catalog
                    .find_category(parent_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Category {} not found", parent_id)))?;
                self.catalog.get_children(parent_id).await?
            }
            None => self.catalog.get_root_categories().await?,
        };

        tracing::debug!(
            parent_id = ?parent_id,
            count = children.len(),
            "Rendering subcategory thumbnails"
        );

        let mut tiles = Vec::with_capacity(children.len());
        for child in children {
            let thumbnail = self.handler.render_thumbnail(&child).await?;
            tiles.push(SubcategoryTile::new(child, thumbnail));
        }

        Ok(tiles)
    }
}
