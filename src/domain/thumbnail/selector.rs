use super::error::ThumbnailServiceError;
use super::tree::resolve_subtree_ids;
use super::ResolutionResult;
use crate::domain::catalog::{CatalogRepository, Category, ProductOrder, ProductQuery};
use crate::domain::settings::ThumbnailSettings;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Picks the product whose image stands in for a category
pub struct ThumbnailSelector {
    catalog: Arc<dyn CatalogRepository>,
}

impl ThumbnailSelector {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Resolve the thumbnail for `category`.
    ///
    /// Issues at most one product query. Categories with an explicit
    /// thumbnail are never overridden and issue none.
    pub async fn select(
        &self,
        category: &Category,
        settings: &ThumbnailSettings,
    ) -> Result<ResolutionResult, ThumbnailServiceError> {
        if self.catalog.has_explicit_thumbnail(category) {
            tracing::debug!(
                category_id = %category.id,
                "Category has an explicit thumbnail"
            );
            return Ok(ResolutionResult::UseDefaultRendering);
        }

        let scope = if settings.recurse {
            resolve_subtree_ids(self.catalog.as_ref(), category).await
        } else {
            BTreeSet::from([category.id])
        };

        let order = if settings.shuffle {
            ProductOrder::Random
        } else {
            ProductOrder::Natural
        };

        tracing::debug!(
            category_id = %category.id,
            scope_size = scope.len(),
            order = ?order,
            "Querying catalog for a thumbnail product"
        );

        let query = ProductQuery::with_image(scope, order, 1);
        let products = self
            .catalog
            .query_products(&query)
            .await
            .map_err(|e| ThumbnailServiceError::Dependency(e.to_string()))?;

        match products.into_iter().next() {
            Some(product) => {
                tracing::debug!(
                    category_id = %category.id,
                    product_id = %product.id,
                    "Selected product thumbnail"
                );
                Ok(ResolutionResult::UseProductImage {
                    product_id: product.id,
                    size: settings.image_size.clone(),
                })
            }
            None => Ok(ResolutionResult::UseDefaultRendering),
        }
    }
}
