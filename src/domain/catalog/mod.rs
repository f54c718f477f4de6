pub mod model;

use crate::error::AppResult;
use async_trait::async_trait;

pub use model::{
    Category, CategoryId, Product, ProductId, ProductOrder, ProductQuery, ProductStatus,
};

/// Read access to the product catalog.
///
/// Implementations never mutate catalog state on behalf of the thumbnail
/// resolution path.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_category(&self, category_id: CategoryId) -> AppResult<Option<Category>>;

    /// Direct children of `parent_id`, in catalog order
    async fn get_children(&self, parent_id: CategoryId) -> AppResult<Vec<Category>>;

    /// Categories without a parent, in catalog order
    async fn get_root_categories(&self) -> AppResult<Vec<Category>>;

    fn has_explicit_thumbnail(&self, category: &Category) -> bool {
        category.has_explicit_thumbnail()
    }

    /// Published products in any of the query's categories.
    ///
    /// Returns at most `query.limit` products.
    async fn query_products(&self, query: &ProductQuery) -> AppResult<Vec<Product>>;

    async fn find_product(&self, product_id: ProductId) -> AppResult<Option<Product>>;
}
