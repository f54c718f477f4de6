use crate::domain::catalog::{
    CatalogRepository, Category, CategoryId, Product, ProductId, ProductOrder, ProductQuery,
    ProductStatus,
};
use crate::error::AppResult;
use async_trait::async_trait;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Default)]
struct CatalogState {
    categories: BTreeMap<CategoryId, Category>,
    products: BTreeMap<ProductId, (Product, BTreeSet<CategoryId>)>,
}

/// Catalog held in memory. Orders categories and products the same way the
/// PostgreSQL repository does (names compare bytewise, as `COLLATE "C"`).
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_category(&self, category: Category) {
        self.state.write().categories.insert(category.id, category);
    }

    pub fn insert_product(&self, product: Product, category_ids: &[CategoryId]) {
        let memberships = category_ids.iter().copied().collect();
        self.state
            .write()
            .products
            .insert(product.id, (product, memberships));
    }

    fn sorted(mut categories: Vec<Category>) -> Vec<Category> {
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        categories
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn find_category(&self, category_id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.state.read().categories.get(&category_id).cloned())
    }

    async fn get_children(&self, parent_id: CategoryId) -> AppResult<Vec<Category>> {
        let children = self
            .state
            .read()
            .categories
            .values()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect();
        Ok(Self::sorted(children))
    }

    async fn get_root_categories(&self) -> AppResult<Vec<Category>> {
        let roots = self
            .state
            .read()
            .categories
            .values()
            .filter(|c| c.parent_id.is_none())
            .cloned()
            .collect();
        Ok(Self::sorted(roots))
    }

    async fn query_products(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let mut candidates: Vec<Product> = self
            .state
            .read()
            .products
            .values()
            .filter(|(product, memberships)| {
                product.status == ProductStatus::Publish
                    && (!query.require_image || product.has_image())
                    && !memberships.is_disjoint(&query.category_ids)
            })
            .map(|(product, _)| product.clone())
            .collect();

        match query.order {
            ProductOrder::Natural => candidates.sort_by(|a, b| {
                b.published_at
                    .cmp(&a.published_at)
                    .then(b.id.cmp(&a.id))
            }),
            ProductOrder::Random => candidates.shuffle(&mut rand::rng()),
        }

        candidates.truncate(query.limit as usize);
        Ok(candidates)
    }

    async fn find_product(&self, product_id: ProductId) -> AppResult<Option<Product>> {
        Ok(self
            .state
            .read()
            .products
            .get(&product_id)
            .map(|(product, _)| product.clone()))
    }
}
