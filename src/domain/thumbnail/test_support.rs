use crate::domain::catalog::{
    CatalogRepository, Category, CategoryId, Product, ProductId, ProductQuery, ProductStatus,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::InMemoryCatalogRepository;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashSet;

pub fn category(id: i64, parent_id: Option<i64>, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        parent_id: parent_id.map(CategoryId),
        name: name.to_string(),
        slug: name.to_lowercase(),
        thumbnail_url: None,
    }
}

/// Published product; `age_days` pushes `published_at` into the past
pub fn product(id: i64, image_url: Option<&str>, age_days: i64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {}", id),
        status: ProductStatus::Publish,
        image_url: image_url.map(str::to_string),
        published_at: Utc::now() - Duration::days(age_days),
    }
}

/// In-memory catalog that records product queries and can be told to fail
pub struct FakeCatalog {
    inner: InMemoryCatalogRepository,
    failing_parents: Mutex<HashSet<CategoryId>>,
    fail_product_queries: Mutex<bool>,
    queries: Mutex<Vec<ProductQuery>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            inner: InMemoryCatalogRepository::new(),
            failing_parents: Mutex::new(HashSet::new()),
            fail_product_queries: Mutex::new(false),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn add_category(&self, category: Category) -> Category {
        self.inner.insert_category(category.clone());
        category
    }

    pub fn add_product(&self, product: Product, category_ids: &[i64]) {
        let ids: Vec<CategoryId> = category_ids.iter().copied().map(CategoryId).collect();
        self.inner.insert_product(product, &ids);
    }

    pub fn fail_children_of(&self, parent_id: CategoryId) {
        self.failing_parents.lock().insert(parent_id);
    }

    pub fn fail_product_queries(&self) {
        *self.fail_product_queries.lock() = true;
    }

    pub fn recorded_queries(&self) -> Vec<ProductQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn find_category(&self, category_id: CategoryId) -> AppResult<Option<Category>> {
        self.inner.find_category(category_id).await
    }

    async fn get_children(&self, parent_id: CategoryId) -> AppResult<Vec<Category>> {
        if self.failing_parents.lock().contains(&parent_id) {
            return Err(AppError::Catalog(format!(
                "children of {} unavailable",
                parent_id
            )));
        }
        self.inner.get_children(parent_id).await
    }

    async fn get_root_categories(&self) -> AppResult<Vec<Category>> {
        self.inner.get_root_categories().await
    }

    async fn query_products(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        self.queries.lock().push(query.clone());
        if *self.fail_product_queries.lock() {
            return Err(AppError::Catalog("product query failed".to_string()));
        }
        self.inner.query_products(query).await
    }

    async fn find_product(&self, product_id: ProductId) -> AppResult<Option<Product>> {
        self.inner.find_product(product_id).await
    }
}
