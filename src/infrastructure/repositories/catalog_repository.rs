use crate::domain::catalog::{
    CatalogRepository, Category, CategoryId, Product, ProductId, ProductOrder, ProductQuery,
};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PgCatalogRepository {
    pool: Arc<DbPool>,
}

impl PgCatalogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

fn order_clause(order: ProductOrder) -> &'static str {
    match order {
        ProductOrder::Natural => "p.published_at DESC, p.id DESC",
        ProductOrder::Random => "random()",
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn find_category(&self, category_id: CategoryId) -> AppResult<Option<Category>> {
        let pool = self.pool.as_ref();
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, thumbnail_url
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    async fn get_children(&self, parent_id: CategoryId) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, thumbnail_url
            FROM categories
            WHERE parent_id = $1
            ORDER BY name COLLATE "C", id
            "#,
        )
        .bind(parent_id)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    async fn get_root_categories(&self) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, thumbnail_url
            FROM categories
            WHERE parent_id IS NULL
            ORDER BY name COLLATE "C", id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    async fn query_products(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let pool = self.pool.as_ref();
        let category_ids: Vec<i64> = query.category_ids.iter().map(|id| id.0).collect();

        let sql = format!(
            r#"
            SELECT p.id, p.title, p.status, p.image_url, p.published_at
            FROM products p
            WHERE p.status = 'publish'
              AND EXISTS (
                  SELECT 1 FROM product_categories pc
                  WHERE pc.product_id = p.id AND pc.category_id = ANY($1)
              )
              AND (NOT $2 OR btrim(p.image_url, E' \t\r\n') <> '')
            ORDER BY {}
            LIMIT $3
            "#,
            order_clause(query.order)
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(category_ids)
            .bind(query.require_image)
            .bind(i64::from(query.limit))
            .fetch_all(pool)
            .await?;

        Ok(products)
    }

    async fn find_product(&self, product_id: ProductId) -> AppResult<Option<Product>> {
        let pool = self.pool.as_ref();
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, status, image_url, published_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(pool)
        .await?;

        Ok(product)
    }
}
