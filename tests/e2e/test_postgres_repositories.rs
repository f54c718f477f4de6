use crate::e2e::helpers::postgres::{fresh_database, insert_category, insert_product};

use autothumb_backend::domain::catalog::{
    CatalogRepository, Category, CategoryId, Product, ProductId, ProductOrder, ProductQuery,
    ProductStatus,
};
use autothumb_backend::domain::settings::{SettingsService, SettingsServiceApi, SettingsStore};
use autothumb_backend::domain::thumbnail::resolve_subtree_ids;
use autothumb_backend::infrastructure::repositories::{
    ConfiguredImageSizeRegistry, PgCatalogRepository, SettingsRepository,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::collections::BTreeSet;
use std::sync::Arc;

fn category(id: i64, parent_id: Option<i64>, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        parent_id: parent_id.map(CategoryId),
        name: name.to_string(),
        slug: format!("{}-{}", name.to_lowercase(), id),
        thumbnail_url: None,
    }
}

fn product(id: i64, status: ProductStatus, image_url: Option<&str>, age_days: i64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {}", id),
        status,
        image_url: image_url.map(str::to_string),
        published_at: Utc::now() - Duration::days(age_days),
    }
}

fn ids(values: &[i64]) -> BTreeSet<CategoryId> {
    values.iter().copied().map(CategoryId).collect()
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn it_should_walk_the_category_tree_in_postgres() {
    let pool = fresh_database().await.unwrap();
    for c in [
        category(1, None, "Clothing"),
        category(2, Some(1), "Shirts"),
        category(3, Some(1), "Hats"),
        category(4, Some(2), "Polo"),
        category(5, None, "Garden"),
        category(6, None, "accessories"),
    ] {
        insert_category(&pool, &c).await.unwrap();
    }
    let catalog = PgCatalogRepository::new(Arc::new(pool));

    let children: Vec<i64> = catalog
        .get_children(CategoryId(1))
        .await
        .unwrap()
        .iter()
        .map(|c| c.id.0)
        .collect();
    assert_eq!(children, vec![3, 2]);

    let roots: Vec<i64> = catalog
        .get_root_categories()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id.0)
        .collect();
    // bytewise: upper case sorts before lower case
    assert_eq!(roots, vec![1, 5, 6]);

    let root = catalog.find_category(CategoryId(1)).await.unwrap().unwrap();
    assert_eq!(resolve_subtree_ids(&catalog, &root).await, ids(&[1, 2, 3, 4]));
    assert!(catalog.find_category(CategoryId(99)).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn it_should_filter_and_order_products_in_postgres() {
    let pool = fresh_database().await.unwrap();
    insert_category(&pool, &category(1, None, "Clothing")).await.unwrap();
    insert_category(&pool, &category(2, None, "Garden")).await.unwrap();

    let fixtures = [
        (product(10, ProductStatus::Publish, Some("/media/10.jpg"), 10), vec![1]),
        (product(11, ProductStatus::Publish, Some("/media/11.jpg"), 1), vec![1]),
        (product(12, ProductStatus::Draft, Some("/media/12.jpg"), 0), vec![1]),
        (product(13, ProductStatus::Publish, None, 0), vec![1]),
        (product(14, ProductStatus::Publish, Some(""), 0), vec![1]),
        (product(15, ProductStatus::Publish, Some("/media/15.jpg"), 0), vec![2]),
        (product(16, ProductStatus::Publish, Some("  "), 0), vec![1]),
    ];
    for (p, category_ids) in &fixtures {
        insert_product(&pool, p, category_ids).await.unwrap();
    }
    let catalog = PgCatalogRepository::new(Arc::new(pool));

    let newest = catalog
        .query_products(&ProductQuery::with_image(ids(&[1]), ProductOrder::Natural, 10))
        .await
        .unwrap();
    let found: Vec<i64> = newest.iter().map(|p| p.id.0).collect();
    assert_eq!(found, vec![11, 10]);

    let random = catalog
        .query_products(&ProductQuery::with_image(ids(&[1, 2]), ProductOrder::Random, 1))
        .await
        .unwrap();
    assert_eq!(random.len(), 1);
    assert!([10, 11, 15].contains(&random[0].id.0));

    let found = catalog.find_product(ProductId(12)).await.unwrap().unwrap();
    assert_eq!(found.status, ProductStatus::Draft);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn it_should_persist_settings_in_postgres() {
    let pool = Arc::new(fresh_database().await.unwrap());
    let store = Arc::new(SettingsRepository::new(pool));

    assert!(store.get_setting("missing").await.unwrap().is_none());

    let service = SettingsService::new(store.clone(), Arc::new(ConfiguredImageSizeRegistry::default()));
    assert_eq!(service.install_defaults().await.unwrap(), 3);

    store
        .set_setting("auto_category_thumbnails.shuffle", "no")
        .await
        .unwrap();

    // A second install leaves existing values alone
    assert_eq!(service.install_defaults().await.unwrap(), 0);
    let settings = service.current().await.unwrap();
    assert!(settings.recurse);
    assert!(!settings.shuffle);
    assert_eq!(settings.image_size, "shop_thumbnail");
}
