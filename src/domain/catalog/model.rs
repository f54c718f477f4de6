use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeSet;
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category. Categories form a forest through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub name: String,
    pub slug: String,
    /// Image explicitly assigned to the category by an administrator
    pub thumbnail_url: Option<String>,
}

/// An image reference counts only when it has a non-whitespace character
pub fn is_present(url: Option<&str>) -> bool {
    url.map(|url| !url.trim().is_empty()).unwrap_or(false)
}

impl Category {
    pub fn has_explicit_thumbnail(&self) -> bool {
        is_present(self.thumbnail_url.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
pub enum ProductStatus {
    #[serde(rename = "publish")]
    Publish,
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "private")]
    Private,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Publish => write!(f, "publish"),
            ProductStatus::Draft => write!(f, "draft"),
            ProductStatus::Private => write!(f, "private"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Product {
    pub fn has_image(&self) -> bool {
        is_present(self.image_url.as_deref())
    }

    /// Published and carrying a non-empty image reference
    pub fn is_eligible(&self) -> bool {
        self.status == ProductStatus::Publish && self.has_image()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductOrder {
    /// The catalog's default ordering, newest first
    Natural,
    Random,
}

/// Query for published products belonging to any of `category_ids`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_ids: BTreeSet<CategoryId>,
    pub require_image: bool,
    pub limit: u32,
    pub order: ProductOrder,
}

impl ProductQuery {
    pub fn with_image(category_ids: BTreeSet<CategoryId>, order: ProductOrder, limit: u32) -> Self {
        Self {
            category_ids,
            require_image: true,
            limit,
            order,
        }
    }
}
