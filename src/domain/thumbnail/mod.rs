pub mod error;
pub mod selector;
pub mod service;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::catalog::{Category, ProductId};
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::ThumbnailServiceError;
pub use selector::ThumbnailSelector;
pub use service::{ThumbnailService, ThumbnailServiceApi};
pub use tree::resolve_subtree_ids;

/// Outcome of resolving a category's thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionResult {
    UseProductImage { product_id: ProductId, size: String },
    UseDefaultRendering,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedThumbnail {
    pub html: String,
    pub resolution: ResolutionResult,
}

/// Turns a resolution into markup
#[async_trait]
pub trait ThumbnailRenderer: Send + Sync {
    /// Image of `product_id` at the named size preset
    async fn render_product_image(&self, product_id: ProductId, size: &str) -> AppResult<String>;

    /// The category's own thumbnail, or the placeholder image when it has none
    async fn render_default_placeholder(&self, category: &Category) -> AppResult<String>;
}
