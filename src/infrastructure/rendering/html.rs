use crate::domain::catalog::{CatalogRepository, Category, ProductId};
use crate::domain::settings::{ImageSizePreset, ImageSizeRegistry, DEFAULT_IMAGE_SIZE};
use crate::domain::thumbnail::ThumbnailRenderer;
use crate::error::AppResult;
use async_trait::async_trait;
use std::fmt::Write;
use std::sync::Arc;

/// Renders thumbnails as `<img>` fragments
pub struct HtmlThumbnailRenderer {
    catalog: Arc<dyn CatalogRepository>,
    image_sizes: Arc<dyn ImageSizeRegistry>,
    placeholder_url: String,
}

impl HtmlThumbnailRenderer {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        image_sizes: Arc<dyn ImageSizeRegistry>,
        placeholder_url: String,
    ) -> Self {
        Self {
            catalog,
            image_sizes,
            placeholder_url,
        }
    }
}

#[async_trait]
impl ThumbnailRenderer for HtmlThumbnailRenderer {
    async fn render_product_image(&self, product_id: ProductId, size: &str) -> AppResult<String> {
        let product = match self.catalog.find_product(product_id).await? {
            Some(product) => product,
            None => {
                tracing::warn!(product_id = %product_id, "Selected product disappeared before rendering");
                return Ok(String::new());
            }
        };

        let Some(src) = product.image_url.as_deref().filter(|_| product.has_image()) else {
            return Ok(String::new());
        };

        let preset = self.image_sizes.find_preset(size);
        Ok(img_tag(
            src,
            &product.title,
            &format!("attachment-{size} size-{size}"),
            preset,
        ))
    }

    async fn render_default_placeholder(&self, category: &Category) -> AppResult<String> {
        let preset = self.image_sizes.find_preset(DEFAULT_IMAGE_SIZE);

        if category.has_explicit_thumbnail() {
            let src = category.thumbnail_url.as_deref().unwrap_or_default();
            return Ok(img_tag(src, &category.name, "category-thumbnail", preset));
        }

        Ok(img_tag(
            &self.placeholder_url,
            &category.name,
            "category-thumbnail placeholder",
            preset,
        ))
    }
}

fn img_tag(src: &str, alt: &str, class: &str, preset: Option<ImageSizePreset>) -> String {
    let mut tag = format!(
        r#"<img src="{}" alt="{}" class="{}""#,
        escape_attr(src),
        escape_attr(alt),
        escape_attr(class)
    );

    if let Some(preset) = preset {
        if preset.width > 0 {
            let _ = write!(tag, r#" width="{}""#, preset.width);
        }
        if preset.height > 0 {
            let _ = write!(tag, r#" height="{}""#, preset.height);
        }
    }

    tag.push_str(" />");
    tag
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
