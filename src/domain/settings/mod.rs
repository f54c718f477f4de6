pub mod dto;
pub mod error;
pub mod model;
pub mod service;

use crate::error::AppResult;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub use dto::{
    SelectOption, SettingsField, SettingsSectionResponse, SettingsSectionSummary,
    UpdateThumbnailSettingsRequest,
};
pub use error::SettingsServiceError;
pub use model::{ImageSizePreset, ThumbnailSettings, DEFAULT_IMAGE_SIZE};
pub use service::{SettingsService, SettingsServiceApi};

/// Storage for named configuration values
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_setting(&self, name: &str) -> AppResult<Option<String>>;

    async fn set_setting(&self, name: &str, value: &str) -> AppResult<()>;

    /// Store `value` only when `name` has no value yet.
    ///
    /// Returns `true` when the value was written.
    async fn insert_setting_if_absent(&self, name: &str, value: &str) -> AppResult<bool>;
}

/// Source of the image size presets offered in the settings panel
pub trait ImageSizeRegistry: Send + Sync {
    fn list_presets(&self) -> BTreeMap<String, ImageSizePreset>;

    fn find_preset(&self, name: &str) -> Option<ImageSizePreset> {
        self.list_presets().get(name).copied()
    }
}
