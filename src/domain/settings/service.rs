use super::error::SettingsServiceError;
use super::model::{encode_flag, IMAGE_SIZE_KEY, RECURSE_KEY, SHUFFLE_KEY};
use super::{
    ImageSizeRegistry, SelectOption, SettingsField, SettingsSectionResponse,
    SettingsSectionSummary, SettingsStore, ThumbnailSettings, UpdateThumbnailSettingsRequest,
};
use async_trait::async_trait;
use std::sync::Arc;

pub const SECTION_ID: &str = "auto-category-thumbnails";
const SECTION_TITLE: &str = "Auto Category Thumbnails";

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    image_sizes: Arc<dyn ImageSizeRegistry>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>, image_sizes: Arc<dyn ImageSizeRegistry>) -> Self {
        Self { store, image_sizes }
    }
}

#[async_trait]
pub trait SettingsServiceApi: Send + Sync {
    /// Current thumbnail settings, read fresh from the store
    async fn current(&self) -> Result<ThumbnailSettings, SettingsServiceError>;

    /// Persist each provided field immediately and return the new settings
    async fn update(
        &self,
        request: UpdateThumbnailSettingsRequest,
    ) -> Result<ThumbnailSettings, SettingsServiceError>;

    /// Write the default settings for keys that have never been set.
    ///
    /// Returns the number of keys written.
    async fn install_defaults(&self) -> Result<usize, SettingsServiceError>;

    fn settings_sections(&self) -> Vec<SettingsSectionSummary>;

    async fn settings_section(
        &self,
        section_id: &str,
    ) -> Result<SettingsSectionResponse, SettingsServiceError>;
}

#[async_trait]
impl SettingsServiceApi for SettingsService {
    async fn current(&self) -> Result<ThumbnailSettings, SettingsServiceError> {
        let recurse = self.read(RECURSE_KEY).await?;
        let shuffle = self.read(SHUFFLE_KEY).await?;
        let image_size = self.read(IMAGE_SIZE_KEY).await?;

        Ok(ThumbnailSettings::from_stored(
            recurse.as_deref(),
            shuffle.as_deref(),
            image_size,
        ))
    }

    async fn update(
        &self,
        request: UpdateThumbnailSettingsRequest,
    ) -> Result<ThumbnailSettings, SettingsServiceError> {
        if let Some(image_size) = &request.image_size {
            self.validate_image_size(image_size)?;
        }

        if let Some(image_size) = &request.image_size {
            self.write(IMAGE_SIZE_KEY, image_size).await?;
        }
        if let Some(recurse) = request.recurse {
            self.write(RECURSE_KEY, encode_flag(recurse)).await?;
        }
        if let Some(shuffle) = request.shuffle {
            self.write(SHUFFLE_KEY, encode_flag(shuffle)).await?;
        }

        let settings = self.current().await?;
        tracing::info!(
            recurse = settings.recurse,
            shuffle = settings.shuffle,
            image_size = %settings.image_size,
            "Thumbnail settings updated"
        );

        Ok(settings)
    }

    async fn install_defaults(&self) -> Result<usize, SettingsServiceError> {
        let mut written = 0;
        for (name, value) in ThumbnailSettings::default().to_stored() {
            let inserted = self
                .store
                .insert_setting_if_absent(name, &value)
                .await
                .map_err(|e| SettingsServiceError::Dependency(e.to_string()))?;
            if inserted {
                written += 1;
            }
        }

        tracing::info!(written, "Default thumbnail settings installed");
        Ok(written)
    }

    fn settings_sections(&self) -> Vec<SettingsSectionSummary> {
        vec![SettingsSectionSummary {
            id: SECTION_ID.to_string(),
            title: SECTION_TITLE.to_string(),
        }]
    }

    async fn settings_section(
        &self,
        section_id: &str,
    ) -> Result<SettingsSectionResponse, SettingsServiceError> {
        if section_id != SECTION_ID {
            return Err(SettingsServiceError::SectionNotFound(section_id.to_string()));
        }

        let settings = self.current().await?;
        Ok(SettingsSectionResponse {
            id: SECTION_ID.to_string(),
            title: SECTION_TITLE.to_string(),
            fields: self.build_fields(&settings),
        })
    }
}

impl SettingsService {
    async fn read(&self, name: &str) -> Result<Option<String>, SettingsServiceError> {
        self.store
            .get_setting(name)
            .await
            .map_err(|e| SettingsServiceError::Dependency(e.to_string()))
    }

    async fn write(&self, name: &str, value: &str) -> Result<(), SettingsServiceError> {
        self.store
            .set_setting(name, value)
            .await
            .map_err(|e| SettingsServiceError::Dependency(e.to_string()))
    }

    fn validate_image_size(&self, image_size: &str) -> Result<(), SettingsServiceError> {
        if self.image_sizes.find_preset(image_size).is_none() {
            return Err(SettingsServiceError::Invalid(format!(
                "Unknown image size: {}",
                image_size
            )));
        }
        Ok(())
    }

    fn build_fields(&self, settings: &ThumbnailSettings) -> Vec<SettingsField> {
        let options = self
            .image_sizes
            .list_presets()
            .into_iter()
            .map(|(name, preset)| SelectOption {
                label: preset.label(&name),
                value: name,
            })
            .collect();

        vec![
            SettingsField::Title {
                id: SECTION_ID.to_string(),
                name: format!("{} Settings", SECTION_TITLE),
            },
            SettingsField::Select {
                id: IMAGE_SIZE_KEY.to_string(),
                name: "Thumbnail Size".to_string(),
                desc: "Choose the image size to use for the thumbnails".to_string(),
                options,
                value: settings.image_size.clone(),
            },
            SettingsField::Checkbox {
                id: RECURSE_KEY.to_string(),
                name: "Go into Child Categories".to_string(),
                desc: "If ticked, thumbnails are also searched for in any child categories. \
                       If not ticked, the search stays on the same level."
                    .to_string(),
                value: settings.recurse,
            },
            SettingsField::Checkbox {
                id: SHUFFLE_KEY.to_string(),
                name: "Random Thumbnail".to_string(),
                desc: "If ticked, a thumbnail is picked at random from those available. \
                       If not ticked, the first one found is always used."
                    .to_string(),
                value: settings.shuffle,
            },
            SettingsField::SectionEnd {
                id: SECTION_ID.to_string(),
            },
        ]
    }
}
