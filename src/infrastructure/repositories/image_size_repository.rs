use crate::domain::settings::model::builtin_presets;
use crate::domain::settings::{ImageSizePreset, ImageSizeRegistry};
use std::collections::BTreeMap;

/// Built-in presets plus any registered through configuration
pub struct ConfiguredImageSizeRegistry {
    presets: BTreeMap<String, ImageSizePreset>,
}

impl ConfiguredImageSizeRegistry {
    /// Extra presets override built-in ones of the same name
    pub fn with_extra(extra: BTreeMap<String, ImageSizePreset>) -> Self {
        let mut presets = builtin_presets();
        presets.extend(extra);
        Self { presets }
    }
}

impl Default for ConfiguredImageSizeRegistry {
    fn default() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }
}

impl ImageSizeRegistry for ConfiguredImageSizeRegistry {
    fn list_presets(&self) -> BTreeMap<String, ImageSizePreset> {
        self.presets.clone()
    }

    fn find_preset(&self, name: &str) -> Option<ImageSizePreset> {
        self.presets.get(name).copied()
    }
}
