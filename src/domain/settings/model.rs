use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RECURSE_KEY: &str = "auto_category_thumbnails.recurse";
pub const SHUFFLE_KEY: &str = "auto_category_thumbnails.shuffle";
pub const IMAGE_SIZE_KEY: &str = "auto_category_thumbnails.image_size";

/// The platform's small thumbnail preset
pub const DEFAULT_IMAGE_SIZE: &str = "shop_thumbnail";

const FLAG_ON: &str = "yes";
const FLAG_OFF: &str = "no";

/// Options that drive category thumbnail resolution.
///
/// Built from the settings store on every resolution call, so changes take
/// effect on the next render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSettings {
    /// Search descendant categories as well as the category itself
    pub recurse: bool,
    /// Pick a random eligible product instead of the first one
    pub shuffle: bool,
    pub image_size: String,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            recurse: true,
            shuffle: true,
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }
}

impl ThumbnailSettings {
    /// Decode stored values. Each key is handled independently: a flag is on
    /// only when stored as `yes`, and a missing image size falls back to the
    /// default preset.
    pub fn from_stored(
        recurse: Option<&str>,
        shuffle: Option<&str>,
        image_size: Option<String>,
    ) -> Self {
        Self {
            recurse: decode_flag(recurse),
            shuffle: decode_flag(shuffle),
            image_size: image_size.unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string()),
        }
    }

    /// Key/value pairs as they are persisted
    pub fn to_stored(&self) -> Vec<(&'static str, String)> {
        vec![
            (RECURSE_KEY, encode_flag(self.recurse).to_string()),
            (SHUFFLE_KEY, encode_flag(self.shuffle).to_string()),
            (IMAGE_SIZE_KEY, self.image_size.clone()),
        ]
    }
}

pub fn decode_flag(value: Option<&str>) -> bool {
    value == Some(FLAG_ON)
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        FLAG_ON
    } else {
        FLAG_OFF
    }
}

/// A named image rendering size. A zero dimension means "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSizePreset {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub crop: bool,
}

impl ImageSizePreset {
    pub const fn new(width: u32, height: u32, crop: bool) -> Self {
        Self {
            width,
            height,
            crop,
        }
    }

    /// Human readable label, e.g. `thumbnail (150 x 150, cropped)`
    pub fn label(&self, name: &str) -> String {
        let mut dims = format!("{} x {}", dimension(self.width), dimension(self.height));
        if self.crop {
            dims.push_str(", cropped");
        }
        format!("{} ({})", name, dims)
    }
}

fn dimension(value: u32) -> String {
    if value > 0 {
        value.to_string()
    } else {
        "auto".to_string()
    }
}

pub fn builtin_presets() -> BTreeMap<String, ImageSizePreset> {
    [
        ("thumbnail", ImageSizePreset::new(150, 150, true)),
        ("medium", ImageSizePreset::new(300, 300, false)),
        ("medium_large", ImageSizePreset::new(768, 0, false)),
        ("large", ImageSizePreset::new(1024, 1024, false)),
        (DEFAULT_IMAGE_SIZE, ImageSizePreset::new(300, 300, true)),
        ("shop_catalog", ImageSizePreset::new(600, 600, true)),
        ("shop_single", ImageSizePreset::new(800, 0, false)),
    ]
    .into_iter()
    .map(|(name, preset)| (name.to_string(), preset))
    .collect()
}
