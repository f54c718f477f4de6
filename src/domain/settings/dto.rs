use serde::{Deserialize, Serialize};

/// Request for PATCH /api/settings/thumbnails. Absent fields are left as-is.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateThumbnailSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsSectionSummary {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One entry of a settings section, in display order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsField {
    Title {
        id: String,
        name: String,
    },
    Select {
        id: String,
        name: String,
        desc: String,
        options: Vec<SelectOption>,
        value: String,
    },
    Checkbox {
        id: String,
        name: String,
        desc: String,
        value: bool,
    },
    SectionEnd {
        id: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsSectionResponse {
    pub id: String,
    pub title: String,
    pub fields: Vec<SettingsField>,
}
