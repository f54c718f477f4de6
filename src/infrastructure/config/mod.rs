use crate::domain::settings::ImageSizePreset;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Image shown for categories with neither an explicit nor a product thumbnail
    pub placeholder_image_url: String,
    /// Image size presets registered on top of the built-in ones
    pub extra_image_sizes: BTreeMap<String, ImageSizePreset>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            placeholder_image_url: env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|_| "/static/placeholder.png".to_string()),
            extra_image_sizes: parse_image_sizes(env::var("EXTRA_IMAGE_SIZES").ok().as_deref())?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Parse `{"banner": {"width": 1200, "height": 0, "crop": false}}`
pub fn parse_image_sizes(
    raw: Option<&str>,
) -> Result<BTreeMap<String, ImageSizePreset>, serde_json::Error> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw),
        _ => Ok(BTreeMap::new()),
    }
}
