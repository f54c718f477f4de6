use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("settings section not found: {0}")]
    SectionNotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SettingsServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SettingsServiceError::Invalid(msg),
            _ => SettingsServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SettingsServiceError> for AppError {
    fn from(err: SettingsServiceError) -> Self {
        match err {
            SettingsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SettingsServiceError::SectionNotFound(id) => {
                AppError::NotFound(format!("Settings section {}", id))
            }
            SettingsServiceError::Dependency(msg) => AppError::Internal(msg),
            SettingsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
