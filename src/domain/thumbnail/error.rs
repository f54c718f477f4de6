use crate::domain::catalog::CategoryId;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ThumbnailServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ThumbnailServiceError {
    fn from(err: AppError) -> Self {
        ThumbnailServiceError::Dependency(err.to_string())
    }
}

impl From<ThumbnailServiceError> for AppError {
    fn from(err: ThumbnailServiceError) -> Self {
        match err {
            ThumbnailServiceError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category {} not found", id))
            }
            ThumbnailServiceError::Dependency(msg) => AppError::Catalog(msg),
            ThumbnailServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
