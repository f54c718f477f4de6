use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::{domain::auth::JwtManager, error::AppError};

/// Administrator context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub subject: String,
}

/// Requires a bearer token carrying the admin role
pub async fn admin_auth_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone());
    let claims = jwt_manager.validate_token(token)?;

    if !claims.is_admin() {
        return Err(AppError::Forbidden(
            "Settings can only be changed by an administrator".to_string(),
        ));
    }

    request.extensions_mut().insert(AuthAdmin {
        subject: claims.sub,
    });

    Ok(next.run(request).await)
}
