use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::session::Role;

/// Header carrying the role of the client's active session.
pub const ROLE_HEADER: &str = "x-eti-role";

fn role_from_parts(parts: &Parts) -> Result<Role, AppError> {
    let value = parts.headers.get(ROLE_HEADER).ok_or(AppError::Unauthorized)?;
    let raw = value.to_str().map_err(|_| AppError::Unauthorized)?;
    raw.parse::<Role>().map_err(|_| AppError::Unauthorized)
}

/// Any logged-in role.
pub struct ActiveRole(pub Role);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ActiveRole {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        role_from_parts(parts).map(ActiveRole)
    }
}

/// HR manager or admin.
pub struct Management(pub Role);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Management {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = role_from_parts(parts)?;
        if !role.is_management() {
            return Err(AppError::Forbidden);
        }
        Ok(Management(role))
    }
}

/// Only HR managers post jobs.
pub struct HrManager;

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for HrManager {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match role_from_parts(parts)? {
            Role::HrManager => Ok(HrManager),
            _ => Err(AppError::Forbidden),
        }
    }
}
