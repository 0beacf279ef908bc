//! # User Handlers
//!
//! Registration, login and the authenticated user's data.
//!
//! Both register and login answer with a fresh token. Login reports every
//! failure with the same message, whether the email is unknown or the password
//! wrong, and both paths run a full password verification.

use axum::extract::{Extension, Json, State};
use lib_auth::{dummy_verify, hash_password, issue_token, verify_password};
use lib_core::model::store::{models::UserForCreate, user_repository::USER_EXISTS_MESSAGE, UserRepository};
use lib_core::{AppError, Config, DbPool, Result};
use lib_utils::{normalize_email, validate_email, validate_not_empty};
use shared::dto::{LoginRequest, RegisterRequest, TokenResponse, UserDataResponse, UserInfo};
use tracing::{debug, info, instrument, warn};

use crate::extract::ApiJson;
use crate::middleware::CurrentUser;

/// Register handler - creates a user and returns a token.
///
/// # Validation
///
/// - Name must not be empty
/// - Email must be well formed (stored trimmed and lower-cased)
/// - Email must not be registered yet
/// - Password must be at least 8 characters (checked by `hash_password`)
#[instrument(skip_all, fields(email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<TokenResponse>> {
    info!("[REGISTER] New registration request");

    let name = req.name.trim();
    validate_not_empty(name, "Name").map_err(AppError::InvalidInput)?;

    let email = normalize_email(&req.email);
    validate_email(&email).map_err(AppError::InvalidInput)?;

    if UserRepository::find_by_email(&pool, &email).await?.is_some() {
        warn!("[REGISTER] Email already registered");
        return Err(AppError::Conflict(USER_EXISTS_MESSAGE.to_string()));
    }

    debug!("[REGISTER] Hashing password...");
    let password_hash = hash_password(&req.password)?;

    let user = UserRepository::create(
        &pool,
        UserForCreate::new(name.to_string(), email, password_hash),
        config.initial_credits,
    )
    .await?;

    let token = issue_token(&user.id, &config.jwt_secret, config.token_ttl())?;

    info!(user_id = %user.id, "[REGISTER] User registered");
    Ok(Json(TokenResponse::ok(token)))
}

/// Login handler - authenticates an existing user.
#[instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    info!("[LOGIN] Login attempt");

    let email = normalize_email(&req.email);

    let Some(user) = UserRepository::find_by_email(&pool, &email).await? else {
        dummy_verify(&req.password);
        warn!("[LOGIN] Rejected credentials");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&req.password, &user.password_hash)? {
        warn!("[LOGIN] Rejected credentials");
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&user.id, &config.jwt_secret, config.token_ttl())?;

    info!(user_id = %user.id, "[LOGIN] User authenticated");
    Ok(Json(TokenResponse::ok(token)))
}

/// Current user handler.
///
/// A valid token whose user no longer resolves is treated as unauthorized so
/// the client drops it.
#[instrument(skip_all, fields(user_id = %current.user_id))]
pub async fn get_user_data(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<UserDataResponse>> {
    let user = UserRepository::find_by_id(&pool, &current.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Not authorized, user not found".to_string()))?;

    Ok(Json(UserDataResponse::ok(UserInfo::from(&user))))
}

#[cfg(test)]
mod tests;
