//! Registration and login.

use actix_web::{HttpResponse, web};

use dreamlog_core::DomainError;
use dreamlog_core::domain::User;
use dreamlog_core::ports::{AuthError, BaseRepository};
use dreamlog_shared::dto::{AuthResponse, CreatedResponse, LoginRequest, RegisterUserRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_registration(req: &RegisterUserRequest) -> AppResult<()> {
    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_registration(&req)?;

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(DomainError::Duplicate("Email already registered".to_string()).into());
    }

    let password_hash = state.passwords.hash(&req.password)?;

    let user = User::new(req.username.trim().to_string(), req.email, password_hash);
    let saved_user = state.users.save(user).await?;

    tracing::info!(user_id = %saved_user.id, "User registered");

    Ok(HttpResponse::Created().json(CreatedResponse {
        id: saved_user.id.to_string(),
    }))
}

/// POST /api/users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
    }))
}
