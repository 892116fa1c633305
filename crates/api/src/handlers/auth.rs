//! Handler for the `/login` endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tribunal_core::error::CoreError;
use tribunal_db::models::user::UserResponse;
use tribunal_db::repositories::UserRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response. No token or session is issued; the client
/// keeps the returned user id and sends it back as `evaluator_id` later.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with email + password: 400 when either field is missing,
/// 404 for an unknown email, 401 for a wrong password. The response never
/// carries the password hash.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Both fields are required.
    if input.email.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    // 2. Find user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    // 3. Accounts without a stored hash cannot authenticate until one is
    //    set with create-user.
    let Some(hash) = user.password_hash.as_deref() else {
        tracing::warn!(
            user_id = user.id,
            "Login attempt for account without a password hash"
        );
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    };

    // 4. Verify password.
    let password_valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
