//! Authentication handlers for login, registration, and token refresh.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{
    ErrorResponse, LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse,
    RegisterRequest, RegisterResponse, UserResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::{generate_token_pair, validate_refresh_token};
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /login` - Authenticate user and get tokens
/// - `POST /register` - Register new user and get tokens
/// - `POST /refresh` - Refresh access token using refresh token
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(register))
        .routes(routes!(refresh_token))
}

/// POST /api/auth/login - Authenticate user
///
/// Authenticates a user with email and password, returns the profile
/// projection and a JWT token pair.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let user = state
        .services
        .auth
        .login(&payload.email, &payload.password)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email.clone(),
        user.username.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = LoginResponse {
        user: UserResponse::from(user),
        access_token,
        refresh_token,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/auth/register - Register new user
///
/// Creates a new customer account and returns JWT tokens. The password is
/// hashed by the auth service before storage.
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 409, description = "Email or username already taken", body = ErrorResponse)
    )
)]
async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let user = state
        .services
        .auth
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email.clone(),
        user.username.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = RegisterResponse {
        user: UserResponse::from(user),
        access_token,
        refresh_token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/refresh - Refresh access token
///
/// Validates the refresh token and issues new access and refresh tokens.
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens refreshed successfully", body = RefreshTokenResponse),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse)
    )
)]
async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let claims = validate_refresh_token(&payload.refresh_token, &state.jwt_config.secret)?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| crate::error::AppError::Unauthorized {
            message: "Invalid user ID in token".to_string(),
        })?;

    // Verify user still exists
    let user = state
        .services
        .auth
        .require_user(user_id)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email.clone(),
        user.username.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = RefreshTokenResponse {
        access_token,
        refresh_token,
    };

    Ok(Json(response))
}
