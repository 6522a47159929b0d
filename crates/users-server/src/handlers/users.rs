use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use users_shared::{
    api::{
        CreateUserRequest, DeleteUserResponse, GenerateUsersRequest, GenerateUsersResponse,
        UpdateUserRequest, UserListParams, UserListResponse, UserResponse,
    },
    UserRole,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::routes::AppState;
use crate::store::UserFilter;

const DEFAULT_GENERATE_COUNT: i64 = 5;

/// Ids are opaque to clients, so anything that is not a UUID simply names no user.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound)
}

/// Builds the store filter from raw query values. Returns `None` when the
/// requested role names no known role, in which case nothing can match.
fn list_filter(params: &UserListParams) -> Option<UserFilter> {
    let role = match params.role.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<UserRole>().ok()?),
    };

    Some(UserFilter {
        role,
        is_active: params.is_active(),
    })
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> Json<UserListResponse> {
    let data = match list_filter(&params) {
        Some(filter) => state.store.list(&filter).await,
        None => {
            tracing::debug!(role = ?params.role, "unknown role filter, returning no users");
            Vec::new()
        }
    };

    Json(UserListResponse {
        total: data.len(),
        data,
    })
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = state.store.get(id).await.ok_or(AppError::NotFound)?;

    Ok(Json(UserResponse { data: user }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> (StatusCode, Json<UserResponse>) {
    let user = state.store.create(req).await;
    tracing::info!(id = %user.id, email = %user.email, "user created");

    (StatusCode::CREATED, Json(UserResponse { data: user }))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = state
        .store
        .update(id, req)
        .await
        .ok_or(AppError::NotFound)?;
    tracing::info!(id = %user.id, "user updated");

    Ok(Json(UserResponse { data: user }))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = state.store.delete(id).await.ok_or(AppError::NotFound)?;
    tracing::info!(id = %user.id, "user deleted");

    Ok(Json(DeleteUserResponse {
        data: user,
        message: "User deleted successfully".to_string(),
    }))
}

/// GET, PUT or DELETE on a path segment that can never be a user id.
pub async fn user_not_found() -> AppError {
    AppError::NotFound
}

/// POST /users/generate
///
/// The body is optional; a missing or unreadable body generates the default count.
pub async fn generate_users(
    State(state): State<AppState>,
    body: Option<Json<GenerateUsersRequest>>,
) -> Result<(StatusCode, Json<GenerateUsersResponse>), AppError> {
    let count = body
        .and_then(|Json(req)| req.count)
        .unwrap_or(DEFAULT_GENERATE_COUNT);

    let max = state.config.max_generate_count;
    let count = usize::try_from(count)
        .ok()
        .filter(|c| *c <= max)
        .ok_or_else(|| {
            AppError::Validation(format!("count must be between 0 and {}", max))
        })?;

    let (data, total) = state.store.generate(count).await;
    tracing::info!(count, total, "generated users");

    Ok((
        StatusCode::CREATED,
        Json(GenerateUsersResponse {
            data,
            message: format!("Generated {} new users", count),
            total,
        }),
    ))
}
