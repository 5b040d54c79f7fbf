//! Handlers for the user CRUD endpoints.
//!
//! Each handler is a thin adapter: translate the HTTP-shaped input into a
//! repository call and map the outcome to a status code. Store messages pass
//! through to the client verbatim.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{AppendHeaders, IntoResponse},
};

use crate::api::dto::UserBody;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users` - 200 with a JSON array in id order.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.users.list().await?))
}

/// Fetches a single user by id.
///
/// # Endpoint
///
/// `GET /users/{id}` - 200 with the user, 404 when the id is unknown.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user))
}

/// Creates a user. The store assigns the id; any id in the body is ignored.
///
/// # Endpoint
///
/// `POST /users` - 201 with the created user and a `Location` header
/// pointing at it, 400 with the validation reason otherwise.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.create(payload.into_new_user()).await?;
    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, location)]),
        Json(user),
    ))
}

/// Replaces the user at `{id}`.
///
/// # Endpoint
///
/// `PUT /users/{id}` - 200 with the updated user; 400 when the body id does
/// not match the path or a field is invalid; 404 when the id is unknown.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserBody>,
) -> Result<Json<User>, AppError> {
    let user = state.users.update(id, payload.into_candidate()).await?;

    Ok(Json(user))
}

/// Deletes the user at `{id}`.
///
/// # Endpoint
///
/// `DELETE /users/{id}` - 200 with a confirmation message, 404 when the id
/// is unknown.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<&'static str, AppError> {
    if !state.users.delete(id).await? {
        return Err(AppError::not_found("User not found"));
    }

    Ok("User deleted")
}
