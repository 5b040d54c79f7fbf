//! Route table for the users API.

use axum::{Router, routing::get};

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;

/// The five user endpoints.
///
/// # Endpoints
///
/// - `GET    /users`      - list all users
/// - `POST   /users`      - create a user
/// - `GET    /users/{id}` - fetch one user
/// - `PUT    /users/{id}` - replace a user
/// - `DELETE /users/{id}` - delete a user
///
/// `{id}` only matches integer path segments; everything else falls through
/// to the router's not-found handling.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
