//! Bearer token validation middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Validates the `Authorization: Bearer <token>` header on every request.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// Short-circuits before the logging stage or any handler runs. A request
/// without a well-formed bearer header is rejected before the token is even
/// looked at; a well-formed token is handed to
/// [`crate::application::services::AuthService`] for verification.
///
/// # Errors
///
/// Returns `401 Unauthorized` with:
/// - `Unauthorized: Missing or invalid token.` when the header is absent or
///   not a bearer header
/// - `Unauthorized: Token validation failed.` when the verifier rejects the
///   token
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Unauthorized: Missing or invalid token."))?;

    let req = Request::from_parts(parts, body);

    st.auth.authenticate(&token).await?;

    Ok(next.run(req).await)
}
