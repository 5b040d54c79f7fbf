//! Top-level router: the users API wrapped in the request pipeline.
//!
//! # Pipeline
//!
//! Outermost to innermost:
//!
//! 1. **Exception containment** - panics anywhere downstream become a fixed
//!    500 response and the process keeps serving
//! 2. **Token validation** - bearer token check; unauthenticated requests
//!    never reach the logging stage or a handler
//! 3. **Logging** - method/path on entry, status on exit, never
//!    short-circuits

use axum::{Router, middleware};

use crate::api::middleware::{auth, catch_panic, trace};
use crate::api::routes::user_routes;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    pipeline(user_routes(), state)
}

/// Wraps `routes` in the three-stage request pipeline.
///
/// Layer registration is inner-to-outer: the trace layer registered first
/// ends up closest to the handlers, the catch-panic layer registered last
/// ends up outermost. Containment has to sit outside token validation so it
/// also covers faults raised there.
pub fn pipeline(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(trace::layer())
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(catch_panic::layer())
        .with_state(state)
}
