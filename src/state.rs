//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::AuthService;
use crate::domain::repositories::UserRepository;

/// Process-wide shared state.
///
/// Cheap to clone; every field is a shared handle. The repository is the
/// sole owner of all user records.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub auth: Arc<AuthService>,
}
