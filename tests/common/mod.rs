#![allow(dead_code)]

use std::sync::Arc;

use user_directory::application::services::{AuthService, StaticTokenVerifier};
use user_directory::infrastructure::memory::MemoryUserRepository;
use user_directory::state::AppState;

/// The token the test verifier accepts.
pub const TEST_TOKEN: &str = "valid-token-example";

/// Builds an [`AppState`] with an empty store and the static test token.
pub fn create_test_state() -> AppState {
    let verifier = Arc::new(StaticTokenVerifier::new(TEST_TOKEN));

    AppState {
        users: Arc::new(MemoryUserRepository::new()),
        auth: Arc::new(AuthService::new(verifier)),
    }
}

/// Formats a bearer `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
