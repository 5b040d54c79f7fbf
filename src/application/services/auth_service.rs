//! Authentication service for API token validation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;

/// Single-method credential verifier.
///
/// The pipeline only ever asks whether a presented token is acceptable.
/// Replacing the static comparison with real credential verification
/// (signatures, expiry) means providing another implementation of this trait;
/// the pipeline's control flow does not change.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Returns `Ok(true)` when the token is acceptable.
    async fn verify(&self, token: &str) -> Result<bool, AppError>;
}

/// Verifier that accepts exactly one configured token value.
///
/// Comparison is a byte-exact match; no trimming, no case folding.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<bool, AppError> {
        Ok(token == self.token)
    }
}

/// Service for authenticating API requests via bearer tokens.
pub struct AuthService {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Authenticates a raw token against the configured verifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the verifier rejects the
    /// token.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if !self.verifier.verify(token).await? {
            return Err(AppError::unauthorized(
                "Unauthorized: Token validation failed.",
            ));
        }
        Ok(())
    }
}
