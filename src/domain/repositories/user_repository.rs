//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user collection.
///
/// The store owns id assignment and the username uniqueness index; callers
/// never supply or recycle ids themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryUserRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users in ascending id order.
    ///
    /// Ids are assigned monotonically, so this is also insertion order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Creates a user and assigns it the next id.
    ///
    /// The username is registered in the uniqueness index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The username is blank or whitespace-only
    /// - The age is not strictly positive
    /// - The username is already present in the uniqueness index
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces the user at `id` with `candidate`, keeping the id fixed.
    ///
    /// The uniqueness index is left untouched: the old username stays
    /// registered and the new one is not re-checked or recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `candidate.id` differs from `id`,
    /// or if the username/age fields are invalid.
    /// Returns [`AppError::NotFound`] if no user exists at `id`.
    async fn update(&self, id: i64, candidate: User) -> Result<User, AppError>;

    /// Deletes the user at `id`, leaving the uniqueness index untouched.
    ///
    /// Returns `Ok(true)` if a user was removed, `Ok(false)` if the id was
    /// absent.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
