//! In-memory user repository.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Mutable store state.
///
/// Guarded by a single mutex so that id assignment and the uniqueness check
/// inside each operation form one atomic read-modify-write sequence.
#[derive(Debug)]
struct StoreInner {
    /// Users keyed by id. Ids grow monotonically, so ascending-key iteration
    /// equals insertion order.
    users: BTreeMap<i64, User>,
    /// Usernames ever registered through `create`.
    ///
    /// `update` and `delete` leave this set untouched: a username stays
    /// reserved after its user is renamed or deleted, and a username
    /// introduced through `update` is never reserved at all. Inherited
    /// behavior, kept as-is.
    usernames: HashSet<String>,
    /// Next id to hand out. Never decremented, so deleted ids are not reused.
    next_id: i64,
}

/// In-memory [`UserRepository`] backed by a mutex-guarded id map and
/// username index.
///
/// Operations never suspend; each one holds the lock for the duration of its
/// critical section only.
pub struct MemoryUserRepository {
    inner: Mutex<StoreInner>,
}

impl MemoryUserRepository {
    /// Creates an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: BTreeMap::new(),
                usernames: HashSet::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Field-level checks shared by create and update.
fn validate_fields(username: &str, age: i32) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::bad_request("Username cannot be empty."));
    }
    if age <= 0 {
        return Err(AppError::bad_request("Age must be greater than zero."));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.lock().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.lock().users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.lock();

        validate_fields(&new_user.username, new_user.age)?;
        if inner.usernames.contains(&new_user.username) {
            return Err(AppError::bad_request("Username already exists."));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            username: new_user.username,
            age: new_user.age,
        };
        inner.usernames.insert(user.username.clone());
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, candidate: User) -> Result<User, AppError> {
        let mut inner = self.inner.lock();

        if candidate.id != id {
            return Err(AppError::bad_request(
                "User id in body does not match the path.",
            ));
        }
        if !inner.users.contains_key(&id) {
            return Err(AppError::not_found("User not found"));
        }
        validate_fields(&candidate.username, candidate.age)?;

        let user = User {
            id,
            username: candidate.username,
            age: candidate.age,
        };
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().users.remove(&id).is_some())
    }
}
