//! Request body for the user endpoints.

use serde::Deserialize;

use crate::domain::entities::{NewUser, User};

/// Request body shared by create and update.
///
/// All fields default when absent so that field-level validation happens in
/// the store (with its own messages) rather than at the JSON layer. `id`
/// defaults to 0: create ignores it entirely, update requires it to match
/// the path id.
#[derive(Debug, Deserialize)]
pub struct UserBody {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default, rename = "userage")]
    pub age: i32,
}

impl UserBody {
    /// Conversion for create: drops the client-supplied id.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username,
            age: self.age,
        }
    }

    /// Conversion for update: keeps the client-supplied id so the store can
    /// compare it against the path id.
    pub fn into_candidate(self) -> User {
        User {
            id: self.id,
            username: self.username,
            age: self.age,
        }
    }
}
