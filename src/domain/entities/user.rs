//! User entity for the directory.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The wire representation is `{"id": int, "username": string, "userage": int}`;
/// the `age` field serializes under the `userage` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Positive, unique, assigned by the store on creation, immutable after.
    pub id: i64,
    pub username: String,
    #[serde(rename = "userage")]
    pub age: i32,
}

/// Input data for creating a user.
///
/// Carries no id on purpose: id assignment belongs to the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_age_as_userage() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            age: 25,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "id": 1, "username": "alice", "userage": 25 }));
    }

    #[test]
    fn test_user_deserializes_from_wire_shape() {
        let user: User =
            serde_json::from_value(json!({ "id": 7, "username": "bob", "userage": 41 })).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "bob");
        assert_eq!(user.age, 41);
    }

    #[test]
    fn test_new_user_creation() {
        let new_user = NewUser {
            username: "carol".to_string(),
            age: 30,
        };

        assert_eq!(new_user.username, "carol");
        assert_eq!(new_user.age, 30);
    }
}
