//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user
//! - [`NewUser`] - Input data for creating a user (the store assigns the id)

pub mod user;

pub use user::{NewUser, User};
