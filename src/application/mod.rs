//! Application layer services.
//!
//! This layer hosts logic that sits between the HTTP surface and the domain,
//! currently token authentication.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - bearer token authentication

pub mod services;
