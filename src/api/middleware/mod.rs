//! The three-stage request pipeline.
//!
//! Stage order is load-bearing and fixed in [`crate::routes::pipeline`]:
//! [`catch_panic`] outermost, then [`auth`], then [`trace`] closest to the
//! handlers.

pub mod auth;
pub mod catch_panic;
pub mod trace;
