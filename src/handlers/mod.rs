//! HTTP handlers for the Todo resource and the common operational routes.

pub mod common;
pub mod todo;
pub use todo::*;
