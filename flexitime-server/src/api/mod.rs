//! API route module
//!
//! - [`employees`] - employee management
//! - [`convert`] - database model to API model conversion
//! - [`extract`] - request extractors with uniform rejections

pub mod convert;
pub mod extract;

pub mod employees;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
