//! Shared types for the Gantry console
//!
//! Common types used across the console crates: billing and plan models,
//! health-source metric trees, error vocabulary and response structures.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
pub use response::ApiResponse;
