//! Shared types and models for the Farm Advisory Platform
//!
//! This crate contains types shared between the estimation engine, the
//! frontend, and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
