//! Farm Advisory Platform - Estimation Engine
//!
//! Pure, synchronous estimation of crop suitability, growth progress and
//! derived farm metrics from a farm snapshot and an evaluation date.
//! The engine keeps no state beyond its immutable crop catalog: every
//! call receives its inputs, returns a fresh result, and performs no I/O.

pub mod catalog;
pub mod error;
pub mod services;

pub use catalog::{CropCatalog, DEFAULT_GROWTH_CURVE};
pub use error::{EngineError, EngineResult};
pub use services::{GrowthService, MetricsService, SuitabilityService};
