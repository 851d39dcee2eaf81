//! Estimation services for the Farm Advisory Platform

pub mod advisor;
pub mod growth;
pub mod metrics;
pub mod suitability;
pub mod yield_forecast;

pub use growth::GrowthService;
pub use metrics::MetricsService;
pub use suitability::SuitabilityService;
